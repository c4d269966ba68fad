pub mod json;
pub mod junit;

pub use json::write_json_report;
pub use junit::write_junit_report;
