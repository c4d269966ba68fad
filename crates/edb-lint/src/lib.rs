pub mod engine;
pub mod rules;
pub mod units;

pub use engine::{LintRule, RuleEngine};
pub use rules::default_rules;
pub use units::{ALLOWED_UNITS, is_allowed_unit};
