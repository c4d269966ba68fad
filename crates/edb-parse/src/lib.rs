pub mod db;

pub use db::parse_db;
