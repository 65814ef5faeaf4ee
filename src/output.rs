//! Resolved-query output formatting

pub mod human;
pub mod json;

pub use human::HumanFormatter;
pub use json::JsonFormatter;
