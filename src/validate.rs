#![forbid(unsafe_code)]

//! Field validators: raw command-line tokens to normalized domain values
//!
//! One pure function per field kind. Each looks at a single token in
//! isolation and either returns the normalized value or a
//! [`ValidationError`](crate::error::ValidationError) naming the flag, the
//! expectation and the offending token. Rules that relate fields to each
//! other live in the resolver, never here.

pub mod fields;
pub mod ids;
pub mod time;

// Re-export the validators for convenient access
pub use fields::{finding_status, finding_type, region, severities};
pub use ids::{cve_id, instance_id};
pub use time::{days, end_date, hours, month, start_date, year};
