#![forbid(unsafe_code)]

//! Inspector Checker: query preparation for AWS Inspector reports
//!
//! Validates the raw command-line input of a coverage or findings report
//! request and resolves it into one immutable, internally consistent query
//! specification, or rejects the invocation with a precise diagnostic
//! before anything is queried.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod types;
pub mod validate;
