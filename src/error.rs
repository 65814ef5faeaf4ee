#![forbid(unsafe_code)]

//! Typed failures raised while building a query specification
//!
//! Exactly two failure kinds exist. A [`ValidationError`] means one field's
//! raw token failed its own grammar or domain check; a
//! [`ConstraintViolation`] means every field was individually fine but a
//! cross-field rule rejected the combination. Both are terminal for the
//! invocation.

use thiserror::Error;

/// A single field's raw token was rejected by its validator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("argument --{field}: {reason}: {token}")]
pub struct ValidationError {
    /// Long name of the flag whose value was rejected.
    pub field: &'static str,
    /// What the validator expected.
    pub reason: &'static str,
    /// The raw token exactly as supplied.
    pub token: String,
}

impl ValidationError {
    /// Creates a new ValidationError for the given flag.
    pub fn new(field: &'static str, reason: &'static str, token: impl Into<String>) -> Self {
        ValidationError {
            field,
            reason,
            token: token.into(),
        }
    }
}

/// A cross-field rule rejected an otherwise valid combination of fields.
///
/// Each variant names the rule that fired; resolution stops at the first
/// violation, so an invocation reports at most one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// Two time-window flags were combined.
    #[error("argument --{0}: not allowed with argument --{1}")]
    TimeWindowConflict(&'static str, &'static str),

    /// `--year` was supplied without `--month`.
    #[error("argument --month: required when --year is specified")]
    YearWithoutMonth,

    /// The requested year lies after the current year.
    #[error("argument --year: cannot be in the future")]
    YearInFuture,

    /// The requested month lies after the current month of the current year.
    #[error("arguments --month and --year: cannot be in the future")]
    MonthInFuture,

    /// `--instance-id` was supplied without exactly one region.
    #[error("argument --region: exactly one region required when --instance-id is specified")]
    InstanceIdWithoutRegion,

    /// `--detailed` was combined with `--cve-id`.
    #[error("argument --detailed: not allowed with argument --cve-id")]
    DetailedWithCveId,

    /// `--detailed` was combined with `--instance-id`.
    #[error("argument --detailed: not allowed with argument --instance-id")]
    DetailedWithInstanceId,
}

/// Either failure kind, for callers driving the whole pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),
}
