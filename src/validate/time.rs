#![forbid(unsafe_code)]

//! Temporal field validators
//!
//! Hour and day counts, month names, four digit years and explicit dates.
//! Everything that relates these fields to each other or to the current
//! date belongs to the resolver; validators here look at one token at a
//! time.

use crate::config;
use crate::error::ValidationError;
use chrono::{Month, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{4}$").unwrap());

/// Full month names in calendar order.
const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Validates an hour count: a base-10 integer strictly greater than zero.
pub fn hours(raw: &str) -> Result<u32, ValidationError> {
    positive_count("hours", raw)
}

/// Validates a day count: a base-10 integer strictly greater than zero.
pub fn days(raw: &str) -> Result<u32, ValidationError> {
    positive_count("days", raw)
}

fn positive_count(field: &'static str, raw: &str) -> Result<u32, ValidationError> {
    match raw.parse::<u32>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(ValidationError::new(field, "must be a positive integer", raw)),
    }
}

/// Validates a month given as a full English month name, in any letter
/// case. Abbreviations are not accepted.
pub fn month(raw: &str) -> Result<Month, ValidationError> {
    let canonical = capitalize(raw);
    MONTHS
        .iter()
        .copied()
        .find(|m| m.name() == canonical)
        .ok_or_else(|| ValidationError::new("month", "invalid month", raw))
}

/// First letter upper-cased, the rest lower-cased, matching how the month
/// names are written.
fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Validates a year: exactly four ASCII digits.
///
/// Shorter years are chronologically meaningful but outside the accepted
/// grammar.
pub fn year(raw: &str) -> Result<i32, ValidationError> {
    if !YEAR_RE.is_match(raw) {
        return Err(ValidationError::new("year", "must be a four digit year", raw));
    }
    raw.parse::<i32>()
        .map_err(|_| ValidationError::new("year", "must be a four digit year", raw))
}

/// Validates a start date in the fixed `MM-DD-YYYY` pattern.
pub fn start_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    date("start-date", raw)
}

/// Validates an end date in the fixed `MM-DD-YYYY` pattern.
pub fn end_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    date("end-date", raw)
}

fn date(field: &'static str, raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw, config::DATE_FORMAT)
        .map_err(|_| ValidationError::new(field, "invalid date, expected MM-DD-YYYY", raw))
}
