#![forbid(unsafe_code)]

//! Constraint resolution: normalized fields to a query specification
//!
//! The resolver applies the cross-field rules in a fixed order and stops
//! at the first violation, then fills every absent field with its default.
//! The current date is an explicit parameter so month and year reasoning
//! stays deterministic under test; resolution itself never reads a clock.

use crate::config;
use crate::error::ConstraintViolation;
use crate::types::{CveId, FindingStatus, FindingType, InstanceId, Region, Severity};
use chrono::{Datelike, Month, NaiveDate};
use serde::{Serialize, Serializer};

/// Normalized fields of a findings invocation, `None` where the flag was
/// not supplied.
#[derive(Debug, Clone, Default)]
pub struct FindingsInput {
    pub regions: Option<Vec<Region>>,
    pub severities: Option<Vec<Severity>>,
    pub finding_type: Option<FindingType>,
    pub finding_statuses: Option<Vec<FindingStatus>>,
    pub cve_id: Option<CveId>,
    pub instance_id: Option<InstanceId>,
    pub hours: Option<u32>,
    pub days: Option<u32>,
    pub month: Option<Month>,
    pub year: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub detailed: bool,
    pub skip_public_exploit_check: bool,
    pub output: bool,
}

/// Normalized fields of a coverage invocation.
#[derive(Debug, Clone, Default)]
pub struct CoverageInput {
    pub regions: Option<Vec<Region>>,
    pub detailed: bool,
    pub output: bool,
}

/// The resolved time constraint. At most one shape survives resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeWindow {
    /// Findings created within the last N hours.
    Hours(u32),
    /// Findings created within the last N days.
    Days(u32),
    /// One calendar month; the year was supplied or defaulted to the
    /// current one.
    Month {
        #[serde(serialize_with = "month_name")]
        month: Month,
        year: i32,
    },
    /// An explicit date range, open on whichever side was not given.
    Range {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

fn month_name<S: Serializer>(month: &Month, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(month.name())
}

/// A fully resolved coverage query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageQuery {
    pub regions: Vec<Region>,
    pub detailed: bool,
    pub output: bool,
}

/// A fully resolved findings query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindingsQuery {
    pub regions: Vec<Region>,
    pub severities: Vec<Severity>,
    pub finding_type: FindingType,
    pub finding_statuses: Vec<FindingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cve_id: Option<CveId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<InstanceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_window: Option<TimeWindow>,
    pub detailed: bool,
    pub skip_public_exploit_check: bool,
    pub output: bool,
}

/// The immutable query specification handed to the execution layer.
///
/// Every cross-field rule holds by construction; nothing mutates a spec
/// after resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "task", rename_all = "snake_case")]
pub enum QuerySpec {
    Coverage(CoverageQuery),
    Findings(FindingsQuery),
}

/// Resolves a coverage invocation.
///
/// Coverage has no cross-field rules, so this cannot fail; absent regions
/// default to every supported region.
pub fn resolve_coverage(input: CoverageInput) -> QuerySpec {
    QuerySpec::Coverage(CoverageQuery {
        regions: input.regions.unwrap_or_else(all_regions),
        detailed: input.detailed,
        output: input.output,
    })
}

/// Resolves a findings invocation against the cross-field rules.
///
/// Checks run in a fixed order and the first violation aborts resolution.
/// `today` anchors the month and year future checks.
pub fn resolve_findings(
    input: FindingsInput,
    today: NaiveDate,
) -> Result<QuerySpec, ConstraintViolation> {
    let time_window = resolve_time_window(&input, today)?;

    let regions = input.regions.unwrap_or_else(all_regions);
    if input.instance_id.is_some() && regions.len() != 1 {
        return Err(ConstraintViolation::InstanceIdWithoutRegion);
    }

    // A CVE search inspects every severity, whatever was asked for.
    let severities = if input.cve_id.is_some() {
        config::FINDING_SEVERITIES.to_vec()
    } else {
        input
            .severities
            .unwrap_or_else(|| config::DEFAULT_SEVERITIES.to_vec())
    };

    if input.detailed && input.cve_id.is_some() {
        return Err(ConstraintViolation::DetailedWithCveId);
    }
    if input.detailed && input.instance_id.is_some() {
        return Err(ConstraintViolation::DetailedWithInstanceId);
    }

    Ok(QuerySpec::Findings(FindingsQuery {
        regions,
        severities,
        finding_type: input.finding_type.unwrap_or(config::DEFAULT_FINDING_TYPE),
        finding_statuses: input
            .finding_statuses
            .unwrap_or_else(|| vec![config::DEFAULT_FINDING_STATUS]),
        cve_id: input.cve_id,
        instance_id: input.instance_id,
        time_window,
        detailed: input.detailed,
        skip_public_exploit_check: input.skip_public_exploit_check,
        output: input.output,
    }))
}

/// Applies the time-window rules: shape exclusivity, year-requires-month
/// and the future check, in that order.
fn resolve_time_window(
    input: &FindingsInput,
    today: NaiveDate,
) -> Result<Option<TimeWindow>, ConstraintViolation> {
    // Pairwise exclusivity between the relative and month shapes.
    if input.hours.is_some() && input.days.is_some() {
        return Err(ConstraintViolation::TimeWindowConflict("days", "hours"));
    }
    if input.hours.is_some() && input.month.is_some() {
        return Err(ConstraintViolation::TimeWindowConflict("month", "hours"));
    }
    if input.days.is_some() && input.month.is_some() {
        return Err(ConstraintViolation::TimeWindowConflict("month", "days"));
    }

    // Explicit dates cannot be combined with any of the shapes above.
    let shape = [
        (input.hours.is_some(), "hours"),
        (input.days.is_some(), "days"),
        (input.month.is_some(), "month"),
    ]
    .iter()
    .find(|(present, _)| *present)
    .map(|(_, flag)| *flag);
    if let Some(flag) = shape {
        if input.start_date.is_some() {
            return Err(ConstraintViolation::TimeWindowConflict("start-date", flag));
        }
        if input.end_date.is_some() {
            return Err(ConstraintViolation::TimeWindowConflict("end-date", flag));
        }
    }

    // A bare year constrains nothing.
    if input.year.is_some() && input.month.is_none() {
        return Err(ConstraintViolation::YearWithoutMonth);
    }

    if let Some(hours) = input.hours {
        return Ok(Some(TimeWindow::Hours(hours)));
    }
    if let Some(days) = input.days {
        return Ok(Some(TimeWindow::Days(days)));
    }
    if let Some(month) = input.month {
        let year = input.year.unwrap_or(today.year());
        if year > today.year() {
            return Err(ConstraintViolation::YearInFuture);
        }
        if year == today.year() && month.number_from_month() > today.month() {
            return Err(ConstraintViolation::MonthInFuture);
        }
        return Ok(Some(TimeWindow::Month { month, year }));
    }
    if input.start_date.is_some() || input.end_date.is_some() {
        return Ok(Some(TimeWindow::Range {
            start: input.start_date,
            end: input.end_date,
        }));
    }
    Ok(None)
}

fn all_regions() -> Vec<Region> {
    config::SUPPORTED_REGIONS
        .iter()
        .copied()
        .map(Region::new)
        .collect()
}
