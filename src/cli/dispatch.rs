#![forbid(unsafe_code)]

//! Command dispatch: raw arguments through validation and resolution to a
//! printed query specification
//!
//! Diagnostics go to stderr and any rejected invocation exits with code 2,
//! the same code clap uses for flag-syntax errors, so callers see one
//! contract for every kind of bad input.

use crate::cli::args::{Cli, Command, CoverageArgs, FindingsArgs, OutputFormat};
use crate::config;
use crate::engine::resolver::{self, CoverageInput, FindingsInput, QuerySpec};
use crate::error::{QueryError, ValidationError};
use crate::output::{HumanFormatter, JsonFormatter};
use crate::types::Region;
use crate::validate;
use chrono::{Local, NaiveDate};
use std::io::IsTerminal;
use termcolor::ColorChoice;

/// Exit code for a resolved and printed query.
const EXIT_SUCCESS: i32 = 0;
/// Exit code for any rejected invocation.
const EXIT_USAGE: i32 = 2;

/// Runs one invocation end to end and returns the process exit code.
///
/// This is the only place that reads the clock; everything below it takes
/// the current date as a value.
pub fn run(cli: Cli) -> i32 {
    let today = Local::now().date_naive();
    match build_spec(&cli.command, today) {
        Ok(spec) => {
            print_spec(&spec, cli.format);
            EXIT_SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            EXIT_USAGE
        }
    }
}

/// Validates and resolves one invocation into a query specification.
pub fn build_spec(command: &Command, today: NaiveDate) -> Result<QuerySpec, QueryError> {
    match command {
        Command::Coverage(args) => Ok(resolver::resolve_coverage(coverage_input(args)?)),
        Command::Findings(args) => {
            let input = findings_input(args)?;
            Ok(resolver::resolve_findings(input, today)?)
        }
    }
}

fn coverage_input(args: &CoverageArgs) -> Result<CoverageInput, ValidationError> {
    Ok(CoverageInput {
        regions: regions_input(&args.regions)?,
        detailed: args.detailed,
        output: args.output,
    })
}

fn findings_input(args: &FindingsArgs) -> Result<FindingsInput, ValidationError> {
    Ok(FindingsInput {
        regions: regions_input(&args.regions)?,
        severities: args
            .severities
            .as_deref()
            .map(|raw| validate::severities(raw, &config::FINDING_SEVERITIES))
            .transpose()?,
        finding_type: args
            .finding_type
            .as_deref()
            .map(|raw| validate::finding_type(raw, &config::FINDING_TYPE_ALIASES))
            .transpose()?,
        finding_statuses: args
            .finding_status
            .as_deref()
            .map(|raw| validate::finding_status(raw, &config::FINDING_STATUSES))
            .transpose()?,
        cve_id: args.cve_id.as_deref().map(validate::cve_id).transpose()?,
        instance_id: args
            .instance_id
            .as_deref()
            .map(validate::instance_id)
            .transpose()?,
        hours: args.hours.as_deref().map(validate::hours).transpose()?,
        days: args.days.as_deref().map(validate::days).transpose()?,
        month: args.month.as_deref().map(validate::month).transpose()?,
        year: args.year.as_deref().map(validate::year).transpose()?,
        start_date: args
            .start_date
            .as_deref()
            .map(validate::start_date)
            .transpose()?,
        end_date: args
            .end_date
            .as_deref()
            .map(validate::end_date)
            .transpose()?,
        detailed: args.detailed,
        skip_public_exploit_check: args.skip_public_exploit_check,
        output: args.output,
    })
}

/// Validates the accumulated `-r/--region` flags.
///
/// Each flag value is validated to a singleton and the singletons are
/// concatenated in flag order; an empty list means "not supplied".
fn regions_input(raws: &[String]) -> Result<Option<Vec<Region>>, ValidationError> {
    if raws.is_empty() {
        return Ok(None);
    }
    let mut regions = Vec::new();
    for raw in raws {
        regions.extend(validate::region(raw, &config::SUPPORTED_REGIONS)?);
    }
    Ok(Some(regions))
}

fn print_spec(spec: &QuerySpec, format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            let color_choice = if std::io::stdout().is_terminal() {
                ColorChoice::Auto
            } else {
                ColorChoice::Never
            };
            let formatter = HumanFormatter::new(color_choice);
            // A closed stdout leaves nothing useful to report.
            let _ = formatter.write_to_stdout(spec);
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new();
            println!("{}", formatter.format(spec));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConstraintViolation;
    use crate::types::{FindingType, Severity};
    use clap::Parser;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_coverage_dispatches_to_a_coverage_spec() {
        let cli = parse(&["inspector-checker", "coverage", "-r", "us-east-1"]);
        let spec = build_spec(&cli.command, today()).unwrap();
        match spec {
            QuerySpec::Coverage(query) => {
                assert_eq!(query.regions, vec![Region::new("us-east-1")]);
            }
            QuerySpec::Findings(_) => panic!("expected a coverage spec"),
        }
    }

    #[test]
    fn test_findings_dispatches_through_the_validators() {
        let cli = parse(&[
            "inspector-checker",
            "findings",
            "-s",
            "LOW",
            "-t",
            "network",
            "--days",
            "7",
        ]);
        let spec = build_spec(&cli.command, today()).unwrap();
        match spec {
            QuerySpec::Findings(query) => {
                assert_eq!(query.severities, vec![Severity::Low]);
                assert_eq!(query.finding_type, FindingType::NetworkReachability);
            }
            QuerySpec::Coverage(_) => panic!("expected a findings spec"),
        }
    }

    #[test]
    fn test_validation_failures_surface_as_query_errors() {
        let cli = parse(&["inspector-checker", "findings", "--hours", "zero"]);
        let err = build_spec(&cli.command, today()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "argument --hours: must be a positive integer: zero"
        );
    }

    #[test]
    fn test_constraint_failures_surface_as_query_errors() {
        let cli = parse(&["inspector-checker", "findings", "--year", "2024"]);
        let err = build_spec(&cli.command, today()).unwrap_err();
        assert_eq!(err, QueryError::Constraint(ConstraintViolation::YearWithoutMonth));
    }

    #[test]
    fn test_repeated_regions_accumulate_into_the_spec() {
        let cli = parse(&[
            "inspector-checker",
            "findings",
            "-r",
            "us-east-1",
            "-r",
            "eu-west-1",
        ]);
        let spec = build_spec(&cli.command, today()).unwrap();
        match spec {
            QuerySpec::Findings(query) => {
                assert_eq!(
                    query.regions,
                    vec![Region::new("us-east-1"), Region::new("eu-west-1")]
                );
            }
            QuerySpec::Coverage(_) => panic!("expected a findings spec"),
        }
    }

    #[test]
    fn test_one_bad_region_rejects_the_invocation() {
        let cli = parse(&[
            "inspector-checker",
            "findings",
            "-r",
            "us-east-1",
            "-r",
            "us-east-9",
        ]);
        let err = build_spec(&cli.command, today()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "argument --region: unsupported Inspector region: us-east-9"
        );
    }

    #[test]
    fn test_run_reports_exit_codes() {
        let cli = parse(&["inspector-checker", "--format", "json", "coverage"]);
        assert_eq!(run(cli), EXIT_SUCCESS);

        let cli = parse(&["inspector-checker", "findings", "--cve-id", "CVE-23-1"]);
        assert_eq!(run(cli), EXIT_USAGE);
    }
}
