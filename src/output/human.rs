#![forbid(unsafe_code)]

//! Human-readable output formatter with colorization support

use crate::config;
use crate::engine::resolver::{CoverageQuery, FindingsQuery, QuerySpec, TimeWindow};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Width of the label column, sized for the longest label.
const LABEL_WIDTH: usize = 12;

/// Human-readable output formatter
///
/// Renders a resolved query as a titled, aligned listing for terminal
/// display with optional colors.
pub struct HumanFormatter {
    color_choice: ColorChoice,
}

impl HumanFormatter {
    /// Creates a new HumanFormatter with the specified color choice
    pub fn new(color_choice: ColorChoice) -> Self {
        HumanFormatter { color_choice }
    }

    /// Format the resolved query for human consumption
    ///
    /// Returns a formatted string suitable for terminal display.
    pub fn format(&self, spec: &QuerySpec) -> String {
        let mut output = String::new();

        output.push_str(title(spec));
        output.push_str("\n\n");

        for (label, value) in rows(spec) {
            output.push_str(&format!("  {:<width$}{}\n", label, value, width = LABEL_WIDTH));
        }

        output
    }

    /// Write the formatted output to stdout with colors
    ///
    /// This method handles colorization and writes directly to stdout.
    pub fn write_to_stdout(&self, spec: &QuerySpec) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);

        stdout.set_color(ColorSpec::new().set_bold(true))?;
        write!(stdout, "{}", title(spec))?;
        stdout.reset()?;
        writeln!(stdout)?;
        writeln!(stdout)?;

        for (label, value) in rows(spec) {
            write!(stdout, "  ")?;
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            write!(stdout, "{:<width$}", label, width = LABEL_WIDTH)?;
            stdout.reset()?;
            writeln!(stdout, "{}", value)?;
        }

        Ok(())
    }
}

fn title(spec: &QuerySpec) -> &'static str {
    match spec {
        QuerySpec::Coverage(_) => "Inspector coverage query",
        QuerySpec::Findings(_) => "Inspector findings query",
    }
}

/// Label and value pairs in display order; absent fields produce no row.
fn rows(spec: &QuerySpec) -> Vec<(&'static str, String)> {
    match spec {
        QuerySpec::Coverage(query) => coverage_rows(query),
        QuerySpec::Findings(query) => findings_rows(query),
    }
}

fn coverage_rows(query: &CoverageQuery) -> Vec<(&'static str, String)> {
    let mut rows = vec![("regions", join(query.regions.iter().map(|r| r.as_str())))];
    if let Some(flags) = flag_row(&[("detailed", query.detailed), ("output", query.output)]) {
        rows.push(("flags", flags));
    }
    rows
}

fn findings_rows(query: &FindingsQuery) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("regions", join(query.regions.iter().map(|r| r.as_str()))),
        (
            "severities",
            join(query.severities.iter().map(|s| s.as_str())),
        ),
        ("type", query.finding_type.to_string()),
        (
            "statuses",
            join(query.finding_statuses.iter().map(|s| s.as_str())),
        ),
    ];

    if let Some(cve) = &query.cve_id {
        rows.push(("cve", cve.to_string()));
    }
    if let Some(instance) = &query.instance_id {
        rows.push(("instance", instance.to_string()));
    }
    if let Some(window) = &query.time_window {
        rows.push(("window", window_text(window)));
    }
    if let Some(flags) = flag_row(&[
        ("detailed", query.detailed),
        ("skip-pec", query.skip_public_exploit_check),
        ("output", query.output),
    ]) {
        rows.push(("flags", flags));
    }

    rows
}

fn window_text(window: &TimeWindow) -> String {
    match window {
        TimeWindow::Hours(1) => "last 1 hour".to_string(),
        TimeWindow::Hours(hours) => format!("last {hours} hours"),
        TimeWindow::Days(1) => "last 1 day".to_string(),
        TimeWindow::Days(days) => format!("last {days} days"),
        TimeWindow::Month { month, year } => format!("{} {year}", month.name()),
        TimeWindow::Range {
            start: Some(start),
            end: Some(end),
        } => format!(
            "{} to {}",
            start.format(config::DATE_FORMAT),
            end.format(config::DATE_FORMAT)
        ),
        TimeWindow::Range {
            start: Some(start),
            end: None,
        } => format!("from {}", start.format(config::DATE_FORMAT)),
        TimeWindow::Range {
            start: None,
            end: Some(end),
        } => format!("until {}", end.format(config::DATE_FORMAT)),
        TimeWindow::Range {
            start: None,
            end: None,
        } => "unbounded".to_string(),
    }
}

fn join<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

/// Comma-joined names of the flags that are set, `None` when none are.
fn flag_row(flags: &[(&str, bool)]) -> Option<String> {
    let set: Vec<&str> = flags
        .iter()
        .filter(|(_, on)| *on)
        .map(|(name, _)| *name)
        .collect();
    if set.is_empty() {
        None
    } else {
        Some(set.join(", "))
    }
}
