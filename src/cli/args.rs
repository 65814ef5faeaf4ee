#![forbid(unsafe_code)]

//! Command-line argument definitions using clap
//!
//! Values that feed the validators stay raw `String`s here on purpose:
//! clap only handles flag syntax, while the `validate` module owns every
//! field domain and the resolver owns every cross-flag rule. That keeps
//! each rejection message and its exit code under this crate's control.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Check AWS Inspector coverage and findings
#[derive(Debug, Parser)]
#[command(name = "inspector-checker", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format for the resolved query
    #[arg(long, value_enum, default_value_t = OutputFormat::Human, global = true)]
    pub format: OutputFormat,
}

/// How the resolved query is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned listing for terminals
    Human,
    /// One pretty-printed JSON object
    Json,
}

/// Tasks the checker can prepare.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check the coverage of Inspector scanning
    Coverage(CoverageArgs),
    /// Check Inspector findings
    Findings(FindingsArgs),
}

/// Arguments for the coverage task.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Region to check; repeat for several (default: every supported region)
    #[arg(short, long = "region", value_name = "REGION")]
    pub regions: Vec<String>,

    /// Show uncovered instances per region
    #[arg(short, long)]
    pub detailed: bool,

    /// Save the results in a csv file
    #[arg(short, long)]
    pub output: bool,
}

/// Arguments for the findings task.
#[derive(Debug, Args)]
pub struct FindingsArgs {
    /// Region to check; repeat for several (default: every supported region)
    #[arg(short, long = "region", value_name = "REGION")]
    pub regions: Vec<String>,

    /// Comma-separated list of severities (default: critical,high)
    #[arg(short, long)]
    pub severities: Option<String>,

    /// Type of findings to check (default: package)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub finding_type: Option<String>,

    /// Status of findings to check (default: active)
    #[arg(long = "status", value_name = "STATUS")]
    pub finding_status: Option<String>,

    /// CVE to check, e.g. CVE-2023-12345
    #[arg(short, long)]
    pub cve_id: Option<String>,

    /// Specific instance to check; requires exactly one --region
    #[arg(short, long)]
    pub instance_id: Option<String>,

    /// Amount of hours before now to check for findings
    #[arg(long)]
    pub hours: Option<String>,

    /// Amount of days before now to check for findings
    #[arg(long)]
    pub days: Option<String>,

    /// Month to check for findings, as a full name like march
    #[arg(long)]
    pub month: Option<String>,

    /// Year to check for findings; requires --month
    #[arg(long)]
    pub year: Option<String>,

    /// Start date to check for findings (MM-DD-YYYY)
    #[arg(long)]
    pub start_date: Option<String>,

    /// End date to check for findings (MM-DD-YYYY)
    #[arg(long)]
    pub end_date: Option<String>,

    /// Show results by CVE
    #[arg(short, long)]
    pub detailed: bool,

    /// Skip the public exploit check
    #[arg(long = "skip-pec")]
    pub skip_public_exploit_check: bool,

    /// Save the results in a csv file
    #[arg(short, long)]
    pub output: bool,
}
