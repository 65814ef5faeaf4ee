//! CLI argument parsing and command dispatch

pub mod args;
pub mod dispatch;

// Re-export types for convenient access
pub use args::{Cli, Command, CoverageArgs, FindingsArgs, OutputFormat};
pub use dispatch::{build_spec, run};
