#![forbid(unsafe_code)]

use clap::Parser;
use inspector_checker::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();
    std::process::exit(cli::run(cli));
}
