// studyprep-cli/src/main.rs
//
// Entry point for the `studyprep` binary.
//
// Loads `.env`, parses arguments, initializes logging and dispatches to the
// subcommand. Any error is printed to stderr and the process exits with 1.

use clap::Parser;
use console::style;
use std::process;
use studyprep_cli::logging::init_logging;
use studyprep_cli::{Cli, Commands, run_plan, run_prepare};

fn main() {
    // A missing .env file is normal.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Prepare(args) => run_prepare(args),
        Commands::Plan(args) => run_plan(args),
    };

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        process::exit(1);
    }
}
