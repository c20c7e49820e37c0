//! rill CLI - deterministic build configuration from the environment.
//!
//! This is the main entry point for the rill CLI. It handles command-line
//! argument parsing, logging initialization, and command dispatch. Execution
//! is synchronous and run-to-completion: the resolver either finishes or the
//! process aborts on a fatal error.

use clap::Parser;
use miette::Result;
use rill_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors();

    // Execute the appropriate command
    let result = match args.command {
        cli::Command::Resolve(resolve_args) => commands::resolve_execute(resolve_args),
        cli::Command::Clean(clean_args) => commands::clean_execute(clean_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
