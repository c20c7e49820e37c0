//! Command-line interface definition for the rill CLI.
//!
//! This module defines the CLI structure using clap v4's derive macros.
//!
//! # Command Structure
//!
//! - `rill resolve` - Resolve and emit the build configuration
//! - `rill clean` - Remove the output directory
//! - `rill check` - Validate the environment

mod commands;

use clap::Parser;

pub use commands::{CheckArgs, CleanArgs, Command, ResolveArgs};

/// rill - deterministic build configuration from the environment
#[derive(Parser, Debug)]
#[command(
    name = "rill",
    version,
    about = "Resolve front-end build configuration from the environment",
    long_about = "rill derives a bundler configuration from a mode string and layered\n\
                  environment files. The same mode and environment always produce the\n\
                  same configuration, which is emitted as JSON for the bundler."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows which environment files were merged and what the clean step
    /// removed.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    ///
    /// Only critical errors will be displayed. Useful for CI or when piping
    /// the emitted configuration to other tools.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
