use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available rill subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the build configuration and emit it as JSON
    ///
    /// Loads the layered environment for the mode, derives runtime flags and
    /// the bundler configuration, runs the pre-build clean when the profile
    /// requires it, and prints the result.
    Resolve(ResolveArgs),

    /// Remove the output directory
    ///
    /// Runs only the destructive clean step: every file and subdirectory
    /// under the output directory is removed, and finally the directory
    /// itself. A missing directory is reported, not an error.
    Clean(CleanArgs),

    /// Validate the environment
    ///
    /// Reports missing variables and unrecognized profile values. With
    /// --strict the first problem fails the command.
    Check(CheckArgs),
}

/// Arguments for the resolve command
#[derive(Args, Debug, Default)]
pub struct ResolveArgs {
    /// Mode to resolve for
    ///
    /// Selects which environment files are loaded (.env.<MODE> overrides
    /// .env) and which runtime flags are set. Unrecognized modes resolve
    /// with all flags false; use `rill check` to catch typos.
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Project root directory
    ///
    /// Environment files are read from here and the output directory is
    /// resolved against it. Defaults to the current directory.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Write the configuration to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Emit single-line JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Skip the pre-build clean of the output directory
    #[arg(long)]
    pub no_clean: bool,

    /// Path to rill.toml
    ///
    /// Specify a custom settings file location. If not provided, rill.toml
    /// in the project root is used when present.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the clean command
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Project root directory
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Directory to remove, relative to the root
    #[arg(long, default_value = "build", value_name = "DIR")]
    pub dir: PathBuf,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Mode whose environment files are checked
    #[arg(short, long, default_value = "development", value_name = "MODE")]
    pub mode: String,

    /// Project root directory
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Fail on the first missing variable instead of reporting
    #[arg(long)]
    pub strict: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::cli::Cli;

    #[test]
    fn parses_resolve_with_mode() {
        let cli = Cli::parse_from(["rill", "resolve", "--mode", "production", "--compact"]);
        match cli.command {
            Command::Resolve(args) => {
                assert_eq!(args.mode.as_deref(), Some("production"));
                assert!(args.compact);
                assert!(!args.no_clean);
            }
            other => panic!("expected resolve, got {other:?}"),
        }
    }

    #[test]
    fn parses_clean_with_default_dir() {
        let cli = Cli::parse_from(["rill", "clean"]);
        match cli.command {
            Command::Clean(args) => assert_eq!(args.dir, PathBuf::from("build")),
            other => panic!("expected clean, got {other:?}"),
        }
    }

    #[test]
    fn parses_check_strict() {
        let cli = Cli::parse_from(["rill", "check", "--strict", "-m", "sit"]);
        match cli.command {
            Command::Check(args) => {
                assert!(args.strict);
                assert_eq!(args.mode, "sit");
            }
            other => panic!("expected check, got {other:?}"),
        }
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["rill", "-v", "-q", "check"]).is_err());
    }
}
