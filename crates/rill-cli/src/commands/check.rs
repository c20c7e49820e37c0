//! Check command implementation.
//!
//! Validates the environment the resolver would see for a mode. The default
//! report lists every problem and still exits successfully, matching the
//! resolver's tolerant behavior; `--strict` turns the first problem into a
//! failure for CI use.

use rill_config::{validate_env, ConfigValidator, EnvMap, EnvValidator, RuntimeFlags};

use crate::cli::CheckArgs;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the check command.
///
/// # Errors
///
/// Under `--strict`, returns [`CliError::Check`] for the first missing
/// variable or unrecognized profile value.
pub fn execute(args: CheckArgs) -> Result<()> {
    let root = args.root.unwrap_or_else(|| ".".into());
    let env = EnvMap::load(&root, &args.mode)?;

    // A mode typo silently yields all-false flags; surface it here.
    let flags = RuntimeFlags::resolve(&args.mode);
    if !flags.is_dev && !flags.is_prod && !flags.is_test {
        ui::warning(&format!(
            "mode {:?} matches no runtime flag (development/production/test)",
            args.mode
        ));
    }

    if args.strict {
        EnvValidator
            .validate(&env)
            .map_err(|err| CliError::Check(err.to_string()))?;
        ui::success("Environment is complete");
        return Ok(());
    }

    let report = validate_env(&env);
    for missing in &report.missing {
        ui::warning(&format!("{missing} is not set"));
    }
    if let Some(profile) = &report.unknown_profile {
        ui::warning(&format!(
            "APP_ENV={profile} matches no known profile (development/production/sit)"
        ));
    }

    if report.is_complete() {
        ui::success("Environment is complete");
    } else {
        ui::info(&format!(
            "{} problem(s) found; resolution would substitute empty values",
            report.missing.len() + usize::from(report.unknown_profile.is_some())
        ));
    }
    Ok(())
}
