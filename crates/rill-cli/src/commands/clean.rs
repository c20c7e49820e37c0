//! Clean command implementation.
//!
//! Runs only the destructive clean step, without resolving a configuration.

use rill_config::clean_output_dir;

use crate::cli::CleanArgs;
use crate::commands::utils;
use crate::error::Result;

/// Execute the clean command.
///
/// # Errors
///
/// Returns errors when the target is a plain file, an unsafe system path,
/// or when removal fails partway through.
pub fn execute(args: CleanArgs) -> Result<()> {
    let root = args.root.unwrap_or_else(|| ".".into());
    let dir = if args.dir.is_absolute() {
        args.dir
    } else {
        root.join(&args.dir)
    };

    utils::ensure_safe_clean_target(&dir)?;
    let outcome = clean_output_dir(&dir)?;
    utils::report_clean_outcome(&dir, outcome);
    Ok(())
}
