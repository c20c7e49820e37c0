//! Shared utilities for command implementations.

use std::path::Path;

use rill_config::CleanOutcome;

use crate::error::{CliError, Result};
use crate::ui;

/// Directories the destructive clean refuses to touch.
const DANGEROUS_PATHS: &[&str] = &[
    "/bin", "/boot", "/dev", "/etc", "/lib", "/lib64", "/proc", "/root", "/sbin", "/sys",
    "/usr/bin", "/usr/lib", "/usr/sbin", "/var/log",
];

/// Validate that a directory is safe to remove.
///
/// The clean step deletes a whole tree, so a misconfigured root (an absolute
/// output directory pointing at a system path, `RILL_ROOT=/`) must be
/// rejected before anything is unlinked.
///
/// # Errors
///
/// Returns [`CliError::UnsafeCleanTarget`] for the filesystem root and
/// well-known system directories.
pub fn ensure_safe_clean_target(path: &Path) -> Result<()> {
    let canonical = if path.exists() {
        path.canonicalize()?
    } else {
        // Nothing to remove; the clean reports Missing on its own
        return Ok(());
    };

    if canonical == Path::new("/") {
        return Err(CliError::UnsafeCleanTarget {
            path: canonical,
            reason: "refusing the filesystem root".to_string(),
        });
    }

    let as_str = canonical.to_string_lossy();
    for dangerous in DANGEROUS_PATHS {
        if as_str == *dangerous || as_str.starts_with(&format!("{dangerous}/")) {
            return Err(CliError::UnsafeCleanTarget {
                path: canonical.clone(),
                reason: format!("system directory {dangerous}"),
            });
        }
    }

    Ok(())
}

/// Report a clean outcome on stderr.
pub fn report_clean_outcome(dir: &Path, outcome: CleanOutcome) {
    match outcome {
        CleanOutcome::Missing => {
            ui::info(&format!("{} not present, nothing to clean", dir.display()));
        }
        CleanOutcome::Removed { files, dirs } => {
            ui::success(&format!(
                "Removed {} ({files} files, {dirs} directories)",
                dir.display()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn missing_target_is_fine() {
        let temp = TempDir::new().unwrap();
        assert!(ensure_safe_clean_target(&temp.path().join("build")).is_ok());
    }

    #[test]
    fn project_directory_is_fine() {
        let temp = TempDir::new().unwrap();
        assert!(ensure_safe_clean_target(temp.path()).is_ok());
    }

    #[test]
    fn filesystem_root_is_rejected() {
        let err = ensure_safe_clean_target(Path::new("/")).unwrap_err();
        assert!(matches!(err, CliError::UnsafeCleanTarget { .. }));
    }

    #[test]
    fn system_directories_are_rejected() {
        for dir in ["/etc", "/usr/lib"] {
            if Path::new(dir).exists() {
                let err = ensure_safe_clean_target(Path::new(dir)).unwrap_err();
                assert!(matches!(err, CliError::UnsafeCleanTarget { .. }), "{dir}");
            }
        }
    }

    #[test]
    fn report_outcomes_do_not_panic() {
        report_clean_outcome(&PathBuf::from("build"), CleanOutcome::Missing);
        report_clean_outcome(&PathBuf::from("build"), CleanOutcome::Removed { files: 2, dirs: 1 });
    }
}
