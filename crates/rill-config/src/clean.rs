//! Destructive clean of the output directory.
//!
//! Before a non-dev build, the previous build's artifacts are removed
//! wholesale: every file and subdirectory under the output directory, and
//! finally the directory itself. The traversal uses an explicit work-list
//! instead of call-stack recursion, so arbitrarily deep trees cannot
//! overflow the stack; the post-order guarantee (children removed before
//! their parent) is preserved by revisiting each directory after its
//! entries have been pushed.
//!
//! Failure partway through (e.g. permission denied) propagates as a fatal
//! error and the caller aborts the build.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// What the clean step found and did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanOutcome {
    /// The directory did not exist; nothing happened. Not a failure.
    Missing,
    /// The tree was removed, root included.
    Removed { files: usize, dirs: usize },
}

/// Work-list entry: a directory is first entered (children pushed), then
/// removed once everything beneath it is gone.
enum Visit {
    Enter(PathBuf),
    Remove(PathBuf),
}

/// Remove an output directory and everything beneath it.
///
/// # Arguments
///
/// * `path` - Directory to remove
///
/// # Errors
///
/// Returns [`ConfigError::NotADirectory`] when the path exists but is a
/// plain file, and I/O errors from the underlying removals. A missing
/// directory is reported as [`CleanOutcome::Missing`], never as an error.
pub fn clean_output_dir(path: &Path) -> Result<CleanOutcome> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(CleanOutcome::Missing);
        }
        Err(err) => return Err(err.into()),
    };

    if !metadata.is_dir() {
        return Err(ConfigError::NotADirectory(path.to_path_buf()));
    }

    let mut files = 0;
    let mut dirs = 0;
    let mut stack = vec![Visit::Enter(path.to_path_buf())];

    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Enter(dir) => {
                // Schedule the directory's own removal behind its children.
                stack.push(Visit::Remove(dir.clone()));
                for entry in fs::read_dir(&dir)? {
                    let entry = entry?;
                    // file_type() does not follow symlinks; a symlinked
                    // directory is unlinked, not traversed.
                    if entry.file_type()?.is_dir() {
                        stack.push(Visit::Enter(entry.path()));
                    } else {
                        fs::remove_file(entry.path())?;
                        files += 1;
                    }
                }
            }
            Visit::Remove(dir) => {
                fs::remove_dir(&dir)?;
                dirs += 1;
            }
        }
    }

    tracing::debug!(path = %path.display(), files, dirs, "cleaned output directory");
    Ok(CleanOutcome::Removed { files, dirs })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn missing_directory_is_a_no_op() {
        let temp = TempDir::new().unwrap();
        let outcome = clean_output_dir(&temp.path().join("build")).unwrap();
        assert_eq!(outcome, CleanOutcome::Missing);
    }

    #[test]
    fn removes_flat_directory() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("build");
        fs::create_dir(&out).unwrap();
        File::create(out.join("index.html")).unwrap();
        File::create(out.join("app.js")).unwrap();

        let outcome = clean_output_dir(&out).unwrap();
        assert_eq!(outcome, CleanOutcome::Removed { files: 2, dirs: 1 });
        assert!(!out.exists());
    }

    #[test]
    fn removes_nested_tree_depth_first() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("build");
        fs::create_dir_all(out.join("assets/js")).unwrap();
        fs::create_dir_all(out.join("assets/css")).unwrap();
        File::create(out.join("index.html")).unwrap();
        File::create(out.join("assets/js/app-abc123.js")).unwrap();
        File::create(out.join("assets/css/app-abc123.css")).unwrap();

        let outcome = clean_output_dir(&out).unwrap();
        assert_eq!(outcome, CleanOutcome::Removed { files: 3, dirs: 4 });
        assert!(!out.exists());
    }

    #[test]
    fn handles_deep_trees_without_recursion() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("build");
        let mut leaf = out.clone();
        for depth in 0..200 {
            leaf.push(format!("d{depth}"));
        }
        fs::create_dir_all(&leaf).unwrap();
        File::create(leaf.join("deep.txt")).unwrap();

        let outcome = clean_output_dir(&out).unwrap();
        assert_eq!(outcome, CleanOutcome::Removed { files: 1, dirs: 201 });
        assert!(!out.exists());
    }

    #[test]
    fn plain_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("build");
        File::create(&file).unwrap();

        let err = clean_output_dir(&file).unwrap_err();
        assert!(matches!(err, ConfigError::NotADirectory(_)));
        assert!(file.exists());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directory_is_unlinked_not_traversed() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("build");
        let outside = temp.path().join("keep");
        fs::create_dir(&out).unwrap();
        fs::create_dir(&outside).unwrap();
        File::create(outside.join("precious.txt")).unwrap();
        std::os::unix::fs::symlink(&outside, out.join("link")).unwrap();

        clean_output_dir(&out).unwrap();
        assert!(!out.exists());
        assert!(outside.join("precious.txt").exists());
    }
}
