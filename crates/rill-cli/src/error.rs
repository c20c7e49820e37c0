//! Error handling for the rill CLI.
//!
//! A single top-level [`CliError`] wraps the resolver's `ConfigError` and the
//! CLI's own failure modes, converting automatically via `#[from]`. The final
//! error is rendered through miette in `main` for readable reporting.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Errors from the configuration resolver
    #[error("Configuration error: {0}")]
    Config(#[from] rill_config::ConfigError),

    /// Tool-settings loading errors (rill.toml, RILL_* variables)
    #[error("Settings error: {0}\n\nHint: check rill.toml syntax and RILL_* variable types")]
    Settings(String),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Strict environment check failures
    #[error("Environment check failed: {0}\n\nHint: define the variable in .env, .env.<mode>, or the process environment")]
    Check(String),

    /// Refusal to run the destructive clean against an unsafe target
    #[error("Refusing to clean {}: {reason}", .path.display())]
    UnsafeCleanTarget { path: PathBuf, reason: String },

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        CliError::Settings(err.to_string())
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert a `CliError` to a miette report for terminal rendering.
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    miette::miette!("{err}")
}

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Convert to an error message with a leading context line.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::InvalidArgument(format!("{msg}: {err}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_converts() {
        let config_err = rill_config::ConfigError::MissingVar("APP_ENV".to_string());
        let cli_err: CliError = config_err.into();
        assert!(matches!(cli_err, CliError::Config(_)));
        assert!(cli_err.to_string().contains("APP_ENV"));
    }

    #[test]
    fn check_error_carries_hint() {
        let err = CliError::Check("APP_SERVE_URL".to_string());
        let msg = err.to_string();
        assert!(msg.contains("APP_SERVE_URL"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn unsafe_clean_target_names_path() {
        let err = CliError::UnsafeCleanTarget {
            path: PathBuf::from("/etc"),
            reason: "system directory".to_string(),
        };
        assert!(err.to_string().contains("/etc"));
    }

    #[test]
    fn context_prepends_message() {
        let result: std::result::Result<(), rill_config::ConfigError> =
            Err(rill_config::ConfigError::MissingVar("X".to_string()));
        let err = result.context("loading environment").unwrap_err();
        assert!(err.to_string().contains("loading environment"));
    }
}
