//! Error types for configuration resolution and the output clean step.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Environment loading errors
    #[error("invalid environment file {}: {message} (line {line})", .path.display())]
    InvalidEnvFile {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("missing required environment variable: {0}")]
    MissingVar(String),

    // Output clean errors (fatal, abort the build)
    #[error("output path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
