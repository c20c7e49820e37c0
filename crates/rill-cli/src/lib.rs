//! rill CLI - deterministic build configuration from the environment.
//!
//! This crate provides the command-line interface around `rill-config`: it
//! loads tool settings and environment layers, resolves the build
//! configuration, and emits it as JSON for an external bundler.
//!
//! # Architecture
//!
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Terminal status output
//! - `cli` - Argument parsing
//! - `commands` - Individual CLI command implementations
//! - `settings` - Tool-settings layering (file, environment, CLI)

// Public modules
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod settings;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, Result, ResultExt};
pub use settings::Settings;
