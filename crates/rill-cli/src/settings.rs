//! Tool settings with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and rill.toml.
//! Priority: CLI > Environment (`RILL_*`) > File > Defaults
//!
//! These are settings of the *tool* (where the project lives, how to emit
//! the result); the application environment the resolver consumes is loaded
//! separately through `rill_config::EnvMap` and never mixed in here.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format as _, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::cli::ResolveArgs;
use crate::error::Result;

/// Default settings file name, looked up in the project root.
const SETTINGS_FILE: &str = "rill.toml";

/// rill tool settings - loaded from rill.toml, RILL_* variables, or CLI args.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Mode to resolve for
    #[serde(default = "default_mode")]
    pub mode: String,

    /// Project root directory
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Write the configuration to this file instead of stdout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out: Option<PathBuf>,

    /// Emit single-line JSON
    #[serde(default)]
    pub compact: bool,

    /// Run the pre-build clean step
    #[serde(default = "default_clean")]
    pub clean: bool,
}

impl Settings {
    /// Load settings from multiple sources.
    /// Priority: CLI args > environment variables > rill.toml > defaults
    pub fn load(args: &ResolveArgs) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default_settings()));

        // Load rill.toml if it exists (next to the root the args point at)
        let settings_file = args.config.clone().or_else(|| {
            let root = args.root.clone().unwrap_or_else(|| PathBuf::from("."));
            let candidate = root.join(SETTINGS_FILE);
            candidate.exists().then_some(candidate)
        });

        if let Some(path) = settings_file {
            figment = figment.merge(Toml::file(path));
        }

        // Merge environment variables (RILL_MODE, RILL_ROOT, etc.)
        figment = figment.merge(Env::prefixed("RILL_"));

        // CLI args override everything, but only the flags actually provided
        if let Some(mode) = &args.mode {
            figment = figment.merge(Serialized::default("mode", mode));
        }
        if let Some(root) = &args.root {
            figment = figment.merge(Serialized::default("root", root));
        }
        if let Some(out) = &args.out {
            figment = figment.merge(Serialized::default("out", out));
        }
        if args.compact {
            figment = figment.merge(Serialized::default("compact", true));
        }
        if args.no_clean {
            figment = figment.merge(Serialized::default("clean", false));
        }

        Ok(figment.extract()?)
    }

    /// Resolve a path relative to the configured root.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Get default settings values.
    pub(crate) fn default_settings() -> Self {
        Self {
            mode: default_mode(),
            root: default_root(),
            out: None,
            compact: false,
            clean: true,
        }
    }
}

fn default_mode() -> String {
    "development".to_string()
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_clean() -> bool {
    true
}
