//! Top-level configuration resolution.
//!
//! [`BuildConfig::resolve`] is the pure aggregation step: flags, profile,
//! build options, and the dev-server table, all derived from `(mode, env)`
//! with no I/O. The output-directory clean that precedes non-dev builds is
//! the one declared side effect and lives in [`BuildConfig::prepare_output`]
//! so resolution itself stays referentially transparent.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::build::BuildOptions;
use crate::clean::{clean_output_dir, CleanOutcome};
use crate::dev::{route_table, DevConfig};
use crate::env::{keys, EnvMap};
use crate::error::Result;
use crate::mode::{EnvProfile, RuntimeFlags};

/// Structured configuration consumed by the external bundler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Mode string resolution ran with
    pub mode: String,

    /// Flags derived from the mode
    pub flags: RuntimeFlags,

    /// Profile derived from `APP_ENV`
    pub profile: EnvProfile,

    /// Public base path of emitted assets (`APP_RESOURCE_URL`)
    pub base: String,

    /// Build options
    #[serde(default)]
    pub build: BuildOptions,

    /// Development server settings
    #[serde(default)]
    pub dev: DevConfig,
}

impl BuildConfig {
    /// Resolve the full configuration from a mode string and environment.
    ///
    /// Pure and total: identical inputs always yield an identical value, and
    /// no input combination raises an error. Missing environment variables
    /// degrade to empty strings (logged by [`EnvMap::get_or_empty`]).
    pub fn resolve(mode: &str, env: &EnvMap) -> Self {
        let flags = RuntimeFlags::resolve(mode);
        let profile = EnvProfile::resolve(env);

        let mut build = BuildOptions::default();
        // Console stripping follows the log-suppression flag, not the mode.
        build.minify.drop_console = profile.hide_log;
        build.minify.drop_debugger = profile.hide_log;

        let dev = DevConfig {
            proxy: route_table(env),
            ..DevConfig::default()
        };

        Self {
            mode: mode.to_string(),
            flags,
            profile,
            base: env.get_or_empty(keys::APP_RESOURCE_URL).to_string(),
            build,
            dev,
        }
    }

    /// Run the pre-build clean of the output directory.
    ///
    /// For the dev profile nothing is removed and `None` is returned; for
    /// every other profile the output tree under `root` is deleted, root
    /// directory included. A missing directory reports
    /// [`CleanOutcome::Missing`], which callers must not treat as failure.
    ///
    /// # Errors
    ///
    /// Filesystem errors are fatal: the tree may be partially removed and
    /// the caller is expected to abort the build.
    pub fn prepare_output(&self, root: &Path) -> Result<Option<CleanOutcome>> {
        if self.profile.is_dev {
            tracing::debug!("dev profile, keeping output directory");
            return Ok(None);
        }
        clean_output_dir(&root.join(&self.build.output_dir)).map(Some)
    }

    /// Convert to `serde_json::Value` for emission.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
