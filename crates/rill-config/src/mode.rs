//! Mode selection and the boolean flags derived from it.
//!
//! Two closed enumerations govern behavior: the runtime mode
//! (`development`/`production`/`test`) drives [`RuntimeFlags`], and the
//! environment profile (`development`/`production`/`sit`, read from
//! `APP_ENV`) drives [`EnvProfile`]. Both are resolved by exact,
//! case-sensitive string comparison; unrecognized values yield all-false
//! flags rather than an error.

use serde::{Deserialize, Serialize};

use crate::env::{keys, EnvMap};

/// Build/runtime profile selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Local development (default)
    #[default]
    Development,
    /// Production build
    Production,
    /// Test run
    Test,
}

impl Mode {
    /// The exact string form matched during flag resolution.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
            Mode::Test => "test",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Booleans derived once from the mode string.
///
/// Each flag is true iff the mode equals the corresponding enumeration value
/// exactly. At most one flag is true; a mode matching none of the three
/// yields all-false flags (typos are tolerated silently, see
/// [`crate::validation`] for the opt-in strict check).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RuntimeFlags {
    pub is_dev: bool,
    pub is_prod: bool,
    pub is_test: bool,
}

impl RuntimeFlags {
    /// Resolve flags from a mode string by exact comparison.
    pub fn resolve(mode: &str) -> Self {
        Self {
            is_dev: mode == Mode::Development.as_str(),
            is_prod: mode == Mode::Production.as_str(),
            is_test: mode == Mode::Test.as_str(),
        }
    }
}

/// Environment-profile booleans, resolved from `APP_ENV`.
///
/// These are independent of [`RuntimeFlags`]: the mode selects which
/// environment files are loaded, while `APP_ENV` inside those files selects
/// the deployment profile. `hide_log` mirrors `APP_HIDE_LOG == "true"` and
/// feeds the minifier's console-stripping options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnvProfile {
    pub is_prod: bool,
    pub is_dev: bool,
    pub is_sit: bool,
    pub hide_log: bool,
}

impl EnvProfile {
    /// Recognized `APP_ENV` values, in documentation order.
    pub const KNOWN: &'static [&'static str] = &["development", "production", "sit"];

    /// Resolve the profile from the environment mapping.
    pub fn resolve(env: &EnvMap) -> Self {
        let app_env = env.get(keys::APP_ENV).unwrap_or_default();
        Self {
            is_prod: app_env == "production",
            is_dev: app_env == "development",
            is_sit: app_env == "sit",
            hide_log: env.get(keys::APP_HIDE_LOG) == Some("true"),
        }
    }
}
