//! Pluggable environment validation strategies.
//!
//! Resolution itself tolerates missing variables (the historical behavior,
//! kept for compatibility); validation is the opt-in fail-fast path. The
//! tolerant [`EnvReport`] lists problems without failing, for `check`-style
//! commands; the strict [`EnvValidator`] rejects the first missing key.

use crate::env::{keys, EnvMap};
use crate::error::{ConfigError, Result};
use crate::mode::EnvProfile;

/// Variables a fully configured environment provides.
pub const REQUIRED_VARS: &[&str] = &[
    keys::APP_ENV,
    keys::APP_RESOURCE_URL,
    keys::APP_SERVE_URL,
    keys::APP_WAP_SERVE_URL,
    keys::APP_PDF_URL,
    keys::APP_PDF_ALI_URL,
    keys::APP_PDF_CDN_URL,
];

/// Trait for pluggable environment validation strategies.
pub trait ConfigValidator {
    /// Validate the environment mapping.
    fn validate(&self, env: &EnvMap) -> Result<()>;
}

/// Strict validator: every required variable present and non-empty, and the
/// profile selector set to a recognized value.
pub struct EnvValidator;

impl ConfigValidator for EnvValidator {
    fn validate(&self, env: &EnvMap) -> Result<()> {
        for var in REQUIRED_VARS {
            if !env.has(var) {
                return Err(ConfigError::MissingVar((*var).to_string()));
            }
        }

        let app_env = env.get(keys::APP_ENV).unwrap_or_default();
        if !EnvProfile::KNOWN.iter().any(|known| *known == app_env) {
            return Err(ConfigError::MissingVar(format!(
                "{} (unrecognized value {app_env:?})",
                keys::APP_ENV
            )));
        }

        Ok(())
    }
}

/// Tolerant environment report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvReport {
    /// Required variables that are absent or empty
    pub missing: Vec<&'static str>,
    /// `APP_ENV` value that matches no known profile, if set
    pub unknown_profile: Option<String>,
}

impl EnvReport {
    /// Whether the environment would pass the strict validator.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.unknown_profile.is_none()
    }
}

/// Build a tolerant report of environment problems.
pub fn validate_env(env: &EnvMap) -> EnvReport {
    let missing: Vec<&'static str> = REQUIRED_VARS
        .iter()
        .copied()
        .filter(|var| !env.has(var))
        .collect();

    let unknown_profile = env
        .get(keys::APP_ENV)
        .filter(|value| !value.is_empty() && !EnvProfile::KNOWN.iter().any(|known| known == value))
        .map(String::from);

    EnvReport {
        missing,
        unknown_profile,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_env() -> EnvMap {
        REQUIRED_VARS
            .iter()
            .map(|var| {
                if *var == keys::APP_ENV {
                    (*var, "production")
                } else {
                    (*var, "http://upstream")
                }
            })
            .collect()
    }

    #[test]
    fn strict_accepts_complete_env() {
        assert!(EnvValidator.validate(&complete_env()).is_ok());
    }

    #[test]
    fn strict_rejects_missing_var() {
        let mut env = complete_env();
        env.insert(keys::APP_PDF_URL, "");
        let err = EnvValidator.validate(&env).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(var) if var == keys::APP_PDF_URL));
    }

    #[test]
    fn strict_rejects_unknown_profile() {
        let mut env = complete_env();
        env.insert(keys::APP_ENV, "prodction");
        assert!(EnvValidator.validate(&env).is_err());
    }

    #[test]
    fn report_lists_all_missing_vars() {
        let report = validate_env(&EnvMap::default());
        assert_eq!(report.missing, REQUIRED_VARS);
        assert!(report.unknown_profile.is_none());
        assert!(!report.is_complete());
    }

    #[test]
    fn report_flags_profile_typo() {
        let mut env = complete_env();
        env.insert(keys::APP_ENV, "Production");
        let report = validate_env(&env);
        assert_eq!(report.unknown_profile.as_deref(), Some("Production"));
    }

    #[test]
    fn complete_env_reports_clean() {
        assert!(validate_env(&complete_env()).is_complete());
    }
}
