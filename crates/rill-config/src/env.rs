//! Explicit environment mapping and layered environment-file loading.
//!
//! The resolver never reads the process environment ad hoc: every lookup
//! goes through an [`EnvMap`] handed in as a parameter, which keeps
//! resolution a pure function of its inputs and makes it trivially testable.
//! [`EnvMap::load`] builds that mapping by layering environment files and the
//! process environment, later layers winning per key.

use std::collections::btree_map::{BTreeMap, IntoIter};
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Result};

/// Well-known environment variable names.
pub mod keys {
    /// Environment profile selector (`development`/`production`/`sit`).
    pub const APP_ENV: &str = "APP_ENV";
    /// `"true"` strips console/debugger statements in minified output.
    pub const APP_HIDE_LOG: &str = "APP_HIDE_LOG";
    /// Public base path of emitted assets.
    pub const APP_RESOURCE_URL: &str = "APP_RESOURCE_URL";
    /// Upstream for the `/api` proxy route.
    pub const APP_SERVE_URL: &str = "APP_SERVE_URL";
    /// Upstream for the `/wapApi` proxy route.
    pub const APP_WAP_SERVE_URL: &str = "APP_WAP_SERVE_URL";
    /// Upstream for the `/proxy/oss` proxy route.
    pub const APP_PDF_URL: &str = "APP_PDF_URL";
    /// Upstream for the `/proxy/alioss` proxy route.
    pub const APP_PDF_ALI_URL: &str = "APP_PDF_ALI_URL";
    /// Upstream for the `/proxy/cdnoss` proxy route.
    pub const APP_PDF_CDN_URL: &str = "APP_PDF_CDN_URL";
}

/// Read-only mapping from variable names to string values.
///
/// Ordered internally so that serialized output is stable: identical inputs
/// always produce byte-identical configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvMap {
    vars: BTreeMap<String, String>,
}

impl EnvMap {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the layered environment for a mode.
    ///
    /// Layers, lowest precedence first:
    ///
    /// 1. `<root>/.env`
    /// 2. `<root>/.env.<mode>`
    /// 3. `<root>/.env.<mode>.local`
    /// 4. the process environment
    ///
    /// Missing files are skipped silently; a file that exists but cannot be
    /// parsed is an error.
    pub fn load(root: &Path, mode: &str) -> Result<Self> {
        let mut env = Self::load_files(root, mode)?;
        for (key, value) in std::env::vars() {
            env.vars.insert(key, value);
        }
        Ok(env)
    }

    /// Load only the environment files, without the process environment.
    ///
    /// Useful for tests and for tooling that must not observe the caller's
    /// own environment.
    pub fn load_files(root: &Path, mode: &str) -> Result<Self> {
        let mut env = Self::new();
        env.merge_file(&root.join(".env"))?;
        env.merge_file(&root.join(format!(".env.{mode}")))?;
        env.merge_file(&root.join(format!(".env.{mode}.local")))?;
        Ok(env)
    }

    /// Look up a variable.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Look up a variable, substituting an empty string when it is missing.
    ///
    /// Missing keys are tolerated (the original behavior) but logged, so a
    /// half-configured environment is visible without failing the build.
    pub fn get_or_empty(&self, key: &str) -> &str {
        match self.get(key) {
            Some(value) => value,
            None => {
                tracing::warn!(key, "environment variable not set, substituting empty value");
                ""
            }
        }
    }

    /// Whether a variable is present with a non-empty value.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_empty())
    }

    /// Insert a variable, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Number of variables in the mapping.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Merge a single `KEY=VALUE` file into the mapping, keys in the file
    /// overriding keys already present. Returns whether the file existed.
    fn merge_file(&mut self, path: &Path) -> Result<bool> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(err) => return Err(err.into()),
        };

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line = line.strip_prefix("export ").unwrap_or(line).trim_start();

            let Some((key, value)) = line.split_once('=') else {
                return Err(ConfigError::InvalidEnvFile {
                    path: path.to_path_buf(),
                    line: index + 1,
                    message: format!("expected KEY=VALUE, found {line:?}"),
                });
            };

            let key = key.trim();
            if key.is_empty() {
                return Err(ConfigError::InvalidEnvFile {
                    path: path.to_path_buf(),
                    line: index + 1,
                    message: "empty variable name".to_string(),
                });
            }

            self.vars
                .insert(key.to_string(), unquote(value.trim()).to_string());
        }

        tracing::debug!(path = %path.display(), "merged environment file");
        Ok(true)
    }
}

/// Strip one pair of matching single or double quotes, if present.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for EnvMap {
    type Item = (String, String);
    type IntoIter = IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn get_or_empty_substitutes_missing() {
        let env = EnvMap::new();
        assert_eq!(env.get_or_empty("APP_SERVE_URL"), "");
    }

    #[test]
    fn load_files_skips_missing() {
        let dir = TempDir::new().unwrap();
        let env = EnvMap::load_files(dir.path(), "development").unwrap();
        assert!(env.is_empty());
    }

    #[test]
    fn mode_file_overrides_base() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".env"),
            "APP_ENV=development\nAPP_RESOURCE_URL=/static/\n",
        )
        .unwrap();
        fs::write(dir.path().join(".env.production"), "APP_ENV=production\n").unwrap();

        let env = EnvMap::load_files(dir.path(), "production").unwrap();
        assert_eq!(env.get("APP_ENV"), Some("production"));
        assert_eq!(env.get("APP_RESOURCE_URL"), Some("/static/"));
    }

    #[test]
    fn local_file_wins_over_mode_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".env.sit"), "APP_SERVE_URL=http://sit\n").unwrap();
        fs::write(
            dir.path().join(".env.sit.local"),
            "APP_SERVE_URL=http://localhost:8080\n",
        )
        .unwrap();

        let env = EnvMap::load_files(dir.path(), "sit").unwrap();
        assert_eq!(env.get("APP_SERVE_URL"), Some("http://localhost:8080"));
    }

    #[test]
    fn parser_handles_comments_exports_and_quotes() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".env"),
            "# comment\n\nexport APP_ENV=\"production\"\nAPP_HIDE_LOG='true'\nAPP_RESOURCE_URL=https://cdn.example.com/app/\n",
        )
        .unwrap();

        let env = EnvMap::load_files(dir.path(), "development").unwrap();
        assert_eq!(env.get("APP_ENV"), Some("production"));
        assert_eq!(env.get("APP_HIDE_LOG"), Some("true"));
        assert_eq!(
            env.get("APP_RESOURCE_URL"),
            Some("https://cdn.example.com/app/")
        );
    }

    #[test]
    fn value_may_contain_equals() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".env"), "APP_SERVE_URL=http://h?a=1&b=2\n").unwrap();

        let env = EnvMap::load_files(dir.path(), "development").unwrap();
        assert_eq!(env.get("APP_SERVE_URL"), Some("http://h?a=1&b=2"));
    }

    #[test]
    fn malformed_line_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".env"), "JUST_A_WORD\n").unwrap();

        let err = EnvMap::load_files(dir.path(), "development").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvFile { line: 1, .. }));
    }

    #[test]
    fn has_requires_non_empty() {
        let env: EnvMap = [("A", "1"), ("B", "")].into_iter().collect();
        assert!(env.has("A"));
        assert!(!env.has("B"));
        assert!(!env.has("C"));
    }
}
