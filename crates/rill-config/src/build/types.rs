use serde::{Deserialize, Serialize};

use crate::build::helpers::{
    default_analyze_report, default_compression_ext, default_compression_threshold, default_true,
};

/// Minifier backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MinifyTool {
    /// Smaller output, slower
    #[default]
    Terser,
    /// Faster, slightly larger output
    Esbuild,
}

/// Minification policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MinifyOptions {
    #[serde(default)]
    pub tool: MinifyTool,

    /// Strip `console.*` calls from the output
    #[serde(default)]
    pub drop_console: bool,

    /// Strip `debugger` statements from the output
    #[serde(default)]
    pub drop_debugger: bool,
}

/// Compression algorithm for emitted artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionAlgorithm {
    #[default]
    Gzip,
    Brotli,
}

/// Artifact compression settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressionOptions {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default)]
    pub algorithm: CompressionAlgorithm,

    /// Files smaller than this many bytes are not compressed
    #[serde(default = "default_compression_threshold")]
    pub threshold: u64,

    /// Extension appended to compressed files
    #[serde(default = "default_compression_ext")]
    pub ext: String,

    /// Remove the uncompressed original after compressing
    #[serde(default)]
    pub delete_origin_file: bool,
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            algorithm: CompressionAlgorithm::Gzip,
            threshold: default_compression_threshold(),
            ext: default_compression_ext(),
            delete_origin_file: false,
        }
    }
}

/// Legacy-browser transpilation targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyOptions {
    #[serde(default = "LegacyOptions::default_targets")]
    pub targets: Vec<String>,
}

impl LegacyOptions {
    fn default_targets() -> Vec<String> {
        [
            "defaults",
            "not IE 11",
            "last 2 versions",
            "> 1%",
            "Android >= 4.4",
        ]
        .map(String::from)
        .to_vec()
    }
}

impl Default for LegacyOptions {
    fn default() -> Self {
        Self {
            targets: Self::default_targets(),
        }
    }
}

/// Bundle-analysis report settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeOptions {
    /// Open the report after the build finishes
    #[serde(default = "default_true")]
    pub open: bool,

    #[serde(default = "default_analyze_report")]
    pub filename: String,

    #[serde(default = "default_true")]
    pub gzip_size: bool,

    #[serde(default = "default_true")]
    pub brotli_size: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            open: true,
            filename: default_analyze_report(),
            gzip_size: true,
            brotli_size: true,
        }
    }
}

/// On-demand component import for the mobile kit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOnDemandOptions {
    pub library: String,

    /// Component directory inside the library
    pub directory: String,

    /// Also inject the per-component stylesheet
    #[serde(default)]
    pub style: bool,
}

impl Default for ImportOnDemandOptions {
    fn default() -> Self {
        Self {
            library: "antd-mobile".to_string(),
            directory: "es/components".to_string(),
            style: false,
        }
    }
}

/// Source globs checked during the build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintOptions {
    #[serde(default = "LintOptions::default_include")]
    pub include: Vec<String>,
}

impl LintOptions {
    fn default_include() -> Vec<String> {
        [
            "src/**/*.js",
            "src/**/*.jsx",
            "src/*.js",
            "src/*.jsx",
        ]
        .map(String::from)
        .to_vec()
    }
}

impl Default for LintOptions {
    fn default() -> Self {
        Self {
            include: Self::default_include(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compression_defaults() {
        let compression = CompressionOptions::default();
        assert!(compression.enabled);
        assert_eq!(compression.algorithm, CompressionAlgorithm::Gzip);
        assert_eq!(compression.threshold, 5120);
        assert_eq!(compression.ext, ".gz");
        assert!(!compression.delete_origin_file);
    }

    #[test]
    fn legacy_targets_include_old_android() {
        let legacy = LegacyOptions::default();
        assert!(legacy.targets.iter().any(|t| t == "Android >= 4.4"));
        assert_eq!(legacy.targets.len(), 5);
    }

    #[test]
    fn import_on_demand_targets_mobile_kit() {
        let import = ImportOnDemandOptions::default();
        assert_eq!(import.library, "antd-mobile");
        assert_eq!(import.directory, "es/components");
        assert!(!import.style);
    }

    #[test]
    fn minify_defaults_keep_console() {
        let minify = MinifyOptions::default();
        assert_eq!(minify.tool, MinifyTool::Terser);
        assert!(!minify.drop_console);
        assert!(!minify.drop_debugger);
    }
}
