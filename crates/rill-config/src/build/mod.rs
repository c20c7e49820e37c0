//! Build option types handed to the external bundler.

mod chunks;
mod css;
pub(crate) mod helpers;
mod types;

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use chunks::{vendor_chunk_name, ChunkOptions, VENDOR_DIR};
pub use css::{AutoprefixerOptions, CssOptions, PxToRemOptions};
pub use types::{
    AnalyzeOptions, CompressionAlgorithm, CompressionOptions, ImportOnDemandOptions, LegacyOptions,
    LintOptions, MinifyOptions, MinifyTool,
};

use helpers::{default_assets_dir, default_inline_limit, default_output_dir, default_true};

/// Main build configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Output directory for generated artifacts
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Directory for static assets inside the output directory
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,

    /// Assets below this many bytes are inlined as base64
    #[serde(default = "default_inline_limit")]
    pub assets_inline_limit: u64,

    /// Emit one stylesheet per async chunk
    #[serde(default = "default_true")]
    pub css_code_split: bool,

    /// Minification policy
    #[serde(default)]
    pub minify: MinifyOptions,

    /// Chunk and asset naming
    #[serde(default)]
    pub chunks: ChunkOptions,

    /// CSS post-processing
    #[serde(default)]
    pub css: CssOptions,

    /// Artifact compression
    #[serde(default)]
    pub compression: CompressionOptions,

    /// Legacy-browser transpilation
    #[serde(default)]
    pub legacy: LegacyOptions,

    /// Bundle-analysis report
    #[serde(default)]
    pub analyze: AnalyzeOptions,

    /// On-demand component imports
    #[serde(default)]
    pub import_on_demand: ImportOnDemandOptions,

    /// Lint globs checked during the build
    #[serde(default)]
    pub lint: LintOptions,

    /// Import aliases (e.g. `@` → `src`)
    #[serde(default = "BuildOptions::default_alias")]
    pub alias: BTreeMap<String, PathBuf>,
}

impl BuildOptions {
    fn default_alias() -> BTreeMap<String, PathBuf> {
        BTreeMap::from([("@".to_string(), PathBuf::from("src"))])
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            assets_dir: default_assets_dir(),
            assets_inline_limit: default_inline_limit(),
            css_code_split: true,
            minify: MinifyOptions::default(),
            chunks: ChunkOptions::default(),
            css: CssOptions::default(),
            compression: CompressionOptions::default(),
            legacy: LegacyOptions::default(),
            analyze: AnalyzeOptions::default(),
            import_on_demand: ImportOnDemandOptions::default(),
            lint: LintOptions::default(),
            alias: Self::default_alias(),
        }
    }
}
