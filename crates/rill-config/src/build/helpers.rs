//! Serde default helpers shared across the build option types.

use std::path::PathBuf;

pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_output_dir() -> PathBuf {
    PathBuf::from("build")
}

pub(crate) fn default_assets_dir() -> String {
    "assets".to_string()
}

/// Assets below this size are inlined as base64 (10 KiB).
pub(crate) fn default_inline_limit() -> u64 {
    10 * 1024
}

/// Compression is skipped for files below this size (5 KiB).
pub(crate) fn default_compression_threshold() -> u64 {
    5120
}

pub(crate) fn default_compression_ext() -> String {
    ".gz".to_string()
}

pub(crate) fn default_analyze_report() -> String {
    "stats.html".to_string()
}
