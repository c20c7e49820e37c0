//! Output naming templates and the vendor chunk-splitting policy.

use serde::{Deserialize, Serialize};

/// Directory name that marks installed dependencies.
pub const VENDOR_DIR: &str = "node_modules";

/// Path marker separating a module id from its package path.
const VENDOR_MARKER: &str = "node_modules/";

/// Chunk and asset naming configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkOptions {
    #[serde(default = "ChunkOptions::default_entry_file_names")]
    pub entry_file_names: String,

    #[serde(default = "ChunkOptions::default_chunk_file_names")]
    pub chunk_file_names: String,

    #[serde(default = "ChunkOptions::default_asset_file_names")]
    pub asset_file_names: String,

    /// Split every top-level dependency package into its own chunk
    #[serde(default = "crate::build::helpers::default_true")]
    pub vendor_split: bool,
}

impl ChunkOptions {
    fn default_entry_file_names() -> String {
        "assets/js/[name]-[hash].js".to_string()
    }

    fn default_chunk_file_names() -> String {
        "assets/js/[name]-[hash].js".to_string()
    }

    fn default_asset_file_names() -> String {
        "assets/[ext]/[name]-[hash].[ext]".to_string()
    }
}

impl Default for ChunkOptions {
    fn default() -> Self {
        Self {
            entry_file_names: Self::default_entry_file_names(),
            chunk_file_names: Self::default_chunk_file_names(),
            asset_file_names: Self::default_asset_file_names(),
            vendor_split: true,
        }
    }
}

/// Chunk name for a module id, if the module lives under a dependency root.
///
/// The name is the first path segment after the *last* `node_modules/`
/// occurrence, so nested installations attribute a module to the package
/// that actually contains it:
///
/// ```
/// use rill_config::build::vendor_chunk_name;
///
/// assert_eq!(
///     vendor_chunk_name("/app/node_modules/lodash/map.js").as_deref(),
///     Some("lodash")
/// );
/// assert_eq!(
///     vendor_chunk_name("node_modules/a/node_modules/b/index.js").as_deref(),
///     Some("b")
/// );
/// assert_eq!(vendor_chunk_name("src/pages/home.jsx"), None);
/// ```
pub fn vendor_chunk_name(module_id: &str) -> Option<String> {
    let (_, tail) = module_id.rsplit_once(VENDOR_MARKER)?;
    let package = tail.split('/').next().unwrap_or_default();
    if package.is_empty() {
        return None;
    }
    Some(package.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_modules_split_by_package() {
        assert_eq!(
            vendor_chunk_name("/repo/node_modules/react-dom/client.js").as_deref(),
            Some("react-dom")
        );
    }

    #[test]
    fn scoped_packages_split_by_scope() {
        // The first segment of a scoped package is the scope directory, which
        // groups every package under the scope into one chunk.
        assert_eq!(
            vendor_chunk_name("node_modules/@babel/runtime/helpers/esm/extends.js").as_deref(),
            Some("@babel")
        );
    }

    #[test]
    fn nested_installs_use_last_marker() {
        assert_eq!(
            vendor_chunk_name("node_modules/antd-mobile/node_modules/classnames/index.js")
                .as_deref(),
            Some("classnames")
        );
    }

    #[test]
    fn first_party_modules_are_not_split() {
        assert_eq!(vendor_chunk_name("src/utils/request.js"), None);
        assert_eq!(vendor_chunk_name(""), None);
    }

    #[test]
    fn trailing_marker_yields_no_chunk() {
        assert_eq!(vendor_chunk_name("/repo/node_modules/"), None);
    }

    #[test]
    fn naming_templates_default_to_hashed_assets() {
        let chunks = ChunkOptions::default();
        assert_eq!(chunks.entry_file_names, "assets/js/[name]-[hash].js");
        assert_eq!(chunks.chunk_file_names, "assets/js/[name]-[hash].js");
        assert_eq!(chunks.asset_file_names, "assets/[ext]/[name]-[hash].[ext]");
        assert!(chunks.vendor_split);
    }
}
