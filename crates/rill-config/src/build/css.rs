//! CSS post-processing configuration.
//!
//! The pixel-to-rem conversion carries the one policy decision in the CSS
//! pipeline: stylesheets from the mobile component kit are drawn against a
//! 375px artboard while first-party styles use a 750px artboard, so the two
//! need different root values. Getting this wrong silently rescales every
//! third-party component, which is why the selection lives in a pure,
//! separately tested function.

use serde::{Deserialize, Serialize};

use crate::build::chunks::VENDOR_DIR;
use crate::build::helpers::default_true;

/// CSS processing configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CssOptions {
    #[serde(default)]
    pub autoprefixer: AutoprefixerOptions,

    #[serde(default)]
    pub px_to_rem: PxToRemOptions,
}

/// Vendor-prefixing targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoprefixerOptions {
    #[serde(default = "AutoprefixerOptions::default_browserslist")]
    pub override_browserslist: Vec<String>,
}

impl AutoprefixerOptions {
    fn default_browserslist() -> Vec<String> {
        ["Android 4.1", "iOS 7.1", "Chrome > 31", "ff > 31", "ie >= 8"]
            .map(String::from)
            .to_vec()
    }
}

impl Default for AutoprefixerOptions {
    fn default() -> Self {
        Self {
            override_browserslist: Self::default_browserslist(),
        }
    }
}

/// Pixel-to-rem conversion rule set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PxToRemOptions {
    /// Root value for first-party styles (750px artboard / 10 halved)
    #[serde(default = "PxToRemOptions::default_root_value")]
    pub root_value: u32,

    /// Root value for mobile-kit styles (375px artboard)
    #[serde(default = "PxToRemOptions::default_mobile_kit_root_value")]
    pub mobile_kit_root_value: u32,

    /// Substring that classifies a file as belonging to the mobile kit
    #[serde(default = "PxToRemOptions::default_mobile_kit_marker")]
    pub mobile_kit_marker: String,

    /// Decimal places kept on converted values
    #[serde(default = "PxToRemOptions::default_unit_precision")]
    pub unit_precision: u32,

    /// Properties subject to conversion (`*` = all)
    #[serde(default = "PxToRemOptions::default_prop_list")]
    pub prop_list: Vec<String>,

    /// Selectors exempt from conversion
    #[serde(default = "PxToRemOptions::default_selector_black_list")]
    pub selector_black_list: Vec<String>,

    /// Pixel values at or above this are converted
    #[serde(default = "PxToRemOptions::default_min_pixel_value")]
    pub min_pixel_value: u32,

    /// Replace the original declaration instead of appending a fallback
    #[serde(default = "default_true")]
    pub replace: bool,
}

impl PxToRemOptions {
    fn default_root_value() -> u32 {
        100
    }

    fn default_mobile_kit_root_value() -> u32 {
        55
    }

    fn default_mobile_kit_marker() -> String {
        "antd-mobile".to_string()
    }

    fn default_unit_precision() -> u32 {
        5
    }

    fn default_prop_list() -> Vec<String> {
        vec!["*".to_string()]
    }

    fn default_selector_black_list() -> Vec<String> {
        vec!["norem".to_string()]
    }

    fn default_min_pixel_value() -> u32 {
        2
    }

    /// Conversion factor for a style file, selected by the mobile-kit marker.
    pub fn root_value_for(&self, file: &str) -> u32 {
        if file.contains(&self.mobile_kit_marker) {
            self.mobile_kit_root_value
        } else {
            self.root_value
        }
    }

    /// Whether a style file is converted at all.
    ///
    /// Vendor stylesheets are left untouched, except the mobile kit, whose
    /// components are designed to be rescaled with the page.
    pub fn should_transform(&self, file: &str) -> bool {
        !(file.contains(VENDOR_DIR) && !file.contains(&self.mobile_kit_marker))
    }
}

impl Default for PxToRemOptions {
    fn default() -> Self {
        Self {
            root_value: Self::default_root_value(),
            mobile_kit_root_value: Self::default_mobile_kit_root_value(),
            mobile_kit_marker: Self::default_mobile_kit_marker(),
            unit_precision: Self::default_unit_precision(),
            prop_list: Self::default_prop_list(),
            selector_black_list: Self::default_selector_black_list(),
            min_pixel_value: Self::default_min_pixel_value(),
            replace: true,
        }
    }
}
