//! `[merge]` section configuration.
//!
//! Controls the merge engine itself: id prefixing, viewBox inheritance,
//! attribute cleanup, root/symbol attributes and the optional fixed-size
//! derivation.
//!
//! # Example
//!
//! ```toml
//! [merge]
//! prefix = "icon-"
//! inherit_viewbox = true
//! cleanup_defs = false
//! cleanup = ["style", "fill"]   # or true (= ["style"]) / false
//!
//! [merge.svg]
//! xmlns = "http://www.w3.org/2000/svg"
//! "xmlns:xlink" = "http://www.w3.org/1999/xlink"
//!
//! [merge.symbol]
//! preserveAspectRatio = "xMidYMid meet"
//!
//! [merge.fixed_size]
//! width = 50
//! height = 50
//! suffix = "-fixed-size"
//! max_digits = { scale = 4, translation = 4 }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const SVG_XMLNS: &str = "http://www.w3.org/2000/svg";

/// Upper bound for `max_digits` rounding precision.
const MAX_ROUNDING_DIGITS: u32 = 12;

/// `cleanup` accepts a bool (`true` is legacy shorthand for `["style"]`)
/// or an explicit attribute list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CleanupSetting {
    Toggle(bool),
    Attributes(Vec<String>),
}

impl Default for CleanupSetting {
    fn default() -> Self {
        Self::Toggle(false)
    }
}

impl CleanupSetting {
    /// Resolve to the concrete list of attribute names to strip.
    pub fn attribute_list(&self) -> Vec<String> {
        match self {
            Self::Toggle(false) => Vec::new(),
            Self::Toggle(true) => vec!["style".to_string()],
            Self::Attributes(attrs) => attrs.clone(),
        }
    }
}

/// Rounding precision for the fixed-size transform components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaxDigits {
    pub scale: u32,
    pub translation: u32,
}

impl Default for MaxDigits {
    fn default() -> Self {
        Self {
            scale: 4,
            translation: 4,
        }
    }
}

/// `[merge.fixed_size]` - presence enables the derived fixed-size symbols.
/// Width and height default independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedSizeConfig {
    pub width: f64,
    pub height: f64,
    /// Appended to the parent's graphic id.
    pub suffix: String,
    pub max_digits: MaxDigits,
}

impl Default for FixedSizeConfig {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 50.0,
            suffix: "-fixed-size".to_string(),
            max_digits: MaxDigits::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeSectionConfig {
    /// Prepended to every derived graphic id.
    pub prefix: String,

    /// Synthesize a viewBox from width/height when the source has none.
    pub inherit_viewbox: bool,

    /// Apply attribute cleanup inside `<defs>` subtrees too.
    pub cleanup_defs: bool,

    /// Attribute cleanup rules.
    pub cleanup: CleanupSetting,

    /// Attributes of the composite root. A user-supplied table replaces the
    /// default wholesale.
    pub svg: IndexMap<String, String>,

    /// Attributes merged onto every symbol (fixed-size ones included).
    pub symbol: IndexMap<String, String>,

    /// Fixed-size derivation; absent = disabled.
    pub fixed_size: Option<FixedSizeConfig>,
}

impl Default for MergeSectionConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            inherit_viewbox: false,
            cleanup_defs: false,
            cleanup: CleanupSetting::default(),
            svg: default_root_attrs(),
            symbol: IndexMap::new(),
            fixed_size: None,
        }
    }
}

fn default_root_attrs() -> IndexMap<String, String> {
    IndexMap::from([("xmlns".to_string(), SVG_XMLNS.to_string())])
}

impl MergeSectionConfig {
    /// Validate the section, returning the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(fixed) = &self.fixed_size {
            if fixed.width <= 0.0 || fixed.height <= 0.0 {
                return Err(format!(
                    "merge.fixed_size width/height must be positive (got {} x {})",
                    fixed.width, fixed.height
                ));
            }
            // past f64 precision the power-of-ten factor overflows
            let digits = &fixed.max_digits;
            if digits.scale > MAX_ROUNDING_DIGITS || digits.translation > MAX_ROUNDING_DIGITS {
                return Err(format!(
                    "merge.fixed_size max_digits must be at most {MAX_ROUNDING_DIGITS} \
                     (got scale {} / translation {})",
                    digits.scale, digits.translation
                ));
            }
        }
        Ok(())
    }
}
