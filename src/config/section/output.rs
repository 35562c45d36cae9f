//! `[output]` section configuration.
//!
//! ```toml
//! [output]
//! file = "sprite.svg"
//! formatting = { indent_size = 2 }   # or false for compact output
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_INDENT: usize = 2;

/// `formatting` accepts `false` (compact, the default), `true` (pretty with
/// the default indent) or an inline table with an explicit `indent_size`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FormattingSetting {
    Toggle(bool),
    Options(FormattingConfig),
}

impl Default for FormattingSetting {
    fn default() -> Self {
        Self::Toggle(false)
    }
}

impl FormattingSetting {
    /// `Some(indent)` when pretty-printing is requested.
    pub fn indent_size(&self) -> Option<usize> {
        match self {
            Self::Toggle(false) => None,
            Self::Toggle(true) => Some(DEFAULT_INDENT),
            Self::Options(options) => Some(options.indent_size),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingConfig {
    pub indent_size: usize,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            indent_size: DEFAULT_INDENT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Sprite file path, relative to the project root.
    pub file: PathBuf,

    /// Pretty-printing of the composite.
    pub formatting: FormattingSetting,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("sprite.svg"),
            formatting: FormattingSetting::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;
    use std::path::Path;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.output.file, Path::new("sprite.svg"));
        assert_eq!(config.output.formatting.indent_size(), None);
    }

    #[test]
    fn test_formatting_variants() {
        let config = test_parse_config("[output]\nformatting = true");
        assert_eq!(config.output.formatting.indent_size(), Some(2));

        let config = test_parse_config("[output]\nformatting = false");
        assert_eq!(config.output.formatting.indent_size(), None);

        let config = test_parse_config("[output]\nformatting = { indent_size = 4 }");
        assert_eq!(config.output.formatting.indent_size(), Some(4));
    }
}
