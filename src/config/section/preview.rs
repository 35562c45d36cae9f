//! `[preview]` section configuration.
//!
//! ```toml
//! [preview]
//! enable = true
//! template = "my-preview.html"   # optional, placeholder-based
//! ```
//!
//! The preview page is written next to the sprite as `<stem>-preview.html`.
//! A custom template uses the `__SPRITE__` and `__ICONS__` placeholders.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub enable: bool,

    /// Custom template path, relative to the project root.
    pub template: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(!config.preview.enable);
        assert!(config.preview.template.is_none());
    }

    #[test]
    fn test_custom_template() {
        let config = test_parse_config("[preview]\nenable = true\ntemplate = \"demo.html\"");
        assert!(config.preview.enable);
        assert_eq!(config.preview.template, Some(PathBuf::from("demo.html")));
    }
}
