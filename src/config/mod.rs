//! Configuration management for `svgstash.toml`.
//!
//! # Sections
//!
//! | Section             | Purpose                                        |
//! |---------------------|------------------------------------------------|
//! | `[input]`           | Source files/directories, in sprite order      |
//! | `[output]`          | Sprite path and pretty-printing                |
//! | `[merge]`           | Prefix, viewBox inheritance, cleanup rules     |
//! | `[merge.svg]`       | Composite root attributes                      |
//! | `[merge.symbol]`    | Attributes merged onto every symbol            |
//! | `[merge.fixed_size]`| Fixed-frame derived symbols                    |
//! | `[preview]`         | HTML preview page                              |

mod error;
mod section;
mod util;

pub use error::ConfigError;
pub use section::{
    CleanupSetting, FixedSizeConfig, FormattingConfig, FormattingSetting, InputConfig, MaxDigits,
    MergeSectionConfig, OutputConfig, PreviewConfig, SVG_XMLNS,
};

use crate::cli::{Cli, Commands};
use crate::log;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing svgstash.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StashConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Input sources
    #[serde(default)]
    pub input: InputConfig,

    /// Output sprite settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Merge engine settings
    #[serde(default)]
    pub merge: MergeSectionConfig,

    /// Preview page settings
    #[serde(default)]
    pub preview: PreviewConfig,
}

impl StashConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find the config
    /// file; the project root is the config file's parent directory. CLI
    /// options win over file values.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        if !cli.is_init() && !exists {
            log!(
                "error";
                "Config file '{}' not found. Run 'svgstash init' to create one.",
                cli.config.display()
            );
            std::process::exit(1);
        }

        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        config.config_path = config_path;
        config.finalize(cli);

        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        if cli.is_init() {
            let path = std::env::current_dir()?.join(&cli.config);
            let exists = path.exists();
            return Ok((path, exists));
        }

        match util::find_config_file(&cli.config) {
            Some(path) => Ok((path, true)),
            None => {
                let path = std::env::current_dir()?.join(&cli.config);
                Ok((path, false))
            }
        }
    }

    /// Finalize configuration after loading: resolve the project root and
    /// fold CLI overrides in.
    fn finalize(&mut self, cli: &Cli) {
        self.root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        if let Commands::Build { build_args } = &cli.command {
            if !build_args.inputs.is_empty() {
                self.input.paths = build_args.inputs.clone();
            }
            if let Some(output) = &build_args.output {
                self.output.file = output.clone();
            }
            if let Some(prefix) = &build_args.prefix {
                self.merge.prefix = prefix.clone();
            }
            if let Some(preview) = build_args.preview {
                self.preview.enable = preview;
            }
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "ignoring unknown fields in {}:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Full validation after CLI overrides are applied.
    fn validate(&self) -> Result<()> {
        self.merge
            .validate()
            .map_err(ConfigError::Validation)?;
        Ok(())
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory; absolute paths pass through.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

/// Parse a config from a TOML snippet, panicking on error. Test helper.
#[cfg(test)]
pub(crate) fn test_parse_config(content: &str) -> StashConfig {
    StashConfig::from_str(content).expect("test config should parse")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config = test_parse_config("");
        assert!(config.input.paths.is_empty());
        assert_eq!(config.output.file, PathBuf::from("sprite.svg"));
        assert!(!config.preview.enable);
    }

    #[test]
    fn test_unknown_fields_collected() {
        let (_, ignored) =
            StashConfig::parse_with_ignored("[merge]\nprefix = \"x\"\nbogus = 1").unwrap();
        assert_eq!(ignored, vec!["merge.bogus"]);
    }

    #[test]
    fn test_root_join() {
        let config = StashConfig {
            root: PathBuf::from("/project"),
            ..StashConfig::default()
        };
        assert_eq!(config.root_join("icons"), PathBuf::from("/project/icons"));
        assert_eq!(config.root_join("/abs/icons"), PathBuf::from("/abs/icons"));
    }
}
