//! `[input]` section configuration.
//!
//! ```toml
//! [input]
//! paths = ["icons", "extra/logo.svg"]
//! ```
//!
//! Entries are files or directories, relative to the project root. Input
//! order is the symbol order of the sprite; directories are expanded
//! recursively with entries sorted by name for determinism.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub paths: Vec<PathBuf>,
}
