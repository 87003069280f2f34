//! Configuration for loading YAML into node trees.
//!
//! The iterator layer itself has no settings. Loading does: whether implicit
//! core-schema tags are resolved, and how much input is accepted. Settings
//! deserialize from TOML with a default for every field.
//!
//! # Example
//!
//! ```
//! use yit::config::LoaderConfig;
//!
//! let config = LoaderConfig::default();
//! assert!(config.resolve_tags);
//! assert_eq!(config.max_input_bytes, 104_857_600);
//!
//! let custom = LoaderConfig::from_toml_str("resolve_tags = false").unwrap();
//! assert!(!custom.resolve_tags);
//! assert_eq!(custom.max_input_bytes, 104_857_600);
//! ```

use crate::document::parser::ParseOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings used by the file loader.
///
/// * `resolve_tags` - Assign core-schema tags to untagged nodes (default: true)
/// * `max_input_bytes` - Largest accepted input after decompression (default: 100MB)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Assign core-schema tags to untagged nodes
    #[serde(default = "default_resolve_tags")]
    pub resolve_tags: bool,

    /// Largest accepted input in bytes, measured after decompression
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,
}

/// Returns the default for tag resolution.
fn default_resolve_tags() -> bool {
    true
}

/// Returns the default input limit (100MB).
fn default_max_input_bytes() -> usize {
    104_857_600
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            resolve_tags: default_resolve_tags(),
            max_input_bytes: default_max_input_bytes(),
        }
    }
}

impl LoaderConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads configuration from a TOML file.
    ///
    /// Returns the default configuration if the file doesn't exist, can't be
    /// read or doesn't parse.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents).unwrap_or_else(|err| {
                tracing::warn!("Failed to parse loader config at {:?}: {}", path, err);
                Self::default()
            }),
            Err(err) => {
                tracing::warn!("Failed to read loader config at {:?}: {}", path, err);
                Self::default()
            }
        }
    }

    /// Writes the configuration as TOML, creating parent directories.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// The parser options implied by this configuration.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            resolve_tags: self.resolve_tags,
        }
    }
}
