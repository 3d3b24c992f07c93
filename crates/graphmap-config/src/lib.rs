//! TOML mapping configuration for graphmap.
//!
//! ```toml
//! synthetic_field_prefix = "ajc"
//!
//! [listeners]
//! indexing = true
//! index_name = "node"
//! ```
//!
//! Every key is optional; a missing key takes its default and an unknown key
//! is rejected.

mod error;


pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Reserved name prefix of fields injected by the interception layer.
pub const DEFAULT_SYNTHETIC_FIELD_PREFIX: &str = "ajc";

/// Index the indexing listener writes into.
pub const DEFAULT_INDEX_NAME: &str = "node";

///
/// MappingConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MappingConfig {
    pub synthetic_field_prefix: String,
    pub listeners: ListenerConfig,
}

impl MappingConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;

        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&source)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_prefix(&self.synthetic_field_prefix) {
            return Err(ConfigError::InvalidPrefix {
                prefix: self.synthetic_field_prefix.clone(),
            });
        }
        self.listeners.validate()
    }
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            synthetic_field_prefix: DEFAULT_SYNTHETIC_FIELD_PREFIX.to_string(),
            listeners: ListenerConfig::default(),
        }
    }
}

///
/// ListenerConfig
/// Built-in listener switches.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListenerConfig {
    pub indexing: bool,
    pub index_name: String,
}

impl ListenerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.index_name.trim().is_empty() {
            return Err(ConfigError::InvalidIndexName {
                name: self.index_name.clone(),
            });
        }

        Ok(())
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            indexing: true,
            index_name: DEFAULT_INDEX_NAME.to_string(),
        }
    }
}

// Identifier characters only, so the prefix can never match part of a path.
fn is_valid_prefix(prefix: &str) -> bool {
    !prefix.is_empty()
        && prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
