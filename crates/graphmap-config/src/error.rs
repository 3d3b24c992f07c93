use std::{io, path::PathBuf};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("synthetic field prefix '{prefix}' must be non-empty identifier characters")]
    InvalidPrefix { prefix: String },

    #[error("index name '{name}' must not be blank")]
    InvalidIndexName { name: String },
}
