//! Error types for loading formatting configuration
//!
//! Formatting itself never fails; only reading options or batch items from
//! configuration documents can.

use thiserror::Error;

/// Error raised while loading options or batch items from configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid TOML or does not match the expected shape
    #[error("Error parsing TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
