//! Index error types.

use landmark::{Cell, Landmark};
use thiserror::Error;

/// Errors that can occur while building an index.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndexError {
    #[error("landmark not inside ({landmark}) {cell}")]
    OutOfBounds { landmark: Landmark, cell: Cell },
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to write default config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
