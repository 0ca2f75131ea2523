//! Error types for linea
//!
//! `VectorError` covers the fallible corners of the vector type; the demo
//! layers its own errors on top.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by vector operations that cannot return a meaningful value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VectorError {
    #[error("vector has zero length")]
    ZeroLength,

    #[error("vector has a non-finite component")]
    NonFinite,

    #[error("component index {0} out of range for a 2D vector")]
    IndexOutOfRange(usize),

    #[error("cannot parse '{0}' as a 2D vector")]
    Parse(String),
}

/// Errors raised while loading or validating a demo configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid value for '{key}': {reason}")]
    InvalidParameter { key: String, reason: String },

    #[error("unknown config key '{0}'")]
    UnknownKey(String),
}

impl ConfigError {
    pub(crate) fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidParameter {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised by the rotating-line demo at runtime.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("renderer '{0}' not started")]
    NotStarted(&'static str),
}
