//! Core error types for Folio operations.
//!
//! Nothing on the live page can fail; these errors only surface when
//! identifiers or configuration arrive as text (DOM attributes, config files).

use thiserror::Error;

/// Core error type for Folio operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    // Identifier errors
    #[error("unknown section '{key}'")]
    UnknownSection { key: String },

    #[error("unknown card id '{key}'")]
    UnknownCard { key: String },

    // Configuration errors
    #[error("intersection threshold must be a finite ratio in 0.0..=1.0, got {value}")]
    InvalidThreshold { value: f64 },

    #[error("{format} config parse error: {reason}")]
    ConfigParseFailed { format: &'static str, reason: String },
}

impl Error {
    /// Create an unknown section error.
    pub fn unknown_section(key: impl Into<String>) -> Self {
        Self::UnknownSection { key: key.into() }
    }

    /// Create an unknown card error.
    pub fn unknown_card(key: impl Into<String>) -> Self {
        Self::UnknownCard { key: key.into() }
    }

    /// Create a config parse error.
    pub fn config_parse_failed(format: &'static str, reason: impl Into<String>) -> Self {
        Self::ConfigParseFailed {
            format,
            reason: reason.into(),
        }
    }
}
