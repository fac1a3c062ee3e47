//! Result type definition and logging combinators.
//!
//! Provides the crate-wide `Result` alias and an extension trait for the
//! places where the page must carry on with a fallback instead of failing.

use crate::error::Error;

/// The standard Result type for Folio operations.
///
/// # Examples
///
/// ```
/// use folio_core::{PageConfig, Result};
///
/// fn load(text: &str) -> Result<PageConfig> {
///     PageConfig::from_toml_str(text)
/// }
///
/// assert!(load("threshold = 0.25").is_ok());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait providing logged fallbacks for Results.
pub trait ResultExt<T> {
    /// Get the value or a default, logging the error if present.
    fn or_default_logged(self, default: T) -> T;
}

impl<T> ResultExt<T> for Result<T> {
    fn or_default_logged(self, default: T) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Operation failed, using default: {}", e);
                default
            }
        }
    }
}
