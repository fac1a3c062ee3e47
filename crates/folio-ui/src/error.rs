//! Error types for the browser front end
//!
//! None of these reach the page: the viewport adapter logs them and leaves
//! the affected section in its initial state.

use folio_core::Section;

/// Errors raised while wiring the page to browser APIs
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    /// Failed to get window object
    #[error("failed to get window: window is not available")]
    WindowNotAvailable,

    /// Failed to get document object
    #[error("failed to get document: document is not available")]
    DocumentNotAvailable,

    /// No element carries the section's `data-section` attribute
    #[error("section '{0}' not found in document")]
    SectionNotFound(Section),

    /// The browser refused to create an `IntersectionObserver`
    #[error("intersection observer unavailable: {0}")]
    ObserverUnavailable(String),
}

/// Result type alias for front-end operations
pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = UiError::SectionNotFound(Section::Projects);
        assert_eq!(error.to_string(), "section 'projects' not found in document");

        let error = UiError::ObserverUnavailable("TypeError".to_string());
        assert_eq!(error.to_string(), "intersection observer unavailable: TypeError");

        assert!(UiError::WindowNotAvailable.to_string().contains("window"));
    }

    #[test]
    fn test_result_type() {
        let failure: Result<()> = Err(UiError::DocumentNotAvailable);
        assert!(failure.is_err());
    }
}
