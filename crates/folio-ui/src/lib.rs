//! Leptos 0.7 CSR front end for the Folio portfolio page
//!
//! Renders the content from `folio-core` in the browser and feeds the
//! section visibility flags from a real `IntersectionObserver`.
//!
//! ## Module Structure
//! - `app`: root component
//! - `pages`: the portfolio page and its subscription lifecycle
//! - `components`: hero, cards, sections, icons and background
//! - `state`: page-local signals shared through context
//! - `viewport`: `IntersectionObserver` adapter
//! - `error`: browser-side error types

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod error;
pub mod pages;
pub mod state;
pub mod viewport;

pub use app::App;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_structure() {
        let _app = App;
        let _page = pages::PortfolioPage;
        let _viewport = viewport::DomViewport::new();
        assert_eq!(
            viewport::section_selector(folio_core::Section::Projects),
            "[data-section=\"projects\"]"
        );
    }

    #[test]
    fn test_error_types() {
        let err = error::UiError::SectionNotFound(folio_core::Section::Skills);
        assert!(err.to_string().contains("skills"));
    }
}
