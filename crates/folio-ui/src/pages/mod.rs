//! Page components

pub mod portfolio;

pub use portfolio::PortfolioPage;
