//! Leptos views of the portfolio page
//!
//! Class lists and inline styles come from `folio_core::style`, so these
//! views and the core renderer agree on every string.

pub mod background;
pub mod card;
pub mod experience;
pub mod hero;
pub mod icons;
pub mod projects;
pub mod section;
pub mod skills;

pub use background::AnimatedBackground;
pub use card::Card;
pub use experience::ExperienceSection;
pub use hero::Hero;
pub use icons::IconGlyph;
pub use projects::ProjectsSection;
pub use section::{ContentSection, SectionShell};
pub use skills::SkillsSection;
