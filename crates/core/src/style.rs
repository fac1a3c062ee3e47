//! Conditional classes and inline styles
//!
//! Pure functions of the state flags; the same inputs always produce the
//! same strings, whichever renderer asks.

use std::fmt;

use crate::section::{CardId, Section};

/// Horizontal shift of an active card's bullet points
pub const BULLET_OFFSET_PX: u32 = 8;
/// Horizontal shift of an active card's tech tags
pub const TAG_OFFSET_PX: u32 = 4;
/// Stagger between consecutive bullet points
pub const BULLET_STAGGER_MS: u32 = 100;
/// Stagger between consecutive tags
pub const TAG_STAGGER_MS: u32 = 50;

const SECTION_TRANSITION: &str = "transition-all duration-1000";

const HERO_BASE: &str = "min-h-screen flex flex-col items-center justify-center p-8";
const HERO_SHOWN: &str = "opacity-100 scale-100";
const HERO_HIDDEN: &str = "opacity-0 scale-95";

const CONTENT_BASE: &str = "py-20 px-8";
const CONTENT_SHOWN: &str = "translate-y-0 opacity-100";
const CONTENT_HIDDEN: &str = "translate-y-10 opacity-0";

/// Static class lists shared by every renderer
pub mod classes {
    pub const PAGE: &str = "relative min-h-screen text-emerald-50";
    pub const CONTENT_LAYER: &str = "relative z-10";
    pub const SECTION_BODY: &str = "max-w-4xl mx-auto";
    pub const HEADING: &str = "text-4xl font-bold mb-12 text-center bg-gradient-to-r from-emerald-400 to-green-400 bg-clip-text text-transparent";
    /// The projects heading runs its gradient the other way
    pub const PROJECTS_HEADING: &str = "text-4xl font-bold mb-12 text-center bg-gradient-to-r from-green-400 to-emerald-400 bg-clip-text text-transparent";

    pub const HERO_BODY: &str = "text-center relative";
    pub const HERO_GLOW: &str =
        "absolute inset-0 bg-gradient-to-r from-emerald-800 to-green-800 blur-3xl opacity-10";
    pub const HERO_NAME: &str = "text-6xl font-bold mb-4 leading-tight relative animate-text bg-gradient-to-r from-emerald-400 via-green-400 to-teal-400 bg-clip-text text-transparent";
    pub const HERO_HEADLINE: &str = "text-2xl mb-8 text-emerald-200";
    pub const HERO_LINKS: &str = "flex justify-center space-x-6";
    pub const SCROLL_HINT: &str =
        "fixed bottom-8 left-1/2 transform -translate-x-1/2 animate-bounce text-emerald-400";
    /// Class of each hero link, in link order
    pub const LINKS: [&str; 3] = [
        "transform hover:scale-110 hover:rotate-6 transition-all duration-300 text-emerald-400 hover:text-emerald-300",
        "transform hover:scale-110 hover:-rotate-6 transition-all duration-300 text-green-400 hover:text-green-300",
        "transform hover:scale-110 hover:rotate-6 transition-all duration-300 text-teal-400 hover:text-teal-300",
    ];

    pub const EXPERIENCE_LIST: &str = "space-y-12";
    pub const PROJECT_GRID: &str = "grid grid-cols-1 gap-8";
    pub const SKILL_GRID: &str = "grid grid-cols-1 md:grid-cols-2 gap-8";

    pub const CARD: &str = "group relative bg-gray-900 rounded-lg p-6 shadow-lg hover:shadow-2xl transition-all duration-500 transform hover:-translate-y-1";
    pub const CARD_GLOW: &str = "absolute -inset-0.5 bg-gradient-to-r from-emerald-700 to-green-700 rounded-lg blur opacity-20 group-hover:opacity-100 transition duration-1000 group-hover:duration-200";
    pub const EXPERIENCE_HEADER: &str = "relative flex items-center gap-4";
    pub const EXPERIENCE_BULLETS: &str = "mt-4 space-y-2";
    pub const EXPERIENCE_TAGS: &str = "flex flex-wrap gap-2 mt-4";
    pub const PROJECT_BODY: &str = "relative";
    pub const PROJECT_HEADER: &str = "flex items-center gap-4 mb-4";
    pub const PROJECT_BULLETS: &str = "mt-4 space-y-2 mb-6";
    pub const PROJECT_TAGS: &str = "flex flex-wrap gap-2";
    pub const BADGE: &str =
        "p-2 bg-gray-800 rounded-lg transform group-hover:rotate-12 transition-transform duration-300";
    pub const CARD_TITLE: &str = "text-2xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-emerald-400 to-green-400";
    pub const CARD_SUBTITLE: &str = "text-emerald-200";
    pub const BULLET: &str =
        "text-emerald-100 pl-4 border-l-2 border-emerald-600 transform transition-all duration-300";
    pub const TAG: &str = "bg-gray-800 px-3 py-1 rounded-full text-sm transform transition-all duration-300 hover:scale-110 hover:rotate-3 text-emerald-200";

    pub const SKILL_CARD: &str =
        "group bg-gray-900 rounded-lg p-6 shadow-lg hover:shadow-2xl transition-all duration-500";
    pub const SKILL_TITLE: &str = "text-xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-emerald-400 to-green-400 mb-4 capitalize";
    pub const SKILL_LIST: &str = "flex flex-wrap gap-2";
    pub const SKILL: &str = "bg-gray-800 px-3 py-1 rounded-full text-sm transform transition-all duration-300 hover:scale-110 hover:bg-gray-700 text-emerald-200";

    pub const BACKGROUND: &str = "fixed inset-0 z-0 overflow-hidden";
    pub const BACKGROUND_BASE: &str =
        "absolute inset-0 bg-gradient-to-b from-gray-950 via-emerald-950 to-green-950";
    pub const BACKGROUND_ORBS: &str = "absolute inset-0";
    pub const BACKGROUND_VIGNETTE: &str = "absolute inset-0 bg-vignette";
    /// Position, tint and animation of each floating orb
    pub const ORBS: [&str; 3] = [
        "absolute top-1/4 left-1/4 w-96 h-96 bg-emerald-600/20 rounded-full blur-3xl animate-float-slow",
        "absolute top-3/4 right-1/4 w-96 h-96 bg-green-600/20 rounded-full blur-3xl animate-float-slower",
        "absolute top-1/2 left-1/2 w-96 h-96 bg-teal-600/20 rounded-full blur-3xl animate-float",
    ];
}

/// Class list of a section in its pre-animation or entered state
#[must_use]
pub fn section_class(section: Section, visible: bool) -> String {
    let (base, state) = match (section, visible) {
        (Section::Hero, true) => (HERO_BASE, HERO_SHOWN),
        (Section::Hero, false) => (HERO_BASE, HERO_HIDDEN),
        (_, true) => (CONTENT_BASE, CONTENT_SHOWN),
        (_, false) => (CONTENT_BASE, CONTENT_HIDDEN),
    };
    format!("{base} {SECTION_TRANSITION} {state}")
}

/// Class of a section's heading
#[must_use]
pub const fn heading_class(section: Section) -> &'static str {
    match section {
        Section::Projects => classes::PROJECTS_HEADING,
        _ => classes::HEADING,
    }
}

/// Class lists of a card's inner blocks, which differ between experience
/// and project cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    /// Wrapper around everything but the glow, if any
    pub body: Option<&'static str>,
    pub header: &'static str,
    pub bullets: &'static str,
    pub tags: &'static str,
}

/// Layout of a card's header, bullet list and tag list
#[must_use]
pub const fn card_layout(card: CardId) -> CardLayout {
    match card {
        CardId::Experience(_) => CardLayout {
            body: None,
            header: classes::EXPERIENCE_HEADER,
            bullets: classes::EXPERIENCE_BULLETS,
            tags: classes::EXPERIENCE_TAGS,
        },
        CardId::Project(_) => CardLayout {
            body: Some(classes::PROJECT_BODY),
            header: classes::PROJECT_HEADER,
            bullets: classes::PROJECT_BULLETS,
            tags: classes::PROJECT_TAGS,
        },
    }
}

/// Inline style of a list item inside a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemStyle {
    /// `None` leaves the item in place
    pub offset_px: Option<u32>,
    pub delay_ms: u32,
}

impl ItemStyle {
    /// CSS declarations for the `style` attribute
    #[must_use]
    pub fn to_css(self) -> String {
        self.to_string()
    }

    /// Value of the `transform` property
    #[must_use]
    pub fn transform(self) -> String {
        self.offset_px
            .map_or_else(|| "none".to_string(), |px| format!("translateX({px}px)"))
    }
}

impl fmt::Display for ItemStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "transform: {}; transition-delay: {}ms",
            self.transform(),
            self.delay_ms
        )
    }
}

fn staggered(active: bool, offset_px: u32, stagger_ms: u32, index: usize) -> ItemStyle {
    let step = u32::try_from(index).unwrap_or(u32::MAX);
    ItemStyle {
        offset_px: active.then_some(offset_px),
        delay_ms: step.saturating_mul(stagger_ms),
    }
}

/// Style of the `index`-th bullet point of a card
#[must_use]
pub fn bullet_style(card_active: bool, index: usize) -> ItemStyle {
    staggered(card_active, BULLET_OFFSET_PX, BULLET_STAGGER_MS, index)
}

/// Style of the `index`-th tech tag of a card
#[must_use]
pub fn tag_style(card_active: bool, index: usize) -> ItemStyle {
    staggered(card_active, TAG_OFFSET_PX, TAG_STAGGER_MS, index)
}

/// Style of the `index`-th skill chip; skill chips never shift
#[must_use]
pub fn skill_style(index: usize) -> ItemStyle {
    staggered(false, 0, TAG_STAGGER_MS, index)
}
