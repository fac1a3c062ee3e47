//! Section and card identifiers
//!
//! A [`Section`] is one of the four content blocks of the page; its key is the
//! value of the `data-section` attribute the viewport observer targets.
//! A [`CardId`] names one hoverable experience or project card.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Named content block of the page, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Hero,
    Experience,
    Projects,
    Skills,
}

impl Section {
    /// Every section, in the order the page presents them
    pub const ALL: [Self; 4] = [Self::Hero, Self::Experience, Self::Projects, Self::Skills];

    /// Stable key used in `data-section` attributes and config files
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Skills => "skills",
        }
    }

    /// Section heading shown above the content, if the section has one
    #[must_use]
    pub const fn heading(self) -> Option<&'static str> {
        match self {
            Self::Hero => None,
            Self::Experience => Some("Experience"),
            Self::Projects => Some("Projects"),
            Self::Skills => Some("Skills"),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.key() == s)
            .ok_or_else(|| Error::unknown_section(s))
    }
}

const EXPERIENCE_PREFIX: &str = "exp-";
const PROJECT_PREFIX: &str = "project-";

/// Identifier of a hoverable card: its position in the authored sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CardId {
    Experience(usize),
    Project(usize),
}

impl CardId {
    /// Position of the card within its section
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Experience(index) | Self::Project(index) => index,
        }
    }

    /// Section the card lives in
    #[must_use]
    pub const fn section(self) -> Section {
        match self {
            Self::Experience(_) => Section::Experience,
            Self::Project(_) => Section::Projects,
        }
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Experience(index) => write!(f, "{EXPERIENCE_PREFIX}{index}"),
            Self::Project(index) => write!(f, "{PROJECT_PREFIX}{index}"),
        }
    }
}

impl FromStr for CardId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Only the canonical form produced by `Display`: ASCII digits, no
        // sign, no leading zero
        let parse_index = |digits: &str| {
            let canonical = digits.bytes().all(|b| b.is_ascii_digit())
                && (digits == "0" || !digits.starts_with('0'));
            canonical
                .then(|| digits.parse::<usize>().ok())
                .flatten()
                .ok_or_else(|| Error::unknown_card(s))
        };

        if let Some(digits) = s.strip_prefix(EXPERIENCE_PREFIX) {
            parse_index(digits).map(Self::Experience)
        } else if let Some(digits) = s.strip_prefix(PROJECT_PREFIX) {
            parse_index(digits).map(Self::Project)
        } else {
            Err(Error::unknown_card(s))
        }
    }
}
