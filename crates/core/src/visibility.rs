//! Sticky per-section visibility
//!
//! Each section moves from not-yet-visible to visible at most once, the first
//! time its intersection ratio reaches the threshold. Visible is terminal.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::section::Section;

/// Default fraction of a section's area that must be on screen
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Minimum intersection ratio that counts as "entered", in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct IntersectionThreshold(f64);

impl IntersectionThreshold {
    /// Creates a threshold
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidThreshold` if `ratio` is not finite or lies
    /// outside `0.0..=1.0`.
    pub fn new(ratio: f64) -> Result<Self, Error> {
        if ratio.is_finite() && (0.0..=1.0).contains(&ratio) {
            Ok(Self(ratio))
        } else {
            Err(Error::InvalidThreshold { value: ratio })
        }
    }

    /// The raw ratio
    #[must_use]
    pub const fn ratio(self) -> f64 {
        self.0
    }

    /// Whether an observed intersection ratio reaches this threshold
    #[must_use]
    pub fn is_met(self, ratio: f64) -> bool {
        ratio >= self.0
    }
}

impl Default for IntersectionThreshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

impl TryFrom<f64> for IntersectionThreshold {
    type Error = Error;

    fn try_from(ratio: f64) -> Result<Self, Self::Error> {
        Self::new(ratio)
    }
}

impl From<IntersectionThreshold> for f64 {
    fn from(threshold: IntersectionThreshold) -> Self {
        threshold.0
    }
}

/// Outcome of feeding an observation to the flag set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The section just became visible
    Entered,
    /// Nothing changed: already visible, or below threshold
    Unchanged,
}

impl Transition {
    #[must_use]
    pub const fn is_entered(self) -> bool {
        matches!(self, Self::Entered)
    }
}

/// One "has become visible" flag per section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SectionVisibility {
    hero: bool,
    experience: bool,
    projects: bool,
    skills: bool,
}

impl SectionVisibility {
    /// Flag set with the given sections already visible and all others not
    #[must_use]
    pub fn initial(forced: &[Section]) -> Self {
        forced.iter().fold(Self::default(), |mut flags, section| {
            *flags.flag_mut(*section) = true;
            flags
        })
    }

    #[must_use]
    pub const fn is_visible(&self, section: Section) -> bool {
        match section {
            Section::Hero => self.hero,
            Section::Experience => self.experience,
            Section::Projects => self.projects,
            Section::Skills => self.skills,
        }
    }

    /// Marks a section visible
    ///
    /// Returns `Transition::Entered` only on the first call for a section.
    pub fn mark_visible(&mut self, section: Section) -> Transition {
        let flag = self.flag_mut(section);
        if *flag {
            return Transition::Unchanged;
        }
        *flag = true;
        tracing::debug!(section = %section, "section entered viewport");
        Transition::Entered
    }

    /// Feeds one intersection observation through the state machine
    pub fn observe(
        &mut self,
        section: Section,
        ratio: f64,
        threshold: IntersectionThreshold,
    ) -> Transition {
        if threshold.is_met(ratio) {
            self.mark_visible(section)
        } else {
            tracing::trace!(section = %section, ratio, "intersection below threshold");
            Transition::Unchanged
        }
    }

    /// Sections that have not become visible yet
    pub fn pending(&self) -> impl Iterator<Item = Section> + '_ {
        Section::ALL
            .into_iter()
            .filter(|section| !self.is_visible(*section))
    }

    /// `(section, visible)` pairs in presentation order
    pub fn iter(&self) -> impl Iterator<Item = (Section, bool)> + '_ {
        Section::ALL
            .into_iter()
            .map(|section| (section, self.is_visible(section)))
    }

    #[must_use]
    pub const fn all_visible(&self) -> bool {
        self.hero && self.experience && self.projects && self.skills
    }

    const fn flag_mut(&mut self, section: Section) -> &mut bool {
        match section {
            Section::Hero => &mut self.hero,
            Section::Experience => &mut self.experience,
            Section::Projects => &mut self.projects,
            Section::Skills => &mut self.skills,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn threshold() -> Result<IntersectionThreshold, Error> {
        IntersectionThreshold::new(0.1)
    }

    #[test]
    fn test_initial_forces_listed_sections() {
        let flags = SectionVisibility::initial(&[Section::Hero]);
        assert!(flags.is_visible(Section::Hero));
        assert!(!flags.is_visible(Section::Experience));
        assert!(!flags.is_visible(Section::Projects));
        assert!(!flags.is_visible(Section::Skills));
    }

    #[test]
    fn test_mark_visible_is_one_shot() {
        let mut flags = SectionVisibility::default();
        assert_eq!(flags.mark_visible(Section::Skills), Transition::Entered);
        assert_eq!(flags.mark_visible(Section::Skills), Transition::Unchanged);
        assert!(flags.is_visible(Section::Skills));
    }

    #[test]
    fn test_observe_respects_threshold() -> Result<(), Error> {
        let mut flags = SectionVisibility::default();
        let threshold = threshold()?;

        assert_eq!(
            flags.observe(Section::Experience, 0.05, threshold),
            Transition::Unchanged
        );
        assert!(!flags.is_visible(Section::Experience));

        assert_eq!(
            flags.observe(Section::Experience, 0.15, threshold),
            Transition::Entered
        );
        assert!(flags.is_visible(Section::Experience));
        Ok(())
    }

    #[test]
    fn test_observe_at_exact_threshold_enters() -> Result<(), Error> {
        let mut flags = SectionVisibility::default();
        let transition = flags.observe(Section::Projects, 0.1, threshold()?);
        assert!(transition.is_entered());
        Ok(())
    }

    #[test]
    fn test_visible_never_reverts() -> Result<(), Error> {
        let mut flags = SectionVisibility::default();
        let threshold = threshold()?;
        flags.observe(Section::Projects, 0.5, threshold);
        flags.observe(Section::Projects, 0.0, threshold);
        assert!(flags.is_visible(Section::Projects));
        Ok(())
    }

    #[test]
    fn test_pending_and_all_visible() {
        let mut flags = SectionVisibility::initial(&[Section::Hero]);
        let pending: Vec<Section> = flags.pending().collect();
        assert_eq!(
            pending,
            vec![Section::Experience, Section::Projects, Section::Skills]
        );
        assert!(!flags.all_visible());

        for section in Section::ALL {
            flags.mark_visible(section);
        }
        assert!(flags.all_visible());
        assert_eq!(flags.pending().count(), 0);
    }

    #[test]
    fn test_threshold_validation() {
        assert!(IntersectionThreshold::new(0.0).is_ok());
        assert!(IntersectionThreshold::new(1.0).is_ok());
        assert_eq!(
            IntersectionThreshold::new(1.01),
            Err(Error::InvalidThreshold { value: 1.01 })
        );
        assert!(IntersectionThreshold::new(-0.1).is_err());
        assert!(IntersectionThreshold::new(f64::NAN).is_err());
        assert!(IntersectionThreshold::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_threshold_default() {
        assert_eq!(
            IntersectionThreshold::default(),
            IntersectionThreshold(DEFAULT_THRESHOLD)
        );
    }
}
