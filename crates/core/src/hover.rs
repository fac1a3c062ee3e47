//! Active-card tracking for hover micro-interactions
//!
//! At most one card is active. Every pointer event overwrites the previous
//! state; there is no counting of nested enter/leave pairs.

use crate::section::CardId;

/// Which card, if any, currently has pointer focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HoverTracker {
    active: Option<CardId>,
}

impl HoverTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    #[must_use]
    pub const fn active(&self) -> Option<CardId> {
        self.active
    }

    /// Whether `card` is the active card
    #[must_use]
    pub fn is_active(&self, card: CardId) -> bool {
        self.active == Some(card)
    }

    /// Sets or clears the active card; last write wins
    pub fn set_active(&mut self, card: Option<CardId>) {
        if self.active != card {
            tracing::trace!(from = ?self.active, to = ?card, "active card changed");
        }
        self.active = card;
    }

    /// Pointer entered `card`: it replaces any previously active card
    pub fn pointer_enter(&mut self, card: CardId) {
        self.set_active(Some(card));
    }

    /// Pointer left `card`: the active card is cleared
    ///
    /// The cleared state does not depend on which card reported the leave.
    pub fn pointer_leave(&mut self, card: CardId) {
        tracing::trace!(card = %card, "pointer left card");
        self.set_active(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_after_creation() {
        let hover = HoverTracker::new();
        assert_eq!(hover.active(), None);
        assert_eq!(hover, HoverTracker::default());
    }

    #[test]
    fn test_enter_then_leave() {
        let mut hover = HoverTracker::new();
        let card = CardId::Experience(1);

        hover.pointer_enter(card);
        assert_eq!(hover.active(), Some(card));
        assert!(hover.is_active(card));

        hover.pointer_leave(card);
        assert_eq!(hover.active(), None);
        assert!(!hover.is_active(card));
    }

    #[test]
    fn test_enter_replaces_without_stacking() {
        let mut hover = HoverTracker::new();
        let first = CardId::Experience(0);
        let second = CardId::Project(2);

        hover.pointer_enter(first);
        hover.pointer_enter(second);
        assert_eq!(hover.active(), Some(second));
        assert!(!hover.is_active(first));

        // A single leave clears everything; nothing was stacked
        hover.pointer_leave(second);
        assert_eq!(hover.active(), None);
    }

    #[test]
    fn test_stale_leave_still_clears() {
        let mut hover = HoverTracker::new();
        hover.pointer_enter(CardId::Experience(0));
        hover.pointer_enter(CardId::Project(0));

        // The leave for the first card arrives late
        hover.pointer_leave(CardId::Experience(0));
        assert_eq!(hover.active(), None);
    }

    #[test]
    fn test_set_active_directly() {
        let mut hover = HoverTracker::new();
        hover.set_active(Some(CardId::Project(1)));
        assert_eq!(hover.active(), Some(CardId::Project(1)));
        hover.set_active(None);
        assert_eq!(hover.active(), None);
    }
}
