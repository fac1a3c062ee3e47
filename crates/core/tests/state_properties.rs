//! Property tests for the two state machines

use folio_core::{CardId, HoverTracker, IntersectionThreshold, Section, SectionVisibility};
use proptest::prelude::*;

fn section() -> impl Strategy<Value = Section> {
    prop::sample::select(Section::ALL.to_vec())
}

fn card() -> impl Strategy<Value = CardId> {
    prop_oneof![
        (0_usize..3).prop_map(CardId::Experience),
        (0_usize..3).prop_map(CardId::Project),
    ]
}

#[derive(Debug, Clone, Copy)]
enum PointerEvent {
    Enter(CardId),
    Leave(CardId),
}

fn pointer_event() -> impl Strategy<Value = PointerEvent> {
    prop_oneof![
        card().prop_map(PointerEvent::Enter),
        card().prop_map(PointerEvent::Leave),
    ]
}

proptest! {
    #[test]
    fn visibility_is_monotonic(
        events in prop::collection::vec((section(), 0.0_f64..=1.0), 0..64),
    ) {
        let threshold = IntersectionThreshold::default();
        let mut flags = SectionVisibility::initial(&[Section::Hero]);

        for (section, ratio) in events {
            let before = flags;
            flags.observe(section, ratio, threshold);
            for other in Section::ALL {
                prop_assert!(!before.is_visible(other) || flags.is_visible(other));
            }
        }
        prop_assert!(flags.is_visible(Section::Hero));
    }

    #[test]
    fn visibility_enters_at_most_once(
        ratios in prop::collection::vec(0.0_f64..=1.0, 1..32),
        target in section(),
    ) {
        let threshold = IntersectionThreshold::default();
        let mut flags = SectionVisibility::default();
        let entered = ratios
            .iter()
            .filter(|ratio| flags.observe(target, **ratio, threshold).is_entered())
            .count();

        let expected = usize::from(ratios.iter().any(|ratio| threshold.is_met(*ratio)));
        prop_assert_eq!(entered, expected);
    }

    #[test]
    fn hover_last_write_wins(events in prop::collection::vec(pointer_event(), 0..64)) {
        let mut hover = HoverTracker::new();
        for event in &events {
            match event {
                PointerEvent::Enter(card) => hover.pointer_enter(*card),
                PointerEvent::Leave(card) => hover.pointer_leave(*card),
            }
        }

        let expected = events.last().and_then(|event| match event {
            PointerEvent::Enter(card) => Some(*card),
            PointerEvent::Leave(_) => None,
        });
        prop_assert_eq!(hover.active(), expected);
    }
}
