//! Viewport observation capability
//!
//! The host platform reports how much of a section is on screen. Pages only
//! see it through [`ViewportObserver`], so the browser's
//! `IntersectionObserver` and the in-memory [`SimulatedViewport`] are
//! interchangeable.
//!
//! # Lifecycle
//!
//! `subscribe` returns a [`Subscription`]. Releasing it (explicitly or by
//! dropping it) detaches the callback exactly once; events that arrive
//! afterwards are not delivered.
//!
//! # Examples
//!
//! ```
//! use folio_core::observer::{IntersectionEntry, SimulatedViewport, ViewportObserver};
//! use folio_core::{IntersectionThreshold, Section};
//!
//! let viewport = SimulatedViewport::new();
//! let subscription = viewport.subscribe(
//!     Section::Skills,
//!     IntersectionThreshold::default(),
//!     Box::new(|entry: IntersectionEntry| assert_eq!(entry.section, Section::Skills)),
//! );
//!
//! assert_eq!(viewport.fire(Section::Skills, 0.5), 1);
//! subscription.unsubscribe();
//! assert_eq!(viewport.fire(Section::Skills, 0.5), 0);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::section::Section;
use crate::visibility::IntersectionThreshold;

/// One intersection report for a section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub section: Section,
    /// Fraction of the section's area inside the viewport
    pub ratio: f64,
}

impl IntersectionEntry {
    #[must_use]
    pub const fn new(section: Section, ratio: f64) -> Self {
        Self { section, ratio }
    }
}

/// Callback invoked with each intersection report
pub type VisibilityCallback = Box<dyn FnMut(IntersectionEntry)>;

/// Platform facility that reports section intersections
pub trait ViewportObserver {
    /// Starts observing `section`, invoking `on_visible` with intersection
    /// reports whose ratio meets `threshold`
    ///
    /// Implementations that cannot observe return [`Subscription::inert`].
    fn subscribe(
        &self,
        section: Section,
        threshold: IntersectionThreshold,
        on_visible: VisibilityCallback,
    ) -> Subscription;
}

/// Handle that detaches an observation when released
#[must_use = "dropping a Subscription releases it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Subscription whose release runs `release`
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Subscription with nothing to release
    pub const fn inert() -> Self {
        Self { release: None }
    }

    /// Whether releasing this subscription still has work to do
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Detaches the observation
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Subscriptions released together
#[derive(Debug, Default)]
#[must_use = "dropping a SubscriptionSet releases every subscription in it"]
pub struct SubscriptionSet {
    subscriptions: Vec<Subscription>,
}

impl SubscriptionSet {
    pub const fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
        }
    }

    pub fn push(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Number of subscriptions that still hold a live observation
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.subscriptions
            .iter()
            .filter(|subscription| subscription.is_active())
            .count()
    }

    /// Releases every subscription, in subscription order
    pub fn release_all(self) {
        self.subscriptions
            .into_iter()
            .for_each(Subscription::unsubscribe);
    }
}

impl FromIterator<Subscription> for SubscriptionSet {
    fn from_iter<I: IntoIterator<Item = Subscription>>(iter: I) -> Self {
        Self {
            subscriptions: iter.into_iter().collect(),
        }
    }
}

/// Subscribes every section in `sections` with a shared callback
///
/// Returns the subscriptions so the caller can release them on teardown.
pub fn observe_sections<O, F>(
    observer: &O,
    sections: &[Section],
    threshold: IntersectionThreshold,
    on_visible: F,
) -> SubscriptionSet
where
    O: ViewportObserver + ?Sized,
    F: Fn(IntersectionEntry) + Clone + 'static,
{
    sections
        .iter()
        .map(|section| observer.subscribe(*section, threshold, Box::new(on_visible.clone())))
        .collect()
}

struct Subscriber {
    id: u64,
    section: Section,
    threshold: IntersectionThreshold,
    callback: VisibilityCallback,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    subscribers: Vec<Subscriber>,
    /// Nesting depth of `fire` calls in progress
    depth: usize,
    /// Ids released while any `fire` is in progress; cleared when the
    /// outermost call returns
    released: Vec<u64>,
}

impl Registry {
    fn release(&mut self, id: u64) {
        self.subscribers.retain(|subscriber| subscriber.id != id);
        if self.depth > 0 {
            self.released.push(id);
        }
    }

    fn is_released(&self, id: u64) -> bool {
        self.released.contains(&id)
    }
}

/// In-memory viewport for tests and non-browser hosts
///
/// Intersections are reported by calling [`SimulatedViewport::fire`]. Clones
/// share the same subscriber registry.
#[derive(Clone, Default)]
pub struct SimulatedViewport {
    registry: Rc<RefCell<Registry>>,
}

impl SimulatedViewport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live subscriptions
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().subscribers.len()
    }

    /// Reports that `ratio` of `section` is on screen
    ///
    /// Every live subscriber of `section` whose threshold the ratio meets is
    /// invoked once. Returns how many callbacks ran.
    pub fn fire(&self, section: Section, ratio: f64) -> usize {
        let entry = IntersectionEntry::new(section, ratio);

        // Callbacks run without the registry borrowed so they may subscribe,
        // release or fire re-entrantly.
        let mut detached = {
            let mut registry = self.registry.borrow_mut();
            registry.depth = registry.depth.saturating_add(1);
            std::mem::take(&mut registry.subscribers)
        };

        let mut delivered = 0_usize;
        for subscriber in detached.iter_mut().filter(|subscriber| {
            subscriber.section == section && subscriber.threshold.is_met(ratio)
        }) {
            if self.registry.borrow().is_released(subscriber.id) {
                continue;
            }
            (subscriber.callback)(entry);
            delivered = delivered.saturating_add(1);
        }

        let mut guard = self.registry.borrow_mut();
        let registry = &mut *guard;
        registry.depth = registry.depth.saturating_sub(1);
        detached.retain(|subscriber| !registry.released.contains(&subscriber.id));
        detached.append(&mut registry.subscribers);
        registry.subscribers = detached;
        if registry.depth == 0 {
            registry.released.clear();
        }
        drop(guard);

        tracing::trace!(section = %section, ratio, delivered, "simulated intersection");
        delivered
    }
}

impl ViewportObserver for SimulatedViewport {
    fn subscribe(
        &self,
        section: Section,
        threshold: IntersectionThreshold,
        on_visible: VisibilityCallback,
    ) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id = id.wrapping_add(1);
            registry.subscribers.push(Subscriber {
                id,
                section,
                threshold,
                callback: on_visible,
            });
            id
        };

        let registry: Weak<RefCell<Registry>> = Rc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().release(id);
            }
        })
    }
}

impl fmt::Debug for SimulatedViewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulatedViewport")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<usize>>, VisibilityCallback) {
        let count = Rc::new(Cell::new(0_usize));
        let handle = Rc::clone(&count);
        let callback: VisibilityCallback = Box::new(move |_entry: IntersectionEntry| {
            handle.set(handle.get().saturating_add(1));
        });
        (count, callback)
    }

    #[test]
    fn test_fire_delivers_to_matching_section_only() {
        let viewport = SimulatedViewport::new();
        let (skills, on_skills) = counter();
        let (hero, on_hero) = counter();

        let _skills_sub =
            viewport.subscribe(Section::Skills, IntersectionThreshold::default(), on_skills);
        let _hero_sub =
            viewport.subscribe(Section::Hero, IntersectionThreshold::default(), on_hero);

        assert_eq!(viewport.fire(Section::Skills, 0.3), 1);
        assert_eq!(skills.get(), 1);
        assert_eq!(hero.get(), 0);
    }

    #[test]
    fn test_fire_below_threshold_is_not_delivered() -> crate::Result<()> {
        let viewport = SimulatedViewport::new();
        let (count, callback) = counter();
        let threshold = IntersectionThreshold::new(0.5)?;
        let _sub = viewport.subscribe(Section::Projects, threshold, callback);

        assert_eq!(viewport.fire(Section::Projects, 0.49), 0);
        assert_eq!(viewport.fire(Section::Projects, 0.5), 1);
        assert_eq!(count.get(), 1);
        Ok(())
    }

    #[test]
    fn test_drop_releases_subscription() {
        let viewport = SimulatedViewport::new();
        let (count, callback) = counter();
        {
            let _sub =
                viewport.subscribe(Section::Hero, IntersectionThreshold::default(), callback);
            assert_eq!(viewport.subscriber_count(), 1);
        }
        assert_eq!(viewport.subscriber_count(), 0);
        assert_eq!(viewport.fire(Section::Hero, 1.0), 0);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_release_after_viewport_dropped_is_harmless() {
        let viewport = SimulatedViewport::new();
        let (_count, callback) = counter();
        let sub = viewport.subscribe(Section::Hero, IntersectionThreshold::default(), callback);
        drop(viewport);
        assert!(sub.is_active());
        sub.unsubscribe();
    }

    #[test]
    fn test_inert_subscription() {
        let sub = Subscription::inert();
        assert!(!sub.is_active());
        sub.unsubscribe();
    }

    #[test]
    fn test_release_runs_once() {
        let released = Rc::new(Cell::new(0_usize));
        let handle = Rc::clone(&released);
        let sub = Subscription::new(move || handle.set(handle.get().saturating_add(1)));
        sub.unsubscribe();
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_callback_may_release_other_subscription() {
        let viewport = SimulatedViewport::new();
        let (count, callback) = counter();
        let victim = Rc::new(RefCell::new(Some(viewport.subscribe(
            Section::Skills,
            IntersectionThreshold::default(),
            callback,
        ))));

        let slot = Rc::clone(&victim);
        let _killer = viewport.subscribe(
            Section::Skills,
            IntersectionThreshold::default(),
            Box::new(move |_entry: IntersectionEntry| {
                if let Some(sub) = slot.borrow_mut().take() {
                    sub.unsubscribe();
                }
            }),
        );

        viewport.fire(Section::Skills, 1.0);
        assert_eq!(viewport.subscriber_count(), 1);

        let before = count.get();
        viewport.fire(Section::Skills, 1.0);
        assert_eq!(count.get(), before);
    }

    #[test]
    fn test_release_after_nested_fire_sticks() {
        let viewport = SimulatedViewport::new();
        let (hero, on_hero) = counter();
        let hero_sub = Rc::new(RefCell::new(Some(viewport.subscribe(
            Section::Hero,
            IntersectionThreshold::default(),
            on_hero,
        ))));
        let (_projects, on_projects) = counter();
        let _projects_sub =
            viewport.subscribe(Section::Projects, IntersectionThreshold::default(), on_projects);

        let inner = viewport.clone();
        let slot = Rc::clone(&hero_sub);
        let _skills_sub = viewport.subscribe(
            Section::Skills,
            IntersectionThreshold::default(),
            Box::new(move |_entry: IntersectionEntry| {
                inner.fire(Section::Projects, 0.5);
                if let Some(sub) = slot.borrow_mut().take() {
                    sub.unsubscribe();
                }
            }),
        );
        assert_eq!(viewport.subscriber_count(), 3);

        viewport.fire(Section::Skills, 1.0);
        assert_eq!(viewport.subscriber_count(), 2);
        assert_eq!(viewport.fire(Section::Hero, 1.0), 0);
        assert_eq!(hero.get(), 0);
    }

    #[test]
    fn test_subscriber_released_mid_delivery_is_skipped() {
        let viewport = SimulatedViewport::new();
        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let slot = Rc::clone(&victim);
        let _killer = viewport.subscribe(
            Section::Skills,
            IntersectionThreshold::default(),
            Box::new(move |_entry: IntersectionEntry| {
                if let Some(sub) = slot.borrow_mut().take() {
                    sub.unsubscribe();
                }
            }),
        );
        let (count, callback) = counter();
        *victim.borrow_mut() =
            Some(viewport.subscribe(Section::Skills, IntersectionThreshold::default(), callback));

        assert_eq!(viewport.fire(Section::Skills, 1.0), 1);
        assert_eq!(count.get(), 0);
        assert_eq!(viewport.subscriber_count(), 1);
    }

    #[test]
    fn test_observe_sections_subscribes_each() {
        let viewport = SimulatedViewport::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let set = observe_sections(
            &viewport,
            &[Section::Experience, Section::Skills],
            IntersectionThreshold::default(),
            move |entry: IntersectionEntry| sink.borrow_mut().push(entry.section),
        );
        assert_eq!(set.len(), 2);
        assert_eq!(set.active_count(), 2);

        viewport.fire(Section::Skills, 0.2);
        viewport.fire(Section::Experience, 0.2);
        assert_eq!(*seen.borrow(), vec![Section::Skills, Section::Experience]);

        set.release_all();
        assert_eq!(viewport.subscriber_count(), 0);
    }
}
