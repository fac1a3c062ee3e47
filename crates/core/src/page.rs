//! Page controller
//!
//! Owns the two pieces of interactive state (section visibility and the
//! active card) for one page view, together with the viewport subscriptions
//! that feed the visibility flags.
//!
//! ```
//! use folio_core::observer::SimulatedViewport;
//! use folio_core::{Page, PageConfig, Section};
//!
//! let viewport = SimulatedViewport::new();
//! let page = Page::mount(&viewport, &PageConfig::default());
//! assert!(page.visibility().is_visible(Section::Hero));
//!
//! viewport.fire(Section::Experience, 0.15);
//! assert!(page.visibility().is_visible(Section::Experience));
//!
//! page.unmount();
//! assert_eq!(viewport.subscriber_count(), 0);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::PageConfig;
use crate::content::Portfolio;
use crate::hover::HoverTracker;
use crate::markup::Element;
use crate::observer::{IntersectionEntry, SubscriptionSet, ViewportObserver, observe_sections};
use crate::render::render_page;
use crate::section::{CardId, Section};
use crate::visibility::{IntersectionThreshold, SectionVisibility, Transition};

/// Interactive state of one page view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageState {
    pub visibility: SectionVisibility,
    pub hover: HoverTracker,
}

impl PageState {
    /// State right after mount: forced sections visible, no active card
    #[must_use]
    pub fn initial(config: &PageConfig) -> Self {
        Self {
            visibility: SectionVisibility::initial(&config.initially_visible),
            hover: HoverTracker::new(),
        }
    }

    /// Applies one intersection report
    pub fn observe(
        &mut self,
        entry: IntersectionEntry,
        threshold: IntersectionThreshold,
    ) -> Transition {
        self.visibility.observe(entry.section, entry.ratio, threshold)
    }

    /// Renders the page for this state
    #[must_use]
    pub fn render(&self, portfolio: &Portfolio) -> Element {
        render_page(portfolio, &self.visibility, self.hover.active())
    }
}

/// A mounted page view
///
/// Dropping the page releases its viewport subscriptions, as does
/// [`Page::unmount`].
#[derive(Debug)]
pub struct Page {
    state: Rc<RefCell<PageState>>,
    subscriptions: SubscriptionSet,
}

impl Page {
    /// Mounts a page: sets the initial flags and subscribes every section
    /// that is not visible yet
    pub fn mount<O>(observer: &O, config: &PageConfig) -> Self
    where
        O: ViewportObserver + ?Sized,
    {
        let state = Rc::new(RefCell::new(PageState::initial(config)));
        let pending: Vec<Section> = state.borrow().visibility.pending().collect();
        let threshold = config.threshold;

        let weak = Rc::downgrade(&state);
        let subscriptions = observe_sections(observer, &pending, threshold, move |entry| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().observe(entry, threshold);
            }
        });

        tracing::info!(
            threshold = threshold.ratio(),
            observed = subscriptions.len(),
            "page mounted"
        );

        Self {
            state,
            subscriptions,
        }
    }

    /// Current state snapshot
    #[must_use]
    pub fn state(&self) -> PageState {
        *self.state.borrow()
    }

    #[must_use]
    pub fn visibility(&self) -> SectionVisibility {
        self.state.borrow().visibility
    }

    #[must_use]
    pub fn active_card(&self) -> Option<CardId> {
        self.state.borrow().hover.active()
    }

    pub fn pointer_enter(&self, card: CardId) {
        self.state.borrow_mut().hover.pointer_enter(card);
    }

    pub fn pointer_leave(&self, card: CardId) {
        self.state.borrow_mut().hover.pointer_leave(card);
    }

    /// Renders the page for the current state
    #[must_use]
    pub fn render(&self, portfolio: &Portfolio) -> Element {
        self.state.borrow().render(portfolio)
    }

    /// Number of viewport subscriptions still held
    #[must_use]
    pub fn observed_sections(&self) -> usize {
        self.subscriptions.active_count()
    }

    /// Tears the page down, releasing every viewport subscription
    pub fn unmount(self) {
        let Self {
            state,
            subscriptions,
        } = self;
        subscriptions.release_all();
        tracing::info!(final_state = ?state.borrow().visibility, "page unmounted");
    }
}
