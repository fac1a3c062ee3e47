//! Page-local reactive state
//!
//! The visibility flags and the active card live in two signals owned by the
//! page component and handed to sub-views through Leptos context. Nothing is
//! process-wide.

use folio_core::observer::{SubscriptionSet, ViewportObserver, observe_sections};
use folio_core::{
    CardId, HoverTracker, IntersectionEntry, IntersectionThreshold, PageConfig, ResultExt,
    Section, SectionVisibility,
};
use leptos::prelude::*;

/// Configuration shipped with the page
const PAGE_CONFIG: &str = include_str!("../folio.toml");

/// Loads the bundled page configuration, falling back to defaults
#[must_use]
pub fn page_config() -> PageConfig {
    PageConfig::from_toml_str(PAGE_CONFIG).or_default_logged(PageConfig::default())
}

/// Reactive handles shared by every section of the page
#[derive(Debug, Clone, Copy)]
pub struct PageContext {
    pub visibility: RwSignal<SectionVisibility>,
    pub hover: RwSignal<HoverTracker>,
    threshold: IntersectionThreshold,
}

impl PageContext {
    /// Fresh state for one page view
    ///
    /// Every flag starts false, so the first paint shows each section in its
    /// pre-animation state. [`PageContext::mount`] forces the configured
    /// sections visible once the page is in the DOM.
    #[must_use]
    pub fn new(config: &PageConfig) -> Self {
        Self {
            visibility: RwSignal::new(SectionVisibility::default()),
            hover: RwSignal::new(HoverTracker::new()),
            threshold: config.threshold,
        }
    }

    /// Context provided by the enclosing page, or a detached one with the
    /// default sections already revealed when a section is rendered on its
    /// own
    #[must_use]
    pub fn use_or_default() -> Self {
        use_context::<Self>().unwrap_or_else(|| {
            let config = PageConfig::default();
            let ctx = Self::new(&config);
            ctx.reveal(&config.initially_visible);
            ctx
        })
    }

    #[must_use]
    pub fn is_visible(self, section: Section) -> bool {
        self.visibility.with(|flags| flags.is_visible(section))
    }

    #[must_use]
    pub fn is_active(self, card: CardId) -> bool {
        self.hover.with(|hover| hover.is_active(card))
    }

    pub fn pointer_enter(self, card: CardId) {
        self.hover.update(|hover| hover.pointer_enter(card));
    }

    pub fn pointer_leave(self, card: CardId) {
        self.hover.update(|hover| hover.pointer_leave(card));
    }

    /// Applies an intersection report; the signal is only notified when a
    /// section actually enters. Reports arriving after the page is disposed
    /// are ignored.
    pub fn observe(self, entry: IntersectionEntry) {
        let Some(mut flags) = self.visibility.try_get_untracked() else {
            return;
        };
        if flags
            .observe(entry.section, entry.ratio, self.threshold)
            .is_entered()
        {
            _ = self.visibility.try_set(flags);
        }
    }

    /// Forces `sections` visible without waiting for the viewport
    pub fn reveal(self, sections: &[Section]) {
        self.visibility.update(|flags| {
            for section in sections {
                flags.mark_visible(*section);
            }
        });
    }

    /// Subscribes every section that has not entered yet
    pub fn subscribe<O>(self, observer: &O) -> SubscriptionSet
    where
        O: ViewportObserver + ?Sized,
    {
        let pending: Vec<Section> =
            self.visibility.with_untracked(|flags| flags.pending().collect());
        observe_sections(observer, &pending, self.threshold, move |entry| {
            self.observe(entry);
        })
    }

    /// Mount step: reveals the configured sections, then subscribes the rest
    pub fn mount<O>(self, config: &PageConfig, observer: &O) -> SubscriptionSet
    where
        O: ViewportObserver + ?Sized,
    {
        self.reveal(&config.initially_visible);
        self.subscribe(observer)
    }
}
