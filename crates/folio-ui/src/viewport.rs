//! Browser viewport observation
//!
//! Implements [`ViewportObserver`] on top of `IntersectionObserver`. Each
//! subscription owns one observer watching the element tagged with the
//! section's `data-section` attribute; releasing the subscription
//! disconnects it and frees the JS callback.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use folio_core::observer::VisibilityCallback;
use folio_core::{
    IntersectionEntry, IntersectionThreshold, Section, Subscription, ViewportObserver,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::error::{Result, UiError};

/// Type alias for the observer callback closure
type ObserverClosure = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// CSS selector of a section's root element
#[must_use]
pub fn section_selector(section: Section) -> String {
    format!("[data-section=\"{}\"]", section.key())
}

/// Viewport backed by the browser's `IntersectionObserver`
#[derive(Debug, Clone, Copy, Default)]
pub struct DomViewport;

impl DomViewport {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ViewportObserver for DomViewport {
    fn subscribe(
        &self,
        section: Section,
        threshold: IntersectionThreshold,
        on_visible: VisibilityCallback,
    ) -> Subscription {
        attach(section, threshold, on_visible).unwrap_or_else(|err| {
            // Without observation the section keeps its initial state
            web_sys::console::warn_1(&format!("{section} will not animate: {err}").into());
            Subscription::inert()
        })
    }
}

fn get_document() -> Result<Document> {
    web_sys::window()
        .ok_or(UiError::WindowNotAvailable)?
        .document()
        .ok_or(UiError::DocumentNotAvailable)
}

fn find_section(document: &Document, section: Section) -> Result<Element> {
    document
        .query_selector(&section_selector(section))
        .ok()
        .flatten()
        .ok_or(UiError::SectionNotFound(section))
}

fn attach(
    section: Section,
    threshold: IntersectionThreshold,
    mut on_visible: VisibilityCallback,
) -> Result<Subscription> {
    let document = get_document()?;
    let target = find_section(&document, section)?;

    let callback: ObserverClosure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .filter(IntersectionObserverEntry::is_intersecting)
                .for_each(|entry| {
                    on_visible(IntersectionEntry::new(section, entry.intersection_ratio()));
                });
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold.ratio()));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| UiError::ObserverUnavailable(format!("{e:?}")))?;
    observer.observe(&target);

    Ok(Subscription::new(move || {
        observer.disconnect();
        drop(callback);
    }))
}


#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_missing_section_degrades_to_inert() {
        let viewport = DomViewport::new();
        let subscription = viewport.subscribe(
            Section::Skills,
            IntersectionThreshold::default(),
            Box::new(|_entry: IntersectionEntry| {}),
        );
        assert!(!subscription.is_active());
    }

    #[wasm_bindgen_test]
    fn test_present_section_is_observed() -> std::result::Result<(), JsValue> {
        let document = get_document().map_err(|e| JsValue::from_str(&e.to_string()))?;
        let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;
        let element = document.create_element("section")?;
        element.set_attribute("data-section", "projects")?;
        body.append_child(&element)?;

        let subscription = DomViewport::new().subscribe(
            Section::Projects,
            IntersectionThreshold::default(),
            Box::new(|_entry: IntersectionEntry| {}),
        );
        assert!(subscription.is_active());
        subscription.unsubscribe();
        element.remove();
        Ok(())
    }
}
