//! Section wrappers
//!
//! Every section root carries `data-section` so the viewport adapter can
//! find it, and its class list follows the section's visibility flag.

use folio_core::Section;
use folio_core::style::{classes, heading_class, section_class};
use leptos::prelude::*;

use crate::state::PageContext;

/// Section root whose classes track the sticky visibility flag
#[component]
pub fn SectionShell(section: Section, children: Children) -> impl IntoView {
    let ctx = PageContext::use_or_default();

    view! {
        <section
            data-section=section.key()
            class=move || section_class(section, ctx.is_visible(section))
        >
            {children()}
        </section>
    }
}

/// Content section: shell, centred column and heading
#[component]
pub fn ContentSection(section: Section, children: Children) -> impl IntoView {
    let heading = section
        .heading()
        .map(|text| view! { <h2 class=heading_class(section)>{text}</h2> });

    view! {
        <SectionShell section=section>
            <div class=classes::SECTION_BODY>
                {heading}
                {children()}
            </div>
        </SectionShell>
    }
}
