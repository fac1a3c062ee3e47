//! Hero banner

use folio_core::Section;
use folio_core::content::{Icon, Profile};
use folio_core::style::classes;
use leptos::prelude::*;

use super::icons::IconGlyph;
use super::section::SectionShell;

/// Name, headline, contact links and the scroll hint
#[component]
pub fn Hero(profile: &'static Profile) -> impl IntoView {
    let links = profile
        .links
        .iter()
        .zip(classes::LINKS)
        .map(|((kind, href), class)| {
            view! {
                <a href=href aria-label=kind.label() class=class>
                    <IconGlyph icon=kind.icon() />
                </a>
            }
        })
        .collect_view();

    view! {
        <SectionShell section=Section::Hero>
            <div class=classes::HERO_BODY>
                <div class=classes::HERO_GLOW></div>
                <h1 class=classes::HERO_NAME>{profile.name}</h1>
                <h2 class=classes::HERO_HEADLINE>{profile.headline}</h2>
                <div class=classes::HERO_LINKS>{links}</div>
                <div class=classes::SCROLL_HINT>
                    <IconGlyph icon=Icon::ChevronDown size=32 />
                </div>
            </div>
        </SectionShell>
    }
}
