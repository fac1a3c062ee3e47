//! Inline SVG glyphs
//!
//! Stroke-drawn 24x24 outlines, so the page needs no icon font or sprite.

use folio_core::content::Icon;
use leptos::prelude::*;

/// Path data of an icon's outline
#[must_use]
pub const fn icon_paths(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::Code => &["m16 18 6-6-6-6", "m8 6-6 6 6 6"],
        Icon::Terminal => &["m4 17 6-6-6-6", "M12 19h8"],
        Icon::Coffee => &[
            "M10 2v2",
            "M14 2v2",
            "M6 2v2",
            "M16 8a1 1 0 0 1 1 1v8a4 4 0 0 1-4 4H7a4 4 0 0 1-4-4V9a1 1 0 0 1 1-1h14a4 4 0 1 1 0 8h-1",
        ],
        Icon::Smartphone => &[
            "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
            "M12 18h.01",
        ],
        Icon::Car => &[
            "M19 17h2c.6 0 1-.4 1-1v-3c0-.9-.7-1.7-1.5-1.9C18.7 10.6 16 10 16 10s-1.3-1.4-2.2-2.3c-.5-.4-1.1-.7-1.8-.7H5c-.6 0-1.1.4-1.4.9l-1.4 2.9A3.7 3.7 0 0 0 2 12v4c0 .6.4 1 1 1h2",
            "M7 15a2 2 0 1 0 0 4a2 2 0 1 0 0-4z",
            "M9 17h6",
            "M17 15a2 2 0 1 0 0 4a2 2 0 1 0 0-4z",
        ],
        Icon::Heart => &[
            "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
        ],
        Icon::Mail => &[
            "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "m22 6-10 7L2 6",
        ],
        Icon::Linkedin => &[
            "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
            "M2 9h4v12H2z",
            "M4 2a2 2 0 1 0 0 4a2 2 0 1 0 0-4z",
        ],
        Icon::Github => &[
            "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
            "M9 18c-4.51 2-5-2-7-2",
        ],
        Icon::ChevronDown => &["m6 9 6 6 6-6"],
    }
}

/// Outline icon drawn with the current text colour
#[component]
pub fn IconGlyph(icon: Icon, #[prop(default = 24)] size: u32) -> impl IntoView {
    let size = size.to_string();
    let paths = icon_paths(icon)
        .iter()
        .map(|d| view! { <path d=*d /> })
        .collect_view();

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            data-icon=icon.name()
            aria-hidden="true"
        >
            {paths}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_paths() {
        for icon in Icon::ALL {
            let paths = icon_paths(icon);
            assert!(!paths.is_empty(), "{} has no outline", icon.name());
            assert!(paths.iter().all(|d| d.starts_with(['M', 'm'])));
        }
    }

    #[test]
    fn test_icon_component_exists() {
        let _component = IconGlyph;
    }
}
