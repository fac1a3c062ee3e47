//! Hoverable card
//!
//! Entering a card makes it the single active card; leaving any card clears
//! the selection. Bullet points and tags of the active card shift right with
//! a per-item stagger.

use folio_core::CardId;
use folio_core::content::Icon;
use folio_core::style::{bullet_style, card_layout, classes, tag_style};
use leptos::either::Either;
use leptos::prelude::*;

use super::icons::IconGlyph;
use crate::state::PageContext;

/// Card with a badge, a title block, bullet points and tech tags
#[component]
pub fn Card(
    card: CardId,
    badge: Icon,
    title: &'static str,
    #[prop(into)] subtitle: String,
    points: &'static [&'static str],
    tech: &'static [&'static str],
    #[prop(optional)] accent: Option<&'static str>,
) -> impl IntoView {
    let ctx = PageContext::use_or_default();

    let bullets = points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            view! {
                <li
                    class=classes::BULLET
                    style=move || bullet_style(ctx.is_active(card), index).to_css()
                >
                    {*point}
                </li>
            }
        })
        .collect_view();

    let tags = tech
        .iter()
        .enumerate()
        .map(|(index, tag)| {
            view! {
                <span
                    class=classes::TAG
                    style=move || tag_style(ctx.is_active(card), index).to_css()
                >
                    {*tag}
                </span>
            }
        })
        .collect_view();

    let layout = card_layout(card);
    let content = view! {
        <div class=layout.header>
            <div class=classes::BADGE>
                <IconGlyph icon=badge />
            </div>
            <div>
                <h3 class=classes::CARD_TITLE>{title}</h3>
                <p class=classes::CARD_SUBTITLE>{subtitle}</p>
            </div>
        </div>
        <ul class=layout.bullets>{bullets}</ul>
        <div class=layout.tags>{tags}</div>
    };
    let body = match layout.body {
        Some(class) => Either::Left(view! { <div class=class>{content}</div> }),
        None => Either::Right(content),
    };

    view! {
        <div
            data-card=card.to_string()
            data-accent=accent
            class=classes::CARD
            on:mouseenter=move |_| ctx.pointer_enter(card)
            on:mouseleave=move |_| ctx.pointer_leave(card)
        >
            <div class=classes::CARD_GLOW></div>
            {body}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_component_exists() {
        let _component = Card;
    }
}
