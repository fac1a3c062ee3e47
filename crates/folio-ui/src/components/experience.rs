//! Experience timeline

use folio_core::content::Experience;
use folio_core::style::classes;
use folio_core::{CardId, Section};
use leptos::prelude::*;

use super::card::Card;
use super::section::ContentSection;

#[component]
pub fn ExperienceSection(experiences: &'static [Experience]) -> impl IntoView {
    let cards = experiences
        .iter()
        .enumerate()
        .map(|(index, experience)| {
            view! {
                <Card
                    card=CardId::Experience(index)
                    badge=experience.icon
                    title=experience.title
                    subtitle=experience.subtitle()
                    points=experience.points
                    tech=experience.tech
                />
            }
        })
        .collect_view();

    view! {
        <ContentSection section=Section::Experience>
            <div class=classes::EXPERIENCE_LIST>{cards}</div>
        </ContentSection>
    }
}
