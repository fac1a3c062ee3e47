//! Skills grid
//!
//! Skill chips are not hover targets; they only carry the entrance stagger.

use folio_core::Section;
use folio_core::content::SkillCategory;
use folio_core::style::{classes, skill_style};
use leptos::prelude::*;

use super::section::ContentSection;

#[component]
fn SkillCard(category: &'static SkillCategory) -> impl IntoView {
    let chips = category
        .skills
        .iter()
        .enumerate()
        .map(|(index, skill)| {
            view! {
                <span class=classes::SKILL style=skill_style(index).to_css()>
                    {*skill}
                </span>
            }
        })
        .collect_view();

    view! {
        <div data-category=category.name class=classes::SKILL_CARD>
            <h3 class=classes::SKILL_TITLE>{category.name}</h3>
            <div class=classes::SKILL_LIST>{chips}</div>
        </div>
    }
}

#[component]
pub fn SkillsSection(skills: &'static [SkillCategory]) -> impl IntoView {
    let categories = skills
        .iter()
        .map(|category| view! { <SkillCard category=category /> })
        .collect_view();

    view! {
        <ContentSection section=Section::Skills>
            <div class=classes::SKILL_GRID>{categories}</div>
        </ContentSection>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_components_exist() {
        let _card = SkillCard;
        let _section = SkillsSection;
    }
}
