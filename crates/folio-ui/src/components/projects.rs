//! Project showcase

use folio_core::content::Project;
use folio_core::style::classes;
use folio_core::{CardId, Section};
use leptos::prelude::*;

use super::card::Card;
use super::section::ContentSection;

#[component]
pub fn ProjectsSection(projects: &'static [Project]) -> impl IntoView {
    let cards = projects
        .iter()
        .enumerate()
        .map(|(index, project)| {
            view! {
                <Card
                    card=CardId::Project(index)
                    badge=project.icon
                    title=project.title
                    subtitle=project.description
                    points=project.points
                    tech=project.tech
                    accent=project.accent
                />
            }
        })
        .collect_view();

    view! {
        <ContentSection section=Section::Projects>
            <div class=classes::PROJECT_GRID>{cards}</div>
        </ContentSection>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_component_exists() {
        let _component = ProjectsSection;
    }
}
