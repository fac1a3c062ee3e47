//! Page renderer
//!
//! [`render_page`] is a pure function of the content store, the visibility
//! flags and the active card. It never fails: empty lists become empty
//! containers and entries keep their authored order.

use crate::content::{Experience, Icon, Portfolio, Profile, Project, SkillCategory};
use crate::markup::Element;
use crate::section::{CardId, Section};
use crate::style::{
    CardLayout, bullet_style, card_layout, classes, heading_class, section_class, skill_style,
    tag_style,
};
use crate::visibility::SectionVisibility;

/// Renders the whole page
#[must_use]
pub fn render_page(
    portfolio: &Portfolio,
    visibility: &SectionVisibility,
    active_card: Option<CardId>,
) -> Element {
    let is_active = |card: CardId| active_card == Some(card);

    let experience_cards = portfolio
        .experiences
        .iter()
        .enumerate()
        .map(|(index, experience)| {
            let card = CardId::Experience(index);
            experience_card(card, experience, is_active(card))
        });

    let project_cards = portfolio
        .projects
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let card = CardId::Project(index);
            project_card(card, project, is_active(card))
        });

    Element::new("div")
        .class(classes::PAGE)
        .child(background())
        .child(
            Element::new("div")
                .class(classes::CONTENT_LAYER)
                .child(hero(&portfolio.profile, visibility))
                .child(content_section(
                    Section::Experience,
                    visibility,
                    Element::new("div")
                        .class(classes::EXPERIENCE_LIST)
                        .children(experience_cards),
                ))
                .child(content_section(
                    Section::Projects,
                    visibility,
                    Element::new("div")
                        .class(classes::PROJECT_GRID)
                        .children(project_cards),
                ))
                .child(content_section(
                    Section::Skills,
                    visibility,
                    Element::new("div")
                        .class(classes::SKILL_GRID)
                        .children(portfolio.skills.iter().map(skill_category)),
                )),
        )
}

fn icon(icon: Icon) -> Element {
    Element::new("i")
        .class("icon")
        .attr("data-icon", icon.name())
}

fn background() -> Element {
    Element::new("div")
        .class(classes::BACKGROUND)
        .attr("aria-hidden", "true")
        .child(Element::new("div").class(classes::BACKGROUND_BASE))
        .child(
            Element::new("div")
                .class(classes::BACKGROUND_ORBS)
                .children(classes::ORBS.map(|orb| Element::new("div").class(orb))),
        )
        .child(Element::new("div").class(classes::BACKGROUND_VIGNETTE))
}

fn section_shell(section: Section, visibility: &SectionVisibility) -> Element {
    Element::new("section")
        .attr("data-section", section.key())
        .class(section_class(section, visibility.is_visible(section)))
}

fn hero(profile: &Profile, visibility: &SectionVisibility) -> Element {
    let links = profile
        .links
        .iter()
        .zip(classes::LINKS)
        .map(|((kind, href), class)| {
            Element::new("a")
                .attr("href", href)
                .attr("aria-label", kind.label())
                .class(class)
                .child(icon(kind.icon()))
        });

    section_shell(Section::Hero, visibility).child(
        Element::new("div")
            .class(classes::HERO_BODY)
            .child(Element::new("div").class(classes::HERO_GLOW))
            .child(Element::new("h1").class(classes::HERO_NAME).text(profile.name))
            .child(
                Element::new("h2")
                    .class(classes::HERO_HEADLINE)
                    .text(profile.headline),
            )
            .child(
                Element::new("div")
                    .class(classes::HERO_LINKS)
                    .children(links),
            )
            .child(
                Element::new("div")
                    .class(classes::SCROLL_HINT)
                    .child(icon(Icon::ChevronDown)),
            ),
    )
}

fn content_section(section: Section, visibility: &SectionVisibility, body: Element) -> Element {
    let heading = section
        .heading()
        .map(|text| Element::new("h2").class(heading_class(section)).text(text));

    section_shell(section, visibility).child(
        Element::new("div")
            .class(classes::SECTION_BODY)
            .children(heading)
            .child(body),
    )
}

struct CardBody<'a> {
    badge: Icon,
    title: &'a str,
    subtitle: String,
    points: &'a [&'a str],
    tech: &'a [&'a str],
}

fn card_element(card: CardId, body: CardBody<'_>, active: bool) -> Element {
    let layout: CardLayout = card_layout(card);

    let header = Element::new("div")
        .class(layout.header)
        .child(Element::new("div").class(classes::BADGE).child(icon(body.badge)))
        .child(
            Element::new("div")
                .child(Element::new("h3").class(classes::CARD_TITLE).text(body.title))
                .child(Element::new("p").class(classes::CARD_SUBTITLE).text(body.subtitle)),
        );

    let bullets = Element::new("ul").class(layout.bullets).children(
        body.points.iter().enumerate().map(|(index, point)| {
            Element::new("li")
                .class(classes::BULLET)
                .attr("style", bullet_style(active, index).to_css())
                .text(*point)
        }),
    );

    let tags = Element::new("div").class(layout.tags).children(
        body.tech.iter().enumerate().map(|(index, tag)| {
            Element::new("span")
                .class(classes::TAG)
                .attr("style", tag_style(active, index).to_css())
                .text(*tag)
        }),
    );

    let content = [header, bullets, tags];
    let shell = Element::new("div")
        .attr("data-card", card.to_string())
        .class(classes::CARD)
        .child(Element::new("div").class(classes::CARD_GLOW));

    match layout.body {
        Some(class) => shell.child(Element::new("div").class(class).children(content)),
        None => shell.children(content),
    }
}

fn experience_card(id: CardId, experience: &Experience, active: bool) -> Element {
    let body = CardBody {
        badge: experience.icon,
        title: experience.title,
        subtitle: experience.subtitle(),
        points: experience.points,
        tech: experience.tech,
    };
    card_element(id, body, active)
}

fn project_card(id: CardId, project: &Project, active: bool) -> Element {
    let body = CardBody {
        badge: project.icon,
        title: project.title,
        subtitle: project.description.to_string(),
        points: project.points,
        tech: project.tech,
    };
    card_element(id, body, active).attr("data-accent", project.accent)
}

fn skill_category(category: &SkillCategory) -> Element {
    Element::new("div")
        .attr("data-category", category.name)
        .class(classes::SKILL_CARD)
        .child(
            Element::new("h3")
                .class(classes::SKILL_TITLE)
                .text(category.name),
        )
        .child(
            Element::new("div")
                .class(classes::SKILL_LIST)
                .children(category.skills.iter().enumerate().map(|(index, skill)| {
                    Element::new("span")
                        .class(classes::SKILL)
                        .attr("style", skill_style(index).to_css())
                        .text(*skill)
                })),
        )
}
