//! The portfolio page
//!
//! Owns the page-local state, provides it to the sections and ties the
//! viewport subscriptions to the component's lifetime. The first paint has
//! every section hidden; once the DOM exists the configured sections are
//! revealed and the rest subscribed. Subscriptions are released when the
//! page unmounts.

use folio_core::style::classes;
use folio_core::{Portfolio, SubscriptionSet};
use leptos::prelude::*;

use crate::components::{
    AnimatedBackground, ExperienceSection, Hero, ProjectsSection, SkillsSection,
};
use crate::state::{PageContext, page_config};
use crate::viewport::DomViewport;

#[component]
pub fn PortfolioPage(
    #[prop(default = Portfolio::authored())] portfolio: &'static Portfolio,
) -> impl IntoView {
    let config = page_config();
    let ctx = PageContext::new(&config);
    provide_context(ctx);

    let subscriptions = StoredValue::new_local(None::<SubscriptionSet>);

    Effect::new(move |_| {
        if subscriptions.with_value(Option::is_none) {
            let set = ctx.mount(&config, &DomViewport::new());
            web_sys::console::log_1(
                &format!("observing {} sections", set.active_count()).into(),
            );
            subscriptions.set_value(Some(set));
        }
    });

    on_cleanup(move || {
        if let Some(set) = subscriptions.try_update_value(Option::take).flatten() {
            set.release_all();
        }
    });

    view! {
        <div class=classes::PAGE>
            <AnimatedBackground />
            <div class=classes::CONTENT_LAYER>
                <Hero profile=&portfolio.profile />
                <ExperienceSection experiences=portfolio.experiences />
                <ProjectsSection projects=portfolio.projects />
                <SkillsSection skills=portfolio.skills />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_page_component_exists() {
        let _component = PortfolioPage;
    }
}
