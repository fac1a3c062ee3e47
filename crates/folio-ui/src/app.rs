//! Root application component

use leptos::prelude::*;

use crate::pages::PortfolioPage;

/// Root component: the whole site is a single page
#[component]
pub fn App() -> impl IntoView {
    view! { <PortfolioPage /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_component_exists() {
        let _component = App;
    }
}
