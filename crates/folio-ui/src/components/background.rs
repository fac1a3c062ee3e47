//! Decorative page background

use folio_core::style::classes;
use leptos::prelude::*;

/// Fixed gradient backdrop with slowly drifting orbs
#[component]
pub fn AnimatedBackground() -> impl IntoView {
    let orbs = classes::ORBS
        .iter()
        .map(|class| view! { <div class=*class></div> })
        .collect_view();

    view! {
        <div class=classes::BACKGROUND aria-hidden="true">
            <div class=classes::BACKGROUND_BASE></div>
            <div class=classes::BACKGROUND_ORBS>{orbs}</div>
            <div class=classes::BACKGROUND_VIGNETTE></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_component_exists() {
        let _component = AnimatedBackground;
    }
}
