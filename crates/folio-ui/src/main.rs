//! WASM entry point
//!
//! Trunk compiles this to WASM and mounts [`App`] to the document body.

use folio_ui::App;
use leptos::prelude::*;

fn main() {
    // Panics show up in the browser console instead of as `unreachable`
    console_error_panic_hook::set_once();

    mount_to_body(|| {
        view! {
            <App />
        }
    });
}
