//! Back-to-home link shown on the roster pages.

use leptos::prelude::*;

/// Floating link back to the control panel.
#[component]
pub fn BackButton() -> impl IntoView {
    view! {
        <div class="back-button">
            <a class="btn back-button__link" href="/">
                "⬅ Back"
            </a>
        </div>
    }
}
