//! Authenticated landing page linking to the roster sections.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;
use crate::util::auth::{LOGIN_PATH, use_session_guard};

/// Control panel — section links plus logout.
#[component]
pub fn HomePage() -> impl IntoView {
    use_session_guard();

    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.clear();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="home-page">
            <div class="home-card">
                <h1>"Control Panel"</h1>
                <p class="home-card__subtitle">"Pick a section to manage"</p>
                <nav class="home-card__links">
                    <a class="btn btn--primary" href="/groups">
                        "Groups"
                    </a>
                    <a class="btn btn--primary" href="/children">
                        "Children"
                    </a>
                </nav>
                <button class="btn btn--danger home-card__logout" on:click=on_logout>
                    "Log Out"
                </button>
            </div>
        </div>
    }
}
