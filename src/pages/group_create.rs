//! Group creation form.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::client::use_api;
use crate::net::types::CreateGroup;
use crate::util::auth::use_session_guard;
use crate::util::forms::validate_group_name;

/// Group creation page — validates the name and navigates back to the
/// list on success.
#[component]
pub fn GroupCreatePage() -> impl IntoView {
    use_session_guard();

    #[cfg(feature = "hydrate")]
    let client = use_api();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match validate_group_name(&name.get()) {
            Ok(name) => CreateGroup { name },
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            let client = client.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_group(&client, &payload).await {
                    Ok(_) => navigate("/groups", NavigateOptions::default()),
                    Err(e) => {
                        error.set(format!("Create failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    };

    view! {
        <div class="form-page">
            <div class="form-card">
                <header class="form-card__header">
                    <h1>"Create Group"</h1>
                    <a class="btn" href="/groups">
                        "Back"
                    </a>
                </header>
                <form class="form-card__form" on:submit=on_submit>
                    <label class="form-card__label">
                        "Group name"
                        <input
                            class="form-card__input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !error.get().is_empty()>
                        <p class="form-card__error">{move || error.get()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Create"
                    </button>
                </form>
            </div>
        </div>
    }
}
