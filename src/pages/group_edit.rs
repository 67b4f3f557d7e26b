//! Group edit form prefilled from the fetched group.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_params_map;

use crate::net::client::{ApiError, use_api};
use crate::net::types::CreateGroup;
use crate::util::auth::use_session_guard;
use crate::util::forms::validate_group_name;

/// Group edit page — fetches the group by route id, prefills the name,
/// and navigates back to the list after saving.
#[component]
pub fn GroupEditPage() -> impl IntoView {
    use_session_guard();

    let client = use_api();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();
    let params = use_params_map();
    let group_id = move || params.read().get("id").and_then(|id| id.parse::<i64>().ok());

    let group = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            let id = group_id();
            async move {
                match id {
                    Some(id) => crate::net::api::fetch_group(&client, id).await,
                    None => Err(ApiError::Message("Unknown group.".to_owned())),
                }
            }
        }
    });

    let name = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Prefill once the group arrives.
    let prefilled = RwSignal::new(false);
    {
        let group = group.clone();
        Effect::new(move || {
            if prefilled.get() {
                return;
            }
            if let Some(Ok(group)) = group.get() {
                name.set(group.name.clone());
                prefilled.set(true);
            }
        });
    }

    let submit = Callback::new(move |_| {
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
            let Some(id) = group_id() else {
                error.set("Unknown group.".to_owned());
                return;
            };
            busy.set(true);
            let client = client.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_group(&client, id, &payload).await {
                    Ok(_) => navigate("/groups", NavigateOptions::default()),
                    Err(e) => {
                        error.set(format!("Save failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    });

    view! {
        <div class="form-page">
            <div class="form-card">
                <header class="form-card__header">
                    <h1>"Edit Group"</h1>
                    <a class="btn" href="/groups">
                        "Back"
                    </a>
                </header>

                <Suspense fallback=move || view! { <p>"Loading group..."</p> }>
                    {move || {
                        group.get().map(|result| match result {
                            Ok(group) => {
                                view! {
                                    <p class="form-card__hint">
                                        "Current name: "
                                        <span>{group.name.clone()}</span>
                                    </p>
                                    <form
                                        class="form-card__form"
                                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                                            ev.prevent_default();
                                            submit.run(());
                                        }
                                    >
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
                                        <button
                                            class="btn btn--primary"
                                            type="submit"
                                            disabled=move || busy.get()
                                        >
                                            "Save Changes"
                                        </button>
                                    </form>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! {
                                    <p class="form-card__error">{format!("Error: {e}")}</p>
                                }
                                    .into_any()
                            }
                        })
                    }}
                </Suspense>
            </div>
        </div>
    }
}
