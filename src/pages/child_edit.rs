//! Child edit form prefilled from the fetched record.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_params_map;

use crate::components::child_form::ChildForm;
use crate::net::client::{ApiError, use_api};
use crate::util::auth::use_session_guard;
use crate::util::forms::{ChildFormInput, validate_child_form};

/// Child edit page — fetches the record and the group options, prefills
/// the form, and navigates back to the list after saving.
#[component]
pub fn ChildEditPage() -> impl IntoView {
    use_session_guard();

    let client = use_api();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();
    let params = use_params_map();
    let child_id = move || params.read().get("id").and_then(|id| id.parse::<i64>().ok());

    let child = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            let id = child_id();
            async move {
                match id {
                    Some(id) => crate::net::api::fetch_child(&client, id).await,
                    None => Err(ApiError::Message("Unknown child.".to_owned())),
                }
            }
        }
    });
    let groups = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { crate::net::api::fetch_groups(&client).await }
        }
    });

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let patronymic = RwSignal::new(String::new());
    let birthday_date = RwSignal::new(String::new());
    let group_id = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Prefill once the record arrives.
    let prefilled = RwSignal::new(false);
    {
        let child = child.clone();
        Effect::new(move || {
            if prefilled.get() {
                return;
            }
            if let Some(Ok(child)) = child.get() {
                first_name.set(child.first_name.clone());
                last_name.set(child.last_name.clone());
                patronymic.set(child.patronymic.clone());
                birthday_date.set(child.birthday_date.clone());
                group_id.set(child.group.id.to_string());
                prefilled.set(true);
            }
        });
    }

    let submit = Callback::new(move |_| {
        if busy.get() {
            return;
        }
        let input = ChildFormInput {
            first_name: first_name.get(),
            last_name: last_name.get(),
            patronymic: patronymic.get(),
            birthday_date: birthday_date.get(),
            group_id: group_id.get(),
        };
        let payload = match validate_child_form(&input) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let Some(id) = child_id() else {
                error.set("Unknown child.".to_owned());
                return;
            };
            busy.set(true);
            let client = client.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_child(&client, id, &payload).await {
                    Ok(_) => navigate("/children", NavigateOptions::default()),
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
                    <h1>"Edit Child"</h1>
                    <a class="btn" href="/children">
                        "Back"
                    </a>
                </header>

                <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                    {move || {
                        let child_result = child.get()?;
                        let groups_result = groups.get()?;
                        Some(match (child_result, groups_result) {
                            (Ok(child), Ok(list)) => {
                                view! {
                                    <p class="form-card__hint">
                                        "Editing: "
                                        <span>{full_title(&child)}</span>
                                    </p>
                                    <ChildForm
                                        first_name=first_name
                                        last_name=last_name
                                        patronymic=patronymic
                                        birthday_date=birthday_date
                                        group_id=group_id
                                        groups=list
                                        error=error
                                        busy=busy
                                        submit=submit
                                        submit_label="Save Changes"
                                    />
                                }
                                    .into_any()
                            }
                            (Err(e), _) | (_, Err(e)) => {
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

fn full_title(child: &crate::net::types::Child) -> String {
    format!("{} {}", child.last_name, child.first_name)
}
