//! Child creation form.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::child_form::ChildForm;
use crate::net::client::use_api;
use crate::util::auth::use_session_guard;
use crate::util::forms::{ChildFormInput, validate_child_form};

/// Child creation page — collects the child fields, validates, and
/// navigates back to the list on success.
#[component]
pub fn ChildCreatePage() -> impl IntoView {
    use_session_guard();

    let client = use_api();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

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
            busy.set(true);
            let client = client.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_child(&client, &payload).await {
                    Ok(_) => navigate("/children", NavigateOptions::default()),
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
    });

    view! {
        <div class="form-page">
            <div class="form-card">
                <header class="form-card__header">
                    <h1>"Add Child"</h1>
                    <a class="btn" href="/children">
                        "Back"
                    </a>
                </header>

                <Suspense fallback=move || view! { <p>"Loading groups..."</p> }>
                    {move || {
                        groups.get().map(|result| match result {
                            Ok(list) => {
                                view! {
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
                                        submit_label="Create"
                                    />
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
