//! Shared form fields for the child create/edit pages.

use leptos::prelude::*;

use crate::net::types::Group;

/// Child form — name fields, birthday picker, and a group selector fed
/// from the groups gateway. Validation stays in the owning page; this
/// component only collects input.
#[component]
pub fn ChildForm(
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
    patronymic: RwSignal<String>,
    birthday_date: RwSignal<String>,
    group_id: RwSignal<String>,
    groups: Vec<Group>,
    error: RwSignal<String>,
    busy: RwSignal<bool>,
    submit: Callback<()>,
    submit_label: &'static str,
) -> impl IntoView {
    let options = groups
        .into_iter()
        .map(|group| {
            let value = group.id.to_string();
            view! { <option value=value>{group.name}</option> }
        })
        .collect::<Vec<_>>();

    view! {
        <form
            class="form-card__form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                submit.run(());
            }
        >
            <label class="form-card__label">
                "Last name"
                <input
                    class="form-card__input"
                    type="text"
                    prop:value=move || last_name.get()
                    on:input=move |ev| last_name.set(event_target_value(&ev))
                />
            </label>
            <label class="form-card__label">
                "First name"
                <input
                    class="form-card__input"
                    type="text"
                    prop:value=move || first_name.get()
                    on:input=move |ev| first_name.set(event_target_value(&ev))
                />
            </label>
            <label class="form-card__label">
                "Patronymic"
                <input
                    class="form-card__input"
                    type="text"
                    prop:value=move || patronymic.get()
                    on:input=move |ev| patronymic.set(event_target_value(&ev))
                />
            </label>
            <label class="form-card__label">
                "Birthday"
                <input
                    class="form-card__input"
                    type="date"
                    prop:value=move || birthday_date.get()
                    on:input=move |ev| birthday_date.set(event_target_value(&ev))
                />
            </label>
            <label class="form-card__label">
                "Group"
                <select
                    class="form-card__input"
                    prop:value=move || group_id.get()
                    on:change=move |ev| group_id.set(event_target_value(&ev))
                >
                    <option value="">"Pick a group"</option>
                    {options}
                </select>
            </label>
            <Show when=move || !error.get().is_empty()>
                <p class="form-card__error">{move || error.get()}</p>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {submit_label}
            </button>
        </form>
    }
}
