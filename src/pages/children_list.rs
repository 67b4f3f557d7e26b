//! Children list page with delete actions.

#[cfg(test)]
#[path = "children_list_test.rs"]
mod children_list_test;

use leptos::prelude::*;

use crate::components::back_button::BackButton;
use crate::net::client::use_api;
use crate::net::types::{Child, Group};
use crate::util::auth::use_session_guard;
#[cfg(feature = "hydrate")]
use crate::util::dialog;
use crate::util::format_date::format_date;

/// `Last First Patronymic` display form.
pub(crate) fn full_name(child: &Child) -> String {
    format!("{} {} {}", child.last_name, child.first_name, child.patronymic)
}

/// `Name (#id)` display form for the group column.
pub(crate) fn group_label(group: &Group) -> String {
    format!("{} (#{})", group.name, group.id)
}

/// Children list page — table with add link, edit links, and delete.
#[component]
pub fn ChildrenListPage() -> impl IntoView {
    use_session_guard();

    let client = use_api();
    let children = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { crate::net::api::fetch_children(&client).await }
        }
    });

    let delete_pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let on_delete = Callback::new({
        let client = client.clone();
        move |id: i64| {
            if delete_pending.get() {
                return;
            }
            if !dialog::confirm("Delete the child record?") {
                return;
            }
            delete_pending.set(true);
            let client = client.clone();
            let children = children.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_child(&client, id).await {
                    Ok(()) => children.refetch(),
                    Err(e) => leptos::logging::warn!("delete child failed: {e}"),
                }
                delete_pending.set(false);
            });
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let on_delete = Callback::new(move |_id: i64| {});

    view! {
        <div class="children-page">
            <BackButton/>
            <div class="children-page__panel">
                <header class="children-page__header">
                    <h1>"Children"</h1>
                    <a class="btn btn--primary children-page__add" href="/children/new">
                        "Add Child"
                    </a>
                </header>

                <Suspense fallback=move || view! { <p>"Loading children..."</p> }>
                    {move || {
                        children.get().map(|result| match result {
                            Ok(list) => children_table(list, delete_pending, on_delete),
                            Err(e) => {
                                view! {
                                    <p class="children-page__error">{format!("Error: {e}")}</p>
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

fn children_table(
    list: Vec<Child>,
    delete_pending: RwSignal<bool>,
    on_delete: Callback<i64>,
) -> AnyView {
    if list.is_empty() {
        return view! { <p class="children-page__empty">"No children yet."</p> }.into_any();
    }

    let rows = list
        .into_iter()
        .map(|child| {
            let edit_href = format!("/children/{}", child.id);
            let child_id = child.id;
            view! {
                <tr>
                    <td>{child.id}</td>
                    <td>{full_name(&child)}</td>
                    <td>{format_date(&child.birthday_date)}</td>
                    <td>{group_label(&child.group)}</td>
                    <td class="roster-table__actions">
                        <a class="roster-table__edit" href=edit_href>
                            "Edit"
                        </a>
                        <button
                            class="roster-table__delete"
                            disabled=move || delete_pending.get()
                            on:click=move |_| on_delete.run(child_id)
                        >
                            "Delete"
                        </button>
                    </td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <table class="roster-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Full name"</th>
                    <th>"Birthday"</th>
                    <th>"Group"</th>
                    <th class="roster-table__actions">"Actions"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
    .into_any()
}
