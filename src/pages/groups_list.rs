//! Groups list page with sorting and delete actions.

#[cfg(test)]
#[path = "groups_list_test.rs"]
mod groups_list_test;

use leptos::prelude::*;

use crate::components::back_button::BackButton;
use crate::net::client::use_api;
use crate::net::types::Group;
use crate::util::auth::use_session_guard;
#[cfg(feature = "hydrate")]
use crate::util::dialog;

/// Column the group table is ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GroupSort {
    #[default]
    Id,
    Name,
}

impl GroupSort {
    fn from_value(value: &str) -> Self {
        if value == "name" { Self::Name } else { Self::Id }
    }
}

/// Order groups for display.
pub(crate) fn sort_groups(mut groups: Vec<Group>, sort: GroupSort) -> Vec<Group> {
    match sort {
        GroupSort::Id => groups.sort_by_key(|group| group.id),
        GroupSort::Name => groups.sort_by(|a, b| a.name.cmp(&b.name)),
    }
    groups
}

/// A group that still has children cannot be deleted; returns the refusal
/// message to show instead.
pub(crate) fn delete_refusal(group: &Group) -> Option<String> {
    if group.child_count > 0 {
        Some(format!(
            "Cannot delete the group: it still has {} children.",
            group.child_count
        ))
    } else {
        None
    }
}

/// Groups list page — table with sort selector, add link, edit links, and
/// guarded delete.
#[component]
pub fn GroupsListPage() -> impl IntoView {
    use_session_guard();

    let client = use_api();
    let groups = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { crate::net::api::fetch_groups(&client).await }
        }
    });

    let sort = RwSignal::new(GroupSort::default());
    let delete_pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let on_delete = Callback::new({
        let client = client.clone();
        move |group: Group| {
            if delete_pending.get() {
                return;
            }
            if !dialog::confirm(&format!("Delete group \"{}\"?", group.name)) {
                return;
            }
            if let Some(message) = delete_refusal(&group) {
                dialog::alert(&message);
                return;
            }
            delete_pending.set(true);
            let client = client.clone();
            let groups = groups.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_group(&client, group.id).await {
                    Ok(()) => groups.refetch(),
                    Err(e) => leptos::logging::warn!("delete group failed: {e}"),
                }
                delete_pending.set(false);
            });
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let on_delete = Callback::new(move |_group: Group| {});

    view! {
        <div class="groups-page">
            <BackButton/>
            <div class="groups-page__panel">
                <header class="groups-page__header">
                    <h1>"Groups"</h1>
                    <select
                        class="groups-page__sort"
                        on:change=move |ev| sort.set(GroupSort::from_value(&event_target_value(&ev)))
                    >
                        <option value="id">"By ID"</option>
                        <option value="name">"By name"</option>
                    </select>
                    <a class="btn btn--primary groups-page__add" href="/groups/new">
                        "Add Group"
                    </a>
                </header>

                <Suspense fallback=move || view! { <p>"Loading groups..."</p> }>
                    {move || {
                        groups.get().map(|result| match result {
                            Ok(list) => {
                                groups_table(list, sort.get(), delete_pending, on_delete)
                            }
                            Err(e) => {
                                view! {
                                    <p class="groups-page__error">{format!("Error: {e}")}</p>
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

fn groups_table(
    list: Vec<Group>,
    sort: GroupSort,
    delete_pending: RwSignal<bool>,
    on_delete: Callback<Group>,
) -> AnyView {
    if list.is_empty() {
        return view! { <p class="groups-page__empty">"No groups yet."</p> }.into_any();
    }

    let rows = sort_groups(list, sort)
        .into_iter()
        .map(|group| {
            let edit_href = format!("/groups/{}", group.id);
            let row_group = group.clone();
            view! {
                <tr>
                    <td>{group.id}</td>
                    <td>{group.name.clone()}</td>
                    <td>{group.child_count}</td>
                    <td class="roster-table__actions">
                        <a class="roster-table__edit" href=edit_href>
                            "Edit"
                        </a>
                        <button
                            class="roster-table__delete"
                            disabled=move || delete_pending.get()
                            on:click=move |_| on_delete.run(row_group.clone())
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
                    <th>"Name"</th>
                    <th>"Children"</th>
                    <th class="roster-table__actions">"Actions"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
    .into_any()
}
