//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::net::client::ApiClient;
use crate::pages::{
    child_create::ChildCreatePage, child_edit::ChildEditPage, children_list::ChildrenListPage,
    group_create::GroupCreatePage, group_edit::GroupEditPage, groups_list::GroupsListPage,
    home::HomePage, login::LoginPage,
};
use crate::state::session::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store (restored from durable storage) and sets up
/// client-side routing. The API client is provided one level down, once
/// router context exists and navigation can be injected into it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::restore();
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/kidroster.css"/>
        <Title text="Kindergarten Admin"/>

        <Router>
            <ApiContext>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("groups") view=GroupsListPage/>
                    <Route path=(StaticSegment("groups"), StaticSegment("new")) view=GroupCreatePage/>
                    <Route path=(StaticSegment("groups"), ParamSegment("id")) view=GroupEditPage/>
                    <Route path=StaticSegment("children") view=ChildrenListPage/>
                    <Route path=(StaticSegment("children"), StaticSegment("new")) view=ChildCreatePage/>
                    <Route path=(StaticSegment("children"), ParamSegment("id")) view=ChildEditPage/>
                </Routes>
            </ApiContext>
        </Router>
    }
}

/// Provides the shared [`ApiClient`] with navigation injected from the
/// router, so 401 handling can redirect without a global location object.
#[component]
fn ApiContext(children: Children) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let navigator = Callback::new(move |path: String| navigate(&path, NavigateOptions::default()));
    provide_context(ApiClient::new(session, navigator));
    children()
}
