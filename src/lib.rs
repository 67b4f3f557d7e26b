//! # kidroster
//!
//! Leptos + WASM frontend for a kindergarten roster service: login plus
//! list/create/edit/delete administration of groups and children over a
//! REST API.
//!
//! The authenticated-session core lives in `state::session` (the token
//! store), `net::client` (the authorizing request client), and `util::auth`
//! (the route guard). Pages are thin views over the typed endpoint wrappers
//! in `net::api`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
