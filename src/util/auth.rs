//! Session guard applied by protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect
//! behavior. The redirect decision is a pure predicate; navigation is
//! injected so the guard is testable without a browser.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::{Session, SessionStore};

/// Route that receives every unauthenticated redirect.
pub const LOGIN_PATH: &str = "/login";

/// True when the session has no token and the caller is not already on the
/// login route. Checking the path here keeps the guard loop-free even when
/// a page applies it on the login route itself.
pub fn should_redirect_to_login(session: &Session, current_path: &str) -> bool {
    !session.is_authenticated() && current_path != LOGIN_PATH
}

/// Redirect to the login route on mount and whenever the session loses
/// its token.
pub fn install_session_guard<F>(store: SessionStore, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_to_login(&store.get(), &pathname.get()) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Context-wired guard for protected pages.
pub fn use_session_guard() {
    let store = expect_context::<SessionStore>();
    let location = use_location();
    install_session_guard(store, location.pathname, use_navigate());
}
