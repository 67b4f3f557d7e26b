use std::sync::{Arc, Mutex};

use leptos::prelude::Callback;

use super::*;
use crate::state::session::SessionStore;

fn recording_navigator() -> (Callback<String>, Arc<Mutex<Vec<String>>>) {
    let visited = Arc::new(Mutex::new(Vec::new()));
    let sink = visited.clone();
    let navigate = Callback::new(move |path: String| sink.lock().expect("lock").push(path));
    (navigate, visited)
}

#[test]
fn bearer_header_value_formats_scheme() {
    assert_eq!(bearer_header_value("abc123"), "Bearer abc123");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(500), "request failed: 500");
}

#[test]
fn normalize_prefers_server_message() {
    let message = normalize_error_message(
        Some("Server exploded".to_owned()),
        Some("request failed: 500".to_owned()),
    );
    assert_eq!(message, "Server exploded");
}

#[test]
fn normalize_falls_back_to_transport_message() {
    let message = normalize_error_message(None, Some("request failed: 500".to_owned()));
    assert_eq!(message, "request failed: 500");

    let message = normalize_error_message(Some("  ".to_owned()), Some("timed out".to_owned()));
    assert_eq!(message, "timed out");
}

#[test]
fn normalize_defaults_to_unknown_error() {
    assert_eq!(normalize_error_message(None, None), UNKNOWN_API_ERROR);
}

#[test]
fn authorization_header_present_only_when_signed_in() {
    let session = SessionStore::new();
    assert_eq!(authorization_header(&session), None);

    session.set_token("abc123".to_owned());
    assert_eq!(authorization_header(&session), Some("Bearer abc123".to_owned()));

    session.clear();
    assert_eq!(authorization_header(&session), None);
}

#[test]
fn url_joins_base_and_path() {
    let (navigate, _) = recording_navigator();
    let client = ApiClient::with_base_url(SessionStore::new(), navigate, "/api/");
    assert_eq!(client.url("/groups"), "/api/groups");

    let (navigate, _) = recording_navigator();
    let client = ApiClient::new(SessionStore::new(), navigate);
    assert_eq!(client.url("/children/7"), "/api/children/7");
}

#[test]
fn unauthorized_clears_session_redirects_and_rejects() {
    let session = SessionStore::new();
    session.set_token("expired".to_owned());
    let (navigate, visited) = recording_navigator();

    let err = unauthorized(session, navigate);

    assert_eq!(err, ApiError::Unauthorized);
    assert!(session.token().is_none());
    assert_eq!(visited.lock().expect("lock").as_slice(), [LOGIN_PATH.to_owned()]);
}

#[test]
fn unauthorized_is_harmless_for_concurrent_failures() {
    let session = SessionStore::new();
    session.set_token("expired".to_owned());
    let (navigate, visited) = recording_navigator();

    let first = unauthorized(session, navigate);
    let second = unauthorized(session, navigate);

    assert_eq!(first, second);
    assert!(session.token().is_none());
    assert_eq!(visited.lock().expect("lock").len(), 2);
}
