use super::*;

#[test]
fn default_session_is_anonymous() {
    let session = Session::default();
    assert!(session.token.is_none());
    assert!(!session.is_authenticated());
}

#[test]
fn set_token_overwrites_previous_value() {
    let store = SessionStore::new();
    store.set_token("first".to_owned());
    store.set_token("second".to_owned());
    assert_eq!(store.token(), Some("second".to_owned()));
}

#[test]
fn get_returns_last_committed_value_after_mixed_calls() {
    let store = SessionStore::new();
    store.set_token("a".to_owned());
    store.clear();
    store.set_token("b".to_owned());
    assert_eq!(store.get(), Session { token: Some("b".to_owned()) });
    assert!(store.get().is_authenticated());
}

#[test]
fn clear_is_idempotent() {
    let store = SessionStore::new();
    store.set_token("tok".to_owned());
    store.clear();
    let once = store.get();
    store.clear();
    assert_eq!(store.get(), once);
    assert!(store.token().is_none());
}

#[test]
fn apply_credential_with_token_signs_in() {
    let store = SessionStore::new();
    store.apply_credential(Some("abc123".to_owned()));
    assert_eq!(store.token(), Some("abc123".to_owned()));
}

#[test]
fn apply_credential_without_token_signs_out() {
    let store = SessionStore::new();
    store.set_token("stale".to_owned());
    store.apply_credential(None);
    assert!(store.token().is_none());
}
