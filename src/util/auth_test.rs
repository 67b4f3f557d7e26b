use super::*;

#[test]
fn redirects_without_token_on_protected_path() {
    let session = Session::default();
    assert!(should_redirect_to_login(&session, "/groups"));
    assert!(should_redirect_to_login(&session, "/"));
}

#[test]
fn does_not_redirect_when_already_on_login() {
    let session = Session::default();
    assert!(!should_redirect_to_login(&session, LOGIN_PATH));
}

#[test]
fn does_not_redirect_with_token() {
    let session = Session { token: Some("tok".to_owned()) };
    assert!(!should_redirect_to_login(&session, "/children"));
    assert!(!should_redirect_to_login(&session, LOGIN_PATH));
}
