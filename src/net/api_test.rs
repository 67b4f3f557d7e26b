use super::*;

#[test]
fn parse_bearer_credential_extracts_token() {
    assert_eq!(parse_bearer_credential("Bearer abc123"), Some("abc123".to_owned()));
}

#[test]
fn parse_bearer_credential_requires_scheme_and_separator() {
    assert_eq!(parse_bearer_credential("abc123"), None);
    assert_eq!(parse_bearer_credential("Token abc123"), None);
    assert_eq!(parse_bearer_credential(""), None);
}

#[test]
fn parse_bearer_credential_requires_non_empty_token() {
    assert_eq!(parse_bearer_credential("Bearer"), None);
    assert_eq!(parse_bearer_credential("Bearer "), None);
}

#[test]
fn group_endpoint_formats_expected_path() {
    assert_eq!(group_endpoint(7), "/groups/7");
}

#[test]
fn child_endpoint_formats_expected_path() {
    assert_eq!(child_endpoint(12), "/children/12");
}
