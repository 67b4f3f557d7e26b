use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "secret"),
        Ok(("user@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_plausible_email() {
    assert_eq!(
        validate_login_input("   ", "secret"),
        Err("Enter a valid email address.")
    );
    assert_eq!(
        validate_login_input("not-an-email", "secret"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_login_input_requires_min_password_length() {
    assert_eq!(
        validate_login_input("user@example.com", "abc"),
        Err("Password must be at least 4 characters.")
    );
    assert!(validate_login_input("user@example.com", "abcd").is_ok());
}
