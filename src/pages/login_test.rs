use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@library.org ", "secret"),
        Ok(("user@library.org".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("a@b.org", ""), Err("Enter both email and password."));
}

#[test]
fn validate_login_input_requires_address_shape() {
    assert_eq!(validate_login_input("librarian", "secret"), Err("Enter a valid email address."));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(validate_login_input("a@b.org", " pw "), Ok(("a@b.org".to_owned(), " pw ".to_owned())));
}
