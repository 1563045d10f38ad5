use super::*;

#[test]
fn validate_login_input_trims_the_identifier() {
    assert_eq!(
        validate_login_input("  reader@example.com  ", "hunter22"),
        Ok(("reader@example.com".to_owned(), "hunter22".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_an_identifier() {
    assert_eq!(validate_login_input("   ", "hunter22"), Err("Enter your username or email."));
}

#[test]
fn validate_login_input_requires_a_password() {
    assert_eq!(validate_login_input("reader", ""), Err("Enter your password."));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    // Passwords may legitimately contain spaces; only the identifier trims.
    assert_eq!(
        validate_login_input("reader", " spaced pass "),
        Ok(("reader".to_owned(), " spaced pass ".to_owned()))
    );
}
