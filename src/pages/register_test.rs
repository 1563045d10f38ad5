use super::*;

#[test]
fn validate_registration_trims_username_and_email() {
    assert_eq!(
        validate_registration("  wordsmith ", " ws@example.com ", "long enough", "long enough"),
        Ok(("wordsmith".to_owned(), "ws@example.com".to_owned(), "long enough".to_owned()))
    );
}

#[test]
fn validate_registration_rejects_short_usernames() {
    assert_eq!(
        validate_registration("ab", "ws@example.com", "long enough", "long enough"),
        Err("Username must be at least 3 characters.")
    );
    // Whitespace does not count toward the minimum.
    assert_eq!(
        validate_registration("  a  ", "ws@example.com", "long enough", "long enough"),
        Err("Username must be at least 3 characters.")
    );
}

#[test]
fn validate_registration_rejects_malformed_emails() {
    assert_eq!(
        validate_registration("wordsmith", "not-an-email", "long enough", "long enough"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_registration_rejects_short_passwords() {
    assert_eq!(
        validate_registration("wordsmith", "ws@example.com", "seven77", "seven77"),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn validate_registration_rejects_mismatched_passwords() {
    assert_eq!(
        validate_registration("wordsmith", "ws@example.com", "long enough", "long e nough"),
        Err("Passwords do not match.")
    );
}
