use super::*;

#[test]
fn validate_signup_input_trims_fields() {
    assert_eq!(
        validate_signup_input("  Alice ", " alice@example.com "),
        Ok(("Alice".to_owned(), "alice@example.com".to_owned()))
    );
}

#[test]
fn validate_signup_input_requires_both_fields() {
    assert_eq!(validate_signup_input("", "a@b.com"), Err("Enter a display name and an email."));
    assert_eq!(validate_signup_input("Alice", "  "), Err("Enter a display name and an email."));
}

#[test]
fn validate_signup_input_rejects_long_names() {
    let name = "x".repeat(MAX_NAME_LEN + 1);
    assert_eq!(validate_signup_input(&name, "a@b.com"), Err("Display name is too long."));
}

#[test]
fn validate_signup_input_requires_at_sign() {
    assert_eq!(validate_signup_input("Alice", "alice.example.com"), Err("Enter a valid email."));
}
