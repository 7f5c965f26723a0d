use super::*;

#[test]
fn request_code_failed_message_formats_status() {
    assert_eq!(request_code_failed_message(429), "request code failed: 429");
}

#[test]
fn verify_code_failed_message_formats_status() {
    assert_eq!(verify_code_failed_message(400), "verify code failed: 400");
}

#[test]
fn signup_conflict_has_friendly_message() {
    assert_eq!(signup_failed_message(409), "An account with that email already exists.");
    assert_eq!(signup_failed_message(500), "signup failed: 500");
}

#[test]
fn signed_out_statuses() {
    assert!(is_signed_out_status(401));
    assert!(is_signed_out_status(403));
    assert!(!is_signed_out_status(200));
    assert!(!is_signed_out_status(500));
}
