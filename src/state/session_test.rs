use super::*;

#[test]
fn session_defaults_to_logged_out() {
    assert_eq!(Session::default(), Session::LoggedOut);
}

#[test]
fn auth_tab_defaults_to_login() {
    assert_eq!(AuthTab::default(), AuthTab::Login);
}

#[test]
fn validation_accepts_a_matching_long_password() {
    assert_eq!(validate_registration("hunter2", "hunter2"), Ok(()));
}

#[test]
fn validation_rejects_mismatched_passwords_first() {
    // Mismatch wins even when the password is also too short.
    assert_eq!(validate_registration("a", "b"), Err("Passwords do not match"));
}

#[test]
fn validation_rejects_short_passwords() {
    assert_eq!(
        validate_registration("abc", "abc"),
        Err("Password must be at least 6 characters")
    );
}

#[test]
fn validation_counts_characters_not_bytes() {
    assert_eq!(validate_registration("säkert", "säkert"), Ok(()));
}
