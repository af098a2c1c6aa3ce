use super::*;

#[test]
fn accepts_four_character_password() {
    let credentials = validate_login("alice", "1234").unwrap();
    assert_eq!(credentials.username, "alice");
    assert_eq!(credentials.password, "1234");
}

#[test]
fn rejects_blank_username_first() {
    assert_eq!(validate_login("   ", ""), Err(LoginValidationError::UsernameRequired));
    assert_eq!(validate_login("", "12"), Err(LoginValidationError::UsernameRequired));
}

#[test]
fn rejects_empty_password() {
    assert_eq!(validate_login("alice", ""), Err(LoginValidationError::PasswordRequired));
}

#[test]
fn rejects_short_password() {
    assert_eq!(validate_login("alice", "123"), Err(LoginValidationError::PasswordTooShort));
}

#[test]
fn password_length_counts_characters_not_bytes() {
    // Three characters, nine bytes.
    assert_eq!(validate_login("alice", "äöü"), Err(LoginValidationError::PasswordTooShort));
    assert!(validate_login("alice", "äöüß").is_ok());
}

#[test]
fn whitespace_password_counts_as_present() {
    assert!(validate_login("alice", "    ").is_ok());
}

#[test]
fn messages_match_form_copy() {
    assert_eq!(LoginValidationError::UsernameRequired.to_string(), "Username wajib diisi");
    assert_eq!(LoginValidationError::PasswordRequired.to_string(), "Password wajib diisi");
    assert_eq!(LoginValidationError::PasswordTooShort.to_string(), "Password minimal 4 karakter");
}
