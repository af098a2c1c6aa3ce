use super::*;

#[test]
fn submit_label_reflects_progress() {
    assert_eq!(submit_label(false), "Sign In to Dashboard");
    assert_eq!(submit_label(true), "Processing...");
}

#[test]
fn password_visibility_switches_input_type() {
    assert_eq!(password_input_type(false), "password");
    assert_eq!(password_input_type(true), "text");
}
