use super::*;

#[test]
fn missing_token_is_reported_first() {
    assert_eq!(
        validate_reset("", "weak", "weak"),
        Err("No valid reset token found. Start from Forgot Password.")
    );
}

#[test]
fn weak_password_is_rejected() {
    assert_eq!(
        validate_reset("tok", "password", "password"),
        Err("Please meet password requirements and confirm correctly.")
    );
}

#[test]
fn mismatched_confirmation_is_rejected() {
    assert_eq!(
        validate_reset("tok", "Secret1!", "Secret2!"),
        Err("Please meet password requirements and confirm correctly.")
    );
}

#[test]
fn valid_reset_builds_request() {
    let req = validate_reset("tok", "Secret1!", "Secret1!").unwrap();
    assert_eq!(req.new_password, "Secret1!");
    assert_eq!(req.confirm_password, "Secret1!");
}
