use super::*;

#[test]
fn code_whitespace_is_stripped() {
    assert_eq!(sanitize_code(" 12 34\t56 "), "123456");
}

#[test]
fn code_needs_four_characters() {
    assert!(!can_submit_code("123"));
    assert!(can_submit_code("1234"));
    assert!(!can_submit_code("   "));
}

#[test]
fn verify_failure_prefers_server_message() {
    let err = ApiError::from_response(400, r#"{"message":"Code expired"}"#);
    assert_eq!(verify_failure_message(&err), "Code expired");
}

#[test]
fn verify_failure_on_rate_limit() {
    let err = ApiError::from_response(429, "");
    assert_eq!(verify_failure_message(&err), "Too many attempts. Please wait a bit and try again.");
}

#[test]
fn verify_failure_fallback() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(verify_failure_message(&err), "Failed to verify code.");
}

#[test]
fn resend_failure_fallback() {
    let err = ApiError::from_response(500, "<html>");
    assert_eq!(resend_failure_message(&err), "Failed to resend OTP.");
}

#[test]
fn login_mode_builds_login_verify_payload() {
    let request = verification(OtpMode::Login { remember_me: true }, "jane@paynest.test", " 123456 ", false);
    assert_eq!(
        request,
        OtpVerification::Login(OtpVerifyRequest {
            email: "jane@paynest.test".to_owned(),
            code: "123456".to_owned(),
            trust_device: false,
            remember_me: true,
        })
    );
}

#[test]
fn registration_mode_sends_email_and_code_only() {
    let request = verification(OtpMode::Registration, "jane@paynest.test", "4321", true);
    assert_eq!(
        request,
        OtpVerification::Registration(OtpCodeRequest {
            email: "jane@paynest.test".to_owned(),
            code: "4321".to_owned(),
        })
    );
}

#[test]
fn modes_differ_in_copy_and_trust_option() {
    let login = OtpMode::Login { remember_me: false };
    assert_eq!(login.title(), "Two-Factor Authentication");
    assert!(login.offers_trust_device());
    assert!(login.hint("jane@paynest.test").contains("complete sign-in"));

    assert_eq!(OtpMode::Registration.title(), "Verify your phone");
    assert!(!OtpMode::Registration.offers_trust_device());
    assert!(OtpMode::Registration.hint("jane@paynest.test").contains("jane@paynest.test"));
}

#[test]
fn resend_waits_for_cooldown_and_idle() {
    assert!(!resend_blocked(false, 0));
    assert!(resend_blocked(true, 0));
    assert!(resend_blocked(false, RESEND_COOLDOWN_SECS));
}
