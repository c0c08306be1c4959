use super::*;

#[test]
fn blank_email_is_rejected() {
    assert_eq!(validate_email("   "), Err("Enter your email address."));
}

#[test]
fn email_is_trimmed() {
    assert_eq!(validate_email(" jane@paynest.test "), Ok("jane@paynest.test".to_owned()));
}

#[test]
fn sent_message_prefers_backend_text() {
    assert_eq!(sent_message(Some("Check your inbox".to_owned())), "Check your inbox");
    assert_eq!(sent_message(Some("  ".to_owned())), SENT_FALLBACK);
    assert_eq!(sent_message(None), SENT_FALLBACK);
}
