use super::*;

fn filled() -> RegisterForm {
    RegisterForm {
        full_name: " Jane Wanjiru ".to_owned(),
        email: "jane@paynest.test".to_owned(),
        phone: "254712345678".to_owned(),
        password: "Secret1!".to_owned(),
        confirm_password: "Secret1!".to_owned(),
        terms: true,
    }
}

#[test]
fn terms_are_checked_first() {
    let form = RegisterForm { terms: false, phone: "12".to_owned(), ..filled() };
    assert_eq!(validate_register(&form), Err("You must agree to the Terms & Privacy Policy."));
}

#[test]
fn invalid_phone_is_rejected() {
    let form = RegisterForm { phone: "254112345678".to_owned(), ..filled() };
    assert_eq!(validate_register(&form), Err("Enter a valid phone number in format 2547XXXXXXXX"));
}

#[test]
fn valid_form_builds_request() {
    let req = validate_register(&filled()).unwrap();
    assert_eq!(req.full_name, " Jane Wanjiru ");
    assert_eq!(req.phone, "254712345678");
    assert!(req.terms);
}

#[test]
fn normalized_local_number_passes() {
    let form = RegisterForm { phone: phone::normalize("0712 345 678"), ..filled() };
    assert!(validate_register(&form).is_ok());
}

#[test]
fn success_copy_points_at_sms_code() {
    assert!(REGISTER_SUCCESS.contains("code via SMS"));
    assert_ne!(REGISTER_SUCCESS, crate::components::otp_dialog::PHONE_VERIFIED);
}
