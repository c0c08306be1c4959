use super::*;

#[test]
fn empty_fields_are_rejected() {
    assert_eq!(validate_login("", "secret"), Err("Please enter email and password."));
    assert_eq!(validate_login("jane@paynest.test", ""), Err("Please enter email and password."));
}

#[test]
fn fields_are_sent_as_typed() {
    let req = validate_login(" jane@paynest.test ", " pass ").unwrap();
    assert_eq!(req.email, " jane@paynest.test ");
    assert_eq!(req.password, " pass ");
    assert!(!req.remember_me);
}

#[test]
fn welcome_uses_full_name() {
    let user = User { full_name: "Jane Wanjiru".to_owned(), ..User::default() };
    assert_eq!(welcome_message(&user), "Welcome back, Jane Wanjiru! Redirecting...");
}

#[test]
fn remember_choice_keeps_password_only_when_given() {
    assert_eq!(remember_choice(false, "a@b.c", Some("pw")), Remember::No);
    assert_eq!(
        remember_choice(true, "a@b.c", Some("pw")),
        Remember::Yes { email: "a@b.c".to_owned(), password: Some("pw".to_owned()) }
    );
    assert_eq!(
        remember_choice(true, "a@b.c", None),
        Remember::Yes { email: "a@b.c".to_owned(), password: None }
    );
}
