use super::*;

#[test]
fn zero_stars_is_rejected_with_warning() {
    assert_eq!(rating_request(0, "great"), Err(NO_RATING_MESSAGE));
}

#[test]
fn empty_comment_is_sent_as_null() {
    assert_eq!(rating_request(4, ""), Ok(RatingRequest { rating_value: 4, comment: None }));
}

#[test]
fn comment_is_sent_as_typed() {
    let req = rating_request(5, "Love it").unwrap();
    assert_eq!(req.comment.as_deref(), Some("Love it"));
}

#[test]
fn stars_are_capped() {
    assert_eq!(rating_request(9, "").unwrap().rating_value, MAX_STARS);
}

#[test]
fn feedback_success_toast() {
    assert_eq!(
        feedback_outcome(&Ok(())),
        (ToastKind::Success, "Thanks! Your feedback was submitted.".to_owned())
    );
}

#[test]
fn feedback_failure_uses_server_error_field() {
    let err = ApiError::from_response(400, r#"{"error":"Message is required"}"#);
    assert_eq!(feedback_outcome(&Err(err)), (ToastKind::Error, "Message is required".to_owned()));
}

#[test]
fn rating_failure_falls_back() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(rating_outcome(&Err(err)), (ToastKind::Error, "Failed to submit rating.".to_owned()));
}

#[test]
fn feedback_failure_ignores_generic_message() {
    let err = ApiError::from_response(400, r#"{"message":"generic","error":"Email is required"}"#);
    assert_eq!(feedback_outcome(&Err(err)), (ToastKind::Error, "Email is required".to_owned()));
}

#[test]
fn rating_failure_without_error_field_falls_back() {
    let err = ApiError::from_response(500, r#"{"message":"generic"}"#);
    assert_eq!(rating_outcome(&Err(err)), (ToastKind::Error, "Failed to submit rating.".to_owned()));
}

#[test]
fn stars_light_up_to_the_selection() {
    let lit: Vec<bool> = (1..=MAX_STARS).map(|n| star_lit(3, n)).collect();
    assert_eq!(lit, [true, true, true, false, false]);
    assert!((1..=MAX_STARS).all(|n| !star_lit(0, n)));
}
