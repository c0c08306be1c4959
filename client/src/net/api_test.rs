use super::*;

fn config() -> ApiConfig {
    ApiConfig::new(Some("https://api.paynest.test/"), None)
}

#[test]
fn reset_password_endpoint_embeds_token() {
    assert_eq!(
        reset_password_endpoint(&config(), "tok-123"),
        "https://api.paynest.test/reset-password/tok-123"
    );
}

#[test]
fn reset_password_endpoint_trims_token() {
    assert_eq!(
        reset_password_endpoint(&config(), "  tok-123 \n"),
        "https://api.paynest.test/reset-password/tok-123"
    );
}

#[test]
fn missing_route_statuses() {
    assert!(is_missing_route(&ApiError::from_response(404, "")));
    assert!(is_missing_route(&ApiError::from_response(405, "")));
    assert!(!is_missing_route(&ApiError::from_response(400, "")));
    assert!(!is_missing_route(&ApiError::Network("offline".to_owned())));
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc.def"), "Bearer abc.def");
}

#[cfg(not(feature = "hydrate"))]
mod server_side {
    use super::*;

    fn block_on<F: std::future::Future>(fut: F) -> F::Output {
        use std::pin::pin;
        use std::task::{Context, Poll, Waker};

        let mut fut = pin!(fut);
        let mut cx = Context::from_waker(Waker::noop());
        loop {
            if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
                return out;
            }
        }
    }

    fn recorded_register(replies: Vec<Result<(), ApiError>>) -> (Result<(), ApiError>, Vec<&'static str>) {
        use std::cell::RefCell;

        let paths = RefCell::new(Vec::new());
        let replies = RefCell::new(replies.into_iter());
        let result = block_on(with_legacy_register(|path| {
            paths.borrow_mut().push(path);
            let reply = replies.borrow_mut().next().unwrap_or(Err(ApiError::Unavailable));
            async move { reply }
        }));
        (result, paths.into_inner())
    }

    #[test]
    fn register_uses_current_route_when_it_answers() {
        let (result, paths) = recorded_register(vec![Ok(())]);
        assert_eq!(result, Ok(()));
        assert_eq!(paths, [REGISTER_PATH]);
    }

    #[test]
    fn register_falls_back_on_missing_route() {
        for status in [404, 405] {
            let (result, paths) = recorded_register(vec![Err(ApiError::from_response(status, "")), Ok(())]);
            assert_eq!(result, Ok(()));
            assert_eq!(paths, [REGISTER_PATH, LEGACY_REGISTER_PATH]);
        }
    }

    #[test]
    fn register_does_not_fall_back_on_rejection() {
        let rejected = ApiError::from_response(400, r#"{"message":"Email is already registered"}"#);
        let (result, paths) = recorded_register(vec![Err(rejected.clone())]);
        assert_eq!(result, Err(rejected));
        assert_eq!(paths, [REGISTER_PATH]);
    }

    #[test]
    fn calls_are_unavailable_outside_the_browser() {
        let result = block_on(submit_feedback(&config(), &FeedbackRequest::default()));
        assert_eq!(result, Err(ApiError::Unavailable));
        let profile = block_on(fetch_profile(&config(), "tok"));
        assert_eq!(profile, Err(ApiError::Unavailable));
        let otp = OtpCodeRequest { email: "jane@paynest.test".to_owned(), code: "1234".to_owned() };
        assert_eq!(block_on(verify_registration_otp(&config(), &otp)), Err(ApiError::Unavailable));
    }
}
