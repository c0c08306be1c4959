//! REST helpers for auth, profile, and landing-page feedback.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; callers turn the error into a
//! toast with `ApiError::user_message` and a call-specific fallback.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    FeedbackRequest, LoginRequest, LoginResponse, OtpCodeRequest, OtpVerifyRequest, Profile, RatingRequest,
    RegisterRequest, ResetPasswordRequest,
};
use crate::config::ApiConfig;

#[cfg(any(test, feature = "hydrate"))]
fn reset_password_endpoint(config: &ApiConfig, token: &str) -> String {
    config.api(&format!("/reset-password/{}", token.trim()))
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Current sign-up route.
pub const REGISTER_PATH: &str = "/auth/register";
/// Route used by backends that predate `/auth/register`.
pub const LEGACY_REGISTER_PATH: &str = "/register";

/// Whether a failure means the route itself does not exist on this backend.
#[must_use]
pub fn is_missing_route(err: &ApiError) -> bool {
    matches!(err.status(), Some(404 | 405))
}

/// Post to `REGISTER_PATH`, retrying once on `LEGACY_REGISTER_PATH` when the
/// backend does not know the current route.
#[cfg(any(test, feature = "hydrate"))]
async fn with_legacy_register<F, Fut>(mut post: F) -> Result<(), ApiError>
where
    F: FnMut(&'static str) -> Fut,
    Fut: std::future::Future<Output = Result<(), ApiError>>,
{
    match post(REGISTER_PATH).await {
        Err(e) if is_missing_route(&e) => {
            log::info!("{REGISTER_PATH} unavailable ({e}), retrying {LEGACY_REGISTER_PATH}");
            post(LEGACY_REGISTER_PATH).await
        }
        other => other,
    }
}

/// Create a landlord account via `POST /auth/register`, falling back to
/// `POST /register` on `404`/`405`. The backend then texts a phone OTP.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects the account.
pub async fn register(config: &ApiConfig, req: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        with_legacy_register(|path| async move { super::http::post_ack(&config.api(path), req).await.map(|_| ()) })
            .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, req);
        Err(ApiError::Unavailable)
    }
}

/// Confirm the phone of a new account via `POST /auth/verify-otp`.
///
/// # Errors
///
/// Returns an error if the request fails or the code is rejected.
pub async fn verify_registration_otp(config: &ApiConfig, req: &OtpCodeRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::http::post_ack(&config.api("/auth/verify-otp"), req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, req);
        Err(ApiError::Unavailable)
    }
}

/// Sign in via `POST /login`.
///
/// # Errors
///
/// Returns an error if the request fails or credentials are rejected. A `403`
/// carrying `needs_verification` means the caller should start OTP verification.
pub async fn login(config: &ApiConfig, req: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::http::post_json(&config.api("/login"), req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, req);
        Err(ApiError::Unavailable)
    }
}

/// Finish a step-up login via `POST /auth/login-verify`.
///
/// # Errors
///
/// Returns an error if the request fails or the code is rejected.
pub async fn verify_login_otp(config: &ApiConfig, req: &OtpVerifyRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::http::post_json(&config.api("/auth/login-verify"), req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, req);
        Err(ApiError::Unavailable)
    }
}

/// Ask the backend to text a fresh OTP via `POST /auth/resend-otp`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend refuses to resend.
pub async fn resend_otp(config: &ApiConfig, email: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::EmailRequest { email: email.to_owned() };
        super::http::post_ack(&config.api("/auth/resend-otp"), &body).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, email);
        Err(ApiError::Unavailable)
    }
}

/// Request a password-reset email via `POST /forgot-password`.
///
/// Returns the backend's acknowledgement message, if any.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects the email.
pub async fn forgot_password(config: &ApiConfig, email: &str) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::EmailRequest { email: email.to_owned() };
        let ack = super::http::post_ack(&config.api("/forgot-password"), &body).await?;
        Ok(ack.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, email);
        Err(ApiError::Unavailable)
    }
}

/// Set a new password via `POST /reset-password/{token}`.
///
/// # Errors
///
/// Returns an error if the request fails or the token is invalid or expired.
pub async fn reset_password(config: &ApiConfig, token: &str, req: &ResetPasswordRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::http::post_ack(&reset_password_endpoint(config, token), req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, req);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the signed-in landlord's profile from `GET /profile`.
///
/// # Errors
///
/// Returns an error if the request fails or the token is not accepted.
pub async fn fetch_profile(config: &ApiConfig, token: &str) -> Result<Profile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = gloo_net::http::Request::get(&config.api("/profile"))
            .header("Authorization", &bearer_header(token));
        super::http::get_json(builder).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Err(ApiError::Unavailable)
    }
}

/// Post landing-page feedback via `POST /feedback`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects the feedback.
pub async fn submit_feedback(config: &ApiConfig, req: &FeedbackRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::http::post_ack(&config.api("/feedback"), req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, req);
        Err(ApiError::Unavailable)
    }
}

/// Post a star rating via `POST /ratings`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects the rating.
pub async fn submit_rating(config: &ApiConfig, req: &RatingRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::http::post_ack(&config.api("/ratings"), req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, req);
        Err(ApiError::Unavailable)
    }
}
