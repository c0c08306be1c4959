//! REST error type shared by every backend call.
//!
//! DESIGN
//! ======
//! The backend reports failures as a JSON body carrying `message` (auth and
//! profile routes) or `error` (feedback and ratings). The body is parsed
//! leniently so a non-JSON error page still yields a usable `ApiError`, and
//! callers pick a fallback string when the server says nothing useful.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Lenient view of an error response body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    /// Set by `/login` when the account must finish OTP verification.
    /// `null` reads as unset.
    #[serde(default)]
    pub needs_verification: Option<bool>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl ErrorBody {
    /// Parse a raw response body; anything unparseable becomes an empty body.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {status}")]
    Status { status: u16, body: ErrorBody },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("request aborted")]
    Aborted,
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error from the HTTP status and raw body text.
    #[must_use]
    pub fn from_response(status: u16, raw_body: &str) -> Self {
        Self::Status { status, body: ErrorBody::parse(raw_body) }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message supplied by the server, preferring `message` over `error`.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        let Self::Status { body, .. } = self else {
            return None;
        };
        body.message
            .as_deref()
            .or(body.error.as_deref())
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }

    /// The body's `error` field alone. Feedback and rating routes report
    /// through it and their `message`, if any, is not meant for the user.
    #[must_use]
    pub fn error_field(&self) -> Option<&str> {
        let Self::Status { body, .. } = self else {
            return None;
        };
        body.error.as_deref().map(str::trim).filter(|m| !m.is_empty())
    }

    /// Text to show the user: the server's message, else `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }

    /// `true` for a `403` that asks the client to run OTP verification.
    #[must_use]
    pub fn needs_verification(&self) -> bool {
        matches!(self, Self::Status { status: 403, body } if body.needs_verification == Some(true))
    }

    #[must_use]
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(js) if js.name == "AbortError" => Self::Aborted,
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}
