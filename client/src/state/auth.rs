//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. The session itself lives in browser
//! storage (`util::session`); this struct is the in-memory mirror.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the stored session and restore status.
///
/// `loading` stays `true` until storage has been read in the browser, so SSR
/// never decides a redirect on its own.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, token: None, loading: true }
    }
}

impl AuthState {
    /// State after reading storage.
    #[must_use]
    pub fn restored(token: Option<String>, user: Option<User>) -> Self {
        let token = token.filter(|t| !t.trim().is_empty());
        Self { user, token, loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Name for the dashboard greeting.
    #[must_use]
    pub fn greeting_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.display_name().to_owned())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "Landlord".to_owned())
    }

    /// Signed out, storage already read.
    #[must_use]
    pub fn signed_out() -> Self {
        Self { user: None, token: None, loading: false }
    }
}
