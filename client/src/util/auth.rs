//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical unauthenticated redirect behavior: the
//! session is restored from storage once in the browser, and any protected
//! view without a token is sent to `/login`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Whether a protected view should leave for `/login`.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.is_authenticated()
}

/// Read token and user from browser storage into `auth`. No-op during SSR.
pub fn restore_session(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        let restored = match super::session::browser_stores() {
            Ok(stores) => AuthState::restored(stores.token(), stores.user()),
            Err(e) => {
                log::warn!("session restore skipped: {e}");
                AuthState::signed_out()
            }
        };
        auth.set(restored);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Redirect to `/login` whenever auth has loaded and no token is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Drop the stored session and mark `auth` signed out.
pub fn sign_out(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        match super::session::browser_stores().and_then(|s| s.clear_session()) {
            Ok(()) => log::info!("signed out"),
            Err(e) => log::warn!("sign-out left storage behind: {e}"),
        }
    }
    auth.set(AuthState::signed_out());
}
