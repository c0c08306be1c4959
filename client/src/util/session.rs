//! Browser-storage session: token, user record, and remember-me fields.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session survives a reload only through storage. With remember me the
//! token and user go to `localStorage` together with the remember-me fields;
//! without it they go to `sessionStorage` and every persistent copy is
//! removed. Readers check `localStorage` first, then `sessionStorage`.
//!
//! TRADE-OFFS
//! ==========
//! `remember_password` is base64, which is reversible encoding and NOT
//! encryption. Anyone with access to the profile can read it. The field is
//! kept only because existing installs already store it in this layout.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;

use crate::net::types::User;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const REMEMBER_ME_KEY: &str = "remember_me";
pub const REMEMBER_EMAIL_KEY: &str = "remember_email";
pub const REMEMBER_PASSWORD_KEY: &str = "remember_password";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("storage write failed for {key}: {detail}")]
    Write { key: String, detail: String },
    #[error("user record could not be serialized: {0}")]
    Encode(String),
}

/// String key/value storage with `Storage`-like semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// # Errors
    ///
    /// Returns an error if the backing store rejects the removal.
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// `web_sys::Storage` adapter.
#[cfg(feature = "hydrate")]
pub struct BrowserStorage(web_sys::Storage);

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn write_error(key: &str, err: &wasm_bindgen::JsValue) -> SessionError {
        SessionError::Write { key: key.to_owned(), detail: format!("{err:?}") }
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.0.set_item(key, value).map_err(|e| Self::write_error(key, &e))
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.0.remove_item(key).map_err(|e| Self::write_error(key, &e))
    }
}

/// Browser `localStorage` + `sessionStorage`.
///
/// # Errors
///
/// Returns `SessionError::Unavailable` outside the browser or when storage
/// access is denied.
#[cfg(feature = "hydrate")]
pub fn browser_stores() -> Result<Stores<BrowserStorage, BrowserStorage>, SessionError> {
    let window = web_sys::window().ok_or(SessionError::Unavailable)?;
    let local = window.local_storage().ok().flatten().ok_or(SessionError::Unavailable)?;
    let session = window.session_storage().ok().flatten().ok_or(SessionError::Unavailable)?;
    Ok(Stores { local: BrowserStorage(local), session: BrowserStorage(session) })
}

/// Reversible obfuscation for the remembered password. Not encryption.
#[must_use]
pub fn obfuscate(password: &str) -> String {
    B64.encode(password.as_bytes())
}

/// Inverse of [`obfuscate`]; `None` for anything that does not decode.
#[must_use]
pub fn deobfuscate(encoded: &str) -> Option<String> {
    let bytes = B64.decode(encoded.trim()).ok()?;
    String::from_utf8(bytes).ok()
}

/// How a fresh session should be persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Remember {
    /// Session storage only; forget any remembered login.
    No,
    /// Persistent storage. `password` is `None` on the OTP path.
    Yes { email: String, password: Option<String> },
}

/// Prefill values for the login form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RememberedLogin {
    pub email: String,
    pub password: String,
}

/// Persistent (`local`) and per-tab (`session`) storage.
pub struct Stores<P, S> {
    pub local: P,
    pub session: S,
}

impl<P: KeyValueStore, S: KeyValueStore> Stores<P, S> {
    /// Persist a signed-in session.
    ///
    /// # Errors
    ///
    /// Returns the first storage or serialization failure.
    pub fn save_session(&self, token: &str, user: &User, remember: &Remember) -> Result<(), SessionError> {
        let user_json = serde_json::to_string(user).map_err(|e| SessionError::Encode(e.to_string()))?;
        match remember {
            Remember::Yes { email, password } => {
                self.local.set(TOKEN_KEY, token)?;
                self.local.set(USER_KEY, &user_json)?;
                self.local.set(REMEMBER_ME_KEY, "true")?;
                self.local.set(REMEMBER_EMAIL_KEY, email)?;
                if let Some(password) = password {
                    self.local.set(REMEMBER_PASSWORD_KEY, &obfuscate(password))?;
                }
                self.session.remove(TOKEN_KEY)?;
                self.session.remove(USER_KEY)?;
            }
            Remember::No => {
                self.session.set(TOKEN_KEY, token)?;
                self.session.set(USER_KEY, &user_json)?;
                for key in [TOKEN_KEY, USER_KEY, REMEMBER_ME_KEY, REMEMBER_EMAIL_KEY, REMEMBER_PASSWORD_KEY] {
                    self.local.remove(key)?;
                }
            }
        }
        Ok(())
    }

    /// Bearer token, `localStorage` first.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.local
            .get(TOKEN_KEY)
            .or_else(|| self.session.get(TOKEN_KEY))
            .filter(|t| !t.trim().is_empty())
    }

    /// Stored user record; unparseable JSON reads as absent.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        let raw = self.local.get(USER_KEY).or_else(|| self.session.get(USER_KEY))?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("stored user record is invalid: {e}");
                None
            }
        }
    }

    /// Login prefill, present only when every remember-me field is usable.
    #[must_use]
    pub fn remembered_login(&self) -> Option<RememberedLogin> {
        if self.local.get(REMEMBER_ME_KEY).as_deref() != Some("true") {
            return None;
        }
        let email = self.local.get(REMEMBER_EMAIL_KEY).filter(|e| !e.is_empty())?;
        let password = deobfuscate(&self.local.get(REMEMBER_PASSWORD_KEY)?)?;
        Some(RememberedLogin { email, password })
    }

    /// Sign out: drop token and user everywhere, keep remember-me fields.
    ///
    /// # Errors
    ///
    /// Returns the first storage failure.
    pub fn clear_session(&self) -> Result<(), SessionError> {
        for key in [TOKEN_KEY, USER_KEY] {
            self.local.remove(key)?;
            self.session.remove(key)?;
        }
        Ok(())
    }
}

/// Persist a signed-in session to browser storage.
///
/// # Errors
///
/// Returns an error outside the browser or when storage rejects a write.
pub fn persist_browser_session(token: &str, user: &User, remember: &Remember) -> Result<(), SessionError> {
    #[cfg(feature = "hydrate")]
    {
        browser_stores()?.save_session(token, user, remember)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user, remember);
        Err(SessionError::Unavailable)
    }
}

/// Remembered login from browser storage; `None` during SSR.
#[must_use]
pub fn remembered_browser_login() -> Option<RememberedLogin> {
    #[cfg(feature = "hydrate")]
    {
        browser_stores().ok()?.remembered_login()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
