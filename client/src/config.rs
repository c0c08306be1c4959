//! Backend base URLs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The UI talks to one conceptual backend through two configured roots: the
//! API root (auth, profile, feedback, ratings) and the logs root (apartments
//! and history logs). Both are baked in at build time from `PAYNEST_API_URL`
//! and `PAYNEST_LOGS_API_URL`; the logs root falls back to the API root.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Used when `PAYNEST_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Resolved backend roots, without trailing slashes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_base: String,
    pub logs_base: String,
}

impl ApiConfig {
    /// Build a config from optional raw values, applying defaults.
    #[must_use]
    pub fn new(api_url: Option<&str>, logs_url: Option<&str>) -> Self {
        let api_base = normalize_base(api_url).unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        let logs_base = normalize_base(logs_url).unwrap_or_else(|| api_base.clone());
        Self { api_base, logs_base }
    }

    /// Config captured from the build environment.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(option_env!("PAYNEST_API_URL"), option_env!("PAYNEST_LOGS_API_URL"))
    }

    /// Join a path onto the API root.
    #[must_use]
    pub fn api(&self, path: &str) -> String {
        join(&self.api_base, path)
    }

    /// Join a path onto the logs root.
    #[must_use]
    pub fn logs(&self, path: &str) -> String {
        join(&self.logs_base, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

fn normalize_base(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim().trim_end_matches('/');
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

fn join(base: &str, path: &str) -> String {
    format!("{base}/{}", path.trim_start_matches('/'))
}
