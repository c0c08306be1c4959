//! Host configuration parsed from environment variables.
//!
//! Only the listen address is configured here. Backend URLs are baked into the
//! client at build time and Leptos options come from the workspace metadata.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ServerError;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST, port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PAYNEST_HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: listen port, default 3000
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidConfig`] when a variable is set but does
    /// not parse.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidConfig`] when a value does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let host = parse_var("PAYNEST_HOST", lookup("PAYNEST_HOST"), DEFAULT_HOST)?;
        let port = parse_var("PORT", lookup("PORT"), DEFAULT_PORT)?;
        Ok(Self { host, port })
    }

    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ServerError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    trimmed
        .parse()
        .map_err(|_| ServerError::InvalidConfig { var, value: raw.clone() })
}
