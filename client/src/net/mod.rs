//! Networking modules for the PayNest REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles auth, profile, and feedback calls, `logs` handles the
//! history viewer's reads and export, `error` is the shared failure type,
//! and `types` defines the wire schema.

pub mod api;
pub mod error;
#[cfg(feature = "hydrate")]
mod http;
pub mod logs;
pub mod types;
