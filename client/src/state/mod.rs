//! Client-side state shared through Leptos context.
//!
//! DESIGN
//! ======
//! State structs are plain data; `app` wraps them in `RwSignal` and provides
//! them as context so pages and components stay decoupled.

pub mod auth;
pub mod dashboard;
pub mod history;
pub mod toast;
