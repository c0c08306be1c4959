//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render landing, auth, and dashboard chrome while reading and
//! writing shared state from Leptos context providers.

pub mod auth_card;
pub mod dashboard_header;
pub mod features_section;
pub mod feedback_section;
pub mod footer;
pub mod hero;
pub mod nav_bar;
pub mod operations_section;
pub mod otp_dialog;
pub mod password_meter;
pub mod side_menu;
pub mod toast_host;
