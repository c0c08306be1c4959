//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. `history_logs`, `profile`, and `placeholder` are
//! dashboard sub-pages rendered inside the `dashboard` shell.

pub mod dashboard;
pub mod forgot_password;
pub mod history_logs;
pub mod landing;
pub mod login;
pub mod placeholder;
pub mod profile;
pub mod register;
pub mod reset_password;
