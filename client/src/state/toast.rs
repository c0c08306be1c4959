//! Toast notification queue.
//!
//! DESIGN
//! ======
//! Toasts are pushed with a fixed lifetime and removed by id, so a dismiss
//! timer that fires after the user closed the toast is a harmless no-op.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Lifetime used when a flow has no specific timer.
pub const DEFAULT_TOAST_MS: u32 = 3000;
/// Registration success toast.
pub const REGISTER_TOAST_MS: u32 = 2500;
/// Password-reset success toast.
pub const RESET_TOAST_MS: u32 = 3000;
/// Landing-page feedback and rating toasts.
pub const FEEDBACK_TOAST_MS: u32 = 2200;
/// Profile load failure toast.
pub const PROFILE_TOAST_MS: u32 = 2300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    /// CSS modifier class.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
            Self::Warning => "toast toast--warning",
            Self::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub duration_ms: u32,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, duration_ms: u32) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, message: message.into(), duration_ms });
        id
    }

    /// Remove the toast with `id`. Returns whether it was still visible.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }
}
