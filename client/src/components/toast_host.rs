//! Toast stack rendered once at the app root.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages push toasts through `show_toast`; the host renders whatever is in
//! the shared `RwSignal<ToastState>` and each toast removes itself when its
//! timer fires.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};
use crate::util::timer::after_ms;

/// Shared toast queue from context.
#[must_use]
pub fn use_toasts() -> RwSignal<ToastState> {
    expect_context::<RwSignal<ToastState>>()
}

/// Push a toast that dismisses itself after `duration_ms`.
pub fn show_toast(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>, duration_ms: u32) {
    let message = message.into();
    match kind {
        ToastKind::Error => log::warn!("toast: {message}"),
        _ => log::debug!("toast: {message}"),
    }
    let mut id = 0;
    toasts.update(|t| id = t.push(kind, message, duration_ms));
    after_ms(duration_ms, move || {
        toasts.update(|t| {
            t.dismiss(id);
        });
    });
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-host" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=toast.kind.class() role="status">
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__close"
                                    title="Dismiss"
                                    on:click=move |_| {
                                        toasts.update(|t| {
                                            t.dismiss(id);
                                        });
                                    }
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
