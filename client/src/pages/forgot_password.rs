//! Request a password-reset email.

#[cfg(test)]
#[path = "forgot_password_test.rs"]
mod forgot_password_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::auth_card::AuthCard;
use crate::components::toast_host::{show_toast, use_toasts};
use crate::config::ApiConfig;
use crate::state::toast::{DEFAULT_TOAST_MS, ToastKind};

const SENT_FALLBACK: &str = "If that email is registered, a reset link is on its way.";

/// Trimmed email, or the message for an empty field.
///
/// # Errors
///
/// Returns the message to show when the field is blank.
pub fn validate_email(input: &str) -> Result<String, &'static str> {
    let email = input.trim();
    if email.is_empty() { Err("Enter your email address.") } else { Ok(email.to_owned()) }
}

/// Success text: the backend's acknowledgement when it sent one.
#[must_use]
pub fn sent_message(ack: Option<String>) -> String {
    ack.map(|m| m.trim().to_owned()).filter(|m| !m.is_empty()).unwrap_or_else(|| SENT_FALLBACK.to_owned())
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let toasts = use_toasts();
    let email = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let address = match validate_email(&email.get()) {
            Ok(address) => address,
            Err(msg) => {
                show_toast(toasts, ToastKind::Error, msg, DEFAULT_TOAST_MS);
                return;
            }
        };
        busy.set(true);
        let config = config.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::forgot_password(&config, &address).await {
                Ok(ack) => show_toast(toasts, ToastKind::Success, sent_message(ack), DEFAULT_TOAST_MS),
                Err(e) => {
                    log::warn!("reset link request failed: {e}");
                    show_toast(toasts, ToastKind::Error, e.user_message("Failed to send reset link."), DEFAULT_TOAST_MS);
                }
            }
            busy.set(false);
        });
    };

    view! {
        <AuthCard title="Forgot password" subtitle="We'll email you a link to reset it">
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Sending..." } else { "Send Reset Link" }}
                </button>
            </form>
            <p class="auth-card__footer">
                <A href="/login">"Back to login"</A>
            </p>
        </AuthCard>
    }
}
