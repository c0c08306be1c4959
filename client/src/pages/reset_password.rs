//! Set a new password from an emailed reset link.

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::auth_card::AuthCard;
use crate::components::password_meter::PasswordMeter;
use crate::components::toast_host::{show_toast, use_toasts};
use crate::config::ApiConfig;
use crate::net::types::ResetPasswordRequest;
use crate::state::toast::{DEFAULT_TOAST_MS, RESET_TOAST_MS, ToastKind};
use crate::util::password::reset_ready;
use crate::util::timer::after_ms;

/// Delay between the success toast and `/login`.
pub const RESET_REDIRECT_MS: u32 = 2500;
pub const RESET_SUCCESS: &str = "Password reset successful! Redirecting to login...";

/// Check token and passwords before calling the backend.
///
/// # Errors
///
/// Returns the message for the first failed check.
pub fn validate_reset(token: &str, password: &str, confirm: &str) -> Result<ResetPasswordRequest, &'static str> {
    if token.trim().is_empty() {
        return Err("No valid reset token found. Start from Forgot Password.");
    }
    if !reset_ready(password, confirm) {
        return Err("Please meet password requirements and confirm correctly.");
    }
    Ok(ResetPasswordRequest { new_password: password.to_owned(), confirm_password: confirm.to_owned() })
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let params = use_params_map();
    let token = move || params.read().get("token").unwrap_or_default();

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let go_login = RwSignal::new(false);

    Effect::new(move || {
        if go_login.get() {
            navigate("/login", Default::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let token_value = token();
        let req = match validate_reset(&token_value, &password.get(), &confirm.get()) {
            Ok(req) => req,
            Err(msg) => {
                show_toast(toasts, ToastKind::Error, msg, DEFAULT_TOAST_MS);
                return;
            }
        };
        busy.set(true);
        let config = config.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::reset_password(&config, &token_value, &req).await {
                Ok(()) => {
                    show_toast(toasts, ToastKind::Success, RESET_SUCCESS, RESET_TOAST_MS);
                    after_ms(RESET_REDIRECT_MS, move || go_login.set(true));
                }
                Err(e) => {
                    log::warn!("password reset failed: {e}");
                    show_toast(toasts, ToastKind::Error, e.user_message("Password reset failed."), DEFAULT_TOAST_MS);
                }
            }
            busy.set(false);
        });
    };

    view! {
        <AuthCard title="Reset password" subtitle="Choose a new password for your account">
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="input"
                    type="password"
                    placeholder="New password"
                    autocomplete="new-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <PasswordMeter password=password />
                <ul class="auth-form__rules">
                    <li>"At least 8 characters"</li>
                    <li>"Upper and lower case letters"</li>
                    <li>"A number and a symbol"</li>
                </ul>
                <input
                    class="input"
                    type="password"
                    placeholder="Confirm new password"
                    autocomplete="new-password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Resetting..." } else { "Reset Password" }}
                </button>
            </form>
            <p class="auth-card__footer">
                <A href="/forgot-password">"Request a new link"</A>
            </p>
        </AuthCard>
    }
}
