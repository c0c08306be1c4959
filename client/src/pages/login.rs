//! Login page: email + password, remember me, and OTP step-up.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful `/login` persists the session through `util::session` and
//! sends the user to `/dashboard`. A `403` with `needs_verification` opens
//! `OtpDialog` instead; its reply is persisted the same way, minus the
//! remembered password.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::auth_card::AuthCard;
use crate::components::otp_dialog::{OtpDialog, OtpMode, OtpOutcome};
use crate::components::toast_host::{show_toast, use_toasts};
use crate::config::ApiConfig;
use crate::net::types::{LoginRequest, LoginResponse, User};
use crate::state::auth::AuthState;
use crate::state::toast::{DEFAULT_TOAST_MS, ToastKind, ToastState};
use crate::util::session::{Remember, persist_browser_session, remembered_browser_login};
use crate::util::timer::after_ms;

/// Delay between the welcome toast and the dashboard.
pub const LOGIN_REDIRECT_MS: u32 = 1200;

/// Check the form before any network call. Both fields are sent as typed.
///
/// # Errors
///
/// Returns the message to show when either field is empty.
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    if email.is_empty() || password.is_empty() {
        return Err("Please enter email and password.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned(), remember_me: false })
}

#[must_use]
pub fn welcome_message(user: &User) -> String {
    format!("Welcome back, {}! Redirecting...", user.display_name())
}

/// Persistence choice for a login. `password` is `None` on the OTP path.
#[must_use]
pub fn remember_choice(remember: bool, email: &str, password: Option<&str>) -> Remember {
    if remember {
        Remember::Yes { email: email.to_owned(), password: password.map(str::to_owned) }
    } else {
        Remember::No
    }
}

/// Persist the session, greet, and schedule the dashboard redirect.
fn finish_login(
    resp: LoginResponse,
    choice: &Remember,
    auth: RwSignal<AuthState>,
    toasts: RwSignal<ToastState>,
    go_dashboard: RwSignal<bool>,
) {
    if let Err(e) = persist_browser_session(&resp.token, &resp.user, choice) {
        log::warn!("session not persisted: {e}");
    }
    show_toast(toasts, ToastKind::Success, welcome_message(&resp.user), DEFAULT_TOAST_MS);
    auth.set(AuthState::restored(Some(resp.token), Some(resp.user)));
    after_ms(LOGIN_REDIRECT_MS, move || go_dashboard.set(true));
}

/// Email and remember flag carried into the OTP dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
struct OtpPrompt {
    email: String,
    remember_me: bool,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let otp = RwSignal::new(None::<OtpPrompt>);

    Effect::new(move || {
        if let Some(saved) = remembered_browser_login() {
            email.set(saved.email);
            password.set(saved.password);
            remember.set(true);
        }
    });

    let go_dashboard = RwSignal::new(false);
    Effect::new(move || {
        if go_dashboard.get() {
            navigate("/dashboard", Default::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let mut req = match validate_login(&email.get(), &password.get()) {
            Ok(req) => req,
            Err(msg) => {
                show_toast(toasts, ToastKind::Error, msg, DEFAULT_TOAST_MS);
                return;
            }
        };
        req.remember_me = remember.get();
        busy.set(true);
        let config = config.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&config, &req).await {
                Ok(resp) => {
                    let choice = remember_choice(req.remember_me, &req.email, Some(&req.password));
                    finish_login(resp, &choice, auth, toasts, go_dashboard);
                }
                Err(e) if e.needs_verification() => {
                    let text = e.user_message("Please verify the code we sent to continue.");
                    show_toast(toasts, ToastKind::Warning, text, DEFAULT_TOAST_MS);
                    otp.set(Some(OtpPrompt { email: req.email.clone(), remember_me: req.remember_me }));
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    show_toast(toasts, ToastKind::Error, e.user_message("Login failed. Try again."), DEFAULT_TOAST_MS);
                }
            }
            busy.set(false);
        });
    };

    let on_otp_verified = Callback::new(move |outcome: OtpOutcome| {
        let Some(prompt) = otp.get_untracked() else {
            return;
        };
        otp.set(None);
        match outcome {
            OtpOutcome::SignedIn(resp) => {
                let choice = remember_choice(prompt.remember_me, &resp.user.email, None);
                finish_login(resp, &choice, auth, toasts, go_dashboard);
            }
            OtpOutcome::PhoneVerified => log::warn!("login OTP answered without a session"),
        }
    });
    let on_otp_close = Callback::new(move |()| otp.set(None));

    view! {
        <AuthCard title="Welcome back" subtitle="Sign in to manage your properties">
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="input"
                    type="email"
                    placeholder="you@example.com"
                    autocomplete="username"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="input"
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <div class="auth-form__row">
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || remember.get()
                            on:change=move |ev| remember.set(event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>
                    <A href="/forgot-password" attr:class="auth-form__link">"Forgot password?"</A>
                </div>
                <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Login" }}
                </button>
            </form>
            <p class="auth-card__footer">
                "New to PayNest? "
                <A href="/register">"Create an account"</A>
            </p>
            {move || {
                otp.get()
                    .map(|prompt| {
                        view! {
                            <OtpDialog
                                email=prompt.email
                                mode={OtpMode::Login { remember_me: prompt.remember_me }}
                                on_verified=on_otp_verified
                                on_close=on_otp_close
                            />
                        }
                    })
            }}
        </AuthCard>
    }
}
