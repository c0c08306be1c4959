//! SMS code dialog for login step-up and new-account phone checks.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LoginPage` opens it in `OtpMode::Login` when the backend answers `403`
//! with `needs_verification`; a verified code yields the `{token, user}` reply,
//! which the page persists. `RegisterPage` opens it in `OtpMode::Registration`
//! after sign-up; a verified code only confirms the phone and the user then
//! signs in normally. The dialog owns the code entry, the resend cooldown and
//! the verify call.

#[cfg(test)]
#[path = "otp_dialog_test.rs"]
mod otp_dialog_test;

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::error::ApiError;
use crate::net::types::{LoginResponse, OtpCodeRequest, OtpVerifyRequest};

/// Seconds before another code may be requested.
pub const RESEND_COOLDOWN_SECS: u32 = 30;
/// Shortest code the backend issues.
pub const MIN_CODE_LEN: usize = 4;

pub const PHONE_VERIFIED: &str = "Phone verified successfully. Please sign in.";
pub const OTP_RESENT: &str = "OTP resent via SMS.";
const TOO_MANY_ATTEMPTS: &str = "Too many attempts. Please wait a bit and try again.";

/// Which flow the code completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OtpMode {
    /// Second factor for `/login`; `remember_me` is forwarded to the backend.
    Login { remember_me: bool },
    /// Phone check for a freshly registered account.
    Registration,
}

impl OtpMode {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Login { .. } => "Two-Factor Authentication",
            Self::Registration => "Verify your phone",
        }
    }

    #[must_use]
    pub fn hint(self, email: &str) -> String {
        match self {
            Self::Login { .. } => {
                format!("We sent a 6-digit code to the phone linked with {email} to complete sign-in.")
            }
            Self::Registration => format!("Enter the 6-digit code we sent to the phone linked with {email}."),
        }
    }

    /// Only a login can mark the device as trusted.
    #[must_use]
    pub fn offers_trust_device(self) -> bool {
        matches!(self, Self::Login { .. })
    }
}

/// Result of a verified code.
#[derive(Clone, Debug, PartialEq)]
pub enum OtpOutcome {
    SignedIn(LoginResponse),
    PhoneVerified,
}

/// The verify call a submitted code turns into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OtpVerification {
    Login(OtpVerifyRequest),
    Registration(OtpCodeRequest),
}

/// Build the verify payload for `mode`; the code is trimmed.
#[must_use]
pub fn verification(mode: OtpMode, email: &str, code: &str, trust_device: bool) -> OtpVerification {
    let code = code.trim().to_owned();
    match mode {
        OtpMode::Login { remember_me } => {
            OtpVerification::Login(OtpVerifyRequest { email: email.to_owned(), code, trust_device, remember_me })
        }
        OtpMode::Registration => OtpVerification::Registration(OtpCodeRequest { email: email.to_owned(), code }),
    }
}

/// Resend is blocked while a call runs or the cooldown is ticking.
#[must_use]
pub fn resend_blocked(busy: bool, cooldown_secs: u32) -> bool {
    busy || cooldown_secs > 0
}

/// Drop whitespace the user may paste along with the code.
#[must_use]
pub fn sanitize_code(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

#[must_use]
pub fn can_submit_code(code: &str) -> bool {
    code.trim().chars().count() >= MIN_CODE_LEN
}

#[must_use]
pub fn verify_failure_message(err: &ApiError) -> String {
    if let Some(message) = err.server_message() {
        return message.to_owned();
    }
    if err.status() == Some(429) { TOO_MANY_ATTEMPTS.to_owned() } else { "Failed to verify code.".to_owned() }
}

#[must_use]
pub fn resend_failure_message(err: &ApiError) -> String {
    err.user_message("Failed to resend OTP.")
}

#[component]
pub fn OtpDialog(
    email: String,
    mode: OtpMode,
    on_verified: Callback<OtpOutcome>,
    on_close: Callback<()>,
) -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let code = RwSignal::new(String::new());
    let trust_device = RwSignal::new(true);
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let cooldown = RwSignal::new(0_u32);
    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));

    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let hint = mode.hint(&email);
    let verify_email = email.clone();
    let verify_config = config.clone();
    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let code_value = code.get();
        if busy.get() || !can_submit_code(&code_value) {
            return;
        }
        busy.set(true);
        info.set(String::new());
        let request = verification(mode, &verify_email, &code_value, trust_device.get());
        let config = verify_config.clone();
        leptos::task::spawn_local(async move {
            let outcome = match request {
                OtpVerification::Login(req) => {
                    crate::net::api::verify_login_otp(&config, &req).await.map(OtpOutcome::SignedIn)
                }
                OtpVerification::Registration(req) => crate::net::api::verify_registration_otp(&config, &req)
                    .await
                    .map(|()| OtpOutcome::PhoneVerified),
            };
            match outcome {
                Ok(outcome) => on_verified.run(outcome),
                Err(e) => {
                    log::warn!("otp verification failed: {e}");
                    info.set(verify_failure_message(&e));
                }
            }
            busy.set(false);
        });
    };

    let on_resend = move |_| {
        if resend_blocked(busy.get(), cooldown.get()) {
            return;
        }
        busy.set(true);
        let email = email.clone();
        let config = config.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::resend_otp(&config, &email).await {
                Ok(()) => {
                    info.set(OTP_RESENT.to_owned());
                    cooldown.set(RESEND_COOLDOWN_SECS);
                    run_cooldown(cooldown, alive);
                }
                Err(e) => info.set(resend_failure_message(&e)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="dialog-backdrop">
            <form class="dialog dialog--otp" on:submit=on_verify>
                <h2>{mode.title()}</h2>
                <p class="dialog__hint">{hint}</p>
                <input
                    class="input input--code"
                    type="text"
                    inputmode="numeric"
                    autocomplete="one-time-code"
                    placeholder="123456"
                    prop:value=move || code.get()
                    on:input=move |ev| code.set(sanitize_code(&event_target_value(&ev)))
                />
                <Show when=move || mode.offers_trust_device()>
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || trust_device.get()
                            on:change=move |ev| trust_device.set(event_target_checked(&ev))
                        />
                        "Trust this device for 30 days"
                    </label>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="dialog__message">{move || info.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button
                        class="btn"
                        type="button"
                        disabled={move || resend_blocked(busy.get(), cooldown.get())}
                        on:click=on_resend
                    >
                        {move || {
                            let left = cooldown.get();
                            if left == 0 { "Resend code".to_owned() } else { format!("Resend in {left}s") }
                        }}
                    </button>
                    <button class="btn" type="button" disabled={move || busy.get()} on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled={move || busy.get() || !can_submit_code(&code.get())}
                    >
                        {move || if busy.get() { "Verifying..." } else { "Verify" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Count `cooldown` down to zero, once per second, while the dialog lives.
fn run_cooldown(cooldown: RwSignal<u32>, alive: std::sync::Arc<std::sync::atomic::AtomicBool>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        while cooldown.get_untracked() > 0 {
            gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                break;
            }
            cooldown.update(|c| *c = c.saturating_sub(1));
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cooldown, alive);
    }
}
