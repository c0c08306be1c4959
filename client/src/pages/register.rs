//! Landlord sign-up page.
//!
//! A created account still needs its phone confirmed: the page opens
//! `OtpDialog` in registration mode and only heads to `/login` once the code
//! is verified or the dialog is dismissed.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::auth_card::AuthCard;
use crate::components::otp_dialog::{OtpDialog, OtpMode, OtpOutcome, PHONE_VERIFIED};
use crate::components::password_meter::PasswordMeter;
use crate::components::toast_host::{show_toast, use_toasts};
use crate::config::ApiConfig;
use crate::net::types::RegisterRequest;
use crate::state::toast::{DEFAULT_TOAST_MS, REGISTER_TOAST_MS, ToastKind};
use crate::util::phone;
use crate::util::timer::after_ms;

/// Delay between the phone-verified toast and `/login`.
pub const REGISTER_REDIRECT_MS: u32 = 2000;
pub const REGISTER_SUCCESS: &str = "Account created. We sent you a code via SMS. Please verify.";

/// Raw form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub terms: bool,
}

/// Client-side checks, in the order the form reports them.
///
/// # Errors
///
/// Returns the message for the first failed check.
pub fn validate_register(form: &RegisterForm) -> Result<RegisterRequest, &'static str> {
    if !form.terms {
        return Err("You must agree to the Terms & Privacy Policy.");
    }
    if !phone::is_valid(&form.phone) {
        return Err("Enter a valid phone number in format 2547XXXXXXXX");
    }
    Ok(RegisterRequest {
        full_name: form.full_name.clone(),
        email: form.email.clone(),
        phone: form.phone.clone(),
        password: form.password.clone(),
        confirm_password: form.confirm_password.clone(),
        terms: form.terms,
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterForm::default());
    let busy = RwSignal::new(false);
    let go_login = RwSignal::new(false);
    let verify_email = RwSignal::new(None::<String>);
    let password = Signal::derive(move || form.get().password);

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
        let req = match validate_register(&form.get()) {
            Ok(req) => req,
            Err(msg) => {
                show_toast(toasts, ToastKind::Error, msg, DEFAULT_TOAST_MS);
                return;
            }
        };
        busy.set(true);
        let config = config.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&config, &req).await {
                Ok(()) => {
                    log::info!("account created for {}", req.email);
                    show_toast(toasts, ToastKind::Success, REGISTER_SUCCESS, REGISTER_TOAST_MS);
                    verify_email.set(Some(req.email));
                }
                Err(e) => {
                    log::warn!("registration failed: {e}");
                    show_toast(toasts, ToastKind::Error, e.user_message("Registration failed"), DEFAULT_TOAST_MS);
                }
            }
            busy.set(false);
        });
    };

    let on_phone_verified = Callback::new(move |outcome: OtpOutcome| {
        verify_email.set(None);
        if outcome != OtpOutcome::PhoneVerified {
            log::warn!("registration OTP answered with a session");
        }
        show_toast(toasts, ToastKind::Success, PHONE_VERIFIED, REGISTER_TOAST_MS);
        after_ms(REGISTER_REDIRECT_MS, move || go_login.set(true));
    });
    let on_otp_close = Callback::new(move |()| {
        verify_email.set(None);
        go_login.set(true);
    });

    view! {
        <AuthCard title="Create your account" subtitle="Start managing rentals with PayNest">
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="input"
                    type="text"
                    placeholder="Full name"
                    prop:value=move || form.get().full_name
                    on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                />
                <input
                    class="input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || form.get().email
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                <input
                    class="input"
                    type="tel"
                    placeholder="2547XXXXXXXX"
                    prop:value=move || form.get().phone
                    on:input=move |ev| form.update(|f| f.phone = phone::normalize(&event_target_value(&ev)))
                />
                <p class="auth-form__help">"Format: 2547XXXXXXXX"</p>
                <input
                    class="input"
                    type="password"
                    placeholder="Password"
                    autocomplete="new-password"
                    prop:value=move || form.get().password
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
                <PasswordMeter password=password />
                <input
                    class="input"
                    type="password"
                    placeholder="Confirm password"
                    autocomplete="new-password"
                    prop:value=move || form.get().confirm_password
                    on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                />
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || form.get().terms
                        on:change=move |ev| form.update(|f| f.terms = event_target_checked(&ev))
                    />
                    "I agree to the Terms & Privacy Policy"
                </label>
                <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Register" }}
                </button>
            </form>
            <p class="auth-card__footer">
                "Already have an account? "
                <A href="/login">"Login"</A>
            </p>
            {move || {
                verify_email
                    .get()
                    .map(|email| {
                        view! {
                            <OtpDialog
                                email=email
                                mode=OtpMode::Registration
                                on_verified=on_phone_verified
                                on_close=on_otp_close
                            />
                        }
                    })
            }}
        </AuthCard>
    }
}
