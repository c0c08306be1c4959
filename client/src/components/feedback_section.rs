//! Landing-page feedback and star-rating forms.
//!
//! DESIGN
//! ======
//! Feedback is sent exactly as typed; the backend decides what is valid.
//! Ratings are the one place with a client-side check: zero stars never
//! leaves the browser.

#[cfg(test)]
#[path = "feedback_section_test.rs"]
mod feedback_section_test;

use leptos::prelude::*;

use crate::components::toast_host::{show_toast, use_toasts};
use crate::net::error::ApiError;
use crate::net::types::{FeedbackRequest, RatingRequest};
use crate::state::toast::{FEEDBACK_TOAST_MS, ToastKind};

pub const MAX_STARS: u8 = 5;
pub const NO_RATING_MESSAGE: &str = "Please select a star rating.";

/// Build the rating payload, refusing an unset star count.
///
/// # Errors
///
/// Returns the warning to show when no star is selected.
pub fn rating_request(stars: u8, comment: &str) -> Result<RatingRequest, &'static str> {
    if stars == 0 {
        return Err(NO_RATING_MESSAGE);
    }
    let comment = if comment.is_empty() { None } else { Some(comment.to_owned()) };
    Ok(RatingRequest { rating_value: stars.min(MAX_STARS), comment })
}

/// Whether star `n` is lit for the current selection.
#[must_use]
pub fn star_lit(selected: u8, n: u8) -> bool {
    selected >= n
}

/// Toast for a finished feedback post.
#[must_use]
pub fn feedback_outcome(result: &Result<(), ApiError>) -> (ToastKind, String) {
    match result {
        Ok(()) => (ToastKind::Success, "Thanks! Your feedback was submitted.".to_owned()),
        Err(e) => (ToastKind::Error, e.error_field().unwrap_or("Failed to submit feedback.").to_owned()),
    }
}

/// Toast for a finished rating post.
#[must_use]
pub fn rating_outcome(result: &Result<(), ApiError>) -> (ToastKind, String) {
    match result {
        Ok(()) => (ToastKind::Success, "Thanks for rating!".to_owned()),
        Err(e) => (ToastKind::Error, e.error_field().unwrap_or("Failed to submit rating.").to_owned()),
    }
}

#[component]
pub fn FeedbackSection() -> impl IntoView {
    view! {
        <section class="feedback" id="contact">
            <h2 class="section-title">"Talk to us"</h2>
            <div class="feedback__grid">
                <FeedbackForm />
                <RatingForm />
            </div>
        </section>
    }
}

#[component]
fn FeedbackForm() -> impl IntoView {
    let toasts = use_toasts();
    let config = expect_context::<crate::config::ApiConfig>();
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        let req = FeedbackRequest { email: email.get(), subject: subject.get(), message: message.get() };
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::submit_feedback(&config, &req).await;
            if result.is_ok() {
                email.set(String::new());
                subject.set(String::new());
                message.set(String::new());
            }
            let (kind, text) = feedback_outcome(&result);
            show_toast(toasts, kind, text, FEEDBACK_TOAST_MS);
            busy.set(false);
        });
    };

    view! {
        <form class="card feedback-form" on:submit=on_submit>
            <h3>"Send feedback"</h3>
            <input
                class="input"
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                class="input"
                type="text"
                placeholder="Subject"
                prop:value=move || subject.get()
                on:input=move |ev| subject.set(event_target_value(&ev))
            />
            <textarea
                class="input input--area"
                rows="4"
                placeholder="Message"
                prop:value=move || message.get()
                on:input=move |ev| message.set(event_target_value(&ev))
            ></textarea>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Sending..." } else { "Send Feedback" }}
            </button>
        </form>
    }
}

#[component]
fn RatingForm() -> impl IntoView {
    let toasts = use_toasts();
    let config = expect_context::<crate::config::ApiConfig>();
    let stars = RwSignal::new(0_u8);
    let comment = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let req = match rating_request(stars.get(), &comment.get()) {
            Ok(req) => req,
            Err(warning) => {
                show_toast(toasts, ToastKind::Warning, warning, FEEDBACK_TOAST_MS);
                return;
            }
        };
        busy.set(true);
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::submit_rating(&config, &req).await;
            if result.is_ok() {
                stars.set(0);
                comment.set(String::new());
            }
            let (kind, text) = rating_outcome(&result);
            show_toast(toasts, kind, text, FEEDBACK_TOAST_MS);
            busy.set(false);
        });
    };

    view! {
        <form class="card rating-form" on:submit=on_submit>
            <h3>"Rate PayNest"</h3>
            <div class="rating-form__stars" role="radiogroup">
                {(1..=MAX_STARS)
                    .map(|n| {
                        view! {
                            <button
                                type="button"
                                class="star"
                                class:star--on={move || star_lit(stars.get(), n)}
                                title=format!("{n} star")
                                on:click=move |_| stars.set(n)
                            >
                                "★"
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <textarea
                class="input input--area"
                rows="3"
                placeholder="Optional comment"
                prop:value=move || comment.get()
                on:input=move |ev| comment.set(event_target_value(&ev))
            ></textarea>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Submitting..." } else { "Submit Rating" }}
            </button>
        </form>
    }
}
