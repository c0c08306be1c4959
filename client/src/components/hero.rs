//! Rotating hero banner on the landing page.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Time each slide stays up.
pub const SLIDE_INTERVAL_MS: u32 = 8000;

pub struct Slide {
    pub title: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub static SLIDES: [Slide; 3] = [
    Slide {
        title: "Manage Properties Like a Pro",
        question: "Tired of scattered records and manual rent tracking?",
        answer: "PayNest provides an all-in-one platform to automate tenant management and rent collection.",
    },
    Slide {
        title: "Hassle-Free Rent Payments",
        question: "Spending too much time following up on rent-payment progress?",
        answer: "PayNest instantly records tenant payments and updates transactions in real time, so follow-ups \
                 and decisions get easier.",
    },
    Slide {
        title: "Unlock the Full Potential of Your Properties",
        question: "Managing multiple properties but lack clear insights?",
        answer: "Real-time reports on earnings, expenses, and occupancy make it simple to track profits, reduce \
                 costs, and handle taxes.",
    },
];

/// Index of the slide after `current`, wrapping around.
#[must_use]
pub fn next_slide(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

#[component]
pub fn Hero() -> impl IntoView {
    let index = RwSignal::new(0_usize);
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(SLIDE_INTERVAL_MS))).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                index.update(|i| *i = next_slide(*i, SLIDES.len()));
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let slide = move || &SLIDES[index.get() % SLIDES.len()];

    view! {
        <section class="hero">
            <div class="hero__copy">
                <h1 class="hero__title">{move || slide().title}</h1>
                <p class="hero__question">{move || slide().question}</p>
                <p class="hero__answer">{move || slide().answer}</p>
                <button class="btn btn--primary hero__cta" on:click=move |_| navigate("/login", Default::default())>
                    "Get Started"
                </button>
            </div>
            <div class="hero__dots">
                {(0..SLIDES.len())
                    .map(|i| {
                        view! {
                            <button
                                class="hero__dot"
                                class:hero__dot--active=move || index.get() == i
                                title=SLIDES[i].title
                                on:click=move |_| index.set(i)
                            ></button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
