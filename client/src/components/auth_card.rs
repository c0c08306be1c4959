//! Centered card shared by the sign-in, sign-up, and password pages.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn AuthCard(title: &'static str, subtitle: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <A href="/" attr:class="auth-card__brand">"PayNest"</A>
                <h1 class="auth-card__title">{title}</h1>
                <p class="auth-card__subtitle">{subtitle}</p>
                {children()}
            </div>
        </div>
    }
}
