//! Landing-page navigation bar.

use leptos::prelude::*;
use leptos_router::components::A;

pub const SLOGAN: &str = "Smart Homes, Smarter Payments";

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <A href="/" attr:class="nav-bar__brand">
                <span class="nav-bar__logo">"PayNest"</span>
                <span class="nav-bar__slogan">{SLOGAN}</span>
            </A>
            <span class="nav-bar__spacer"></span>
            <a class="nav-bar__link" href="#features">"Features"</a>
            <a class="nav-bar__link" href="#services">"Services"</a>
            <a class="nav-bar__link" href="#contact">"Contact"</a>
            <A href="/login" attr:class="btn nav-bar__login">"Login"</A>
            <A href="/register" attr:class="btn btn--primary nav-bar__register">"Register"</A>
        </nav>
    }
}
