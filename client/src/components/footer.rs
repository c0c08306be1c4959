//! Site and dashboard footers.

use leptos::prelude::*;

use crate::components::nav_bar::SLOGAN;
use crate::util::format::{copyright, now_local};

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = now_local().year();

    view! {
        <footer class="site-footer">
            <div class="site-footer__cols">
                <div class="site-footer__col">
                    <span class="site-footer__brand">"PayNest"</span>
                    <p>{SLOGAN}"."</p>
                </div>
                <div class="site-footer__col">
                    <h4>"Quick Links"</h4>
                    <a href="/">"Home"</a>
                    <a href="#features">"Features"</a>
                    <a href="#services">"Services"</a>
                    <a href="#contact">"Contact"</a>
                </div>
                <div class="site-footer__col">
                    <h4>"Get in touch"</h4>
                    <a href="mailto:support@paynest.app">"support@paynest.app"</a>
                    <p>"Mon–Fri · 9:00–17:00"</p>
                </div>
            </div>
            <p class="site-footer__copy">{copyright(year)}</p>
        </footer>
    }
}

#[component]
pub fn DashboardFooter() -> impl IntoView {
    let year = now_local().year();

    view! { <footer class="dashboard-footer">{copyright(year)}</footer> }
}
