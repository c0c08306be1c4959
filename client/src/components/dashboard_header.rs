//! Fixed header above the dashboard content.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::dashboard::{ActivePage, DashboardState};

#[component]
pub fn DashboardHeader(
    auth: RwSignal<AuthState>,
    dashboard: RwSignal<DashboardState>,
    on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="dashboard-header" style=move || dashboard.get().header_style()>
            <div class="dashboard-header__greeting">
                <span class="dashboard-header__hello">"Welcome back,"</span>
                <strong class="dashboard-header__name">{move || auth.get().greeting_name()}</strong>
            </div>
            <span class="dashboard-header__page">{move || dashboard.get().active.label()}</span>
            <span class="dashboard-header__spacer"></span>
            <button
                class="btn dashboard-header__settings"
                title="Settings"
                on:click=move |_| dashboard.update(|d| d.active = ActivePage::Settings)
            >
                "⚙"
            </button>
            <button class="btn dashboard-header__logout" title="Logout" on:click=move |_| on_logout.run(())>
                "Logout"
            </button>
        </header>
    }
}
