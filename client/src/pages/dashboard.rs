//! Dashboard shell: side menu, header, and the locally switched sub-page.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Sub-pages are selected through
//! `DashboardState::active` rather than the URL, so the whole shell stays on
//! `/dashboard`. The shell redirects to `/login` whenever no token is stored.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::dashboard_header::DashboardHeader;
use crate::components::footer::DashboardFooter;
use crate::components::side_menu::SideMenu;
use crate::pages::history_logs::HistoryLogsPage;
use crate::pages::placeholder::PlaceholderPage;
use crate::pages::profile::ProfilePage;
use crate::state::auth::AuthState;
use crate::state::dashboard::{ActivePage, DashboardState};
use crate::util::auth::{install_unauth_redirect, sign_out};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let dashboard = RwSignal::new(DashboardState::default());
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate);

    let on_logout = Callback::new(move |()| sign_out(auth));
    // Collapsing the sidebar must not remount the active sub-page.
    let active = Memo::new(move |_| dashboard.get().active);

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=move || view! { <div class="dashboard-loading">"Loading..."</div> }
        >
            <div class="dashboard">
                <SideMenu dashboard=dashboard />
                <DashboardHeader auth=auth dashboard=dashboard on_logout=on_logout />
                <main class="dashboard__content" style=move || dashboard.get().content_style()>
                    {move || match active.get() {
                        ActivePage::Profile => view! { <ProfilePage /> }.into_any(),
                        ActivePage::HistoryLogs => view! { <HistoryLogsPage /> }.into_any(),
                        page => view! { <PlaceholderPage page=page /> }.into_any(),
                    }}
                    <DashboardFooter />
                </main>
            </div>
        </Show>
    }
}
