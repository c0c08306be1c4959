//! Static dashboard sub-pages that have no backend wiring yet.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::dashboard::ActivePage;

fn blurb(page: ActivePage) -> &'static str {
    match page {
        ActivePage::Home => "Your portfolio at a glance.",
        ActivePage::Properties => "Apartments, blocks, and the units inside them.",
        ActivePage::Tenants => "Leases, contacts, and move-in history.",
        ActivePage::Billing => "Monthly rent and utility invoices.",
        ActivePage::Payments => "M-Pesa and bank receipts as they arrive.",
        ActivePage::Expenses => "Repairs, fees, and other landlord costs.",
        ActivePage::Reports => "Income statements and KRA filing summaries.",
        ActivePage::Notifications => "Reminders sent to tenants by SMS and email.",
        ActivePage::Settings => "Account and notification preferences.",
        ActivePage::HistoryLogs | ActivePage::Profile => "",
    }
}

#[component]
pub fn PlaceholderPage(page: ActivePage) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let heading = move || match page {
        ActivePage::Home => format!("Hello, {}", auth.get().greeting_name()),
        other => other.label().to_owned(),
    };

    view! {
        <section class="card placeholder">
            <h2 class="placeholder__title">{heading}</h2>
            <p class="placeholder__body">{blurb(page)}</p>
            <p class="placeholder__note">"This section is coming soon."</p>
        </section>
    }
}
