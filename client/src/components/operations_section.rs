//! Landing-page grid of supported operations.

use leptos::prelude::*;

/// `(icon, title, description)`.
pub static OPERATIONS: [(&str, &str, &str); 8] = [
    ("🏢", "Property & Unit Management", "Manage properties and rental units."),
    ("🧑‍🤝‍🧑", "Tenant Onboarding & Management", "Onboard and manage tenants."),
    ("🧾", "Billing & Rent Collection", "Automate billing and track payments."),
    ("💸", "Landlord Expense Tracking", "Record and monitor expenses."),
    ("📑", "Reports & Tax Filing Support", "Generate reports and tax statements."),
    ("🔔", "Notifications & Alerts", "Send rent reminders and alerts."),
    ("🗂️", "Document & Media Storage", "Store tenancy documents securely."),
    ("🔐", "Secure Access & Role Management", "Control access with user roles."),
];

#[component]
pub fn OperationsSection() -> impl IntoView {
    view! {
        <section class="operations" id="services">
            <h2 class="section-title">"Everything a landlord runs"</h2>
            <div class="operations__grid">
                {OPERATIONS
                    .iter()
                    .map(|(icon, title, desc)| {
                        view! {
                            <div class="operation-tile">
                                <span class="operation-tile__icon" aria-hidden="true">{*icon}</span>
                                <h4 class="operation-tile__title">{*title}</h4>
                                <p class="operation-tile__body">{*desc}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
