//! Landing-page feature cards.

use leptos::prelude::*;

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static FEATURES: [Feature; 4] = [
    Feature {
        icon: "🏘️",
        title: "Tenant & Unit Management",
        description: "Assign tenants to units, manage lease info, and handle vacate or transfer notices with ease.",
    },
    Feature {
        icon: "💰",
        title: "Rent & Billing",
        description: "Track rent payments, manage utility bills, and send tenants monthly summaries via SMS.",
    },
    Feature {
        icon: "📈",
        title: "Reporting & Analytics",
        description: "View real-time income reports, track expenses, and export summaries for KRA tax filing.",
    },
    Feature {
        icon: "📱",
        title: "Accessibility & Notifications",
        description: "Access the system on mobile and notify tenants automatically via SMS or email.",
    },
];

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section class="features" id="features">
            <h2 class="section-title">"Why PayNest"</h2>
            <div class="features__grid">
                {FEATURES
                    .iter()
                    .map(|f| {
                        view! {
                            <article class="feature-card">
                                <span class="feature-card__icon" aria-hidden="true">{f.icon}</span>
                                <h3 class="feature-card__title">{f.title}</h3>
                                <p class="feature-card__body">{f.description}</p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
