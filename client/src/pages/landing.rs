//! Public landing page.

use leptos::prelude::*;

use crate::components::features_section::FeaturesSection;
use crate::components::feedback_section::FeedbackSection;
use crate::components::footer::SiteFooter;
use crate::components::hero::Hero;
use crate::components::nav_bar::NavBar;
use crate::components::operations_section::OperationsSection;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <NavBar />
            <Hero />
            <FeaturesSection />
            <OperationsSection />
            <FeedbackSection />
            <SiteFooter />
        </div>
    }
}
