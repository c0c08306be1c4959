//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::config::ApiConfig;
use crate::pages::{
    dashboard::DashboardPage, forgot_password::ForgotPasswordPage, landing::LandingPage, login::LoginPage,
    register::RegisterPage, reset_password::ResetPasswordPage,
};
use crate::state::{auth::AuthState, toast::ToastState};
use crate::util::auth::restore_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the backend config, auth session, and toast queue, restores the
/// stored session once hydrated, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(ApiConfig::from_build_env());
    provide_context(auth);
    provide_context(toasts);

    Effect::new(move || restore_session(auth));

    view! {
        <Stylesheet id="leptos" href="/pkg/paynest.css"/>
        <Title text="PayNest"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route path=(StaticSegment("reset-password"), ParamSegment("token")) view=ResetPasswordPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
