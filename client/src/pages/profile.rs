//! Read-only landlord profile.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::toast_host::{show_toast, use_toasts};
use crate::config::ApiConfig;
use crate::net::types::{Profile, dash_or_text};
use crate::state::auth::AuthState;
use crate::state::toast::{PROFILE_TOAST_MS, ToastKind};

/// `(section, [(label, value)])` rows for rendering; blanks become a dash.
#[must_use]
pub fn profile_sections(p: &Profile) -> Vec<(&'static str, Vec<(&'static str, String)>)> {
    let v = |field: &Option<String>| dash_or_text(field.as_deref());
    vec![
        ("About", vec![("Bio", v(&p.bio)), ("Date of birth", v(&p.date_of_birth))]),
        (
            "Contact & address",
            vec![
                ("Support email", v(&p.support_email)),
                ("Support phone", v(&p.support_phone)),
                ("Address", v(&p.address)),
                ("City", v(&p.city)),
                ("County", v(&p.county)),
                ("Postal code", v(&p.postal_code)),
            ],
        ),
        ("Identification", vec![("National ID", v(&p.national_id)), ("KRA PIN", v(&p.kra_pin))]),
        (
            "M-Pesa",
            vec![
                ("Paybill", v(&p.mpesa_paybill)),
                ("Till", v(&p.mpesa_till)),
                ("Account name", v(&p.mpesa_account_name)),
            ],
        ),
        (
            "Bank",
            vec![
                ("Bank", v(&p.bank_name)),
                ("Branch", v(&p.bank_branch)),
                ("Account name", v(&p.account_name)),
                ("Account number", v(&p.account_number)),
            ],
        ),
    ]
}

/// Up to two initials for the avatar fallback.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace().filter_map(|w| w.chars().next()).take(2).flat_map(char::to_uppercase).collect()
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = use_toasts();
    let profile = RwSignal::new(None::<Profile>);
    let loading = RwSignal::new(true);

    Effect::new(move || {
        let Some(token) = auth.get_untracked().token else {
            loading.set(false);
            return;
        };
        let config = config.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_profile(&config, &token).await {
                Ok(p) => profile.set(Some(p)),
                Err(e) => {
                    log::warn!("profile load failed: {e}");
                    show_toast(toasts, ToastKind::Error, "Failed to load profile.", PROFILE_TOAST_MS);
                }
            }
            loading.set(false);
        });
    });

    let display_name = move || {
        profile
            .get()
            .and_then(|p| p.display_name)
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| auth.get().greeting_name())
    };

    view! {
        <section class="card profile">
            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading profile..."</p> }>
                <div class="profile__head">
                    {move || match profile.get().and_then(|p| p.profile_picture) {
                        Some(src) => view! { <img class="profile__avatar" src=src alt="Profile picture" /> }.into_any(),
                        None => view! { <span class="profile__avatar profile__avatar--initials">{initials(&display_name())}</span> }.into_any(),
                    }}
                    <h2 class="profile__name">{display_name}</h2>
                </div>
                {move || {
                    profile_sections(&profile.get().unwrap_or_default())
                        .into_iter()
                        .map(|(section, rows)| {
                            view! {
                                <div class="profile__section">
                                    <h3>{section}</h3>
                                    {rows
                                        .into_iter()
                                        .map(|(label, value)| {
                                            view! {
                                                <div class="profile__row">
                                                    <span class="profile__label">{label}</span>
                                                    <span class="profile__value">{value}</span>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </Show>
        </section>
    }
}
