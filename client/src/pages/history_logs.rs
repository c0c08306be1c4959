//! History/audit log viewer for tenant transfers and vacates.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any change to `HistoryFilter` (or the refresh button) starts one refresh:
//! the previous request set is aborted through `InFlight`, four `GET`s go out
//! under a fresh `AbortController`, and only the newest generation may write
//! into `HistoryState`.
//!
//! TRADE-OFFS
//! ==========
//! The page re-fetches everything on every change, including the apartment
//! list, rather than caching per filter. Each set is small and the backend
//! applies the filters, so the simpler model wins.

#[cfg(test)]
#[path = "history_logs_test.rs"]
mod history_logs_test;

use leptos::prelude::*;

use crate::components::toast_host::{show_toast, use_toasts};
use crate::config::ApiConfig;
use crate::net::types::{Apartment, EventKind, TimelineEvent, dash_or, dash_or_text};
use crate::state::auth::AuthState;
use crate::state::history::{
    EventFilter, HistoryFilter, HistoryState, MONTH_CHOICES, MonthOption, parse_apartment, recent_months,
    type_breakdown,
};
use crate::state::toast::{DEFAULT_TOAST_MS, ToastKind};
use crate::util::format::{export_filename, format_optional_timestamp, format_timestamp, now_local};

pub const EMPTY_STATE: &str = "No events for the selected filters.";
const LOAD_FALLBACK: &str = "Failed to load history logs.";
const EXPORT_FALLBACK: &str = "Failed to export logs.";

/// `<select>` value for an apartment choice.
#[must_use]
pub fn apartment_value(id: Option<i64>) -> String {
    id.map_or_else(|| "All".to_owned(), |id| id.to_string())
}

/// Option label: name, plus location when known.
#[must_use]
pub fn apartment_label(apartment: &Apartment) -> String {
    let name = if apartment.apartment_name.trim().is_empty() {
        format!("Apartment {}", apartment.apartment_id)
    } else {
        apartment.apartment_name.clone()
    };
    match apartment.location.as_deref().map(str::trim) {
        Some(loc) if !loc.is_empty() => format!("{name} · {loc}"),
        _ => name,
    }
}

#[component]
pub fn HistoryLogsPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = use_toasts();

    let months: Vec<MonthOption> = recent_months(now_local().date(), MONTH_CHOICES);
    let first_month = months.first().map(|m| m.value.clone()).unwrap_or_default();
    let filter = RwSignal::new(HistoryFilter::for_month(first_month));
    let state = RwSignal::new(HistoryState::default());
    let refresh_seq = RwSignal::new(0_u64);

    #[cfg(feature = "hydrate")]
    {
        let inflight = StoredValue::new_local(crate::net::logs::InFlight::<web_sys::AbortController>::default());
        let refresh_config = config.clone();
        Effect::new(move || {
            let current = filter.get();
            refresh_seq.track();
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            start_refresh(&refresh_config, token, current, state, toasts, inflight);
        });
        on_cleanup(move || inflight.update_value(crate::net::logs::InFlight::cancel));
    }

    let on_export = move |_| {
        if state.get().exporting {
            return;
        }
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        state.update(|s| s.exporting = true);
        let current = filter.get_untracked();
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let fallback = export_filename(now_local());
            match crate::net::logs::fetch_export(&config, &token, &current, &fallback).await {
                Ok(file) => {
                    if let Err(e) = crate::util::download::save_bytes(&file.filename, "text/csv", &file.bytes) {
                        log::warn!("export download failed: {e}");
                        show_toast(toasts, ToastKind::Error, EXPORT_FALLBACK, DEFAULT_TOAST_MS);
                    }
                }
                Err(e) => {
                    log::warn!("export failed: {e}");
                    show_toast(toasts, ToastKind::Error, e.user_message(EXPORT_FALLBACK), DEFAULT_TOAST_MS);
                }
            }
            state.update(|s| s.exporting = false);
        });
    };

    view! {
        <section class="history">
            <div class="card history__filters">
                <select
                    class="input"
                    prop:value=move || apartment_value(filter.get().apartment_id)
                    on:change=move |ev| {
                        let id = parse_apartment(&event_target_value(&ev));
                        filter.update(|f| f.apartment_id = id);
                    }
                >
                    <option value="All">"All apartments"</option>
                    {move || {
                        state
                            .get()
                            .apartments
                            .into_iter()
                            .map(|a| view! { <option value=a.apartment_id.to_string()>{apartment_label(&a)}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
                <select
                    class="input"
                    prop:value=move || filter.get().month
                    on:change=move |ev| {
                        let month = event_target_value(&ev);
                        filter.update(|f| f.month = month);
                    }
                >
                    {months
                        .into_iter()
                        .map(|m| view! { <option value=m.value>{m.label}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <select
                    class="input"
                    prop:value=move || filter.get().event_type.value()
                    on:change=move |ev| {
                        let kind = EventFilter::from_value(&event_target_value(&ev));
                        filter.update(|f| f.event_type = kind);
                    }
                >
                    {EventFilter::ALL
                        .into_iter()
                        .map(|f| view! { <option value=f.value()>{f.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <input
                    class="input history__search"
                    type="search"
                    placeholder="Search reason or notes"
                    prop:value=move || filter.get().search
                    on:change=move |ev| {
                        let q = event_target_value(&ev);
                        filter.update(|f| f.search = q);
                    }
                />
                <button class="btn" title="Refresh" on:click=move |_| refresh_seq.update(|n| *n += 1)>
                    {move || if state.get().loading { "Loading..." } else { "Refresh" }}
                </button>
                <button class="btn btn--primary" disabled={move || state.get().exporting} on:click=on_export>
                    {move || if state.get().exporting { "Exporting..." } else { "Export CSV" }}
                </button>
            </div>

            <div class="history__kpis">
                <Kpi label="Transfers" value=Signal::derive(move || state.get().stats.transfers.to_string()) />
                <Kpi label="Vacates" value=Signal::derive(move || state.get().stats.vacates.to_string()) />
                <Kpi
                    label="Units impacted"
                    value=Signal::derive(move || state.get().stats.units_impacted.to_string())
                />
                <Kpi label="Top reason" value=Signal::derive(move || state.get().top_reason().to_owned()) />
            </div>

            <div class="history__grid">
                <div class="card history__breakdown">
                    <h3>"Type breakdown"</h3>
                    {move || {
                        let shares = type_breakdown(&state.get().stats);
                        if shares.is_empty() {
                            return view! { <p class="history__empty">"No data"</p> }.into_any();
                        }
                        shares
                            .into_iter()
                            .map(|share| {
                                view! {
                                    <div class=format!("breakdown-row breakdown-row--{}", share.kind.label().to_lowercase())>
                                        <span class="breakdown-row__label">{share.kind.label()}</span>
                                        <div class="breakdown-row__track">
                                            <div class="breakdown-row__fill" style=format!("width: {}%;", share.percent)></div>
                                        </div>
                                        <span class="breakdown-row__value">
                                            {format!("{} ({}%)", share.count, share.percent)}
                                        </span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </div>

                <div class="card history__timeline">
                    <h3>"Timeline"</h3>
                    <Show
                        when=move || !state.get().timeline.is_empty()
                        fallback=move || view! { <p class="history__empty">{EMPTY_STATE}</p> }
                    >
                        <ul class="timeline">
                            {move || state.get().timeline.into_iter().map(timeline_item).collect::<Vec<_>>()}
                        </ul>
                    </Show>
                </div>
            </div>

            <div class="history__grid">
                <div class="card">
                    <h3>"Recent transfers"</h3>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Date"</th>
                                <th>"Tenant"</th>
                                <th>"From"</th>
                                <th>"To"</th>
                                <th>"Reason"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                state
                                    .get()
                                    .recent_transfers()
                                    .into_iter()
                                    .map(|t| {
                                        view! {
                                            <tr>
                                                <td>{format_optional_timestamp(t.transfer_date.as_deref())}</td>
                                                <td>{dash_or(t.tenant_id)}</td>
                                                <td>{dash_or(t.old_unit_id)}</td>
                                                <td>{dash_or(t.new_unit_id)}</td>
                                                <td>{dash_or_text(t.reason.as_deref())}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </div>
                <div class="card">
                    <h3>"Recent vacates"</h3>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Date"</th>
                                <th>"Tenant"</th>
                                <th>"Unit"</th>
                                <th>"Reason"</th>
                                <th>"Notes"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                state
                                    .get()
                                    .recent_vacates()
                                    .into_iter()
                                    .map(|v| {
                                        view! {
                                            <tr>
                                                <td>{format_optional_timestamp(v.vacate_date.as_deref())}</td>
                                                <td>{dash_or(v.tenant_id)}</td>
                                                <td>{dash_or(v.unit_id)}</td>
                                                <td>{dash_or_text(v.reason.as_deref())}</td>
                                                <td>{dash_or_text(v.notes.as_deref())}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Kpi(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="card kpi">
            <span class="kpi__label">{label}</span>
            <strong class="kpi__value">{move || value.get()}</strong>
        </div>
    }
}

fn timeline_item(event: TimelineEvent) -> impl IntoView {
    let modifier = match event.kind {
        EventKind::Transfer => "timeline__item timeline__item--transfer",
        EventKind::Vacate => "timeline__item timeline__item--vacate",
    };
    view! {
        <li class=modifier>
            <div class="timeline__head">
                <strong>{event.kind.label()}</strong>
                {event.unit_move().map(|m| view! { <span class="chip">{m}</span> })}
            </div>
            <p class="timeline__detail">{event.detail_text()}</p>
            <span class="timeline__time">{format_timestamp(&event.timestamp)}</span>
        </li>
    }
}

/// Abort the previous set and issue a fresh one for `filter`.
#[cfg(feature = "hydrate")]
fn start_refresh(
    config: &ApiConfig,
    token: String,
    filter: HistoryFilter,
    state: RwSignal<HistoryState>,
    toasts: RwSignal<crate::state::toast::ToastState>,
    inflight: StoredValue<crate::net::logs::InFlight<web_sys::AbortController>, LocalStorage>,
) {
    let controller = match web_sys::AbortController::new() {
        Ok(controller) => controller,
        Err(e) => {
            log::error!("AbortController unavailable: {e:?}");
            return;
        }
    };
    let signal = controller.signal();
    let mut generation = 0;
    inflight.update_value(|f| generation = f.begin(controller));
    state.update(|s| s.loading = true);
    log::debug!("history refresh #{generation} for {filter:?}");

    let config = config.clone();
    leptos::task::spawn_local(async move {
        let results = crate::net::logs::fetch_refresh(&config, &token, &filter, &signal).await;
        let mut current = false;
        inflight.update_value(|f| current = f.finish(generation));
        if !current {
            log::debug!("history refresh #{generation} superseded");
            return;
        }
        let mut failed = Vec::new();
        state.update(|s| failed = s.apply(results));
        for set in &failed {
            log::warn!("history {:?} failed: {}", set.endpoint, set.error);
        }
        if let Some(first) = failed.first() {
            show_toast(toasts, ToastKind::Error, first.error.user_message(LOAD_FALLBACK), DEFAULT_TOAST_MS);
        }
    });
}
