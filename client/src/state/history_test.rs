use time::macros::date;

use super::*;
use crate::net::error::ApiError;

// =============================================================
// Filters
// =============================================================

#[test]
fn event_filter_params() {
    assert_eq!(EventFilter::All.as_param(), None);
    assert_eq!(EventFilter::Transfer.as_param(), Some("transfer"));
    assert_eq!(EventFilter::Vacate.as_param(), Some("vacate"));
}

#[test]
fn event_filter_select_values_round_trip() {
    for f in EventFilter::ALL {
        assert_eq!(EventFilter::from_value(f.value()), f);
    }
    assert_eq!(EventFilter::from_value("garbage"), EventFilter::All);
}

#[test]
fn apartment_select_value_parses_id_or_all() {
    assert_eq!(parse_apartment("12"), Some(12));
    assert_eq!(parse_apartment("All"), None);
    assert_eq!(parse_apartment(""), None);
}

// =============================================================
// Months
// =============================================================

#[test]
fn recent_months_newest_first_with_labels() {
    let months = recent_months(date!(2025 - 07 - 19), MONTH_CHOICES);
    assert_eq!(months.len(), 12);
    assert_eq!(months[0], MonthOption { value: "2025-07".to_owned(), label: "July 2025".to_owned() });
    assert_eq!(months[1].value, "2025-06");
    assert_eq!(months[11].value, "2024-08");
}

#[test]
fn recent_months_cross_year_boundary() {
    let months = recent_months(date!(2025 - 01 - 31), 3);
    let values: Vec<&str> = months.iter().map(|m| m.value.as_str()).collect();
    assert_eq!(values, vec!["2025-01", "2024-12", "2024-11"]);
    assert_eq!(months[1].label, "December 2024");
}

// =============================================================
// Breakdown
// =============================================================

#[test]
fn breakdown_rounds_percentages() {
    let stats = LogStats { transfers: 1, vacates: 2, ..LogStats::default() };
    let shares = type_breakdown(&stats);
    assert_eq!(shares.len(), 2);
    assert_eq!(shares[0].percent, 33);
    assert_eq!(shares[1].percent, 67);
}

#[test]
fn breakdown_skips_empty_kinds() {
    let stats = LogStats { transfers: 4, ..LogStats::default() };
    let shares = type_breakdown(&stats);
    assert_eq!(shares, vec![TypeShare { kind: EventKind::Transfer, count: 4, percent: 100 }]);
    assert!(type_breakdown(&LogStats::default()).is_empty());
}

// =============================================================
// Applying refreshes
// =============================================================

fn event(id: &str, ts: &str) -> TimelineEvent {
    TimelineEvent {
        id: id.to_owned(),
        kind: EventKind::Vacate,
        timestamp: ts.to_owned(),
        detail: None,
        tenant_id: None,
        old_unit_id: None,
        new_unit_id: None,
        unit_id: None,
        apartment_id: None,
        notes: None,
    }
}

fn apartment(id: i64) -> Apartment {
    Apartment { apartment_id: id, apartment_name: format!("Block {id}"), location: None }
}

fn ok_results() -> RefreshResults {
    RefreshResults {
        apartments: Ok(vec![apartment(1)]),
        stats: Ok(LogStats { transfers: 2, vacates: 1, units_impacted: 3, top_reason: None }),
        timeline: Ok(vec![event("V-1", "2025-07-01 10:00:00"), event("V-2", "2025-07-03 09:00:00")]),
        recent: Ok(RecentLogs::default()),
    }
}

#[test]
fn apply_replaces_every_set_and_sorts_timeline() {
    let mut state = HistoryState { loading: true, ..HistoryState::default() };
    let failed = state.apply(ok_results());
    assert!(failed.is_empty());
    assert!(!state.loading);
    assert_eq!(state.apartments.len(), 1);
    assert_eq!(state.stats.units_impacted, 3);
    assert_eq!(state.timeline[0].id, "V-2");
}

#[test]
fn failed_set_keeps_previous_value() {
    let mut state = HistoryState::default();
    state.apply(ok_results());

    let next = RefreshResults {
        apartments: Ok(vec![apartment(1), apartment(2)]),
        stats: Err(ApiError::from_response(500, r#"{"message":"boom"}"#)),
        timeline: Ok(Vec::new()),
        recent: Err(ApiError::Network("offline".to_owned())),
    };
    let failed = state.apply(next);

    let endpoints: Vec<LogEndpoint> = failed.iter().map(|f| f.endpoint).collect();
    assert_eq!(endpoints, vec![LogEndpoint::Stats, LogEndpoint::Recent]);
    assert_eq!(state.apartments.len(), 2);
    assert_eq!(state.stats.transfers, 2);
    assert!(state.timeline.is_empty());
}

#[test]
fn aborted_sets_are_silent() {
    let mut state = HistoryState::default();
    let results = RefreshResults {
        apartments: Err(ApiError::Aborted),
        stats: Err(ApiError::Aborted),
        timeline: Err(ApiError::Aborted),
        recent: Err(ApiError::Aborted),
    };
    assert!(state.apply(results).is_empty());
}

#[test]
fn recent_tables_keep_five_newest() {
    let transfers = (1..=7)
        .map(|i| TransferLog {
            log_id: i,
            tenant_id: None,
            old_unit_id: None,
            new_unit_id: Some(i),
            transfer_date: Some(format!("2025-07-0{i} 12:00:00")),
            reason: None,
        })
        .collect();
    let state = HistoryState { recent: RecentLogs { transfers, vacates: Vec::new() }, ..HistoryState::default() };
    let rows = state.recent_transfers();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].log_id, 7);
    assert_eq!(rows[4].log_id, 3);
    assert!(state.recent_vacates().is_empty());
}

#[test]
fn top_reason_defaults_to_dash() {
    let mut state = HistoryState::default();
    assert_eq!(state.top_reason(), "—");
    state.stats.top_reason = Some("Rent increase".to_owned());
    assert_eq!(state.top_reason(), "Rent increase");
}

#[test]
fn timeline_orders_by_parsed_time_across_formats() {
    let mut state = HistoryState::default();
    let results = RefreshResults {
        timeline: Ok(vec![
            event("older", "2025-07-02T09:00:00Z"),
            event("garbled", "sometime"),
            event("newer", "2025-07-03 18:00:00"),
        ]),
        ..ok_results()
    };
    assert!(state.apply(results).is_empty());
    let ids: Vec<&str> = state.timeline.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["newer", "older", "garbled"]);
}

#[test]
fn recent_vacates_put_undated_rows_last() {
    let vacate = |log_id: i64, date: Option<&str>| VacateLog {
        log_id,
        tenant_id: None,
        unit_id: None,
        apartment_id: None,
        vacate_date: date.map(str::to_owned),
        reason: None,
        notes: None,
    };
    let vacates = vec![
        vacate(1, None),
        vacate(2, Some("2025-06-24T17:19:22")),
        vacate(3, Some("2025-06-25 08:00:00.000")),
    ];
    let state = HistoryState { recent: RecentLogs { transfers: Vec::new(), vacates }, ..HistoryState::default() };
    let ids: Vec<i64> = state.recent_vacates().iter().map(|v| v.log_id).collect();
    assert_eq!(ids, [3, 2, 1]);
}
