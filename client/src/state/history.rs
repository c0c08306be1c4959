//! History viewer state: filters, month choices, and loaded data sets.
//!
//! SYSTEM CONTEXT
//! ==============
//! `pages::history_logs` owns one `RwSignal<HistoryState>` and one
//! `RwSignal<HistoryFilter>`. Every filter change plans a refresh through
//! `net::logs`, and the results are folded in with `HistoryState::apply`.
//!
//! DESIGN
//! ======
//! Each data set is replaced only when its own request succeeds, so a single
//! failing endpoint leaves the rest of the view current and its own panel at
//! the last good value.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::cmp::Reverse;

use time::{Date, Month, PrimitiveDateTime};

use crate::net::error::ApiError;
use crate::net::logs::{LogEndpoint, RefreshResults};
use crate::net::types::{Apartment, EventKind, LogStats, RecentLogs, TimelineEvent, TransferLog, VacateLog};
use crate::util::format::parse_timestamp;

/// Months offered in the month picker.
pub const MONTH_CHOICES: usize = 12;
/// Rows shown in each recent-activity table.
pub const RECENT_ROWS: usize = 5;

/// Event-type filter. `All` sends no `type` parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EventFilter {
    #[default]
    All,
    Transfer,
    Vacate,
}

impl EventFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Transfer, Self::Vacate];

    #[must_use]
    pub fn as_param(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Transfer => Some("transfer"),
            Self::Vacate => Some("vacate"),
        }
    }

    /// `<select>` value.
    #[must_use]
    pub fn value(self) -> &'static str {
        self.as_param().unwrap_or("All")
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Transfer => "Transfer",
            Self::Vacate => "Vacate",
        }
    }

    #[must_use]
    pub fn from_value(value: &str) -> Self {
        Self::ALL.into_iter().find(|f| f.value() == value).unwrap_or_default()
    }
}

/// Current filter selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryFilter {
    pub apartment_id: Option<i64>,
    /// `YYYY-MM`.
    pub month: String,
    pub event_type: EventFilter,
    pub search: String,
}

impl HistoryFilter {
    /// All apartments, all types, no search, for `month`.
    #[must_use]
    pub fn for_month(month: impl Into<String>) -> Self {
        Self { apartment_id: None, month: month.into(), event_type: EventFilter::All, search: String::new() }
    }
}

/// Parse the apartment `<select>` value; anything but an id means All.
#[must_use]
pub fn parse_apartment(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// One entry of the month picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthOption {
    /// `YYYY-MM`.
    pub value: String,
    /// `July 2025`.
    pub label: String,
}

impl MonthOption {
    #[must_use]
    pub fn new(year: i32, month: Month) -> Self {
        Self { value: format!("{year:04}-{:02}", u8::from(month)), label: format!("{month} {year}") }
    }
}

/// The `count` months ending at `today`'s month, newest first.
#[must_use]
pub fn recent_months(today: Date, count: usize) -> Vec<MonthOption> {
    let mut year = today.year();
    let mut month = today.month();
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(MonthOption::new(year, month));
        if month == Month::January {
            year -= 1;
        }
        month = month.previous();
    }
    out
}

/// One slice of the type breakdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeShare {
    pub kind: EventKind,
    pub count: u32,
    /// Rounded share of all events, 0..=100.
    pub percent: u32,
}

/// Transfer/vacate split for the breakdown chart; empty kinds are left out.
#[must_use]
pub fn type_breakdown(stats: &LogStats) -> Vec<TypeShare> {
    let total = stats.transfers + stats.vacates;
    if total == 0 {
        return Vec::new();
    }
    [(EventKind::Transfer, stats.transfers), (EventKind::Vacate, stats.vacates)]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(kind, count)| TypeShare { kind, count, percent: (count * 100 + total / 2) / total })
        .collect()
}

/// Sort key: newest parsed time first, missing or unparseable times last.
fn newest_first(raw: Option<&str>) -> Reverse<Option<PrimitiveDateTime>> {
    Reverse(raw.and_then(parse_timestamp))
}

/// A data set that failed during a refresh.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailedSet {
    pub endpoint: LogEndpoint,
    pub error: ApiError,
}

/// Loaded data for the history viewer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryState {
    pub apartments: Vec<Apartment>,
    pub stats: LogStats,
    /// Newest first.
    pub timeline: Vec<TimelineEvent>,
    pub recent: RecentLogs,
    pub loading: bool,
    pub exporting: bool,
}

impl HistoryState {
    /// Fold one refresh in. Returns the sets that failed; aborted requests
    /// are neither applied nor reported.
    pub fn apply(&mut self, results: RefreshResults) -> Vec<FailedSet> {
        let mut failed = Vec::new();
        let mut record = |endpoint: LogEndpoint, error: ApiError| {
            if !error.is_aborted() {
                failed.push(FailedSet { endpoint, error });
            }
        };
        match results.apartments {
            Ok(apartments) => self.apartments = apartments,
            Err(e) => record(LogEndpoint::Apartments, e),
        }
        match results.stats {
            Ok(stats) => self.stats = stats,
            Err(e) => record(LogEndpoint::Stats, e),
        }
        match results.timeline {
            Ok(mut timeline) => {
                timeline.sort_by_cached_key(|e| newest_first(Some(&e.timestamp)));
                self.timeline = timeline;
            }
            Err(e) => record(LogEndpoint::Timeline, e),
        }
        match results.recent {
            Ok(recent) => self.recent = recent,
            Err(e) => record(LogEndpoint::Recent, e),
        }
        self.loading = false;
        failed
    }

    /// Most recent transfers, newest first.
    #[must_use]
    pub fn recent_transfers(&self) -> Vec<TransferLog> {
        let mut rows = self.recent.transfers.clone();
        rows.sort_by_cached_key(|r| newest_first(r.transfer_date.as_deref()));
        rows.truncate(RECENT_ROWS);
        rows
    }

    /// Most recent vacates, newest first.
    #[must_use]
    pub fn recent_vacates(&self) -> Vec<VacateLog> {
        let mut rows = self.recent.vacates.clone();
        rows.sort_by_cached_key(|r| newest_first(r.vacate_date.as_deref()));
        rows.truncate(RECENT_ROWS);
        rows
    }

    #[must_use]
    pub fn top_reason(&self) -> &str {
        match self.stats.top_reason.as_deref().map(str::trim) {
            Some(r) if !r.is_empty() => r,
            _ => "—",
        }
    }
}
