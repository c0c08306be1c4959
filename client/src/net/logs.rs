//! History-log REST calls with superseding cancellation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The history viewer re-fetches four data sets (apartments, stats, timeline,
//! recent) on every filter change. A refresh is planned as a fixed
//! `[LogRequest; 4]`, and `InFlight` aborts the previous set before the next
//! one is issued so a slow, stale response can never overwrite newer data.
//!
//! TRADE-OFFS
//! ==========
//! Aborting relies on the browser honouring `AbortSignal`; the generation
//! check in `InFlight::is_current` covers responses that still slip through.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "logs_test.rs"]
mod logs_test;

use crate::config::ApiConfig;
use crate::state::history::HistoryFilter;

use super::error::ApiError;
use super::types::{Apartment, LogStats, RecentLogs, TimelineEvent};

/// Backend routes behind the logs root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogEndpoint {
    Apartments,
    Stats,
    Timeline,
    Recent,
    Export,
}

impl LogEndpoint {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Apartments => "/myapartments",
            Self::Stats => "/logs/stats",
            Self::Timeline => "/logs/timeline",
            Self::Recent => "/logs/recent",
            Self::Export => "/logs/export",
        }
    }

    /// Whether the free-text search applies to this route.
    #[must_use]
    pub fn uses_search(self) -> bool {
        matches!(self, Self::Timeline | Self::Export)
    }
}

/// One planned `GET` with its query parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogRequest {
    pub endpoint: LogEndpoint,
    pub params: Vec<(&'static str, String)>,
}

impl LogRequest {
    /// Build the request for `endpoint` under `filter`.
    #[must_use]
    pub fn new(endpoint: LogEndpoint, filter: &HistoryFilter) -> Self {
        let mut params = Vec::new();
        if let Some(id) = filter.apartment_id {
            params.push(("apartment_id", id.to_string()));
        }
        params.push(("month", filter.month.clone()));
        if let Some(kind) = filter.event_type.as_param() {
            params.push(("type", kind.to_owned()));
        }
        let search = filter.search.trim();
        if endpoint.uses_search() && !search.is_empty() {
            params.push(("q", search.to_owned()));
        }
        Self { endpoint, params }
    }

    #[must_use]
    pub fn url(&self, config: &ApiConfig) -> String {
        config.logs(self.endpoint.path())
    }
}

/// The four requests issued for one refresh, in display order.
#[must_use]
pub fn plan_refresh(filter: &HistoryFilter) -> [LogRequest; 4] {
    [
        LogRequest::new(LogEndpoint::Apartments, filter),
        LogRequest::new(LogEndpoint::Stats, filter),
        LogRequest::new(LogEndpoint::Timeline, filter),
        LogRequest::new(LogEndpoint::Recent, filter),
    ]
}

/// Something that can cancel an in-flight request set.
pub trait Abort {
    fn abort(&self);
}

#[cfg(feature = "hydrate")]
impl Abort for web_sys::AbortController {
    fn abort(&self) {
        web_sys::AbortController::abort(self);
    }
}

/// Tracks the single live request set and the generation it belongs to.
#[derive(Debug)]
pub struct InFlight<H: Abort> {
    generation: u64,
    handle: Option<H>,
}

impl<H: Abort> Default for InFlight<H> {
    fn default() -> Self {
        Self { generation: 0, handle: None }
    }
}

impl<H: Abort> InFlight<H> {
    /// Abort whatever is pending and register `handle` as the live set.
    /// Returns the generation the new set must present when it completes.
    pub fn begin(&mut self, handle: H) -> u64 {
        if let Some(previous) = self.handle.take() {
            previous.abort();
        }
        self.generation += 1;
        self.handle = Some(handle);
        self.generation
    }

    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation && self.handle.is_some()
    }

    /// Release the handle if `generation` is still live. Returns whether it was.
    pub fn finish(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.handle = None;
        true
    }

    /// Abort the live set, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.handle.is_some()
    }
}

/// Outcome of one refresh; each data set succeeds or fails on its own.
#[derive(Clone, Debug, PartialEq)]
pub struct RefreshResults {
    pub apartments: Result<Vec<Apartment>, ApiError>,
    pub stats: Result<LogStats, ApiError>,
    pub timeline: Result<Vec<TimelineEvent>, ApiError>,
    pub recent: Result<RecentLogs, ApiError>,
}

#[cfg(feature = "hydrate")]
fn build_get(
    config: &ApiConfig,
    token: &str,
    request: &LogRequest,
    signal: Option<&web_sys::AbortSignal>,
) -> gloo_net::http::RequestBuilder {
    gloo_net::http::Request::get(&request.url(config))
        .query(request.params.iter().map(|(k, v)| (*k, v.as_str())))
        .header("Authorization", &super::api::bearer_header(token))
        .abort_signal(signal)
}

/// Issue the four refresh requests concurrently under one abort signal.
#[cfg(feature = "hydrate")]
pub async fn fetch_refresh(
    config: &ApiConfig,
    token: &str,
    filter: &HistoryFilter,
    signal: &web_sys::AbortSignal,
) -> RefreshResults {
    use super::http::get_json;
    use super::types::ApartmentsResponse;

    let [apartments, stats, timeline, recent] = plan_refresh(filter);
    let (apartments, stats, timeline, recent) = futures::join!(
        get_json::<ApartmentsResponse>(build_get(config, token, &apartments, Some(signal))),
        get_json::<LogStats>(build_get(config, token, &stats, Some(signal))),
        get_json::<Vec<TimelineEvent>>(build_get(config, token, &timeline, Some(signal))),
        get_json::<RecentLogs>(build_get(config, token, &recent, Some(signal))),
    );
    RefreshResults { apartments: apartments.map(ApartmentsResponse::into_vec), stats, timeline, recent }
}

/// Exported CSV: suggested filename plus raw bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Download the CSV export for `filter` from `GET /logs/export`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects the export.
pub async fn fetch_export(
    config: &ApiConfig,
    token: &str,
    filter: &HistoryFilter,
    fallback_name: &str,
) -> Result<ExportFile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = LogRequest::new(LogEndpoint::Export, filter);
        let resp = build_get(config, token, &request, None).send().await?;
        let resp = super::http::ensure_ok(resp).await?;
        let filename = resp
            .headers()
            .get("content-disposition")
            .and_then(|value| filename_from_disposition(&value))
            .unwrap_or_else(|| fallback_name.to_owned());
        let bytes = resp.binary().await?;
        Ok(ExportFile { filename, bytes })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, filter, fallback_name);
        Err(ApiError::Unavailable)
    }
}

/// Extract `filename` from a `Content-Disposition` header value.
#[must_use]
pub fn filename_from_disposition(value: &str) -> Option<String> {
    value
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))
        .map(|name| name.trim().trim_matches('"').trim())
        .filter(|name| !name.is_empty() && !name.contains(['/', '\\']))
        .map(str::to_owned)
}
