use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::state::history::EventFilter;

fn filter() -> HistoryFilter {
    HistoryFilter {
        apartment_id: None,
        month: "2025-07".to_owned(),
        event_type: EventFilter::All,
        search: String::new(),
    }
}

fn keys(req: &LogRequest) -> Vec<&'static str> {
    req.params.iter().map(|(k, _)| *k).collect()
}

// =============================================================
// Request planning
// =============================================================

#[test]
fn refresh_plans_four_requests_in_order() {
    let plan = plan_refresh(&filter());
    let endpoints: Vec<LogEndpoint> = plan.iter().map(|r| r.endpoint).collect();
    assert_eq!(
        endpoints,
        vec![LogEndpoint::Apartments, LogEndpoint::Stats, LogEndpoint::Timeline, LogEndpoint::Recent]
    );
}

#[test]
fn all_filters_send_month_only() {
    for req in plan_refresh(&filter()) {
        assert_eq!(req.params, vec![("month", "2025-07".to_owned())]);
    }
}

#[test]
fn search_only_reaches_timeline() {
    let f = HistoryFilter { search: "  rent ".to_owned(), ..filter() };
    let plan = plan_refresh(&f);
    assert_eq!(keys(&plan[2]), vec!["month", "q"]);
    assert_eq!(plan[2].params[1].1, "rent");
    assert_eq!(keys(&plan[1]), vec!["month"]);
    assert_eq!(keys(&plan[3]), vec!["month"]);
}

#[test]
fn blank_search_is_omitted() {
    let f = HistoryFilter { search: "   ".to_owned(), ..filter() };
    assert_eq!(keys(&LogRequest::new(LogEndpoint::Timeline, &f)), vec!["month"]);
}

#[test]
fn apartment_and_type_are_sent_when_chosen() {
    let f = HistoryFilter { apartment_id: Some(12), event_type: EventFilter::Vacate, ..filter() };
    let req = LogRequest::new(LogEndpoint::Stats, &f);
    assert_eq!(
        req.params,
        vec![
            ("apartment_id", "12".to_owned()),
            ("month", "2025-07".to_owned()),
            ("type", "vacate".to_owned()),
        ]
    );
}

#[test]
fn export_carries_search() {
    let f = HistoryFilter { search: "Sunrise".to_owned(), ..filter() };
    assert_eq!(keys(&LogRequest::new(LogEndpoint::Export, &f)), vec!["month", "q"]);
}

#[test]
fn urls_use_logs_root() {
    let config = ApiConfig::new(Some("https://api.paynest.test"), Some("https://logs.paynest.test/"));
    let plan = plan_refresh(&filter());
    assert_eq!(plan[0].url(&config), "https://logs.paynest.test/myapartments");
    assert_eq!(plan[2].url(&config), "https://logs.paynest.test/logs/timeline");
}

// =============================================================
// Cancellation
// =============================================================

#[derive(Clone, Default)]
struct Recorder {
    aborted: Rc<RefCell<Vec<u32>>>,
    id: u32,
}

impl Abort for Recorder {
    fn abort(&self) {
        self.aborted.borrow_mut().push(self.id);
    }
}

fn handle(log: &Rc<RefCell<Vec<u32>>>, id: u32) -> Recorder {
    Recorder { aborted: Rc::clone(log), id }
}

#[test]
fn begin_aborts_previous_set() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut inflight = InFlight::default();
    let first = inflight.begin(handle(&log, 1));
    let second = inflight.begin(handle(&log, 2));
    assert_eq!(*log.borrow(), vec![1]);
    assert!(!inflight.is_current(first));
    assert!(inflight.is_current(second));
}

#[test]
fn stale_generation_cannot_finish() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut inflight = InFlight::default();
    let first = inflight.begin(handle(&log, 1));
    let second = inflight.begin(handle(&log, 2));
    assert!(!inflight.finish(first));
    assert!(inflight.is_pending());
    assert!(inflight.finish(second));
    assert!(!inflight.is_pending());
    assert!(!inflight.is_current(second));
}

#[test]
fn finished_set_is_not_aborted_by_next_begin() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut inflight = InFlight::default();
    let first = inflight.begin(handle(&log, 1));
    assert!(inflight.finish(first));
    inflight.begin(handle(&log, 2));
    assert!(log.borrow().is_empty());
}

#[test]
fn cancel_aborts_live_set() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut inflight = InFlight::default();
    inflight.begin(handle(&log, 7));
    inflight.cancel();
    inflight.cancel();
    assert_eq!(*log.borrow(), vec![7]);
    assert!(!inflight.is_pending());
}

// =============================================================
// Export
// =============================================================

#[test]
fn disposition_filename_is_extracted() {
    assert_eq!(
        filename_from_disposition(r#"attachment; filename="history_2025-07.csv""#).as_deref(),
        Some("history_2025-07.csv")
    );
    assert_eq!(filename_from_disposition("attachment; filename=logs.csv").as_deref(), Some("logs.csv"));
}

#[test]
fn disposition_without_usable_name_is_none() {
    assert_eq!(filename_from_disposition("attachment"), None);
    assert_eq!(filename_from_disposition(r#"attachment; filename="""#), None);
    assert_eq!(filename_from_disposition(r#"attachment; filename="../etc/passwd""#), None);
}
