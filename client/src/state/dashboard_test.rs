use super::*;

#[test]
fn keys_round_trip_for_every_page() {
    for page in ActivePage::ALL {
        assert_eq!(ActivePage::from_key(page.key()), page);
    }
}

#[test]
fn unknown_key_falls_back_to_home() {
    assert_eq!(ActivePage::from_key("does-not-exist"), ActivePage::Home);
    assert_eq!(ActivePage::from_key(""), ActivePage::Home);
}

#[test]
fn history_logs_key_matches_menu() {
    assert_eq!(ActivePage::HistoryLogs.key(), "historylogs");
    assert_eq!(ActivePage::HistoryLogs.label(), "History Logs");
}

#[test]
fn sidebar_width_follows_collapse() {
    let mut state = DashboardState::default();
    assert_eq!(state.sidebar_width(), 240);
    state.sidebar_collapsed = true;
    assert_eq!(state.sidebar_width(), 80);
}

#[test]
fn content_is_offset_below_header() {
    assert_eq!(CONTENT_TOP_PX, 96);
    let state = DashboardState { sidebar_collapsed: true, ..DashboardState::default() };
    assert_eq!(state.content_style(), "margin-left: 80px; padding-top: 96px;");
    assert_eq!(state.header_style(), "left: 80px;");
}
