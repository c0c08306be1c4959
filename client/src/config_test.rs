use super::*;

#[test]
fn defaults_when_nothing_configured() {
    let config = ApiConfig::new(None, None);
    assert_eq!(config.api_base, DEFAULT_API_URL);
    assert_eq!(config.logs_base, DEFAULT_API_URL);
}

#[test]
fn logs_base_falls_back_to_api_base() {
    let config = ApiConfig::new(Some("https://api.paynest.test"), None);
    assert_eq!(config.logs_base, "https://api.paynest.test");
}

#[test]
fn blank_values_count_as_unset() {
    let config = ApiConfig::new(Some("   "), Some(""));
    assert_eq!(config.api_base, DEFAULT_API_URL);
    assert_eq!(config.logs_base, DEFAULT_API_URL);
}

#[test]
fn trailing_slashes_are_trimmed() {
    let config = ApiConfig::new(Some("https://api.paynest.test/"), Some("https://logs.paynest.test//"));
    assert_eq!(config.api_base, "https://api.paynest.test");
    assert_eq!(config.logs_base, "https://logs.paynest.test");
}

#[test]
fn join_handles_leading_slash() {
    let config = ApiConfig::new(Some("https://api.paynest.test"), Some("https://logs.paynest.test"));
    assert_eq!(config.api("/login"), "https://api.paynest.test/login");
    assert_eq!(config.api("register"), "https://api.paynest.test/register");
    assert_eq!(config.logs("/logs/stats"), "https://logs.paynest.test/logs/stats");
}
