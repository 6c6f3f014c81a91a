use super::*;

#[test]
fn default_config_uses_same_origin_api_root() {
    let config = ClientConfig::default();
    assert_eq!(config.api_base, "/api");
    assert_eq!(config.toast_duration_ms, 3000);
    assert_eq!(config.search_limit, 20);
    assert_eq!(config.list_limit, 50);
}

#[test]
fn with_api_base_strips_trailing_slash() {
    let config = ClientConfig::with_api_base(Some("https://exams.example.com/api/"));
    assert_eq!(config.api_base, "https://exams.example.com/api");
}

#[test]
fn with_api_base_ignores_blank_override() {
    assert_eq!(ClientConfig::with_api_base(Some("   ")).api_base, "/api");
    assert_eq!(ClientConfig::with_api_base(None).api_base, "/api");
}

#[test]
fn url_joins_without_doubling_slashes() {
    let config = ClientConfig::default();
    assert_eq!(config.url("/problems"), "/api/problems");
    assert_eq!(config.url("stats"), "/api/stats");
}
