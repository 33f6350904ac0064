use super::*;

#[test]
fn defaults_match_server_conventions() {
    let config = ClientConfig::default();
    assert_eq!(config.csrf_cookie, "csrftoken");
    assert_eq!(config.csrf_header, "X-CSRFToken");
    assert_eq!(config.requested_with.0, "X-Requested-With");
    assert_eq!(config.requested_with.1, "XMLHttpRequest");
    assert_eq!(config.tick_interval_ms, 1000);
    assert_eq!(config.logout_path, "/auth/logout/");
    assert_eq!(config.login_path, "/auth/login/");
    assert_eq!(config.reservation_field_id, "resId");
}

#[test]
fn from_json_fills_missing_fields_with_defaults() {
    let config = ClientConfig::from_json(r#"{"tick_interval_ms": 500, "messages": {"resume_label": "Go on"}}"#)
        .expect("valid config");
    assert_eq!(config.tick_interval_ms, 500);
    assert_eq!(config.messages.resume_label, "Go on");
    assert_eq!(config.messages.start_label, "Start");
    assert_eq!(config.csrf_cookie, "csrftoken");
}

#[test]
fn from_json_accepts_empty_object() {
    assert_eq!(ClientConfig::from_json("{}").expect("valid config"), ClientConfig::default());
}

#[test]
fn from_json_rejects_malformed_text() {
    assert!(ClientConfig::from_json("{not json").is_err());
    assert!(ClientConfig::from_json(r#"{"tick_interval_ms": "fast"}"#).is_err());
}

#[test]
fn log_level_parses_known_names_case_insensitively() {
    let mut config = ClientConfig::default();
    config.log_level = "DEBUG".to_owned();
    assert_eq!(config.log_level(), log::Level::Debug);
    config.log_level = "warn".to_owned();
    assert_eq!(config.log_level(), log::Level::Warn);
}

#[test]
fn log_level_falls_back_to_info() {
    let mut config = ClientConfig::default();
    config.log_level = "chatty".to_owned();
    assert_eq!(config.log_level(), log::Level::Info);
}

#[test]
fn load_outside_browser_returns_defaults() {
    assert_eq!(ClientConfig::load(), ClientConfig::default());
}
