use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_matches_page_markup() {
    let config = ToggleConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.attribute, "data-theme");
    assert_eq!(config.toggle_id, "theme-toggle");
}

#[test]
fn default_is_valid() {
    assert!(ToggleConfig::default().validate().is_ok());
}

// =============================================================
// from_json
// =============================================================

#[test]
fn empty_object_yields_defaults() {
    let config = ToggleConfig::from_json("{}").expect("config");
    assert_eq!(config, ToggleConfig::default());
}

#[test]
fn partial_object_overrides_only_given_fields() {
    let config = ToggleConfig::from_json(r#"{"storage_key": "site-theme"}"#).expect("config");
    assert_eq!(config.storage_key, "site-theme");
    assert_eq!(config.attribute, "data-theme");
    assert_eq!(config.toggle_id, "theme-toggle");
}

#[test]
fn full_object_overrides_everything() {
    let config = ToggleConfig::from_json(
        r#"{"storage_key": "k", "attribute": "data-mode", "toggle_id": "mode-switch"}"#,
    )
    .expect("config");
    assert_eq!(config.storage_key, "k");
    assert_eq!(config.attribute, "data-mode");
    assert_eq!(config.toggle_id, "mode-switch");
}

#[test]
fn unknown_field_is_rejected() {
    let err = ToggleConfig::from_json(r#"{"themes": ["light", "dark", "sepia"]}"#).expect_err("unknown field");
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn malformed_json_is_rejected() {
    let err = ToggleConfig::from_json("{storage_key:").expect_err("malformed");
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn empty_identifier_is_rejected() {
    let err = ToggleConfig::from_json(r#"{"toggle_id": ""}"#).expect_err("empty id");
    assert!(matches!(err, ConfigError::Empty("toggle_id")));
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_reports_first_empty_field() {
    let config = ToggleConfig { storage_key: String::new(), attribute: String::new(), ..ToggleConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::Empty("storage_key"))));
}

#[test]
fn validate_rejects_empty_attribute() {
    let config = ToggleConfig { attribute: String::new(), ..ToggleConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::Empty("attribute"))));
}
