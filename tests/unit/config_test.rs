//! Tests for configuration validation

use resource_aware_queue::config::QueueConfig;

#[test]
fn test_queue_config_defaults() {
    let cfg = QueueConfig::default();
    assert_eq!(cfg.initial_capacity, 64);
    assert_eq!(cfg.audit_capacity, None);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_queue_config_invalid_audit_capacity() {
    let invalid = QueueConfig {
        initial_capacity: 16,
        audit_capacity: Some(0),
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_queue_config_from_json() {
    let json = r#"{
        "initial_capacity": 256,
        "audit_capacity": 100
    }"#;

    let config = QueueConfig::from_json_str(json).unwrap();
    assert_eq!(config.initial_capacity, 256);
    assert_eq!(config.audit_capacity, Some(100));
}

#[test]
fn test_queue_config_from_partial_json() {
    let config = QueueConfig::from_json_str(r#"{ "audit_capacity": 8 }"#).unwrap();
    assert_eq!(config.initial_capacity, 64);
    assert_eq!(config.audit_capacity, Some(8));
}

#[test]
fn test_queue_config_from_bad_json() {
    assert!(QueueConfig::from_json_str("{ not json").is_err());
    assert!(QueueConfig::from_json_str(r#"{ "audit_capacity": 0 }"#).is_err());
}
