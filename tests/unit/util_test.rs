//! Tests for utility functions

use resource_aware_queue::util::{init_tracing, now_ms, Resources};

#[test]
fn test_resources_display() {
    assert_eq!(Resources::new(8, 4, 4).to_string(), "ram=8 cpu=4 gpu=4");
    assert_eq!(Resources::ZERO.to_string(), "ram=0 cpu=0 gpu=0");
}

#[test]
fn test_resources_fit() {
    let need = Resources::new(32, 8, 16);
    assert!(need.fits_within(&Resources::new(64, 10, 32)));
    assert!(!need.fits_within(&Resources::new(64, 10, 15)));
}

#[test]
fn test_resources_json_round_trip() {
    let res = Resources::new(64, 10, 32);
    let json = serde_json::to_string(&res).unwrap();
    assert_eq!(json, r#"{"ram":64,"cpu_cores":10,"gpu_cores":32}"#);
    assert_eq!(serde_json::from_str::<Resources>(&json).unwrap(), res);
}

#[test]
fn test_resources_json_rejects_negative() {
    let negative = r#"{ "ram": -1, "cpu_cores": 0, "gpu_cores": 0 }"#;
    assert!(serde_json::from_str::<Resources>(negative).is_err());
}

#[test]
fn test_now_ms() {
    assert!(now_ms() > 0);
}

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
    tracing::debug!("subscriber installed");
}
