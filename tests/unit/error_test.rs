//! Tests for error types

use resource_aware_queue::core::{NoTaskReason, QueueError};
use resource_aware_queue::util::Resources;

#[test]
fn test_queue_empty_error() {
    let err = QueueError::QueueEmpty;
    assert_eq!(format!("{}", err), "task queue is empty");
}

#[test]
fn test_insufficient_resources_error() {
    let err = QueueError::InsufficientResources {
        pending: 3,
        available: Resources::new(2, 1, 0),
    };
    assert_eq!(
        format!("{}", err),
        "available resources (ram=2 cpu=1 gpu=0) are insufficient for any of 3 queued tasks"
    );
}

#[test]
fn test_invalid_config_error() {
    let err = QueueError::InvalidConfig("bad capacity".to_string());
    assert_eq!(format!("{}", err), "invalid config: bad capacity");
    assert_eq!(err.reason(), None);
}

#[test]
fn test_no_task_reasons_are_uniform() {
    let errors = [
        QueueError::QueueEmpty,
        QueueError::InsufficientResources {
            pending: 1,
            available: Resources::ZERO,
        },
    ];
    assert!(errors.iter().all(QueueError::is_no_task));
}

#[test]
fn test_reason_serializes_snake_case() {
    let json = serde_json::to_string(&NoTaskReason::InsufficientResources).unwrap();
    assert_eq!(json, "\"insufficient_resources\"");
}
