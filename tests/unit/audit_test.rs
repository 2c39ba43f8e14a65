//! Tests for audit sink

use resource_aware_queue::core::{
    build_audit_event, AuditAction, AuditSink, InMemoryAuditSink, NoTaskReason,
};

#[test]
fn test_in_memory_audit_sink() {
    let mut sink = InMemoryAuditSink::new(10);

    let event = build_audit_event(Some(7), AuditAction::Enqueued);
    sink.record(event.clone());
    assert_eq!(sink.events().len(), 1);

    let events = sink.events();
    assert_eq!(events[0].event_id, event.event_id);
    assert_eq!(events[0].task_id, Some(7));
    assert_eq!(events[0].action, AuditAction::Enqueued);
}

#[test]
fn test_audit_sink_overflow() {
    let mut sink = InMemoryAuditSink::new(2);

    sink.record(build_audit_event(Some(1), AuditAction::Enqueued));
    sink.record(build_audit_event(Some(2), AuditAction::Enqueued));
    sink.record(build_audit_event(Some(3), AuditAction::Enqueued));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].task_id, Some(2)); // First one popped
    assert_eq!(events[1].task_id, Some(3));
}

#[test]
fn test_build_audit_event() {
    let event = build_audit_event(
        None,
        AuditAction::NoTask(NoTaskReason::InsufficientResources),
    );

    assert!(!event.event_id.is_empty());
    assert_eq!(event.task_id, None);
    assert_eq!(
        event.action,
        AuditAction::NoTask(NoTaskReason::InsufficientResources)
    );
    assert!(event.created_at_ms > 0);
}

#[test]
fn test_audit_action_json() {
    let json = serde_json::to_value(AuditAction::NoTask(NoTaskReason::QueueEmpty)).unwrap();
    assert_eq!(json, serde_json::json!({ "no_task": "queue_empty" }));
}
