//! Audit sinks for queue diagnostics.
//!
//! A sink receives one event per enqueue, skipped task, dispatch and
//! no-task outcome, so hosts can inspect why a consumer went away
//! empty-handed without parsing log lines.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::NoTaskReason;
use crate::util::clock::now_ms;
use crate::util::TaskId;

/// What happened to the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// A task was added.
    Enqueued,
    /// A task was examined, did not fit, and was kept.
    Skipped,
    /// A task was handed to the consumer.
    Dispatched,
    /// A selection call returned no task.
    NoTask(NoTaskReason),
}

/// Audit event structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Event identifier.
    pub event_id: String,
    /// Related task, absent for no-task outcomes.
    pub task_id: Option<TaskId>,
    /// Action taken.
    pub action: AuditAction,
    /// Timestamp milliseconds.
    pub created_at_ms: u128,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: AuditEvent);
}

/// In-memory audit sink keeping the most recent events.
pub struct InMemoryAuditSink {
    events: VecDeque<AuditEvent>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    #[must_use]
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events.min(1024)),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.iter().cloned().collect()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AuditEvent) {
        if self.max_events == 0 {
            return;
        }
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

/// An in-memory sink shared between a queue and its reader.
pub type SharedAuditSink = Arc<Mutex<InMemoryAuditSink>>;

/// Forwards to a shared sink so the caller can keep reading events after
/// handing the sink to a queue.
impl<S: AuditSink> AuditSink for Arc<Mutex<S>> {
    fn record(&mut self, event: AuditEvent) {
        self.lock().record(event);
    }
}

/// Helper to build an audit event stamped with a fresh id and the current time.
#[must_use]
pub fn build_audit_event(task_id: Option<TaskId>, action: AuditAction) -> AuditEvent {
    AuditEvent {
        event_id: Uuid::new_v4().to_string(),
        task_id,
        action,
        created_at_ms: now_ms(),
    }
}
