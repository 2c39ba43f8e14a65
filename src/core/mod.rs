//! Core queue abstractions: tasks, errors, the queue trait and diagnostics.

pub mod audit;
pub mod error;
pub mod queue;
pub mod task;

pub use audit::{
    build_audit_event, AuditAction, AuditEvent, AuditSink, InMemoryAuditSink,
    SharedAuditSink,
};
pub use error::{AppResult, NoTaskReason, QueueError};
pub use queue::TaskQueue;
pub use task::Task;
