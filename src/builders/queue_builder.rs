//! Builds queue backends from configuration.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::QueueConfig;
use crate::core::{InMemoryAuditSink, QueueError, SharedAuditSink};
use crate::infra::queue::InMemoryQueue;

/// Build an in-memory queue from configuration.
///
/// When `audit_capacity` is set, an [`InMemoryAuditSink`] is attached to the
/// queue and a handle to it is returned alongside, so recorded events can be
/// read while the queue is in use.
///
/// # Errors
///
/// [`QueueError::InvalidConfig`] if the configuration does not validate.
pub fn build_queue(
    cfg: &QueueConfig,
) -> Result<(InMemoryQueue, Option<SharedAuditSink>), QueueError> {
    cfg.validate().map_err(QueueError::InvalidConfig)?;

    let queue = InMemoryQueue::with_capacity(cfg.initial_capacity);
    Ok(match cfg.audit_capacity {
        Some(capacity) => {
            let sink: SharedAuditSink = Arc::new(Mutex::new(InMemoryAuditSink::new(capacity)));
            (queue.with_audit(Box::new(Arc::clone(&sink))), Some(sink))
        }
        None => (queue, None),
    })
}
