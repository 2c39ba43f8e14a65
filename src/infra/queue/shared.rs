//! Thread-safe handle over a queue backend.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::{QueueError, Task, TaskQueue};
use crate::infra::queue::InMemoryQueue;
use crate::util::{Priority, Resources, TaskId};

/// Cloneable handle that serializes every operation on the wrapped queue
/// behind one `parking_lot::Mutex`.
///
/// Each call holds the lock for its whole duration, so a selection scan and
/// its re-insertion of skipped tasks are never interleaved with another
/// publisher or consumer.
pub struct SharedQueue<Q = InMemoryQueue> {
    inner: Arc<Mutex<Q>>,
}

impl<Q> Clone for SharedQueue<Q> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<Q: TaskQueue> SharedQueue<Q> {
    /// Wrap a queue backend.
    pub fn new(queue: Q) -> Self {
        Self {
            inner: Arc::new(Mutex::new(queue)),
        }
    }

    /// See [`TaskQueue::add_task`].
    pub fn add_task(
        &self,
        priority: Priority,
        resources: Resources,
        content: impl Into<String>,
        result: impl Into<String>,
    ) -> TaskId {
        self.inner
            .lock()
            .add_task(priority, resources, content.into(), result.into())
    }

    /// See [`TaskQueue::get_task`].
    ///
    /// # Errors
    ///
    /// Same as [`TaskQueue::get_task`].
    pub fn get_task(&self, available: &Resources) -> Result<Task, QueueError> {
        self.inner.lock().get_task(available)
    }

    /// Id of the best-ordered pending task.
    pub fn peek_id(&self) -> Option<TaskId> {
        self.inner.lock().peek().map(Task::id)
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// True if no tasks are pending.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Run `f` with exclusive access to the backend.
    pub fn with_queue<R>(&self, f: impl FnOnce(&mut Q) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }
}

impl Default for SharedQueue<InMemoryQueue> {
    fn default() -> Self {
        Self::new(InMemoryQueue::new())
    }
}
