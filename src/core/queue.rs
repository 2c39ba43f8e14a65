//! The queue abstraction shared by backends and the shared handle.

use crate::core::{QueueError, Task};
use crate::util::{Priority, Resources, TaskId};

/// A priority queue that hands out the most urgent task a consumer can
/// actually run.
///
/// Ordering is `(priority ascending, id ascending)`; ids are assigned by the
/// queue from a private counter that never decreases.
pub trait TaskQueue {
    /// Enqueue a task and return the id assigned to it. Cannot fail.
    fn add_task(
        &mut self,
        priority: Priority,
        resources: Resources,
        content: String,
        result: String,
    ) -> TaskId;

    /// Remove and return the best-ordered task whose requirement fits within
    /// `available`. Tasks skipped on the way keep their place.
    ///
    /// # Errors
    ///
    /// [`QueueError::QueueEmpty`] if nothing is pending, or
    /// [`QueueError::InsufficientResources`] if no pending task fits. The
    /// queue is unchanged in both cases.
    fn get_task(&mut self, available: &Resources) -> Result<Task, QueueError>;

    /// The best-ordered pending task, regardless of resources.
    fn peek(&self) -> Option<&Task>;

    /// Number of pending tasks.
    fn len(&self) -> usize;

    /// True if no tasks are pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
