//! The queued work item.

use serde::Serialize;

use crate::util::{Priority, Resources, TaskId};

/// A unit of work waiting in a queue.
///
/// Tasks are only created by a queue, which assigns the id, and are never
/// modified afterwards. `content` and `result` are opaque descriptions
/// supplied by the publisher and carried through untouched.
///
/// Tasks serialize for logging and hand-off, but do not deserialize: a task
/// with an id the queue never issued cannot be built outside the crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    priority: Priority,
    resources: Resources,
    content: String,
    result: String,
}

impl Task {
    pub(crate) const fn new(
        id: TaskId,
        priority: Priority,
        resources: Resources,
        content: String,
        result: String,
    ) -> Self {
        Self {
            id,
            priority,
            resources,
            content,
            result,
        }
    }

    /// Queue-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Priority; smaller is more urgent.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Resources needed to run the task.
    #[must_use]
    pub const fn resources(&self) -> &Resources {
        &self.resources
    }

    /// Task description.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Result description.
    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }

    /// True if the task can run on the offered budget.
    #[must_use]
    pub const fn is_admissible(&self, available: &Resources) -> bool {
        self.resources.fits_within(available)
    }

    /// Queue ordering key: priority first, then arrival.
    pub(crate) const fn order_key(&self) -> (Priority, TaskId) {
        (self.priority, self.id)
    }
}
