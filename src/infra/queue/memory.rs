//! In-memory queue with priority ordering and resource-aware selection.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, info};

use crate::core::{
    build_audit_event, AuditAction, AuditSink, NoTaskReason, QueueError, Task, TaskQueue,
};
use crate::util::{Priority, Resources, TaskId};

/// Wrapper to make `Task` orderable for a max-heap: most urgent priority
/// first, FIFO within priority.
struct PriorityTask {
    task: Task,
}

impl PartialEq for PriorityTask {
    fn eq(&self, other: &Self) -> bool {
        self.task.id() == other.task.id()
    }
}

impl Eq for PriorityTask {}

impl PartialOrd for PriorityTask {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriorityTask {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: the smallest (priority, id) must sit at the top of the heap.
        other.task.order_key().cmp(&self.task.order_key())
    }
}

/// In-memory queue storing tasks in a binary heap.
///
/// `add_task` is O(log n). `get_task` pops tasks in order until one fits the
/// offered budget, then pushes every skipped task back. Because ids are
/// unique the `(priority, id)` order is total, so re-pushing restores exactly
/// the order the skipped tasks had before the scan, including FIFO among
/// equal priorities. The scan is O(k log n) for k skipped tasks.
pub struct InMemoryQueue {
    tasks: BinaryHeap<PriorityTask>,
    next_id: TaskId,
    audit: Option<Box<dyn AuditSink>>,
}

impl InMemoryQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty queue with room for `capacity` tasks before reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tasks: BinaryHeap::with_capacity(capacity),
            next_id: 0,
            audit: None,
        }
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// The id the next `add_task` call will assign.
    #[must_use]
    pub const fn next_id(&self) -> TaskId {
        self.next_id
    }

    /// All pending tasks in the order they would be handed out to a consumer
    /// with unlimited resources. Does not modify the queue.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Task> {
        let mut tasks: Vec<Task> = self.tasks.iter().map(|pt| pt.task.clone()).collect();
        tasks.sort_unstable_by_key(Task::order_key);
        tasks
    }

    fn record(&mut self, task_id: Option<TaskId>, action: AuditAction) {
        if let Some(audit) = self.audit.as_mut() {
            audit.record(build_audit_event(task_id, action));
        }
    }
}

impl Default for InMemoryQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskQueue for InMemoryQueue {
    fn add_task(
        &mut self,
        priority: Priority,
        resources: Resources,
        content: String,
        result: String,
    ) -> TaskId {
        let id = self.next_id;
        self.tasks.push(PriorityTask {
            task: Task::new(id, priority, resources, content, result),
        });
        self.next_id += 1;
        debug!(task_id = id, priority, %resources, "task enqueued");
        self.record(Some(id), AuditAction::Enqueued);
        id
    }

    fn get_task(&mut self, available: &Resources) -> Result<Task, QueueError> {
        if self.tasks.is_empty() {
            debug!(reason = NoTaskReason::QueueEmpty.as_str(), "task queue is empty");
            self.record(None, AuditAction::NoTask(NoTaskReason::QueueEmpty));
            return Err(QueueError::QueueEmpty);
        }

        let mut skipped = Vec::new();
        let winner = loop {
            match self.tasks.pop() {
                Some(pt) if pt.task.is_admissible(available) => break Some(pt.task),
                Some(pt) => {
                    debug!(
                        task_id = pt.task.id(),
                        required = %pt.task.resources(),
                        %available,
                        "skipping task that does not fit"
                    );
                    skipped.push(pt);
                }
                None => break None,
            }
        };

        let pending = skipped.len();
        for pt in &skipped {
            self.record(Some(pt.task.id()), AuditAction::Skipped);
        }
        self.tasks.extend(skipped);

        if let Some(task) = winner {
            info!(
                task_id = task.id(),
                priority = task.priority(),
                skipped = pending,
                "task dispatched"
            );
            self.record(Some(task.id()), AuditAction::Dispatched);
            Ok(task)
        } else {
            debug!(
                reason = NoTaskReason::InsufficientResources.as_str(),
                pending,
                %available,
                "available resources are insufficient for any queued task"
            );
            self.record(None, AuditAction::NoTask(NoTaskReason::InsufficientResources));
            Err(QueueError::InsufficientResources {
                pending,
                available: *available,
            })
        }
    }

    fn peek(&self) -> Option<&Task> {
        self.tasks.peek().map(|pt| &pt.task)
    }

    fn len(&self) -> usize {
        self.tasks.len()
    }
}
