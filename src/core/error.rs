//! Error types for queue operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::Resources;

/// Why a selection call produced no task.
///
/// Callers should treat both reasons as "nothing to do right now"; the code
/// exists for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoTaskReason {
    /// There were no pending tasks.
    QueueEmpty,
    /// Every pending task needed more than the offered budget.
    InsufficientResources,
}

impl NoTaskReason {
    /// Stable lowercase code, suitable for log fields and metrics labels.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::QueueEmpty => "queue_empty",
            Self::InsufficientResources => "insufficient_resources",
        }
    }
}

/// Errors produced by queue components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// `get_task` was called with zero pending tasks.
    #[error("task queue is empty")]
    QueueEmpty,
    /// No pending task fits the offered resources.
    #[error("available resources ({available}) are insufficient for any of {pending} queued tasks")]
    InsufficientResources {
        /// Number of tasks that were examined and left in place.
        pending: usize,
        /// The budget that was offered.
        available: Resources,
    },
    /// Configuration was rejected during validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl QueueError {
    /// The no-task reason, or `None` for errors unrelated to selection.
    #[must_use]
    pub const fn reason(&self) -> Option<NoTaskReason> {
        match self {
            Self::QueueEmpty => Some(NoTaskReason::QueueEmpty),
            Self::InsufficientResources { .. } => Some(NoTaskReason::InsufficientResources),
            Self::InvalidConfig(_) => None,
        }
    }

    /// True for either "no task" outcome.
    #[must_use]
    pub const fn is_no_task(&self) -> bool {
        self.reason().is_some()
    }
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
