//! # Resource-Aware Queue
//!
//! A priority task queue that hands each consumer the most urgent task it can
//! actually run on the resources it has right now.
//!
//! A publisher enqueues work tagged with a priority and a resource
//! requirement (memory, CPU cores, GPU cores). A consumer asks for a task by
//! offering a one-shot resource budget. The queue walks pending tasks in
//! `(priority, arrival)` order and returns the first one whose requirement
//! fits the budget component-wise. Tasks that did not fit are skipped, not
//! lost: they keep their exact place and are offered again on the next call.
//!
//! ## Key Features
//!
//! - **Deterministic ordering**: smaller priority first, FIFO among equals
//! - **Head-of-line blocking avoidance**: an oversized urgent task never
//!   starves a consumer that could run something smaller
//! - **Typed no-task outcomes**: [`core::QueueError::QueueEmpty`] and
//!   [`core::QueueError::InsufficientResources`] share one "nothing to do"
//!   channel but stay distinguishable for diagnostics
//! - **Optional auditing**: every enqueue, skip and dispatch can be recorded
//! - **Thread-safe handle**: [`infra::SharedQueue`] serializes access for
//!   multi-threaded hosts
//!
//! ```rust
//! use resource_aware_queue::core::TaskQueue;
//! use resource_aware_queue::infra::InMemoryQueue;
//! use resource_aware_queue::util::Resources;
//!
//! let mut queue = InMemoryQueue::new();
//! queue.add_task(1, Resources::new(8, 4, 4), "build".into(), "built".into());
//! queue.add_task(3, Resources::new(4, 2, 1), "run db".into(), "db up".into());
//!
//! // Too small for the urgent build, big enough for the database.
//! let task = queue.get_task(&Resources::new(4, 2, 2)).unwrap();
//! assert_eq!(task.content(), "run db");
//! assert_eq!(queue.len(), 1);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core queue abstractions, tasks and errors.
pub mod core;
/// Configuration models for queues.
pub mod config;
/// Builders to construct queues from configuration.
pub mod builders;
/// Queue backends.
pub mod infra;
/// Shared value types and utilities.
pub mod util;
