//! Configuration models for queues.

pub mod queue;

pub use queue::QueueConfig;
