//! Infrastructure adapters for queue backends.

pub mod queue;
pub use queue::InMemoryQueue;
pub use queue::SharedQueue;
