//! Queue backends.

pub mod memory;
pub mod shared;

pub use memory::InMemoryQueue;
pub use shared::SharedQueue;
