//! Shared value types: identifiers, priorities and resource vectors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Task identifier assigned by a queue. Lower ids arrived earlier.
pub type TaskId = u64;

/// Task priority. Smaller values are more urgent; `0` is the usual "highest"
/// but negative values are legal and sort ahead of it.
pub type Priority = i64;

/// A resource vector: either what a task needs or what a consumer can offer
/// for a single selection.
///
/// Two vectors are compared component-wise and never collapsed into a
/// scalar, so `{ram: 8, cpu: 1}` does not fit within `{ram: 4, cpu: 16}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Resources {
    /// Memory units.
    pub ram: u64,
    /// Number of CPU cores.
    pub cpu_cores: u32,
    /// Number of GPU cores.
    pub gpu_cores: u32,
}

impl Resources {
    /// The empty requirement; fits within any budget.
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Construct a resource vector.
    #[must_use]
    pub const fn new(ram: u64, cpu_cores: u32, gpu_cores: u32) -> Self {
        Self {
            ram,
            cpu_cores,
            gpu_cores,
        }
    }

    /// True if every component of `self` is at most the matching component
    /// of `available`.
    #[must_use]
    pub const fn fits_within(&self, available: &Self) -> bool {
        self.ram <= available.ram
            && self.cpu_cores <= available.cpu_cores
            && self.gpu_cores <= available.gpu_cores
    }
}

impl fmt::Display for Resources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ram={} cpu={} gpu={}",
            self.ram, self.cpu_cores, self.gpu_cores
        )
    }
}
