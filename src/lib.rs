//! Logical and physical CPU core counts.
//!
//! ```no_run
//! let logical = corecount::logical_count();
//! let physical = corecount::physical_count();
//! assert!(physical >= 1 && logical >= 1);
//! ```
//!
//! Both operations are total: they never panic, never return an error and
//! never return 0. When the platform cannot answer, the physical count falls
//! back to the logical count, and the logical count falls back to 1. Nothing
//! is cached; every call queries the OS again.
//!
//! Platform probes live in [`probe`]; the one compiled for this target is
//! [`probe::HostProbe`].

pub mod config;
pub mod error;
pub mod probe;

pub use error::ProbeError;
pub use probe::{host, HostProbe, Probe};

/// Returns the number of logical processors currently online, including
/// SMT siblings. Always at least 1.
pub fn logical_count() -> usize {
    host().logical()
}

/// Returns the number of physical cores, excluding SMT siblings.
///
/// Falls back to [`logical_count`] when physical detection is not possible.
/// Always at least 1.
pub fn physical_count() -> usize {
    host().physical()
}

/// Both counts, taken from the same probe in one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreCounts {
    pub logical: usize,
    pub physical: usize,
}

impl CoreCounts {
    /// `true` when at least one physical core exposes several logical ones.
    pub fn has_smt(&self) -> bool {
        self.physical < self.logical
    }
}

/// Snapshot of [`logical_count`] and [`physical_count`].
pub fn counts() -> CoreCounts {
    let probe = host();
    CoreCounts {
        logical: probe.logical(),
        physical: probe.physical(),
    }
}
