//! Platform probes behind [`crate::logical_count`] and [`crate::physical_count`].
//!
//! Every platform family gets one probe type implementing [`Probe`]:
//! - [`WindowsProbe`]    : `GetSystemInfo` / `GetLogicalProcessorInformation`
//! - [`LinuxProbe`]      : `sysconf` / fold over `/proc/cpuinfo`
//! - [`DarwinProbe`]     : `sysconf` / `sysctlbyname("hw.physicalcpu")`
//! - [`GenericUnixProbe`]: `sysconf` only; physical count equals logical count
//! - [`UnknownProbe`]    : the constant 1, compiled on every target
//!
//! [`HostProbe`] names the probe selected for the compilation target. Which
//! Unix variant applies is decided by build.rs (`has_proc_cpuinfo`,
//! `has_sysctlbyname`).
//!
//! Probes hold no state beyond configuration and cache nothing: each call
//! queries the OS afresh.

use std::num::NonZeroUsize;

use log::debug;

use crate::config::FALLBACK_COUNT;
use crate::error::{ProbeError, Result};

pub mod cpuinfo;
pub mod relationship;

#[cfg(unix)]
mod unix;
#[cfg(has_proc_cpuinfo)]
mod linux;
#[cfg(has_sysctlbyname)]
mod darwin;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use unix::GenericUnixProbe;
#[cfg(has_proc_cpuinfo)]
pub use linux::LinuxProbe;
#[cfg(has_sysctlbyname)]
pub use darwin::DarwinProbe;
#[cfg(windows)]
pub use windows::WindowsProbe;

// ── Host selection ───────────────────────────────────────────────────────────

#[cfg(windows)]
pub type HostProbe = WindowsProbe;

#[cfg(has_proc_cpuinfo)]
pub type HostProbe = LinuxProbe;

#[cfg(has_sysctlbyname)]
pub type HostProbe = DarwinProbe;

#[cfg(all(unix, not(any(has_proc_cpuinfo, has_sysctlbyname))))]
pub type HostProbe = GenericUnixProbe;

#[cfg(not(any(unix, windows)))]
pub type HostProbe = UnknownProbe;

/// Returns the probe for the platform this crate was compiled for.
pub fn host() -> HostProbe {
    HostProbe::default()
}

// ── Contract ─────────────────────────────────────────────────────────────────

/// The two-operation contract every platform probe fulfils.
///
/// Both counts are total: they never fail and never return 0.
pub trait Probe {
    /// Number of logical processors currently online, at least 1.
    fn logical(&self) -> usize;

    /// Attempts physical-core detection without any fallback.
    fn detect_physical(&self) -> Result<NonZeroUsize>;

    /// Number of physical cores, degrading to [`Probe::logical`] when
    /// [`Probe::detect_physical`] fails.
    fn physical(&self) -> usize {
        match self.detect_physical() {
            Ok(n) => n.get(),
            Err(e) => {
                debug!(
                    target: "corecount::probe",
                    "physical core detection failed ({e}), using logical count"
                );
                self.logical()
            }
        }
    }
}

/// Resolves a logical-count query to its value or to [`FALLBACK_COUNT`].
pub(crate) fn logical_or_fallback(result: Result<NonZeroUsize>) -> usize {
    match result {
        Ok(n) => n.get(),
        Err(e) => {
            debug!(
                target: "corecount::probe",
                "logical core query failed ({e}), using {FALLBACK_COUNT}"
            );
            FALLBACK_COUNT
        }
    }
}

// ── Unknown target ───────────────────────────────────────────────────────────

/// Probe for targets with no platform branch. Both counts are always 1.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UnknownProbe;

impl Probe for UnknownProbe {
    fn logical(&self) -> usize {
        FALLBACK_COUNT
    }

    fn detect_physical(&self) -> Result<NonZeroUsize> {
        Err(ProbeError::QueryUnavailable("no core count source on this target"))
    }

    fn physical(&self) -> usize {
        FALLBACK_COUNT
    }
}
