//! Logical-core query shared by every Unix target, and the probe for Unix
//! targets without a physical-core source.

use std::num::NonZeroUsize;

use log::trace;

use super::{logical_or_fallback, Probe};
use crate::error::{ProbeError, Result};

/// `sysconf(_SC_NPROCESSORS_ONLN)`: processors currently online.
pub(crate) fn online_processors() -> Result<NonZeroUsize> {
    // SAFETY: sysconf has no memory side effects.
    let n = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) };
    trace!(target: "corecount::probe", "sysconf(_SC_NPROCESSORS_ONLN) = {n}");
    if n < 0 {
        return Err(ProbeError::QueryUnavailable("sysconf(_SC_NPROCESSORS_ONLN)"));
    }
    usize::try_from(n)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or(ProbeError::DataUnparseable("sysconf reported no online processors"))
}

pub(crate) fn logical_count() -> usize {
    logical_or_fallback(online_processors())
}

/// Probe for Unix targets (OpenBSD, Solaris, Haiku, …) that expose no
/// physical-core information. The physical count is the logical count.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenericUnixProbe;

impl Probe for GenericUnixProbe {
    fn logical(&self) -> usize {
        logical_count()
    }

    fn detect_physical(&self) -> Result<NonZeroUsize> {
        Err(ProbeError::QueryUnavailable("no physical core source on this target"))
    }

    fn physical(&self) -> usize {
        self.logical()
    }
}
