//! macOS / iOS / BSD probe.
//!
//! FreeBSD, DragonFly and NetBSD have `sysctlbyname` but no `hw.physicalcpu`;
//! there the query fails and the physical count falls back to the logical one.

use std::mem;
use std::num::NonZeroUsize;
use std::ptr;

use log::trace;

use super::{unix, Probe};
use crate::config::PHYSICAL_CPU_SYSCTL;
use crate::error::{ProbeError, Result};

/// Logical count from `sysconf`, physical count from `hw.physicalcpu`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DarwinProbe;

impl Probe for DarwinProbe {
    fn logical(&self) -> usize {
        unix::logical_count()
    }

    fn detect_physical(&self) -> Result<NonZeroUsize> {
        let mut cpus: libc::c_int = 0;
        let mut cpus_size = mem::size_of_val(&cpus);

        // SAFETY: the name is NUL-terminated and the destination is a c_int
        // whose size is passed alongside it.
        let rc = unsafe {
            libc::sysctlbyname(
                PHYSICAL_CPU_SYSCTL.as_ptr().cast(),
                (&mut cpus as *mut libc::c_int).cast(),
                &mut cpus_size,
                ptr::null_mut::<libc::c_void>(),
                0,
            )
        };
        if rc != 0 {
            return Err(ProbeError::QueryUnavailable("sysctlbyname(hw.physicalcpu)"));
        }
        trace!(target: "corecount::probe", "hw.physicalcpu = {cpus}");

        usize::try_from(cpus)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(ProbeError::DataUnparseable("hw.physicalcpu is not positive"))
    }
}
