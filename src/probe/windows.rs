//! Windows probe.

use std::mem;
use std::num::NonZeroUsize;
use std::ptr;

use log::trace;
use winapi::shared::minwindef::DWORD;
use winapi::um::sysinfoapi::{GetLogicalProcessorInformation, GetSystemInfo, SYSTEM_INFO};
use winapi::um::winnt::{RelationProcessorCore, SYSTEM_LOGICAL_PROCESSOR_INFORMATION};

use super::relationship::{
    buffer_len, count_processor_cores, record_capacity, RelationshipRecord,
};
use super::{logical_or_fallback, Probe};
use crate::error::{ProbeError, Result};

impl RelationshipRecord for SYSTEM_LOGICAL_PROCESSOR_INFORMATION {
    fn is_processor_core(&self) -> bool {
        self.Relationship == RelationProcessorCore
    }
}

/// Logical count from `GetSystemInfo`, physical count from the
/// `RelationProcessorCore` entries of `GetLogicalProcessorInformation`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WindowsProbe;

impl WindowsProbe {
    fn system_processors(&self) -> Result<NonZeroUsize> {
        // SAFETY: SYSTEM_INFO is plain data; GetSystemInfo fills every field.
        let mut info: SYSTEM_INFO = unsafe { mem::zeroed() };
        // SAFETY: `info` is a valid, writable SYSTEM_INFO for the whole call.
        unsafe { GetSystemInfo(&mut info) };
        trace!(target: "corecount::probe", "dwNumberOfProcessors = {}", info.dwNumberOfProcessors);
        NonZeroUsize::new(info.dwNumberOfProcessors as usize)
            .ok_or(ProbeError::DataUnparseable("GetSystemInfo reported no processors"))
    }
}

impl Probe for WindowsProbe {
    fn logical(&self) -> usize {
        logical_or_fallback(self.system_processors())
    }

    fn detect_physical(&self) -> Result<NonZeroUsize> {
        let record_size = mem::size_of::<SYSTEM_LOGICAL_PROCESSOR_INFORMATION>();

        // First call with no buffer only reports the byte length needed.
        let mut len: DWORD = 0;
        // SAFETY: a null buffer with `len == 0` only asks for the size; the
        // call writes nothing but `len`.
        unsafe { GetLogicalProcessorInformation(ptr::null_mut(), &mut len) };
        if len == 0 {
            return Err(ProbeError::QueryUnavailable(
                "GetLogicalProcessorInformation reported no size",
            ));
        }

        let capacity = record_capacity(len as usize, record_size);
        let mut records: Vec<SYSTEM_LOGICAL_PROCESSOR_INFORMATION> = Vec::new();
        records
            .try_reserve_exact(capacity)
            .map_err(|_| ProbeError::AllocationFailed(len as usize))?;

        let mut len: DWORD = buffer_len(capacity, record_size)
            .ok_or(ProbeError::AllocationFailed(len as usize))?;
        // SAFETY: the buffer holds `capacity` records, which is `len` bytes.
        let ok = unsafe { GetLogicalProcessorInformation(records.as_mut_ptr(), &mut len) };
        if ok == 0 {
            return Err(ProbeError::QueryUnavailable("GetLogicalProcessorInformation"));
        }
        // SAFETY: on success `len` bytes of whole records were written.
        unsafe { records.set_len((len as usize / record_size).min(capacity)) };

        let cores = count_processor_cores(&records);
        trace!(
            target: "corecount::probe",
            "{cores} processor cores among {} relationship records",
            records.len()
        );
        NonZeroUsize::new(cores)
            .ok_or(ProbeError::DataUnparseable("no processor core relationship records"))
    }
}
