//! Fold over the Linux per-processor text table (`/proc/cpuinfo`).
//!
//! The table has one block per logical processor. Only two fields matter:
//!
//! ```text
//! physical id     : 0
//! core id         : 1
//! ```
//!
//! The fold keeps the running maximum of each across the whole file (block
//! boundaries are not tracked) and derives the physical core count as
//! `(max core id + 1) * (max physical id + 1)`.
//!
//! That product assumes every `(physical id, core id)` slot is populated and
//! that all packages have the same core layout. On asymmetric multi-socket
//! machines it overcounts. The formula is kept as-is so counts stay
//! comparable with other tools using it; do not replace it with a unique-pair
//! count without sign-off.

use std::io::BufRead;
use std::num::NonZeroUsize;

use crate::config::{CORE_ID_FIELD, PHYSICAL_ID_FIELD};
use crate::error::{ProbeError, Result};

/// Running maxima of the `core id` and `physical id` fields.
///
/// `None` means the field was never observed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CpuinfoMaxima {
    pub max_core_id: Option<u64>,
    pub max_physical_id: Option<u64>,
}

impl CpuinfoMaxima {
    /// Scans every line of `reader`.
    ///
    /// Lines that are not UTF-8 are skipped like any other unrelated line.
    /// An I/O error ends the scan; the maxima gathered up to that point are
    /// kept.
    pub fn from_reader<R: BufRead>(reader: R) -> Self {
        reader
            .split(b'\n')
            .map_while(|line| line.ok())
            .fold(Self::default(), |acc, line| match std::str::from_utf8(&line) {
                Ok(line) => acc.observe(line),
                Err(_) => acc,
            })
    }

    /// Folds one line into the maxima. Unrelated lines and lines whose value
    /// is not an unsigned integer leave the state unchanged.
    pub fn observe(mut self, line: &str) -> Self {
        if let Some(id) = field_value(line, CORE_ID_FIELD) {
            self.max_core_id = self.max_core_id.max(Some(id));
        } else if let Some(id) = field_value(line, PHYSICAL_ID_FIELD) {
            self.max_physical_id = self.max_physical_id.max(Some(id));
        }
        self
    }

    /// `(max core id + 1) * (max physical id + 1)`, when both were observed.
    pub fn physical_cores(&self) -> Result<NonZeroUsize> {
        let (Some(core), Some(physical)) = (self.max_core_id, self.max_physical_id) else {
            return Err(ProbeError::DataUnparseable(
                "no core id / physical id fields in cpuinfo",
            ));
        };

        core.checked_add(1)
            .zip(physical.checked_add(1))
            .and_then(|(cores, packages)| cores.checked_mul(packages))
            .and_then(|n| usize::try_from(n).ok())
            .and_then(NonZeroUsize::new)
            .ok_or(ProbeError::DataUnparseable("cpuinfo core id range overflows"))
    }
}

/// Value of `field` on `line` if the line starts with the field name.
fn field_value(line: &str, field: &str) -> Option<u64> {
    let (_, value) = line.strip_prefix(field)?.split_once(':')?;
    value.trim().parse().ok()
}
