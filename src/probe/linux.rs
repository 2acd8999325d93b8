//! Linux and Android probe.

use std::fs::File;
use std::io::BufReader;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use log::trace;

use super::cpuinfo::CpuinfoMaxima;
use super::{unix, Probe};
use crate::config::CPUINFO_PATH;
use crate::error::{ProbeError, Result};

/// Logical count from `sysconf`, physical count folded out of the
/// per-processor text table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinuxProbe {
    cpuinfo: PathBuf,
}

impl LinuxProbe {
    /// Probe reading the per-processor table from `path` instead of
    /// `/proc/cpuinfo`.
    pub fn with_cpuinfo(path: impl Into<PathBuf>) -> Self {
        Self { cpuinfo: path.into() }
    }

    pub fn cpuinfo_path(&self) -> &Path {
        &self.cpuinfo
    }
}

impl Default for LinuxProbe {
    fn default() -> Self {
        Self::with_cpuinfo(CPUINFO_PATH)
    }
}

impl Probe for LinuxProbe {
    fn logical(&self) -> usize {
        unix::logical_count()
    }

    fn detect_physical(&self) -> Result<NonZeroUsize> {
        let file = File::open(&self.cpuinfo).map_err(|e| {
            ProbeError::SourceUnreadable(format!("{}: {e}", self.cpuinfo.display()))
        })?;
        // The file is closed when the reader drops, whatever the scan found.
        let maxima = CpuinfoMaxima::from_reader(BufReader::new(file));
        trace!(target: "corecount::probe", "{}: {maxima:?}", self.cpuinfo.display());
        maxima.physical_cores()
    }
}
