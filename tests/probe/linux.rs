// Tests for the Linux probe (src/probe/linux.rs) against synthetic tables.
//
//   - a readable table is folded into a physical count
//   - a table without id fields falls back to the logical count
//   - an unopenable table falls back to exactly the logical count

#![cfg(has_proc_cpuinfo)]

use std::fs;

use corecount::probe::{LinuxProbe, Probe};
use corecount::ProbeError;
use tempfile::TempDir;

fn probe_with_table(contents: &str) -> (TempDir, LinuxProbe) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cpuinfo");
    fs::write(&path, contents).unwrap();
    (dir, LinuxProbe::with_cpuinfo(path))
}

#[test]
fn synthetic_table_yields_physical_count() {
    let (_dir, probe) =
        probe_with_table("physical id : 0\ncore id : 0\nphysical id : 0\ncore id : 1\n");
    assert_eq!(probe.physical(), 2);
}

#[test]
fn two_socket_table_multiplies() {
    let (_dir, probe) =
        probe_with_table("physical id : 0\ncore id : 7\nphysical id : 1\ncore id : 7\n");
    assert_eq!(probe.physical(), 16);
}

#[test]
fn non_utf8_model_name_does_not_hide_later_ids() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cpuinfo");
    fs::write(
        &path,
        b"processor : 0\nmodel name : Caf\xe9 CPU\nphysical id : 0\ncore id : 3\n",
    )
    .unwrap();
    let probe = LinuxProbe::with_cpuinfo(path);
    assert_eq!(probe.detect_physical().unwrap().get(), 4);
}

#[test]
fn table_without_ids_falls_back_to_logical() {
    let (_dir, probe) = probe_with_table("processor : 0\nmodel name : test\n");
    let physical = probe.physical();
    assert!(physical >= 1);
    assert_eq!(physical, probe.logical());
}

#[test]
fn empty_table_falls_back_to_logical() {
    let (_dir, probe) = probe_with_table("");
    assert_eq!(probe.physical(), probe.logical());
}

#[test]
fn missing_table_falls_back_to_logical() {
    let dir = TempDir::new().unwrap();
    let probe = LinuxProbe::with_cpuinfo(dir.path().join("no-such-cpuinfo"));
    assert!(matches!(
        probe.detect_physical(),
        Err(ProbeError::SourceUnreadable(_))
    ));
    assert_eq!(probe.physical(), corecount::logical_count());
}

#[test]
fn directory_as_table_falls_back_to_logical() {
    // Opening succeeds on Linux but reading fails; the scan ends with no ids.
    let dir = TempDir::new().unwrap();
    let probe = LinuxProbe::with_cpuinfo(dir.path());
    assert_eq!(probe.physical(), probe.logical());
}

#[test]
fn host_probe_reads_proc_cpuinfo() {
    let probe = corecount::host();
    assert_eq!(probe.cpuinfo_path(), std::path::Path::new("/proc/cpuinfo"));
    assert!(probe.physical() >= 1);
}
