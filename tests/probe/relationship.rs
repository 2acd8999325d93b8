// Tests for the relationship-record walk (src/probe/relationship.rs) using a
// simulated record list in place of GetLogicalProcessorInformation output.

use corecount::probe::relationship::{count_processor_cores, record_capacity, RelationshipRecord};

// Same shape as the Windows record: a mask, a relationship tag and a union.
#[repr(C)]
#[allow(dead_code)]
#[derive(Clone, Copy)]
struct SimulatedRecord {
    processor_mask: usize,
    relationship: u32,
    payload: [u64; 2],
}

const RELATION_PROCESSOR_CORE: u32 = 0;
const RELATION_NUMA_NODE: u32 = 1;
const RELATION_CACHE: u32 = 2;
const RELATION_PROCESSOR_PACKAGE: u32 = 3;

impl RelationshipRecord for SimulatedRecord {
    fn is_processor_core(&self) -> bool {
        self.relationship == RELATION_PROCESSOR_CORE
    }
}

fn record(relationship: u32) -> SimulatedRecord {
    SimulatedRecord {
        processor_mask: 0b11,
        relationship,
        payload: [0; 2],
    }
}

#[test]
fn three_cores_among_ten_records() {
    let records = [
        record(RELATION_PROCESSOR_PACKAGE),
        record(RELATION_PROCESSOR_CORE),
        record(RELATION_CACHE),
        record(RELATION_CACHE),
        record(RELATION_PROCESSOR_CORE),
        record(RELATION_CACHE),
        record(RELATION_NUMA_NODE),
        record(RELATION_PROCESSOR_CORE),
        record(RELATION_CACHE),
        record(RELATION_CACHE),
    ];
    assert_eq!(records.len(), 10);
    assert_eq!(count_processor_cores(&records), 3);
}

#[test]
fn list_without_cores_counts_zero() {
    let records = [record(RELATION_CACHE), record(RELATION_NUMA_NODE)];
    assert_eq!(count_processor_cores(&records), 0);
}

#[test]
fn capacity_covers_reported_length() {
    let size = std::mem::size_of::<SimulatedRecord>();
    assert_eq!(record_capacity(10 * size, size), 10);
    assert_eq!(record_capacity(10 * size + 1, size), 11);
}

#[cfg(windows)]
#[test]
fn windows_probe_reports_processor_cores() {
    use corecount::probe::{Probe, WindowsProbe};
    assert!(WindowsProbe.physical() >= 1);
}
