//! Stride walk over a processor relationship list.
//!
//! Windows reports topology as a flat array of fixed-size records, one per
//! resource (processor core, NUMA node, cache, package). The walk itself is
//! platform-neutral so it can be exercised on every target.

/// One fixed-size entry of a processor relationship list.
pub trait RelationshipRecord {
    /// `true` when the entry describes one physical processor core.
    fn is_processor_core(&self) -> bool;
}

/// Counts the records tagged as processor cores.
pub fn count_processor_cores<R: RelationshipRecord>(records: &[R]) -> usize {
    records.iter().filter(|r| r.is_processor_core()).count()
}

/// Number of whole records needed to hold `byte_len` bytes.
pub fn record_capacity(byte_len: usize, record_size: usize) -> usize {
    if record_size == 0 {
        return 0;
    }
    byte_len.div_ceil(record_size)
}

/// Byte length of `capacity` records as the 32-bit length the OS call takes,
/// or `None` when it does not fit.
pub fn buffer_len(capacity: usize, record_size: usize) -> Option<u32> {
    capacity
        .checked_mul(record_size)
        .and_then(|bytes| u32::try_from(bytes).ok())
}
