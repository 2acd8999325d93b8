//! Probe failure taxonomy.
//!
//! None of these ever reach a caller of [`crate::logical_count`] or
//! [`crate::physical_count`]; the dispatch layer resolves each one to the
//! next value in the fallback chain and logs the reason.

/// Result type returned by individual platform probes.
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Reasons a platform probe could not produce a count.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    /// The system call is absent, disallowed, or reported failure.
    #[error("query unavailable: {0}")]
    QueryUnavailable(&'static str),

    /// The OS answered, but not with a usable positive count.
    #[error("data unparseable: {0}")]
    DataUnparseable(&'static str),

    /// A scratch buffer of the reported size could not be obtained.
    #[error("allocation of {0} bytes failed")]
    AllocationFailed(usize),

    /// The information source could not be opened.
    #[error("source unreadable: {0}")]
    SourceUnreadable(String),
}
