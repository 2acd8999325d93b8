// config.rs: Compile-time configuration constants.
//
// Nothing here is read from the environment or from disk: core counts are
// recomputed from live OS state on every call, so the only knobs are the
// OS interfaces the probes consult and the value they degrade to.
//
// Target capability detection (which probe is compiled in) is done by
// build.rs via `#[cfg(has_proc_cpuinfo)]` and `#[cfg(has_sysctlbyname)]`.

// Per-logical-processor text table read by the Linux physical-core probe.
pub const CPUINFO_PATH: &str = "/proc/cpuinfo";

// Field prefix whose value is the core index within one package.
pub const CORE_ID_FIELD: &str = "core id";

// Field prefix whose value is the package (socket) index.
pub const PHYSICAL_ID_FIELD: &str = "physical id";

// sysctl read by the macOS/BSD physical-core probe, NUL-terminated for FFI.
pub const PHYSICAL_CPU_SYSCTL: &[u8] = b"hw.physicalcpu\0";

// Value every probe degrades to when nothing better is known.
// Also the answer on targets with no platform branch at all.
pub const FALLBACK_COUNT: usize = 1;
