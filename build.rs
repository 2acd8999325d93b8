// build.rs: Platform capability detection for corecount.
//
// Emits `cargo:rustc-cfg=has_proc_cpuinfo` on targets exposing the per-processor
// text table at /proc/cpuinfo, and `cargo:rustc-cfg=has_sysctlbyname` on targets
// whose libc provides sysctlbyname() (used to read `hw.physicalcpu`).
fn main() {
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let target_vendor = std::env::var("CARGO_CFG_TARGET_VENDOR").unwrap_or_default();

    let proc_cpuinfo_targets = ["linux", "android"];
    if proc_cpuinfo_targets.contains(&target_os.as_str()) {
        println!("cargo:rustc-cfg=has_proc_cpuinfo");
    }

    // OpenBSD has no sysctlbyname(); it takes the generic Unix path.
    let sysctlbyname_targets = ["freebsd", "dragonfly", "netbsd"];
    if target_vendor == "apple" || sysctlbyname_targets.contains(&target_os.as_str()) {
        println!("cargo:rustc-cfg=has_sysctlbyname");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
