//! Mapping the running process to a table key.
//!
//! Only the `(platform, arch)` key is detected. Choosing between the GNU and
//! musl variants returned for that key is left to the caller.

use crate::record::VariantRecord;
use crate::table;

/// Map a Rust `target_os` value to a platform key.
pub fn platform_key(os: &str) -> Option<&'static str> {
    match os {
        "windows" => Some("win32"),
        "linux" => Some("linux"),
        "macos" => Some("darwin"),
        "freebsd" => Some("freebsd"),
        _ => None,
    }
}

/// Map a Rust `target_arch` value to an architecture key.
///
/// MIPS and 64-bit PowerPC keys depend on byte order.
pub fn arch_key(arch: &str, little_endian: bool) -> Option<&'static str> {
    let key = match (arch, little_endian) {
        ("x86_64", _) => "x64",
        ("x86", _) => "ia32",
        ("aarch64", _) => "arm64",
        ("arm", _) => "arm",
        ("mips", false) => "mips",
        ("mips", true) => "mipsel",
        ("mips64", false) => "mips64",
        ("mips64", true) => "mips64el",
        ("powerpc", _) => "powerpc",
        ("powerpc64", false) => "powerpc64",
        ("powerpc64", true) => "powerpc64le",
        ("riscv64", _) => "riscv64gc",
        ("s390x", _) => "s390x",
        ("sparc64", _) => "sparc64",
        _ => return None,
    };
    Some(key)
}

/// Platform key of the running process.
pub fn host_platform() -> Option<&'static str> {
    platform_key(std::env::consts::OS)
}

/// Architecture key of the running process.
pub fn host_arch() -> Option<&'static str> {
    arch_key(std::env::consts::ARCH, cfg!(target_endian = "little"))
}

/// Variants for the running process; empty when the host is not in the table.
pub fn host_variants() -> &'static [VariantRecord] {
    match (host_platform(), host_arch()) {
        (Some(platform), Some(arch)) => table::lookup(platform, arch),
        (platform, arch) => {
            log::debug!(
                "host {}/{} has no table key",
                platform.unwrap_or(std::env::consts::OS),
                arch.unwrap_or(std::env::consts::ARCH)
            );
            &[]
        }
    }
}
