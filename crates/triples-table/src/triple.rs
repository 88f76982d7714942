//! Deriving record fields from a raw target triple.
//!
//! This is the rule the compiled-in table follows: the CPU and OS components
//! of the triple are renamed to the platform/arch vocabulary of the packaging
//! tools, and the ABI component is kept verbatim.

use crate::error::{Result, TableError};
use crate::record::RecordDocument;

/// Map a triple's CPU component to an architecture key.
///
/// Unknown CPU names pass through unchanged.
pub fn arch_for_cpu(cpu: &str) -> &str {
    match cpu {
        "x86_64" => "x64",
        "aarch64" => "arm64",
        "i686" => "ia32",
        "armv7" => "arm",
        other => other,
    }
}

/// Map a triple's OS component to a platform key.
///
/// Unknown OS names pass through unchanged.
pub fn platform_for_sys(sys: &str) -> &str {
    match sys {
        "windows" => "win32",
        "darwin" => "darwin",
        "linux" => "linux",
        "freebsd" => "freebsd",
        other => other,
    }
}

/// Build the artifact naming identifier.
pub fn platform_arch_abi(platform: &str, arch: &str, abi: Option<&str>) -> String {
    match abi {
        Some(abi) => format!("{platform}-{arch}-{abi}"),
        None => format!("{platform}-{arch}"),
    }
}

/// Derive a full record from a target triple.
///
/// Accepts `cpu-vendor-sys-abi`, `cpu-vendor-sys` and `cpu-sys` forms.
/// Trailing whitespace and control characters are ignored.
pub fn parse_triple(raw: &str) -> Result<RecordDocument> {
    let triple = raw
        .trim_end_matches(|c: char| c.is_control() || c.is_whitespace())
        .trim_start();
    let invalid = |detail: String| TableError::InvalidTriple {
        triple: raw.to_string(),
        detail,
    };

    if triple.is_empty() {
        return Err(invalid("empty triple".into()));
    }

    let parts: Vec<&str> = triple.split('-').collect();
    if parts.iter().any(|p| p.is_empty()) {
        return Err(invalid("empty component".into()));
    }

    let (cpu, sys, abi) = match parts.as_slice() {
        [cpu, _vendor, sys, abi] => (*cpu, *sys, Some(*abi)),
        [cpu, _vendor, sys] => (*cpu, *sys, None),
        [cpu, sys] => (*cpu, *sys, None),
        _ => {
            return Err(invalid(format!(
                "expected 2 to 4 components, found {}",
                parts.len()
            )))
        }
    };

    let platform = platform_for_sys(sys);
    let arch = arch_for_cpu(cpu);

    Ok(RecordDocument {
        triple: triple.to_string(),
        platform_arch_abi: platform_arch_abi(platform, arch, abi),
        platform: platform.to_string(),
        arch: arch.to_string(),
        abi: abi.map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table;

    #[test]
    fn table_follows_derivation_rule() {
        for record in table::records() {
            let derived = parse_triple(record.triple).unwrap();
            assert_eq!(derived, record.to_document(), "{}", record.triple);
        }
    }

    #[test]
    fn four_components() {
        let r = parse_triple("aarch64-pc-windows-msvc").unwrap();
        assert_eq!(r.platform, "win32");
        assert_eq!(r.arch, "arm64");
        assert_eq!(r.abi.as_deref(), Some("msvc"));
        assert_eq!(r.platform_arch_abi, "win32-arm64-msvc");
    }

    #[test]
    fn three_components_have_no_abi() {
        let r = parse_triple("x86_64-apple-darwin").unwrap();
        assert_eq!(r.platform, "darwin");
        assert_eq!(r.arch, "x64");
        assert!(r.abi.is_none());
        assert_eq!(r.platform_arch_abi, "darwin-x64");
    }

    #[test]
    fn two_components() {
        let r = parse_triple("wasm32-wasi").unwrap();
        assert_eq!(r.platform, "wasi");
        assert_eq!(r.arch, "wasm32");
        assert_eq!(r.platform_arch_abi, "wasi-wasm32");
    }

    #[test]
    fn armv7_folds_into_arm() {
        let r = parse_triple("armv7-unknown-linux-musleabihf").unwrap();
        assert_eq!(r.arch, "arm");
        assert_eq!(r.platform_arch_abi, "linux-arm-musleabihf");
    }

    #[test]
    fn unknown_cpu_passes_through() {
        let r = parse_triple("mips64el-unknown-linux-gnuabi64").unwrap();
        assert_eq!(r.arch, "mips64el");
        assert_eq!(r.platform_arch_abi, "linux-mips64el-gnuabi64");
    }

    #[test]
    fn trailing_carriage_return_ignored() {
        let r = parse_triple("x86_64-unknown-linux-gnu\r").unwrap();
        assert_eq!(r.triple, "x86_64-unknown-linux-gnu");
        assert_eq!(r.abi.as_deref(), Some("gnu"));
    }

    #[test]
    fn rejects_malformed() {
        for raw in ["", "\r", "x86_64", "a-b-c-d-e", "x86_64--linux-gnu", "-linux"] {
            let err = parse_triple(raw).unwrap_err();
            assert!(matches!(err, TableError::InvalidTriple { .. }), "{raw:?}");
        }
    }
}
