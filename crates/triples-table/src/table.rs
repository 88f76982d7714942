//! Read-only lookup over the compiled-in platform/architecture table.
//!
//! The table is a `static` value: it is built by the compiler, never
//! mutated, and every accessor hands out `'static` borrows, so any number of
//! threads may read it without synchronization.
//!
//! An unknown platform or architecture is not an error. Packaging tools
//! decide for themselves whether an unsupported pair is fatal.

use std::collections::BTreeSet;

use crate::data::PLATFORMS;
use crate::document::TableDocument;
use crate::record::VariantRecord;

/// All variants for one architecture of a platform, in authored order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchEntry {
    pub arch: &'static str,
    pub variants: &'static [VariantRecord],
}

/// All architectures of one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformEntry {
    pub platform: &'static str,
    pub archs: &'static [ArchEntry],
}

impl PlatformEntry {
    /// Look up an architecture of this platform.
    pub fn arch(&self, arch: &str) -> Option<&'static ArchEntry> {
        self.archs.iter().find(|a| a.arch == arch)
    }
}

/// Every platform entry, in authored order.
pub fn platforms() -> &'static [PlatformEntry] {
    PLATFORMS
}

/// Look up a platform entry by name.
pub fn platform(platform: &str) -> Option<&'static PlatformEntry> {
    PLATFORMS.iter().find(|p| p.platform == platform)
}

/// The ordered variants for `(platform, arch)`.
///
/// Returns an empty slice when either key is absent.
pub fn lookup(platform_name: &str, arch: &str) -> &'static [VariantRecord] {
    match platform(platform_name).and_then(|p| p.arch(arch)) {
        Some(entry) => entry.variants,
        None => {
            log::debug!("no variants for platform '{platform_name}' arch '{arch}'");
            &[]
        }
    }
}

/// Every platform name in the table.
pub fn all_platforms() -> BTreeSet<&'static str> {
    PLATFORMS.iter().map(|p| p.platform).collect()
}

/// Every architecture name under `platform`; empty for an unknown platform.
pub fn architectures_for(platform_name: &str) -> BTreeSet<&'static str> {
    match platform(platform_name) {
        Some(entry) => entry.archs.iter().map(|a| a.arch).collect(),
        None => {
            log::debug!("unknown platform '{platform_name}'");
            BTreeSet::new()
        }
    }
}

/// Every record in the table, flattened in authored order.
pub fn records() -> impl Iterator<Item = &'static VariantRecord> {
    PLATFORMS
        .iter()
        .flat_map(|p| p.archs.iter())
        .flat_map(|a| a.variants.iter())
}

/// Reverse lookup by target triple.
pub fn find_triple(triple: &str) -> Option<&'static VariantRecord> {
    records().find(|r| r.triple == triple)
}

/// Every record sharing the artifact name `platform_arch_abi`.
///
/// More than one record can match: `arm` and `armv7` triples publish under
/// the same name.
pub fn find_platform_arch_abi(platform_arch_abi: &str) -> Vec<&'static VariantRecord> {
    records()
        .filter(|r| r.platform_arch_abi == platform_arch_abi)
        .collect()
}

/// An owned copy of the whole table in its exterior nested shape.
pub fn to_document() -> TableDocument {
    let mut doc = TableDocument::default();
    for record in records() {
        doc.push(record.to_document());
    }
    doc
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn abi_names(records: &[VariantRecord]) -> Vec<&'static str> {
        records.iter().map(|r| r.platform_arch_abi).collect()
    }

    #[test]
    fn records_match_key_path() {
        for p in platforms() {
            for a in p.archs {
                assert!(!a.variants.is_empty(), "{}/{} is empty", p.platform, a.arch);
                for r in a.variants {
                    assert_eq!(r.platform, p.platform, "{}", r.triple);
                    assert_eq!(r.arch, a.arch, "{}", r.triple);
                }
            }
        }
    }

    #[test]
    fn triples_are_unique() {
        let mut seen = HashSet::new();
        for r in records() {
            assert!(seen.insert(r.triple), "duplicate triple {}", r.triple);
        }
        assert_eq!(seen.len(), 40);
    }

    #[test]
    fn strings_are_clean() {
        for r in records() {
            for value in [r.triple, r.platform_arch_abi, r.platform, r.arch, r.abi] {
                assert!(!value.is_empty(), "empty field on {}", r.triple);
                assert!(
                    !value.chars().any(|c| c.is_control()),
                    "control character in {value:?}"
                );
            }
        }
    }

    #[test]
    fn linux_x64() {
        let variants = lookup("linux", "x64");
        assert_eq!(
            abi_names(variants),
            ["linux-x64-gnu", "linux-x64-gnux32", "linux-x64-musl"]
        );
    }

    #[test]
    fn win32_arm64() {
        let variants = lookup("win32", "arm64");
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].triple, "aarch64-pc-windows-msvc");
        assert_eq!(variants[0].platform_arch_abi, "win32-arm64-msvc");
    }

    #[test]
    fn linux_arm_has_both_spellings() {
        let variants = lookup("linux", "arm");
        assert_eq!(variants.len(), 8);
        assert!(variants.iter().all(|r| r.arch == "arm"));
        assert_eq!(variants.iter().filter(|r| r.triple.starts_with("armv7-")).count(), 4);
        // plain spellings come first
        assert_eq!(variants[0].triple, "arm-unknown-linux-gnueabi");
        assert_eq!(variants[4].triple, "armv7-unknown-linux-gnueabi");
    }

    #[test]
    fn absent_pairs_are_empty() {
        assert!(lookup("darwin", "x64").is_empty());
        assert!(lookup("linux", "wasm32").is_empty());
        assert!(lookup("", "").is_empty());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(lookup("Linux", "x64").is_empty());
    }

    #[test]
    fn enumerate_platforms() {
        let platforms = all_platforms();
        assert_eq!(platforms.into_iter().collect::<Vec<_>>(), ["linux", "win32"]);
    }

    #[test]
    fn enumerate_architectures() {
        let win = architectures_for("win32");
        assert_eq!(win.into_iter().collect::<Vec<_>>(), ["arm64", "i586", "ia32", "x64"]);

        let linux = architectures_for("linux");
        assert_eq!(linux.len(), 17);
        assert!(linux.contains("riscv64gc"));
        assert!(linux.contains("s390x"));

        assert!(architectures_for("freebsd").is_empty());
    }

    #[test]
    fn reverse_lookup() {
        let r = find_triple("x86_64-unknown-linux-gnux32").unwrap();
        assert_eq!(r.platform_arch_abi, "linux-x64-gnux32");
        assert!(find_triple("x86_64-apple-darwin").is_none());
    }

    #[test]
    fn shared_artifact_names() {
        let shared = find_platform_arch_abi("linux-arm-gnueabihf");
        let triples: Vec<_> = shared.iter().map(|r| r.triple).collect();
        assert_eq!(
            triples,
            ["arm-unknown-linux-gnueabihf", "armv7-unknown-linux-gnueabihf"]
        );
        assert_eq!(find_platform_arch_abi("win32-x64-msvc").len(), 1);
    }

    #[test]
    fn document_holds_every_record() {
        let doc = to_document();
        assert_eq!(doc.len(), records().count());
        assert_eq!(doc.variants("linux", "x64").len(), 3);
        assert_eq!(doc.variants("linux", "arm")[4].triple, "armv7-unknown-linux-gnueabi");
    }

    #[test]
    fn concurrent_readers() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| lookup("linux", "arm64").len()))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), 2);
        }
    }
}
