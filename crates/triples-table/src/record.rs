//! Variant records.
//!
//! A variant record describes one compiler target triple available for a
//! `(platform, arch)` pair, together with the artifact name derived from it.
//! The components are restated on every record so that records stay
//! self-describing once flattened out of the table.

use serde::{Deserialize, Serialize};

/// A record in the compiled-in table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VariantRecord {
    /// Canonical target triple (e.g., "x86_64-unknown-linux-gnu").
    pub triple: &'static str,
    /// Artifact naming identifier (e.g., "linux-x64-gnu").
    #[serde(rename = "platformArchABI")]
    pub platform_arch_abi: &'static str,
    /// Platform key this record lives under.
    pub platform: &'static str,
    /// Architecture key this record lives under.
    pub arch: &'static str,
    /// ABI component of the triple.
    pub abi: &'static str,
}

impl VariantRecord {
    /// Whether the record links against musl.
    pub fn is_musl(&self) -> bool {
        self.abi.starts_with("musl")
    }

    /// Whether the record links against glibc.
    pub fn is_gnu(&self) -> bool {
        self.abi.starts_with("gnu")
    }

    /// Owned copy of this record.
    pub fn to_document(&self) -> RecordDocument {
        RecordDocument::from(self)
    }
}

/// An owned variant record, as read from or written to a table document.
///
/// `abi` is optional because triples without an ABI component
/// (`wasm32-unknown-unknown`, `x86_64-apple-darwin`) derive none.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordDocument {
    pub triple: String,
    #[serde(rename = "platformArchABI")]
    pub platform_arch_abi: String,
    pub platform: String,
    pub arch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abi: Option<String>,
}

impl RecordDocument {
    /// Strip trailing control characters from every field.
    ///
    /// Older generated tables carried a stray `\r` at the end of each string.
    pub fn normalize(&mut self) {
        strip_trailing_control(&mut self.triple);
        strip_trailing_control(&mut self.platform_arch_abi);
        strip_trailing_control(&mut self.platform);
        strip_trailing_control(&mut self.arch);
        if let Some(abi) = self.abi.as_mut() {
            strip_trailing_control(abi);
        }
    }

    /// Field names paired with their values, `abi` included when present.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![
            ("triple", self.triple.as_str()),
            ("platformArchABI", self.platform_arch_abi.as_str()),
            ("platform", self.platform.as_str()),
            ("arch", self.arch.as_str()),
        ];
        if let Some(abi) = &self.abi {
            fields.push(("abi", abi.as_str()));
        }
        fields
    }
}

impl From<&VariantRecord> for RecordDocument {
    fn from(record: &VariantRecord) -> Self {
        Self {
            triple: record.triple.into(),
            platform_arch_abi: record.platform_arch_abi.into(),
            platform: record.platform.into(),
            arch: record.arch.into(),
            abi: Some(record.abi.into()),
        }
    }
}

fn strip_trailing_control(value: &mut String) {
    let len = value.trim_end_matches(|c: char| c.is_control()).len();
    value.truncate(len);
}

#[cfg(test)]
mod tests {
    use super::*;

    const MUSL: VariantRecord = VariantRecord {
        triple: "x86_64-unknown-linux-musl",
        platform_arch_abi: "linux-x64-musl",
        platform: "linux",
        arch: "x64",
        abi: "musl",
    };

    #[test]
    fn libc_family() {
        assert!(MUSL.is_musl());
        assert!(!MUSL.is_gnu());
    }

    #[test]
    fn serializes_with_exterior_field_names() {
        let json = serde_json::to_value(MUSL).unwrap();
        assert_eq!(json["platformArchABI"], "linux-x64-musl");
        assert_eq!(json["triple"], "x86_64-unknown-linux-musl");
        assert_eq!(json["abi"], "musl");
    }

    #[test]
    fn owned_copy_matches() {
        let doc = MUSL.to_document();
        assert_eq!(doc.triple, MUSL.triple);
        assert_eq!(doc.platform_arch_abi, MUSL.platform_arch_abi);
        assert_eq!(doc.abi.as_deref(), Some("musl"));
    }

    #[test]
    fn normalize_strips_carriage_returns() {
        let mut doc = RecordDocument {
            triple: "aarch64-pc-windows-msvc\r".into(),
            platform_arch_abi: "win32-arm64-msvc\r".into(),
            platform: "win32\r".into(),
            arch: "arm64\r\n".into(),
            abi: Some("msvc\r".into()),
        };
        doc.normalize();
        assert_eq!(doc.triple, "aarch64-pc-windows-msvc");
        assert_eq!(doc.platform_arch_abi, "win32-arm64-msvc");
        assert_eq!(doc.platform, "win32");
        assert_eq!(doc.arch, "arm64");
        assert_eq!(doc.abi.as_deref(), Some("msvc"));
    }

    #[test]
    fn missing_abi_deserializes_as_none() {
        let doc: RecordDocument = serde_json::from_str(
            r#"{"triple":"x86_64-apple-darwin","platformArchABI":"darwin-x64","platform":"darwin","arch":"x64"}"#,
        )
        .unwrap();
        assert!(doc.abi.is_none());
        assert_eq!(doc.fields().len(), 4);
    }
}
