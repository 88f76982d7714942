//! Serialized table documents.
//!
//! A table document is the exterior shape of the table:
//!
//! ```json
//! { "linux": { "x64": [ { "triple": "...", "platformArchABI": "...", ... } ] } }
//! ```
//!
//! Documents can be read and written as JSON or TOML. Every string read from
//! a document is normalized: trailing control characters are stripped.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};
use crate::record::RecordDocument;

/// Owned `platform -> arch -> [record]` mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableDocument {
    pub platforms: BTreeMap<String, BTreeMap<String, Vec<RecordDocument>>>,
}

impl TableDocument {
    /// Append a record under its own `platform`/`arch` keys.
    pub fn push(&mut self, record: RecordDocument) {
        self.platforms
            .entry(record.platform.clone())
            .or_default()
            .entry(record.arch.clone())
            .or_default()
            .push(record);
    }

    /// Variants stored under `(platform, arch)`, or an empty slice.
    pub fn variants(&self, platform: &str, arch: &str) -> &[RecordDocument] {
        self.platforms
            .get(platform)
            .and_then(|archs| archs.get(arch))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every record with the key path it is stored under.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &RecordDocument)> {
        self.platforms.iter().flat_map(|(platform, archs)| {
            archs.iter().flat_map(move |(arch, records)| {
                records
                    .iter()
                    .map(move |r| (platform.as_str(), arch.as_str(), r))
            })
        })
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.platforms
            .values()
            .flat_map(BTreeMap::values)
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Strip trailing control characters from every key and record field.
    pub fn normalize(&mut self) {
        let platforms = std::mem::take(&mut self.platforms);
        for (platform, archs) in platforms {
            let platform = trim_control(&platform).to_string();
            let target = self.platforms.entry(platform).or_default();
            for (arch, mut records) in archs {
                for record in &mut records {
                    record.normalize();
                }
                target
                    .entry(trim_control(&arch).to_string())
                    .or_default()
                    .extend(records);
            }
        }
    }
}

fn trim_control(s: &str) -> &str {
    s.trim_end_matches(|c: char| c.is_control())
}

/// Parse a document from a JSON string.
pub fn from_json(json: &str) -> Result<TableDocument> {
    let mut doc: TableDocument = serde_json::from_str(json)?;
    doc.normalize();
    Ok(doc)
}

/// Parse a document from a TOML string.
pub fn from_toml(toml_str: &str) -> Result<TableDocument> {
    let mut doc: TableDocument = toml::from_str(toml_str)?;
    doc.normalize();
    Ok(doc)
}

/// Serialize a document to pretty JSON.
pub fn to_json_pretty(doc: &TableDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Serialize a document to pretty TOML.
pub fn to_toml(doc: &TableDocument) -> Result<String> {
    Ok(toml::to_string_pretty(doc)?)
}

/// Load a document from a `.json` or `.toml` file.
pub fn load_document(path: &Path) -> Result<TableDocument> {
    if !path.exists() {
        return Err(TableError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let format = path.extension().and_then(|e| e.to_str());
    match format {
        Some("json") => {
            let content = std::fs::read_to_string(path)?;
            from_json(&content)
        }
        Some("toml") => {
            let content = std::fs::read_to_string(path)?;
            from_toml(&content)
        }
        _ => Err(TableError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}
