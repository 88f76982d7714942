//! Structural validation for table documents.

use std::collections::HashMap;

use crate::document::TableDocument;
use crate::triple::parse_triple;

/// A validation issue found in a table document.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Severity: "error" or "warning".
    pub severity: &'static str,
    /// Human-readable description.
    pub message: String,
}

impl ValidationIssue {
    fn error(message: String) -> Self {
        Self {
            severity: "error",
            message,
        }
    }

    fn warning(message: String) -> Self {
        Self {
            severity: "warning",
            message,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == "error"
    }
}

/// Validate a table document.
///
/// Returns `Ok(())` if valid, or `Err(issues)` with every problem found.
pub fn validate_document(doc: &TableDocument) -> Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();
    let mut seen: HashMap<&str, (&str, &str)> = HashMap::new();

    for (platform, archs) in &doc.platforms {
        for (arch, records) in archs {
            // 1. Every pair lists at least one variant
            if records.is_empty() {
                issues.push(ValidationIssue::error(format!(
                    "{platform}/{arch} has no variants"
                )));
            }

            for record in records {
                // 2. Record restates its key path
                if record.platform != *platform {
                    issues.push(ValidationIssue::error(format!(
                        "record '{}' under {platform}/{arch} has platform '{}'",
                        record.triple, record.platform
                    )));
                }
                if record.arch != *arch {
                    issues.push(ValidationIssue::error(format!(
                        "record '{}' under {platform}/{arch} has arch '{}'",
                        record.triple, record.arch
                    )));
                }

                // 3. Fields are non-empty and free of control characters
                for (field, value) in record.fields() {
                    if value.is_empty() {
                        issues.push(ValidationIssue::error(format!(
                            "record '{}' under {platform}/{arch} has an empty {field}",
                            record.triple
                        )));
                    } else if value.chars().any(char::is_control) {
                        issues.push(ValidationIssue::error(format!(
                            "record '{}' under {platform}/{arch}: {field} {value:?} contains control characters",
                            record.triple
                        )));
                    }
                }

                // 4. Triples are unique across the document
                let key_path = (platform.as_str(), arch.as_str());
                if let Some((p, a)) = seen.insert(record.triple.as_str(), key_path) {
                    issues.push(ValidationIssue::error(format!(
                        "duplicate triple '{}' under {p}/{a} and {platform}/{arch}",
                        record.triple
                    )));
                }

                // 5. Record agrees with the derivation rule
                match parse_triple(&record.triple) {
                    Ok(derived) if derived != *record => {
                        issues.push(ValidationIssue::warning(format!(
                            "record '{}' differs from its derived form (expected platformArchABI '{}')",
                            record.triple, derived.platform_arch_abi
                        )));
                    }
                    Ok(_) => {}
                    Err(e) => issues.push(ValidationIssue::error(e.to_string())),
                }
            }
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}
