//! `triples validate`: check a JSON or TOML table document.

use std::path::Path;

use anyhow::{bail, Context, Result};
use triples_table::{document, validate_document, ValidationIssue};

/// Load and validate the document at `path`, printing every issue.
///
/// Fails when any error-severity issue is found; warnings alone pass.
pub fn run(path: &Path) -> Result<()> {
    let (records, issues) = check(path)?;
    for issue in &issues {
        println!("  {}: {}", issue.severity, issue.message);
    }

    let errors = issues.iter().filter(|i| i.is_error()).count();
    if errors > 0 {
        bail!("{}: {errors} error(s), {} warning(s)", path.display(), issues.len() - errors);
    }
    println!(
        "{}: {records} records valid ({} warning(s))",
        path.display(),
        issues.len()
    );
    Ok(())
}

/// Record count and validation issues of the document at `path`.
pub(crate) fn check(path: &Path) -> Result<(usize, Vec<ValidationIssue>)> {
    let doc = document::load_document(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    log::info!("loaded {} records from {}", doc.len(), path.display());
    let issues = validate_document(&doc).err().unwrap_or_default();
    Ok((doc.len(), issues))
}
