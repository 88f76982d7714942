//! `triples list`, `lookup`, `host` and `export`: reading the built-in table.

use anyhow::{bail, Result};
use triples_table::{document, host as host_key, table, VariantRecord};

use crate::{DocumentFormat, Format};

/// List platforms, or the architectures of one platform.
pub fn list(platform: Option<&str>) -> Result<()> {
    match platform {
        None => {
            println!("Platforms:");
            println!();
            for entry in table::platforms() {
                println!("  {:<10} {} architectures", entry.platform, entry.archs.len());
            }
            println!();
            println!("Use 'triples list --platform <name>' for architectures.");
        }
        Some(name) => {
            let archs = table::architectures_for(name);
            if archs.is_empty() {
                bail!("unknown platform: '{name}'. Use 'triples list' to see available platforms.");
            }
            println!("Architectures for {name}:");
            println!();
            for arch in archs {
                let count = table::lookup(name, arch).len();
                println!("  {arch:<14} {count} variant(s)");
            }
        }
    }
    Ok(())
}

/// Print the variants for a pair. An absent pair is reported, not an error.
pub fn lookup(platform: &str, arch: &str, format: Format) -> Result<()> {
    let variants = table::lookup(platform, arch);
    print!("{}", render_variants(platform, arch, variants, format)?);
    Ok(())
}

/// Print the detected host key and its variants.
pub fn host() -> Result<()> {
    let os = std::env::consts::OS;
    let arch = std::env::consts::ARCH;
    match (host_key::host_platform(), host_key::host_arch()) {
        (Some(platform), Some(arch_key)) => {
            println!("Host: {os}/{arch} -> {platform}/{arch_key}");
            println!();
            print!(
                "{}",
                render_variants(platform, arch_key, host_key::host_variants(), Format::Text)?
            );
        }
        _ => println!("Host: {os}/{arch} has no table key"),
    }
    Ok(())
}

/// Write the whole table to stdout.
pub fn export(format: DocumentFormat) -> Result<()> {
    println!("{}", render_document(format)?);
    Ok(())
}

pub(crate) fn render_document(format: DocumentFormat) -> Result<String> {
    let doc = table::to_document();
    let out = match format {
        DocumentFormat::Json => document::to_json_pretty(&doc)?,
        DocumentFormat::Toml => document::to_toml(&doc)?,
    };
    Ok(out)
}

pub(crate) fn render_variants(
    platform: &str,
    arch: &str,
    variants: &[VariantRecord],
    format: Format,
) -> Result<String> {
    let mut out = String::new();
    match format {
        Format::Json => {
            out.push_str(&serde_json::to_string_pretty(variants)?);
            out.push('\n');
        }
        Format::Text if variants.is_empty() => {
            out.push_str(&format!("No variants for {platform}/{arch}.\n"));
        }
        Format::Text => {
            out.push_str(&format!("=== {platform}/{arch} ===\n"));
            for v in variants {
                out.push_str(&format!("  {:<38} {}\n", v.triple, v.platform_arch_abi));
            }
        }
    }
    Ok(out)
}
