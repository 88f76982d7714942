//! `triples parse`: derive record fields from a raw target triple.

use anyhow::{Context, Result};
use triples_table::{parse_triple, table, RecordDocument};

use crate::Format;

/// Print the fields derived from `triple`, and whether the table carries it.
pub fn parse(triple: &str, format: Format) -> Result<()> {
    print!("{}", render(triple, format)?);
    Ok(())
}

pub(crate) fn render(triple: &str, format: Format) -> Result<String> {
    let record = parse_triple(triple).with_context(|| format!("cannot parse '{triple}'"))?;
    let out = match format {
        Format::Json => format!("{}\n", serde_json::to_string_pretty(&record)?),
        Format::Text => render_text(&record),
    };
    Ok(out)
}

fn render_text(record: &RecordDocument) -> String {
    let in_table = if table::find_triple(&record.triple).is_some() {
        "yes"
    } else {
        "no"
    };
    format!(
        "triple:          {}\n\
         platform:        {}\n\
         arch:            {}\n\
         abi:             {}\n\
         platformArchABI: {}\n\
         in table:        {in_table}\n",
        record.triple,
        record.platform,
        record.arch,
        record.abi.as_deref().unwrap_or("-"),
        record.platform_arch_abi,
    )
}
