//! CSV report writers
//!
//! Both tables are written with a UTF-8 BOM so spreadsheet tools pick up
//! the encoding without guessing.

use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::engine::{DetailRow, SummaryRow};

const UTF8_BOM: &str = "\u{feff}";

fn bom_writer(path: &Path) -> Result<csv::Writer<File>> {
    let mut file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    file.write_all(UTF8_BOM.as_bytes())
        .with_context(|| format!("failed to write BOM to {}", path.display()))?;
    Ok(csv::Writer::from_writer(file))
}

/// Write the one-row-per-URL summary table.
pub fn write_summary_csv(path: &Path, rows: &[SummaryRow]) -> Result<()> {
    let mut writer = bom_writer(path)?;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("failed to write summary row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    info!("wrote {} summary rows to {}", rows.len(), path.display());
    Ok(())
}

/// Write the per-URL detail table with full evidence notes.
pub fn write_detail_csv(path: &Path, rows: &[DetailRow]) -> Result<()> {
    let mut writer = bom_writer(path)?;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("failed to write detail row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    info!("wrote {} detail rows to {}", rows.len(), path.display());
    Ok(())
}
