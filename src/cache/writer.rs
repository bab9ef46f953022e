use super::BrTable;
use crate::branching::BrRecord;
use crate::error::{HvtError, HvtResult};
use std::fs;
use std::path::Path;
use tracing::info;

/// Writes `table` to `path` as CSV, creating parent directories.
///
/// Every cell is narrowed to `f32` and written in its shortest round-trip
/// form; readers must expect that precision.
pub fn store(table: &BrTable, path: &Path) -> HvtResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    if let Some(row) = table.rows.iter().find(|r| r.particle != table.particle) {
        return Err(HvtError::Validation(format!(
            "{} row in a {} table (M0={}, gf={}, gh={})",
            row.particle, table.particle, row.mass, row.gf, row.gh
        )));
    }

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(BrRecord::header(table.particle))?;
    for row in &table.rows {
        wtr.write_record(row.values().iter().map(|v| (*v as f32).to_string()))?;
    }
    wtr.flush()?;

    info!("Created {}", path.display());
    Ok(())
}
