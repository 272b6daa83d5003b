use std::fs;
use std::path::Path;

use csv::WriterBuilder;

use crate::audit::tools::error::Result;
use crate::audit::tools::model::OutputRow;

/// Column order of the generated report.
pub const HEADERS: [&str; 5] = ["id", "priority", "status", "check", "notes"];

/// Writes the report rows to the given path, creating missing parent
/// directories and replacing any existing file. The header row is emitted
/// even when there are no data rows.
pub fn write_report(path: &Path, rows: &[OutputRow]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
