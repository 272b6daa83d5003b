use std::fs;
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::audit::tools::catalog;
use crate::audit::tools::error::Result;
use crate::audit::tools::io::csv_write;
use crate::audit::tools::io::markdown_read;
use crate::audit::tools::model::{CheckRow, OutputRow, ReportSummary, Status};

/// Conventional location of the hand-maintained checklist document, relative
/// to the project root.
pub const DEFAULT_INPUT: &str = "docs/seo/SEO-Audit-Critical.md";
/// Conventional location of the generated results report.
pub const DEFAULT_OUTPUT: &str = "docs/seo/SEO-Audit-Checklist-Results.csv";

/// Generates the results CSV from the checklist document: parses the
/// checklist rows, joins each one with the curated catalog, and writes the
/// report. Returns the counts for the caller's summary line.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output.display())
)]
pub fn generate(input: &Path, output: &Path) -> Result<ReportSummary> {
    let markdown = fs::read_to_string(input)?;
    let checks = markdown_read::parse_checks(&markdown)?;
    info!(check_count = checks.len(), "parsed checklist rows");

    let rows: Vec<OutputRow> = checks.iter().map(resolve).collect();
    let covered = checks
        .iter()
        .filter(|check| catalog::lookup(&check.id).is_some())
        .count();

    csv_write::write_report(output, &rows)?;
    debug!(row_count = rows.len(), covered, "report written");

    Ok(ReportSummary {
        total: rows.len(),
        covered,
    })
}

/// Joins one checklist row with its curated outcome. Checks without a
/// catalog entry stay not-tested with empty notes until explicitly reviewed.
fn resolve(check: &CheckRow) -> OutputRow {
    let (status, notes) = match catalog::lookup(&check.id) {
        Some(result) => (result.status, result.notes.to_string()),
        None => (Status::Nt, String::new()),
    };
    OutputRow {
        id: check.id.clone(),
        priority: check.priority,
        status,
        check: check.check.clone(),
        notes,
    }
}
