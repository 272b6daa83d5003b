use regex::Regex;

use crate::audit::tools::error::Result;
use crate::audit::tools::model::{CheckRow, Priority};

/// Shape of a checklist table row: an id cell, a description cell, and a
/// priority cell. Trailing cells on the line (status glyph, notes) are
/// ignored. The match is anchored; a line that does not literally begin with
/// `|` is not a row.
const CHECK_ROW_PATTERN: &str = r"^\|\s*([A-Z]+-\d{3})\s*\|\s*(.*?)\s*\|\s*(P0|P1)\s*\|";

/// Extracts checklist rows from the audit markdown document, in document
/// order. Header, separator, and prose lines are skipped silently; an empty
/// document yields an empty vector. Repeated ids are kept as-is.
pub fn parse_checks(markdown: &str) -> Result<Vec<CheckRow>> {
    let pattern = Regex::new(CHECK_ROW_PATTERN)?;
    let mut checks = Vec::new();
    for line in markdown.lines() {
        if let Some(check) = parse_line(&pattern, line) {
            checks.push(check);
        }
    }
    Ok(checks)
}

fn parse_line(pattern: &Regex, line: &str) -> Option<CheckRow> {
    let captures = pattern.captures(line)?;
    let priority = Priority::from_cell(captures.get(3)?.as_str())?;
    Some(CheckRow {
        id: captures.get(1)?.as_str().to_string(),
        check: captures.get(2)?.as_str().trim().to_string(),
        priority,
    })
}
