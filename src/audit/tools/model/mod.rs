use serde::{Deserialize, Serialize};

/// Severity tier assigned to a checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    /// Critical: failing the check harms indexation or rankings directly.
    P0,
    /// Important: failing the check degrades quality but is survivable.
    P1,
}

impl Priority {
    /// Maps a priority table cell to a tier. Any other cell content makes the
    /// surrounding line a non-row.
    pub fn from_cell(cell: &str) -> Option<Self> {
        match cell {
            "P0" => Some(Priority::P0),
            "P1" => Some(Priority::P1),
            _ => None,
        }
    }
}

/// Audit outcome recorded for a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// Verified OK in a local prod run or clear by code inspection.
    Pass,
    /// Verified not meeting the checklist.
    Fail,
    /// Not applicable to this deployment by design.
    Na,
    /// Not tested, or requires external tooling or a production environment.
    Nt,
    /// Partially verified; needs a broader crawl or depends on configuration.
    Partial,
}

/// A single checklist item extracted from the audit document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRow {
    /// Stable check identifier, e.g. `C-001`.
    pub id: String,
    /// Human-readable description of the criterion.
    pub check: String,
    /// Severity tier declared in the document.
    pub priority: Priority,
}

/// One data row of the generated results report. Field order fixes the CSV
/// column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    pub id: String,
    pub priority: Priority,
    pub status: Status,
    pub check: String,
    pub notes: String,
}

/// Row counts reported after a successful run: every parsed check, and the
/// subset that had an explicit catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    pub total: usize,
    pub covered: usize,
}
