use std::fs;

use audit_tools::catalog;
use audit_tools::io::csv_write;
use audit_tools::io::markdown_read;
use audit_tools::model::{OutputRow, Priority, Status};
use audit_tools::report;
use tempfile::tempdir;

#[test]
fn parses_id_description_and_priority_from_table_row() {
    let checks = markdown_read::parse_checks("| C-001 | Robots.txt file exists | P0 | ⬜ |")
        .expect("checklist parsed");

    assert_eq!(checks.len(), 1);
    assert_eq!(checks[0].id, "C-001");
    assert_eq!(checks[0].check, "Robots.txt file exists");
    assert_eq!(checks[0].priority, Priority::P0);
}

#[test]
fn skips_lines_that_do_not_match_the_row_shape() {
    let document = concat!(
        "# SEO Audit\n",
        "\n",
        "| ID | Check | Priority | Status |\n",
        "| --- | --- | --- | --- |\n",
        "| not-an-id | Description | P0 |\n",
        "| C-001 | Priority outside the enum | P2 |\n",
        "| C-01 | Id with two digits | P0 |\n",
        "  | C-002 | Indented row | P0 |\n",
        "Some prose mentioning | C-003 | inline | P0 |\n",
    );

    let checks = markdown_read::parse_checks(document).expect("checklist parsed");
    assert!(checks.is_empty());
}

#[test]
fn keeps_repeated_ids_as_separate_rows() {
    let document = "\
| C-001 | First occurrence | P0 | ⬜ |\n\
| C-001 | Second occurrence | P1 | ⬜ |\n";

    let checks = markdown_read::parse_checks(document).expect("checklist parsed");

    assert_eq!(checks.len(), 2);
    assert_eq!(checks[0].check, "First occurrence");
    assert_eq!(checks[1].check, "Second occurrence");
    assert_eq!(checks[1].priority, Priority::P1);
}

#[test]
fn description_may_contain_unescaped_pipes() {
    let checks = markdown_read::parse_checks("| U-101 | Template renders | header | P0 | |")
        .expect("checklist parsed");

    assert_eq!(checks.len(), 1);
    assert_eq!(checks[0].check, "Template renders | header");
}

#[test]
fn catalog_lookup_returns_curated_outcome() {
    let result = catalog::lookup("C-001").expect("curated entry present");
    assert_eq!(result.status, Status::Pass);
    assert_eq!(result.notes, "Verified /robots.txt returns 200.");

    assert!(catalog::lookup("C-999").is_none());
}

#[test]
fn generates_report_joining_checklist_with_catalog() {
    let temp_dir = tempdir().expect("temporary directory");
    let input = temp_dir.path().join("checklist.md");
    let output = temp_dir.path().join("results.csv");

    let document = "\
| ID | Check | Priority | Status |\n\
| --- | --- | --- | --- |\n\
| C-001 | Robots.txt file exists | P0 | ⬜ |\n\
| C-999 | Imaginary future check | P1 | ⬜ |\n";
    fs::write(&input, document).expect("checklist written");

    let summary = report::generate(&input, &output).expect("report generated");
    assert_eq!(summary.total, 2);
    assert_eq!(summary.covered, 1);

    let mut reader = csv::Reader::from_path(&output).expect("report opened");
    let rows: Vec<OutputRow> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .expect("report rows deserialized");

    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].id, "C-001");
    assert_eq!(rows[0].priority, Priority::P0);
    assert_eq!(rows[0].status, Status::Pass);
    assert_eq!(rows[0].check, "Robots.txt file exists");
    assert_eq!(rows[0].notes, "Verified /robots.txt returns 200.");

    assert_eq!(rows[1].id, "C-999");
    assert_eq!(rows[1].priority, Priority::P1);
    assert_eq!(rows[1].status, Status::Nt);
    assert_eq!(rows[1].check, "Imaginary future check");
    assert_eq!(rows[1].notes, "");
}

#[test]
fn csv_round_trip_preserves_commas_and_quotes() {
    let rows = vec![
        OutputRow {
            id: "X-001".to_string(),
            priority: Priority::P0,
            status: Status::Nt,
            check: "Title includes brand, location, and \"intent\" keywords".to_string(),
            notes: String::new(),
        },
        OutputRow {
            id: "X-002".to_string(),
            priority: Priority::P1,
            status: Status::Partial,
            check: "Meta description under 160 characters".to_string(),
            notes: "Sampled key routes; needs crawl, then re-check.".to_string(),
        },
    ];

    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("results.csv");
    csv_write::write_report(&path, &rows).expect("report written");

    let mut reader = csv::Reader::from_path(&path).expect("report opened");
    let restored: Vec<OutputRow> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .expect("report rows deserialized");

    assert_eq!(rows, restored);
}

#[test]
fn empty_document_yields_header_only_report() {
    let temp_dir = tempdir().expect("temporary directory");
    let input = temp_dir.path().join("checklist.md");
    let output = temp_dir.path().join("results.csv");
    fs::write(&input, "").expect("checklist written");

    let summary = report::generate(&input, &output).expect("report generated");
    assert_eq!(summary.total, 0);
    assert_eq!(summary.covered, 0);

    let written = fs::read_to_string(&output).expect("report read");
    assert_eq!(written, "id,priority,status,check,notes\n");
}

#[test]
fn creates_missing_parent_directories_for_the_report() {
    let temp_dir = tempdir().expect("temporary directory");
    let input = temp_dir.path().join("checklist.md");
    let output = temp_dir.path().join("docs").join("seo").join("results.csv");
    fs::write(&input, "| C-008 | Sitemap returns 200 | P0 | ⬜ |\n").expect("checklist written");

    let summary = report::generate(&input, &output).expect("report generated");
    assert_eq!(summary.total, 1);
    assert_eq!(summary.covered, 1);
    assert!(output.exists());
}

#[test]
fn overwrites_an_existing_report() {
    let temp_dir = tempdir().expect("temporary directory");
    let input = temp_dir.path().join("checklist.md");
    let output = temp_dir.path().join("results.csv");
    fs::write(&input, "| C-020 | Category URLs included | P0 | ⬜ |\n")
        .expect("checklist written");
    fs::write(&output, "stale contents that must disappear").expect("stale report written");

    report::generate(&input, &output).expect("report generated");

    let written = fs::read_to_string(&output).expect("report read");
    assert!(written.starts_with("id,priority,status,check,notes\n"));
    assert!(!written.contains("stale contents"));
}
