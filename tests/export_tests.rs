mod common;
use common::{rhd_plain, temp_path};
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_candidates_csv_all_pages() {
    let out = temp_path("export_candidates", "csv");

    rhd_plain("export_csv")
        .args(["export", "candidates", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed: 12 rows"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 13);
    assert!(lines[0].starts_with("ID,Name,"));
    assert!(content.contains("褚四"));
}

#[test]
fn test_export_with_status_filter() {
    let out = temp_path("export_status", "csv");

    rhd_plain("export_status")
        .args([
            "export",
            "interviews",
            "--format",
            "csv",
            "--file",
            &out,
            "--status",
            "pending",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert_eq!(content.lines().count(), 1 + 5);
    assert!(!content.contains("钱七"));
}

#[test]
fn test_export_json_keeps_full_records() {
    let out = temp_path("export_positions", "json");

    rhd_plain("export_json")
        .args(["export", "positions", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let items = value.as_array().expect("array");
    assert_eq!(items.len(), 5);
    assert_eq!(items[0]["competency_model"].as_array().map(Vec::len), Some(5));
}

#[test]
fn test_export_xlsx_writes_workbook() {
    let out = temp_path("export_enterprises", "xlsx");

    rhd_plain("export_xlsx")
        .args(["export", "enterprises", "--format", "xlsx", "--file", &out])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read xlsx");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_nothing_matching_writes_nothing() {
    let out = temp_path("export_empty", "csv");

    rhd_plain("export_empty")
        .args([
            "export",
            "candidates",
            "--format",
            "csv",
            "--file",
            &out,
            "--search",
            "nobody-here",
        ])
        .assert()
        .success()
        .stdout(contains("nothing exported"));

    assert!(fs::metadata(&out).is_err());
}

#[test]
fn test_export_requires_absolute_path() {
    rhd_plain("export_relative")
        .args(["export", "candidates", "--format", "csv", "--file", "out.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_existing_file_declined() {
    let out = temp_path("export_declined", "csv");
    fs::write(&out, "keep me").unwrap();

    rhd_plain("export_declined")
        .args(["export", "candidates", "--format", "csv", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("cancelled"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn test_export_existing_file_confirmed() {
    let out = temp_path("export_confirmed", "csv");
    fs::write(&out, "old").unwrap();

    rhd_plain("export_confirmed")
        .args(["export", "candidates", "--format", "csv", "--file", &out])
        .write_stdin("y\n")
        .assert()
        .success();

    assert!(fs::read_to_string(&out).unwrap().starts_with("ID,"));
}

#[test]
fn test_export_existing_file_forced() {
    let out = temp_path("export_forced", "json");
    fs::write(&out, "old").unwrap();

    rhd_plain("export_forced")
        .args([
            "export",
            "locations",
            "--format",
            "json",
            "--file",
            &out,
            "--force",
        ])
        .assert()
        .success();

    assert!(fs::read_to_string(&out).unwrap().contains("会议室A"));
}

#[test]
fn test_spreadsheet_numbers_skip_phone_and_prefixed_values() {
    use rhiredesk::export::ExportTable;
    use rhiredesk::store::MockStore;

    let store = MockStore::seeded(common::today());
    let rows: Vec<_> = store.candidates.iter().collect();
    let table = ExportTable::from_items(&rows).unwrap();

    let phone = table.headers.iter().position(|h| *h == "Phone").unwrap();
    assert_eq!(table.numeric_cell(0, "12"), Some(12));
    assert_eq!(table.numeric_cell(phone, "13800138000"), None);
    assert_eq!(table.numeric_cell(0, "+8613800138000"), None);
    assert_eq!(table.numeric_cell(0, "0571"), None);
    assert_eq!(table.numeric_cell(0, "0"), Some(0));
    assert_eq!(table.numeric_cell(99, "1"), None);
}
