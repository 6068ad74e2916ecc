// Shared helpers for integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// Columns every generated test dataset carries.
#[allow(dead_code)]
pub const HEADER: &str =
    "CEO Name,Company,Industry,Salary,Median Worker Pay,CEO Tenure (Years),Market Cap (Billions),Employees";

/// Path to the committed sample dataset (13 usable rows, one junk row).
#[allow(dead_code)]
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/ceo_pay.csv")
}

/// Write a small CSV dataset into a temp directory and return its path.
#[allow(dead_code)]
pub fn write_dataset(dir: &TempDir, rows: &[&str]) -> PathBuf {
    let path = dir.path().join("dataset.csv");
    let mut content = String::from(HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    std::fs::write(&path, content).unwrap();
    path
}
