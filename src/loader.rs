//! CSV dataset loading and cleaning
//!
//! The source spreadsheet uses a header row with human-oriented column names
//! and dollar-formatted numbers ("$24,300,000", "1,447:1"). Loading
//! validates the header once (a missing required column is fatal), cleans
//! each field, and drops rows that violate the record invariants, logging
//! one warning per dropped row.

use crate::dataset::Dataset;
use crate::error::MetricsError;
use crate::record::CeoRecord;
use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::{debug, warn};

/// Required columns. The spreadsheet may carry extra columns (Ticker, a
/// precomputed Pay Ratio or Pay Level); those are ignored. Ratios and
/// levels are always rederived so stale derived columns cannot leak in.
const COL_CEO_NAME: &str = "CEO Name";
const COL_COMPANY: &str = "Company";
const COL_INDUSTRY: &str = "Industry";
const COL_SALARY: &str = "Salary";
const COL_WORKER_PAY: &str = "Median Worker Pay";

/// Optional columns.
const COL_TENURE: &str = "CEO Tenure (Years)";
const COL_MARKET_CAP: &str = "Market Cap (Billions)";
const COL_EMPLOYEES: &str = "Employees";

/// Column positions resolved from the header row.
#[derive(Debug, Clone)]
struct ColumnMap {
    ceo_name: usize,
    company: usize,
    industry: usize,
    salary: usize,
    worker_pay: usize,
    tenure: Option<usize>,
    market_cap: Option<usize>,
    employees: Option<usize>,
}

impl ColumnMap {
    fn from_header(header: &[String]) -> Result<Self, MetricsError> {
        let find = |name: &str| header.iter().position(|h| h.trim() == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| MetricsError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            ceo_name: require(COL_CEO_NAME)?,
            company: require(COL_COMPANY)?,
            industry: require(COL_INDUSTRY)?,
            salary: require(COL_SALARY)?,
            worker_pay: require(COL_WORKER_PAY)?,
            tenure: find(COL_TENURE),
            market_cap: find(COL_MARKET_CAP),
            employees: find(COL_EMPLOYEES),
        })
    }
}

/// Load and validate a dataset from a CSV file.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset file {}", path.display()))?;
    parse_dataset(&content)
        .with_context(|| format!("failed to load dataset from {}", path.display()))
}

/// Parse CSV content into a validated dataset.
pub fn parse_dataset(content: &str) -> Result<Dataset> {
    let mut rows = parse_csv(content).into_iter();

    let header = match rows.next() {
        Some(header) => header,
        None => bail!(MetricsError::InvalidInput("dataset is empty".to_string())),
    };
    let columns = ColumnMap::from_header(&header)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (line_no, row) in rows.enumerate() {
        // Header is line 1; data starts at line 2.
        let line = line_no + 2;
        if row.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        match parse_row(&row, &columns) {
            Some(record) => records.push(record),
            None => {
                skipped += 1;
                warn!(line, "skipping row with missing or invalid pay data");
            }
        }
    }

    if skipped > 0 {
        warn!(skipped, kept = records.len(), "dropped rows during load");
    }
    if records.is_empty() {
        bail!(MetricsError::InvalidInput(
            "dataset contains no usable rows".to_string()
        ));
    }

    debug!(rows = records.len(), "dataset parsed");
    Ok(Dataset::new(records))
}

fn parse_row(row: &[String], columns: &ColumnMap) -> Option<CeoRecord> {
    let field = |idx: usize| row.get(idx).map(|f| f.trim()).unwrap_or("");
    let optional = |idx: Option<usize>| idx.and_then(|i| clean_number(field(i)));

    let ceo_name = field(columns.ceo_name);
    let company = field(columns.company);
    let industry = field(columns.industry);
    if ceo_name.is_empty() || company.is_empty() || industry.is_empty() {
        return None;
    }

    let compensation = clean_number(field(columns.salary))?;
    let median_worker_pay = clean_number(field(columns.worker_pay))?;
    if compensation <= 0.0 || median_worker_pay <= 0.0 {
        return None;
    }

    Some(CeoRecord {
        company: company.to_string(),
        industry: industry.to_string(),
        ceo_name: ceo_name.to_string(),
        compensation,
        median_worker_pay,
        tenure_years: optional(columns.tenure),
        market_cap_billions: optional(columns.market_cap),
        employees: optional(columns.employees),
    })
}

/// Parse a numeric field as the spreadsheet formats them: optional `$`,
/// thousands separators, and `N:1` ratio notation.
fn clean_number(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(['$', ','], "");
    // "1447:1" ratio notation keeps the part before the colon.
    let cleaned = cleaned.split(':').next().unwrap_or("");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Minimal RFC-4180 CSV parser: quoted fields may contain commas, escaped
/// quotes (`""`), and line breaks. Handles both `\n` and `\r\n` endings.
fn parse_csv(content: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' => in_quotes = true,
            ',' => row.push(std::mem::take(&mut field)),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            '\n' => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            _ => field.push(c),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}
