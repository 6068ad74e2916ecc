//! Record filtering for -e/--select expressions
//!
//! Supports:
//! - Industry selection: -e industry=Technology,Energy
//! - Pay-level selection: -e level=High,Extreme
//! - Name search: -e name~musk (case-insensitive regex over CEO and company)
//!
//! Clauses may be combined with ';'; a record must match every clause.

use crate::pay_level::{PayBands, PayLevel};
use crate::record::CeoRecord;
use anyhow::{bail, Result};
use regex::Regex;
use std::collections::HashSet;

/// Record filter that determines which rows participate in a report.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Industries to include, lowercased (None = all industries)
    industries: Option<HashSet<String>>,
    /// Pay levels to include (None = all levels)
    levels: Option<HashSet<PayLevel>>,
    /// Case-insensitive pattern matched against CEO and company names
    name_pattern: Option<Regex>,
}

impl RecordFilter {
    /// Create a filter that includes every record.
    pub fn all() -> Self {
        Self::default()
    }

    /// Parse a filter expression like "industry=Technology,Energy" or
    /// "level=High,Extreme;name~cook".
    pub fn from_expr(expr: &str) -> Result<Self> {
        let mut filter = Self::all();

        for clause in expr.split(';') {
            let clause = clause.trim();
            if clause.is_empty() {
                continue;
            }

            if let Some(spec) = clause.strip_prefix("industry=") {
                filter.industries = Some(parse_industry_spec(spec));
            } else if let Some(spec) = clause.strip_prefix("level=") {
                filter.levels = Some(parse_level_spec(spec)?);
            } else if let Some(pattern) = clause.strip_prefix("name~") {
                let pattern = pattern.trim();
                if pattern.is_empty() {
                    bail!("Empty pattern in filter clause: {}", clause);
                }
                filter.name_pattern = Some(Regex::new(&format!("(?i){}", pattern))?);
            } else {
                bail!(
                    "Invalid filter clause: {}. Expected industry=..., level=..., or name~PATTERN",
                    clause
                );
            }
        }

        Ok(filter)
    }

    /// Check whether a record passes the filter. Pay bands are needed to
    /// derive the record's level for level clauses.
    pub fn matches(&self, record: &CeoRecord, bands: &PayBands) -> bool {
        if let Some(industries) = &self.industries {
            if !industries.contains(&record.industry.to_ascii_lowercase()) {
                return false;
            }
        }

        if let Some(levels) = &self.levels {
            if !levels.contains(&bands.classify(record.compensation)) {
                return false;
            }
        }

        if let Some(pattern) = &self.name_pattern {
            if !pattern.is_match(&record.ceo_name) && !pattern.is_match(&record.company) {
                return false;
            }
        }

        true
    }
}

fn parse_industry_spec(spec: &str) -> HashSet<String> {
    spec.split(',')
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_level_spec(spec: &str) -> Result<HashSet<PayLevel>> {
    let mut levels = HashSet::new();
    for part in spec.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        match PayLevel::parse(part) {
            Some(level) => {
                levels.insert(level);
            }
            None => bail!(
                "Unknown pay level: {}. Expected Minimal, Low, Medium, High, or Extreme",
                part
            ),
        }
    }
    Ok(levels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ceo: &str, company: &str, industry: &str, compensation: f64) -> CeoRecord {
        CeoRecord {
            company: company.to_string(),
            industry: industry.to_string(),
            ceo_name: ceo.to_string(),
            compensation,
            median_worker_pay: 50_000.0,
            tenure_years: None,
            market_cap_billions: None,
            employees: None,
        }
    }

    #[test]
    fn test_filter_all_matches_everything() {
        let filter = RecordFilter::all();
        let bands = PayBands::default();
        assert!(filter.matches(&record("A", "X", "Technology", 1.0e6), &bands));
        assert!(filter.matches(&record("B", "Y", "Energy", 9.0e7), &bands));
    }

    #[test]
    fn test_filter_industries() {
        let filter = RecordFilter::from_expr("industry=Technology,Energy").unwrap();
        let bands = PayBands::default();
        assert!(filter.matches(&record("A", "X", "Technology", 1.0e6), &bands));
        assert!(filter.matches(&record("B", "Y", "Energy", 1.0e6), &bands));
        assert!(!filter.matches(&record("C", "Z", "Retail", 1.0e6), &bands));
    }

    #[test]
    fn test_filter_industry_case_insensitive() {
        let filter = RecordFilter::from_expr("industry=technology").unwrap();
        let bands = PayBands::default();
        assert!(filter.matches(&record("A", "X", "Technology", 1.0e6), &bands));
    }

    #[test]
    fn test_filter_levels() {
        let filter = RecordFilter::from_expr("level=High,Extreme").unwrap();
        let bands = PayBands::default();
        assert!(filter.matches(&record("A", "X", "Technology", 30.0e6), &bands));
        assert!(filter.matches(&record("B", "Y", "Technology", 90.0e6), &bands));
        assert!(!filter.matches(&record("C", "Z", "Technology", 2.0e6), &bands));
    }

    #[test]
    fn test_filter_name_pattern() {
        let filter = RecordFilter::from_expr("name~cook").unwrap();
        let bands = PayBands::default();
        assert!(filter.matches(&record("Tim Cook", "Apple", "Technology", 1.0e6), &bands));
        assert!(filter.matches(
            &record("Jane Roe", "Cookware Inc", "Retail", 1.0e6),
            &bands
        ));
        assert!(!filter.matches(&record("John Doe", "Acme", "Retail", 1.0e6), &bands));
    }

    #[test]
    fn test_filter_combined_clauses() {
        let filter = RecordFilter::from_expr("industry=Technology;level=Extreme").unwrap();
        let bands = PayBands::default();
        assert!(filter.matches(&record("A", "X", "Technology", 90.0e6), &bands));
        assert!(!filter.matches(&record("B", "Y", "Technology", 2.0e6), &bands));
        assert!(!filter.matches(&record("C", "Z", "Energy", 90.0e6), &bands));
    }

    #[test]
    fn test_invalid_clause() {
        assert!(RecordFilter::from_expr("ticker=AAPL").is_err());
    }

    #[test]
    fn test_unknown_level() {
        assert!(RecordFilter::from_expr("level=Stratospheric").is_err());
    }

    #[test]
    fn test_invalid_regex() {
        assert!(RecordFilter::from_expr("name~[unclosed").is_err());
    }

    #[test]
    fn test_empty_pattern() {
        assert!(RecordFilter::from_expr("name~").is_err());
    }

    #[test]
    fn test_whitespace_handling() {
        let filter = RecordFilter::from_expr("industry=Technology , Energy").unwrap();
        let bands = PayBands::default();
        assert!(filter.matches(&record("A", "X", "Energy", 1.0e6), &bands));
    }

    #[test]
    fn test_empty_industry_spec_matches_nothing() {
        let filter = RecordFilter::from_expr("industry=").unwrap();
        let bands = PayBands::default();
        assert!(!filter.matches(&record("A", "X", "Technology", 1.0e6), &bands));
    }

    #[test]
    fn test_filter_clone_and_debug() {
        let filter = RecordFilter::from_expr("industry=Energy").unwrap();
        let copy = filter.clone();
        let bands = PayBands::default();
        assert!(copy.matches(&record("A", "X", "Energy", 1.0e6), &bands));
        assert!(format!("{:?}", copy).contains("RecordFilter"));
    }
}
