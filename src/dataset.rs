//! In-memory compensation table
//!
//! The table is loaded once and treated as read-only; every report is a
//! fresh pass over it. Filtering produces a new table rather than mutating
//! the source.

use crate::filter::RecordFilter;
use crate::pay_level::PayBands;
use crate::record::CeoRecord;

/// The loaded, validated compensation table.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<CeoRecord>,
}

impl Dataset {
    pub fn new(records: Vec<CeoRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CeoRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Apply a record filter, keeping original row order.
    pub fn filter(&self, filter: &RecordFilter, bands: &PayBands) -> Dataset {
        Dataset {
            records: self
                .records
                .iter()
                .filter(|r| filter.matches(r, bands))
                .cloned()
                .collect(),
        }
    }

    /// Distinct industry names, sorted.
    pub fn industries(&self) -> Vec<String> {
        let mut names: Vec<String> = self.records.iter().map(|r| r.industry.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    /// The record with the lowest compensation, if any. First occurrence
    /// wins ties so results are deterministic.
    pub fn lowest_paid(&self) -> Option<&CeoRecord> {
        self.records.iter().reduce(|best, r| {
            if r.compensation < best.compensation {
                r
            } else {
                best
            }
        })
    }

    /// The record with the highest compensation, if any.
    pub fn highest_paid(&self) -> Option<&CeoRecord> {
        self.records.iter().reduce(|best, r| {
            if r.compensation > best.compensation {
                r
            } else {
                best
            }
        })
    }
}
