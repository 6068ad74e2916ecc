//! Record shape for one company-CEO pair
//!
//! The loader validates every row against this shape once, so the metrics
//! engine never has to re-check column presence or pay-positivity.

use crate::error::MetricsError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One row of the compensation table.
///
/// `compensation` and `median_worker_pay` are in dollars and are always
/// positive for loaded records; rows violating that are dropped by the
/// loader before they reach any metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CeoRecord {
    pub company: String,
    pub industry: String,
    pub ceo_name: String,
    /// Total annual compensation in dollars.
    pub compensation: f64,
    /// Median worker pay in dollars.
    pub median_worker_pay: f64,
    /// Years in the CEO seat, when the source provides it.
    pub tenure_years: Option<f64>,
    /// Market capitalization in billions of dollars (company-size proxy).
    pub market_cap_billions: Option<f64>,
    pub employees: Option<f64>,
}

impl CeoRecord {
    /// CEO-to-worker pay multiple.
    ///
    /// The loader guarantees a positive denominator for loaded records, but
    /// a zero still fails loudly rather than producing an infinity.
    pub fn pay_ratio(&self) -> Result<f64, MetricsError> {
        if self.median_worker_pay == 0.0 {
            return Err(MetricsError::DivisionByZero(format!(
                "pay ratio for {}",
                self.ceo_name
            )));
        }
        Ok(self.compensation / self.median_worker_pay)
    }
}

/// Sortable numeric key for ranking tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Total annual compensation (default)
    Compensation,
    /// CEO-to-worker pay ratio
    PayRatio,
    /// Median worker pay
    MedianWorkerPay,
    /// Years as CEO
    TenureYears,
    /// Market capitalization
    MarketCap,
    /// Employee headcount
    Employees,
}

impl SortKey {
    /// Extract this key's value from a record. Optional columns yield `None`
    /// when the source row lacked them; such records rank last.
    pub fn value_of(&self, record: &CeoRecord) -> Option<f64> {
        match self {
            SortKey::Compensation => Some(record.compensation),
            SortKey::PayRatio => record.pay_ratio().ok(),
            SortKey::MedianWorkerPay => Some(record.median_worker_pay),
            SortKey::TenureYears => record.tenure_years,
            SortKey::MarketCap => record.market_cap_billions,
            SortKey::Employees => record.employees,
        }
    }
}
