//! The Buffett model: compounded value of redirected excess compensation
//!
//! An illustrative projection, not a forecast: if every CEO were paid a
//! baseline amount and the excess were invested each year at an assumed
//! return rate, what would the redirected money grow to over the horizon?
//! The baseline defaults to the lowest compensation in the table.

use crate::dataset::Dataset;
use crate::error::MetricsError;
use serde::Serialize;

/// Result of the projection over a whole table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuffettProjection {
    /// Baseline annual pay each CEO is hypothetically held to.
    pub baseline: f64,
    /// Assumed annual return rate (0.07 = 7%).
    pub return_rate: f64,
    /// Investment horizon in years.
    pub years: u32,
    pub total_actual: f64,
    pub total_at_baseline: f64,
    /// Sum of each CEO's pay above the baseline, one year's worth.
    pub annual_savings: f64,
    /// Future value of investing the annual savings every year at the
    /// assumed rate for the whole horizon (ordinary annuity).
    pub compounded_savings: f64,
    /// Annual savings as a percentage of actual total pay.
    pub reduction_pct: f64,
}

/// Project the table's excess compensation. `baseline` of `None` uses the
/// dataset minimum, matching the "if everyone were paid like the
/// lowest-paid CEO" comparison.
pub fn project(
    dataset: &Dataset,
    baseline: Option<f64>,
    return_rate: f64,
    years: u32,
) -> Result<BuffettProjection, MetricsError> {
    if dataset.is_empty() {
        return Err(MetricsError::InvalidInput(
            "cannot project over an empty dataset".to_string(),
        ));
    }
    validate_rate(return_rate)?;

    let baseline = match baseline {
        Some(value) => {
            if !value.is_finite() || value < 0.0 {
                return Err(MetricsError::InvalidInput(format!(
                    "baseline must be a non-negative finite number, got {value}"
                )));
            }
            value
        }
        None => {
            dataset
                .lowest_paid()
                .expect("dataset checked non-empty")
                .compensation
        }
    };

    let mut total_actual = 0.0;
    let mut annual_savings = 0.0;
    for record in dataset.records() {
        total_actual += record.compensation;
        annual_savings += (record.compensation - baseline).max(0.0);
    }

    Ok(BuffettProjection {
        baseline,
        return_rate,
        years,
        total_actual,
        total_at_baseline: total_actual - annual_savings,
        annual_savings,
        compounded_savings: annuity_future_value(annual_savings, return_rate, years),
        reduction_pct: (annual_savings / total_actual) * 100.0,
    })
}

/// One CEO's single-year excess compounded over the horizon.
pub fn excess_growth(
    compensation: f64,
    baseline: f64,
    return_rate: f64,
    years: u32,
) -> Result<f64, MetricsError> {
    validate_rate(return_rate)?;
    if !compensation.is_finite() || !baseline.is_finite() {
        return Err(MetricsError::InvalidInput(
            "compensation and baseline must be finite".to_string(),
        ));
    }
    let excess = (compensation - baseline).max(0.0);
    Ok(excess * (1.0 + return_rate).powi(years as i32))
}

fn validate_rate(return_rate: f64) -> Result<(), MetricsError> {
    if !return_rate.is_finite() || return_rate <= -1.0 {
        return Err(MetricsError::InvalidInput(format!(
            "return rate must be a finite number above -1.0, got {return_rate}"
        )));
    }
    Ok(())
}

/// Future value of investing `annual` at the end of each year for `years`
/// years at `rate`. Degenerates to simple accumulation at a zero rate.
fn annuity_future_value(annual: f64, rate: f64, years: u32) -> f64 {
    if rate == 0.0 {
        annual * years as f64
    } else {
        annual * (((1.0 + rate).powi(years as i32) - 1.0) / rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::CeoRecord;

    fn record(ceo: &str, compensation: f64) -> CeoRecord {
        CeoRecord {
            company: format!("{} Co", ceo),
            industry: "Technology".to_string(),
            ceo_name: ceo.to_string(),
            compensation,
            median_worker_pay: 50_000.0,
            tenure_years: None,
            market_cap_billions: None,
            employees: None,
        }
    }

    fn sample() -> Dataset {
        Dataset::new(vec![
            record("A", 10_000_000.0),
            record("B", 5_000_000.0),
            record("C", 1_000_000.0),
        ])
    }

    #[test]
    fn test_project_default_baseline_is_minimum() {
        let projection = project(&sample(), None, 0.0, 1).unwrap();
        assert_eq!(projection.baseline, 1_000_000.0);
        assert_eq!(projection.total_actual, 16_000_000.0);
        assert_eq!(projection.annual_savings, 13_000_000.0);
        assert_eq!(projection.total_at_baseline, 3_000_000.0);
    }

    #[test]
    fn test_project_zero_rate_is_simple_accumulation() {
        let projection = project(&sample(), None, 0.0, 10).unwrap();
        assert_eq!(projection.compounded_savings, 130_000_000.0);
    }

    #[test]
    fn test_project_compounding_beats_simple_accumulation() {
        let simple = project(&sample(), None, 0.0, 10).unwrap();
        let compounded = project(&sample(), None, 0.07, 10).unwrap();
        assert!(compounded.compounded_savings > simple.compounded_savings);
    }

    #[test]
    fn test_project_monotone_in_years() {
        let short = project(&sample(), None, 0.07, 5).unwrap();
        let long = project(&sample(), None, 0.07, 20).unwrap();
        assert!(long.compounded_savings > short.compounded_savings);
    }

    #[test]
    fn test_project_custom_baseline_clamps_below() {
        // Baseline above two of the three CEOs: only A contributes.
        let projection = project(&sample(), Some(6_000_000.0), 0.0, 1).unwrap();
        assert_eq!(projection.annual_savings, 4_000_000.0);
        assert_eq!(projection.total_at_baseline, 12_000_000.0);
    }

    #[test]
    fn test_project_reduction_pct() {
        let projection = project(&sample(), None, 0.0, 1).unwrap();
        assert!((projection.reduction_pct - 81.25).abs() < 1e-9);
    }

    #[test]
    fn test_project_empty_dataset_is_invalid() {
        assert!(project(&Dataset::default(), None, 0.07, 10).is_err());
    }

    #[test]
    fn test_project_bad_rate_is_invalid() {
        assert!(project(&sample(), None, -1.0, 10).is_err());
        assert!(project(&sample(), None, f64::NAN, 10).is_err());
    }

    #[test]
    fn test_project_negative_baseline_is_invalid() {
        assert!(project(&sample(), Some(-5.0), 0.07, 10).is_err());
    }

    #[test]
    fn test_excess_growth_compounds() {
        let value = excess_growth(2_000_000.0, 1_000_000.0, 0.1, 2).unwrap();
        assert!((value - 1_210_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_excess_growth_zero_years() {
        let value = excess_growth(2_000_000.0, 1_000_000.0, 0.1, 0).unwrap();
        assert_eq!(value, 1_000_000.0);
    }

    #[test]
    fn test_excess_growth_below_baseline_is_zero() {
        let value = excess_growth(500_000.0, 1_000_000.0, 0.1, 10).unwrap();
        assert_eq!(value, 0.0);
    }

    #[test]
    fn test_annuity_zero_years() {
        assert_eq!(annuity_future_value(1_000.0, 0.07, 0), 0.0);
    }
}
