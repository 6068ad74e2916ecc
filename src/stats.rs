//! Descriptive statistics over the compensation table
//!
//! Every function here is a pure function of the loaded table: no hidden
//! state, no mutation, same inputs always produce the same outputs.

use crate::dataset::Dataset;
use crate::error::MetricsError;
use crate::pay_level::PayBands;
use crate::record::{CeoRecord, SortKey};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// The n records with the highest value of `key`, fewer if the table is
/// smaller. `slice::sort_by` is stable, so ties keep original row order.
pub fn top_n<'a>(
    dataset: &'a Dataset,
    n: usize,
    key: SortKey,
) -> Result<Vec<&'a CeoRecord>, MetricsError> {
    if n == 0 {
        return Err(MetricsError::InvalidInput(
            "ranking depth must be at least 1".to_string(),
        ));
    }
    if dataset.is_empty() {
        return Err(MetricsError::InvalidInput(
            "cannot rank an empty dataset".to_string(),
        ));
    }

    let mut ranked: Vec<&CeoRecord> = dataset.records().iter().collect();
    ranked.sort_by(|a, b| compare_desc(key.value_of(a), key.value_of(b)));
    ranked.truncate(n);
    Ok(ranked)
}

/// Descending comparison; records missing the key rank last.
fn compare_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Headline figures for the executive summary view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutiveSummary {
    pub ceo_count: usize,
    pub industry_count: usize,
    pub mean_compensation: f64,
    pub max_compensation: f64,
    pub min_compensation: f64,
    /// Highest compensation divided by lowest.
    pub pay_gap: f64,
    pub highest_paid: String,
    pub lowest_paid: String,
    pub max_pay_ratio: f64,
    pub min_pay_ratio: f64,
    /// Highest pay ratio divided by lowest.
    pub ratio_gap: f64,
}

/// Compute the headline figures over the (non-empty) table.
pub fn executive_summary(dataset: &Dataset) -> Result<ExecutiveSummary, MetricsError> {
    if dataset.is_empty() {
        return Err(MetricsError::InvalidInput(
            "cannot summarize an empty dataset".to_string(),
        ));
    }

    // SIMD mean over the compensation column.
    let comps: Vec<f32> = dataset
        .records()
        .iter()
        .map(|r| r.compensation as f32)
        .collect();
    let mean_compensation =
        trueno::Vector::from_slice(&comps).mean().unwrap_or(0.0) as f64;

    let highest = dataset.highest_paid().expect("dataset checked non-empty");
    let lowest = dataset.lowest_paid().expect("dataset checked non-empty");

    let ratios = dataset
        .records()
        .iter()
        .map(CeoRecord::pay_ratio)
        .collect::<Result<Vec<f64>, MetricsError>>()?;
    let max_pay_ratio = ratios.iter().cloned().fold(f64::MIN, f64::max);
    let min_pay_ratio = ratios.iter().cloned().fold(f64::MAX, f64::min);

    Ok(ExecutiveSummary {
        ceo_count: dataset.len(),
        industry_count: dataset.industries().len(),
        mean_compensation,
        max_compensation: highest.compensation,
        min_compensation: lowest.compensation,
        pay_gap: highest.compensation / lowest.compensation,
        highest_paid: highest.ceo_name.clone(),
        lowest_paid: lowest.ceo_name.clone(),
        max_pay_ratio,
        min_pay_ratio,
        ratio_gap: max_pay_ratio / min_pay_ratio,
    })
}

/// Per-industry aggregate of compensation and pay ratio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryAggregate {
    pub industry: String,
    pub count: usize,
    pub mean_compensation: f64,
    pub median_compensation: f64,
    pub min_compensation: f64,
    pub max_compensation: f64,
    pub mean_pay_ratio: f64,
    pub median_pay_ratio: f64,
}

/// Group records by industry and aggregate each group. Industries with no
/// records simply never appear; nothing is emitted as NaN. Output is sorted
/// by mean compensation, highest first.
pub fn aggregate_by_industry(dataset: &Dataset) -> Result<Vec<IndustryAggregate>, MetricsError> {
    let mut groups: HashMap<String, (Vec<f64>, Vec<f64>)> = HashMap::new();
    for record in dataset.records() {
        let entry = groups.entry(record.industry.clone()).or_default();
        entry.0.push(record.compensation);
        entry.1.push(record.pay_ratio()?);
    }

    let mut aggregates: Vec<IndustryAggregate> = groups
        .into_iter()
        .map(|(industry, (mut comps, mut ratios))| {
            let count = comps.len();
            IndustryAggregate {
                industry,
                count,
                mean_compensation: mean(&comps),
                median_compensation: median(&mut comps),
                min_compensation: comps.iter().cloned().fold(f64::MAX, f64::min),
                max_compensation: comps.iter().cloned().fold(f64::MIN, f64::max),
                mean_pay_ratio: mean(&ratios),
                median_pay_ratio: median(&mut ratios),
            }
        })
        .collect();

    aggregates.sort_by(|a, b| {
        b.mean_compensation
            .partial_cmp(&a.mean_compensation)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.industry.cmp(&b.industry))
    });
    Ok(aggregates)
}

/// One bin of the pay-ratio histogram. `[lower, upper)` except the last
/// bin, which also includes its upper edge so the maximum is counted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width histogram of CEO-to-worker pay ratios.
pub fn ratio_histogram(
    dataset: &Dataset,
    bins: usize,
) -> Result<Vec<HistogramBin>, MetricsError> {
    if bins == 0 {
        return Err(MetricsError::InvalidInput(
            "histogram needs at least one bin".to_string(),
        ));
    }
    if dataset.is_empty() {
        return Err(MetricsError::InvalidInput(
            "cannot bin an empty dataset".to_string(),
        ));
    }

    let ratios = dataset
        .records()
        .iter()
        .map(CeoRecord::pay_ratio)
        .collect::<Result<Vec<f64>, MetricsError>>()?;
    let min = ratios.iter().cloned().fold(f64::MAX, f64::min);
    let max = ratios.iter().cloned().fold(f64::MIN, f64::max);

    if min == max {
        return Ok(vec![HistogramBin {
            lower: min,
            upper: max,
            count: ratios.len(),
        }]);
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for ratio in &ratios {
        let mut index = ((ratio - min) / width) as usize;
        if index >= bins {
            index = bins - 1;
        }
        counts[index] += 1;
    }

    Ok(counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: min + i as f64 * width,
            upper: if i == bins - 1 {
                max
            } else {
                min + (i + 1) as f64 * width
            },
            count,
        })
        .collect())
}

/// Record counts per pay level for one industry, indexed by
/// [`crate::pay_level::PayLevel::ALL`] order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelBreakdown {
    pub industry: String,
    pub counts: [usize; 5],
}

/// How each industry's CEOs distribute across the pay levels.
pub fn level_distribution(dataset: &Dataset, bands: &PayBands) -> Vec<LevelBreakdown> {
    let mut groups: HashMap<String, [usize; 5]> = HashMap::new();
    for record in dataset.records() {
        let counts = groups.entry(record.industry.clone()).or_insert([0; 5]);
        counts[bands.classify(record.compensation).index()] += 1;
    }

    let mut breakdowns: Vec<LevelBreakdown> = groups
        .into_iter()
        .map(|(industry, counts)| LevelBreakdown { industry, counts })
        .collect();
    breakdowns.sort_by(|a, b| a.industry.cmp(&b.industry));
    breakdowns
}

/// Extended distribution statistics for one numeric column
/// (SIMD-accelerated via Trueno).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSummary {
    pub mean: f32,
    pub stddev: f32,
    pub min: f32,
    pub max: f32,
    pub median: f32,
    pub p75: f32,
    pub p90: f32,
    pub p95: f32,
    pub p99: f32,
}

/// Summarize a column's distribution; `None` for an empty column.
pub fn distribution_summary(values: &[f64]) -> Option<DistributionSummary> {
    if values.is_empty() {
        return None;
    }

    let vals: Vec<f32> = values.iter().map(|&v| v as f32).collect();
    let v = trueno::Vector::from_slice(&vals);
    let mean = v.mean().unwrap_or(0.0);
    let stddev = v.stddev().unwrap_or(0.0);
    let min = v.min().unwrap_or(0.0);
    let max = v.max().unwrap_or(0.0);

    let mut sorted = vals;
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    Some(DistributionSummary {
        mean,
        stddev,
        min,
        max,
        median: percentile(&sorted, 50.0),
        p75: percentile(&sorted, 75.0),
        p90: percentile(&sorted, 90.0),
        p95: percentile(&sorted, 95.0),
        p99: percentile(&sorted, 99.0),
    })
}

/// Linear-interpolation percentile over sorted data.
fn percentile(sorted_data: &[f32], percentile: f32) -> f32 {
    if sorted_data.is_empty() {
        return 0.0;
    }
    if sorted_data.len() == 1 {
        return sorted_data[0];
    }

    let index = (percentile / 100.0) * (sorted_data.len() - 1) as f32;
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;

    if lower == upper {
        sorted_data[lower]
    } else {
        let weight = index - lower as f32;
        sorted_data[lower] * (1.0 - weight) + sorted_data[upper] * weight
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(values: &mut [f64]) -> f64 {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}
