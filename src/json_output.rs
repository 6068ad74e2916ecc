//! JSON output format for dashboard reports

use crate::report::DashboardReport;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Headline KPIs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSummary {
    pub ceo_count: usize,
    pub industry_count: usize,
    pub mean_compensation: f64,
    pub max_compensation: f64,
    pub min_compensation: f64,
    pub pay_gap: f64,
    pub highest_paid: String,
    pub lowest_paid: String,
    pub max_pay_ratio: f64,
    pub min_pay_ratio: f64,
    pub ratio_gap: f64,
}

/// One row of the ranking table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRankedCeo {
    pub rank: usize,
    pub ceo_name: String,
    pub company: String,
    pub industry: String,
    pub compensation: f64,
    pub pay_ratio: f64,
    pub pay_level: String,
}

/// Distribution statistics for the pay-ratio column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonDistribution {
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

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonHistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonIndustry {
    pub industry: String,
    pub count: usize,
    pub mean_compensation: f64,
    pub median_compensation: f64,
    pub min_compensation: f64,
    pub max_compensation: f64,
    pub mean_pay_ratio: f64,
    pub median_pay_ratio: f64,
}

/// Record counts per pay level for one industry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonLevelBreakdown {
    pub industry: String,
    pub counts: BTreeMap<String, usize>,
}

/// Pearson matrix; undefined cells serialize as null, never NaN.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonCorrelation {
    pub fields: Vec<String>,
    pub matrix: Vec<Vec<Option<f64>>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonBuffett {
    pub baseline: f64,
    pub return_rate: f64,
    pub years: u32,
    pub total_actual: f64,
    pub total_at_baseline: f64,
    pub annual_savings: f64,
    pub compounded_savings: f64,
    pub reduction_pct: f64,
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<JsonSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rankings: Option<Vec<JsonRankedCeo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio_distribution: Option<JsonDistribution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio_histogram: Option<Vec<JsonHistogramBin>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industries: Option<Vec<JsonIndustry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_levels: Option<Vec<JsonLevelBreakdown>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation: Option<JsonCorrelation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffett: Option<JsonBuffett>,
}

impl JsonReport {
    /// Map an assembled report into the JSON structure.
    pub fn from_report(report: &DashboardReport) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "paygap-json-v1".to_string(),
            summary: report.summary.as_ref().map(|s| JsonSummary {
                ceo_count: s.ceo_count,
                industry_count: s.industry_count,
                mean_compensation: s.mean_compensation,
                max_compensation: s.max_compensation,
                min_compensation: s.min_compensation,
                pay_gap: s.pay_gap,
                highest_paid: s.highest_paid.clone(),
                lowest_paid: s.lowest_paid.clone(),
                max_pay_ratio: s.max_pay_ratio,
                min_pay_ratio: s.min_pay_ratio,
                ratio_gap: s.ratio_gap,
            }),
            rankings: report.rankings.as_ref().map(|rows| {
                rows.iter()
                    .map(|row| JsonRankedCeo {
                        rank: row.rank,
                        ceo_name: row.ceo_name.clone(),
                        company: row.company.clone(),
                        industry: row.industry.clone(),
                        compensation: row.compensation,
                        pay_ratio: row.pay_ratio,
                        pay_level: row.pay_level.to_string(),
                    })
                    .collect()
            }),
            ratio_distribution: report.ratio_summary.as_ref().map(|d| JsonDistribution {
                mean: d.mean,
                stddev: d.stddev,
                min: d.min,
                max: d.max,
                median: d.median,
                p75: d.p75,
                p90: d.p90,
                p95: d.p95,
                p99: d.p99,
            }),
            ratio_histogram: report.histogram.as_ref().map(|bins| {
                bins.iter()
                    .map(|b| JsonHistogramBin {
                        lower: b.lower,
                        upper: b.upper,
                        count: b.count,
                    })
                    .collect()
            }),
            industries: report.industries.as_ref().map(|aggs| {
                aggs.iter()
                    .map(|a| JsonIndustry {
                        industry: a.industry.clone(),
                        count: a.count,
                        mean_compensation: a.mean_compensation,
                        median_compensation: a.median_compensation,
                        min_compensation: a.min_compensation,
                        max_compensation: a.max_compensation,
                        mean_pay_ratio: a.mean_pay_ratio,
                        median_pay_ratio: a.median_pay_ratio,
                    })
                    .collect()
            }),
            pay_levels: report.levels.as_ref().map(|levels| {
                levels
                    .iter()
                    .map(|breakdown| JsonLevelBreakdown {
                        industry: breakdown.industry.clone(),
                        counts: crate::pay_level::PayLevel::ALL
                            .iter()
                            .map(|level| (level.to_string(), breakdown.counts[level.index()]))
                            .collect(),
                    })
                    .collect()
            }),
            correlation: report.correlation.as_ref().map(|c| JsonCorrelation {
                fields: c.fields.iter().map(|f| f.label().to_string()).collect(),
                matrix: c.matrix.clone(),
            }),
            buffett: report.buffett.as_ref().map(|b| JsonBuffett {
                baseline: b.baseline,
                return_rate: b.return_rate,
                years: b.years,
                total_actual: b.total_actual,
                total_at_baseline: b.total_at_baseline,
                annual_savings: b.annual_savings,
                compounded_savings: b.compounded_savings,
                reduction_pct: b.reduction_pct,
            }),
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ReportKind;
    use crate::dataset::Dataset;
    use crate::pay_level::PayBands;
    use crate::record::CeoRecord;
    use crate::report::{build_report, ReportOptions};

    fn sample() -> Dataset {
        let record = |ceo: &str, industry: &str, comp: f64, worker: f64| CeoRecord {
            company: format!("{} Co", ceo),
            industry: industry.to_string(),
            ceo_name: ceo.to_string(),
            compensation: comp,
            median_worker_pay: worker,
            tenure_years: Some(5.0),
            market_cap_billions: Some(50.0),
            employees: Some(10_000.0),
        };
        Dataset::new(vec![
            record("Alice Chen", "Technology", 100_000_000.0, 50_000.0),
            record("Bob Singh", "Energy", 10_000_000.0, 40_000.0),
        ])
    }

    fn full_report() -> DashboardReport {
        build_report(&sample(), &PayBands::default(), &ReportOptions::default()).unwrap()
    }

    #[test]
    fn test_json_report_metadata() {
        let json = JsonReport::from_report(&full_report());
        assert_eq!(json.format, "paygap-json-v1");
        assert!(!json.version.is_empty());
    }

    #[test]
    fn test_json_serialization_contains_sections() {
        let json = JsonReport::from_report(&full_report()).to_json().unwrap();
        assert!(json.contains("\"format\": \"paygap-json-v1\""));
        assert!(json.contains("\"ceo_name\": \"Alice Chen\""));
        assert!(json.contains("\"pay_level\": \"Extreme\""));
        assert!(json.contains("\"correlation\""));
        assert!(json.contains("\"buffett\""));
    }

    #[test]
    fn test_optional_sections_omitted() {
        let options = ReportOptions {
            kind: ReportKind::Summary,
            ..ReportOptions::default()
        };
        let report = build_report(&sample(), &PayBands::default(), &options).unwrap();
        let json = JsonReport::from_report(&report).to_json().unwrap();
        assert!(json.contains("\"summary\""));
        assert!(!json.contains("\"buffett\""));
        assert!(!json.contains("\"correlation\""));
    }

    #[test]
    fn test_json_round_trips() {
        let json = JsonReport::from_report(&full_report()).to_json().unwrap();
        let parsed: JsonReport = serde_json::from_str(&json).unwrap();
        let summary = parsed.summary.unwrap();
        assert_eq!(summary.ceo_count, 2);
        assert_eq!(summary.highest_paid, "Alice Chen");
    }

    #[test]
    fn test_undefined_correlation_serializes_as_null() {
        // Constant compensation makes every cell in its row undefined.
        let record = |ceo: &str| CeoRecord {
            company: format!("{} Co", ceo),
            industry: "Technology".to_string(),
            ceo_name: ceo.to_string(),
            compensation: 5_000_000.0,
            median_worker_pay: 50_000.0,
            tenure_years: Some(5.0),
            market_cap_billions: None,
            employees: None,
        };
        let ds = Dataset::new(vec![record("A"), record("B")]);
        let report = build_report(&ds, &PayBands::default(), &ReportOptions::default()).unwrap();
        let json = JsonReport::from_report(&report).to_json().unwrap();
        assert!(json.contains("null"));
        assert!(!json.contains("NaN"));
    }
}
