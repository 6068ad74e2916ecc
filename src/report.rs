//! Report assembly and text rendering
//!
//! `build_report` runs the metrics engine once over the (already filtered)
//! table and collects the sections the chosen report needs; the output
//! modules each render the same `DashboardReport` in their format.

use crate::buffett::{self, BuffettProjection};
use crate::cli::ReportKind;
use crate::correlation::{correlation_matrix, CorrelationMatrix, NumericField};
use crate::dataset::Dataset;
use crate::error::MetricsError;
use crate::pay_level::{PayBands, PayLevel};
use crate::record::{CeoRecord, SortKey};
use crate::stats::{
    aggregate_by_industry, distribution_summary, executive_summary, level_distribution,
    ratio_histogram, top_n, DistributionSummary, ExecutiveSummary, HistogramBin,
    IndustryAggregate, LevelBreakdown,
};
use serde::Serialize;

/// Bin count for the pay-ratio histogram, matching a 20-bar chart.
const HISTOGRAM_BINS: usize = 20;

/// Cap on histogram bar width in the text renderer.
const MAX_BAR_WIDTH: usize = 50;

/// Knobs for report assembly.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub kind: ReportKind,
    pub top_n: usize,
    pub sort_by: SortKey,
    pub baseline: Option<f64>,
    pub return_rate: f64,
    pub years: u32,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            kind: ReportKind::All,
            top_n: 20,
            sort_by: SortKey::Compensation,
            baseline: None,
            return_rate: 0.07,
            years: 10,
        }
    }
}

/// One row of the ranking table, denormalized for output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCeo {
    pub rank: usize,
    pub ceo_name: String,
    pub company: String,
    pub industry: String,
    pub compensation: f64,
    pub pay_ratio: f64,
    pub pay_level: PayLevel,
}

/// Everything a rendered report can contain. Sections the chosen
/// `ReportKind` doesn't need stay `None`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardReport {
    pub summary: Option<ExecutiveSummary>,
    pub rankings: Option<Vec<RankedCeo>>,
    pub ratio_summary: Option<DistributionSummary>,
    pub histogram: Option<Vec<HistogramBin>>,
    pub industries: Option<Vec<IndustryAggregate>>,
    pub levels: Option<Vec<LevelBreakdown>>,
    pub correlation: Option<CorrelationMatrix>,
    pub buffett: Option<BuffettProjection>,
}

/// Run the metrics engine and collect the sections for `options.kind`.
pub fn build_report(
    dataset: &Dataset,
    bands: &PayBands,
    options: &ReportOptions,
) -> Result<DashboardReport, MetricsError> {
    let kind = options.kind;
    let wants = |k: ReportKind| kind == k || kind == ReportKind::All;
    let mut report = DashboardReport::default();

    if wants(ReportKind::Summary) {
        report.summary = Some(executive_summary(dataset)?);
        report.rankings = Some(build_rankings(dataset, bands, options)?);
    }

    if wants(ReportKind::Inequality) {
        let ratios = dataset
            .records()
            .iter()
            .map(CeoRecord::pay_ratio)
            .collect::<Result<Vec<f64>, MetricsError>>()?;
        report.ratio_summary = distribution_summary(&ratios);
        report.histogram = Some(ratio_histogram(dataset, HISTOGRAM_BINS)?);
    }

    if wants(ReportKind::Inequality) || wants(ReportKind::Industry) {
        report.industries = Some(aggregate_by_industry(dataset)?);
    }

    if wants(ReportKind::Industry) {
        report.levels = Some(level_distribution(dataset, bands));
    }

    if wants(ReportKind::Performance) {
        report.correlation = Some(correlation_matrix(dataset, &NumericField::ALL)?);
        report.buffett = Some(buffett::project(
            dataset,
            options.baseline,
            options.return_rate,
            options.years,
        )?);
    }

    Ok(report)
}

fn build_rankings(
    dataset: &Dataset,
    bands: &PayBands,
    options: &ReportOptions,
) -> Result<Vec<RankedCeo>, MetricsError> {
    top_n(dataset, options.top_n, options.sort_by)?
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            Ok(RankedCeo {
                rank: i + 1,
                ceo_name: record.ceo_name.clone(),
                company: record.company.clone(),
                industry: record.industry.clone(),
                compensation: record.compensation,
                pay_ratio: record.pay_ratio()?,
                pay_level: bands.classify(record.compensation),
            })
        })
        .collect()
}

/// Render the report as aligned text tables.
pub fn render_text(report: &DashboardReport) -> String {
    let mut output = String::new();

    if let Some(summary) = &report.summary {
        render_summary(&mut output, summary);
    }
    if let Some(rankings) = &report.rankings {
        render_rankings(&mut output, rankings);
    }
    if let Some(ratio_summary) = &report.ratio_summary {
        render_ratio_summary(&mut output, ratio_summary);
    }
    if let Some(histogram) = &report.histogram {
        render_histogram(&mut output, histogram);
    }
    if let Some(industries) = &report.industries {
        render_industries(&mut output, industries);
    }
    if let Some(levels) = &report.levels {
        render_levels(&mut output, levels);
    }
    if let Some(correlation) = &report.correlation {
        output.push_str("=== Correlation: What Moves With CEO Pay? ===\n\n");
        output.push_str(&correlation.format());
        output.push('\n');
    }
    if let Some(buffett) = &report.buffett {
        render_buffett(&mut output, buffett);
    }

    output
}

fn render_summary(output: &mut String, summary: &ExecutiveSummary) {
    output.push_str("=== Executive Summary ===\n");
    output.push_str(&format!("CEOs analyzed:    {:>12}\n", summary.ceo_count));
    output.push_str(&format!("Industries:       {:>12}\n", summary.industry_count));
    output.push_str(&format!(
        "Average pay:      {:>12}\n",
        format_millions(summary.mean_compensation)
    ));
    output.push_str(&format!(
        "Highest pay:      {:>12}  ({})\n",
        format_millions(summary.max_compensation),
        summary.highest_paid
    ));
    output.push_str(&format!(
        "Lowest pay:       {:>12}  ({})\n",
        format_millions(summary.min_compensation),
        summary.lowest_paid
    ));
    output.push_str(&format!("CEO pay gap:      {:>11.0}x\n", summary.pay_gap));
    output.push_str(&format!(
        "Pay ratio range:  {:>5.0}:1 to {:.0}:1\n",
        summary.min_pay_ratio, summary.max_pay_ratio
    ));
    output.push_str(&format!("Ratio gap:        {:>11.0}x\n\n", summary.ratio_gap));
}

fn render_rankings(output: &mut String, rankings: &[RankedCeo]) {
    output.push_str("=== Compensation Ranking ===\n");
    output.push_str(" rank            total pay      ratio    level  ceo (company)\n");
    output.push_str("----- -------------------- ---------- -------- ----------------\n");
    for row in rankings {
        output.push_str(&format!(
            "{:>5} {:>20} {:>9.0}x {:>8}  {} ({})\n",
            row.rank,
            format_money(row.compensation),
            row.pay_ratio,
            row.pay_level.to_string(),
            row.ceo_name,
            row.company
        ));
    }
    output.push('\n');
}

fn render_ratio_summary(output: &mut String, summary: &DistributionSummary) {
    output.push_str("=== Pay Ratio Distribution ===\n");
    output.push_str(&format!("Mean:         {:>10.1}\n", summary.mean));
    output.push_str(&format!("Std Dev:      {:>10.1}\n", summary.stddev));
    output.push_str(&format!("Min:          {:>10.1}\n", summary.min));
    output.push_str(&format!("Max:          {:>10.1}\n", summary.max));
    output.push_str(&format!("Median (P50): {:>10.1}\n", summary.median));
    output.push_str(&format!("P75:          {:>10.1}\n", summary.p75));
    output.push_str(&format!("P90:          {:>10.1}\n", summary.p90));
    output.push_str(&format!("P95:          {:>10.1}\n", summary.p95));
    output.push_str(&format!("P99:          {:>10.1}\n\n", summary.p99));
}

fn render_histogram(output: &mut String, histogram: &[HistogramBin]) {
    output.push_str("=== Pay Ratio Histogram ===\n");
    for bin in histogram {
        let bar = "#".repeat(bin.count.min(MAX_BAR_WIDTH));
        output.push_str(&format!(
            "{:>8.0} - {:>8.0} | {:<width$} {}\n",
            bin.lower,
            bin.upper,
            bar,
            bin.count,
            width = MAX_BAR_WIDTH
        ));
    }
    output.push('\n');
}

fn render_industries(output: &mut String, industries: &[IndustryAggregate]) {
    output.push_str("=== Pay by Industry ===\n");
    output.push_str(
        "industry                 ceos      avg pay   median pay      min pay      max pay  avg ratio\n",
    );
    output.push_str(
        "---------------------- ------- ------------ ------------ ------------ ------------ ----------\n",
    );
    for agg in industries {
        output.push_str(&format!(
            "{:<22} {:>7} {:>12} {:>12} {:>12} {:>12} {:>9.0}x\n",
            agg.industry,
            agg.count,
            format_millions(agg.mean_compensation),
            format_millions(agg.median_compensation),
            format_millions(agg.min_compensation),
            format_millions(agg.max_compensation),
            agg.mean_pay_ratio
        ));
    }
    output.push('\n');
}

fn render_levels(output: &mut String, levels: &[LevelBreakdown]) {
    output.push_str("=== Pay Levels by Industry ===\n");
    output.push_str(&format!("{:<22}", "industry"));
    for level in PayLevel::ALL {
        output.push_str(&format!("{:>9}", level.to_string()));
    }
    output.push('\n');
    for breakdown in levels {
        output.push_str(&format!("{:<22}", breakdown.industry));
        for count in breakdown.counts {
            output.push_str(&format!("{:>9}", count));
        }
        output.push('\n');
    }
    output.push('\n');
}

fn render_buffett(output: &mut String, projection: &BuffettProjection) {
    output.push_str("=== The Buffett Model ===\n");
    output.push_str(&format!(
        "Baseline pay:       {:>16}\n",
        format_money(projection.baseline)
    ));
    output.push_str(&format!(
        "Assumed return:     {:>15.1}%\n",
        projection.return_rate * 100.0
    ));
    output.push_str(&format!(
        "Horizon:            {:>10} years\n",
        projection.years
    ));
    output.push_str(&format!(
        "Actual total pay:   {:>16}\n",
        format_money(projection.total_actual)
    ));
    output.push_str(&format!(
        "Total at baseline:  {:>16}\n",
        format_money(projection.total_at_baseline)
    ));
    output.push_str(&format!(
        "Annual savings:     {:>16}  ({:.1}% reduction)\n",
        format_money(projection.annual_savings),
        projection.reduction_pct
    ));
    output.push_str(&format!(
        "Compounded value:   {:>16}\n",
        format_money(projection.compounded_savings)
    ));
}

/// "$12,345,678" with thousands separators, rounded to whole dollars.
pub fn format_money(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// "$12.3M" for table cells where whole dollars would be noise.
pub fn format_millions(value: f64) -> String {
    format!("${:.1}M", value / 1_000_000.0)
}
