//! CSV output format for dashboard reports
//!
//! Rankings, industry aggregates, and the correlation matrix each become
//! one CSV table; a report with several sections concatenates them with a
//! blank line between tables.

use crate::report::{DashboardReport, RankedCeo};
use crate::stats::IndustryAggregate;
use crate::correlation::CorrelationMatrix;

/// Render every tabular section the report carries.
pub fn render_csv(report: &DashboardReport) -> String {
    let mut tables = Vec::new();

    if let Some(rankings) = &report.rankings {
        tables.push(rankings_csv(rankings));
    }
    if let Some(industries) = &report.industries {
        tables.push(industries_csv(industries));
    }
    if let Some(correlation) = &report.correlation {
        tables.push(correlation_csv(correlation));
    }

    tables.join("\n")
}

/// Ranking table, one row per CEO.
pub fn rankings_csv(rankings: &[RankedCeo]) -> String {
    let mut output = String::new();
    output.push_str("rank,ceo_name,company,industry,compensation,pay_ratio,pay_level\n");

    for row in rankings {
        let fields = [
            row.rank.to_string(),
            escape_field(&row.ceo_name),
            escape_field(&row.company),
            escape_field(&row.industry),
            format!("{:.0}", row.compensation),
            format!("{:.2}", row.pay_ratio),
            row.pay_level.to_string(),
        ];
        output.push_str(&fields.join(","));
        output.push('\n');
    }

    output
}

/// Industry aggregate table, one row per industry.
pub fn industries_csv(industries: &[IndustryAggregate]) -> String {
    let mut output = String::new();
    output.push_str(
        "industry,ceos,mean_compensation,median_compensation,min_compensation,max_compensation,mean_pay_ratio,median_pay_ratio\n",
    );

    for agg in industries {
        let fields = [
            escape_field(&agg.industry),
            agg.count.to_string(),
            format!("{:.0}", agg.mean_compensation),
            format!("{:.0}", agg.median_compensation),
            format!("{:.0}", agg.min_compensation),
            format!("{:.0}", agg.max_compensation),
            format!("{:.2}", agg.mean_pay_ratio),
            format!("{:.2}", agg.median_pay_ratio),
        ];
        output.push_str(&fields.join(","));
        output.push('\n');
    }

    output
}

/// Correlation matrix with a leading label column; undefined cells are
/// left empty.
pub fn correlation_csv(matrix: &CorrelationMatrix) -> String {
    let mut output = String::new();

    output.push_str("field");
    for field in &matrix.fields {
        output.push(',');
        output.push_str(field.label());
    }
    output.push('\n');

    for (i, field) in matrix.fields.iter().enumerate() {
        output.push_str(field.label());
        for cell in &matrix.matrix[i] {
            output.push(',');
            if let Some(value) = cell {
                output.push_str(&format!("{:.4}", value));
            }
        }
        output.push('\n');
    }

    output
}

/// Escape CSV field (handle commas, quotes, newlines)
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
