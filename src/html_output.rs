//! HTML output format for dashboard reports
//!
//! Renders the report as one self-contained page with embedded CSS: KPI
//! cards, the ranking table with pay-level badges, industry aggregates,
//! the correlation matrix, and the Buffett projection. The closest thing
//! to the interactive dashboard this tool replaces, minus the widgets.

use crate::pay_level::PayLevel;
use crate::report::{format_millions, format_money, DashboardReport};

/// Escape HTML special characters to prevent broken markup
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Badge color per pay level.
fn level_color(level: PayLevel) -> &'static str {
    match level {
        PayLevel::Minimal => "#059669",
        PayLevel::Low => "#10b981",
        PayLevel::Medium => "#3b82f6",
        PayLevel::High => "#f59e0b",
        PayLevel::Extreme => "#ef4444",
    }
}

/// Generate embedded CSS styles
fn generate_styles() -> &'static str {
    r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 20px;
            background-color: #f5f5f5;
        }
        h1, h2 {
            color: #333;
        }
        table {
            border-collapse: collapse;
            width: 100%;
            background-color: white;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
            margin-bottom: 20px;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 8px;
            text-align: left;
        }
        th {
            background-color: #4a90d9;
            color: white;
            font-weight: bold;
        }
        tr:nth-child(even) {
            background-color: #f9f9f9;
        }
        .kpi-row {
            display: flex;
            gap: 16px;
            margin-bottom: 20px;
        }
        .kpi {
            background-color: white;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
            padding: 12px 20px;
            flex: 1;
        }
        .kpi .label {
            font-size: 0.8em;
            color: #888;
            text-transform: uppercase;
        }
        .kpi .value {
            font-size: 1.6em;
            font-weight: bold;
            color: #333;
        }
        .money {
            font-family: monospace;
            text-align: right;
        }
        .badge {
            color: white;
            border-radius: 4px;
            padding: 2px 8px;
            font-size: 0.85em;
        }
        .undefined {
            color: #bbb;
        }
        .footer {
            margin-top: 20px;
            font-size: 0.8em;
            color: #888;
            text-align: center;
        }
        "#
}

/// Generate complete HTML document for a report.
pub fn render_html(report: &DashboardReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"en\">\n");
    html.push_str("<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str("    <title>CEO Compensation Report</title>\n");
    html.push_str("    <style>");
    html.push_str(generate_styles());
    html.push_str("</style>\n");
    html.push_str("</head>\n");
    html.push_str("<body>\n");
    html.push_str("    <h1>CEO Compensation Report</h1>\n");

    if let Some(summary) = &report.summary {
        html.push_str("    <div class=\"kpi-row\">\n");
        html.push_str(&kpi("CEOs", &summary.ceo_count.to_string()));
        html.push_str(&kpi("Industries", &summary.industry_count.to_string()));
        html.push_str(&kpi("Average Pay", &format_millions(summary.mean_compensation)));
        html.push_str(&kpi("Pay Gap", &format!("{:.0}x", summary.pay_gap)));
        html.push_str(&kpi(
            "Top Ratio",
            &format!("{:.0}:1", summary.max_pay_ratio),
        ));
        html.push_str("    </div>\n");
    }

    if let Some(rankings) = &report.rankings {
        html.push_str("    <h2>Compensation Ranking</h2>\n");
        html.push_str("    <table>\n");
        html.push_str(
            "        <tr><th>#</th><th>CEO</th><th>Company</th><th>Industry</th><th>Compensation</th><th>Pay Ratio</th><th>Level</th></tr>\n",
        );
        for row in rankings {
            html.push_str(&format!(
                "        <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td class=\"money\">{}</td><td class=\"money\">{:.0}x</td><td><span class=\"badge\" style=\"background-color: {}\">{}</span></td></tr>\n",
                row.rank,
                escape_html(&row.ceo_name),
                escape_html(&row.company),
                escape_html(&row.industry),
                format_money(row.compensation),
                row.pay_ratio,
                level_color(row.pay_level),
                row.pay_level
            ));
        }
        html.push_str("    </table>\n");
    }

    if let Some(industries) = &report.industries {
        html.push_str("    <h2>Pay by Industry</h2>\n");
        html.push_str("    <table>\n");
        html.push_str(
            "        <tr><th>Industry</th><th>CEOs</th><th>Avg Pay</th><th>Median Pay</th><th>Min Pay</th><th>Max Pay</th><th>Avg Ratio</th></tr>\n",
        );
        for agg in industries {
            html.push_str(&format!(
                "        <tr><td>{}</td><td>{}</td><td class=\"money\">{}</td><td class=\"money\">{}</td><td class=\"money\">{}</td><td class=\"money\">{}</td><td class=\"money\">{:.0}x</td></tr>\n",
                escape_html(&agg.industry),
                agg.count,
                format_millions(agg.mean_compensation),
                format_millions(agg.median_compensation),
                format_millions(agg.min_compensation),
                format_millions(agg.max_compensation),
                agg.mean_pay_ratio
            ));
        }
        html.push_str("    </table>\n");
    }

    if let Some(levels) = &report.levels {
        html.push_str("    <h2>Pay Levels by Industry</h2>\n");
        html.push_str("    <table>\n");
        html.push_str("        <tr><th>Industry</th>");
        for level in PayLevel::ALL {
            html.push_str(&format!("<th>{}</th>", level));
        }
        html.push_str("</tr>\n");
        for breakdown in levels {
            html.push_str(&format!(
                "        <tr><td>{}</td>",
                escape_html(&breakdown.industry)
            ));
            for count in breakdown.counts {
                html.push_str(&format!("<td class=\"money\">{}</td>", count));
            }
            html.push_str("</tr>\n");
        }
        html.push_str("    </table>\n");
    }

    if let Some(correlation) = &report.correlation {
        html.push_str("    <h2>Correlation Matrix</h2>\n");
        html.push_str("    <table>\n");
        html.push_str("        <tr><th></th>");
        for field in &correlation.fields {
            html.push_str(&format!("<th>{}</th>", field.label()));
        }
        html.push_str("</tr>\n");
        for (i, field) in correlation.fields.iter().enumerate() {
            html.push_str(&format!("        <tr><th>{}</th>", field.label()));
            for cell in &correlation.matrix[i] {
                match cell {
                    Some(value) => {
                        html.push_str(&format!("<td class=\"money\">{:.3}</td>", value))
                    }
                    None => html.push_str("<td class=\"undefined\">&ndash;&ndash;</td>"),
                }
            }
            html.push_str("</tr>\n");
        }
        html.push_str("    </table>\n");
    }

    if let Some(buffett) = &report.buffett {
        html.push_str("    <h2>The Buffett Model</h2>\n");
        html.push_str("    <div class=\"kpi-row\">\n");
        html.push_str(&kpi("Baseline", &format_money(buffett.baseline)));
        html.push_str(&kpi(
            "Annual Savings",
            &format_millions(buffett.annual_savings),
        ));
        html.push_str(&kpi(
            &format!(
                "Value After {} Years at {:.0}%",
                buffett.years,
                buffett.return_rate * 100.0
            ),
            &format_millions(buffett.compounded_savings),
        ));
        html.push_str("    </div>\n");
    }

    html.push_str("    <div class=\"footer\">\n");
    html.push_str("        Generated by Paygap - CEO Compensation Analytics\n");
    html.push_str("    </div>\n");
    html.push_str("</body>\n");
    html.push_str("</html>\n");

    html
}

fn kpi(label: &str, value: &str) -> String {
    format!(
        "        <div class=\"kpi\"><div class=\"label\">{}</div><div class=\"value\">{}</div></div>\n",
        escape_html(label),
        escape_html(value)
    )
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
        let record = |ceo: &str, company: &str, comp: f64| CeoRecord {
            company: company.to_string(),
            industry: "Technology".to_string(),
            ceo_name: ceo.to_string(),
            compensation: comp,
            median_worker_pay: 50_000.0,
            tenure_years: Some(5.0),
            market_cap_billions: Some(50.0),
            employees: Some(10_000.0),
        };
        Dataset::new(vec![
            record("Alice Chen", "Acme <Group>", 100_000_000.0),
            record("Bob Singh", "Globex", 2_000_000.0),
        ])
    }

    #[test]
    fn test_render_html_structure() {
        let report =
            build_report(&sample(), &PayBands::default(), &ReportOptions::default()).unwrap();
        let html = render_html(&report);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>CEO Compensation Report</title>"));
        assert!(html.contains("Compensation Ranking"));
        assert!(html.contains("The Buffett Model"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_render_html_escapes_names() {
        let report =
            build_report(&sample(), &PayBands::default(), &ReportOptions::default()).unwrap();
        let html = render_html(&report);
        assert!(html.contains("Acme &lt;Group&gt;"));
        assert!(!html.contains("Acme <Group>"));
    }

    #[test]
    fn test_render_html_level_badges() {
        let report =
            build_report(&sample(), &PayBands::default(), &ReportOptions::default()).unwrap();
        let html = render_html(&report);
        assert!(html.contains("#ef4444")); // Extreme badge
        assert!(html.contains("#10b981")); // Low badge
    }

    #[test]
    fn test_render_html_sections_follow_report() {
        let options = ReportOptions {
            kind: ReportKind::Performance,
            ..ReportOptions::default()
        };
        let report = build_report(&sample(), &PayBands::default(), &options).unwrap();
        let html = render_html(&report);
        assert!(html.contains("Correlation Matrix"));
        assert!(!html.contains("Compensation Ranking"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>\"x\" & 'y'</script>"),
            "&lt;script&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }
}
