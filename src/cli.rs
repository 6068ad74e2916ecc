//! CLI argument parsing for Paygap

use crate::record::SortKey;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for rendered reports
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
    /// Self-contained HTML report
    Html,
}

/// Report section to render, mirroring the dashboard's tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Headline KPIs and the compensation ranking
    Summary,
    /// Pay-ratio distribution and inequality by industry
    Inequality,
    /// Industry aggregates and pay-level breakdown
    Industry,
    /// Correlation matrix and the Buffett projection
    Performance,
    /// Everything at once
    All,
}

#[derive(Parser, Debug)]
#[command(name = "paygap")]
#[command(version)]
#[command(about = "CEO compensation analytics: rankings, pay ratios, and industry reports", long_about = None)]
pub struct Cli {
    /// Path to the compensation dataset (CSV with a header row)
    pub dataset: PathBuf,

    /// Filter records (e.g., -e industry=Technology,Energy or -e level=High,Extreme;name~cook)
    #[arg(short = 'e', long = "select", value_name = "EXPR")]
    pub select: Option<String>,

    /// Number of records in ranking tables
    #[arg(short = 'n', long = "top", value_name = "N", default_value = "20")]
    pub top: usize,

    /// Sort key for ranking tables
    #[arg(long = "sort-by", value_enum, default_value = "compensation")]
    pub sort_by: SortKey,

    /// Which report section to render
    #[arg(short = 'r', long = "report", value_enum, default_value = "all")]
    pub report: ReportKind,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// TOML file overriding pay bands and Buffett model defaults
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Baseline pay for the Buffett model (defaults to the dataset minimum)
    #[arg(long = "baseline", value_name = "DOLLARS")]
    pub baseline: Option<f64>,

    /// Assumed annual return rate for the Buffett model (default: 0.07)
    #[arg(long = "return-rate", value_name = "RATE")]
    pub return_rate: Option<f64>,

    /// Investment horizon in years for the Buffett model (default: 10)
    #[arg(long = "years", value_name = "YEARS")]
    pub years: Option<u32>,

    /// Enable verbose internal logging to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_dataset_path() {
        let cli = Cli::parse_from(["paygap", "ceo_pay.csv"]);
        assert_eq!(cli.dataset, PathBuf::from("ceo_pay.csv"));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["paygap", "ceo_pay.csv"]);
        assert_eq!(cli.top, 20);
        assert_eq!(cli.report, ReportKind::All);
        assert!(cli.select.is_none());
        assert!(cli.return_rate.is_none());
        assert!(cli.years.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_select_expression() {
        let cli = Cli::parse_from(["paygap", "-e", "industry=Technology", "ceo_pay.csv"]);
        assert_eq!(cli.select.as_deref(), Some("industry=Technology"));
    }

    #[test]
    fn test_cli_top_custom() {
        let cli = Cli::parse_from(["paygap", "--top", "5", "ceo_pay.csv"]);
        assert_eq!(cli.top, 5);
    }

    #[test]
    fn test_cli_report_kind() {
        let cli = Cli::parse_from(["paygap", "-r", "performance", "ceo_pay.csv"]);
        assert_eq!(cli.report, ReportKind::Performance);
    }

    #[test]
    fn test_cli_sort_by() {
        let cli = Cli::parse_from(["paygap", "--sort-by", "pay-ratio", "ceo_pay.csv"]);
        assert!(matches!(cli.sort_by, SortKey::PayRatio));
    }

    #[test]
    fn test_cli_buffett_overrides() {
        let cli = Cli::parse_from([
            "paygap",
            "--baseline",
            "1000000",
            "--return-rate",
            "0.05",
            "--years",
            "25",
            "ceo_pay.csv",
        ]);
        assert_eq!(cli.baseline, Some(1_000_000.0));
        assert_eq!(cli.return_rate, Some(0.05));
        assert_eq!(cli.years, Some(25));
    }

    #[test]
    fn test_cli_output_path() {
        let cli = Cli::parse_from(["paygap", "-o", "report.html", "ceo_pay.csv"]);
        assert_eq!(cli.output, Some(PathBuf::from("report.html")));
    }

    #[test]
    fn test_cli_requires_dataset() {
        assert!(Cli::try_parse_from(["paygap"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["paygap", "--format", "xml", "ceo_pay.csv"]).is_err());
    }
}
