use anyhow::{Context, Result};
use clap::Parser;
use paygap::cli::{Cli, OutputFormat};
use paygap::config::PaygapConfig;
use paygap::filter::RecordFilter;
use paygap::json_output::JsonReport;
use paygap::report::ReportOptions;
use paygap::{csv_output, html_output, loader, report};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Validate ranking depth early for a clear message
    if args.top == 0 {
        anyhow::bail!("Invalid value for --top: 0 (must be >= 1)");
    }

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    // Presentation constants: built-in defaults, optionally overridden by file
    let config = match &args.config {
        Some(path) => PaygapConfig::from_file(path)?,
        None => PaygapConfig::default(),
    };
    let bands = config.pay_bands()?;

    let dataset = loader::load_dataset(&args.dataset)?;
    tracing::debug!(rows = dataset.len(), "dataset loaded");

    // Parse filter expression if provided
    let filter = match &args.select {
        Some(expr) => RecordFilter::from_expr(expr)?,
        None => RecordFilter::all(),
    };
    let dataset = dataset.filter(&filter, &bands);
    if dataset.is_empty() {
        anyhow::bail!("no records match the given filters");
    }

    let options = ReportOptions {
        kind: args.report,
        top_n: args.top,
        sort_by: args.sort_by,
        baseline: args.baseline.or(config.buffett.baseline),
        return_rate: args.return_rate.unwrap_or(config.buffett.return_rate),
        years: args.years.unwrap_or(config.buffett.years),
    };
    let dashboard = report::build_report(&dataset, &bands, &options)?;

    let rendered = match args.format {
        OutputFormat::Text => report::render_text(&dashboard),
        OutputFormat::Json => JsonReport::from_report(&dashboard).to_json()?,
        OutputFormat::Csv => csv_output::render_csv(&dashboard),
        OutputFormat::Html => html_output::render_html(&dashboard),
    };

    match &args.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("failed to write report to {}", path.display()))?,
        None => print!("{rendered}"),
    }

    Ok(())
}
