//! Error types for dataset loading and metric computation

use thiserror::Error;

/// Errors surfaced by the metrics engine and the dataset loader.
///
/// Load-time structural problems (`MissingColumn`) are fatal; the binary
/// reports them and exits. The remaining variants come out of individual
/// metric calls and never carry a NaN in disguise.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    /// A metrics function was called with a bad parameter.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A ratio computation hit a zero denominator.
    #[error("division by zero while computing {0}")]
    DivisionByZero(String),

    /// The source table lacks a required column.
    #[error("missing required column '{0}'")]
    MissingColumn(String),

    /// A statistic has no mathematical value for the given input
    /// (e.g. correlation over a zero-variance column).
    #[error("statistic '{0}' is undefined for this input")]
    Undefined(String),
}
