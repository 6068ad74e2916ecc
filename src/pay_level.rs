//! Pay-level bucketing from compensation magnitude
//!
//! Buckets are contiguous, lower-inclusive/upper-exclusive intervals that
//! cover all of `[0, inf)`: every compensation value maps to exactly one
//! level. The boundary values are presentation constants, overridable via
//! the `[bands]` section of `paygap.toml`.

use crate::error::MetricsError;
use serde::{Deserialize, Serialize};

/// Coarse compensation tier, ordered lowest to highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PayLevel {
    Minimal,
    Low,
    Medium,
    High,
    Extreme,
}

impl PayLevel {
    /// All levels in ascending order.
    pub const ALL: [PayLevel; 5] = [
        PayLevel::Minimal,
        PayLevel::Low,
        PayLevel::Medium,
        PayLevel::High,
        PayLevel::Extreme,
    ];

    /// Parse a level name as it appears in filter expressions
    /// (case-insensitive).
    pub fn parse(name: &str) -> Option<PayLevel> {
        match name.to_ascii_lowercase().as_str() {
            "minimal" => Some(PayLevel::Minimal),
            "low" => Some(PayLevel::Low),
            "medium" => Some(PayLevel::Medium),
            "high" => Some(PayLevel::High),
            "extreme" => Some(PayLevel::Extreme),
            _ => None,
        }
    }

    /// Position in [`PayLevel::ALL`]; used to index per-level count arrays.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for PayLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayLevel::Minimal => write!(f, "Minimal"),
            PayLevel::Low => write!(f, "Low"),
            PayLevel::Medium => write!(f, "Medium"),
            PayLevel::High => write!(f, "High"),
            PayLevel::Extreme => write!(f, "Extreme"),
        }
    }
}

/// Four ascending boundary values splitting `[0, inf)` into the five levels.
///
/// A compensation below `boundaries[0]` is `Minimal`; at or above
/// `boundaries[3]` it is `Extreme`; in between, the interval
/// `[boundaries[i-1], boundaries[i])` maps to the i-th level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayBands {
    boundaries: [f64; 4],
}

impl PayBands {
    /// Build bands from ascending boundaries.
    pub fn new(boundaries: [f64; 4]) -> Result<Self, MetricsError> {
        for pair in boundaries.windows(2) {
            if pair[0] >= pair[1] {
                return Err(MetricsError::InvalidInput(format!(
                    "pay band boundaries must be strictly ascending, got {:?}",
                    boundaries
                )));
            }
        }
        if !boundaries.iter().all(|b| b.is_finite() && *b > 0.0) {
            return Err(MetricsError::InvalidInput(format!(
                "pay band boundaries must be positive finite numbers, got {:?}",
                boundaries
            )));
        }
        Ok(Self { boundaries })
    }

    /// Assign the bucket whose interval contains `compensation`.
    pub fn classify(&self, compensation: f64) -> PayLevel {
        for (i, boundary) in self.boundaries.iter().enumerate() {
            if compensation < *boundary {
                return PayLevel::ALL[i];
            }
        }
        PayLevel::Extreme
    }

    pub fn boundaries(&self) -> &[f64; 4] {
        &self.boundaries
    }
}

impl Default for PayBands {
    /// $1M / $5M / $20M / $50M.
    fn default() -> Self {
        Self {
            boundaries: [1_000_000.0, 5_000_000.0, 20_000_000.0, 50_000_000.0],
        }
    }
}
