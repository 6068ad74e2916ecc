//! Optional TOML configuration for presentation constants
//!
//! The pay-band boundaries and the Buffett model defaults are presentation
//! choices, not derivable values, so they live in `paygap.toml` rather
//! than in code. Everything has a built-in default; the file is optional
//! and flags still override it.
//!
//! ```toml
//! [bands]
//! boundaries = [1000000.0, 5000000.0, 20000000.0, 50000000.0]
//!
//! [buffett]
//! return_rate = 0.07
//! years = 10
//! ```

use crate::error::MetricsError;
use crate::pay_level::PayBands;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaygapConfig {
    pub bands: BandsConfig,
    pub buffett: BuffettConfig,
}

/// Pay-band boundaries, ascending.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BandsConfig {
    pub boundaries: [f64; 4],
}

/// Buffett model defaults. A `baseline` of `None` means "use the dataset
/// minimum".
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuffettConfig {
    pub baseline: Option<f64>,
    pub return_rate: f64,
    pub years: u32,
}

impl Default for BandsConfig {
    fn default() -> Self {
        Self {
            boundaries: *PayBands::default().boundaries(),
        }
    }
}

impl Default for BuffettConfig {
    fn default() -> Self {
        Self {
            baseline: None,
            return_rate: 0.07,
            years: 10,
        }
    }
}

impl PaygapConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Validated pay bands from the configured boundaries.
    pub fn pay_bands(&self) -> Result<PayBands, MetricsError> {
        PayBands::new(self.bands.boundaries)
    }
}
