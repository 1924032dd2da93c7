//! Analysis settings
//!
//! Settings come from built-in defaults, optionally replaced by a JSON file,
//! and finally by individual command-line flags.

use std::path::PathBuf;

use clap::Args;
use serde::{Deserialize, Serialize};

use crate::{loader::ValueRange, util};

/// Admission bounds and histogram layout for one analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Lower admission bound (exclusive)
    pub min_data_value: f64,
    /// Upper admission bound (exclusive) and histogram extent
    pub max_data_value: f64,
    /// Histogram bucket size
    #[serde(alias = "boundary_size")]
    pub bucket_width: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_data_value: 0.0,
            max_data_value: 100.0,
            bucket_width: 10.0,
        }
    }
}

impl AnalysisConfig {
    #[must_use]
    pub fn value_range(&self) -> ValueRange {
        ValueRange {
            min: self.min_data_value,
            max: self.max_data_value,
        }
    }
}

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct ConfigArg {
    /// JSON file with analysis settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Lower admission bound, exclusive [default: 0]
    #[arg(long = "min", allow_negative_numbers = true)]
    pub min_data_value: Option<f64>,

    /// Upper admission bound, exclusive, and histogram extent [default: 100]
    #[arg(long = "max", allow_negative_numbers = true)]
    pub max_data_value: Option<f64>,

    /// Histogram bucket width [default: 10]
    #[arg(long)]
    pub bucket_width: Option<f64>,
}

impl ConfigArg {
    pub fn resolve(&self) -> anyhow::Result<AnalysisConfig> {
        let base = match &self.config {
            Some(path) => util::read_json_file("config", path)?,
            None => AnalysisConfig::default(),
        };
        let config = self.apply(base);
        log::debug!("Using {config:?}");
        Ok(config)
    }

    fn apply(&self, base: AnalysisConfig) -> AnalysisConfig {
        AnalysisConfig {
            min_data_value: self.min_data_value.unwrap_or(base.min_data_value),
            max_data_value: self.max_data_value.unwrap_or(base.max_data_value),
            bucket_width: self.bucket_width.unwrap_or(base.bucket_width),
        }
    }
}
