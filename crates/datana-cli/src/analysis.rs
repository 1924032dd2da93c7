use std::path::Path;

use anyhow::Context;
use datana_stats::{
    StatsError,
    descriptive::DescriptiveStats,
    histogram::{Histogram, HistogramSpec},
};

use crate::{config::AnalysisConfig, loader};

/// Statistics and histogram of one data sample
#[derive(Debug, Clone)]
pub struct Analysis {
    pub stats: DescriptiveStats,
    pub histogram: Histogram,
    pub spec: HistogramSpec,
}

impl Analysis {
    /// Computes the scalar statistics and the histogram of `sample`.
    ///
    /// The histogram spans `[0, max_data_value)` in buckets of `bucket_width`.
    pub fn run(sample: Vec<f64>, config: &AnalysisConfig) -> Result<Self, StatsError> {
        let spec = HistogramSpec::new(config.max_data_value, config.bucket_width)?;
        let stats = DescriptiveStats::new(&sample)?;
        let histogram = Histogram::new(sample, spec);
        Ok(Self {
            stats,
            histogram,
            spec,
        })
    }

    /// Number of values outside every bucket
    #[must_use]
    pub fn uncounted(&self) -> u64 {
        self.stats.count as u64 - self.histogram.total()
    }
}

/// Loads the data sample at `source` and analyzes it.
pub fn analyze_source(source: &Path, config: &AnalysisConfig) -> anyhow::Result<Analysis> {
    log::info!("Loading data sample from {}...", source.display());
    let sample = loader::load_sample(source, config.value_range())?;
    log::info!("Loaded {} values", sample.len());

    log::info!("Computing statistics and histogram...");
    let analysis = Analysis::run(sample, config).context("Failed to analyze data sample")?;
    log::info!(
        "Statistics computed ({} of {} values in {} buckets)",
        analysis.histogram.total(),
        analysis.stats.count,
        analysis.histogram.buckets.len()
    );

    if analysis.uncounted() > 0 {
        log::warn!(
            "{} values lie outside the histogram range [0, {})",
            analysis.uncounted(),
            analysis.spec.covered_max()
        );
    }

    Ok(analysis)
}
