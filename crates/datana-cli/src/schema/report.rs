use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{analysis::Analysis, config::AnalysisConfig};

/// Machine-readable result of one analysis
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Data sample file the values were loaded from
    pub source: PathBuf,
    /// Settings the analysis ran with
    pub config: AnalysisConfig,
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub population_std_dev: f64,
    pub sample_std_dev: f64,
    /// Histogram buckets in ascending order
    pub buckets: Vec<BucketReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BucketReport {
    /// `"{lower} < {upper}"`
    pub label: String,
    pub lower: f64,
    pub upper: f64,
    pub count: u64,
}

impl AnalysisReport {
    pub fn new(source: &Path, config: &AnalysisConfig, analysis: &Analysis) -> Self {
        let stats = &analysis.stats;
        let buckets = analysis
            .histogram
            .buckets
            .iter()
            .map(|bucket| BucketReport {
                label: bucket.label(),
                lower: bucket.range.start,
                upper: bucket.range.end,
                count: bucket.count,
            })
            .collect();

        Self {
            source: source.to_owned(),
            config: *config,
            count: stats.count,
            sum: stats.sum,
            mean: stats.mean,
            population_std_dev: stats.population_std_dev,
            sample_std_dev: stats.sample_std_dev,
            buckets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_json() {
        let config = AnalysisConfig {
            max_data_value: 30.0,
            ..AnalysisConfig::default()
        };
        let analysis = Analysis::run(vec![5.0, 15.0, 16.0, 29.0], &config).unwrap();
        let report = AnalysisReport::new(Path::new("data.csv"), &config, &analysis);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["source"], "data.csv");
        assert_eq!(json["count"], 4);
        assert_eq!(json["mean"], 16.25);
        assert_eq!(json["config"]["bucket_width"], 10.0);
        assert_eq!(json["buckets"].as_array().unwrap().len(), 3);
        assert_eq!(json["buckets"][1]["label"], "10 < 20");
        assert_eq!(json["buckets"][1]["count"], 2);
        assert_eq!(json["buckets"][2]["lower"], 20.0);
    }
}
