//! Descriptive statistics and fixed-width histograms for one-dimensional samples.
//!
//! This crate provides:
//!
//! - **Aggregation**: sum and arithmetic mean
//! - **Dispersion**: population and sample standard deviation
//! - **Sorting**: ascending ordering of a sample
//! - **Histogram generation**: frequency counts over fixed-width buckets starting at zero
//! - **Descriptive statistics**: all scalar measures of a sample in one value
//!
//! # Modules
//!
//! - [`aggregate`]: Sum and mean
//! - [`dispersion`]: Standard deviation with population or sample divisor
//! - [`sort`]: Ascending sort used before bucketing
//! - [`histogram`]: Histogram construction over `[0, w), [w, 2w), ...`
//! - [`descriptive`]: Combined scalar statistics
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use datana_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(&values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```
//!
//! ## Choosing the standard deviation divisor
//!
//! ```
//! use datana_stats::dispersion::{StdDevMode, standard_deviation};
//!
//! let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! assert_eq!(standard_deviation(&values, StdDevMode::Population).unwrap(), 2.0);
//! ```
//!
//! ## Creating a histogram
//!
//! ```
//! use datana_stats::histogram::build_histogram;
//!
//! let values = vec![3.0, 12.0, 4.0, 25.0];
//! let histogram = build_histogram(values, 30.0, 10.0).unwrap();
//! assert_eq!(histogram.counts(), vec![2, 1, 1]);
//! ```

pub mod aggregate;
pub mod descriptive;
pub mod dispersion;
pub mod histogram;
pub mod sort;

/// Errors raised by the statistics functions.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    /// A statistic that divides by the sample size was requested on an empty sample.
    #[display("sample is empty")]
    EmptySample,
    /// The sample standard deviation needs at least two values.
    #[display("sample has {actual} value(s), at least {required} required")]
    InsufficientSampleSize { required: usize, actual: usize },
    /// The histogram bucket width is not positive, the extent is not finite, or
    /// the layout needs too many buckets.
    #[display("invalid histogram buckets (max value {max_value}, bucket width {bucket_width})")]
    InvalidBucketConfiguration { max_value: f64, bucket_width: f64 },
}
