use crate::{
    StatsError,
    aggregate::{mean, sum},
    dispersion::{StdDevMode, standard_deviation},
};

/// Descriptive statistics summarizing a sample.
///
/// This structure contains the scalar measures reported for a sample: its
/// size, total, mean, and both standard deviation variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats {
    /// The number of values in the sample.
    pub count: usize,
    /// The sum of all values.
    pub sum: f64,
    /// The arithmetic mean of the sample.
    pub mean: f64,
    /// The standard deviation with divisor `n`.
    pub population_std_dev: f64,
    /// The standard deviation with divisor `n - 1`.
    pub sample_std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics of a sample.
    ///
    /// # Errors
    ///
    /// Fails without a partial result when any measure is undefined:
    ///
    /// * [`StatsError::EmptySample`] - if the sample is empty
    /// * [`StatsError::InsufficientSampleSize`] - if the sample has a single value
    ///
    /// # Examples
    ///
    /// ```
    /// # use datana_stats::descriptive::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// let stats = DescriptiveStats::new(&values).unwrap();
    /// assert_eq!(stats.count, 5);
    /// assert_eq!(stats.sum, 15.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.population_std_dev, 2.0_f64.sqrt());
    /// ```
    pub fn new(sample: &[f64]) -> Result<Self, StatsError> {
        Ok(Self {
            count: sample.len(),
            sum: sum(sample),
            mean: mean(sample)?,
            population_std_dev: standard_deviation(sample, StdDevMode::Population)?,
            sample_std_dev: standard_deviation(sample, StdDevMode::Sample)?,
        })
    }

    /// Returns the standard deviation for the given mode.
    #[must_use]
    pub fn std_dev(&self, mode: StdDevMode) -> f64 {
        match mode {
            StdDevMode::Population => self.population_std_dev,
            StdDevMode::Sample => self.sample_std_dev,
        }
    }
}
