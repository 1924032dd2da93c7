use crate::{
    StatsError,
    aggregate::{mean, sum},
};

/// Selects the divisor used for the variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StdDevMode {
    /// Divide by `n`: the sample is the whole population.
    Population,
    /// Divide by `n - 1` (Bessel's correction): the sample estimates a larger population.
    Sample,
}

impl StdDevMode {
    /// Smallest sample size for which the standard deviation is defined.
    #[must_use]
    pub const fn min_sample_size(self) -> usize {
        match self {
            StdDevMode::Population => 1,
            StdDevMode::Sample => 2,
        }
    }
}

/// Computes the standard deviation of the sample.
///
/// The variance is derived in a single pass from the sum `S` and the sum of
/// squares `Q`:
///
/// - population: `Q / n - mean²`
/// - sample: `Q / (n - 1) - mean · S / (n - 1)`
///
/// Both are rearrangements of `Σ(xᵢ - mean)² / divisor`. Cancellation can make
/// the result slightly negative for samples with large magnitude and small
/// spread, so the variance is clamped at zero before taking the square root.
///
/// # Errors
///
/// - [`StatsError::EmptySample`] if `sample` is empty.
/// - [`StatsError::InsufficientSampleSize`] if `mode` is [`StdDevMode::Sample`]
///   and `sample` has a single value.
///
/// # Examples
///
/// ```
/// # use datana_stats::dispersion::{StdDevMode, standard_deviation};
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// let population = standard_deviation(&values, StdDevMode::Population).unwrap();
/// let sample = standard_deviation(&values, StdDevMode::Sample).unwrap();
/// assert!((population - 2.872).abs() < 0.001);
/// assert!((sample - 3.027).abs() < 0.001);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn standard_deviation(sample: &[f64], mode: StdDevMode) -> Result<f64, StatsError> {
    let mean = mean(sample)?;
    let n = sample.len();
    let required = mode.min_sample_size();
    if n < required {
        return Err(StatsError::InsufficientSampleSize {
            required,
            actual: n,
        });
    }

    let sum = sum(sample);
    let sum_of_squares = sample.iter().fold(0.0, |acc, &v| acc + v * v);

    let variance = match mode {
        StdDevMode::Population => sum_of_squares / n as f64 - mean * mean,
        StdDevMode::Sample => {
            let divisor = (n - 1) as f64;
            sum_of_squares / divisor - mean * sum / divisor
        }
    };

    Ok(variance.max(0.0).sqrt())
}
