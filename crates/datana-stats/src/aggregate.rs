use crate::StatsError;

/// Returns the total of all values, accumulated left to right.
///
/// The sum of an empty sample is `0.0`.
///
/// # Examples
///
/// ```
/// # use datana_stats::aggregate::sum;
/// assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
/// assert_eq!(sum(&[]), 0.0);
/// ```
#[must_use]
pub fn sum(sample: &[f64]) -> f64 {
    sample.iter().fold(0.0, |acc, &v| acc + v)
}

/// Returns the arithmetic mean of the sample.
///
/// # Errors
///
/// Returns [`StatsError::EmptySample`] if `sample` is empty.
///
/// # Examples
///
/// ```
/// # use datana_stats::aggregate::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
/// assert!(mean(&[]).is_err());
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn mean(sample: &[f64]) -> Result<f64, StatsError> {
    if sample.is_empty() {
        return Err(StatsError::EmptySample);
    }
    Ok(sum(sample) / sample.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED: [f64; 10] = [1.0, 2.0, -3.0, 4.0, 5.0, -6.0, 7.0, 8.0, -9.0, 10.0];

    #[test]
    fn test_sum_positive() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        assert_eq!(sum(&values), 55.0);
    }

    #[test]
    fn test_sum_with_negatives() {
        assert_eq!(sum(&MIXED), 19.0);
    }

    #[test]
    fn test_sum_empty() {
        assert_eq!(sum(&[]), 0.0);
    }

    #[test]
    fn test_sum_permutation_invariant() {
        let mut reversed = MIXED;
        reversed.reverse();
        assert!((sum(&MIXED) - sum(&reversed)).abs() < 1e-12);
    }

    #[test]
    fn test_mean_with_negatives() {
        assert!((mean(&MIXED).unwrap() - 1.9).abs() < 1e-12);
    }

    #[test]
    fn test_mean_times_len_is_sum() {
        let values = [0.1, 0.2, 0.7, 13.25, 99.9];
        let m = mean(&values).unwrap();
        assert!((m * 5.0 - sum(&values)).abs() < 1e-9);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), Err(StatsError::EmptySample));
    }
}
