use std::ops::Range;

use crate::{StatsError, sort::sort_ascending};

/// Largest number of buckets a [`HistogramSpec`] may describe.
pub const MAX_BUCKET_COUNT: u32 = 1 << 20;

/// Most decimal places a bucket label is rounded to.
const MAX_LABEL_DECIMALS: i32 = 12;

/// Bucket layout of a histogram: fixed-width buckets starting at zero.
///
/// The buckets are `[0, w), [w, 2w), ...`, with `floor(max_value / w)` of
/// them. When `max_value` is not a multiple of the width, the range between
/// the last bucket's upper bound and `max_value` is not covered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramSpec {
    max_value: f64,
    bucket_width: f64,
}

impl HistogramSpec {
    /// Creates a bucket layout.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidBucketConfiguration`] if `bucket_width` is
    /// not strictly positive (including NaN), `max_value` is not finite, or
    /// the layout would need more than [`MAX_BUCKET_COUNT`] buckets.
    pub fn new(max_value: f64, bucket_width: f64) -> Result<Self, StatsError> {
        let invalid = StatsError::InvalidBucketConfiguration {
            max_value,
            bucket_width,
        };
        if bucket_width.is_nan() || bucket_width <= 0.0 || !max_value.is_finite() {
            return Err(invalid);
        }
        // a tiny width can overflow the ratio even when both inputs are finite
        let steps = (max_value / bucket_width).floor();
        if !steps.is_finite() || steps > f64::from(MAX_BUCKET_COUNT) {
            return Err(invalid);
        }
        Ok(Self {
            max_value,
            bucket_width,
        })
    }

    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    #[must_use]
    pub fn bucket_width(&self) -> f64 {
        self.bucket_width
    }

    /// Number of buckets, `floor(max_value / bucket_width)`.
    ///
    /// Zero when `max_value` is smaller than one bucket width.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn step_count(&self) -> usize {
        // float-to-int casts saturate: negative extents give 0
        (self.max_value / self.bucket_width).floor() as usize
    }

    /// Exclusive upper bound of the covered range, `step_count · bucket_width`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn covered_max(&self) -> f64 {
        self.step_count() as f64 * self.bucket_width
    }

    #[expect(clippy::cast_precision_loss)]
    fn bucket_range(&self, index: usize) -> Range<f64> {
        let start = index as f64 * self.bucket_width;
        let end = (index + 1) as f64 * self.bucket_width;
        start..end
    }
}

/// Frequency counts of a sample over the buckets of a [`HistogramSpec`].
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// The buckets in ascending order of their range.
    pub buckets: Vec<HistogramBucket>,
}

/// A single bucket in a histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBucket {
    /// The range of values covered by this bucket (inclusive start, exclusive end).
    pub range: Range<f64>,
    /// The number of values that fall within this bucket's range.
    pub count: u64,
}

impl HistogramBucket {
    /// Display label of the bucket, `"{lower} < {upper}"`.
    ///
    /// Bounds are rounded to the decimal places of the bucket width, so a
    /// width of `0.1` gives `0.3 < 0.4` rather than exposing the
    /// floating-point error of `3 × 0.1`.
    #[must_use]
    pub fn label(&self) -> String {
        match label_scale(self.range.end - self.range.start) {
            Some(scale) => format!(
                "{} < {}",
                (self.range.start * scale).round() / scale,
                (self.range.end * scale).round() / scale
            ),
            None => format!("{} < {}", self.range.start, self.range.end),
        }
    }
}

/// Power of ten that turns `width` into a whole number, if there is a small one.
fn label_scale(width: f64) -> Option<f64> {
    (0..=MAX_LABEL_DECIMALS)
        .map(|decimals| 10f64.powi(decimals))
        .find(|scale| {
            let scaled = width * scale;
            (scaled - scaled.round()).abs() < 1e-9
        })
}

impl Histogram {
    /// Creates a histogram from unsorted values.
    ///
    /// The values are sorted before bucketing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use datana_stats::histogram::{Histogram, HistogramSpec};
    /// let spec = HistogramSpec::new(100.0, 10.0).unwrap();
    /// let values = [3.0, 24.0, 51.0, 10.0, 60.0, 12.0, 4.0, 35.0, 36.0, 40.0, 42.0, 49.0, 5.0, 53.0, 11.0];
    /// let histogram = Histogram::new(values, spec);
    /// assert_eq!(histogram.counts(), vec![3, 3, 1, 2, 3, 2, 1, 0, 0, 0]);
    /// ```
    #[must_use]
    pub fn new<I>(values: I, spec: HistogramSpec) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let sorted = sort_ascending(values.into_iter().collect());
        Self::from_sorted(&sorted, spec)
    }

    /// Creates a histogram from pre-sorted values.
    ///
    /// A cursor walks the sorted values once. For each bucket it advances
    /// while the current value is strictly below the bucket's upper bound, so a
    /// value equal to a boundary is counted in the following bucket. Once the
    /// values are exhausted the remaining buckets stay at zero. Values below
    /// zero and values at or above [`HistogramSpec::covered_max`] are not
    /// counted.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], spec: HistogramSpec) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
            "values must be sorted in ascending order"
        );

        let mut buckets = (0..spec.step_count())
            .map(|index| HistogramBucket {
                range: spec.bucket_range(index),
                count: 0,
            })
            .collect::<Vec<_>>();

        // Bucket 0 starts at zero; NaN sorts to either end and is never counted
        let mut cursor = sorted_values.iter().take_while(|v| v.is_nan() || **v < 0.0).count();

        for bucket in &mut buckets {
            let mut count = 0;
            while cursor < sorted_values.len() && sorted_values[cursor] < bucket.range.end {
                count += 1;
                cursor += 1;
            }
            bucket.count = count;

            if cursor == sorted_values.len() {
                break;
            }
        }

        Self { buckets }
    }

    /// Bucket counts in order.
    #[must_use]
    pub fn counts(&self) -> Vec<u64> {
        self.buckets.iter().map(|b| b.count).collect()
    }

    /// Bucket labels in order, `"{lower} < {upper}"`.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.buckets.iter().map(HistogramBucket::label).collect()
    }

    /// Number of values counted in any bucket.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.buckets.iter().map(|b| b.count).sum()
    }
}

/// Builds a histogram of `sample` with buckets of `bucket_width` up to `max_value`.
///
/// # Errors
///
/// Returns [`StatsError::InvalidBucketConfiguration`] if the bucket layout is
/// invalid, see [`HistogramSpec::new`].
pub fn build_histogram(
    sample: Vec<f64>,
    max_value: f64,
    bucket_width: f64,
) -> Result<Histogram, StatsError> {
    let spec = HistogramSpec::new(max_value, bucket_width)?;
    Ok(Histogram::new(sample, spec))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SORTED_SAMPLE: [f64; 15] = [
        3.0, 4.0, 5.0, 10.0, 11.0, 12.0, 24.0, 35.0, 36.0, 40.0, 42.0, 49.0, 51.0, 53.0, 60.0,
    ];
    const SHUFFLED_SAMPLE: [f64; 15] = [
        3.0, 24.0, 51.0, 10.0, 60.0, 12.0, 4.0, 35.0, 36.0, 40.0, 42.0, 49.0, 5.0, 53.0, 11.0,
    ];

    #[test]
    fn test_sorted_sample() {
        let histogram = build_histogram(SORTED_SAMPLE.to_vec(), 100.0, 10.0).unwrap();
        assert_eq!(histogram.counts(), vec![3, 3, 1, 2, 3, 2, 1, 0, 0, 0]);
    }

    #[test]
    fn test_shuffled_sample() {
        let histogram = build_histogram(SHUFFLED_SAMPLE.to_vec(), 100.0, 10.0).unwrap();
        assert_eq!(histogram.counts(), vec![3, 3, 1, 2, 3, 2, 1, 0, 0, 0]);
    }

    #[test]
    fn test_boundary_value_goes_to_next_bucket() {
        let histogram = build_histogram(vec![9.999, 10.0, 20.0], 30.0, 10.0).unwrap();
        assert_eq!(histogram.counts(), vec![1, 1, 1]);
    }

    #[test]
    fn test_values_at_or_above_max_not_counted() {
        let histogram = build_histogram(vec![5.0, 29.0, 30.0, 45.0], 30.0, 10.0).unwrap();
        assert_eq!(histogram.counts(), vec![1, 0, 1]);
        assert_eq!(histogram.total(), 2);
    }

    #[test]
    fn test_non_multiple_extent_truncates_coverage() {
        // floor(95 / 10) = 9 buckets, so [90, 95) is not covered
        let spec = HistogramSpec::new(95.0, 10.0).unwrap();
        assert_eq!(spec.step_count(), 9);
        assert_eq!(spec.covered_max(), 90.0);

        let histogram = Histogram::new([1.0, 89.0, 91.0, 94.0], spec);
        assert_eq!(histogram.buckets.len(), 9);
        assert_eq!(histogram.total(), 2);
    }

    #[test]
    fn test_negative_values_not_counted() {
        let histogram = build_histogram(vec![-5.0, -0.5, 0.0, 1.0], 20.0, 10.0).unwrap();
        assert_eq!(histogram.counts(), vec![2, 0]);
    }

    #[test]
    fn test_total_matches_covered_values() {
        let sample = vec![
            -3.0, 0.0, 0.5, 2.5, 2.5, 7.75, 12.0, 14.999, 15.0, 17.5, 21.0, 22.5, 40.0,
        ];
        let spec = HistogramSpec::new(22.0, 2.5).unwrap();
        let covered_max = spec.covered_max();
        let expected = sample
            .iter()
            .filter(|&&v| (0.0..covered_max).contains(&v))
            .count();

        let histogram = Histogram::new(sample, spec);
        assert_eq!(histogram.total(), expected as u64);
    }

    #[test]
    fn test_nan_not_counted() {
        let histogram = build_histogram(vec![f64::NAN, 5.0, -f64::NAN, 15.0], 20.0, 10.0).unwrap();
        assert_eq!(histogram.counts(), vec![1, 1]);
    }

    #[test]
    fn test_empty_sample_gives_zero_buckets() {
        let histogram = build_histogram(vec![], 50.0, 10.0).unwrap();
        assert_eq!(histogram.counts(), vec![0; 5]);
    }

    #[test]
    fn test_max_smaller_than_width() {
        let histogram = build_histogram(vec![1.0, 2.0], 5.0, 10.0).unwrap();
        assert!(histogram.buckets.is_empty());
    }

    #[test]
    fn test_invalid_bucket_width() {
        for width in [0.0, -10.0, f64::NAN] {
            assert!(matches!(
                build_histogram(vec![1.0], 100.0, width),
                Err(StatsError::InvalidBucketConfiguration { .. })
            ));
        }
    }

    #[test]
    fn test_non_finite_max_value() {
        assert!(HistogramSpec::new(f64::INFINITY, 10.0).is_err());
        assert!(HistogramSpec::new(f64::NAN, 10.0).is_err());
    }

    #[test]
    fn test_bucket_count_overflow() {
        // finite inputs whose ratio overflows to infinity
        assert!(matches!(
            build_histogram(vec![1.0, 2.0], 1e300, 1e-300),
            Err(StatsError::InvalidBucketConfiguration { .. })
        ));
        assert!(HistogramSpec::new(1e12, 1e-6).is_err());
        assert!(HistogramSpec::new(f64::from(MAX_BUCKET_COUNT) + 1.0, 1.0).is_err());

        let spec = HistogramSpec::new(f64::from(MAX_BUCKET_COUNT), 1.0).unwrap();
        assert_eq!(spec.step_count(), MAX_BUCKET_COUNT as usize);
    }

    #[test]
    fn test_labels() {
        let histogram = build_histogram(vec![], 30.0, 10.0).unwrap();
        assert_eq!(histogram.labels(), vec!["0 < 10", "10 < 20", "20 < 30"]);

        let histogram = build_histogram(vec![], 1.0, 0.5).unwrap();
        assert_eq!(histogram.labels(), vec!["0 < 0.5", "0.5 < 1"]);
    }

    #[test]
    fn test_labels_round_to_width_decimals() {
        let histogram = build_histogram(vec![], 0.5, 0.1).unwrap();
        assert_eq!(
            histogram.labels(),
            vec!["0 < 0.1", "0.1 < 0.2", "0.2 < 0.3", "0.3 < 0.4", "0.4 < 0.5"]
        );
        // bucket bounds keep the exact products used by the walk
        assert_eq!(histogram.buckets[2].range.end, 3.0 * 0.1);

        let histogram = build_histogram(vec![], 7.5, 2.5).unwrap();
        assert_eq!(histogram.labels(), vec!["0 < 2.5", "2.5 < 5", "5 < 7.5"]);
    }

    #[test]
    #[should_panic(expected = "values must be sorted in ascending order")]
    fn test_from_sorted_rejects_unsorted() {
        let spec = HistogramSpec::new(10.0, 1.0).unwrap();
        let _ = Histogram::from_sorted(&[3.0, 1.0], spec);
    }
}
