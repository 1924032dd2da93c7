/// Sorts the sample in ascending order and hands it back.
///
/// The sample is taken by value so that callers holding the original order
/// cannot observe it being reordered. Ordering follows [`f64::total_cmp`], so
/// `-0.0` sorts before `0.0`.
///
/// # Examples
///
/// ```
/// # use datana_stats::sort::sort_ascending;
/// assert_eq!(sort_ascending(vec![3.0, -1.0, 2.0]), vec![-1.0, 2.0, 3.0]);
/// ```
#[must_use]
pub fn sort_ascending(mut sample: Vec<f64>) -> Vec<f64> {
    sample.sort_unstable_by(f64::total_cmp);
    sample
}
