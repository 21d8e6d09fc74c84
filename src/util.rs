/// Sorts `values` ascending and drops repeated values, leaving a strictly
/// increasing sequence.
pub(crate) fn sorted_unique<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    values.sort_unstable();
    values.dedup();
    values
}
