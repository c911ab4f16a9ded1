use crate::metrics::Metrics;

/// Sorts `arr` in place. Used as the base case of every recursion in the crate.
///
/// Every test of the inner loop is counted, including the one that stops it, unless the
/// scan ran off the front of the slice.
pub fn insertion_sort<T: Ord + Copy>(arr: &mut [T], metrics: &mut Metrics) {
    for i in 1..arr.len() {
        let key = arr[i];
        let mut j = i;
        while j > 0 {
            metrics.record_comparison();
            if arr[j - 1] <= key {
                break;
            }
            arr[j] = arr[j - 1];
            j -= 1;
        }
        arr[j] = key;
    }
}
