use log::debug;
use rand::{thread_rng, Rng};
use crate::metrics::Metrics;
use crate::partition::{gather_equal, partition, random_pivot};

/// Randomized quicksort using the thread-local RNG.
pub fn sort<T: Ord + Copy>(arr: &mut [T], metrics: &mut Metrics) {
    sort_with_rng(arr, metrics, &mut thread_rng());
}

/// Randomized quicksort driven by `rng`, so runs can be reproduced from a seed.
///
/// Only the smaller side of each partition is recursed into; the larger side is handled by
/// the loop. The recursed side never holds more than half the range, so the depth stays
/// logarithmic whatever pivots are drawn. Every copy of the pivot is settled together with it,
/// so inputs with few distinct values stay O(n log n).
pub fn sort_with_rng<T: Ord + Copy, R: Rng>(arr: &mut [T], metrics: &mut Metrics, rng: &mut R) {
    if arr.len() <= 1 {
        return;
    }
    debug!("Quicksort of {} elements", arr.len());
    sort_rec(arr, 0, arr.len() - 1, metrics, rng);
}

fn sort_rec<T: Ord + Copy, R: Rng>(arr: &mut [T], mut lo: usize, mut hi: usize, metrics: &mut Metrics, rng: &mut R) {
    while lo < hi {
        let pivot_index = random_pivot(lo, hi, rng);
        let p = partition(arr, lo, hi, pivot_index, metrics);
        // copies of the pivot are already in place and leave the range with it
        let q = gather_equal(arr, p, hi, metrics);

        if p - lo < hi - q {
            if p > lo {
                metrics.enter_recursion();
                sort_rec(arr, lo, p - 1, metrics, rng);
                metrics.exit_recursion();
            }
            lo = q + 1;
        } else {
            if q < hi {
                metrics.enter_recursion();
                sort_rec(arr, q + 1, hi, metrics, rng);
                metrics.exit_recursion();
            }
            if p == lo {
                return;
            }
            hi = p - 1;
        }
    }
}
