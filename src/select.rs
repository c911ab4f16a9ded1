use log::{debug, error, trace};
use crate::base_case::insertion_sort;
use crate::config::GROUP_SIZE;
use crate::error::{Error, Result};
use crate::metrics::Metrics;
use crate::partition::{gather_equal, partition};

/// Returns the element that would sit at index `k` if `arr` were sorted.
///
/// Worst-case linear time: the pivot is the median of the group medians, and at least 3/10 of
/// the range is discarded on every step, duplicates included. Only the median-of-medians call
/// recurses, so the depth is logarithmic. `arr` is reordered in place.
pub fn select<T: Ord + Copy>(arr: &mut [T], k: usize, metrics: &mut Metrics) -> Result<T> {
    if k >= arr.len() {
        return Err(Error::InvalidArgument(format!(
            "k = {k} is out of range for {} elements",
            arr.len()
        )));
    }
    debug!("Select k = {k} of {} elements", arr.len());

    let hi = arr.len() - 1;
    select_rec(arr, 0, hi, k, metrics)
}

fn select_rec<T: Ord + Copy>(arr: &mut [T], lo: usize, hi: usize, k: usize, metrics: &mut Metrics) -> Result<T> {
    metrics.enter_recursion();
    let res = select_range(arr, lo, hi, k, metrics);
    metrics.exit_recursion();
    res
}

fn select_range<T: Ord + Copy>(arr: &mut [T], mut lo: usize, mut hi: usize, k: usize, metrics: &mut Metrics) -> Result<T> {
    loop {
        debug_assert!(lo <= k && k <= hi);

        if hi - lo + 1 <= GROUP_SIZE {
            insertion_sort(&mut arr[lo..=hi], metrics);
            return Ok(arr[k]);
        }

        let pivot = median_of_medians(arr, lo, hi, metrics)?;
        let pivot_index = find_pivot_index(arr, lo, hi, pivot)?;
        let p = partition(arr, lo, hi, pivot_index, metrics);
        // [p, q] holds every copy of the pivot, so duplicates never stall the loop
        let q = gather_equal(arr, p, hi, metrics);
        trace!("Select [{lo}, {hi}] k = {k}: pivot block [{p}, {q}]");

        if k < p {
            hi = p - 1;
        } else if k > q {
            lo = q + 1;
        } else {
            return Ok(arr[k]);
        }
    }
}

/// Sorts every group of `GROUP_SIZE` in `[lo, hi]` and returns the median of the group medians.
fn median_of_medians<T: Ord + Copy>(arr: &mut [T], lo: usize, hi: usize, metrics: &mut Metrics) -> Result<T> {
    let num_groups = (hi - lo + GROUP_SIZE) / GROUP_SIZE;

    let mut medians = Vec::with_capacity(num_groups);
    metrics.record_allocation(num_groups as u64);

    for group_lo in (lo..=hi).step_by(GROUP_SIZE) {
        let group_hi = (group_lo + GROUP_SIZE - 1).min(hi);
        insertion_sort(&mut arr[group_lo..=group_hi], metrics);
        medians.push(arr[group_lo + (group_hi - group_lo) / 2]);
    }

    if num_groups == 1 {
        return Ok(medians[0]);
    }
    select_rec(&mut medians, 0, num_groups - 1, num_groups / 2, metrics)
}

/// First index in `[lo, hi]` holding `pivot`. Any occurrence works for partitioning.
fn find_pivot_index<T: Ord + Copy>(arr: &[T], lo: usize, hi: usize, pivot: T) -> Result<usize> {
    match arr[lo..=hi].iter().position(|x| *x == pivot) {
        Some(offset) => Ok(lo + offset),
        None => {
            error!("Median of medians not found in [{lo}, {hi}]");
            Err(Error::InternalInconsistency(format!(
                "pivot value not found in range [{lo}, {hi}]"
            )))
        }
    }
}
