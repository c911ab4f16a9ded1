use log::debug;
use crate::base_case::insertion_sort;
use crate::config::INSERTION_SORT_CUTOFF;
use crate::metrics::Metrics;

/// Stable hybrid merge sort.
///
/// One auxiliary buffer of `arr.len()` elements is allocated per call and shared by every
/// merge. Ranges of at most `INSERTION_SORT_CUTOFF` elements fall back to insertion sort.
pub fn sort<T: Ord + Copy>(arr: &mut [T], metrics: &mut Metrics) {
    if arr.len() <= 1 {
        return;
    }
    debug!("Merge sort of {} elements", arr.len());

    let mut aux = arr.to_vec();
    metrics.record_allocation(arr.len() as u64);

    let hi = arr.len() - 1;
    sort_rec(arr, &mut aux, 0, hi, metrics);
}

fn sort_rec<T: Ord + Copy>(arr: &mut [T], aux: &mut [T], lo: usize, hi: usize, metrics: &mut Metrics) {
    metrics.enter_recursion();

    if hi - lo + 1 <= INSERTION_SORT_CUTOFF {
        insertion_sort(&mut arr[lo..=hi], metrics);
    } else {
        let mid = lo + (hi - lo) / 2;
        sort_rec(arr, aux, lo, mid, metrics);
        sort_rec(arr, aux, mid + 1, hi, metrics);
        merge(arr, aux, lo, mid, hi, metrics);
    }

    metrics.exit_recursion();
}

/// Merges the sorted runs `[lo, mid]` and `[mid + 1, hi]`. Ties take the left run first.
fn merge<T: Ord + Copy>(arr: &mut [T], aux: &mut [T], lo: usize, mid: usize, hi: usize, metrics: &mut Metrics) {
    aux[lo..=hi].copy_from_slice(&arr[lo..=hi]);

    let (mut i, mut j, mut k) = (lo, mid + 1, lo);
    while i <= mid && j <= hi {
        metrics.record_comparison();
        if aux[i] <= aux[j] {
            arr[k] = aux[i];
            i += 1;
        } else {
            arr[k] = aux[j];
            j += 1;
        }
        k += 1;
    }

    // leftovers
    if i <= mid {
        arr[k..=hi].copy_from_slice(&aux[i..=mid]);
    } else if j <= hi {
        arr[k..=hi].copy_from_slice(&aux[j..=hi]);
    }
}
