use log::trace;
use rand::Rng;
use crate::metrics::Metrics;

/// Lomuto partition of the inclusive range `[lo, hi]` around the value at `pivot_index`.
///
/// Returns the final pivot position `p`: everything in `[lo, p)` is less than the pivot,
/// everything in `(p, hi]` is not. Records exactly `hi - lo` comparisons.
pub fn partition<T: Ord + Copy>(arr: &mut [T], lo: usize, hi: usize, pivot_index: usize, metrics: &mut Metrics) -> usize {
    debug_assert!(lo <= pivot_index && pivot_index <= hi && hi < arr.len());

    let pivot = arr[pivot_index];
    arr.swap(pivot_index, hi);

    let mut store = lo;
    for i in lo..hi {
        metrics.record_comparison();
        if arr[i] < pivot {
            arr.swap(i, store);
            store += 1;
        }
    }
    arr.swap(store, hi);

    trace!("partition [{lo}, {hi}] pivot index {pivot_index} -> {store}");
    store
}

/// Moves every element of `(p, hi]` equal to the pivot at `p` into a block right after `p`.
///
/// Expects the layout `partition` leaves behind. Returns `q` such that `[p, q]` holds exactly
/// the copies of the pivot and everything in `(q, hi]` is greater. Records `hi - p` comparisons.
pub fn gather_equal<T: Ord + Copy>(arr: &mut [T], p: usize, hi: usize, metrics: &mut Metrics) -> usize {
    let pivot = arr[p];
    let mut q = p;
    for i in p + 1..=hi {
        metrics.record_comparison();
        if arr[i] == pivot {
            q += 1;
            arr.swap(i, q);
        }
    }
    q
}

/// Uniform index in `[lo, hi]`.
pub fn random_pivot<R: Rng>(lo: usize, hi: usize, rng: &mut R) -> usize {
    rng.gen_range(lo..=hi)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use super::*;

    fn check_partition(arr: &[i64], lo: usize, hi: usize, p: usize) {
        for i in lo..p {
            assert!(arr[i] <= arr[p], "arr[{i}] = {} > pivot {}", arr[i], arr[p]);
        }
        for i in p + 1..=hi {
            assert!(arr[i] >= arr[p], "arr[{i}] = {} < pivot {}", arr[i], arr[p]);
        }
    }

    #[test]
    fn test_small() {
        let mut arr = [3, 7, 1, 9, 4, 4, 8, 2];
        let mut m = Metrics::new();
        let p = partition(&mut arr, 0, 7, 4, &mut m);
        assert_eq!(arr[p], 4);
        assert_eq!(p, 3);
        check_partition(&arr, 0, 7, p);
        assert_eq!(m.comparisons(), 7);
    }

    #[test]
    fn leaves_outside_of_range_untouched() {
        let mut arr = [100, 5, 3, 9, 1, -100];
        let mut m = Metrics::new();
        let p = partition(&mut arr, 1, 4, 1, &mut m);
        assert_eq!(arr[0], 100);
        assert_eq!(arr[5], -100);
        assert_eq!(arr[p], 5);
        check_partition(&arr, 1, 4, p);
        assert_eq!(m.comparisons(), 3);
    }

    #[test]
    fn single_element_range() {
        let mut arr = [2, 1];
        let mut m = Metrics::new();
        assert_eq!(partition(&mut arr, 1, 1, 1, &mut m), 1);
        assert_eq!(arr, [2, 1]);
        assert_eq!(m.comparisons(), 0);
    }

    #[test]
    fn random_ranges() {
        let mut rng = StdRng::seed_from_u64(12345);
        for _ in 0..200 {
            let n = rng.gen_range(1..64);
            let mut arr: Vec<i64> = (0..n).map(|_| rng.gen_range(-20..20)).collect();
            let lo = rng.gen_range(0..n);
            let hi = rng.gen_range(lo..n);
            let pivot = random_pivot(lo, hi, &mut rng);
            let value = arr[pivot];
            let mut m = Metrics::new();
            let p = partition(&mut arr, lo, hi, pivot, &mut m);
            assert_eq!(arr[p], value);
            check_partition(&arr, lo, hi, p);
            assert_eq!(m.comparisons(), (hi - lo) as u64);
        }
    }

    #[test]
    fn gathers_pivot_copies() {
        let mut arr = [2, 9, 4, 1, 4, 7, 4, 4, 0];
        let mut m = Metrics::new();
        let p = partition(&mut arr, 0, 8, 2, &mut m);
        let q = gather_equal(&mut arr, p, 8, &mut m);
        assert_eq!(q - p + 1, 4);
        assert!(arr[p..=q].iter().all(|v| *v == 4));
        assert!(arr[..p].iter().all(|v| *v < 4));
        assert!(arr[q + 1..].iter().all(|v| *v > 4));
        assert_eq!(m.comparisons(), 8 + (8 - p) as u64);
    }

    #[test]
    fn gather_on_all_equal_covers_the_range() {
        let mut arr = [5i64; 32];
        let mut m = Metrics::new();
        let p = partition(&mut arr, 0, 31, 17, &mut m);
        assert_eq!(p, 0);
        assert_eq!(gather_equal(&mut arr, p, 31, &mut m), 31);
    }

    #[test]
    fn random_pivot_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 5];
        for _ in 0..500 {
            let p = random_pivot(10, 14, &mut rng);
            assert!((10..=14).contains(&p));
            seen[p - 10] = true;
        }
        assert!(seen.iter().all(|s| *s));
        assert_eq!(random_pivot(3, 3, &mut rng), 3);
    }
}
