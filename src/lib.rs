pub mod base_case;
pub mod closest_pair;
pub mod merge_sort;
pub mod metrics;
pub mod partition;
pub mod quick_sort;
pub mod select;
mod config;
mod error;

pub use closest_pair::{brute_force_closest_pair, find_closest_pair, Point, PointPair};
pub use config::{BRUTE_FORCE_CUTOFF, GROUP_SIZE, INSERTION_SORT_CUTOFF};
pub use error::{Error, Result};
pub use metrics::{Metrics, MetricsReport};
pub use select::select;

/// `true` if `arr` is in non-decreasing order.
pub fn is_sorted<T: Ord>(arr: &[T]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}
