use std::fmt;
use std::fmt::Display;
use std::time::{Duration, Instant};

/// Counters shared by every algorithm in the crate.
///
/// A `Metrics` value is owned by the caller and handed to an algorithm as
/// `&mut Metrics`. It is not synchronised: callers on different threads each
/// need their own instance, or must guard a shared one themselves.
#[derive(Debug, Default, Clone)]
pub struct Metrics {
    depth: usize,
    max_depth: usize,
    comparisons: u64,
    allocations: u64,
    start: Option<Instant>,
    end: Option<Instant>,
}

/// Snapshot of a measurement session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MetricsReport {
    pub max_depth: usize,
    pub comparisons: u64,
    pub allocations: u64,
    pub elapsed: Duration,
}

impl Metrics {
    pub fn new() -> Metrics {
        Metrics::default()
    }

    pub fn reset(&mut self) {
        self.depth = 0;
        self.max_depth = 0;
        self.comparisons = 0;
        self.allocations = 0;
        self.start = None;
        self.end = None;
    }

    pub fn start_timing(&mut self) {
        self.start = Some(Instant::now());
        self.end = None;
    }

    pub fn stop_timing(&mut self) {
        self.end = Some(Instant::now());
    }

    /// Time between the last `start_timing` and `stop_timing`, zero if either is missing.
    pub fn elapsed(&self) -> Duration {
        match (self.start, self.end) {
            (Some(start), Some(end)) => end.saturating_duration_since(start),
            _ => Duration::ZERO,
        }
    }

    #[inline]
    pub fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    #[inline]
    pub fn record_comparisons(&mut self, count: u64) {
        self.comparisons += count;
    }

    #[inline]
    pub fn record_allocation(&mut self, count: u64) {
        self.allocations += count;
    }

    #[inline]
    pub fn enter_recursion(&mut self) {
        self.depth += 1;
        if self.depth > self.max_depth {
            self.max_depth = self.depth;
        }
    }

    #[inline]
    pub fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn allocations(&self) -> u64 {
        self.allocations
    }

    pub fn report(&self) -> MetricsReport {
        MetricsReport {
            max_depth: self.max_depth,
            comparisons: self.comparisons,
            allocations: self.allocations,
            elapsed: self.elapsed(),
        }
    }

    /// Resets the counters, then times `f` as one session.
    pub fn measure<R>(&mut self, f: impl FnOnce(&mut Metrics) -> R) -> R {
        self.reset();
        self.start_timing();
        let res = f(self);
        self.stop_timing();
        res
    }
}

impl Display for MetricsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Max Recursion Depth: {}", self.max_depth)?;
        writeln!(f, "Comparisons: {}", self.comparisons)?;
        writeln!(f, "Allocations: {}", self.allocations)?;
        writeln!(f, "Time (ns): {}", self.elapsed.as_nanos())?;
        write!(f, "Time (ms): {}", self.elapsed.as_secs_f64() * 1000.0)
    }
}
