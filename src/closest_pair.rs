use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use log::{debug, trace};
use crate::config::BRUTE_FORCE_CUTOFF;
use crate::error::{Error, Result};
use crate::metrics::Metrics;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Two points and the distance between them, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointPair {
    p1: Point,
    p2: Point,
    distance: f64,
}

impl PointPair {
    pub fn new(p1: Point, p2: Point) -> PointPair {
        PointPair { p1, p2, distance: p1.distance_to(&p2) }
    }

    pub fn p1(&self) -> Point {
        self.p1
    }

    pub fn p2(&self) -> Point {
        self.p2
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }
}

impl Display for PointPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Distance: {:.4} between {} and {}", self.distance, self.p1, self.p2)
    }
}

// Lexicographic (x, y). Two points that compare equal are identical, so they are
// interchangeable wherever a split has to break a tie.
fn cmp_xy(a: &Point, b: &Point) -> Ordering {
    a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
}

fn cmp_yx(a: &Point, b: &Point) -> Ordering {
    a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x))
}

fn validate(points: &[Point]) -> Result<()> {
    if points.len() < 2 {
        return Err(Error::InvalidArgument(format!(
            "need at least 2 points, got {}",
            points.len()
        )));
    }
    if let Some(p) = points.iter().find(|p| !p.is_finite()) {
        return Err(Error::InvalidArgument(format!("non-finite coordinate in point {p:?}")));
    }
    Ok(())
}

/// Closest pair of `points` in O(n log n).
///
/// The points are sorted by x and by y once up front; each level of the recursion splits the
/// y-sorted points in linear time and checks the strip around the dividing line.
pub fn find_closest_pair(points: &[Point], metrics: &mut Metrics) -> Result<PointPair> {
    validate(points)?;
    debug!("Closest pair of {} points", points.len());

    let mut by_x = points.to_vec();
    by_x.sort_by(cmp_xy);
    metrics.record_allocation(points.len() as u64);

    let mut by_y = points.to_vec();
    by_y.sort_by(cmp_yx);
    metrics.record_allocation(points.len() as u64);

    solve(&by_x, &by_y, metrics)
}

/// `by_x` and `by_y` hold the same points, sorted by x and by y respectively.
fn solve(by_x: &[Point], by_y: &[Point], metrics: &mut Metrics) -> Result<PointPair> {
    metrics.enter_recursion();
    let res = solve_range(by_x, by_y, metrics);
    metrics.exit_recursion();
    res
}

fn solve_range(by_x: &[Point], by_y: &[Point], metrics: &mut Metrics) -> Result<PointPair> {
    debug_assert_eq!(by_x.len(), by_y.len());

    if by_x.len() <= BRUTE_FORCE_CUTOFF {
        return brute_force(by_x, metrics).ok_or_else(|| {
            Error::InternalInconsistency(format!("base case with {} points", by_x.len()))
        });
    }

    let mid = (by_x.len() - 1) / 2;
    let mid_point = by_x[mid];

    // Left is filled up to its capacity first; points equal to the midpoint overflow right.
    let mut left_by_y = Vec::with_capacity(mid + 1);
    let mut right_by_y = Vec::with_capacity(by_x.len() - mid - 1);
    metrics.record_allocation(by_x.len() as u64);
    for p in by_y {
        if cmp_xy(p, &mid_point) != Ordering::Greater && left_by_y.len() < mid + 1 {
            left_by_y.push(*p);
        } else {
            right_by_y.push(*p);
        }
    }

    let left = solve(&by_x[..=mid], &left_by_y, metrics)?;
    let right = solve(&by_x[mid + 1..], &right_by_y, metrics)?;
    let closest = if left.distance <= right.distance { left } else { right };

    match closest_in_strip(by_y, mid_point.x, closest.distance, metrics) {
        Some(strip) if strip.distance < closest.distance => {
            trace!("Strip at x = {} improved {} to {}", mid_point.x, closest.distance, strip.distance);
            Ok(strip)
        }
        _ => Ok(closest),
    }
}

fn brute_force(points: &[Point], metrics: &mut Metrics) -> Option<PointPair> {
    let mut closest: Option<PointPair> = None;
    for (i, p) in points.iter().enumerate() {
        for q in &points[i + 1..] {
            metrics.record_comparison();
            let d = p.distance_to(q);
            if closest.map_or(true, |c| d < c.distance) {
                closest = Some(PointPair::new(*p, *q));
            }
        }
    }
    closest
}

/// Best pair closer than `delta` among the points within `delta` of the line `x = mid_x`.
///
/// Points in the strip are in y order, so each one is only compared with followers whose
/// y-gap is below the best distance so far. At most 7 followers qualify.
fn closest_in_strip(by_y: &[Point], mid_x: f64, delta: f64, metrics: &mut Metrics) -> Option<PointPair> {
    let strip: Vec<Point> = by_y.iter().filter(|p| (p.x - mid_x).abs() < delta).copied().collect();
    if strip.len() < 2 {
        return None;
    }
    metrics.record_allocation(strip.len() as u64);

    let mut closest = None;
    let mut best = delta;
    for (i, p) in strip.iter().enumerate() {
        for q in &strip[i + 1..] {
            if q.y - p.y >= best {
                break;
            }
            metrics.record_comparison();
            let d = p.distance_to(q);
            if d < best {
                best = d;
                closest = Some(PointPair::new(*p, *q));
            }
        }
    }
    closest
}

/// O(n²) search over every pair. Reference result for checking `find_closest_pair`.
pub fn brute_force_closest_pair(points: &[Point]) -> Result<PointPair> {
    validate(points)?;
    brute_force(points, &mut Metrics::new())
        .ok_or_else(|| Error::InternalInconsistency("no pair found".to_string()))
}
