use gridpath_core::Point;

use crate::traits::Heuristic;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Straight-line (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(b.x - a.x);
    let dy = f64::from(b.y - a.y);
    dx.hypot(dy)
}

/// Straight-line distance to the goal.
///
/// Never exceeds the Manhattan distance, which is itself a lower bound on
/// the number of unit steps, so the estimate is admissible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Heuristic for Euclidean {
    #[inline]
    fn estimate(&self, from: Point, goal: Point) -> f64 {
        euclidean(from, goal)
    }
}

/// Manhattan distance to the goal. Exact on an obstacle-free grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Point, goal: Point) -> f64 {
        f64::from(manhattan(from, goal))
    }
}
