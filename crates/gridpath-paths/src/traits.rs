use gridpath_core::Point;

/// Graph interface searched by [`astar`](crate::astar).
pub trait Pather {
    /// Append the neighbours reachable in one step from `p` into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);

    /// Whether `p` is a vertex of the graph (in bounds and not blocked).
    fn is_open(&self, p: Point) -> bool;

    /// Number of vertices the graph can hold. Upper bound on path length.
    fn vertex_count(&self) -> usize;
}

/// Remaining-distance estimate guiding A*.
///
/// Must never overestimate the true cost to `goal` (admissible), or the
/// search loses its shortest-path guarantee.
pub trait Heuristic {
    /// Non-negative estimate of the cost from `from` to `goal`.
    fn estimate(&self, from: Point, goal: Point) -> f64;
}

impl<F: Fn(Point, Point) -> f64> Heuristic for F {
    fn estimate(&self, from: Point, goal: Point) -> f64 {
        self(from, goal)
    }
}
