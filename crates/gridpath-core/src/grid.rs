//! The fixed-size 2-D lattice.

use crate::geom::{Axis, Point, Range, RangeIter};

/// A `width × height` lattice of cells anchored at the origin.
///
/// The grid stores only its dimensions. Cells and the 4-directional
/// neighbour relation are produced on demand, and the grid is immutable
/// once built.
///
/// Vertices are numbered row-major (x fastest): index `0` is `(0, 0)` and
/// index `len() - 1` is `(width - 1, height - 1)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    /// Create a grid. Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a `Point` (width, height).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// The grid's rectangle, `[(0, 0), (width, height))`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.bounds().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// In-bounds cardinal neighbours of `p`, in up, right, down, left order.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4().into_iter().filter(|&n| self.in_bounds(n))
    }

    /// The next cell after `p` along `axis`, or `p` itself when the grid
    /// boundary has been reached.
    pub fn step(&self, p: Point, axis: Axis) -> Point {
        let next = p + axis.unit();
        if self.in_bounds(next) { next } else { p }
    }

    /// Row-major vertex index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.in_bounds(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// The cell with vertex index `idx`.
    ///
    /// `idx` must be below [`len`](Self::len).
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        debug_assert!(idx < self.len(), "vertex index {idx} out of range");
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Every cell, in vertex index order.
    #[inline]
    pub fn iter(&self) -> RangeIter {
        self.bounds().iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_respect_bounds() {
        let g = Grid::new(3, 3);
        let corner: Vec<_> = g.neighbors(Point::new(0, 0)).collect();
        assert_eq!(corner, vec![Point::new(1, 0), Point::new(0, 1)]);

        let center: Vec<_> = g.neighbors(Point::new(1, 1)).collect();
        assert_eq!(
            center,
            vec![
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(0, 1),
            ]
        );

        let edge: Vec<_> = g.neighbors(Point::new(2, 1)).collect();
        assert_eq!(edge.len(), 3);
        assert!(edge.iter().all(|&n| g.in_bounds(n)));
    }

    #[test]
    fn single_row_has_no_vertical_neighbors() {
        let g = Grid::new(4, 1);
        let n: Vec<_> = g.neighbors(Point::new(2, 0)).collect();
        assert_eq!(n, vec![Point::new(3, 0), Point::new(1, 0)]);
    }

    #[test]
    fn step_stops_at_boundary() {
        let g = Grid::new(3, 2);
        assert_eq!(g.step(Point::new(0, 0), Axis::Horizontal), Point::new(1, 0));
        assert_eq!(g.step(Point::new(2, 0), Axis::Horizontal), Point::new(2, 0));
        assert_eq!(g.step(Point::new(2, 0), Axis::Vertical), Point::new(2, 1));
        assert_eq!(g.step(Point::new(2, 1), Axis::Vertical), Point::new(2, 1));
    }

    #[test]
    fn index_round_trip_covers_grid() {
        let g = Grid::new(5, 4);
        assert_eq!(g.len(), 20);
        for (i, p) in g.iter().enumerate() {
            assert_eq!(g.index(p), Some(i));
            assert_eq!(g.point(i), p);
        }
        assert_eq!(g.point(0), Point::new(0, 0));
        assert_eq!(g.point(g.len() - 1), Point::new(4, 3));
        assert_eq!(g.index(Point::new(5, 0)), None);
        assert_eq!(g.index(Point::new(0, -1)), None);
    }

    #[test]
    fn negative_dimensions_are_empty() {
        let g = Grid::new(-3, 4);
        assert!(g.is_empty());
        assert!(!g.in_bounds(Point::ZERO));
    }
}
