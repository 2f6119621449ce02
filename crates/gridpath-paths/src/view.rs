use gridpath_core::{Grid, Point};

use crate::obstacles::ObstacleSet;
use crate::traits::Pather;

/// Cost of one horizontal or vertical step.
///
/// Uniform: a unit-step metric, not geometric distance.
pub const STEP_COST: f64 = 1.0;

/// A [`Grid`] with the cells of an [`ObstacleSet`] removed.
///
/// Nothing is copied: every query consults the grid and the obstacle set
/// directly. A blocked cell is not a vertex, so it has no outgoing edges
/// and never shows up as anybody's neighbour.
#[derive(Debug, Clone, Copy)]
pub struct TraversableView<'a> {
    grid: &'a Grid,
    obstacles: &'a ObstacleSet,
}

impl<'a> TraversableView<'a> {
    pub fn new(grid: &'a Grid, obstacles: &'a ObstacleSet) -> Self {
        Self { grid, obstacles }
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.grid.in_bounds(p)
    }

    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.obstacles.contains(p)
    }
}

impl Pather for TraversableView<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        if self.is_blocked(p) {
            return;
        }
        buf.extend(self.grid.neighbors(p).filter(|&n| !self.is_blocked(n)));
    }

    #[inline]
    fn is_open(&self, p: Point) -> bool {
        self.in_bounds(p) && !self.is_blocked(p)
    }

    fn vertex_count(&self) -> usize {
        self.grid.len()
    }
}
