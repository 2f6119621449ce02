//! The [`Field`] aggregate.

use gridpath_core::{Grid, Point};
use gridpath_paths::{Euclidean, ObstacleSet, Path, SearchTree, TraversableView, astar};
use rand::Rng;

use crate::barriers::BarrierRandomizer;
use crate::config::FieldConfig;
use crate::error::{FieldError, PlacementError};

/// A grid with barriers, a source, a goal and the current solution.
///
/// Invariants: `source != goal`, both lie inside the grid, and neither is
/// ever a barrier. Every accepted change that can affect reachability marks
/// the field dirty; [`recompute_if_dirty`](Self::recompute_if_dirty) then
/// replaces the solution wholesale.
#[derive(Debug, Clone)]
pub struct Field {
    grid: Grid,
    obstacles: ObstacleSet,
    source: Point,
    goal: Point,
    solution: Path,
    dirty: bool,
}

impl Field {
    /// Create an empty field with the source in the first cell and the goal
    /// in the last one. The field starts dirty.
    pub fn new(width: i32, height: i32) -> Result<Self, FieldError> {
        let grid = Grid::new(width, height);
        if grid.len() < 2 {
            return Err(FieldError::TooSmall { width, height });
        }
        Ok(Self {
            source: grid.point(0),
            goal: grid.point(grid.len() - 1),
            grid,
            obstacles: ObstacleSet::new(),
            solution: Path::default(),
            dirty: true,
        })
    }

    /// Create an empty field sized by `cfg`.
    pub fn with_config(cfg: &FieldConfig) -> Result<Self, FieldError> {
        Self::new(cfg.width, cfg.height)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    /// The grid with barriers removed, as the search sees it.
    pub fn view(&self) -> TraversableView<'_> {
        TraversableView::new(&self.grid, &self.obstacles)
    }

    pub fn source(&self) -> Point {
        self.source
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    /// The last computed solution, empty when unsolved.
    pub fn path(&self) -> &Path {
        &self.solution
    }

    pub fn has_barrier(&self, p: Point) -> bool {
        self.obstacles.contains(p)
    }

    /// Whether the last solve found a path.
    pub fn solved(&self) -> bool {
        !self.solution.is_empty()
    }

    pub fn solution_contains(&self, p: Point) -> bool {
        self.solution.contains(p)
    }

    /// Whether a change is waiting for [`recompute_if_dirty`](Self::recompute_if_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Move the source to `p`.
    ///
    /// Refused, with nothing changed, if `p` is outside the grid, holds a
    /// barrier, or is the goal.
    pub fn set_source(&mut self, p: Point) -> Result<(), PlacementError> {
        self.check_endpoint(p, self.goal)
            .inspect_err(|e| log::debug!("source move refused: {e}"))?;
        if p != self.source {
            self.source = p;
            self.dirty = true;
        }
        Ok(())
    }

    /// Move the goal to `p`. Same rules as [`set_source`](Self::set_source).
    pub fn set_goal(&mut self, p: Point) -> Result<(), PlacementError> {
        self.check_endpoint(p, self.source)
            .inspect_err(|e| log::debug!("goal move refused: {e}"))?;
        if p != self.goal {
            self.goal = p;
            self.dirty = true;
        }
        Ok(())
    }

    fn check_endpoint(&self, p: Point, other: Point) -> Result<(), PlacementError> {
        if !self.grid.in_bounds(p) {
            return Err(PlacementError::OutOfBounds(p));
        }
        if self.has_barrier(p) {
            return Err(PlacementError::Blocked(p));
        }
        if p == other {
            return Err(PlacementError::Conflict(p));
        }
        Ok(())
    }

    /// Block `p`. Returns `Ok(true)` if it was not blocked before.
    pub fn add_barrier(&mut self, p: Point) -> Result<bool, PlacementError> {
        if !self.grid.in_bounds(p) {
            return Err(PlacementError::OutOfBounds(p));
        }
        if p == self.source || p == self.goal {
            return Err(PlacementError::Endpoint(p));
        }
        let added = self.obstacles.insert(p);
        self.dirty |= added;
        Ok(added)
    }

    /// Unblock `p`. Returns `true` if it held a barrier.
    pub fn remove_barrier(&mut self, p: Point) -> bool {
        let removed = self.obstacles.remove(p);
        self.dirty |= removed;
        removed
    }

    pub fn clear_barriers(&mut self) {
        if !self.obstacles.is_empty() {
            self.obstacles.clear();
            self.dirty = true;
        }
    }

    /// Scatter walls with the default [`BarrierRandomizer`]. Returns the
    /// number of cells blocked.
    pub fn randomize_barriers(&mut self, rng: &mut impl Rng) -> usize {
        BarrierRandomizer::default().place(self, rng)
    }

    /// Run A* from the source to the goal without touching the field.
    pub fn search(&self) -> Option<SearchTree> {
        astar(&self.view(), self.source, self.goal, &Euclidean)
    }

    /// Recompute the solution from scratch. Returns whether a path exists.
    ///
    /// The previous solution never survives: it is replaced by the new path,
    /// or by an empty one when the goal is unreachable.
    pub fn solve(&mut self) -> bool {
        self.dirty = false;
        let solution = match self.search().map(|tree| tree.path()) {
            Some(Ok(path)) => path,
            Some(Err(err)) => {
                log::error!("broken predecessor chain {} -> {}: {err}", self.source, self.goal);
                debug_assert!(false, "A* returned a broken predecessor chain: {err}");
                Path::default()
            }
            None => Path::default(),
        };
        self.solution = solution;
        log::debug!(
            "solve {} -> {}: {}",
            self.source,
            self.goal,
            if self.solved() {
                format!("{} steps", self.solution.steps())
            } else {
                "no path".to_string()
            }
        );
        self.solved()
    }

    /// Solve if anything changed since the last solve. Returns whether a
    /// solve ran.
    pub fn recompute_if_dirty(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        self.solve();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_3x3() -> Field {
        let mut f = Field::new(3, 3).unwrap();
        f.solve();
        f
    }

    #[test]
    fn default_endpoints_are_first_and_last_cells() {
        let f = Field::new(20, 10).unwrap();
        assert_eq!(f.source(), Point::new(0, 0));
        assert_eq!(f.goal(), Point::new(19, 9));
        assert!(f.is_dirty());
        assert!(!f.solved());
    }

    #[test]
    fn too_small_grids_are_refused() {
        assert_eq!(
            Field::new(1, 1).unwrap_err(),
            FieldError::TooSmall { width: 1, height: 1 }
        );
        assert!(Field::new(0, 5).is_err());
        assert!(Field::new(2, 1).is_ok());
        assert!(Field::with_config(&FieldConfig::default()).is_ok());
    }

    #[test]
    fn open_three_by_three() {
        let f = field_3x3();
        assert!(f.solved());
        assert_eq!(f.path().len(), 5);
        assert!(f.solution_contains(Point::new(0, 0)));
        assert!(f.solution_contains(Point::new(2, 2)));
        assert!(!f.is_dirty());
    }

    #[test]
    fn walled_middle_column_is_unsolvable() {
        let mut f = Field::new(3, 3).unwrap();
        f.set_source(Point::new(0, 1)).unwrap();
        f.set_goal(Point::new(2, 1)).unwrap();
        for y in 0..3 {
            assert_eq!(f.add_barrier(Point::new(1, y)), Ok(true));
        }
        assert!(!f.solve());
        assert!(!f.solved());
        assert!(f.path().is_empty());
        assert!(!f.solution_contains(Point::new(0, 1)));
    }

    #[test]
    fn stale_solution_does_not_leak() {
        let mut f = field_3x3();
        assert!(f.solved());
        f.add_barrier(Point::new(1, 2)).unwrap();
        f.add_barrier(Point::new(2, 1)).unwrap();
        assert!(f.recompute_if_dirty());
        assert!(!f.solved());
        assert!(!f.solution_contains(Point::new(0, 0)));
    }

    #[test]
    fn goal_onto_source_is_a_no_op() {
        let mut f = field_3x3();
        let before = f.path().clone();
        assert_eq!(
            f.set_goal(Point::new(0, 0)),
            Err(PlacementError::Conflict(Point::new(0, 0)))
        );
        assert_eq!(
            f.set_source(Point::new(2, 2)),
            Err(PlacementError::Conflict(Point::new(2, 2)))
        );
        assert_eq!(f.source(), Point::new(0, 0));
        assert_eq!(f.goal(), Point::new(2, 2));
        assert!(!f.is_dirty());
        assert!(!f.recompute_if_dirty());
        assert_eq!(f.path(), &before);
    }

    #[test]
    fn endpoints_cannot_land_on_barriers_or_outside() {
        let mut f = field_3x3();
        f.add_barrier(Point::new(1, 1)).unwrap();
        f.solve();
        assert_eq!(
            f.set_source(Point::new(1, 1)),
            Err(PlacementError::Blocked(Point::new(1, 1)))
        );
        assert_eq!(
            f.set_goal(Point::new(3, 0)),
            Err(PlacementError::OutOfBounds(Point::new(3, 0)))
        );
        assert_eq!(
            f.set_goal(Point::new(0, -1)),
            Err(PlacementError::OutOfBounds(Point::new(0, -1)))
        );
        assert!(!f.is_dirty());
    }

    #[test]
    fn barriers_refuse_endpoints() {
        let mut f = field_3x3();
        assert_eq!(
            f.add_barrier(Point::new(0, 0)),
            Err(PlacementError::Endpoint(Point::new(0, 0)))
        );
        assert_eq!(
            f.add_barrier(Point::new(2, 2)),
            Err(PlacementError::Endpoint(Point::new(2, 2)))
        );
        assert!(f.obstacles().is_empty());
        assert!(!f.is_dirty());
    }

    #[test]
    fn moves_mark_dirty_once() {
        let mut f = field_3x3();
        f.set_source(Point::new(0, 0)).unwrap();
        assert!(!f.is_dirty(), "same position is not a change");
        f.set_goal(Point::new(2, 0)).unwrap();
        assert!(f.is_dirty());
        assert!(f.recompute_if_dirty());
        assert!(!f.recompute_if_dirty());
        assert_eq!(f.path().steps(), 2);
        assert_eq!(f.path().last(), Some(Point::new(2, 0)));
    }

    #[test]
    fn barrier_edits_mark_dirty() {
        let mut f = field_3x3();
        assert_eq!(f.add_barrier(Point::new(1, 1)), Ok(true));
        assert!(f.is_dirty());
        f.solve();
        assert_eq!(f.add_barrier(Point::new(1, 1)), Ok(false));
        assert!(!f.is_dirty());
        assert!(!f.remove_barrier(Point::new(0, 1)));
        assert!(!f.is_dirty());
        assert!(f.remove_barrier(Point::new(1, 1)));
        assert!(f.is_dirty());
        f.solve();
        f.add_barrier(Point::new(0, 1)).unwrap();
        f.solve();
        f.clear_barriers();
        assert!(f.is_dirty());
        assert!(f.obstacles().is_empty());
    }

    #[test]
    fn solve_is_idempotent() {
        let mut f = Field::new(10, 6).unwrap();
        for p in [(3, 0), (3, 1), (3, 2), (3, 3), (6, 5), (6, 4), (6, 3)] {
            f.add_barrier(Point::from(p)).unwrap();
        }
        assert!(f.solve());
        let first = f.path().clone();
        assert!(f.solve());
        assert_eq!(f.path(), &first);
    }

    #[test]
    fn solution_follows_the_view() {
        let mut f = Field::new(8, 5).unwrap();
        for y in 0..4 {
            f.add_barrier(Point::new(4, y)).unwrap();
        }
        assert!(f.solve());
        let path = f.path();
        assert_eq!(path.first(), Some(f.source()));
        assert_eq!(path.last(), Some(f.goal()));
        for w in path.cells().windows(2) {
            assert!(w[0].is_adjacent_4(w[1]));
        }
        assert!(path.iter().all(|p| !f.has_barrier(p)));
        assert!(f.solution_contains(Point::new(4, 4)));
    }

    #[test]
    fn fields_are_independent() {
        let mut a = Field::new(4, 4).unwrap();
        let b = Field::new(4, 4).unwrap();
        a.add_barrier(Point::new(1, 1)).unwrap();
        a.solve();
        assert!(!b.has_barrier(Point::new(1, 1)));
        assert!(!b.solved());
    }

    #[test]
    fn field_can_cross_threads() {
        fn assert_send<T: Send>() {}
        assert_send::<Field>();
    }
}
