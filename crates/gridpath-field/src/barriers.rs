//! Random barrier placement.
//!
//! Barriers go down as short straight walls: pick a cell and an axis, then
//! block a few consecutive cells along it, stopping early at the grid edge.
//! This repeats until the requested share of the grid is covered. The
//! source and goal are never blocked, but nothing guarantees that a path
//! between them survives; that is for the search to report.

use gridpath_core::Axis;
use rand::{Rng, RngExt};

use crate::field::Field;

/// Scatters straight wall segments over a [`Field`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarrierRandomizer {
    /// Share of all cells to block (0.0–1.0).
    pub fraction: f64,
    /// Longest wall laid down from a single starting cell.
    pub max_wall_len: usize,
}

impl Default for BarrierRandomizer {
    fn default() -> Self {
        Self {
            fraction: 0.25,
            max_wall_len: 4,
        }
    }
}

impl BarrierRandomizer {
    /// Number of barriers a call to [`place`](Self::place) aims for on
    /// `field`: `fraction` of the cells, leaving room for source and goal.
    pub fn target(&self, field: &Field) -> usize {
        let n = field.grid().len();
        let want = (n as f64 * self.fraction.clamp(0.0, 1.0)).floor() as usize;
        want.min(n.saturating_sub(2))
    }

    /// Lay walls on `field` until [`target`](Self::target) new cells are
    /// blocked, or every free cell is. Returns the number of cells blocked.
    pub fn place(&self, field: &mut Field, rng: &mut impl Rng) -> usize {
        let grid = *field.grid();
        let n = grid.len();
        let free = n.saturating_sub(2 + field.obstacles().len());
        let target = self.target(field);
        let remaining = target.min(free);
        if remaining < target {
            log::warn!("only {free} free cells left, wanted {target} barriers");
        }
        if self.max_wall_len == 0 {
            log::warn!("max_wall_len is 0, no barriers placed");
            return 0;
        }

        let mut placed = 0;
        while placed < remaining {
            let axis = if rng.random_bool(0.5) {
                Axis::Horizontal
            } else {
                Axis::Vertical
            };
            let mut wall = rng.random_range(1..=self.max_wall_len);
            let mut cur = grid.point(rng.random_range(0..n));

            while wall > 0 && placed < remaining {
                if cur != field.source() && cur != field.goal() {
                    wall -= 1;
                    if let Ok(true) = field.add_barrier(cur) {
                        placed += 1;
                    }
                }
                let next = grid.step(cur, axis);
                if next == cur {
                    break;
                }
                cur = next;
            }
        }

        log::debug!("placed {placed} barriers on a {}x{} grid", grid.width(), grid.height());
        placed
    }
}
