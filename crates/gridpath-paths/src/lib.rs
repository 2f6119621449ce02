//! Obstacle-aware shortest paths on a [`Grid`](gridpath_core::Grid).
//!
//! The pieces compose leaf-first:
//!
//! - [`ObstacleSet`] holds the blocked cells.
//! - [`TraversableView`] lays an obstacle set over a grid without copying
//!   either; blocked cells have no edges in or out.
//! - [`Heuristic`] estimates the remaining distance ([`Euclidean`] by
//!   default, [`Manhattan`] also available).
//! - [`astar`] searches any [`Pather`] and returns a [`SearchTree`] of
//!   predecessor links once the goal is dequeued.
//! - [`reconstruct`] walks those links back into a [`Path`].
//!
//! Every step costs [`STEP_COST`]. Edge weights are not configurable.

mod astar;
mod distance;
mod obstacles;
mod path;
mod traits;
mod view;

pub use astar::{SearchTree, astar};
pub use distance::{Euclidean, Manhattan, euclidean, manhattan};
pub use obstacles::ObstacleSet;
pub use path::{Path, PathError, reconstruct};
pub use traits::{Heuristic, Pather};
pub use view::{STEP_COST, TraversableView};
