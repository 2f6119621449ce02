//! **gridpath-core**: the fixed-size lattice searched by the rest of the
//! *gridpath* workspace, along with its geometry primitives.
//!
//! A [`Grid`] is nothing more than a pair of dimensions. Cells are plain
//! [`Point`] values generated on demand, with structural equality and
//! hashing, so no per-cell storage exists anywhere in this crate.

pub mod geom;
pub mod grid;

pub use geom::{Axis, Point, Range, RangeIter};
pub use grid::Grid;
