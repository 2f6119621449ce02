//! Errors reported by [`Field`](crate::Field).

use std::fmt;

use gridpath_core::Point;

/// Why a source, goal, or barrier placement was refused.
///
/// A refused placement leaves the field untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// The cell lies outside the grid.
    OutOfBounds(Point),
    /// The cell holds a barrier.
    Blocked(Point),
    /// The cell is already taken by the other endpoint.
    Conflict(Point),
    /// A barrier cannot go on the source or the goal.
    Endpoint(Point),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "{p} is outside the grid"),
            Self::Blocked(p) => write!(f, "{p} holds a barrier"),
            Self::Conflict(p) => write!(f, "{p} is already the other endpoint"),
            Self::Endpoint(p) => write!(f, "{p} is the source or the goal"),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Errors building a [`Field`](crate::Field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Source and goal need two distinct cells.
    TooSmall { width: i32, height: i32 },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall { width, height } => {
                write!(f, "a {width}x{height} grid cannot hold distinct source and goal")
            }
        }
    }
}

impl std::error::Error for FieldError {}
