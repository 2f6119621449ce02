//! The interactive pathfinding field.
//!
//! A [`Field`] owns a grid, its barriers, the current source and goal, and
//! the last solution. Front ends move the endpoints with
//! [`Field::set_source`] / [`Field::set_goal`], then call
//! [`Field::recompute_if_dirty`] once per interaction cycle and read the
//! result back with [`Field::solution_contains`].
//!
//! [`BarrierRandomizer`] scatters short straight walls over a field.

pub mod barriers;
pub mod config;
pub mod error;
pub mod field;

pub use barriers::BarrierRandomizer;
pub use config::FieldConfig;
pub use error::{FieldError, PlacementError};
pub use field::Field;
