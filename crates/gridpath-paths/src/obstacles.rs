use std::collections::BTreeSet;

use gridpath_core::Point;

/// The set of blocked cells.
///
/// Iteration is in row-major [`Point`] order, so anything derived from it
/// is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ObstacleSet {
    cells: BTreeSet<Point>,
}

impl ObstacleSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.cells.contains(&p)
    }

    /// Block `p`. Returns `true` if it was not blocked before.
    pub fn insert(&mut self, p: Point) -> bool {
        self.cells.insert(p)
    }

    /// Unblock `p`. Returns `true` if it was blocked.
    pub fn remove(&mut self, p: Point) -> bool {
        self.cells.remove(&p)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().copied()
    }
}

impl FromIterator<Point> for ObstacleSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point> for ObstacleSet {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}
