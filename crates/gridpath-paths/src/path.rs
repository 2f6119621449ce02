use std::collections::{HashMap, HashSet};
use std::fmt;

use gridpath_core::Point;

/// A solution path: cells ordered from source to goal, both included.
///
/// Keeps a membership set alongside the ordered cells so renderers can ask
/// [`contains`](Self::contains) once per cell per frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<Point>", into = "Vec<Point>"))]
pub struct Path {
    cells: Vec<Point>,
    members: HashSet<Point>,
}

impl Path {
    /// Ordered cells, source first.
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().copied()
    }

    /// Number of cells, endpoints included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Number of moves, i.e. `len() - 1` (zero for an empty path).
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.members.contains(&p)
    }

    pub fn first(&self) -> Option<Point> {
        self.cells.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.cells.last().copied()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.members.clear();
    }
}

impl From<Vec<Point>> for Path {
    fn from(cells: Vec<Point>) -> Self {
        let members = cells.iter().copied().collect();
        Self { cells, members }
    }
}

impl From<Path> for Vec<Point> {
    fn from(path: Path) -> Self {
        path.cells
    }
}

/// A predecessor chain that does not lead back to the source.
///
/// A correct search never produces one; seeing this means the predecessor
/// map is corrupted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The chain stops at a cell with no recorded predecessor.
    MissingLink(Point),
    /// The chain ran for `steps` links without reaching the source.
    Cycle { steps: usize },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLink(p) => write!(f, "predecessor chain broken at {p}"),
            Self::Cycle { steps } => {
                write!(f, "predecessor chain did not reach the source after {steps} steps")
            }
        }
    }
}

impl std::error::Error for PathError {}

/// Walk predecessor links from `goal` back to `source`.
///
/// Follows at most `max_steps` links (pass the number of vertices in the
/// graph). The returned path is ordered source → goal.
pub fn reconstruct(
    predecessors: &HashMap<Point, Point>,
    source: Point,
    goal: Point,
    max_steps: usize,
) -> Result<Path, PathError> {
    let mut cells = vec![goal];
    let mut cur = goal;
    let mut steps = 0;
    while cur != source {
        if steps >= max_steps {
            return Err(PathError::Cycle { steps });
        }
        cur = *predecessors.get(&cur).ok_or(PathError::MissingLink(cur))?;
        cells.push(cur);
        steps += 1;
    }
    cells.reverse();
    Ok(Path::from(cells))
}
