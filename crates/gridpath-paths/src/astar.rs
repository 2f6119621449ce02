use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use gridpath_core::Point;

use crate::path::{Path, PathError, reconstruct};
use crate::traits::{Heuristic, Pather};
use crate::view::STEP_COST;

/// Frontier entry, ordered so that `BinaryHeap` (a max-heap) pops the
/// smallest `f` first. Ties go to the smaller `h`, then to the smaller
/// point in row-major order.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    f: f64,
    h: f64,
    g: f64,
    pos: Point,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.h.total_cmp(&self.h))
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// The predecessor links left behind by a successful [`astar`] call.
#[derive(Debug, Clone)]
pub struct SearchTree {
    source: Point,
    goal: Point,
    predecessors: HashMap<Point, Point>,
    distances: HashMap<Point, f64>,
    expanded: usize,
    max_steps: usize,
}

impl SearchTree {
    pub fn source(&self) -> Point {
        self.source
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    /// The cell through which `p` was reached at its best known distance.
    pub fn predecessor(&self, p: Point) -> Option<Point> {
        self.predecessors.get(&p).copied()
    }

    pub fn predecessors(&self) -> &HashMap<Point, Point> {
        &self.predecessors
    }

    /// Best known distance from the source, `f64::INFINITY` if `p` was
    /// never discovered.
    pub fn distance(&self, p: Point) -> f64 {
        self.distances.get(&p).copied().unwrap_or(f64::INFINITY)
    }

    /// Number of discovered cells, source included.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Number of cells taken off the frontier, goal included.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Reconstruct the source → goal path from the predecessor links.
    pub fn path(&self) -> Result<Path, PathError> {
        reconstruct(&self.predecessors, self.source, self.goal, self.max_steps)
    }
}

/// Find a shortest path from `source` to `goal` with A*.
///
/// The search stops the moment `goal` is taken off the frontier. Returns
/// `None` when the frontier runs dry first, or when either endpoint is not
/// an open vertex of `pather`. No path is an ordinary outcome, not an error.
///
/// All search state is local to the call.
pub fn astar<P, H>(pather: &P, source: Point, goal: Point, heuristic: &H) -> Option<SearchTree>
where
    P: Pather + ?Sized,
    H: Heuristic + ?Sized,
{
    if !pather.is_open(source) || !pather.is_open(goal) {
        log::debug!("astar: endpoint not traversable ({source} -> {goal})");
        return None;
    }

    let mut distances: HashMap<Point, f64> = HashMap::new();
    let mut predecessors: HashMap<Point, Point> = HashMap::new();
    let mut closed: HashSet<Point> = HashSet::new();
    let mut open: BinaryHeap<FrontierEntry> = BinaryHeap::new();

    distances.insert(source, 0.0);
    let h = heuristic.estimate(source, goal);
    open.push(FrontierEntry {
        f: h,
        h,
        g: 0.0,
        pos: source,
    });

    let mut nbuf = Vec::with_capacity(4);
    let mut expanded = 0usize;

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };

        // Skip superseded or finalized entries.
        let best = distances.get(&current.pos).copied().unwrap_or(f64::INFINITY);
        if current.g > best || closed.contains(&current.pos) {
            continue;
        }

        expanded += 1;
        if current.pos == goal {
            break 'search true;
        }
        closed.insert(current.pos);

        nbuf.clear();
        pather.neighbors(current.pos, &mut nbuf);

        for &np in nbuf.iter() {
            let tentative_g = current.g + STEP_COST;
            let known = distances.get(&np).copied().unwrap_or(f64::INFINITY);
            if tentative_g >= known {
                continue;
            }
            distances.insert(np, tentative_g);
            predecessors.insert(np, current.pos);
            // Reopen if an inconsistent heuristic finalized it too early.
            closed.remove(&np);

            let h = heuristic.estimate(np, goal);
            open.push(FrontierEntry {
                f: tentative_g + h,
                h,
                g: tentative_g,
                pos: np,
            });
        }
    };

    log::trace!(
        "astar: {source} -> {goal}: expanded {expanded}, discovered {}, found {found}",
        distances.len()
    );

    if !found {
        return None;
    }

    Some(SearchTree {
        source,
        goal,
        predecessors,
        distances,
        expanded,
        max_steps: pather.vertex_count(),
    })
}
