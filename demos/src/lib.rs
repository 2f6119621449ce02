//! Text shell around a [`Field`]: renders it as ASCII and replays a
//! scripted session of source/goal moves, recomputing after each one the
//! way an interactive front end would once per input cycle.

use gridpath_core::Point;
use gridpath_field::{Field, PlacementError};
use rand::SeedableRng;
use rand::rngs::StdRng;

const SOURCE: char = 'S';
const GOAL: char = 'G';
const BARRIER: char = '#';
const PATH: char = '*';
const OPEN: char = '.';

/// A reproducible generator for `Some(seed)`, otherwise one seeded from the
/// thread-local generator.
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Draw the field, one text line per grid row.
pub fn render(field: &Field) -> String {
    let grid = field.grid();
    let mut out = String::with_capacity(grid.len() + grid.height() as usize);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let ch = if p == field.goal() {
                GOAL
            } else if p == field.source() {
                SOURCE
            } else if field.has_barrier(p) {
                BARRIER
            } else if field.solution_contains(p) {
                PATH
            } else {
                OPEN
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// A user request to move one of the endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Source(Point),
    Goal(Point),
}

impl Move {
    fn apply(self, field: &mut Field) -> Result<(), PlacementError> {
        match self {
            Move::Source(p) => field.set_source(p),
            Move::Goal(p) => field.set_goal(p),
        }
    }
}

/// One rendered state of the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub label: String,
    pub text: String,
    /// Path length in steps, `None` when unsolved.
    pub steps: Option<usize>,
}

impl Frame {
    pub fn capture(label: impl Into<String>, field: &Field) -> Self {
        Self {
            label: label.into(),
            text: render(field),
            steps: field.solved().then(|| field.path().steps()),
        }
    }
}

/// A short tour of the field: the goal to the centre, the source to the
/// top-right corner, an attempt to drop the goal on the source, and the
/// goal to the bottom-left corner.
pub fn default_script(field: &Field) -> Vec<Move> {
    let size = field.grid().size();
    let top_right = Point::new(size.x - 1, 0);
    vec![
        Move::Goal(Point::new(size.x / 2, size.y / 2)),
        Move::Source(top_right),
        Move::Goal(top_right),
        Move::Goal(Point::new(0, size.y - 1)),
    ]
}

/// Apply each move, recompute if needed, and capture a frame.
pub fn run_script(field: &mut Field, script: &[Move]) -> Vec<Frame> {
    let mut frames = Vec::with_capacity(script.len());
    for (i, &mv) in script.iter().enumerate() {
        let mut label = format!("{}: {mv:?}", i + 1);
        if let Err(e) = mv.apply(field) {
            label.push_str(&format!(" (refused: {e})"));
        }
        if field.recompute_if_dirty() {
            log::debug!("recomputed after move {}", i + 1);
        }
        frames.push(Frame::capture(label, field));
    }
    frames
}
