//! Cascade resolver - iterative remove/collapse/refill until stable
//!
//! Given a board that may contain matches, runs detect -> remove ->
//! collapse -> refill passes until the detector comes back empty. The loop
//! is iterative, never recursive, and mutates the board in place.
//!
//! Each pass records four discrete board snapshots (matches highlighted,
//! removed, collapsed, refilled) so a renderer can replay the cascade at its
//! own cadence. The final board state is identical whether the steps are
//! consumed or dropped; abandoning the replay and snapping to the final
//! state is always safe.

use serde::Serialize;

use crate::core::board::Board;
use crate::core::matcher::find_matches;
use crate::core::rng::SimpleRng;
use crate::core::scoring::cascade_points;
use crate::types::{Pos, CASCADE_PASS_FACTOR};

/// Which point within a resolve pass a step snapshot was taken at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CascadePhase {
    /// Matches found, nothing removed yet (highlight frame)
    Highlight,
    /// Matched cells emptied
    Remove,
    /// Columns compacted, empties at the top
    Collapse,
    /// Empties refilled with fresh gems
    Refill,
}

/// One discrete board snapshot within a cascade replay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CascadeStep {
    /// 1-based pass index within this cascade
    pub depth: u32,
    pub phase: CascadePhase,
    /// Grid encoded as 0 = empty, color + 1 otherwise
    pub grid: Vec<u8>,
    /// Matched positions (Highlight steps only, empty otherwise)
    pub matched: Vec<Pos>,
    /// Points awarded by this step (Remove steps only, 0 otherwise)
    pub points: u32,
}

/// Result of resolving one cascade to stability
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CascadeOutcome {
    /// Number of resolve passes (the final cascade depth)
    pub passes: u32,
    /// Total gems removed across all passes
    pub removed: u32,
    /// Total points awarded across all passes
    pub points: u32,
    /// Replay steps, in order
    pub steps: Vec<CascadeStep>,
}

impl CascadeOutcome {
    pub fn is_stable(&self) -> bool {
        self.passes == 0
    }
}

/// Resolve the board to stability.
///
/// A board with no matches is returned untouched (zero passes, zero points,
/// no steps). Termination is structural: every pass removes at least
/// `MIN_RUN` gems before refilling, and refills either produce new matches
/// or end the loop. A hard pass bound of `rows * cols * CASCADE_PASS_FACTOR`
/// guards against regressions.
pub fn resolve(board: &mut Board, rng: &mut SimpleRng) -> CascadeOutcome {
    let max_passes = board.rows() * board.cols() * CASCADE_PASS_FACTOR;
    let mut outcome = CascadeOutcome::default();
    let mut depth: u32 = 0;

    loop {
        let matches = find_matches(board);
        if matches.is_empty() {
            break;
        }

        depth += 1;
        debug_assert!((depth as usize) <= max_passes);
        if depth as usize > max_passes {
            break;
        }

        outcome.steps.push(step(board, depth, CascadePhase::Highlight, |s| {
            s.matched = matches.positions().to_vec();
        }));

        let removed = matches.len() as u32;
        for &pos in matches.positions() {
            board.set(pos, None);
        }
        let points = cascade_points(removed, depth);
        outcome.removed += removed;
        outcome.points = outcome.points.saturating_add(points);

        outcome.steps.push(step(board, depth, CascadePhase::Remove, |s| {
            s.points = points;
        }));

        for col in 0..board.cols() {
            board.collapse_column(col);
        }
        outcome.steps.push(step(board, depth, CascadePhase::Collapse, |_| {}));

        board.fill_empties(rng);
        outcome.steps.push(step(board, depth, CascadePhase::Refill, |_| {}));
    }

    outcome.passes = depth;
    debug_assert!(board.is_fully_populated());
    outcome
}

fn step(
    board: &Board,
    depth: u32,
    phase: CascadePhase,
    extra: impl FnOnce(&mut CascadeStep),
) -> CascadeStep {
    let mut grid = Vec::new();
    board.write_u8_grid(&mut grid);
    let mut step = CascadeStep {
        depth,
        phase,
        grid,
        matched: Vec::new(),
        points: 0,
    };
    extra(&mut step);
    step
}
