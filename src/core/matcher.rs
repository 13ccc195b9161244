//! Match detection - pure classification of the grid
//!
//! Scans every row and every column for runs of `MIN_RUN` or more
//! equal-colored, non-empty cells and returns the deduplicated union of
//! their positions. No scoring or ordering logic lives here.

use crate::core::board::Board;
use crate::types::{Pos, MIN_RUN};

/// Deduplicated set of matched positions, iterated in row-major order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchSet {
    positions: Vec<Pos>,
}

impl MatchSet {
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[Pos] {
        &self.positions
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.positions.binary_search(&pos).is_ok()
    }
}

/// Find every matched cell on the board. O(rows * cols).
pub fn find_matches(board: &Board) -> MatchSet {
    let rows = board.rows();
    let cols = board.cols();
    let cells = board.cells();

    // Mask over flat indices; both passes union into it, deduplicating
    // cells that belong to a horizontal and a vertical run at once.
    let mut mask = vec![false; cells.len()];

    // Horizontal runs
    for row in 0..rows {
        let mut run_start = 0;
        for col in 1..=cols {
            let run_broken = col == cols
                || match (cells[board.flat(row, col - 1)], cells[board.flat(row, col)]) {
                    (Some(prev), Some(cur)) => !prev.matches(&cur),
                    _ => true,
                };
            if run_broken {
                if cells[board.flat(row, run_start)].is_some() && col - run_start >= MIN_RUN {
                    for c in run_start..col {
                        mask[board.flat(row, c)] = true;
                    }
                }
                run_start = col;
            }
        }
    }

    // Vertical runs
    for col in 0..cols {
        let mut run_start = 0;
        for row in 1..=rows {
            let run_broken = row == rows
                || match (cells[board.flat(row - 1, col)], cells[board.flat(row, col)]) {
                    (Some(prev), Some(cur)) => !prev.matches(&cur),
                    _ => true,
                };
            if run_broken {
                if cells[board.flat(run_start, col)].is_some() && row - run_start >= MIN_RUN {
                    for r in run_start..row {
                        mask[board.flat(r, col)] = true;
                    }
                }
                run_start = row;
            }
        }
    }

    let positions = (0..rows)
        .flat_map(|row| (0..cols).map(move |col| Pos::new(row, col)))
        .filter(|&pos| mask[board.flat(pos.row, pos.col)])
        .collect();

    MatchSet { positions }
}
