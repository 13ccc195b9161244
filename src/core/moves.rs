//! Move validation - exhaustive deadlock detection
//!
//! Checks whether any single adjacent swap produces a match. Each candidate
//! pair is swapped in place, checked, and restored through an RAII guard, so
//! the board buffer is reused across trials and is bit-identical to its
//! pre-scan state no matter how the scan exits. O((rows * cols)^2) worst
//! case, which is fine for typical board sizes.

use crate::core::board::Board;
use crate::core::matcher::find_matches;
use crate::types::Pos;

/// Scoped trial swap; restores the two cells when dropped
struct TrialSwap<'a> {
    board: &'a mut Board,
    a: usize,
    b: usize,
}

impl<'a> TrialSwap<'a> {
    fn new(board: &'a mut Board, a: usize, b: usize) -> Self {
        board.swap_indices(a, b);
        Self { board, a, b }
    }

    fn board(&self) -> &Board {
        self.board
    }
}

impl Drop for TrialSwap<'_> {
    fn drop(&mut self) {
        self.board.swap_indices(self.a, self.b);
    }
}

/// Find the first adjacent pair whose swap produces a match, scanning
/// row-major and trying the right neighbor before the one below. The board
/// is unchanged when this returns.
pub fn find_legal_move(board: &mut Board) -> Option<(Pos, Pos)> {
    let rows = board.rows();
    let cols = board.cols();

    for row in 0..rows {
        for col in 0..cols {
            let here = Pos::new(row, col);
            if col + 1 < cols {
                let right = Pos::new(row, col + 1);
                if trial_swap_matches(board, here, right) {
                    return Some((here, right));
                }
            }
            if row + 1 < rows {
                let below = Pos::new(row + 1, col);
                if trial_swap_matches(board, here, below) {
                    return Some((here, below));
                }
            }
        }
    }
    None
}

/// True iff at least one legal swap exists
pub fn has_legal_move(board: &mut Board) -> bool {
    find_legal_move(board).is_some()
}

fn trial_swap_matches(board: &mut Board, a: Pos, b: Pos) -> bool {
    // Swapping two equal colors cannot create a run; skip the trial
    let ga = board.get(a).flatten();
    let gb = board.get(b).flatten();
    match (ga, gb) {
        (Some(ga), Some(gb)) if !ga.matches(&gb) => {}
        _ => return false,
    }

    let ia = board.flat(a.row, a.col);
    let ib = board.flat(b.row, b.col);
    let trial = TrialSwap::new(board, ia, ib);
    !find_matches(trial.board()).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_obvious_move() {
        // Moving the 0 at (0, 1) left completes column 0 = [0, 0, 0]
        let mut board = Board::from_rows(
            3,
            &[&[1, 0, 2], &[0, 1, 2], &[0, 2, 1]],
        );
        let before = board.clone();

        let found = find_legal_move(&mut board);
        assert!(found.is_some());
        assert_eq!(board, before);
    }

    #[test]
    fn test_diagonal_stripes_are_deadlocked() {
        // Diagonal stripes, color = (row + col) % 3. After any adjacent
        // swap, a moved gem of color v has exactly one v-colored neighbor
        // per axis, so every run tops out at 2 and no swap is legal.
        let mut board = Board::from_rows(
            3,
            &[
                &[0, 1, 2, 0, 1, 2],
                &[1, 2, 0, 1, 2, 0],
                &[2, 0, 1, 2, 0, 1],
                &[0, 1, 2, 0, 1, 2],
                &[1, 2, 0, 1, 2, 0],
                &[2, 0, 1, 2, 0, 1],
            ],
        );
        let before = board.clone();

        assert!(!has_legal_move(&mut board));
        assert_eq!(board, before, "scan must leave the board untouched");
    }

    #[test]
    fn test_board_restored_after_positive_scan() {
        let mut board = Board::from_rows(
            3,
            &[&[1, 0, 2], &[0, 1, 2], &[0, 2, 1]],
        );
        let before = board.clone();

        assert!(has_legal_move(&mut board));
        assert_eq!(board, before);
    }

    #[test]
    fn test_reports_a_pair_that_actually_matches() {
        let mut board = Board::from_rows(
            4,
            &[&[1, 0, 2, 3], &[0, 1, 2, 0], &[0, 2, 1, 3], &[3, 2, 0, 1]],
        );

        if let Some((a, b)) = find_legal_move(&mut board) {
            assert!(a.is_adjacent(&b));
            assert!(board.try_swap(a, b));
            assert!(!find_matches(&board).is_empty());
        }
    }

    #[test]
    fn test_generated_boards_mostly_have_moves() {
        use crate::core::rng::SimpleRng;

        let mut with_moves = 0;
        for seed in 1..=20u32 {
            let mut rng = SimpleRng::new(seed);
            let mut board = Board::generate(8, 8, 5, &mut rng).unwrap();
            if has_legal_move(&mut board) {
                with_moves += 1;
            }
        }
        // An 8x8 five-color board without a single legal move is
        // astronomically unlikely
        assert_eq!(with_moves, 20);
    }
}
