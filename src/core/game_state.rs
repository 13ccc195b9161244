//! Game state module - orchestrates the session
//!
//! Ties together board, matcher, cascade resolver, move validator, and
//! scoring. The state machine is Idle -> Swapping -> Resolving ->
//! {Idle | GameOver}; Swapping and Resolving are transient because every
//! transition is a synchronous, deterministic computation. All state is
//! owned per instance; there is no global mutable state.

use crate::core::board::Board;
use crate::core::cascade::{resolve, CascadeOutcome};
use crate::core::matcher::find_matches;
use crate::core::moves::{find_legal_move, has_legal_move};
use crate::core::rng::SimpleRng;
use crate::core::scoring::LevelTracker;
use crate::core::snapshot::GameSnapshot;
use crate::types::{ConfigError, GameStatus, Pos, Rejection, DEADLOCK_REGEN_LIMIT};

/// What a `select_cell` call did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The cell is now the pending selection
    Selected,
    /// The pending selection was cleared (same cell selected twice)
    Deselected,
    /// Rejected no-op; the session is unchanged
    Rejected(Rejection),
    /// Adjacent swap produced no match and was reverted. Normal outcome,
    /// not an error; no score change.
    SwapReverted,
    /// Adjacent swap matched and the cascade ran to stability
    Resolved(ResolveReport),
}

/// Summary of a matched swap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveReport {
    pub points: u32,
    /// Cascade depth reached (number of resolve passes)
    pub cascades: u32,
    pub removed: u32,
    pub levels_gained: u32,
    pub game_over: bool,
}

/// Complete session state for one game instance
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    rng: SimpleRng,
    seed: u32,
    status: GameStatus,
    selection: Option<Pos>,
    score: u32,
    levels: LevelTracker,
    moves_made: u32,
    /// Replay data from the most recent matched swap (consumed once)
    last_cascade: Option<CascadeOutcome>,
}

impl GameState {
    /// Create a new session with the given seed.
    ///
    /// The board is regenerated (bounded by `DEADLOCK_REGEN_LIMIT`) until it
    /// offers at least one legal move; a session that opens dead would be
    /// unwinnable. If every attempt is deadlocked the session starts in
    /// GameOver rather than handing out an unplayable Idle board.
    pub fn new(rows: usize, cols: usize, colors: u8, seed: u32) -> Result<Self, ConfigError> {
        let mut rng = SimpleRng::new(seed);
        let mut board = Board::generate(rows, cols, colors, &mut rng)?;

        let mut status = GameStatus::Idle;
        let mut attempts = 0;
        while !has_legal_move(&mut board) {
            attempts += 1;
            if attempts >= DEADLOCK_REGEN_LIMIT {
                status = GameStatus::GameOver;
                break;
            }
            board = Board::generate(rows, cols, colors, &mut rng)?;
        }

        Ok(Self {
            board,
            rng,
            seed,
            status,
            selection: None,
            score: 0,
            levels: LevelTracker::new(),
            moves_made: 0,
            last_cascade: None,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.levels.level()
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    pub fn selection(&self) -> Option<Pos> {
        self.selection
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Select a cell. Two adjacent selections attempt a swap; reselecting
    /// the pending cell deselects it. A second selection that is neither is
    /// a rejected no-op: the pending selection stays where it was.
    pub fn select_cell(&mut self, pos: Pos) -> SelectOutcome {
        if self.status != GameStatus::Idle {
            return SelectOutcome::Rejected(Rejection::IllegalState);
        }
        if !self.board.contains(pos) {
            return SelectOutcome::Rejected(Rejection::InvalidSwap);
        }

        match self.selection {
            None => {
                self.selection = Some(pos);
                SelectOutcome::Selected
            }
            Some(first) if first == pos => {
                self.selection = None;
                SelectOutcome::Deselected
            }
            Some(first) if first.is_adjacent(&pos) => {
                self.selection = None;
                self.attempt_swap(first, pos)
            }
            Some(_) => SelectOutcome::Rejected(Rejection::InvalidSwap),
        }
    }

    /// Apply an adjacent swap: revert if it matches nothing, otherwise run
    /// the cascade to stability and re-check for deadlock.
    fn attempt_swap(&mut self, a: Pos, b: Pos) -> SelectOutcome {
        self.status = GameStatus::Swapping;
        // Adjacency and bounds were checked by the caller
        let swapped = self.board.try_swap(a, b);
        debug_assert!(swapped);

        if find_matches(&self.board).is_empty() {
            // Swap back, bit-identical to before
            self.board.try_swap(b, a);
            self.status = GameStatus::Idle;
            return SelectOutcome::SwapReverted;
        }

        self.status = GameStatus::Resolving;
        let outcome = resolve(&mut self.board, &mut self.rng);

        self.score = self.score.saturating_add(outcome.points);
        let levels_gained = self.levels.apply(outcome.points);
        self.moves_made += 1;

        let report = ResolveReport {
            points: outcome.points,
            cascades: outcome.passes,
            removed: outcome.removed,
            levels_gained,
            game_over: !has_legal_move(&mut self.board),
        };
        self.last_cascade = Some(outcome);

        self.status = if report.game_over {
            GameStatus::GameOver
        } else {
            GameStatus::Idle
        };
        SelectOutcome::Resolved(report)
    }

    /// Take the replay steps of the most recent matched swap. The renderer
    /// paces them itself; dropping them and drawing `snapshot()` instead is
    /// the "snap to final state" cancellation path.
    pub fn take_last_cascade(&mut self) -> Option<CascadeOutcome> {
        self.last_cascade.take()
    }

    /// Find a swap the player could make right now (hints, autoplay).
    /// Returns None when not Idle.
    pub fn hint(&mut self) -> Option<(Pos, Pos)> {
        if self.status != GameStatus::Idle {
            return None;
        }
        find_legal_move(&mut self.board)
    }

    /// Snapshot for the renderer
    pub fn snapshot(&self) -> GameSnapshot {
        let mut grid = Vec::new();
        self.board.write_u8_grid(&mut grid);
        GameSnapshot {
            status: self.status,
            score: self.score,
            level: self.levels.level(),
            level_score: self.levels.level_score(),
            score_to_next_level: self.levels.threshold(),
            rows: self.board.rows(),
            cols: self.board.cols(),
            grid,
            selection: self.selection,
            seed: self.seed,
            moves_made: self.moves_made,
        }
    }

    /// Discard the session and start over with a fresh board
    pub fn reset(&mut self, seed: u32) -> Result<(), ConfigError> {
        *self = Self::new(self.board.rows(), self.board.cols(), self.board.colors(), seed)?;
        Ok(())
    }

    /// Build a session around an explicit board (deterministic scenarios,
    /// puzzle setups). The board must be settled: fully populated and
    /// match-free, as `Board::generate` and a completed cascade guarantee.
    pub fn from_board(board: Board, seed: u32) -> Self {
        debug_assert!(board.is_fully_populated());
        debug_assert!(find_matches(&board).is_empty());
        Self {
            board,
            rng: SimpleRng::new(seed),
            seed,
            status: GameStatus::Idle,
            selection: None,
            score: 0,
            levels: LevelTracker::new(),
            moves_made: 0,
            last_cascade: None,
        }
    }
}
