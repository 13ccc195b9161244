//! Renderer-facing snapshots
//!
//! The engine is headless: after every transition it can emit a snapshot of
//! everything a renderer needs. Color index to visual asset mapping is
//! entirely the renderer's business; the grid is encoded as plain bytes
//! (0 = empty, color + 1 otherwise).

use serde::Serialize;

use crate::types::{GameStatus, Pos};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub score: u32,
    pub level: u32,
    /// Points accumulated within the current level
    pub level_score: u32,
    /// Points required to finish the current level
    pub score_to_next_level: u32,
    pub rows: usize,
    pub cols: usize,
    /// Row-major grid, 0 = empty, color + 1 otherwise
    pub grid: Vec<u8>,
    /// Pending first selection, if any
    pub selection: Option<Pos>,
    /// Seed the session was created with (reproducibility)
    pub seed: u32,
    /// Completed (matched) swaps this session
    pub moves_made: u32,
}

impl GameSnapshot {
    /// Fractional progress toward the next level, for progress bars
    pub fn level_progress(&self) -> f32 {
        if self.score_to_next_level == 0 {
            return 1.0;
        }
        self.level_score as f32 / self.score_to_next_level as f32
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::Idle
    }
}
