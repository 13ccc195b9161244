//! Core types shared across the engine
//! This module contains pure data types and tuning constants

use serde::Serialize;

/// Minimum grid dimension that can guarantee a match-free initial fill
pub const MIN_BOARD_DIM: usize = 3;
/// Minimum color count that can guarantee a match-free initial fill
pub const MIN_COLORS: u8 = 3;

/// Minimum run length that counts as a match
pub const MIN_RUN: usize = 3;

/// Points awarded per removed gem, before the cascade-depth multiplier
pub const BASE_GEM_POINTS: u32 = 10;

/// Score required to clear level 1
pub const FIRST_LEVEL_THRESHOLD: u32 = 500;

/// Level threshold growth (as numerator, denominator is 2 => x1.5 per level)
pub const LEVEL_GROWTH_NUMERATOR: u32 = 3;
pub const LEVEL_GROWTH_DENOMINATOR: u32 = 2;

/// Safety bound on resolve passes per cascade: `rows * cols * CASCADE_PASS_FACTOR`
pub const CASCADE_PASS_FACTOR: usize = 10;

/// Retry cap when a freshly generated board comes up with no legal move
pub const DEADLOCK_REGEN_LIMIT: u32 = 64;

/// Gem variants. Only `Normal` has specified clear behavior; `RowClear` and
/// `ColorBomb` are a closed extension point and are never spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GemVariant {
    Normal,
    RowClear,
    ColorBomb,
}

impl GemVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            GemVariant::Normal => "normal",
            GemVariant::RowClear => "rowClear",
            GemVariant::ColorBomb => "colorBomb",
        }
    }
}

/// A single gem on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Gem {
    /// Color index in `[0, colors)`
    pub color: u8,
    pub variant: GemVariant,
}

impl Gem {
    pub fn normal(color: u8) -> Self {
        Self {
            color,
            variant: GemVariant::Normal,
        }
    }

    /// Matching compares color only; variants match across kinds
    pub fn matches(&self, other: &Gem) -> bool {
        self.color == other.color
    }
}

/// Cell on the board (None = empty, a transient state only valid mid-cascade)
pub type Cell = Option<Gem>;

/// Grid position, row-major, origin top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True iff the two positions are at Manhattan distance exactly 1
    pub fn is_adjacent(&self, other: &Pos) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr + dc == 1
    }
}

/// Session status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GameStatus {
    Idle,
    Swapping,
    Resolving,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Idle => "idle",
            GameStatus::Swapping => "swapping",
            GameStatus::Resolving => "resolving",
            GameStatus::GameOver => "gameOver",
        }
    }
}

/// Why a selection was rejected. Rejections are no-ops, never aborts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rejection {
    /// Selection outside the grid, or a second selection that is neither
    /// the pending cell nor adjacent to it
    InvalidSwap,
    /// Mutating call while not accepting input (mid-resolve or after game over)
    IllegalState,
}

/// Fatal construction-time configuration error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Grids smaller than 3 in either dimension cannot host 3-in-a-row rules
    BoardTooSmall { rows: usize, cols: usize },
    /// Fewer than 3 colors cannot guarantee a match-free fill
    TooFewColors { colors: u8 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::BoardTooSmall { rows, cols } => {
                write!(f, "board {}x{} is too small, minimum is 3x3", rows, cols)
            }
            ConfigError::TooFewColors { colors } => {
                write!(
                    f,
                    "{} colors cannot fill a board match-free, minimum is 3",
                    colors
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
