//! Deterministic match-3 cascade engine.
//!
//! This crate is the headless "gem board" logic of a tile-matching puzzle
//! game: match detection, chain-reaction (cascade) resolution with
//! gravity-based refill, exhaustive deadlock detection, and the
//! Idle/Swapping/Resolving/GameOver session state machine. It owns no
//! rendering, input devices, or persistence; callers drive it with
//! `select_cell` and draw from snapshots.
//!
//! # Determinism
//!
//! The RNG is seeded and injectable; a seed reproduces the entire session,
//! including every intermediate cascade frame. Logical resolution is
//! instantaneous; animation pacing belongs to the caller, which replays the
//! recorded [`core::CascadeStep`]s at its own cadence (or drops them and
//! snaps to the final snapshot).
//!
//! # Example
//!
//! ```
//! use gem_board::core::{GameState, SelectOutcome};
//!
//! let mut game = GameState::new(8, 8, 6, 12345)?;
//! if let Some((a, b)) = game.hint() {
//!     game.select_cell(a);
//!     if let SelectOutcome::Resolved(report) = game.select_cell(b) {
//!         assert!(report.points > 0);
//!     }
//! }
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.grid.len(), 64);
//! # Ok::<(), gem_board::types::ConfigError>(())
//! ```

pub mod core;
pub mod types;
