//! Core module - pure game logic with no I/O
//!
//! Everything in here is a synchronous, deterministic computation over
//! in-memory state. The only shared mutable resource is the injected RNG,
//! owned by the session and threaded explicitly; the same seed reproduces
//! the same game.
//!
//! Dependency order, leaves first:
//!
//! - [`rng`]: seeded LCG
//! - [`board`]: flat row-major grid, swap/collapse/refill mutations
//! - [`matcher`]: grid -> set of matched positions (pure classification)
//! - [`scoring`]: cascade points and level thresholds
//! - [`cascade`]: remove/collapse/refill loop with replay snapshots
//! - [`moves`]: exhaustive deadlock detection
//! - [`game_state`]: Idle/Swapping/Resolving/GameOver orchestration
//! - [`snapshot`]: renderer-facing view of a session

pub mod board;
pub mod cascade;
pub mod game_state;
pub mod matcher;
pub mod moves;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use board::Board;
pub use cascade::{resolve, CascadeOutcome, CascadePhase, CascadeStep};
pub use game_state::{GameState, ResolveReport, SelectOutcome};
pub use matcher::{find_matches, MatchSet};
pub use moves::{find_legal_move, has_legal_move};
pub use rng::SimpleRng;
pub use scoring::LevelTracker;
pub use snapshot::GameSnapshot;
