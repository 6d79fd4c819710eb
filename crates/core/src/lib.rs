//! Engine core - pure, deterministic, and testable
//!
//! All game rules and state live here, with **zero dependencies** on UI,
//! networking, or I/O:
//!
//! - **Deterministic**: the same seed produces an identical game
//! - **Synchronous**: every call completes in bounded time, nothing blocks
//! - **Host-driven**: the engine consumes elapsed durations, never a clock
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision queries and line clearing
//! - [`pieces`]: tetromino shape tables and SRS rotation with wall kicks
//! - [`game`]: the falling-piece state machine and command/query surface
//! - [`rng`]: seedable 7-bag piece generation
//! - [`scoring`]: line-clear points, level progression, gravity curve
//! - [`snapshot`]: per-frame read views for the host renderer
//!
//! # Example
//!
//! ```
//! use blockfall_core::Game;
//! use blockfall_types::GameStatus;
//!
//! let mut game = Game::new(12345);
//!
//! // Host input, then one timing update per frame.
//! game.move_right();
//! game.rotate_cw();
//! game.update(16);
//!
//! assert_eq!(game.status(), GameStatus::Running);
//! let snapshot = game.snapshot();
//! assert!(snapshot.active.is_some());
//! ```

pub mod board;
pub mod game;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game::{Game, Tetromino};
pub use pieces::{shape_of, try_rotate};
pub use rng::{PieceBag, SimpleRng};
pub use scoring::{fall_interval_ms, level_for_lines, score_for_lines};
pub use snapshot::{ActiveSnapshot, GameSnapshot, TimersSnapshot};
