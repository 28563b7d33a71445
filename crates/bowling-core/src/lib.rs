//! # bowling-core: Pure Rules for a Game of Ten-Pin Bowling
//!
//! This crate validates a single player's rolls, tracks frame completion and
//! scores the finished game. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  ★ bowling-core (THIS CRATE) ★                          │
//! │                                                                         │
//! │   roll(pins) ──► ┌───────────┐   ┌───────────┐   ┌───────────┐          │
//! │                  │   game    │──►│   frame   │──►│ validation│          │
//! │                  │  10 Frame │   │  states   │   │  RollKind │          │
//! │                  └─────┬─────┘   └───────────┘   └───────────┘          │
//! │                        │                                                │
//! │   score() ◄────────────┤         ┌───────────┐                          │
//! │   scorecard() ◄────────┴────────►│  scoring  │  pure functions          │
//! │                                  └───────────┘                          │
//! │                                                                         │
//! │   NO I/O • NO PERSISTENCE • ONE WRITER                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`game`] - The ten-frame game and its public API
//! - [`frame`] - Frame state machine (regular and final frames)
//! - [`scoring`] - Strike / spare bonus lookahead and scorecards
//! - [`types`] - Value types (`Pins`, `Classification`)
//! - [`validation`] - Roll legality rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use bowling_core::{Game, GameError};
//!
//! let mut game = Game::new();
//! game.roll(10)?;            // strike
//! game.roll(3)?;
//! game.roll(4)?;
//! for _ in 0..16 {
//!     game.roll(0)?;
//! }
//!
//! assert_eq!(game.score()?, 24);
//! assert_eq!(game.roll(1), Err(GameError::GameOver));
//! # Ok::<(), GameError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod frame;
pub mod game;
pub mod scoring;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{GameError, GameResult, RollError};
pub use frame::Frame;
pub use game::Game;
pub use scoring::{FrameScore, Scorecard};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Pins in a full rack.
pub const TOTAL_PINS: u8 = 10;

/// Frames in a game. The last one is the final frame with bonus balls.
pub const FRAMES_PER_GAME: u8 = 10;

/// Maximum rolls in frames 1-9.
pub const MAX_REGULAR_ROLLS: usize = 2;

/// Maximum rolls in the tenth frame (after a strike or spare).
pub const MAX_FINAL_ROLLS: usize = 3;
