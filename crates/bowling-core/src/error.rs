//! # Error Types
//!
//! Domain-specific error types for bowling-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  GameError            - What `Game::roll` / `Game::score` return        │
//! │  ├── InvalidRoll      - wraps RollError (recoverable)                   │
//! │  ├── GameOver         - roll after the tenth frame closed               │
//! │  └── ScoringNotAvailable - score() while a frame still accepts rolls    │
//! │                                                                         │
//! │  RollError            - A single roll failed validation                 │
//! │  ├── OutOfRange       - pin count outside [0, 10]                       │
//! │  └── TooManyPins      - more pins than are standing in the frame        │
//! │                                                                         │
//! │  Flow: RollError → GameError::InvalidRoll → caller                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (pins, frame number)
//! 3. Errors are enum variants, never String
//! 4. A rejected roll never changes game state

use thiserror::Error;

// =============================================================================
// Game Error
// =============================================================================

/// Errors returned by the public [`Game`](crate::game::Game) API.
///
/// Every variant is a contract violation by the caller. None of them leave
/// the game in a different state than before the failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The roll was rejected by the active frame.
    ///
    /// ## When This Occurs
    /// - Pin count outside [0, 10]
    /// - Pin count larger than the pins still standing
    ///
    /// ## User Workflow
    /// ```text
    /// Frame 3: first roll 6
    ///      │
    ///      ▼
    /// roll(5) → 4 pins standing
    ///      │
    ///      ▼
    /// InvalidRoll(TooManyPins { pins: 5, standing: 4 })
    ///      │
    ///      ▼
    /// Frame 3 still holds [6], caller may roll again
    /// ```
    #[error("Invalid roll: {0}")]
    InvalidRoll(#[from] RollError),

    /// A roll was submitted after the tenth frame closed.
    #[error("Game is over, no more rolls are accepted")]
    GameOver,

    /// `score()` was called while the game is still in progress.
    #[error("Cannot score while frame {frame} is still in progress")]
    ScoringNotAvailable { frame: u8 },
}

// =============================================================================
// Roll Error
// =============================================================================

/// Validation failures for a single roll.
///
/// Produced by the [`validation`](crate::validation) module before a roll is
/// recorded, so the frame never holds an illegal roll.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RollError {
    /// Pin count is outside the physical range of a rack.
    #[error("pin count {pins} must be between {min} and {max}")]
    OutOfRange { pins: i32, min: u8, max: u8 },

    /// Pin count exceeds the pins left standing in the frame.
    #[error("cannot knock down {pins} pins, only {standing} standing")]
    TooManyPins { pins: u8, standing: u8 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with GameError.
pub type GameResult<T> = Result<T, GameError>;

// =============================================================================
// Unit Tests
// =============================================================================
