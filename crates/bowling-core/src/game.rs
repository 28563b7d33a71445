//! # Game
//!
//! Owns the ten frames and is the single entry point for rolls.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  roll(pins)                                                             │
//! │       │                                                                 │
//! │       ├── game over?            → GameError::GameOver                   │
//! │       │                                                                 │
//! │       ├── pins outside [0, 10]? → GameError::InvalidRoll                │
//! │       │                                                                 │
//! │       ├── active frame rejects? → GameError::InvalidRoll                │
//! │       │                                                                 │
//! │       └── OK → frame may close, next frame becomes active               │
//! │                                                                         │
//! │  score()                                                                │
//! │       │                                                                 │
//! │       ├── frame still open?     → GameError::ScoringNotAvailable        │
//! │       │                                                                 │
//! │       └── OK → sum of frame scores (pure read)                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use bowling_core::Game;
//!
//! let mut game = Game::new();
//! for _ in 0..12 {
//!     game.roll(10)?;
//! }
//! assert!(game.is_over());
//! assert_eq!(game.score()?, 300);
//! # Ok::<(), bowling_core::GameError>(())
//! ```

use tracing::{debug, info};

use crate::error::{GameError, GameResult};
use crate::frame::Frame;
use crate::scoring::{self, Scorecard};
use crate::types::Pins;
use crate::FRAMES_PER_GAME;

// =============================================================================
// Game
// =============================================================================

/// A single player's game of ten frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    frames: Vec<Frame>,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// Creates a game with ten empty frames, frame 1 active.
    pub fn new() -> Self {
        Game {
            frames: (1..=FRAMES_PER_GAME).map(Frame::new).collect(),
        }
    }

    /// Records a roll in the active frame.
    ///
    /// ## Errors
    /// - [`GameError::GameOver`] once the tenth frame has closed
    /// - [`GameError::InvalidRoll`] if `pins` is outside [0, 10] or more
    ///   than are standing; the game is left unchanged
    pub fn roll(&mut self, pins: i32) -> GameResult<()> {
        let index = self.active_index().ok_or(GameError::GameOver)?;
        let number = self.frames[index].number();

        let accepted = Pins::new(pins).and_then(|pins| self.frames[index].roll(pins));
        if let Err(err) = accepted {
            debug!(frame = number, pins = pins, error = %err, "Roll rejected");
            return Err(err.into());
        }

        let frame = &self.frames[index];
        debug!(
            frame = number,
            pins = pins,
            standing = ?frame.pins_standing(),
            closed = !frame.accepts_rolls(),
            "Roll accepted"
        );

        if self.is_over() {
            info!(rolls = self.roll_count(), "Game over");
        }

        Ok(())
    }

    /// Final score of a finished game.
    ///
    /// ## Errors
    /// - [`GameError::ScoringNotAvailable`] while any frame accepts rolls
    pub fn score(&self) -> GameResult<u32> {
        if let Some(frame) = self.current_frame() {
            return Err(GameError::ScoringNotAvailable { frame });
        }

        let total = scoring::total_score(&self.frames).ok_or(GameError::ScoringNotAvailable {
            frame: FRAMES_PER_GAME,
        })?;
        debug!(total = total, "Score computed");

        Ok(total)
    }

    /// Whether the tenth frame has closed.
    pub fn is_over(&self) -> bool {
        self.active_index().is_none()
    }

    /// Number (1-10) of the frame accepting rolls, `None` once the game is over.
    pub fn current_frame(&self) -> Option<u8> {
        self.active_index().map(|index| self.frames[index].number())
    }

    /// Read-only view of all ten frames.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Frame-by-frame breakdown, available at any point in the game.
    pub fn scorecard(&self) -> Scorecard {
        scoring::scorecard(&self.frames)
    }

    fn active_index(&self) -> Option<usize> {
        self.frames.iter().position(Frame::accepts_rolls)
    }

    fn roll_count(&self) -> usize {
        self.frames.iter().map(|frame| frame.rolls().len()).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RollError;

    fn roll_many(game: &mut Game, count: usize, pins: i32) {
        for _ in 0..count {
            game.roll(pins).unwrap();
        }
    }

    #[test]
    fn test_gutter_game() {
        let mut game = Game::new();
        roll_many(&mut game, 20, 0);
        assert_eq!(game.score(), Ok(0));
    }

    #[test]
    fn test_all_ones() {
        let mut game = Game::new();
        roll_many(&mut game, 20, 1);
        assert_eq!(game.score(), Ok(20));
    }

    #[test]
    fn test_all_spares() {
        let mut game = Game::new();
        roll_many(&mut game, 21, 5);
        assert!(game.is_over());
        assert_eq!(game.score(), Ok(150));
    }

    #[test]
    fn test_perfect_game() {
        let mut game = Game::new();
        roll_many(&mut game, 12, 10);
        assert_eq!(game.score(), Ok(300));
    }

    #[test]
    fn test_one_strike() {
        let mut game = Game::new();
        game.roll(10).unwrap();
        game.roll(3).unwrap();
        game.roll(4).unwrap();
        roll_many(&mut game, 16, 0);
        assert_eq!(game.score(), Ok(24));
    }

    #[test]
    fn test_one_spare() {
        let mut game = Game::new();
        game.roll(5).unwrap();
        game.roll(5).unwrap();
        game.roll(3).unwrap();
        roll_many(&mut game, 17, 0);
        assert_eq!(game.score(), Ok(16));
    }

    #[test]
    fn test_tenth_frame_spare_then_strike() {
        let mut game = Game::new();
        roll_many(&mut game, 18, 0);
        game.roll(7).unwrap();
        game.roll(3).unwrap();
        game.roll(10).unwrap();
        assert_eq!(game.score(), Ok(20));
    }

    #[test]
    fn test_tenth_frame_open_closes_game() {
        let mut game = Game::new();
        roll_many(&mut game, 18, 0);
        game.roll(4).unwrap();
        assert_eq!(game.current_frame(), Some(10));
        game.roll(5).unwrap();
        assert!(game.is_over());
        assert_eq!(game.score(), Ok(9));
    }

    #[test]
    fn test_pin_count_out_of_range() {
        let mut game = Game::new();
        assert_eq!(
            game.roll(11),
            Err(GameError::InvalidRoll(RollError::OutOfRange {
                pins: 11,
                min: 0,
                max: 10
            }))
        );
        assert!(matches!(game.roll(-1), Err(GameError::InvalidRoll(_))));
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_regular_frame_over_ten() {
        let mut game = Game::new();
        game.roll(6).unwrap();
        assert_eq!(
            game.roll(5),
            Err(GameError::InvalidRoll(RollError::TooManyPins {
                pins: 5,
                standing: 4
            }))
        );

        let first = &game.frames()[0];
        assert_eq!(first.rolls(), &[Pins::new(6).unwrap()]);
        assert_eq!(game.current_frame(), Some(1));

        // The caller may correct and roll again.
        game.roll(4).unwrap();
        assert_eq!(game.current_frame(), Some(2));
    }

    #[test]
    fn test_tenth_frame_bonus_cap() {
        let mut game = Game::new();
        roll_many(&mut game, 18, 0);
        game.roll(10).unwrap();
        game.roll(6).unwrap();
        assert!(matches!(game.roll(5), Err(GameError::InvalidRoll(_))));
        game.roll(4).unwrap();
        assert_eq!(game.score(), Ok(20));
    }

    #[test]
    fn test_score_before_game_over() {
        let mut game = Game::new();
        assert_eq!(
            game.score(),
            Err(GameError::ScoringNotAvailable { frame: 1 })
        );

        roll_many(&mut game, 19, 0);
        assert_eq!(
            game.score(),
            Err(GameError::ScoringNotAvailable { frame: 10 })
        );
    }

    #[test]
    fn test_score_needs_tenth_frame_bonus_ball() {
        let mut game = Game::new();
        roll_many(&mut game, 18, 0);
        game.roll(5).unwrap();
        game.roll(5).unwrap();
        assert!(!game.is_over());
        assert!(game.score().is_err());
    }

    #[test]
    fn test_roll_after_game_over() {
        let mut game = Game::new();
        roll_many(&mut game, 20, 0);
        assert_eq!(game.roll(0), Err(GameError::GameOver));
        // Game over wins over pin validation.
        assert_eq!(game.roll(11), Err(GameError::GameOver));
        assert_eq!(game.current_frame(), None);
    }

    #[test]
    fn test_score_is_idempotent() {
        let mut game = Game::new();
        roll_many(&mut game, 21, 5);
        assert_eq!(game.score(), game.score());
    }

    #[test]
    fn test_scorecard_of_finished_game() {
        let mut game = Game::new();
        roll_many(&mut game, 12, 10);
        let card = game.scorecard();

        assert_eq!(card.total, Some(300));
        let totals: Vec<Option<u32>> = card.frames.iter().map(|f| f.running_total).collect();
        let expected: Vec<Option<u32>> = (1..=10).map(|n| Some(n * 30)).collect();
        assert_eq!(totals, expected);
        assert_eq!(card.frames[9].rolls.len(), 3);
    }
}
