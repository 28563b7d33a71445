//! # Frame State Machine
//!
//! A frame accepts rolls until its rules close it.
//!
//! ## States
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Regular frame (1-9)                                                    │
//! │                                                                         │
//! │   WaitingFirst ──(strike)──────────────────────────► Closed             │
//! │        │                                               ▲                │
//! │        └──(< 10)──► WaitingSecond ──(any legal)────────┘                │
//! │                                                                         │
//! │  Final frame (10)                                                       │
//! │                                                                         │
//! │   WaitingFirst ──► WaitingSecond ──(sum >= 10)──► WaitingThird ──┐      │
//! │                         │                                        │      │
//! │                         └──(sum < 10)──────────────► Closed ◄────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::error::RollError;
use crate::types::{Classification, Pins};
use crate::validation::{validate_roll, RollKind, ValidationResult};
use crate::{FRAMES_PER_GAME, MAX_FINAL_ROLLS, MAX_REGULAR_ROLLS, TOTAL_PINS};

// =============================================================================
// Frame States
// =============================================================================

/// Progress of a regular frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegularState {
    #[default]
    WaitingFirst,
    WaitingSecond,
    Closed,
}

/// Progress of the tenth frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalState {
    #[default]
    WaitingFirst,
    WaitingSecond,
    /// Bonus ball earned by a strike or spare.
    WaitingThird,
    Closed,
}

/// Regular frames carry a classification; the tenth frame only tracks
/// completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FrameKind {
    Regular {
        state: RegularState,
        classification: Classification,
    },
    Final {
        state: FinalState,
    },
}

// =============================================================================
// Frame
// =============================================================================

/// One turn of the game: up to two rolls, three in the tenth frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    /// 1-based frame number.
    number: u8,

    kind: FrameKind,

    /// Recorded rolls, in order. Never holds an illegal roll.
    rolls: Vec<Pins>,
}

impl Frame {
    /// Creates an empty frame. Frame 10 gets the final-frame rules.
    pub fn new(number: u8) -> Self {
        let kind = if number == FRAMES_PER_GAME {
            FrameKind::Final {
                state: FinalState::WaitingFirst,
            }
        } else {
            FrameKind::Regular {
                state: RegularState::WaitingFirst,
                classification: Classification::Open,
            }
        };

        Frame {
            number,
            kind,
            rolls: Vec::with_capacity(MAX_FINAL_ROLLS),
        }
    }

    #[inline]
    pub fn number(&self) -> u8 {
        self.number
    }

    #[inline]
    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    #[inline]
    pub fn rolls(&self) -> &[Pins] {
        &self.rolls
    }

    pub fn first_roll(&self) -> Option<Pins> {
        self.rolls.first().copied()
    }

    pub fn second_roll(&self) -> Option<Pins> {
        self.rolls.get(1).copied()
    }

    /// Sum of this frame's own rolls.
    pub fn total_pins(&self) -> u32 {
        self.rolls.iter().copied().map(u32::from).sum()
    }

    #[inline]
    pub fn is_final(&self) -> bool {
        matches!(self.kind, FrameKind::Final { .. })
    }

    /// Strike / spare / open for frames 1-9, `None` for the tenth.
    pub fn classification(&self) -> Option<Classification> {
        match self.kind {
            FrameKind::Regular { classification, .. } => Some(classification),
            FrameKind::Final { .. } => None,
        }
    }

    pub fn is_strike(&self) -> bool {
        self.classification() == Some(Classification::Strike)
    }

    pub fn is_spare(&self) -> bool {
        self.classification() == Some(Classification::Spare)
    }

    pub fn accepts_rolls(&self) -> bool {
        self.next_roll_kind().is_some()
    }

    /// Pins standing for the next roll, `None` once the frame is closed.
    pub fn pins_standing(&self) -> Option<u8> {
        self.next_roll_kind().map(|kind| kind.pins_standing())
    }

    /// The validation context for the next roll, or `None` if closed.
    pub fn next_roll_kind(&self) -> Option<RollKind> {
        let waiting = match self.kind {
            FrameKind::Regular { state, .. } => match state {
                RegularState::WaitingFirst => 0,
                RegularState::WaitingSecond => 1,
                RegularState::Closed => return None,
            },
            FrameKind::Final { state } => match state {
                FinalState::WaitingFirst => 0,
                FinalState::WaitingSecond => 1,
                FinalState::WaitingThird => 2,
                FinalState::Closed => return None,
            },
        };

        match (waiting, self.rolls.as_slice()) {
            (0, []) => Some(RollKind::First),
            (1, [first]) => Some(RollKind::Second { first: *first }),
            (2, [first, second]) => Some(RollKind::Bonus {
                prior: [*first, *second],
            }),
            // State and roll count move together in `roll`.
            _ => None,
        }
    }

    /// Validates and records a roll.
    ///
    /// A rejected roll leaves the frame untouched. Rolling into a closed
    /// frame reports zero pins standing.
    pub fn roll(&mut self, pins: Pins) -> ValidationResult<()> {
        let kind = self.next_roll_kind().ok_or(RollError::TooManyPins {
            pins: pins.count(),
            standing: 0,
        })?;

        validate_roll(kind, pins)?;

        self.rolls.push(pins);
        self.advance();

        Ok(())
    }

    /// Recomputes state (and classification) from the recorded rolls.
    fn advance(&mut self) {
        let count = self.rolls.len();
        let opening_pair: u32 = self.rolls.iter().take(2).copied().map(u32::from).sum();

        self.kind = match self.kind {
            FrameKind::Regular { .. } => {
                let strike = self.rolls[0].is_strike();
                let classification = if strike {
                    Classification::Strike
                } else if count == MAX_REGULAR_ROLLS && opening_pair == TOTAL_PINS as u32 {
                    Classification::Spare
                } else {
                    Classification::Open
                };
                let state = if strike || count >= MAX_REGULAR_ROLLS {
                    RegularState::Closed
                } else {
                    RegularState::WaitingSecond
                };
                FrameKind::Regular {
                    state,
                    classification,
                }
            }
            FrameKind::Final { .. } => {
                let state = match count {
                    1 => FinalState::WaitingSecond,
                    2 if opening_pair >= TOTAL_PINS as u32 => FinalState::WaitingThird,
                    _ => FinalState::Closed,
                };
                FrameKind::Final { state }
            }
        };
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
