//! # Validation Module
//!
//! Roll legality rules, checked before a roll is recorded.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Range                                                         │
//! │  └── validate_pin_count: 0 <= pins <= 10                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Rack                                                          │
//! │  └── validate_roll: pins <= pins standing for this RollKind             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Frame state (frame.rs)                                        │
//! │  └── a closed frame never yields a RollKind                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pins Standing
//! The rack is reset whenever the previous roll left nothing standing (a
//! strike, or the second ball of a spare). Otherwise the next roll is capped
//! by what the previous roll left.
//!
//! ## Usage
//! ```rust
//! use bowling_core::validation::{validate_roll, RollKind};
//! use bowling_core::Pins;
//!
//! let first = Pins::new(6).unwrap();
//! let kind = RollKind::Second { first };
//!
//! assert!(validate_roll(kind, Pins::new(4).unwrap()).is_ok());
//! assert!(validate_roll(kind, Pins::new(5).unwrap()).is_err());
//! ```

use crate::error::RollError;
use crate::types::Pins;
use crate::TOTAL_PINS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, RollError>;

// =============================================================================
// Roll Kind
// =============================================================================

/// Position of a roll inside its frame, carrying the earlier rolls that
/// decide its cap.
///
/// The context is copied out of the frame, so a validator can never hold on
/// to (or mutate) the frame's roll list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollKind {
    /// Opening roll of a frame: full rack.
    First,
    /// Second roll of a frame.
    Second { first: Pins },
    /// Third roll of the tenth frame, only after a strike or spare.
    Bonus { prior: [Pins; 2] },
}

impl RollKind {
    /// Pins standing when this roll is bowled.
    ///
    /// ## Tenth Frame Bonus
    /// ```text
    /// X X _   → fresh rack            → 10
    /// X 3 _   → 3 knocked from fresh  → 7
    /// X 0 _   → nothing knocked       → 10
    /// 6 4 _   → spare cleared rack    → 10
    /// ```
    pub fn pins_standing(&self) -> u8 {
        match *self {
            RollKind::First => TOTAL_PINS,
            RollKind::Second { first } => standing_after(first),
            RollKind::Bonus {
                prior: [first, second],
            } => {
                if first.is_strike() {
                    standing_after(second)
                } else {
                    // Reachable only after a spare.
                    TOTAL_PINS
                }
            }
        }
    }
}

/// Pins left after a roll bowled at a full rack, resetting on a strike.
fn standing_after(previous: Pins) -> u8 {
    if previous.is_strike() {
        TOTAL_PINS
    } else {
        TOTAL_PINS - previous.count()
    }
}

// =============================================================================
// Validators
// =============================================================================

/// Validates a raw pin count.
///
/// ## Rules
/// - Must be between 0 and 10 (inclusive)
///
/// ## Example
/// ```rust
/// use bowling_core::validation::validate_pin_count;
///
/// assert!(validate_pin_count(0).is_ok());
/// assert!(validate_pin_count(10).is_ok());
/// assert!(validate_pin_count(11).is_err());
/// assert!(validate_pin_count(-1).is_err());
/// ```
pub fn validate_pin_count(pins: i32) -> ValidationResult<()> {
    if !(0..=TOTAL_PINS as i32).contains(&pins) {
        return Err(RollError::OutOfRange {
            pins,
            min: 0,
            max: TOTAL_PINS,
        });
    }

    Ok(())
}

/// Validates a roll against the pins standing for its position.
///
/// ## Rules
/// - Regular second roll: `first + second <= 10`
/// - Tenth frame second roll: unconstrained after a strike
/// - Tenth frame third roll: capped by roll two, unless roll two (or the
///   spare) already cleared the rack
pub fn validate_roll(kind: RollKind, pins: Pins) -> ValidationResult<()> {
    let standing = kind.pins_standing();

    if pins.count() > standing {
        return Err(RollError::TooManyPins {
            pins: pins.count(),
            standing,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
