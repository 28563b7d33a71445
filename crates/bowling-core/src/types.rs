//! # Domain Types
//!
//! Value types shared by the frame state machine and the scoring engine.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │      Pins       │   │ Classification  │                              │
//! │  │  ─────────────  │   │  ─────────────  │                              │
//! │  │  u8 in [0, 10]  │   │  Open           │                              │
//! │  │  10 = strike    │   │  Spare          │                              │
//! │  │  0  = gutter    │   │  Strike         │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::RollError;
use crate::validation::{validate_pin_count, ValidationResult};
use crate::TOTAL_PINS;

// =============================================================================
// Pins
// =============================================================================

/// Number of pins knocked down by a single roll.
///
/// Always in `[0, 10]`: the only constructor validates the range, and the
/// serde impl goes through the same check.
///
/// ## Example
/// ```rust
/// use bowling_core::Pins;
///
/// let pins = Pins::new(7).unwrap();
/// assert_eq!(pins.count(), 7);
/// assert!(Pins::new(11).is_err());
/// assert!(Pins::STRIKE.is_strike());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "i32", into = "u8")]
#[ts(export)]
pub struct Pins(u8);

impl Pins {
    /// All ten pins.
    pub const STRIKE: Pins = Pins(TOTAL_PINS);

    /// No pins.
    pub const GUTTER: Pins = Pins(0);

    /// Validates a raw pin count.
    pub fn new(pins: i32) -> ValidationResult<Self> {
        validate_pin_count(pins)?;
        Ok(Pins(pins as u8))
    }

    /// Returns the pin count.
    #[inline]
    pub const fn count(&self) -> u8 {
        self.0
    }

    /// Checks if this roll cleared the whole rack.
    #[inline]
    pub const fn is_strike(&self) -> bool {
        self.0 == TOTAL_PINS
    }
}

impl TryFrom<i32> for Pins {
    type Error = RollError;

    fn try_from(pins: i32) -> Result<Self, Self::Error> {
        Pins::new(pins)
    }
}

impl From<Pins> for u8 {
    fn from(pins: Pins) -> Self {
        pins.0
    }
}

impl From<Pins> for u32 {
    fn from(pins: Pins) -> Self {
        pins.0 as u32
    }
}

impl fmt::Display for Pins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Classification
// =============================================================================

/// How a regular frame (1-9) earns its score.
///
/// ## Bonus Rules
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Open    │ 3 4      │ own pins only                    = 7              │
/// │  Spare   │ 6 /      │ 10 + next roll                   = 10 + 1 roll    │
/// │  Strike  │ X        │ 10 + next two rolls              = 10 + 2 rolls   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Pins left standing after the frame (or the frame is not finished).
    #[default]
    Open,
    /// All ten pins across exactly two rolls.
    Spare,
    /// All ten pins on the first roll.
    Strike,
}

impl Classification {
    /// Number of following rolls added as bonus pins.
    #[inline]
    pub const fn bonus_rolls(&self) -> usize {
        match self {
            Classification::Open => 0,
            Classification::Spare => 1,
            Classification::Strike => 2,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Open => write!(f, "open"),
            Classification::Spare => write!(f, "spare"),
            Classification::Strike => write!(f, "strike"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pins_new() {
        assert_eq!(Pins::new(0).unwrap(), Pins::GUTTER);
        assert_eq!(Pins::new(10).unwrap(), Pins::STRIKE);
        assert_eq!(Pins::new(4).unwrap().count(), 4);
    }

    #[test]
    fn test_pins_rejects_out_of_range() {
        assert_eq!(
            Pins::new(11),
            Err(RollError::OutOfRange {
                pins: 11,
                min: 0,
                max: 10
            })
        );
        assert!(Pins::new(-1).is_err());
    }

    #[test]
    fn test_pins_serde_validates() {
        let pins: Pins = serde_json::from_str("9").unwrap();
        assert_eq!(pins.count(), 9);
        assert_eq!(serde_json::to_string(&pins).unwrap(), "9");

        assert!(serde_json::from_str::<Pins>("12").is_err());
    }

    #[test]
    fn test_classification_default() {
        assert_eq!(Classification::default(), Classification::Open);
    }

    #[test]
    fn test_classification_bonus_rolls() {
        assert_eq!(Classification::Open.bonus_rolls(), 0);
        assert_eq!(Classification::Spare.bonus_rolls(), 1);
        assert_eq!(Classification::Strike.bonus_rolls(), 2);
    }
}
