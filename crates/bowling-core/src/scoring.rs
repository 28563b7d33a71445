//! # Scoring Engine
//!
//! Pure functions over a slice of frames. Nothing here mutates a game.
//!
//! ## Bonus Lookahead
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  frame:   1      2      3      ...    10                                │
//! │  rolls:   X      X      7 2           ...                               │
//! │           │      │      │                                               │
//! │           └──────┴──────┘                                               │
//! │  frame 1 = 10 + (10 + 7)       next two rolls, crossing frame 2         │
//! │  frame 2 = 10 + (7 + 2)        next two rolls, inside frame 3           │
//! │  frame 3 = 9                   open                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bonus rolls are the rolls of the *following* frames in bowling order, so
//! the lookahead stops at the tenth frame: there is no eleventh.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::frame::Frame;
use crate::types::{Classification, Pins};
use crate::TOTAL_PINS;

// =============================================================================
// Per-Frame Scoring
// =============================================================================

/// Bonus pins earned by frame `index` (0-based) from the frames after it.
///
/// Returns `Some(0)` for open frames and the tenth frame, and `None` while a
/// strike or spare is still waiting for its bonus rolls.
///
/// ## Example
/// ```rust
/// use bowling_core::frame::Frame;
/// use bowling_core::scoring::bonus_pins_for;
/// use bowling_core::Pins;
///
/// let mut strike = Frame::new(1);
/// strike.roll(Pins::STRIKE).unwrap();
/// let mut open = Frame::new(2);
/// open.roll(Pins::new(3).unwrap()).unwrap();
/// open.roll(Pins::new(4).unwrap()).unwrap();
///
/// assert_eq!(bonus_pins_for(0, &[strike, open]), Some(7));
/// ```
pub fn bonus_pins_for(index: usize, frames: &[Frame]) -> Option<u32> {
    let wanted = frames.get(index)?.classification().map_or(0, |c| c.bonus_rolls());

    if wanted == 0 {
        return Some(0);
    }

    let bonus: Vec<Pins> = frames[index + 1..]
        .iter()
        .flat_map(|frame| frame.rolls().iter().copied())
        .take(wanted)
        .collect();

    if bonus.len() < wanted {
        return None;
    }

    Some(bonus.into_iter().map(u32::from).sum())
}

/// Score of frame `index` alone: base pins plus bonus pins.
///
/// `None` while the frame still accepts rolls or its bonus is unresolved.
pub fn frame_score(index: usize, frames: &[Frame]) -> Option<u32> {
    let frame = frames.get(index)?;

    if frame.accepts_rolls() {
        return None;
    }

    let base = match frame.classification() {
        Some(Classification::Strike) | Some(Classification::Spare) => TOTAL_PINS as u32,
        Some(Classification::Open) | None => frame.total_pins(),
    };

    Some(base + bonus_pins_for(index, frames)?)
}

/// Total score of a sequence of frames.
///
/// `None` unless every frame's score can be resolved.
pub fn total_score(frames: &[Frame]) -> Option<u32> {
    (0..frames.len())
        .map(|index| frame_score(index, frames))
        .sum()
}

// =============================================================================
// Scorecard
// =============================================================================

/// One column of a printed scorecard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FrameScore {
    /// 1-based frame number.
    pub number: u8,

    /// Rolls bowled in this frame.
    pub rolls: Vec<Pins>,

    /// `None` for the tenth frame.
    pub classification: Option<Classification>,

    /// Frame score, once the frame and its bonus rolls are complete.
    pub score: Option<u32>,

    /// Cumulative score through this frame, once resolvable.
    pub running_total: Option<u32>,
}

/// Frame-by-frame breakdown of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Scorecard {
    pub frames: Vec<FrameScore>,

    /// Final score, once the game is over.
    pub total: Option<u32>,
}

/// Builds a scorecard for a game in any state.
///
/// A running total stays `None` from the first unresolved frame onwards.
pub fn scorecard(frames: &[Frame]) -> Scorecard {
    let mut running = Some(0u32);

    let columns: Vec<FrameScore> = frames
        .iter()
        .enumerate()
        .map(|(index, frame)| {
            let score = frame_score(index, frames);
            running = running.zip(score).map(|(acc, s)| acc + s);

            FrameScore {
                number: frame.number(),
                rolls: frame.rolls().to_vec(),
                classification: frame.classification(),
                score,
                running_total: running,
            }
        })
        .collect();

    Scorecard {
        frames: columns,
        total: total_score(frames),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Lays rolls out into frames 1..=10, stopping when the rolls run out.
    fn frames_from(rolls: &[i32]) -> Vec<Frame> {
        let mut frames: Vec<Frame> = (1..=10).map(Frame::new).collect();
        let mut current = 0;
        for &r in rolls {
            while !frames[current].accepts_rolls() {
                current += 1;
            }
            frames[current].roll(Pins::new(r).unwrap()).unwrap();
        }
        frames
    }

    #[test]
    fn test_open_frame_has_no_bonus() {
        let frames = frames_from(&[3, 4]);
        assert_eq!(bonus_pins_for(0, &frames), Some(0));
        assert_eq!(frame_score(0, &frames), Some(7));
    }

    #[test]
    fn test_spare_bonus_is_next_roll() {
        let frames = frames_from(&[5, 5, 3]);
        assert_eq!(bonus_pins_for(0, &frames), Some(3));
        assert_eq!(frame_score(0, &frames), Some(13));
        // Frame 2 is still open for its second roll.
        assert_eq!(frame_score(1, &frames), None);
    }

    #[test]
    fn test_strike_bonus_crosses_frames() {
        let frames = frames_from(&[10, 10, 7, 2]);
        assert_eq!(frame_score(0, &frames), Some(27));
        assert_eq!(frame_score(1, &frames), Some(19));
        assert_eq!(frame_score(2, &frames), Some(9));
    }

    #[test]
    fn test_strike_waits_for_bonus() {
        let frames = frames_from(&[10, 4]);
        assert_eq!(bonus_pins_for(0, &frames), None);
        assert_eq!(frame_score(0, &frames), None);
    }

    #[test]
    fn test_ninth_frame_strike_reads_tenth_frame_rolls() {
        let mut rolls = vec![0; 16];
        rolls.extend([10, 10, 10, 10]);
        let frames = frames_from(&rolls);

        assert_eq!(frame_score(8, &frames), Some(30));
        assert_eq!(frame_score(9, &frames), Some(30));
        assert_eq!(total_score(&frames), Some(60));
    }

    #[test]
    fn test_tenth_frame_has_no_lookahead() {
        let mut rolls = vec![0; 18];
        rolls.extend([7, 3, 5]);
        let frames = frames_from(&rolls);

        assert_eq!(bonus_pins_for(9, &frames), Some(0));
        assert_eq!(frame_score(9, &frames), Some(15));
    }

    #[test]
    fn test_total_score_requires_every_frame() {
        let frames = frames_from(&[1, 1, 1]);
        assert_eq!(total_score(&frames), None);
    }

    #[test]
    fn test_index_past_end() {
        let frames = frames_from(&[]);
        assert_eq!(bonus_pins_for(10, &frames), None);
        assert_eq!(frame_score(10, &frames), None);
    }

    #[test]
    fn test_scorecard_running_totals() {
        let card = scorecard(&frames_from(&[10, 3, 4, 5, 5]));

        assert_eq!(card.frames.len(), 10);
        assert_eq!(card.frames[0].classification, Some(Classification::Strike));
        assert_eq!(card.frames[0].score, Some(17));
        assert_eq!(card.frames[0].running_total, Some(17));
        assert_eq!(card.frames[1].running_total, Some(24));
        // Spare in frame 3 has no bonus roll yet.
        assert_eq!(card.frames[2].classification, Some(Classification::Spare));
        assert_eq!(card.frames[2].score, None);
        assert_eq!(card.frames[2].running_total, None);
        assert_eq!(card.frames[9].classification, None);
        assert_eq!(card.total, None);
    }

    #[test]
    fn test_scorecard_json_shape() {
        let card = scorecard(&frames_from(&[10]));
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["frames"][0]["number"], 1);
        assert_eq!(json["frames"][0]["rolls"], serde_json::json!([10]));
        assert_eq!(json["frames"][0]["classification"], "strike");
        assert!(json["frames"][0]["score"].is_null());
        assert!(json["total"].is_null());
    }
}
