//! The stepping mechanism.
//!
//! Before every key press the rotors advance. The right rotor always moves.
//! The middle rotor moves when the right rotor sits on its notch, and also when
//! the middle rotor sits on its own notch; in the latter case the left rotor
//! moves too. That second rule is the double step: the middle rotor advances on
//! two consecutive key presses.
//!
//! All notch checks read the positions from *before* the step. Evaluating the
//! middle notch after the middle rotor has already moved would drop the double
//! step.

use std::fmt;

use enigma_types::{Letter, Position};
use serde::{Deserialize, Serialize};

/// Number of key presses after which a machine on its stepping cycle returns to
/// its starting positions: 26 × 25 × 26. The middle rotor's double step skips
/// one middle position per revolution of the left rotor.
pub const CYCLE_LENGTH: usize = 26 * 25 * 26;

/// Rotor positions, in the order they read in the machine window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Positions {
    pub left: Position,
    pub middle: Position,
    pub right: Position,
}

impl Positions {
    #[must_use]
    pub const fn new(left: Position, middle: Position, right: Position) -> Self {
        Self {
            left,
            middle,
            right,
        }
    }

    /// Parse a three-letter window reading such as `"ADU"` (left to right).
    #[must_use]
    pub fn from_window(window: &str) -> Option<Self> {
        let mut letters = window.chars().map(|ch| Letter::from_char(ch).ok());
        match (letters.next(), letters.next(), letters.next(), letters.next()) {
            (Some(Some(left)), Some(Some(middle)), Some(Some(right)), None) => Some(Self::new(
                Position::from_letter(left),
                Position::from_letter(middle),
                Position::from_letter(right),
            )),
            _ => None,
        }
    }
}

impl fmt::Display for Positions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.left.letter(),
            self.middle.letter(),
            self.right.letter()
        )
    }
}

/// Notch letters of the two rotors whose notches matter for stepping.
///
/// The left rotor's notch has no effect on a three-rotor machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notches {
    pub right: Letter,
    pub middle: Letter,
}

/// Which rotors moved on a step. The right rotor always moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    pub middle_advanced: bool,
    pub left_advanced: bool,
}

impl StepReport {
    /// The left rotor only ever moves as part of a double step.
    #[must_use]
    pub const fn is_double_step(self) -> bool {
        self.left_advanced
    }
}

/// Compute the positions after one key press.
///
/// Ring settings never participate.
#[must_use]
pub fn step(positions: Positions, notches: Notches) -> (Positions, StepReport) {
    let right_at_notch = positions.right.letter() == notches.right;
    let middle_at_notch = positions.middle.letter() == notches.middle;

    let mut next = positions;
    if middle_at_notch {
        next.left = next.left.advance();
    }
    let middle_advanced = right_at_notch || middle_at_notch;
    if middle_advanced {
        next.middle = next.middle.advance();
    }
    next.right = next.right.advance();

    let report = StepReport {
        middle_advanced,
        left_advanced: middle_at_notch,
    };
    (next, report)
}
