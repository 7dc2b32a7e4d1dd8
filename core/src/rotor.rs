//! Wired rotors and the three-slot rotor stack.

use std::borrow::Cow;
use std::fmt;
use std::ops::Index;

use enigma_types::{Letter, Position, RingSetting, Wiring};

use crate::stepping::{self, Notches, Positions, StepReport};

/// A rotating wired disk.
///
/// The wiring, notch and ring setting are fixed once the rotor is placed in a
/// machine; only the position moves, one click per enciphered letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    name: Cow<'static, str>,
    wiring: Wiring,
    notch: Letter,
    position: Position,
    ring_setting: RingSetting,
}

impl Rotor {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, wiring: Wiring, notch: Letter) -> Self {
        Self {
            name: name.into(),
            wiring,
            notch,
            position: Position::ZERO,
            ring_setting: RingSetting::ZERO,
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn with_ring_setting(mut self, ring_setting: RingSetting) -> Self {
        self.ring_setting = ring_setting;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    #[must_use]
    pub const fn notch(&self) -> Letter {
        self.notch
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub const fn ring_setting(&self) -> RingSetting {
        self.ring_setting
    }

    #[must_use]
    pub fn is_at_notch(&self) -> bool {
        self.position.letter() == self.notch
    }

    /// Net rotation of the wiring core: position minus ring setting.
    fn offset(&self) -> i32 {
        i32::from(self.position.value()) - i32::from(self.ring_setting.value())
    }

    /// Signal entering from the right-hand contacts, leaving on the left.
    #[must_use]
    pub fn forward(&self, letter: Letter) -> Letter {
        let offset = self.offset();
        self.wiring.forward(letter.shift(offset)).shift(-offset)
    }

    /// Signal returning from the reflector: the inverse of [`Rotor::forward`]
    /// for the same rotor state.
    #[must_use]
    pub fn backward(&self, letter: Letter) -> Letter {
        let offset = self.offset();
        self.wiring.inverse(letter.shift(offset)).shift(-offset)
    }
}

/// Physical slot of a rotor in the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Fast rotor, nearest the keyboard; steps on every key press.
    Right,
    Middle,
    /// Slow rotor, next to the reflector.
    Left,
}

impl Slot {
    /// Slots in the order the signal visits them on the way in.
    pub const SIGNAL_ORDER: [Slot; 3] = [Slot::Right, Slot::Middle, Slot::Left];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Slot::Right => "right",
            Slot::Middle => "middle",
            Slot::Left => "left",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three rotors of a machine, each owned by exactly one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorSet {
    right: Rotor,
    middle: Rotor,
    left: Rotor,
}

impl RotorSet {
    #[must_use]
    pub fn new(right: Rotor, middle: Rotor, left: Rotor) -> Self {
        Self {
            right,
            middle,
            left,
        }
    }

    /// Rotors in signal order: right, middle, left.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Rotor> {
        [&self.right, &self.middle, &self.left].into_iter()
    }

    #[must_use]
    pub fn positions(&self) -> Positions {
        Positions {
            left: self.left.position,
            middle: self.middle.position,
            right: self.right.position,
        }
    }

    pub fn set_positions(&mut self, positions: Positions) {
        self.left.position = positions.left;
        self.middle.position = positions.middle;
        self.right.position = positions.right;
    }

    /// Advance the rotors for one key press.
    pub fn step(&mut self) -> StepReport {
        let notches = Notches {
            right: self.right.notch,
            middle: self.middle.notch,
        };
        let (next, report) = stepping::step(self.positions(), notches);
        self.set_positions(next);
        report
    }
}

impl Index<Slot> for RotorSet {
    type Output = Rotor;

    fn index(&self, slot: Slot) -> &Self::Output {
        match slot {
            Slot::Right => &self.right,
            Slot::Middle => &self.middle,
            Slot::Left => &self.left,
        }
    }
}
