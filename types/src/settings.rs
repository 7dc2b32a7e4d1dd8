//! Rotor offsets: the mutable position and the fixed ring setting.
//!
//! Both are values in 0-25 that the operator reads off the rotor as a letter.
//! Existence of a value is the proof of its range.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::letter::{ALPHABET_SIZE, Letter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Position,
    RingSetting,
}

impl SettingKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SettingKind::Position => "position",
            SettingKind::RingSetting => "ring setting",
        }
    }
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} {value} is outside 0-25")]
pub struct SettingError {
    kind: SettingKind,
    value: i64,
}

impl SettingError {
    #[must_use]
    pub const fn kind(&self) -> SettingKind {
        self.kind
    }

    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }
}

fn checked(kind: SettingKind, value: i64) -> Result<Letter, SettingError> {
    u32::try_from(value)
        .ok()
        .and_then(|index| Letter::from_index(index).ok())
        .ok_or(SettingError { kind, value })
}

/// Rotational offset of a rotor as shown in the machine window.
///
/// This is the only part of a rotor that changes while enciphering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Position(u8);

impl Position {
    pub const ZERO: Position = Position(0);

    pub fn new(value: i64) -> Result<Self, SettingError> {
        checked(SettingKind::Position, value).map(Self::from_letter)
    }

    #[must_use]
    pub const fn from_letter(letter: Letter) -> Self {
        Self(letter.index())
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn letter(self) -> Letter {
        Letter::ALL[self.0 as usize]
    }

    /// One click forward, wrapping from 25 back to 0.
    #[must_use]
    pub const fn advance(self) -> Self {
        Self((self.0 + 1) % ALPHABET_SIZE as u8)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.letter())
    }
}

impl TryFrom<i64> for Position {
    type Error = SettingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Position> for i64 {
    fn from(value: Position) -> Self {
        i64::from(value.0)
    }
}

/// Offset of the wiring core relative to the lettered ring.
///
/// Fixed for the lifetime of a machine; never consulted by the stepping
/// mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct RingSetting(u8);

impl RingSetting {
    pub const ZERO: RingSetting = RingSetting(0);

    pub fn new(value: i64) -> Result<Self, SettingError> {
        checked(SettingKind::RingSetting, value).map(Self::from_letter)
    }

    #[must_use]
    pub const fn from_letter(letter: Letter) -> Self {
        Self(letter.index())
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn letter(self) -> Letter {
        Letter::ALL[self.0 as usize]
    }
}

impl fmt::Display for RingSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.letter())
    }
}

impl TryFrom<i64> for RingSetting {
    type Error = SettingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RingSetting> for i64 {
    fn from(value: RingSetting) -> Self {
        i64::from(value.0)
    }
}
