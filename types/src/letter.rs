//! The machine alphabet.
//!
//! A [`Letter`] is one of the 26 uppercase Latin letters, stored as its index.
//! All rotor arithmetic happens on these indices modulo 26.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of symbols in the machine alphabet.
pub const ALPHABET_SIZE: usize = 26;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LetterError {
    #[error("'{0}' is not an uppercase letter A-Z")]
    InvalidChar(char),
    #[error("letter index {0} is outside 0-25")]
    IndexOutOfRange(u32),
    #[error("invalid character '{ch}' at offset {offset}; only letters A-Z are accepted")]
    InvalidText { ch: char, offset: usize },
}

/// A single symbol of the alphabet, `A` = 0 through `Z` = 25.
///
/// # Invariant
///
/// The wrapped index is always in `0..26`. Every constructor checks it, so
/// the substitution functions that consume letters are total.
///
/// # Serde
///
/// Serializes as a one-character string (`"Q"`).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(u8);

impl Letter {
    pub const A: Letter = Letter(0);

    /// The alphabet in order.
    pub const ALL: [Letter; ALPHABET_SIZE] = {
        let mut all = [Letter(0); ALPHABET_SIZE];
        let mut i = 0;
        while i < ALPHABET_SIZE {
            all[i] = Letter(i as u8);
            i += 1;
        }
        all
    };

    pub const fn from_index(index: u32) -> Result<Self, LetterError> {
        if index < ALPHABET_SIZE as u32 {
            Ok(Self(index as u8))
        } else {
            Err(LetterError::IndexOutOfRange(index))
        }
    }

    /// Convert an ASCII byte. Only `b'A'..=b'Z'` is accepted.
    #[must_use]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        if byte.is_ascii_uppercase() {
            Some(Self(byte - b'A'))
        } else {
            None
        }
    }

    pub fn from_char(ch: char) -> Result<Self, LetterError> {
        if ch.is_ascii_uppercase() {
            Ok(Self(ch as u8 - b'A'))
        } else {
            Err(LetterError::InvalidChar(ch))
        }
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Move `offset` places around the alphabet, wrapping in both directions.
    #[must_use]
    pub const fn shift(self, offset: i32) -> Self {
        Self((self.0 as i32 + offset).rem_euclid(ALPHABET_SIZE as i32) as u8)
    }

    /// The following letter, with `Z` wrapping to `A`.
    #[must_use]
    pub const fn next(self) -> Self {
        self.shift(1)
    }
}

impl fmt::Debug for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Letter({})", self.to_char())
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::from_char(value)
    }
}

impl From<Letter> for char {
    fn from(value: Letter) -> Self {
        value.to_char()
    }
}

/// Parse text into letters, rejecting anything outside `A-Z`.
///
/// The error carries the byte offset of the first offending character.
pub fn parse_text(text: &str) -> Result<Vec<Letter>, LetterError> {
    text.char_indices()
        .map(|(offset, ch)| {
            Letter::from_char(ch).map_err(|_| LetterError::InvalidText { ch, offset })
        })
        .collect()
}

#[must_use]
pub fn render_text(letters: &[Letter]) -> String {
    letters.iter().map(|letter| letter.to_char()).collect()
}
