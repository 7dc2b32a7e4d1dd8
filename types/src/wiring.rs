//! Wiring tables: permutations of the alphabet.
//!
//! Two flavors exist:
//!
//! - [`Wiring`] is *directional* (rotor cores). The forward table is what the
//!   signal sees entering from the right; the inverse table is precomputed at
//!   construction so the return path is a lookup instead of a scan.
//! - [`Involution`] is *self-inverse* (reflectors, plugboards). Applying it twice
//!   yields the original letter.
//!
//! Historical tables are built with `from_static`, which validates in a `const`
//! context so a malformed table fails the build rather than a run.

use std::fmt;

use thiserror::Error;

use crate::letter::{ALPHABET_SIZE, Letter};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WiringError {
    #[error("wiring must have exactly 26 letters, got {0}")]
    Length(usize),
    #[error("wiring contains '{0}', which is not a letter A-Z")]
    InvalidLetter(char),
    #[error("wiring uses {0} more than once")]
    DuplicateLetter(Letter),
    #[error("wiring maps {from} to {to} but {to} does not map back to {from}")]
    NotInvolution { from: Letter, to: Letter },
    #[error("reflector wiring maps {0} to itself")]
    FixedPoint(Letter),
    #[error("plug pair connects {0} to itself")]
    SelfPair(Letter),
    #[error("{0} is used by more than one plug pair")]
    LetterReused(Letter),
    #[error("plug pair '{0}' must be exactly two letters")]
    MalformedPair(String),
}

/// A directional permutation of the alphabet.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wiring {
    forward: [Letter; ALPHABET_SIZE],
    inverse: [Letter; ALPHABET_SIZE],
}

impl Wiring {
    /// Build from a string literal, validated at compile time when used in a
    /// `const` item.
    #[must_use]
    pub const fn from_static(spec: &'static str) -> Self {
        let bytes = spec.as_bytes();
        assert!(
            bytes.len() == ALPHABET_SIZE,
            "wiring must have exactly 26 letters"
        );

        let mut forward = [Letter::A; ALPHABET_SIZE];
        let mut inverse = [Letter::A; ALPHABET_SIZE];
        let mut seen = [false; ALPHABET_SIZE];
        let mut i = 0;
        while i < ALPHABET_SIZE {
            let letter = match Letter::from_ascii(bytes[i]) {
                Some(letter) => letter,
                None => panic!("wiring must contain only letters A-Z"),
            };
            assert!(!seen[letter.as_usize()], "wiring must not repeat a letter");
            seen[letter.as_usize()] = true;
            forward[i] = letter;
            inverse[letter.as_usize()] = Letter::ALL[i];
            i += 1;
        }

        Self { forward, inverse }
    }

    pub fn parse(spec: &str) -> Result<Self, WiringError> {
        let letters = spec
            .chars()
            .map(|ch| Letter::from_char(ch).map_err(|_| WiringError::InvalidLetter(ch)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_letters(&letters)
    }

    pub fn from_letters(letters: &[Letter]) -> Result<Self, WiringError> {
        if letters.len() != ALPHABET_SIZE {
            return Err(WiringError::Length(letters.len()));
        }

        let mut forward = [Letter::A; ALPHABET_SIZE];
        let mut inverse: [Option<Letter>; ALPHABET_SIZE] = [None; ALPHABET_SIZE];
        for (source, &target) in Letter::ALL.iter().zip(letters) {
            let slot = &mut inverse[target.as_usize()];
            if slot.is_some() {
                return Err(WiringError::DuplicateLetter(target));
            }
            *slot = Some(*source);
            forward[source.as_usize()] = target;
        }

        // 26 distinct targets out of 26 letters: every slot is filled.
        let inverse = inverse.map(|slot| slot.unwrap_or(Letter::A));
        Ok(Self { forward, inverse })
    }

    #[inline]
    #[must_use]
    pub const fn forward(&self, letter: Letter) -> Letter {
        self.forward[letter.as_usize()]
    }

    /// The letter whose forward image is `letter`.
    #[inline]
    #[must_use]
    pub const fn inverse(&self, letter: Letter) -> Letter {
        self.inverse[letter.as_usize()]
    }

    #[must_use]
    pub const fn letters(&self) -> &[Letter; ALPHABET_SIZE] {
        &self.forward
    }
}

impl fmt::Display for Wiring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.forward
            .iter()
            .try_for_each(|letter| write!(f, "{letter}"))
    }
}

impl fmt::Debug for Wiring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wiring({self})")
    }
}

/// A self-inverse permutation of the alphabet.
///
/// # Invariant
///
/// `apply(apply(c)) == c` for every letter. Letters that map to themselves
/// are allowed here (unplugged plugboard sockets); reflectors reject them via
/// [`Involution::require_no_fixed_points`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Involution {
    table: [Letter; ALPHABET_SIZE],
}

impl Involution {
    pub const IDENTITY: Involution = Involution { table: Letter::ALL };

    #[must_use]
    pub const fn from_static(spec: &'static str) -> Self {
        let wiring = Wiring::from_static(spec);
        let mut i = 0;
        while i < ALPHABET_SIZE {
            let partner = wiring.forward[i];
            assert!(
                wiring.forward[partner.as_usize()].as_usize() == i,
                "wiring must be self-inverse"
            );
            i += 1;
        }
        Self {
            table: wiring.forward,
        }
    }

    pub fn parse(spec: &str) -> Result<Self, WiringError> {
        let wiring = Wiring::parse(spec)?;
        for from in Letter::ALL {
            let to = wiring.forward(from);
            if wiring.forward(to) != from {
                return Err(WiringError::NotInvolution { from, to });
            }
        }
        Ok(Self {
            table: wiring.forward,
        })
    }

    /// Build from explicit swaps; every letter not named maps to itself.
    pub fn from_pairs(pairs: &[(Letter, Letter)]) -> Result<Self, WiringError> {
        let mut table = Letter::ALL;
        for &(a, b) in pairs {
            if a == b {
                return Err(WiringError::SelfPair(a));
            }
            for letter in [a, b] {
                if table[letter.as_usize()] != letter {
                    return Err(WiringError::LetterReused(letter));
                }
            }
            table[a.as_usize()] = b;
            table[b.as_usize()] = a;
        }
        Ok(Self { table })
    }

    /// Parse whitespace-separated two-letter pairs, e.g. `"AQ CD"`.
    pub fn parse_pairs(spec: &str) -> Result<Self, WiringError> {
        let pairs = spec
            .split_whitespace()
            .map(parse_pair)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_pairs(&pairs)
    }

    #[inline]
    #[must_use]
    pub const fn apply(&self, letter: Letter) -> Letter {
        self.table[letter.as_usize()]
    }

    pub fn fixed_points(&self) -> impl Iterator<Item = Letter> + '_ {
        Letter::ALL
            .into_iter()
            .filter(|&letter| self.apply(letter) == letter)
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.table == Letter::ALL
    }

    pub fn require_no_fixed_points(self) -> Result<Self, WiringError> {
        match self.fixed_points().next() {
            Some(letter) => Err(WiringError::FixedPoint(letter)),
            None => Ok(self),
        }
    }

    /// Each swapped pair once, lower letter first, in alphabet order.
    #[must_use]
    pub fn pairs(&self) -> Vec<(Letter, Letter)> {
        Letter::ALL
            .into_iter()
            .map(|letter| (letter, self.apply(letter)))
            .filter(|(a, b)| a < b)
            .collect()
    }

    #[must_use]
    pub const fn letters(&self) -> &[Letter; ALPHABET_SIZE] {
        &self.table
    }
}

fn parse_pair(raw: &str) -> Result<(Letter, Letter), WiringError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(a), Some(b), None) => {
            let a = Letter::from_char(a).map_err(|_| WiringError::InvalidLetter(a))?;
            let b = Letter::from_char(b).map_err(|_| WiringError::InvalidLetter(b))?;
            Ok((a, b))
        }
        _ => Err(WiringError::MalformedPair(raw.to_string())),
    }
}

impl Default for Involution {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Involution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.table
            .iter()
            .try_for_each(|letter| write!(f, "{letter}"))
    }
}

impl fmt::Debug for Involution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Involution({self})")
    }
}
