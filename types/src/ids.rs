//! Identifiers for the catalog of historical machine parts.

use std::fmt;

use thiserror::Error;

const ROTOR_PARSE_VALUES: &[&str] = &["I", "II", "III", "IV", "V", "1", "2", "3", "4", "5"];
const REFLECTOR_PARSE_VALUES: &[&str] = &["B", "C"];
const PLUGBOARD_PARSE_VALUES: &[&str] = &["none", "qc"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumKind {
    Rotor,
    Reflector,
    PlugboardPreset,
}

impl EnumKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EnumKind::Rotor => "rotor",
            EnumKind::Reflector => "reflector",
            EnumKind::PlugboardPreset => "plugboard preset",
        }
    }
}

impl fmt::Display for EnumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} value '{raw}'; expected one of: {expected:?}")]
pub struct EnumParseError {
    kind: EnumKind,
    raw: String,
    expected: &'static [&'static str],
}

impl EnumParseError {
    #[must_use]
    pub fn new(kind: EnumKind, raw: impl Into<String>, expected: &'static [&'static str]) -> Self {
        Self {
            kind,
            raw: raw.into(),
            expected,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> EnumKind {
        self.kind
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub const fn expected(&self) -> &'static [&'static str] {
        self.expected
    }
}

/// Strip an optional leading word such as "rotor" or "reflector".
fn strip_word<'a>(raw: &'a str, word: &str) -> &'a str {
    let trimmed = raw.trim();
    match trimmed.get(..word.len()) {
        Some(head) if head.eq_ignore_ascii_case(word) => trimmed[word.len()..].trim_start(),
        _ => trimmed,
    }
}

/// The five Wehrmacht rotors available to the M3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RotorId {
    I,
    II,
    III,
    IV,
    V,
}

impl RotorId {
    #[must_use]
    pub const fn all() -> &'static [RotorId] {
        &[RotorId::I, RotorId::II, RotorId::III, RotorId::IV, RotorId::V]
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RotorId::I => "I",
            RotorId::II => "II",
            RotorId::III => "III",
            RotorId::IV => "IV",
            RotorId::V => "V",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            RotorId::I => "Rotor I",
            RotorId::II => "Rotor II",
            RotorId::III => "Rotor III",
            RotorId::IV => "Rotor IV",
            RotorId::V => "Rotor V",
        }
    }

    /// Accepts roman numerals, their 1-based menu numbers, and an optional
    /// "rotor" prefix, case-insensitively.
    pub fn parse(s: &str) -> Result<Self, EnumParseError> {
        let value = strip_word(s, "rotor");
        match value.to_ascii_uppercase().as_str() {
            "I" | "1" => Ok(RotorId::I),
            "II" | "2" => Ok(RotorId::II),
            "III" | "3" => Ok(RotorId::III),
            "IV" | "4" => Ok(RotorId::IV),
            "V" | "5" => Ok(RotorId::V),
            _ => Err(EnumParseError::new(
                EnumKind::Rotor,
                s.trim(),
                ROTOR_PARSE_VALUES,
            )),
        }
    }
}

impl fmt::Display for RotorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for RotorId {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReflectorId {
    #[default]
    B,
    C,
}

impl ReflectorId {
    #[must_use]
    pub const fn all() -> &'static [ReflectorId] {
        &[ReflectorId::B, ReflectorId::C]
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ReflectorId::B => "B",
            ReflectorId::C => "C",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            ReflectorId::B => "Reflector B",
            ReflectorId::C => "Reflector C",
        }
    }

    pub fn parse(s: &str) -> Result<Self, EnumParseError> {
        let value = strip_word(s, "reflector");
        match value.to_ascii_uppercase().as_str() {
            "B" | "1" => Ok(ReflectorId::B),
            "C" | "2" => Ok(ReflectorId::C),
            _ => Err(EnumParseError::new(
                EnumKind::Reflector,
                s.trim(),
                REFLECTOR_PARSE_VALUES,
            )),
        }
    }
}

impl fmt::Display for ReflectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for ReflectorId {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Named plugboard cablings shipped with the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlugboardPreset {
    #[default]
    Unconnected,
    /// Q swapped with C.
    SwapQc,
}

impl PlugboardPreset {
    #[must_use]
    pub const fn all() -> &'static [PlugboardPreset] {
        &[PlugboardPreset::Unconnected, PlugboardPreset::SwapQc]
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PlugboardPreset::Unconnected => "none",
            PlugboardPreset::SwapQc => "qc",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            PlugboardPreset::Unconnected => "no connections",
            PlugboardPreset::SwapQc => "Q swapped with C",
        }
    }

    pub fn parse(s: &str) -> Result<Self, EnumParseError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "1" => Ok(PlugboardPreset::Unconnected),
            "qc" | "2" => Ok(PlugboardPreset::SwapQc),
            _ => Err(EnumParseError::new(
                EnumKind::PlugboardPreset,
                s.trim(),
                PLUGBOARD_PARSE_VALUES,
            )),
        }
    }
}

impl fmt::Display for PlugboardPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
