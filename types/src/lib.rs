//! Core domain types for the Enigma machine.
//!
//! This crate contains pure domain types with no IO, no state, and minimal
//! dependencies. Every value here is valid by construction: once a caller holds
//! a [`Letter`], a [`Position`] or a [`Wiring`], the machine can use it without
//! further checks.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are confined to const table validation

mod ids;
mod letter;
mod settings;
mod wiring;

pub use ids::{EnumKind, EnumParseError, PlugboardPreset, ReflectorId, RotorId};
pub use letter::{ALPHABET_SIZE, Letter, LetterError, parse_text, render_text};
pub use settings::{Position, RingSetting, SettingError, SettingKind};
pub use wiring::{Involution, Wiring, WiringError};
