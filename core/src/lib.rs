//! Enigma M3 machine core.
//!
//! This crate models the signal path of the three-rotor machine: rotors with
//! ring settings and notches, the stepping mechanism with its double step, the
//! reflector and the plugboard.
//!
//! # Architecture
//!
//! ```text
//! Catalog (const part definitions)
//!    |
//!    v  instantiate
//! Rotor x3 -> RotorSet ----+
//! Reflector ---------------+--> Machine -> encrypt_word / trace_step
//! Plugboard ---------------+
//! ```
//!
//! Every operation is a total function over the validated domain types from
//! [`enigma_types`]. The only mutable state is the rotor positions a
//! [`Machine`] owns.

mod display;
mod machine;
mod plugboard;
mod reflector;
mod rotor;
pub mod catalog;
pub mod stepping;
pub mod trace;

pub use catalog::{Catalog, PlugboardDefinition, ReflectorDefinition, RotorDefinition};
pub use display::Status;
pub use machine::Machine;
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::{Rotor, RotorSet, Slot};
pub use stepping::{CYCLE_LENGTH, Positions, StepReport};
pub use trace::{TraceRecord, trace_encrypt};
