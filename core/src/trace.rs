//! Stage-by-stage record of a single key press, for visualization tooling.

use std::fmt;

use enigma_types::Letter;
use serde::{Deserialize, Serialize};

use crate::machine::Machine;

/// Every intermediate letter of one key press, in signal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRecord {
    pub input: Letter,
    pub after_plugboard_in: Letter,
    pub after_right_forward: Letter,
    pub after_middle_forward: Letter,
    pub after_left_forward: Letter,
    pub after_reflector: Letter,
    pub after_left_backward: Letter,
    pub after_middle_backward: Letter,
    pub after_right_backward: Letter,
    pub after_plugboard_out: Letter,
    pub output: Letter,
}

impl TraceRecord {
    /// Labelled stages in signal order.
    #[must_use]
    pub fn stages(&self) -> [(&'static str, Letter); 11] {
        [
            ("Input char", self.input),
            ("After plugboard 1", self.after_plugboard_in),
            ("After R rotor", self.after_right_forward),
            ("After M rotor", self.after_middle_forward),
            ("After L rotor", self.after_left_forward),
            ("After reflector", self.after_reflector),
            ("After L rotor back", self.after_left_backward),
            ("After M rotor back", self.after_middle_backward),
            ("After R rotor back", self.after_right_backward),
            ("After plugboard 2", self.after_plugboard_out),
            ("Output char", self.output),
        ]
    }
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (label, letter)) in self.stages().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:<22}{letter}", format!("{label}:"))?;
        }
        Ok(())
    }
}

/// Trace one key press on a freshly assembled [`Machine::demonstration`].
#[must_use]
pub fn trace_encrypt(letter: Letter) -> TraceRecord {
    Machine::demonstration().trace_step(letter)
}
