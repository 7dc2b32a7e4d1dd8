//! Human-readable status dump of the rotor stack.

use std::fmt;

use crate::rotor::RotorSet;

/// Borrowed view that renders each rotor's name, wiring, position, ring
/// setting and notch, right rotor first.
#[derive(Debug, Clone, Copy)]
pub struct Status<'a> {
    rotors: &'a RotorSet,
}

impl<'a> Status<'a> {
    #[must_use]
    pub const fn new(rotors: &'a RotorSet) -> Self {
        Self { rotors }
    }
}

impl fmt::Display for Status<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=====STATUS=====")?;
        for rotor in self.rotors.iter() {
            writeln!(f, "Name: {}:", rotor.name())?;
            writeln!(f, "Wiring: {}", rotor.wiring())?;
            writeln!(f, "Position: {}", rotor.position())?;
            writeln!(f, "Ring setting: {}", rotor.ring_setting())?;
            writeln!(f, "Notch: {}", rotor.notch())?;
            writeln!(f, "--------------------")?;
        }
        write!(f, "=======END=======")
    }
}
