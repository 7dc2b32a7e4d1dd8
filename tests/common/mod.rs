//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::io::Write;

use enigma_core::{Catalog, Machine, Plugboard, Positions, RotorSet};
use enigma_types::{Involution, Position, ReflectorId, RingSetting, RotorId};

/// Machine settings in the order an operator reads them off the key sheet.
pub struct KeySheet {
    /// Left, middle, right.
    pub rotors: [RotorId; 3],
    /// Left, middle, right as 0-25.
    pub rings: [i64; 3],
    pub reflector: ReflectorId,
    pub plugs: &'static str,
    /// Window letters, left to right.
    pub window: &'static str,
}

impl Default for KeySheet {
    fn default() -> Self {
        Self {
            rotors: [RotorId::I, RotorId::II, RotorId::III],
            rings: [0; 3],
            reflector: ReflectorId::B,
            plugs: "",
            window: "AAA",
        }
    }
}

impl KeySheet {
    pub fn build(&self) -> Machine {
        let catalog = Catalog::standard();
        let rotor = |index: usize| {
            catalog
                .rotor(self.rotors[index])
                .unwrap()
                .instantiate()
                .with_ring_setting(RingSetting::new(self.rings[index]).unwrap())
        };
        let mut machine = Machine::new(
            RotorSet::new(rotor(2), rotor(1), rotor(0)),
            catalog.reflector(self.reflector).unwrap().instantiate(),
            Plugboard::new(Involution::parse_pairs(self.plugs).unwrap()),
        );
        machine.set_positions(window(self.window));
        machine
    }
}

pub fn window(letters: &str) -> Positions {
    Positions::from_window(letters).unwrap()
}

pub fn position(value: i64) -> Position {
    Position::new(value).unwrap()
}

/// Write `contents` to a temporary config file that lives as long as the handle.
pub fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}
