//! Registry of the historical machine parts.
//!
//! Every definition is a `const` validated at compile time. Machines are
//! assembled by instantiating definitions; the registry itself is never
//! mutated.
//!
//! Wirings: <https://www.codesandciphers.org.uk/enigma/rotorspec.htm> (rotors)
//! and <https://www.ciphermachinesandcryptology.com/en/enigmatech.htm>
//! (reflectors).

use enigma_types::{Involution, Letter, PlugboardPreset, ReflectorId, RotorId, Wiring};

use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::{Rotor, Slot};

const fn notch(byte: u8) -> Letter {
    match Letter::from_ascii(byte) {
        Some(letter) => letter,
        None => panic!("notch must be a letter A-Z"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorDefinition {
    id: RotorId,
    wiring: Wiring,
    notch: Letter,
}

impl RotorDefinition {
    const fn new(id: RotorId, wiring: &'static str, notch_letter: u8) -> Self {
        Self {
            id,
            wiring: Wiring::from_static(wiring),
            notch: notch(notch_letter),
        }
    }

    #[must_use]
    pub const fn id(&self) -> RotorId {
        self.id
    }

    #[must_use]
    pub const fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    #[must_use]
    pub const fn notch(&self) -> Letter {
        self.notch
    }

    /// A fresh rotor at position A with ring setting A.
    #[must_use]
    pub fn instantiate(&self) -> Rotor {
        Rotor::new(self.id.display_name(), self.wiring, self.notch)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectorDefinition {
    id: ReflectorId,
    wiring: Involution,
}

impl ReflectorDefinition {
    const fn new(id: ReflectorId, wiring: &'static str) -> Self {
        let wiring = Involution::from_static(wiring);
        let table = wiring.letters();
        let mut i = 0;
        while i < table.len() {
            assert!(table[i].as_usize() != i, "reflector must not map a letter to itself");
            i += 1;
        }
        Self { id, wiring }
    }

    #[must_use]
    pub const fn id(&self) -> ReflectorId {
        self.id
    }

    #[must_use]
    pub const fn wiring(&self) -> &Involution {
        &self.wiring
    }

    #[must_use]
    pub fn instantiate(&self) -> Reflector {
        Reflector::new(self.id.display_name(), self.wiring)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlugboardDefinition {
    preset: PlugboardPreset,
    wiring: Involution,
}

impl PlugboardDefinition {
    #[must_use]
    pub const fn preset(&self) -> PlugboardPreset {
        self.preset
    }

    #[must_use]
    pub const fn instantiate(&self) -> Plugboard {
        Plugboard::new(self.wiring)
    }
}

pub const ROTOR_I: RotorDefinition =
    RotorDefinition::new(RotorId::I, "EKMFLGDQVZNTOWYHXUSPAIBRCJ", b'Q');
pub const ROTOR_II: RotorDefinition =
    RotorDefinition::new(RotorId::II, "AJDKSIRUXBLHWTMCQGZNPYFVOE", b'E');
pub const ROTOR_III: RotorDefinition =
    RotorDefinition::new(RotorId::III, "BDFHJLCPRTXVZNYEIWGAKMUSQO", b'V');
pub const ROTOR_IV: RotorDefinition =
    RotorDefinition::new(RotorId::IV, "ESOVPZJAYQUIRHXLNFTGKDCMWB", b'J');
pub const ROTOR_V: RotorDefinition =
    RotorDefinition::new(RotorId::V, "VZBRGITYUPSDNHLXAWMJQOFECK", b'Z');

pub const REFLECTOR_B: ReflectorDefinition =
    ReflectorDefinition::new(ReflectorId::B, "YRUHQSLDPXNGOKMIEBFZCWVJAT");
pub const REFLECTOR_C: ReflectorDefinition =
    ReflectorDefinition::new(ReflectorId::C, "FVPJIAOYEDRZXWGCTKUQSBNMHL");

pub const PLUGBOARD_UNCONNECTED: PlugboardDefinition = PlugboardDefinition {
    preset: PlugboardPreset::Unconnected,
    wiring: Involution::IDENTITY,
};
pub const PLUGBOARD_SWAP_QC: PlugboardDefinition = PlugboardDefinition {
    preset: PlugboardPreset::SwapQc,
    wiring: Involution::from_static("ABQDEFGHIJKLMNOPCRSTUVWXYZ"),
};

/// Immutable lookup from identifiers to part definitions.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    rotors: &'static [RotorDefinition],
    reflectors: &'static [ReflectorDefinition],
    plugboards: &'static [PlugboardDefinition],
}

/// The parts issued with the Enigma M3.
pub static STANDARD: Catalog = Catalog {
    rotors: &[ROTOR_I, ROTOR_II, ROTOR_III, ROTOR_IV, ROTOR_V],
    reflectors: &[REFLECTOR_B, REFLECTOR_C],
    plugboards: &[PLUGBOARD_UNCONNECTED, PLUGBOARD_SWAP_QC],
};

impl Catalog {
    #[must_use]
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    #[must_use]
    pub const fn rotors(&self) -> &'static [RotorDefinition] {
        self.rotors
    }

    #[must_use]
    pub const fn reflectors(&self) -> &'static [ReflectorDefinition] {
        self.reflectors
    }

    #[must_use]
    pub const fn plugboards(&self) -> &'static [PlugboardDefinition] {
        self.plugboards
    }

    #[must_use]
    pub fn rotor(&self, id: RotorId) -> Option<&'static RotorDefinition> {
        self.rotors.iter().find(|def| def.id == id)
    }

    #[must_use]
    pub fn reflector(&self, id: ReflectorId) -> Option<&'static ReflectorDefinition> {
        self.reflectors.iter().find(|def| def.id == id)
    }

    #[must_use]
    pub fn plugboard(&self, preset: PlugboardPreset) -> Option<&'static PlugboardDefinition> {
        self.plugboards.iter().find(|def| def.preset == preset)
    }
}

/// Rotor placed in a slot when the operator makes no valid choice.
#[must_use]
pub const fn default_rotor(slot: Slot) -> &'static RotorDefinition {
    match slot {
        Slot::Right => &ROTOR_III,
        Slot::Middle => &ROTOR_II,
        Slot::Left => &ROTOR_I,
    }
}
