//! The assembled machine and its enciphering pipeline.
//!
//! ```text
//! key -> step rotors -> plugboard -> R -> M -> L -> reflector
//!                                                      |
//! lamp <- plugboard <- R <- M <- L <-------------------+
//! ```

use enigma_types::{Letter, LetterError, parse_text, render_text};

use crate::catalog::{PLUGBOARD_UNCONNECTED, REFLECTOR_B, default_rotor};
use crate::display::Status;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::{RotorSet, Slot};
use crate::stepping::{Positions, StepReport};
use crate::trace::TraceRecord;

/// A complete machine configuration.
///
/// The machine exclusively owns its rotors, reflector and plugboard. Rotor
/// positions are the only state that changes, once per enciphered letter, so
/// independent messages need independent machines (`Machine` is `Clone`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    rotors: RotorSet,
    reflector: Reflector,
    plugboard: Plugboard,
}

impl Machine {
    #[must_use]
    pub fn new(rotors: RotorSet, reflector: Reflector, plugboard: Plugboard) -> Self {
        tracing::debug!(
            right = rotors[Slot::Right].name(),
            middle = rotors[Slot::Middle].name(),
            left = rotors[Slot::Left].name(),
            reflector = reflector.name(),
            plugs = plugboard.pairs().len(),
            positions = %rotors.positions(),
            "Assembled machine"
        );
        Self {
            rotors,
            reflector,
            plugboard,
        }
    }

    /// Rotor III right, II middle, I left, all at A with ring setting A,
    /// reflector B, no plugboard cables.
    #[must_use]
    pub fn demonstration() -> Self {
        Self::new(
            RotorSet::new(
                default_rotor(Slot::Right).instantiate(),
                default_rotor(Slot::Middle).instantiate(),
                default_rotor(Slot::Left).instantiate(),
            ),
            REFLECTOR_B.instantiate(),
            PLUGBOARD_UNCONNECTED.instantiate(),
        )
    }

    #[must_use]
    pub const fn rotors(&self) -> &RotorSet {
        &self.rotors
    }

    #[must_use]
    pub const fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    #[must_use]
    pub const fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    #[must_use]
    pub fn positions(&self) -> Positions {
        self.rotors.positions()
    }

    /// Rewind or preset the rotors, e.g. to decipher from the message key.
    pub fn set_positions(&mut self, positions: Positions) {
        self.rotors.set_positions(positions);
    }

    pub fn step(&mut self) -> StepReport {
        let report = self.rotors.step();
        tracing::trace!(
            positions = %self.rotors.positions(),
            middle = report.middle_advanced,
            double_step = report.is_double_step(),
            "Stepped rotors"
        );
        report
    }

    /// Rotors out, reflector, rotors back, at the current positions.
    ///
    /// Neither steps the rotors nor touches the plugboard, so calling it twice
    /// on the same state returns the original letter.
    #[must_use]
    pub fn encrypt_character(&self, letter: Letter) -> Letter {
        let outbound = self
            .rotors
            .iter()
            .fold(letter, |signal, rotor| rotor.forward(signal));
        let reflected = self.reflector.reflect(outbound);
        self.rotors
            .iter()
            .rev()
            .fold(reflected, |signal, rotor| rotor.backward(signal))
    }

    /// One key press: step, then plugboard, rotor pipeline, plugboard.
    pub fn encrypt_letter(&mut self, letter: Letter) -> Letter {
        self.step();
        let entered = self.plugboard.apply(letter);
        let output = self.plugboard.apply(self.encrypt_character(entered));
        tracing::trace!(input = %letter, output = %output, "Enciphered letter");
        output
    }

    /// Encipher a word, stepping before each letter.
    ///
    /// Deciphering needs the rotors back at the positions they had before the
    /// word; running the ciphertext through the machine as left by this call
    /// does not reproduce the plaintext.
    pub fn encrypt_word(&mut self, word: &[Letter]) -> Vec<Letter> {
        let mut output = Vec::with_capacity(word.len());
        for &letter in word {
            output.push(self.encrypt_letter(letter));
        }
        output
    }

    pub fn encrypt_str(&mut self, text: &str) -> Result<String, LetterError> {
        let word = parse_text(text)?;
        Ok(render_text(&self.encrypt_word(&word)))
    }

    /// Same key press as [`Machine::encrypt_letter`], recording every stage.
    pub fn trace_step(&mut self, letter: Letter) -> TraceRecord {
        self.step();
        let after_plugboard_in = self.plugboard.apply(letter);
        let after_right_forward = self.rotors[Slot::Right].forward(after_plugboard_in);
        let after_middle_forward = self.rotors[Slot::Middle].forward(after_right_forward);
        let after_left_forward = self.rotors[Slot::Left].forward(after_middle_forward);
        let after_reflector = self.reflector.reflect(after_left_forward);
        let after_left_backward = self.rotors[Slot::Left].backward(after_reflector);
        let after_middle_backward = self.rotors[Slot::Middle].backward(after_left_backward);
        let after_right_backward = self.rotors[Slot::Right].backward(after_middle_backward);
        let after_plugboard_out = self.plugboard.apply(after_right_backward);

        TraceRecord {
            input: letter,
            after_plugboard_in,
            after_right_forward,
            after_middle_forward,
            after_left_forward,
            after_reflector,
            after_left_backward,
            after_middle_backward,
            after_right_backward,
            after_plugboard_out,
            output: after_plugboard_out,
        }
    }

    #[must_use]
    pub fn status(&self) -> Status<'_> {
        Status::new(&self.rotors)
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::demonstration()
    }
}

#[cfg(test)]
mod tests {
    use enigma_types::{Position, RingSetting};

    use super::*;
    use crate::catalog::{
        PLUGBOARD_SWAP_QC, REFLECTOR_C, ROTOR_I, ROTOR_IV, ROTOR_V, RotorDefinition,
    };
    use crate::rotor::Rotor;

    fn with_rings(rings: i64) -> Machine {
        let ring = RingSetting::new(rings).unwrap();
        let rotor = |def: &RotorDefinition| def.instantiate().with_ring_setting(ring);
        Machine::new(
            RotorSet::new(
                rotor(default_rotor(Slot::Right)),
                rotor(default_rotor(Slot::Middle)),
                rotor(default_rotor(Slot::Left)),
            ),
            REFLECTOR_B.instantiate(),
            Plugboard::unconnected(),
        )
    }

    #[test]
    fn single_letter_golden_value() {
        let mut machine = Machine::demonstration();
        assert_eq!(machine.encrypt_str("A").unwrap(), "B");
        assert_eq!(machine.positions().to_string(), "AAB");
    }

    #[test]
    fn historical_test_vectors() {
        assert_eq!(Machine::demonstration().encrypt_str("AAAAA").unwrap(), "BDZGO");
        assert_eq!(with_rings(1).encrypt_str("AAAAA").unwrap(), "EWTYX");
        assert_eq!(
            Machine::demonstration().encrypt_str("HELLOWORLD").unwrap(),
            "ILBDAAMTAZ"
        );
    }

    #[test]
    fn plugboard_applies_on_both_sides() {
        let mut plain = Machine::demonstration();
        assert_eq!(plain.encrypt_str("CQCQ").unwrap(), "QNEI");

        let mut plugged = Machine::new(
            Machine::demonstration().rotors().clone(),
            REFLECTOR_B.instantiate(),
            PLUGBOARD_SWAP_QC.instantiate(),
        );
        assert_eq!(plugged.encrypt_str("CQCQ").unwrap(), "QRVB");
    }

    #[test]
    fn mixed_configuration_vector() {
        let right = ROTOR_V
            .instantiate()
            .with_position(Position::new(25).unwrap())
            .with_ring_setting(RingSetting::new(3).unwrap());
        let middle = ROTOR_IV
            .instantiate()
            .with_position(Position::new(4).unwrap())
            .with_ring_setting(RingSetting::new(2).unwrap());
        let left = ROTOR_I
            .instantiate()
            .with_position(Position::new(16).unwrap())
            .with_ring_setting(RingSetting::new(1).unwrap());
        let mut machine = Machine::new(
            RotorSet::new(right, middle, left),
            REFLECTOR_C.instantiate(),
            Plugboard::unconnected(),
        );
        assert_eq!(machine.encrypt_str("ENIGMA").unwrap(), "LKPUJT");
        assert_eq!(machine.positions().to_string(), "QFF");
    }

    #[test]
    fn empty_word_leaves_rotors_alone() {
        let mut machine = Machine::demonstration();
        assert!(machine.encrypt_word(&[]).is_empty());
        assert_eq!(machine.positions(), Positions::default());
    }

    #[test]
    fn decrypt_requires_rewinding() {
        let mut machine = Machine::demonstration();
        let start = machine.positions();
        let cipher = machine.encrypt_str("ATTACKATDAWN").unwrap();

        let mut unrewound = machine.clone();
        assert_ne!(unrewound.encrypt_str(&cipher).unwrap(), "ATTACKATDAWN");

        machine.set_positions(start);
        assert_eq!(machine.encrypt_str(&cipher).unwrap(), "ATTACKATDAWN");
    }

    #[test]
    fn encrypt_character_is_reciprocal_without_stepping() {
        let machine = Machine::demonstration();
        for c in Letter::ALL {
            let once = machine.encrypt_character(c);
            assert_ne!(once, c);
            assert_eq!(machine.encrypt_character(once), c);
        }
    }

    #[test]
    fn trace_matches_encrypt_letter() {
        let mut plugged = Machine::new(
            RotorSet::new(
                Rotor::new("right", *ROTOR_V.wiring(), ROTOR_V.notch()),
                ROTOR_IV.instantiate(),
                ROTOR_I.instantiate(),
            ),
            REFLECTOR_C.instantiate(),
            PLUGBOARD_SWAP_QC.instantiate(),
        );
        let mut traced = plugged.clone();
        for c in Letter::ALL {
            let expected = plugged.encrypt_letter(c);
            let record = traced.trace_step(c);
            assert_eq!(record.output, expected);
            assert_eq!(record.input, c);
        }
        assert_eq!(plugged.positions(), traced.positions());
    }

    #[test]
    fn encrypt_str_rejects_non_letters() {
        let mut machine = Machine::demonstration();
        assert!(machine.encrypt_str("HELLO WORLD").is_err());
        assert!(machine.encrypt_str("hello").is_err());
        assert_eq!(machine.positions(), Positions::default());
    }
}
