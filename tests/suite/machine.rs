//! End-to-end enciphering through the public machine API.

use enigma_core::{CYCLE_LENGTH, Machine, Slot, trace_encrypt};
use enigma_types::{Letter, ReflectorId, RotorId, render_text};

use crate::common::{KeySheet, window};

#[test]
fn historical_vector() {
    let mut machine = KeySheet::default().build();
    assert_eq!(machine.encrypt_str("HELLOWORLD").unwrap(), "ILBDAAMTAZ");
}

#[test]
fn plugboard_changes_the_ciphertext() {
    let mut machine = KeySheet {
        plugs: "HE LO",
        ..KeySheet::default()
    }
    .build();
    assert_eq!(machine.encrypt_str("HELLOWORLD").unwrap(), "FPNMUAUTMZ");
}

#[test]
fn full_key_sheet() {
    let sheet = KeySheet {
        rotors: [RotorId::I, RotorId::IV, RotorId::V],
        rings: [1, 2, 3],
        reflector: ReflectorId::C,
        plugs: "AQ CD",
        window: "QEZ",
    };
    let mut machine = sheet.build();
    assert_eq!(machine.encrypt_str("ENIGMA").unwrap(), "LKPUJS");
    // Right leaves its notch at Z on the first key and carries the middle E->F.
    assert_eq!(machine.positions(), window("QFF"));

    let mut receiver = sheet.build();
    assert_eq!(receiver.encrypt_str("LKPUJS").unwrap(), "ENIGMA");
}

#[test]
fn long_message_round_trip() {
    let sheet = KeySheet {
        rotors: [RotorId::V, RotorId::IV, RotorId::II],
        rings: [7, 6, 5],
        plugs: "QC",
        window: "DCB",
        ..KeySheet::default()
    };
    let plaintext = "WEATHERREPORT".repeat(40);

    let mut sender = sheet.build();
    let ciphertext = sender.encrypt_str(&plaintext).unwrap();
    assert!(ciphertext.starts_with("RMPHJGJQPVBWD"));
    assert_eq!(ciphertext.len(), plaintext.len());

    let mut receiver = sheet.build();
    assert_eq!(receiver.encrypt_str(&ciphertext).unwrap(), plaintext);
    assert_eq!(sender.positions(), receiver.positions());
}

#[test]
fn empty_word_leaves_machine_untouched() {
    let mut machine = Machine::demonstration();
    assert!(machine.encrypt_word(&[]).is_empty());
    assert_eq!(machine, Machine::demonstration());
}

#[test]
fn no_letter_enciphers_to_itself_over_a_full_cycle() {
    let mut machine = Machine::demonstration();
    let start = machine.positions();
    let word: Vec<Letter> = Letter::ALL
        .into_iter()
        .cycle()
        .take(CYCLE_LENGTH)
        .collect();
    let cipher = machine.encrypt_word(&word);
    assert_eq!(cipher.len(), CYCLE_LENGTH);
    assert!(word.iter().zip(&cipher).all(|(p, c)| p != c));
    assert_eq!(machine.positions(), start);
}

#[test]
fn trace_agrees_with_demonstration_keypress() {
    let record = trace_encrypt(Letter::A);
    assert_eq!(record.input, Letter::A);

    let mut machine = Machine::demonstration();
    let output = machine.encrypt_word(&[Letter::A]);
    assert_eq!(render_text(&output), record.output.to_string());
    assert_eq!(machine.rotors()[Slot::Right].position().value(), 1);
}
