//! Config files through to enciphered text.

use enigma_config::{ConfigError, EnigmaConfig};
use enigma_core::{Machine, Slot};
use enigma_types::{ReflectorId, RotorId};

use crate::common::{KeySheet, config_file};

#[test]
fn config_file_builds_the_key_sheet_machine() {
    let file = config_file(
        r#"
        [machine]
        reflector = "C"

        [machine.plugboard]
        pairs = ["AQ", "CD"]

        [machine.right]
        rotor = "V"
        position = "Z"
        ring_setting = 3

        [machine.middle]
        rotor = "IV"
        position = 4
        ring_setting = "C"

        [machine.left]
        rotor = "I"
        position = "q"
        ring_setting = 1
        "#,
    );
    let machine = EnigmaConfig::load_from(file.path())
        .unwrap()
        .build_machine();

    let expected = KeySheet {
        rotors: [RotorId::I, RotorId::IV, RotorId::V],
        rings: [1, 2, 3],
        reflector: ReflectorId::C,
        plugs: "AQ CD",
        window: "QEZ",
    }
    .build();
    assert_eq!(machine, expected);

    let mut machine = machine;
    assert_eq!(machine.encrypt_str("ENIGMA").unwrap(), "LKPUJS");
}

#[test]
fn empty_file_is_the_demonstration_machine() {
    let file = config_file("");
    let machine = EnigmaConfig::load_from(file.path())
        .unwrap()
        .build_machine();
    assert_eq!(machine, Machine::demonstration());
}

#[test]
fn invalid_entries_fall_back_to_defaults() {
    let file = config_file(
        r#"
        [machine]
        reflector = "Z"

        [machine.plugboard]
        pairs = ["AA"]

        [machine.right]
        rotor = "IX"
        position = 99

        [machine.left]
        ring_setting = "??"
        "#,
    );
    let machine = EnigmaConfig::load_from(file.path())
        .unwrap()
        .build_machine();
    assert_eq!(machine, Machine::demonstration());
}

#[test]
fn preset_plugboard_from_config() {
    let file = config_file(
        r#"
        [machine.plugboard]
        preset = "2"
        "#,
    );
    let machine = EnigmaConfig::load_from(file.path())
        .unwrap()
        .build_machine();
    let expected = KeySheet {
        plugs: "QC",
        ..KeySheet::default()
    }
    .build();
    assert_eq!(machine, expected);
    assert_eq!(machine.rotors()[Slot::Left].name(), "Rotor I");
}

#[test]
fn malformed_toml_is_an_error() {
    let file = config_file("[machine.right\nrotor = \"I\"");
    let err = EnigmaConfig::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn wrong_value_type_is_an_error() {
    let file = config_file("[machine.right]\nposition = true\n");
    let err = EnigmaConfig::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), file.path());
}
