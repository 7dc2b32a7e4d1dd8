//! Rotor stepping observed through whole machines.

use enigma_core::stepping::{Notches, step};
use enigma_core::{CYCLE_LENGTH, Machine, StepReport};
use enigma_types::{Letter, RotorId};

use crate::common::{KeySheet, window};

fn stepped(machine: &mut Machine, times: usize) -> Vec<String> {
    (0..times)
        .map(|_| {
            machine.step();
            machine.positions().to_string()
        })
        .collect()
}

#[test]
fn double_step_sequence() {
    let mut machine = KeySheet {
        window: "ADU",
        ..KeySheet::default()
    }
    .build();
    assert_eq!(stepped(&mut machine, 3), ["ADV", "AEW", "BFX"]);
}

#[test]
fn step_reports_which_rotors_moved() {
    let mut machine = KeySheet {
        window: "ADU",
        ..KeySheet::default()
    }
    .build();
    assert_eq!(machine.step(), StepReport::default());
    let carry = machine.step();
    assert!(carry.middle_advanced && !carry.is_double_step());
    let double = machine.step();
    assert!(double.middle_advanced && double.is_double_step());
}

#[test]
fn notches_follow_the_installed_rotors() {
    // Rotor V (notch Z) on the right, rotor IV (notch J) in the middle.
    let mut machine = KeySheet {
        rotors: [RotorId::I, RotorId::IV, RotorId::V],
        window: "AJZ",
        ..KeySheet::default()
    }
    .build();
    assert_eq!(stepped(&mut machine, 1), ["BKA"]);
}

#[test]
fn ring_settings_do_not_move_the_notches() {
    let plain = KeySheet {
        window: "ADU",
        ..KeySheet::default()
    };
    let ringed = KeySheet {
        rings: [5, 17, 25],
        ..plain
    };
    assert_eq!(
        stepped(&mut plain.build(), 60),
        stepped(&mut ringed.build(), 60)
    );
}

#[test]
fn positions_advance_once_per_letter() {
    let mut machine = Machine::demonstration();
    machine.encrypt_str("ABCDEFGHIJKLMNOPQRSTUV").unwrap();
    // 22 keys: right A->W, carrying the middle once when it left V.
    assert_eq!(machine.positions(), window("ABW"));
}

#[test]
fn full_period_from_a_cycle_state() {
    let mut machine = KeySheet {
        window: "ADU",
        ..KeySheet::default()
    }
    .build();
    let start = machine.positions();
    stepped(&mut machine, CYCLE_LENGTH - 1);
    assert_ne!(machine.positions(), start);
    machine.step();
    assert_eq!(machine.positions(), start);
}

#[test]
fn middle_at_notch_is_left_after_one_key() {
    // A start with the middle rotor already at its notch is reached by no
    // other state, so the machine never returns to it.
    let notches = Notches {
        right: Letter::from_char('V').unwrap(),
        middle: Letter::from_char('E').unwrap(),
    };
    let (entry, report) = step(window("AEA"), notches);
    assert_eq!(entry, window("BFB"));
    assert!(report.is_double_step());

    let mut machine = KeySheet {
        window: "AEA",
        ..KeySheet::default()
    }
    .build();
    stepped(&mut machine, CYCLE_LENGTH);
    assert_eq!(machine.positions(), window("BFA"));
    stepped(&mut machine, 1);
    assert_eq!(machine.positions(), entry);
}
