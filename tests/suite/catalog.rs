use enigma_core::catalog::default_rotor;
use enigma_core::{Catalog, Slot};
use enigma_types::{Letter, RotorId};

#[test]
fn reflectors_pair_every_letter() {
    for reflector in Catalog::standard().reflectors() {
        let wiring = reflector.wiring();
        assert_eq!(wiring.pairs().len(), 13, "{}", reflector.id());
        for c in Letter::ALL {
            assert_ne!(wiring.apply(c), c);
            assert_eq!(wiring.apply(wiring.apply(c)), c);
        }
    }
}

#[test]
fn rotor_wirings_are_permutations() {
    for rotor in Catalog::standard().rotors() {
        let mut seen = [false; 26];
        for &letter in rotor.wiring().letters() {
            assert!(!seen[letter.as_usize()], "{}", rotor.id());
            seen[letter.as_usize()] = true;
        }
    }
}

#[test]
fn slot_defaults() {
    let ids: Vec<RotorId> = Slot::SIGNAL_ORDER
        .iter()
        .map(|&slot| default_rotor(slot).id())
        .collect();
    assert_eq!(ids, [RotorId::III, RotorId::II, RotorId::I]);
}
