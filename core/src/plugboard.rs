use enigma_types::{Involution, Letter, WiringError};

/// Letter-pair swaps applied before and after the rotor stack.
///
/// Sockets without a cable pass the letter through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Plugboard {
    wiring: Involution,
}

impl Plugboard {
    #[must_use]
    pub const fn new(wiring: Involution) -> Self {
        Self { wiring }
    }

    #[must_use]
    pub const fn unconnected() -> Self {
        Self::new(Involution::IDENTITY)
    }

    pub fn from_pairs(pairs: &[(Letter, Letter)]) -> Result<Self, WiringError> {
        Involution::from_pairs(pairs).map(Self::new)
    }

    #[inline]
    #[must_use]
    pub const fn apply(&self, letter: Letter) -> Letter {
        self.wiring.apply(letter)
    }

    #[must_use]
    pub fn pairs(&self) -> Vec<(Letter, Letter)> {
        self.wiring.pairs()
    }

    #[must_use]
    pub const fn wiring(&self) -> &Involution {
        &self.wiring
    }
}
