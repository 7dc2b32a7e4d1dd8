use std::borrow::Cow;

use enigma_types::{Involution, Letter};

/// The fixed turnaround wheel at the left end of the rotor stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    name: Cow<'static, str>,
    wiring: Involution,
}

impl Reflector {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, wiring: Involution) -> Self {
        Self {
            name: name.into(),
            wiring,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn wiring(&self) -> &Involution {
        &self.wiring
    }

    #[inline]
    #[must_use]
    pub const fn reflect(&self, letter: Letter) -> Letter {
        self.wiring.apply(letter)
    }
}
