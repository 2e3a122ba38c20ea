//! Key: the rotor offset triple and its stepping transition.
//!
//! The key is the only mutable state of a machine. It advances once per
//! translated letter, odometer style:
//!
//! ```text
//! fast    (k0) ── always advances
//! middle  (k1) ── advances when pre-step k0 sits on the middle rotor's notch
//! slow    (k2) ── advances when the middle rotor advances AND pre-step k1
//!                 sits on the slow rotor's notch
//! ```

use std::fmt;

use crate::error::RotorCipherError;
use crate::utils::alphabet::{increment, ALPHABET_LEN};

/// Number of rotors in the machine.
pub const NUM_ROTORS: usize = 3;

/// Carries produced by one stepping transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carry {
    /// Middle rotor advanced.
    pub middle: bool,
    /// Slow rotor advanced.
    pub slow: bool,
}

/// Current offsets of the three rotors, ordered `[fast, middle, slow]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Key {
    positions: [usize; NUM_ROTORS],
}

impl Key {
    /// All rotors at `A`.
    pub const ZERO: Key = Key {
        positions: [0; NUM_ROTORS],
    };

    /// Creates a key from the fast, middle and slow rotor offsets.
    ///
    /// # Errors
    /// Returns [`RotorCipherError::KeyOutOfRange`] if any offset is 26 or larger.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotor_cipher::Key;
    ///
    /// let key = Key::new(1, 2, 3).unwrap();
    /// assert_eq!(key.positions(), [1, 2, 3]);
    /// assert!(Key::new(26, 0, 0).is_err());
    /// ```
    pub fn new(fast: usize, middle: usize, slow: usize) -> Result<Self, RotorCipherError> {
        Self::try_from([fast, middle, slow])
    }

    /// Returns the offsets as `[fast, middle, slow]`.
    pub fn positions(&self) -> [usize; NUM_ROTORS] {
        self.positions
    }

    /// Returns the offset of rotor `slot` (0 = fast).
    ///
    /// # Panics
    /// Panics if `slot >= 3`.
    pub fn position(&self, slot: usize) -> usize {
        self.positions[slot]
    }

    /// Advances the key by one letter.
    ///
    /// Notch checks use the pre-step offsets. The slow rotor is only
    /// considered in a tick where the middle rotor also advances.
    ///
    /// # Parameters
    /// - `middle_notch`: notch of the middle rotor, compared against k0.
    /// - `slow_notch`: notch of the slow rotor, compared against k1.
    pub fn step(&mut self, middle_notch: usize, slow_notch: usize) -> Carry {
        let mut carry = Carry::default();
        if self.positions[0] == middle_notch {
            if self.positions[1] == slow_notch {
                self.positions[2] = increment(self.positions[2]);
                carry.slow = true;
            }
            self.positions[1] = increment(self.positions[1]);
            carry.middle = true;
        }
        self.positions[0] = increment(self.positions[0]);
        carry
    }
}

impl TryFrom<[usize; NUM_ROTORS]> for Key {
    type Error = RotorCipherError;

    fn try_from(positions: [usize; NUM_ROTORS]) -> Result<Self, Self::Error> {
        for (position, &value) in positions.iter().enumerate() {
            if value >= ALPHABET_LEN {
                return Err(RotorCipherError::KeyOutOfRange {
                    position,
                    value: u32::try_from(value).unwrap_or(u32::MAX),
                });
            }
        }
        Ok(Key { positions })
    }
}

impl TryFrom<[u32; NUM_ROTORS]> for Key {
    type Error = RotorCipherError;

    fn try_from(positions: [u32; NUM_ROTORS]) -> Result<Self, Self::Error> {
        Self::try_from(positions.map(|p| p as usize))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [fast, middle, slow] = self.positions;
        write!(f, "[{}, {}, {}]", fast, middle, slow)
    }
}
