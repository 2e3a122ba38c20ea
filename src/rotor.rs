//! Rotor: substitution map plus a notch letter.
//!
//! The rotor itself is immutable. Its current rotation is the matching
//! component of the machine's [`Key`](crate::Key) and is passed in on
//! every lookup.

use std::fmt;

use crate::error::RotorCipherError;
use crate::substitution::SubstitutionMap;
use crate::utils::alphabet::{index_to_letter, letter_to_index, ALPHABET_LEN};

/// A rotating substitution stage.
///
/// When the preceding rotor's key position equals this rotor's notch,
/// the machine advances this rotor on the next step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    map: SubstitutionMap,
    notch: usize,
}

impl Rotor {
    /// Creates a rotor from a 26-letter wiring and a one-letter notch.
    ///
    /// # Errors
    /// - Any [`SubstitutionMap::from_permutation`] error for the wiring.
    /// - [`RotorCipherError::InvalidNotch`] if `notch` is not exactly one letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotor_cipher::Rotor;
    ///
    /// let rotor = Rotor::new("JGDQOXUSCAMIFRVTPNEWKBLZYH", "Q").unwrap();
    /// assert_eq!(rotor.notch_letter(), 'Q');
    /// ```
    pub fn new(wiring: &str, notch: &str) -> Result<Self, RotorCipherError> {
        let map = SubstitutionMap::from_permutation(wiring)?;
        let notch = parse_notch(notch)?;
        Ok(Rotor { map, notch })
    }

    /// Creates a rotor from an already validated map and a notch index.
    ///
    /// # Errors
    /// Returns [`RotorCipherError::InvalidNotch`] if `notch >= 26`.
    pub fn from_map(map: SubstitutionMap, notch: usize) -> Result<Self, RotorCipherError> {
        if notch >= ALPHABET_LEN {
            return Err(RotorCipherError::InvalidNotch {
                notch: notch.to_string(),
            });
        }
        Ok(Rotor { map, notch })
    }

    /// Forward lookup at rotation `offset`.
    pub fn forward(&self, value: usize, offset: usize) -> usize {
        self.map.forward(value, offset)
    }

    /// Backward lookup at rotation `offset`.
    pub fn backward(&self, value: usize, offset: usize) -> usize {
        self.map.backward(value, offset)
    }

    /// Returns the notch position as an alphabet index.
    pub fn notch(&self) -> usize {
        self.notch
    }

    /// Returns the notch position as a letter.
    pub fn notch_letter(&self) -> char {
        index_to_letter(self.notch)
    }

    /// Returns the underlying substitution map.
    pub fn map(&self) -> &SubstitutionMap {
        &self.map
    }
}

impl fmt::Display for Rotor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (notch {})", self.map, self.notch_letter())
    }
}

/// Parses a notch given as a single letter.
fn parse_notch(notch: &str) -> Result<usize, RotorCipherError> {
    let mut chars = notch.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => letter_to_index(c).ok_or_else(|| RotorCipherError::InvalidNotch {
            notch: notch.to_string(),
        }),
        _ => Err(RotorCipherError::InvalidNotch {
            notch: notch.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_rotor() {
        let rotor = Rotor::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ", "A").unwrap();
        assert_eq!(rotor.map(), &SubstitutionMap::identity());
        assert_eq!(rotor.notch(), 0);
        assert_eq!(rotor.notch_letter(), 'A');
    }

    #[test]
    fn test_lowercase_notch() {
        let rotor = Rotor::new("JGDQOXUSCAMIFRVTPNEWKBLZYH", "q").unwrap();
        assert_eq!(rotor.notch_letter(), 'Q');
    }

    #[test]
    fn test_invalid_notch() {
        for notch in ["", "AB", "1", " "] {
            assert_eq!(
                Rotor::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ", notch),
                Err(RotorCipherError::InvalidNotch {
                    notch: notch.to_string()
                }),
                "notch {:?}",
                notch
            );
        }
    }

    #[test]
    fn test_invalid_wiring() {
        assert!(matches!(
            Rotor::new("ABC", "A"),
            Err(RotorCipherError::InvalidWiringLength { .. })
        ));
    }

    #[test]
    fn test_from_map_checks_notch() {
        assert!(Rotor::from_map(SubstitutionMap::identity(), 25).is_ok());
        assert!(Rotor::from_map(SubstitutionMap::identity(), 26).is_err());
    }

    #[test]
    fn test_offset_lookup_delegates() {
        let rotor = Rotor::new("JGDQOXUSCAMIFRVTPNEWKBLZYH", "Q").unwrap();
        // A at offset 1 reads the B contact: 'G'
        assert_eq!(rotor.forward(0, 1), 6);
        assert_eq!(rotor.backward(6, 1), 0);
    }

    #[test]
    fn test_display() {
        let rotor = Rotor::new("JGDQOXUSCAMIFRVTPNEWKBLZYH", "Q").unwrap();
        assert_eq!(rotor.to_string(), "JGDQOXUSCAMIFRVTPNEWKBLZYH (notch Q)");
    }
}
