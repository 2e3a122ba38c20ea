//! Reflector: symmetric, fixed-point-free substitution map.
//!
//! Folds the signal back through the rotor stack. Because it pairs
//! letters (`r(r(i)) == i`) and never maps a letter to itself, the whole
//! machine is reciprocal and no letter ever encodes to itself.

use std::fmt;

use crate::error::RotorCipherError;
use crate::substitution::SubstitutionMap;
use crate::utils::alphabet::index_to_letter;

/// Involutive substitution map with no fixed points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    map: SubstitutionMap,
}

impl Reflector {
    /// Creates a reflector from a 26-letter wiring.
    ///
    /// # Errors
    /// - Any [`SubstitutionMap::from_permutation`] error.
    /// - [`RotorCipherError::ReflectorFixedPoint`] if a letter maps to itself.
    /// - [`RotorCipherError::ReflectorNotInvolution`] if the pairing is not symmetric.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotor_cipher::Reflector;
    ///
    /// assert!(Reflector::new("QYHOGNECVPUZTFDJAXWMKISRBL").is_ok());
    /// assert!(Reflector::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ").is_err());
    /// ```
    pub fn new(wiring: &str) -> Result<Self, RotorCipherError> {
        Self::from_map(SubstitutionMap::from_permutation(wiring)?)
    }

    /// Wraps a validated permutation after checking the reflector invariants.
    ///
    /// # Errors
    /// Same reflector checks as [`new`](Self::new).
    pub fn from_map(map: SubstitutionMap) -> Result<Self, RotorCipherError> {
        for (i, &image) in map.mapping().iter().enumerate() {
            if image == i {
                return Err(RotorCipherError::ReflectorFixedPoint {
                    letter: index_to_letter(i),
                });
            }
            if map.mapping()[image] != i {
                return Err(RotorCipherError::ReflectorNotInvolution {
                    letter: index_to_letter(i),
                    image: index_to_letter(image),
                });
            }
        }
        Ok(Reflector { map })
    }

    /// Wraps a map without checking symmetry.
    ///
    /// A non-symmetric map silently breaks reciprocity.
    #[cfg(test)]
    pub(crate) fn from_map_unchecked(map: SubstitutionMap) -> Self {
        Reflector { map }
    }

    /// Reflects `value`.
    pub fn reflect(&self, value: usize) -> usize {
        self.map.forward(value, 0)
    }

    /// Returns the underlying substitution map.
    pub fn map(&self) -> &SubstitutionMap {
        &self.map
    }
}

impl fmt::Display for Reflector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.map, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::alphabet::ALPHABET_LEN;

    const UKW: &str = "QYHOGNECVPUZTFDJAXWMKISRBL";

    #[test]
    fn test_reflect_is_involution() {
        let reflector = Reflector::new(UKW).unwrap();
        for i in 0..ALPHABET_LEN {
            let image = reflector.reflect(i);
            assert_ne!(image, i);
            assert_eq!(reflector.reflect(image), i);
        }
    }

    #[test]
    fn test_rejects_identity() {
        assert_eq!(
            Reflector::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ"),
            Err(RotorCipherError::ReflectorFixedPoint { letter: 'A' })
        );
    }

    #[test]
    fn test_rejects_non_symmetric() {
        // A->B, B->C, C->A cycle; remaining letters paired
        let result = Reflector::new("BCAEDGFIHKJMLONQPSRUTWVYXZ");
        assert_eq!(
            result,
            Err(RotorCipherError::ReflectorNotInvolution {
                letter: 'A',
                image: 'B'
            })
        );
    }

    #[test]
    fn test_rejects_unpaired_letters() {
        // Y and Z are left unpaired
        assert!(Reflector::new("BADCFEHGJILKNMPORQTSVUXWYZ").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Reflector::new(UKW).unwrap().to_string(), UKW);
    }

    #[test]
    fn test_unchecked_accepts_anything() {
        let reflector = Reflector::from_map_unchecked(SubstitutionMap::identity());
        assert_eq!(reflector.reflect(4), 4);
    }
}
