//! SubstitutionMap: bijective letter mapping with rotational offset.
//!
//! The atomic unit of the machine. Rotors, the reflector and the plugboard
//! all wrap a single `SubstitutionMap` and differ only in how they are
//! built and validated.
//!
//! The inverse permutation is computed once at load time, so both
//! directions are constant-time table lookups.

use std::fmt;

use crate::error::RotorCipherError;
use crate::utils::alphabet::{index_to_letter, rotate, rotate_back, ALPHABET_LEN};
use crate::utils::converter::{indices_to_letters, letters_to_indices};

/// Bijective permutation over the 26-letter alphabet.
///
/// `mapping[i]` is the index that index `i` maps to. Queries take an
/// `offset` that rotates the input before the table lookup (forward) or
/// un-rotates the result after the inverse lookup (backward), so that
/// `backward(forward(i, k), k) == i` for every `i` and `k`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionMap {
    mapping: [usize; ALPHABET_LEN],
    inverse: [usize; ALPHABET_LEN],
}

impl Default for SubstitutionMap {
    fn default() -> Self {
        Self::identity()
    }
}

impl SubstitutionMap {
    /// Creates the identity mapping (every letter maps to itself).
    pub fn identity() -> Self {
        let mut mapping = [0usize; ALPHABET_LEN];
        for (i, item) in mapping.iter_mut().enumerate() {
            *item = i;
        }
        SubstitutionMap {
            mapping,
            inverse: mapping,
        }
    }

    /// Creates a mapping from a 26-letter permutation string.
    ///
    /// # Parameters
    /// - `permutation`: The image of `A..Z` in order, e.g. `"EKMFLGDQVZNTOWYHXUSPAIBRCJ"`.
    ///   Letters are accepted in either case.
    ///
    /// # Errors
    /// - [`RotorCipherError::InvalidWiringLength`] if the string is not 26 characters.
    /// - [`RotorCipherError::InvalidLetter`] on a non-alphabet character.
    /// - [`RotorCipherError::DuplicateLetter`] if a letter repeats.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotor_cipher::SubstitutionMap;
    ///
    /// let map = SubstitutionMap::from_permutation("QWERTYUIOPASDFGHJKLZXCVBNM").unwrap();
    /// assert_eq!(map.forward(0, 0), 16); // A -> Q
    /// assert_eq!(map.backward(16, 0), 0);
    /// ```
    pub fn from_permutation(permutation: &str) -> Result<Self, RotorCipherError> {
        let actual = permutation.chars().count();
        if actual != ALPHABET_LEN {
            return Err(RotorCipherError::InvalidWiringLength {
                expected: ALPHABET_LEN,
                actual,
            });
        }
        let indices = letters_to_indices(permutation)?;
        let mut mapping = [0usize; ALPHABET_LEN];
        mapping.copy_from_slice(&indices);
        Self::from_indices(mapping)
    }

    /// Creates a mapping from an index table, validating it is a bijection.
    ///
    /// # Errors
    /// - [`RotorCipherError::InvalidLetter`] if an entry is 26 or larger.
    /// - [`RotorCipherError::DuplicateLetter`] if an entry repeats.
    pub fn from_indices(mapping: [usize; ALPHABET_LEN]) -> Result<Self, RotorCipherError> {
        let mut seen = [false; ALPHABET_LEN];
        for &target in &mapping {
            if target >= ALPHABET_LEN {
                return Err(RotorCipherError::InvalidLetter {
                    letter: char::REPLACEMENT_CHARACTER,
                });
            }
            if seen[target] {
                return Err(RotorCipherError::DuplicateLetter {
                    letter: index_to_letter(target),
                });
            }
            seen[target] = true;
        }
        Ok(Self::from_indices_unchecked(mapping))
    }

    /// Builds the mapping and its inverse without validation.
    ///
    /// Caller guarantees `mapping` is a permutation of `0..26`.
    pub(crate) fn from_indices_unchecked(mapping: [usize; ALPHABET_LEN]) -> Self {
        let mut inverse = [0usize; ALPHABET_LEN];
        for (i, &target) in mapping.iter().enumerate() {
            inverse[target] = i;
        }
        SubstitutionMap { mapping, inverse }
    }

    /// Replaces the mapping with a new permutation string.
    ///
    /// On error the current mapping is left untouched.
    ///
    /// # Errors
    /// Same as [`from_permutation`](Self::from_permutation).
    pub fn load(&mut self, permutation: &str) -> Result<(), RotorCipherError> {
        *self = Self::from_permutation(permutation)?;
        Ok(())
    }

    /// Maps `value` through the table after rotating it by `offset`.
    ///
    /// Returns `mapping[(value + offset) mod 26]`. `value` must be below 26.
    pub fn forward(&self, value: usize, offset: usize) -> usize {
        self.mapping[rotate(value, offset)]
    }

    /// Inverse of [`forward`](Self::forward) for the same `offset`.
    ///
    /// Returns `(position of value in mapping - offset) mod 26`. `value` must
    /// be below 26.
    pub fn backward(&self, value: usize, offset: usize) -> usize {
        rotate_back(self.inverse[value], offset)
    }

    /// Returns the index table.
    pub fn mapping(&self) -> &[usize; ALPHABET_LEN] {
        &self.mapping
    }

    /// Returns true if applying the mapping twice yields the identity.
    pub fn is_involution(&self) -> bool {
        self.mapping == self.inverse
    }

    /// Returns the indices that map to themselves.
    pub fn fixed_points(&self) -> Vec<usize> {
        (0..ALPHABET_LEN).filter(|&i| self.mapping[i] == i).collect()
    }
}

impl fmt::Display for SubstitutionMap {
    /// Renders the permutation as a 26-letter string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&indices_to_letters(&self.mapping))
    }
}
