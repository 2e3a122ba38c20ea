//! Plugboard: static substitution applied before and after the rotors.
//!
//! Usually built from a handful of disjoint swap pairs with every other
//! letter passing straight through. Any bijection is accepted: the return
//! path uses the exact inverse, so reciprocity does not depend on the
//! plugboard being symmetric.

use std::fmt;

use crate::error::RotorCipherError;
use crate::substitution::SubstitutionMap;
use crate::utils::alphabet::{index_to_letter, letter_to_index, ALPHABET_LEN};

/// Static substitution stage at the machine entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Plugboard {
    map: SubstitutionMap,
}

impl Plugboard {
    /// Creates an empty plugboard (identity mapping).
    pub fn identity() -> Self {
        Plugboard {
            map: SubstitutionMap::identity(),
        }
    }

    /// Creates a plugboard from a full 26-letter wiring.
    ///
    /// # Errors
    /// Any [`SubstitutionMap::from_permutation`] error.
    pub fn new(wiring: &str) -> Result<Self, RotorCipherError> {
        Ok(Self::from_map(SubstitutionMap::from_permutation(wiring)?))
    }

    /// Wraps an already validated permutation.
    pub fn from_map(map: SubstitutionMap) -> Self {
        Plugboard { map }
    }

    /// Creates a plugboard from whitespace-separated letter pairs.
    ///
    /// Each pair swaps its two letters; unlisted letters map to themselves.
    ///
    /// # Errors
    /// - [`RotorCipherError::InvalidLetter`] on a non-alphabet character.
    /// - [`RotorCipherError::InvalidWiringLength`] if a token is not two letters.
    /// - [`RotorCipherError::PlugboardConflict`] if a letter is plugged twice
    ///   or paired with itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotor_cipher::Plugboard;
    ///
    /// let plugboard = Plugboard::from_pairs("BM ES KT").unwrap();
    /// assert_eq!(plugboard.to_string(), "AMCDSFGHIJTLBNOPQREKUVWXYZ");
    /// ```
    pub fn from_pairs(pairs: &str) -> Result<Self, RotorCipherError> {
        let mut mapping = *SubstitutionMap::identity().mapping();
        let mut plugged = [false; ALPHABET_LEN];
        for token in pairs.split_whitespace() {
            let letters: Vec<char> = token.chars().collect();
            if letters.len() != 2 {
                return Err(RotorCipherError::InvalidWiringLength {
                    expected: 2,
                    actual: letters.len(),
                });
            }
            let mut ends = [0usize; 2];
            for (end, &c) in ends.iter_mut().zip(&letters) {
                let index =
                    letter_to_index(c).ok_or(RotorCipherError::InvalidLetter { letter: c })?;
                if plugged[index] {
                    return Err(RotorCipherError::PlugboardConflict {
                        letter: index_to_letter(index),
                    });
                }
                plugged[index] = true;
                *end = index;
            }
            mapping.swap(ends[0], ends[1]);
        }
        Ok(Self::from_map(SubstitutionMap::from_indices_unchecked(
            mapping,
        )))
    }

    /// Maps a letter on its way into the rotors.
    pub fn forward(&self, value: usize) -> usize {
        self.map.forward(value, 0)
    }

    /// Maps a letter on its way out of the rotors.
    pub fn backward(&self, value: usize) -> usize {
        self.map.backward(value, 0)
    }

    /// Returns the swapped pairs, each listed once in alphabetical order.
    ///
    /// Letters that are not part of a two-letter swap are omitted.
    pub fn pairs(&self) -> Vec<(char, char)> {
        let mapping = self.map.mapping();
        (0..ALPHABET_LEN)
            .filter(|&i| mapping[i] > i && mapping[mapping[i]] == i)
            .map(|i| (index_to_letter(i), index_to_letter(mapping[i])))
            .collect()
    }

    /// Returns the underlying substitution map.
    pub fn map(&self) -> &SubstitutionMap {
        &self.map
    }
}

impl fmt::Display for Plugboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.map, f)
    }
}
