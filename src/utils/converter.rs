//! Letter-string to index-sequence conversion utilities.
//!
//! Wiring tables are supplied as 26-letter strings and stored as index
//! sequences; these helpers convert in both directions.

use super::alphabet::{index_to_letter, letter_to_index};
use crate::error::RotorCipherError;

/// Converts a letter string to a `Vec<usize>` of alphabet indices.
///
/// Letters are accepted in either case.
///
/// # Errors
/// Returns [`RotorCipherError::InvalidLetter`] on the first character that
/// is not an alphabet letter.
pub fn letters_to_indices(input: &str) -> Result<Vec<usize>, RotorCipherError> {
    input
        .chars()
        .map(|c| letter_to_index(c).ok_or(RotorCipherError::InvalidLetter { letter: c }))
        .collect()
}

/// Converts a slice of alphabet indices to an uppercase letter string.
pub fn indices_to_letters(input: &[usize]) -> String {
    input.iter().map(|&i| index_to_letter(i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_to_indices_basic() {
        assert_eq!(letters_to_indices("ABZ").unwrap(), vec![0, 1, 25]);
    }

    #[test]
    fn test_letters_to_indices_lowercase() {
        assert_eq!(letters_to_indices("abz").unwrap(), vec![0, 1, 25]);
    }

    #[test]
    fn test_letters_to_indices_invalid() {
        assert_eq!(
            letters_to_indices("AB3"),
            Err(RotorCipherError::InvalidLetter { letter: '3' })
        );
    }

    #[test]
    fn test_indices_to_letters_basic() {
        assert_eq!(indices_to_letters(&[7, 4, 11, 11, 14]), "HELLO");
    }

    #[test]
    fn test_empty() {
        assert!(letters_to_indices("").unwrap().is_empty());
        assert_eq!(indices_to_letters(&[]), "");
    }

    #[test]
    fn test_roundtrip_wiring() {
        let wiring = "JGDQOXUSCAMIFRVTPNEWKBLZYH";
        let indices = letters_to_indices(wiring).unwrap();
        assert_eq!(indices_to_letters(&indices), wiring);
    }
}
