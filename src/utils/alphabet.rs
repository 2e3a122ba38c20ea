//! Alphabet constants and modular letter-index arithmetic.
//!
//! Every mapping in the machine is a permutation over the index space
//! `0..ALPHABET_LEN`, where index 0 is `'A'` and index 25 is `'Z'`.

/// The machine alphabet in index order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of letters in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Returns the index of `letter`, accepting either case.
///
/// # Returns
/// `Some(0..26)` for `A..=Z` / `a..=z`, `None` for anything else.
pub fn letter_to_index(letter: char) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Some((upper as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Returns the uppercase letter at `index` (reduced modulo 26).
pub fn index_to_letter(index: usize) -> char {
    (b'A' + (index % ALPHABET_LEN) as u8) as char
}

/// Returns true if `letter` belongs to the alphabet (either case).
pub fn is_alphabet_letter(letter: char) -> bool {
    letter.is_ascii_alphabetic()
}

/// Rotates `value` forward by `offset` positions around the alphabet.
pub fn rotate(value: usize, offset: usize) -> usize {
    (value + offset % ALPHABET_LEN) % ALPHABET_LEN
}

/// Rotates `value` backward by `offset` positions around the alphabet.
pub fn rotate_back(value: usize, offset: usize) -> usize {
    (value + ALPHABET_LEN - offset % ALPHABET_LEN) % ALPHABET_LEN
}

/// Advances `value` by one position, wrapping `Z` back to `A`.
pub fn increment(value: usize) -> usize {
    rotate(value, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_to_index_both_cases() {
        assert_eq!(letter_to_index('A'), Some(0));
        assert_eq!(letter_to_index('z'), Some(25));
        assert_eq!(letter_to_index('m'), Some(12));
    }

    #[test]
    fn test_letter_to_index_rejects_non_letters() {
        for c in ['1', ' ', '!', 'é', '\n'] {
            assert_eq!(letter_to_index(c), None, "{:?}", c);
        }
    }

    #[test]
    fn test_index_to_letter_wraps() {
        assert_eq!(index_to_letter(0), 'A');
        assert_eq!(index_to_letter(25), 'Z');
        assert_eq!(index_to_letter(26), 'A');
    }

    #[test]
    fn test_alphabet_matches_indices() {
        for (i, c) in ALPHABET.chars().enumerate() {
            assert_eq!(letter_to_index(c), Some(i));
            assert_eq!(index_to_letter(i), c);
        }
        assert_eq!(ALPHABET.len(), ALPHABET_LEN);
    }

    #[test]
    fn test_increment() {
        for i in 0..52 {
            assert_eq!(increment(i % ALPHABET_LEN), (i + 1) % ALPHABET_LEN);
        }
    }

    #[test]
    fn test_rotate_and_back() {
        for value in 0..ALPHABET_LEN {
            for offset in 0..60 {
                assert_eq!(rotate_back(rotate(value, offset), offset), value);
            }
        }
        assert_eq!(rotate_back(0, 1), 25);
        assert_eq!(rotate(25, 27), 0);
    }
}
