//! Error types for the rotor-cipher library.

use thiserror::Error;

/// Errors produced by the rotor-cipher library.
///
/// Every variant except [`ReciprocityMismatch`](Self::ReciprocityMismatch)
/// describes a configuration fault and is raised while a machine or one of
/// its components is being built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotorCipherError {
    /// Permutation string does not hold exactly one letter per alphabet slot.
    #[error("wiring must have {expected} letters, got {actual}")]
    InvalidWiringLength {
        /// Required number of letters
        expected: usize,
        /// Number of characters supplied
        actual: usize,
    },

    /// Character outside the alphabet where a letter was required.
    #[error("'{letter}' is not a letter of the alphabet")]
    InvalidLetter {
        /// The offending character
        letter: char,
    },

    /// Permutation is not a bijection.
    #[error("wiring is not a permutation: '{letter}' appears more than once")]
    DuplicateLetter {
        /// First repeated letter
        letter: char,
    },

    /// Notch is not a single alphabet letter.
    #[error("notch must be a single letter, got \"{notch}\"")]
    InvalidNotch {
        /// The notch text supplied
        notch: String,
    },

    /// Reflector maps a letter onto itself.
    #[error("reflector maps '{letter}' to itself")]
    ReflectorFixedPoint {
        /// The self-mapped letter
        letter: char,
    },

    /// Reflector is not symmetric.
    #[error("reflector is not symmetric: '{letter}' -> '{image}' but not back")]
    ReflectorNotInvolution {
        /// Source letter
        letter: char,
        /// Its image under the reflector
        image: char,
    },

    /// Plugboard pair list reuses a letter or pairs a letter with itself.
    #[error("plugboard letter '{letter}' is already plugged")]
    PlugboardConflict {
        /// The conflicting letter
        letter: char,
    },

    /// Key component outside [0, 26).
    #[error("key position {position} is {value}, must be below 26")]
    KeyOutOfRange {
        /// Rotor slot (0-based)
        position: usize,
        /// Supplied value
        value: u32,
    },

    /// Block length of zero.
    #[error("block length must be at least 1")]
    InvalidBlockLength,

    /// Decoding the ciphertext did not reproduce the input.
    #[error("decoded message \"{actual}\" does not match \"{expected}\"")]
    ReciprocityMismatch {
        /// Normalized input
        expected: String,
        /// Result of decoding the ciphertext
        actual: String,
    },
}

impl RotorCipherError {
    /// Returns true if this error rejects a machine configuration.
    ///
    /// Configuration errors are fatal at construction time. A reciprocity
    /// mismatch is reported after the fact and can be shown to the user.
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, Self::ReciprocityMismatch { .. })
    }
}
