//! Message pipeline: input normalization and block display.
//!
//! Raw text is reduced to the machine alphabet and padded to a whole
//! number of blocks before it reaches the machine. Encoded output is
//! shown in space-separated blocks.

use std::fmt;

use crate::error::RotorCipherError;
use crate::utils::alphabet::{is_alphabet_letter, letter_to_index};

/// Default block length for padding and display.
pub const DEFAULT_BLOCK_LEN: usize = 5;

/// Default letter used to pad the final block.
pub const DEFAULT_FILLER: char = 'X';

/// Normalizes raw text with the default block length and filler.
///
/// Uppercases letters, drops everything outside the alphabet (whitespace,
/// digits, punctuation) and pads with `'X'` to a multiple of 5.
///
/// # Examples
///
/// ```
/// use rotor_cipher::message::normalize;
///
/// assert_eq!(normalize("Hello World A!!!"), "HELLOWORLDAXXXX");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(raw: &str) -> String {
    pad(filter_letters(raw), DEFAULT_BLOCK_LEN, DEFAULT_FILLER)
}

/// Normalizes raw text with an explicit block length and filler letter.
///
/// # Errors
/// - [`RotorCipherError::InvalidBlockLength`] if `block_len` is zero.
/// - [`RotorCipherError::InvalidLetter`] if `filler` is not an alphabet letter.
pub fn normalize_with(
    raw: &str,
    block_len: usize,
    filler: char,
) -> Result<String, RotorCipherError> {
    if block_len == 0 {
        return Err(RotorCipherError::InvalidBlockLength);
    }
    if letter_to_index(filler).is_none() {
        return Err(RotorCipherError::InvalidLetter { letter: filler });
    }
    Ok(pad(
        filter_letters(raw),
        block_len,
        filler.to_ascii_uppercase(),
    ))
}

fn filter_letters(raw: &str) -> String {
    raw.chars()
        .filter(|&c| is_alphabet_letter(c))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

fn pad(mut text: String, block_len: usize, filler: char) -> String {
    let remainder = text.len() % block_len;
    if remainder != 0 {
        text.extend(std::iter::repeat(filler).take(block_len - remainder));
    }
    text
}

/// Encoded or decoded text, displayed in fixed-width blocks.
///
/// # Examples
///
/// ```
/// use rotor_cipher::Message;
///
/// let msg = Message::new("AFAIRLYLONGMESSAGE");
/// assert_eq!(msg.to_string(), "AFAIR LYLON GMESS AGE");
/// assert_eq!(msg.as_str(), "AFAIRLYLONGMESSAGE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
    block_len: usize,
}

impl Message {
    /// Wraps `text` with the default block length.
    pub fn new(text: impl Into<String>) -> Self {
        Message {
            text: text.into(),
            block_len: DEFAULT_BLOCK_LEN,
        }
    }

    /// Wraps `text` with a custom display block length.
    ///
    /// # Errors
    /// Returns [`RotorCipherError::InvalidBlockLength`] if `block_len` is zero.
    pub fn with_block_len(
        text: impl Into<String>,
        block_len: usize,
    ) -> Result<Self, RotorCipherError> {
        if block_len == 0 {
            return Err(RotorCipherError::InvalidBlockLength);
        }
        Ok(Message {
            text: text.into(),
            block_len,
        })
    }

    /// Returns the unformatted text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the message and returns the unformatted text.
    pub fn into_string(self) -> String {
        self.text
    }

    /// Returns the display block length.
    pub fn block_len(&self) -> usize {
        self.block_len
    }

    /// Returns the number of letters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns true if the message has no letters.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.text.chars().enumerate() {
            if i > 0 && i % self.block_len == 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl AsRef<str> for Message {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
