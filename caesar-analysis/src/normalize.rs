//! Reduction of raw text to canonical ciphertext

use std::fmt;

/// Uppercase ASCII letters only, in input order.
///
/// Only [`normalize`] constructs a buffer, so every character is a member of the alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CiphertextBuffer(String);

impl CiphertextBuffer {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters in the buffer.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CiphertextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strips everything but ASCII letters and uppercases the rest.
///
/// # Arguments
///
/// * `text` - Raw input of any length, including empty.
///
/// # Returns
///
/// A [`CiphertextBuffer`] with the letters of `text` in their original order.
/// It is empty when `text` holds no ASCII letters.
///
/// # Example
///
/// ```rust
/// use caesar_analysis::normalize;
///
/// assert_eq!(normalize("Hello, World!").as_str(), "HELLOWORLD");
/// assert!(normalize("1234!!! ???").is_empty());
/// ```
pub fn normalize(text: &str) -> CiphertextBuffer {
    CiphertextBuffer(
        text.chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_uppercase())
            .collect(),
    )
}
