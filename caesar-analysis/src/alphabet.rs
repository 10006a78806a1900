//! The 26-letter Latin alphabet and the Caesar key type

use std::fmt;

use crate::error::{AnalysisError, Result};

/// Number of letters in the supported alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Returns the alphabet position of an ASCII letter, ignoring case.
///
/// # Arguments
///
/// * `c` - The character to look up.
///
/// # Returns
///
/// `Some(0..=25)` for `A`-`Z` and `a`-`z`, `None` for anything else.
pub fn index_of(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        None
    }
}

/// A Caesar shift amount in the range 1..=26.
///
/// Key 26 is a full rotation and therefore the identity shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(u8);

impl Key {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = ALPHABET_LEN as u8;

    /// Creates a key, rejecting values outside 1..=26.
    ///
    /// # Example
    ///
    /// ```rust
    /// use caesar_analysis::Key;
    ///
    /// assert_eq!(Key::new(3).unwrap().value(), 3);
    /// assert!(Key::new(0).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(AnalysisError::InvalidKey(value))
        }
    }

    /// All 26 keys in ascending order.
    pub fn all() -> impl Iterator<Item = Key> {
        (Self::MIN..=Self::MAX).map(Key)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Shift amount reduced modulo 26.
    pub(crate) fn shift(self) -> u8 {
        self.0 % ALPHABET_LEN as u8
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Key {
    type Error = AnalysisError;

    fn try_from(value: u8) -> Result<Self> {
        Key::new(value)
    }
}
