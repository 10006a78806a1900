//! Additive shift (Caesar) transform

use crate::alphabet::{Key, ALPHABET_LEN};

const MODULUS: u8 = ALPHABET_LEN as u8;

/// Shifts every ASCII letter forward by `key`, preserving case.
///
/// Characters outside the alphabet pass through unchanged.
///
/// # Arguments
///
/// * `text` - The plaintext to encrypt.
/// * `key` - The shift amount.
///
/// # Returns
///
/// A `String` of the same length as `text`.
pub fn encrypt(text: &str, key: Key) -> String {
    shift_letters(text, key.shift())
}

/// Shifts every ASCII letter back by `key`, preserving case.
///
/// Characters outside the alphabet pass through unchanged.
///
/// # Arguments
///
/// * `text` - The ciphertext to decrypt.
/// * `key` - The shift amount used during encryption.
///
/// # Returns
///
/// A `String` containing the decrypted content.
///
/// # Example
///
/// ```rust
/// use caesar_analysis::{shift, Key};
///
/// let key = Key::new(3)?;
/// assert_eq!(shift::decrypt("WKH HQG", key), "THE END");
/// # Ok::<(), caesar_analysis::AnalysisError>(())
/// ```
pub fn decrypt(text: &str, key: Key) -> String {
    shift_letters(text, (MODULUS - key.shift()) % MODULUS)
}

fn shift_letters(text: &str, amount: u8) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
                (((c as u8 - base + amount) % MODULUS) + base) as char
            } else {
                c
            }
        })
        .collect()
}
