//! Letter-frequency statistics and the mutual index of coincidence

use crate::alphabet::{index_of, ALPHABET_LEN};
use crate::error::{AnalysisError, Result};

/// Expected letter distribution of a natural language.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTable {
    pub name: &'static str,
    /// Relative frequency of each letter, indexed A=0 .. Z=25.
    pub frequencies: [f64; ALPHABET_LEN],
    /// MIC of correctly decrypted text against this table.
    pub expected_mic: f64,
}

/// English letter frequencies with the 0.065 coincidence target.
pub const ENGLISH: ReferenceTable = ReferenceTable {
    name: "english",
    frequencies: [
        0.082, 0.015, 0.028, 0.043, 0.127, 0.022, 0.020, 0.061,
        0.070, 0.002, 0.008, 0.040, 0.024, 0.067, 0.075, 0.019,
        0.001, 0.060, 0.063, 0.091, 0.028, 0.010, 0.023, 0.001,
        0.020, 0.001,
    ],
    expected_mic: 0.065,
};

/// German letter frequencies; the target is the table's own sum of squares.
pub const GERMAN: ReferenceTable = ReferenceTable {
    name: "german",
    frequencies: [
        0.0558, 0.0196, 0.0316, 0.0498, 0.1693, 0.0149, 0.0302, 0.0498,
        0.0802, 0.0024, 0.0132, 0.0360, 0.0255, 0.1053, 0.0224, 0.0067,
        0.0002, 0.0689, 0.0642, 0.0579, 0.0383, 0.0084, 0.0178, 0.0005,
        0.0005, 0.0121,
    ],
    expected_mic: 0.0737,
};

impl ReferenceTable {
    /// Largest single-letter frequency, the upper bound of any MIC against this table.
    pub fn max_frequency(&self) -> f64 {
        self.frequencies.iter().copied().fold(0.0, f64::max)
    }
}

/// Counts the frequency of each letter in the given text.
///
/// Case is ignored and non-letters are skipped.
///
/// # Arguments
///
/// * `text` - The input text to analyze.
///
/// # Returns
///
/// An array of 26 counts for letters A-Z.
pub fn count_frequencies(text: &str) -> [u32; ALPHABET_LEN] {
    let mut frequencies = [0u32; ALPHABET_LEN];

    for index in text.chars().filter_map(index_of) {
        frequencies[index] += 1;
    }

    frequencies
}

/// Calculates the mutual index of coincidence of `text` against `table`.
///
/// `MIC = sum(table[i] * count[i]) / N` where `N` is the number of letters in `text`.
///
/// # Arguments
///
/// * `text` - The candidate plaintext to score.
/// * `table` - Expected letter frequencies of the reference language.
///
/// # Returns
///
/// A value between 0 and the largest frequency in `table`, close to
/// `table.expected_mic` for correctly decrypted text of reasonable length.
///
/// # Errors
///
/// [`AnalysisError::EmptyInput`] if `text` contains no letters.
///
/// # Example
///
/// ```rust
/// use caesar_analysis::frequency::{mutual_index, ENGLISH};
///
/// let mic = mutual_index("EEEE", &ENGLISH)?;
/// assert!((mic - 0.127).abs() < 1e-12);
/// # Ok::<(), caesar_analysis::AnalysisError>(())
/// ```
pub fn mutual_index(text: &str, table: &ReferenceTable) -> Result<f64> {
    let frequencies = count_frequencies(text);
    let total: u32 = frequencies.iter().sum();

    if total == 0 {
        return Err(AnalysisError::EmptyInput);
    }

    let n = total as f64;
    Ok(table
        .frequencies
        .iter()
        .zip(frequencies.iter())
        .map(|(&probability, &count)| probability * count as f64 / n)
        .sum())
}
