//! Key selection over the scored candidates

use std::fmt;

use crate::alphabet::Key;
use crate::error::{AnalysisError, Result};

/// Relative band around the expected MIC within which the best candidate is trusted.
pub const DEFAULT_TOLERANCE: f64 = 0.10;

/// One trial decryption: the key tried and the MIC of its output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateResult {
    pub key: Key,
    pub mic: f64,
}

impl fmt::Display for CandidateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key: {:02} --- MIC: {}", self.key.value(), self.mic)
    }
}

/// Checks that a confidence band is finite and in `[0, 1)`.
///
/// A tolerance of 1 or more opens the lower edge of the band to zero and accepts any maximum.
pub fn validate_tolerance(tolerance: f64) -> Result<()> {
    if tolerance.is_finite() && (0.0..1.0).contains(&tolerance) {
        Ok(())
    } else {
        Err(AnalysisError::InvalidTolerance(tolerance))
    }
}

/// Picks the candidate with the highest MIC.
///
/// The first maximum in slice order wins ties. The pick is accepted only when
/// `(1 - tolerance) * max_mic <= expected_mic <= (1 + tolerance) * max_mic`.
///
/// # Arguments
///
/// * `candidates` - Scored trial decryptions, in ascending key order.
/// * `expected_mic` - MIC of correctly decrypted text in the reference language.
/// * `tolerance` - Relative width of the confidence band (0.10 means ±10%).
///
/// # Returns
///
/// The key of the best candidate when it lies inside the band.
///
/// # Errors
///
/// * [`AnalysisError::InvalidTolerance`] unless `tolerance` is finite and in `[0, 1)`.
/// * [`AnalysisError::EmptyInput`] for an empty candidate list.
/// * [`AnalysisError::NoConfidentKey`] when the best MIC falls outside the band.
pub fn select_key(candidates: &[CandidateResult], expected_mic: f64, tolerance: f64) -> Result<Key> {
    validate_tolerance(tolerance)?;
    let best = best_candidate(candidates).ok_or(AnalysisError::EmptyInput)?;

    let lower = best.mic * (1.0 - tolerance);
    let upper = best.mic * (1.0 + tolerance);
    if lower <= expected_mic && expected_mic <= upper {
        Ok(best.key)
    } else {
        Err(AnalysisError::NoConfidentKey {
            best_key: best.key,
            max_mic: best.mic,
        })
    }
}

/// First candidate holding the maximum MIC.
pub fn best_candidate(candidates: &[CandidateResult]) -> Option<&CandidateResult> {
    candidates
        .iter()
        .fold(None, |best: Option<&CandidateResult>, candidate| match best {
            Some(current) if current.mic >= candidate.mic => Some(current),
            _ => Some(candidate),
        })
}
