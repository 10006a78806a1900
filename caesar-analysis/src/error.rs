//! Error types for Caesar cryptanalysis

use thiserror::Error;

use crate::alphabet::Key;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Insufficient data: the input contains no alphabetic characters")]
    EmptyInput,

    #[error("No confident key: best candidate {best_key} has MIC {max_mic}, outside the confidence band")]
    NoConfidentKey { best_key: Key, max_mic: f64 },

    #[error("Invalid key {0} (must be between 1 and 26)")]
    InvalidKey(u8),

    #[error("Invalid tolerance {0} (must be a finite value in [0, 1))")]
    InvalidTolerance(f64),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
