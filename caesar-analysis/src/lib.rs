//! # Caesar Analysis Library
//!
//! Ciphertext-only recovery of Caesar (additive shift) cipher keys.
//!
//! ## How it works
//!
//! 1. **Normalize** - keep only ASCII letters, uppercased
//! 2. **Scan** - decrypt under each of the 26 keys
//! 3. **Score** - mutual index of coincidence (MIC) of each trial against a reference language
//! 4. **Select** - take the highest MIC, provided it lies within ±10% of the expected 0.065
//!
//! ## Usage
//!
//! ```rust
//! use caesar_analysis::{Engine, AnalysisError};
//!
//! let engine = Engine::default();
//!
//! // Nothing to analyse
//! assert_eq!(engine.run("1234!!! ???"), Err(AnalysisError::EmptyInput));
//!
//! // A short sample still ranks the right key first, but falls outside the ±10% band
//! let short = "Wklv lv d whvw phvvdjh iru wkh fdhvdu flskhu.";
//! assert!(matches!(engine.run(short), Err(AnalysisError::NoConfidentKey { .. })));
//!
//! let analysis = engine.with_tolerance(0.15)?.run(short)?;
//! assert_eq!(analysis.key.value(), 3);
//! assert_eq!(analysis.plaintext, "THISISATESTMESSAGEFORTHECAESARCIPHER");
//! # Ok::<(), AnalysisError>(())
//! ```

pub mod alphabet;
pub mod engine;
pub mod error;
pub mod frequency;
pub mod normalize;
pub mod select;
pub mod shift;

// Re-exports for easy access
pub use alphabet::Key;
pub use engine::{Analysis, Engine};
pub use error::{AnalysisError, Result};
pub use frequency::{ReferenceTable, ENGLISH, GERMAN};
pub use normalize::{normalize, CiphertextBuffer};
pub use select::{CandidateResult, DEFAULT_TOLERANCE};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
