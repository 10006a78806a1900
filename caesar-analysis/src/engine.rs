//! Ciphertext-only key recovery: normalize, scan all keys, select, decrypt

use tracing::{debug, info};

use crate::alphabet::Key;
use crate::error::{AnalysisError, Result};
use crate::frequency::{mutual_index, ReferenceTable, ENGLISH};
use crate::normalize::{normalize, CiphertextBuffer};
use crate::select::{select_key, validate_tolerance, CandidateResult, DEFAULT_TOLERANCE};
use crate::shift;

/// Outcome of a successful analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// One entry per key, ascending.
    pub candidates: Vec<CandidateResult>,
    pub key: Key,
    /// Uppercase letters only; punctuation and spacing are not restored.
    pub plaintext: String,
}

/// Caesar cryptanalysis engine configured with a reference language and a confidence band.
#[derive(Debug, Clone)]
pub struct Engine {
    table: &'static ReferenceTable,
    tolerance: f64,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(&ENGLISH)
    }
}

impl Engine {
    pub fn new(table: &'static ReferenceTable) -> Self {
        Self {
            table,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Sets the relative band around the expected MIC (0.10 means ±10%).
    ///
    /// # Errors
    ///
    /// [`AnalysisError::InvalidTolerance`] unless `tolerance` is finite and in `[0, 1)`.
    pub fn with_tolerance(mut self, tolerance: f64) -> Result<Self> {
        validate_tolerance(tolerance)?;
        self.tolerance = tolerance;
        Ok(self)
    }

    pub fn table(&self) -> &'static ReferenceTable {
        self.table
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Decrypts `buffer` under every key and scores each result.
    pub fn scan(&self, buffer: &CiphertextBuffer) -> Result<Vec<CandidateResult>> {
        if buffer.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        Key::all()
            .map(|key| -> Result<CandidateResult> {
                let mic = mutual_index(&shift::decrypt(buffer.as_str(), key), self.table)?;
                debug!(key = key.value(), mic, "scored candidate");
                Ok(CandidateResult { key, mic })
            })
            .collect()
    }

    /// Applies the confidence band of this engine to scanned candidates.
    pub fn select(&self, candidates: &[CandidateResult]) -> Result<Key> {
        let key = select_key(candidates, self.table.expected_mic, self.tolerance)?;
        info!(key = key.value(), language = self.table.name, "selected key");
        Ok(key)
    }

    /// Runs the full pipeline on raw ciphertext.
    ///
    /// # Arguments
    ///
    /// * `raw` - Ciphertext in any form; non-letters are discarded before analysis.
    ///
    /// # Returns
    ///
    /// The 26 scored candidates, the selected key and the decrypted letters.
    ///
    /// # Errors
    ///
    /// * [`AnalysisError::EmptyInput`] if `raw` has no letters.
    /// * [`AnalysisError::NoConfidentKey`] if no candidate lands in the confidence band.
    ///
    /// # Example
    ///
    /// ```rust
    /// use caesar_analysis::{shift, Engine, Key};
    ///
    /// let plaintext = "It was the best of times, it was the worst of times, it was the age of \
    ///     wisdom, it was the age of foolishness, it was the epoch of belief, it was the \
    ///     epoch of incredulity, it was the season of Light, it was the season of Darkness.";
    /// let ciphertext = shift::encrypt(plaintext, Key::new(11)?);
    ///
    /// let analysis = Engine::default().run(&ciphertext)?;
    /// assert_eq!(analysis.key.value(), 11);
    /// assert!(analysis.plaintext.starts_with("ITWASTHEBESTOFTIMES"));
    /// # Ok::<(), caesar_analysis::AnalysisError>(())
    /// ```
    pub fn run(&self, raw: &str) -> Result<Analysis> {
        let buffer = normalize(raw);
        debug!(letters = buffer.len(), "normalized input");

        let candidates = self.scan(&buffer)?;
        let key = self.select(&candidates)?;

        Ok(Analysis {
            plaintext: shift::decrypt(buffer.as_str(), key),
            candidates,
            key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::GERMAN;

    const SCENARIO: &str = "Wklv lv d whvw phvvdjh iru wkh fdhvdu flskhu.";

    const PASSAGE: &str = "It was the best of times, it was the worst of times, it was the age of \
        wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch of \
        incredulity, it was the season of Light, it was the season of Darkness, it was the spring \
        of hope, it was the winter of despair, we had everything before us, we had nothing before \
        us, we were all going direct to Heaven, we were all going direct the other way. In short, \
        the period was so far like the present period, that some of its noisiest authorities \
        insisted on its being received, for good or for evil, in the superlative degree of \
        comparison only. There were a king with a large jaw and a queen with a plain face, on the \
        throne of England; there were a king with a large jaw and a queen with a fair face, on the \
        throne of France.";

    const GERMAN_PASSAGE: &str = "Es war einmal ein kleines Mädchen, dem war Vater und Mutter \
        gestorben, und es war so arm, dass es kein Kämmerchen mehr hatte, darin zu wohnen, und kein \
        Bettchen mehr, darin zu schlafen, und endlich gar nichts mehr als die Kleider auf dem Leib \
        und ein Stückchen Brot in der Hand, das ihm ein mitleidiges Herz geschenkt hatte. Es war \
        aber gut und fromm. Und weil es so von aller Welt verlassen war, ging es im Vertrauen auf \
        den lieben Gott hinaus ins Feld. Da begegnete ihm ein armer Mann, der sprach: Ach, gib mir \
        etwas zu essen, ich bin so hungrig. Es reichte ihm das ganze Stückchen Brot und sagte: Gott \
        segne dir's, und ging weiter. Da kam ein Kind, das jammerte und sprach: Es friert mich so \
        an meinem Kopfe, schenk mir etwas, womit ich ihn bedecken kann.";

    #[test]
    fn test_recovers_every_key() {
        for key in Key::all() {
            let ciphertext = shift::encrypt(PASSAGE, key);
            let analysis = Engine::default().run(&ciphertext).unwrap();
            assert_eq!(analysis.key, key);
            assert_eq!(analysis.plaintext, normalize(PASSAGE).as_str());
        }
    }

    #[test]
    fn test_candidates_in_key_order() {
        let ciphertext = shift::encrypt(PASSAGE, Key::new(5).unwrap());
        let analysis = Engine::default().run(&ciphertext).unwrap();
        assert_eq!(analysis.candidates.len(), 26);
        for (candidate, key) in analysis.candidates.iter().zip(Key::all()) {
            assert_eq!(candidate.key, key);
        }
    }

    #[test]
    fn test_scenario_best_candidate_is_key_three() {
        let buffer = normalize(SCENARIO);
        let candidates = Engine::default().scan(&buffer).unwrap();
        let best = crate::select::best_candidate(&candidates).unwrap();
        assert_eq!(best.key.value(), 3);
    }

    #[test]
    fn test_scenario_short_text_outside_default_band() {
        // 36 letters score 0.0728, just above the 0.065 / 0.9 edge.
        match Engine::default().run(SCENARIO) {
            Err(AnalysisError::NoConfidentKey { best_key, max_mic }) => {
                assert_eq!(best_key.value(), 3);
                assert!((max_mic - 0.0728).abs() < 0.0001);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_scenario_recovered_with_wider_band() {
        let analysis = Engine::default().with_tolerance(0.15).unwrap().run(SCENARIO).unwrap();
        assert_eq!(analysis.key.value(), 3);
        assert_eq!(analysis.plaintext, "THISISATESTMESSAGEFORTHECAESARCIPHER");
    }

    #[test]
    fn test_tolerance_outside_unit_interval_rejected() {
        for tolerance in [1.0, 5.0, -0.1, -0.5, f64::NAN] {
            assert!(matches!(
                Engine::default().with_tolerance(tolerance),
                Err(AnalysisError::InvalidTolerance(_))
            ));
        }
    }

    #[test]
    fn test_tolerance_configuration() {
        assert_eq!(Engine::default().tolerance(), DEFAULT_TOLERANCE);
        assert_eq!(Engine::default().table().name, "english");

        let engine = Engine::new(&GERMAN).with_tolerance(0.2).unwrap();
        assert_eq!(engine.tolerance(), 0.2);
        assert_eq!(engine.table().name, "german");
    }

    #[test]
    fn test_empty_input() {
        let engine = Engine::default();
        assert_eq!(engine.run(""), Err(AnalysisError::EmptyInput));
        assert_eq!(engine.run("1234!!! ???"), Err(AnalysisError::EmptyInput));
    }

    #[test]
    fn test_uniform_text_has_no_confident_key() {
        // Every shift of A..Z is a permutation of it, so all 26 scores tie.
        let engine = Engine::default();
        let candidates = engine.scan(&normalize("ABCDEFGHIJKLMNOPQRSTUVWXYZ")).unwrap();
        assert!(candidates.iter().all(|c| c.mic == candidates[0].mic));

        match engine.run("ABCDEFGHIJKLMNOPQRSTUVWXYZ") {
            Err(AnalysisError::NoConfidentKey { best_key, .. }) => assert_eq!(best_key.value(), 1),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_german_table() {
        let key = Key::new(9).unwrap();
        let ciphertext = shift::encrypt(GERMAN_PASSAGE, key);
        let analysis = Engine::new(&GERMAN).run(&ciphertext).unwrap();
        assert_eq!(analysis.key, key);
    }
}
