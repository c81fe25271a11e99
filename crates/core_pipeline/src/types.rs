//! Core types for the rxscan pipeline
//!
//! This module defines the prediction record produced by one `recognize`
//! call and the sentinel strings used for the empty-extraction outcome.

use serde::{Deserialize, Serialize};

/// Placeholder recorded as `ocr_text` when extraction yields no characters.
pub const NO_OCR_SENTINEL: &str = "[No OCR found]";

/// Placeholder recorded as `predicted_text` when the pipeline short-circuits
/// before the correction stage could run.
pub const CORRECTION_SKIPPED_SENTINEL: &str = "[Skipped]";

/// Outcome of one `recognize` call.
///
/// Field names are the wire contract: the surrounding system persists this
/// record and serves it back out through its own reporting endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Raw text extracted from the preprocessed image, trimmed.
    pub ocr_text: String,
    /// Corrected text when the correction stage ran, an inline error marker
    /// when it failed, empty when it was skipped.
    pub predicted_text: String,
    /// Canonical drug names matched against the vocabulary, deduplicated.
    pub found_drugs: Vec<String>,
    /// Coarse extraction confidence in [0, 100].
    pub ocr_confidence: f64,
    /// Mean per-match similarity in [0, 100].
    pub drug_confidence: f64,
}

impl PredictionResult {
    /// Result returned when extraction produces only whitespace.
    pub fn empty_extraction() -> Self {
        Self {
            ocr_text: NO_OCR_SENTINEL.to_string(),
            predicted_text: CORRECTION_SKIPPED_SENTINEL.to_string(),
            found_drugs: Vec::new(),
            ocr_confidence: 0.0,
            drug_confidence: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_extraction_sentinels() {
        let result = PredictionResult::empty_extraction();
        assert_eq!(result.ocr_text, "[No OCR found]");
        assert_eq!(result.predicted_text, "[Skipped]");
        assert!(result.found_drugs.is_empty());
        assert_eq!(result.ocr_confidence, 0.0);
        assert_eq!(result.drug_confidence, 0.0);
    }

    #[test]
    fn test_prediction_result_serialization() {
        let result = PredictionResult {
            ocr_text: "take paracetamol".to_string(),
            predicted_text: String::new(),
            found_drugs: vec!["paracetamol".to_string()],
            ocr_confidence: 32.0,
            drug_confidence: 100.0,
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"ocr_text\""));
        assert!(json.contains("\"predicted_text\""));
        assert!(json.contains("\"found_drugs\""));
        assert!(json.contains("\"ocr_confidence\""));
        assert!(json.contains("\"drug_confidence\""));

        let roundtrip: PredictionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.found_drugs, vec!["paracetamol"]);
    }
}
