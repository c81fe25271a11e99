//! Confidence scoring
//!
//! Derives the two confidence figures of the prediction record from the
//! pipeline's intermediate state. Both are on a 0-100 scale.

use std::collections::BTreeSet;

/// Score assigned when drugs were matched but no per-match similarity was
/// recorded. The matcher records a score with every match, so this branch
/// stays dormant in normal operation; it is kept for compatibility with the
/// original scorer.
pub const DEFAULT_MATCH_CONFIDENCE: f64 = 85.0;

/// Length-based extraction confidence: two points per character of trimmed
/// text, saturating at 100. A coarse proxy, not a calibrated probability.
pub fn ocr_confidence(trimmed_text: &str) -> f64 {
    (trimmed_text.chars().count() as f64 * 2.0).clamp(0.0, 100.0)
}

/// Aggregate drug-match confidence from the per-match similarity scores.
pub fn drug_confidence(scores: &[f64], found: &BTreeSet<String>) -> f64 {
    if !scores.is_empty() {
        scores.iter().sum::<f64>() / scores.len() as f64
    } else if !found.is_empty() {
        DEFAULT_MATCH_CONFIDENCE
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ocr_confidence_scales_with_length() {
        assert_eq!(ocr_confidence(""), 0.0);
        assert_eq!(ocr_confidence("xyz"), 6.0);
        assert_eq!(ocr_confidence("take paracetmol twice daily"), 54.0);
    }

    #[test]
    fn test_ocr_confidence_saturates_at_100() {
        let text = "a".repeat(80);
        assert_eq!(ocr_confidence(&text), 100.0);
    }

    #[test]
    fn test_drug_confidence_is_mean_of_scores() {
        let found = BTreeSet::from(["paracetamol".to_string()]);
        assert_eq!(drug_confidence(&[90.0, 100.0], &found), 95.0);
    }

    #[test]
    fn test_drug_confidence_defaults_when_scores_missing() {
        let found = BTreeSet::from(["paracetamol".to_string()]);
        assert_eq!(drug_confidence(&[], &found), DEFAULT_MATCH_CONFIDENCE);
    }

    #[test]
    fn test_drug_confidence_zero_without_matches() {
        assert_eq!(drug_confidence(&[], &BTreeSet::new()), 0.0);
    }
}
