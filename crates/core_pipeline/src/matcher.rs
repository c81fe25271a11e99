//! Approximate drug-name matching
//!
//! Resolves free-text tokens to canonical vocabulary entries using the
//! longest-matching-block similarity from [`crate::similarity`].

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::similarity::similarity_ratio;
use crate::vocabulary::Vocabulary;

/// Minimum similarity for a token to resolve to a vocabulary entry.
pub const MATCH_CUTOFF: f64 = 0.75;

/// Tokens must have more characters than this to be considered.
const MIN_TOKEN_CHARS: usize = 2;

/// Matcher over the shared vocabulary.
#[derive(Debug, Clone)]
pub struct VocabularyMatcher {
    vocabulary: Arc<Vocabulary>,
}

impl VocabularyMatcher {
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        Self { vocabulary }
    }

    /// Match every candidate token of `text`, inserting canonical names into
    /// `found` and appending one `similarity * 100` score per matched token.
    ///
    /// Scanning several texts against the same collections accumulates: the
    /// raw-text pass and the corrected-text pass share one set of names and
    /// one running score list.
    pub fn scan(&self, text: &str, found: &mut BTreeSet<String>, scores: &mut Vec<f64>) {
        for token in candidate_tokens(text) {
            let token = token.to_lowercase();
            if let Some((name, ratio)) = self.best_match(&token) {
                found.insert(name.to_string());
                scores.push(ratio * 100.0);
            }
        }
    }

    /// Best vocabulary entry for one lowercased token, if any clears
    /// [`MATCH_CUTOFF`]. Earlier entries win ties.
    fn best_match(&self, token: &str) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for entry in self.vocabulary.entries() {
            let ratio = similarity_ratio(token, entry);
            if ratio >= MATCH_CUTOFF && best.map_or(true, |(_, top)| ratio > top) {
                best = Some((entry.as_str(), ratio));
            }
        }
        best
    }
}

/// Whitespace-separated tokens that are all-alphabetic and long enough to
/// name a drug. Numbers, dose fragments, and punctuation-bearing tokens are
/// discarded before matching.
fn candidate_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .filter(|token| token.chars().count() > MIN_TOKEN_CHARS)
        .filter(|token| token.chars().all(char::is_alphabetic))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(names: &[&str]) -> VocabularyMatcher {
        VocabularyMatcher::new(Arc::new(Vocabulary::from_names(names.iter().copied())))
    }

    #[test]
    fn test_candidate_tokens_policy() {
        let tokens: Vec<&str> =
            candidate_tokens("take 2 Paracetamol at 9pm co-codamol ab done.").collect();
        // "2" and "9pm" are numeric, "co-codamol" carries punctuation,
        // "ab" is too short, "done." carries punctuation
        assert_eq!(tokens, ["take", "Paracetamol"]);
    }

    #[test]
    fn test_exact_token_matches() {
        let matcher = matcher(&["paracetamol", "ibuprofen"]);
        let mut found = BTreeSet::new();
        let mut scores = Vec::new();

        matcher.scan("Ibuprofen after meals", &mut found, &mut scores);

        assert_eq!(found.into_iter().collect::<Vec<_>>(), ["ibuprofen"]);
        assert_eq!(scores, [100.0]);
    }

    #[test]
    fn test_near_match_above_cutoff() {
        let matcher = matcher(&["paracetamol", "ibuprofen"]);
        let mut found = BTreeSet::new();
        let mut scores = Vec::new();

        matcher.scan("paracetmol", &mut found, &mut scores);

        assert_eq!(found.into_iter().collect::<Vec<_>>(), ["paracetamol"]);
        assert_eq!(scores.len(), 1);
        assert!((scores[0] - 2000.0 / 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_below_cutoff_contributes_nothing() {
        let matcher = matcher(&["paracetamol"]);
        let mut found = BTreeSet::new();
        let mut scores = Vec::new();

        matcher.scan("xyz qqqq", &mut found, &mut scores);

        assert!(found.is_empty());
        assert!(scores.is_empty());
    }

    #[test]
    fn test_best_candidate_wins() {
        // "amoxicillin" should beat "ampicillin" for the misspelling
        let matcher = matcher(&["ampicillin", "amoxicillin"]);
        let mut found = BTreeSet::new();
        let mut scores = Vec::new();

        matcher.scan("amoxicilin", &mut found, &mut scores);

        assert_eq!(found.into_iter().collect::<Vec<_>>(), ["amoxicillin"]);
    }

    #[test]
    fn test_tie_prefers_earlier_entry() {
        let matcher = matcher(&["dopamil", "dopamol"]);
        let mut found = BTreeSet::new();
        let mut scores = Vec::new();

        // Equidistant from both entries; the first listed must win
        matcher.scan("dopamel", &mut found, &mut scores);

        assert_eq!(found.into_iter().collect::<Vec<_>>(), ["dopamil"]);
        assert_eq!(scores.len(), 1);
    }

    #[test]
    fn test_repeated_token_dedups_name_but_keeps_scores() {
        let matcher = matcher(&["paracetamol"]);
        let mut found = BTreeSet::new();
        let mut scores = Vec::new();

        matcher.scan("paracetamol paracetamol paracetmol", &mut found, &mut scores);

        assert_eq!(found.len(), 1);
        assert_eq!(scores.len(), 3);
    }

    #[test]
    fn test_scans_accumulate_across_calls() {
        let matcher = matcher(&["paracetamol", "ibuprofen"]);
        let mut found = BTreeSet::new();
        let mut scores = Vec::new();

        matcher.scan("paracetamol daily", &mut found, &mut scores);
        matcher.scan("ibuprofen nightly", &mut found, &mut scores);

        assert_eq!(
            found.into_iter().collect::<Vec<_>>(),
            ["ibuprofen", "paracetamol"]
        );
        assert_eq!(scores.len(), 2);
    }
}
