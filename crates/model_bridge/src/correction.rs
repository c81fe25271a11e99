//! Correction model integration
//!
//! Implements the pipeline's `TextCorrector` seam on top of the HTTP
//! client. Encoding, truncation/padding to the fixed sequence length, and
//! argmax decoding happen inside the inference process; this adapter fixes
//! the sequence cap and strips residual tokenizer markers from the reply.

use async_trait::async_trait;
use tracing::debug;

use core_pipeline::{CorrectionError, TextCorrector};

use crate::client::{CorrectRequest, CorrectionClient};

/// Token-sequence cap for the correction model, matching the length the
/// model was trained with.
pub const MAX_SEQUENCE_TOKENS: usize = 128;

/// Markers the tokenizer can leave in decoded output.
const SPECIAL_MARKERS: [&str; 5] = ["[CLS]", "[SEP]", "[PAD]", "[MASK]", "[UNK]"];

/// Masked-token correction model adapter.
pub struct CorrectionModel {
    client: CorrectionClient,
}

impl CorrectionModel {
    /// Create an adapter over an existing client.
    pub fn new(client: CorrectionClient) -> Self {
        Self { client }
    }

    /// Create an adapter with the default server configuration.
    pub fn default_model() -> Result<Self, CorrectionError> {
        Ok(Self::new(CorrectionClient::default_client()?))
    }
}

#[async_trait]
impl TextCorrector for CorrectionModel {
    async fn correct(&self, text: &str) -> Result<String, CorrectionError> {
        let request = CorrectRequest {
            text: text.to_string(),
            max_tokens: MAX_SEQUENCE_TOKENS,
        };

        let response = self.client.correct(request).await?;
        let cleaned = strip_special_markers(&response.corrected);
        debug!(chars = cleaned.chars().count(), "correction model replied");
        Ok(cleaned)
    }
}

/// Remove tokenizer markers and collapse the whitespace they leave behind.
fn strip_special_markers(text: &str) -> String {
    let mut cleaned = text.to_string();
    for marker in SPECIAL_MARKERS {
        cleaned = cleaned.replace(marker, " ");
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_special_markers() {
        assert_eq!(
            strip_special_markers("[CLS] take paracetamol [SEP] [PAD] [PAD]"),
            "take paracetamol"
        );
    }

    #[test]
    fn test_strip_keeps_plain_text() {
        assert_eq!(
            strip_special_markers("take paracetamol twice daily"),
            "take paracetamol twice daily"
        );
    }

    #[test]
    fn test_strip_embedded_marker() {
        assert_eq!(
            strip_special_markers("take[MASK]paracetamol"),
            "take paracetamol"
        );
    }

    #[test]
    fn test_model_creation() {
        assert!(CorrectionModel::default_model().is_ok());
    }
}
