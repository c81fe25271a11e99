//! Recognition pipeline
//!
//! Wires preprocessing, extraction, matching, correction, and scoring into
//! the single `recognize` operation the surrounding system calls.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use image::GrayImage;
use tracing::{debug, warn};

use crate::confidence;
use crate::error::{CorrectionError, ExtractionError, PipelineError};
use crate::matcher::VocabularyMatcher;
use crate::preprocess::preprocess_image;
use crate::types::PredictionResult;
use crate::vocabulary::Vocabulary;

/// OCR text shorter than this always goes through correction, even when the
/// raw-text pass already matched a drug.
const CORRECTION_TRIGGER_CHARS: usize = 20;

/// Optical character recognition capability.
///
/// Implementations receive the binarized image and return the recognized
/// characters, possibly none. Returning an empty string is not an error;
/// the pipeline handles that case itself.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, image: &GrayImage) -> Result<String, ExtractionError>;
}

/// Masked-token correction capability.
///
/// Implementations take the trimmed OCR text and return a corrected
/// rendering. Errors are absorbed by the pipeline, never propagated.
#[async_trait]
pub trait TextCorrector: Send + Sync {
    async fn correct(&self, text: &str) -> Result<String, CorrectionError>;
}

/// The recognition pipeline.
///
/// Constructed once with the process-wide capability handles and the shared
/// vocabulary; `recognize` is safe to call concurrently.
pub struct PredictionPipeline {
    extractor: Arc<dyn TextExtractor>,
    corrector: Arc<dyn TextCorrector>,
    matcher: VocabularyMatcher,
}

impl PredictionPipeline {
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        corrector: Arc<dyn TextCorrector>,
        vocabulary: Arc<Vocabulary>,
    ) -> Self {
        Self {
            extractor,
            corrector,
            matcher: VocabularyMatcher::new(vocabulary),
        }
    }

    /// Recognize a photographed prescription.
    ///
    /// # Errors
    /// * [`PipelineError::Decode`] when the bytes are not a readable image.
    /// * [`PipelineError::Extraction`] when the extraction engine fails.
    ///
    /// A failing correction model does not error: the failure is recorded in
    /// `predicted_text` and the result carries the raw-text matches.
    pub async fn recognize(&self, image_bytes: &[u8]) -> Result<PredictionResult, PipelineError> {
        let preprocessed = preprocess_image(image_bytes)?;
        let ocr_text = self.extractor.extract(&preprocessed)?.trim().to_string();
        drop(preprocessed);

        if ocr_text.is_empty() {
            debug!("extraction produced no text");
            return Ok(PredictionResult::empty_extraction());
        }

        let mut found = BTreeSet::new();
        let mut scores = Vec::new();
        self.matcher.scan(&ocr_text, &mut found, &mut scores);

        let needs_correction =
            found.is_empty() || ocr_text.chars().count() < CORRECTION_TRIGGER_CHARS;

        let predicted_text = if needs_correction {
            match self.corrector.correct(&ocr_text).await {
                Ok(corrected) => {
                    let corrected = corrected.trim().to_string();
                    self.matcher.scan(&corrected, &mut found, &mut scores);
                    corrected
                }
                Err(err) => {
                    warn!(error = %err, "correction failed, keeping raw-text matches");
                    format!("[Correction error: {err}]")
                }
            }
        } else {
            String::new()
        };

        let ocr_confidence = confidence::ocr_confidence(&ocr_text);
        let drug_confidence = confidence::drug_confidence(&scores, &found);
        debug!(
            drugs = found.len(),
            ocr_confidence, drug_confidence, "recognition complete"
        );

        Ok(PredictionResult {
            ocr_text,
            predicted_text,
            found_drugs: found.into_iter().collect(),
            ocr_confidence,
            drug_confidence,
        })
    }
}
