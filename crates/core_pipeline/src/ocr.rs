//! OCR module
//!
//! Production [`TextExtractor`] backed by Tesseract (via leptess). The
//! engine is constructed fresh per call: leptess handles are not `Sync`,
//! and per-call construction keeps concurrent `recognize` calls free of
//! shared mutable state.

use image::GrayImage;
use leptess::LepTess;

use crate::error::ExtractionError;
use crate::pipeline::TextExtractor;

/// Text extractor backed by a local Tesseract installation.
#[derive(Debug, Clone)]
pub struct TesseractExtractor {
    language: String,
}

impl TesseractExtractor {
    /// Create an extractor for the given Tesseract language pack.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }
}

impl Default for TesseractExtractor {
    fn default() -> Self {
        Self::new("eng")
    }
}

impl TextExtractor for TesseractExtractor {
    fn extract(&self, image: &GrayImage) -> Result<String, ExtractionError> {
        let mut engine = LepTess::new(None, &self.language).map_err(|e| {
            ExtractionError::new(format!(
                "failed to initialize Tesseract (is it installed?): {e}"
            ))
        })?;

        // leptess wants encoded bytes, not a raw pixel buffer
        let mut png = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut png);
        image
            .write_to(&mut cursor, image::ImageFormat::Png)
            .map_err(|e| ExtractionError::new(format!("failed to encode image as PNG: {e}")))?;

        engine
            .set_image_from_mem(&png)
            .map_err(|e| ExtractionError::new(format!("failed to load image into Tesseract: {e}")))?;

        engine
            .get_utf8_text()
            .map_err(|e| ExtractionError::new(format!("failed to extract text: {e}")))
    }
}
