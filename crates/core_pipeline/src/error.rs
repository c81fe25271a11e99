//! Error types for the recognition pipeline

use thiserror::Error;

/// Fatal errors for a single `recognize` call.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The uploaded bytes did not parse as a supported image format.
    /// Surfaced to the caller as a client error, never retried.
    #[error("image decode")]
    Decode(#[source] image::ImageError),

    /// The extraction engine itself failed. Extracting an empty string is
    /// not an error and takes the sentinel path instead.
    #[error("text extraction")]
    Extraction(#[from] ExtractionError),
}

/// Failure inside the text-extraction capability.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ExtractionError {
    message: String,
}

impl ExtractionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure inside the correction capability.
///
/// There is deliberately no conversion into [`PipelineError`]: the
/// orchestrator records the failure in the result record and finishes the
/// request with whatever the raw-text pass already matched.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CorrectionError {
    message: String,
}

impl CorrectionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_error_display() {
        let err = ExtractionError::new("engine missing");
        assert_eq!(err.to_string(), "engine missing");
    }

    #[test]
    fn test_extraction_error_converts_to_pipeline_error() {
        let err: PipelineError = ExtractionError::new("engine missing").into();
        assert!(matches!(err, PipelineError::Extraction(_)));
    }

    #[test]
    fn test_correction_error_display() {
        let err = CorrectionError::new("model offline");
        assert_eq!(err.to_string(), "model offline");
    }
}
