//! Core pipeline for rxscan
//!
//! This crate provides the data structures and processing logic for turning
//! a photographed prescription into recognized text, matched drug names,
//! and confidence scores.

pub mod confidence;
pub mod error;
pub mod matcher;
pub mod ocr;
pub mod pipeline;
pub mod preprocess;
pub mod similarity;
pub mod types;
pub mod vocabulary;

pub use error::{CorrectionError, ExtractionError, PipelineError};
pub use pipeline::{PredictionPipeline, TextCorrector, TextExtractor};
pub use types::PredictionResult;
pub use vocabulary::Vocabulary;
