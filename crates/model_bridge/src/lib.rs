//! Bridge to the pretrained correction model
//!
//! The masked-token correction model runs in a separate local inference
//! process; this crate provides the HTTP client for that process and the
//! `TextCorrector` implementation the pipeline consumes.

pub mod client;
pub mod correction;

pub use client::{CorrectionClient, CorrectionServerConfig};
pub use correction::CorrectionModel;
