//! Image preprocessing module
//!
//! Normalizes uploaded prescription photos for text extraction:
//! - Decode to pixels
//! - Grayscale conversion
//! - Fixed 2x upscale with cubic interpolation
//! - Otsu binarization

use image::imageops::{self, FilterType};
use image::GrayImage;
use imageproc::contrast::{otsu_level, threshold, ThresholdType};

use crate::error::PipelineError;

/// Fixed linear upscale factor applied before binarization.
const SCALE_FACTOR: u32 = 2;

/// Normalize raw image bytes into a strictly two-valued grayscale image.
///
/// # Errors
/// * Returns [`PipelineError::Decode`] when the bytes do not parse as a
///   supported image format. This is fatal to the request.
pub fn preprocess_image(bytes: &[u8]) -> Result<GrayImage, PipelineError> {
    let decoded = image::load_from_memory(bytes).map_err(PipelineError::Decode)?;
    let gray = decoded.to_luma8();

    let scaled = imageops::resize(
        &gray,
        gray.width() * SCALE_FACTOR,
        gray.height() * SCALE_FACTOR,
        FilterType::CatmullRom,
    );

    let level = otsu_level(&scaled);
    Ok(threshold(&scaled, level, ThresholdType::Binary))
}
