//! Palette loading error types

use thiserror::Error;

/// Errors that can occur while preparing a palette sampler.
///
/// The mapping operations themselves are total and never fail; only loading a
/// palette bitmap can.
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Palette image has zero width or height")]
    EmptyPalette,
}
