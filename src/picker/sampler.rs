//! Pixel sampling seam between the mapper and the host widget
//!
//! The mapper only ever asks one question of the palette: "what color sits at
//! this coordinate, and is it fully transparent?". `PixelSampler` is that
//! question as a trait; `ImageSampler` answers it from a decoded palette
//! bitmap for hosts that do not keep their own pixel store.

use image::RgbaImage;

use super::error::PaletteError;
use super::types::SampledPixel;

/// Read-only pixel access to the active palette.
pub trait PixelSampler {
    /// Color at surface coordinate `(x, y)`.
    ///
    /// Coordinates outside the palette must report a fully transparent pixel
    /// rather than failing.
    fn sample(&self, x: f32, y: f32) -> SampledPixel;
}

/// Any plain closure can stand in as a sampler.
impl<F> PixelSampler for F
where
    F: Fn(f32, f32) -> SampledPixel,
{
    fn sample(&self, x: f32, y: f32) -> SampledPixel {
        self(x, y)
    }
}

/// Sampler backed by a decoded RGBA palette image.
#[derive(Debug, Clone)]
pub struct ImageSampler {
    pixels: RgbaImage,
}

impl ImageSampler {
    /// Wrap an already-decoded palette image.
    pub fn from_image(pixels: RgbaImage) -> Result<Self, PaletteError> {
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(PaletteError::EmptyPalette);
        }
        tracing::debug!(
            "[ImageSampler] Palette ready ({}x{})",
            pixels.width(),
            pixels.height()
        );
        Ok(Self { pixels })
    }

    /// Decode an encoded palette image (PNG, WebP, ...) into a sampler.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PaletteError> {
        let decoded = image::load_from_memory(bytes)?;
        Self::from_image(decoded.to_rgba8())
    }

    pub fn size(&self) -> (u32, u32) {
        (self.pixels.width(), self.pixels.height())
    }
}

impl PixelSampler for ImageSampler {
    fn sample(&self, x: f32, y: f32) -> SampledPixel {
        if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
            return SampledPixel::TRANSPARENT;
        }
        // Truncate to the containing pixel, matching how the host widget
        // rasterizes pointer positions.
        let (px, py) = (x as u32, y as u32);
        if px >= self.pixels.width() || py >= self.pixels.height() {
            return SampledPixel::TRANSPARENT;
        }
        let p = self.pixels.get_pixel(px, py);
        SampledPixel {
            r: p[0],
            g: p[1],
            b: p[2],
            a: p[3],
        }
    }
}
