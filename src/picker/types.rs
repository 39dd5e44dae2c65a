use serde::{Deserialize, Serialize};

/// A coordinate in palette surface space.
///
/// Carries no validity guarantee: it may be a trusted interior point or a raw,
/// unclamped pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PalettePoint {
    pub x: f32,
    pub y: f32,
}

impl PalettePoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Arithmetic midpoint between this point and `other`.
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Size of the palette drawing surface, snapshotted by the host widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center of the surface. Assumed to lie on the drawable palette area.
    pub fn center(&self) -> PalettePoint {
        PalettePoint::new(self.width / 2.0, self.height / 2.0)
    }

    /// Radius of the hue wheel inscribed in this surface.
    pub fn wheel_radius(&self) -> f32 {
        (self.width / 2.0).min(self.height / 2.0)
    }
}

/// Shape of the active palette, selects the correction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteShape {
    /// Selectable region is the opaque part of a palette image.
    BitmapMasked,
    /// Selectable region is the circular hue/saturation wheel.
    HueWheel,
}

/// RGBA color read back from the palette bitmap.
///
/// Full transparency (`a == 0`) encodes "not a selectable color"; every other
/// value is selectable regardless of its RGB content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampledPixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SampledPixel {
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn is_fully_transparent(&self) -> bool {
        self.a == 0
    }
}
