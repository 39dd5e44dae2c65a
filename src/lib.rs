//! Huepick - palette hit-correction core for color picker surfaces
//!
//! Maps a raw pointer/touch coordinate onto the selectable region of a color
//! palette. Free-form bitmap palettes are handled by a bisection search over
//! the opacity mask; the circular hue/saturation wheel is handled by a
//! closed-form radial clamp. Rendering, event dispatch, and color-space
//! conversion stay with the host widget.

pub mod picker;

pub use picker::{
    approximate_point, clamp_to_wheel, map_to_palette, CanvasSize, ImageSampler, PaletteError,
    PalettePoint, PaletteShape, PaletteSnapshot, PixelSampler, SampledPixel,
};
