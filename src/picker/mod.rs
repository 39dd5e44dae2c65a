//! Picker module - maps pointer coordinates onto selectable palette regions

mod error;
mod mapper;
mod sampler;
mod types;

pub use error::PaletteError;
pub use mapper::{approximate_point, clamp_to_wheel, map_to_palette, PaletteSnapshot};
pub use sampler::{ImageSampler, PixelSampler};
pub use types::{CanvasSize, PalettePoint, PaletteShape, SampledPixel};
