//! Palette coordinate mapper
//!
//! Corrects a raw pointer coordinate so it lands on the selectable region of
//! the active palette. Two strategies, picked by palette shape:
//!
//! - `BitmapMasked`: bisection search between the untrusted candidate and the
//!   surface center, classifying each midpoint by sampled transparency. Needs
//!   no description of the mask's shape beyond the sampler.
//! - `HueWheel`: closed-form radial clamp onto the inscribed circle.
//!
//! Both are total over finite inputs and never fail.

use super::sampler::PixelSampler;
use super::types::{CanvasSize, PalettePoint, PaletteShape};

/// Bisection stops once both bounds are within this many pixels.
const BOUNDARY_TOLERANCE_PX: i32 = 3;

/// Read-only view of the picker state for one mapping call.
///
/// Captured by the host widget per pointer event; the mapper holds no state
/// of its own between calls.
#[derive(Clone, Copy)]
pub struct PaletteSnapshot<'a> {
    pub size: CanvasSize,
    pub shape: PaletteShape,
    pub sampler: &'a dyn PixelSampler,
}

/// Map `candidate` to the nearest coordinate on the selectable palette region.
pub fn map_to_palette(snapshot: &PaletteSnapshot<'_>, candidate: PalettePoint) -> PalettePoint {
    match snapshot.shape {
        PaletteShape::HueWheel => clamp_to_wheel(candidate, snapshot.size),
        PaletteShape::BitmapMasked => {
            // The surface center is the trusted interior reference; the host
            // widget guarantees it samples non-transparent.
            approximate_point(candidate, snapshot.size.center(), snapshot.sampler)
        }
    }
}

/// Bisection search for a point on the valid side of the mask boundary.
///
/// `trusted` must sample non-transparent; that is a caller obligation and is
/// not re-checked here. `untrusted` may be anywhere. The returned point
/// inherits the trusted invariant and lies within
/// [`BOUNDARY_TOLERANCE_PX`] pixels of the true boundary along the segment.
pub fn approximate_point(
    untrusted: PalettePoint,
    trusted: PalettePoint,
    sampler: &dyn PixelSampler,
) -> PalettePoint {
    let mut untrusted = untrusted;
    let mut trusted = trusted;
    let mut steps = 0u32;

    // Each iteration halves the span, so depth is log2(initial / tolerance).
    while truncated_distance(untrusted, trusted) > BOUNDARY_TOLERANCE_PX {
        let mid = untrusted.midpoint(trusted);
        if sampler.sample(mid.x, mid.y).is_fully_transparent() {
            untrusted = mid;
        } else {
            trusted = mid;
        }
        steps += 1;
    }

    tracing::trace!("[PointMapper] Bisection settled in {} steps", steps);
    trusted
}

/// Clamp `point` into the hue wheel inscribed in `size`.
///
/// Points outside the circle are projected onto its boundary along the ray
/// from the center; interior points pass through unchanged. A zero-sized
/// surface degenerates to returning the center.
pub fn clamp_to_wheel(point: PalettePoint, size: CanvasSize) -> PalettePoint {
    let center = size.center();
    let radius = size.wheel_radius();
    let mut dx = point.x - center.x;
    let mut dy = point.y - center.y;
    let r = f64::from(dx * dx + dy * dy).sqrt();
    if r > f64::from(radius) {
        let scale = (f64::from(radius) / r) as f32;
        dx *= scale;
        dy *= scale;
    }
    PalettePoint::new(center.x + dx, center.y + dy)
}

/// Euclidean distance truncated toward zero.
///
/// Truncation (not rounding) is load-bearing: a 3.9 px span already counts as
/// converged, which fixes the exact termination step of the bisection.
fn truncated_distance(a: PalettePoint, b: PalettePoint) -> i32 {
    let dx = (b.x - a.x).abs();
    let dy = (b.y - a.y).abs();
    f64::from(dx * dx + dy * dy).sqrt() as i32
}
