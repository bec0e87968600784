//! The drawing-surface capability consumed by the spectrum and the marker.
//!
//! The trait is the seam towards whatever 2D backend hosts the picker. The
//! crate ships [`Raster`](crate::Raster), a software implementation, so the
//! render-then-sample pipeline works without a windowing system.

use bitflags::bitflags;
use euclid::default::Rect;
use euclid::Angle;

use crate::color::Srgb;
use crate::geometry::Point;
use crate::Component;

/// A single stop in a linear gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position of the stop along the gradient, in `[0, 1]`.
    pub offset: Component,
    /// The color at this stop.
    pub color: Srgb,
}

bitflags! {
    /// The layers of the widget that need repainting.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Damage: u8 {
        /// The spectrum gradient must be redrawn.
        const SPECTRUM = 1 << 0;
        /// The marker overlay must be repainted.
        const MARKER = 1 << 1;
    }
}

/// A side-effecting 2D drawing surface.
///
/// Sampling reads back what was previously drawn; a cleared surface samples
/// as black everywhere, as do points outside its bounds. That default is
/// what lets the picker tell "on the ring" apart from "off the ring".
pub trait Surface {
    /// The surface's placement and size, used to translate absolute pointer
    /// coordinates into surface-local ones.
    fn bounding_rect(&self) -> Rect<Component>;

    /// Reset every pixel to the black, fully transparent background.
    fn clear(&mut self);

    /// Fill a radial bar of the given thickness running from distance
    /// `inner` to distance `outer` away from `center`, along the direction
    /// `angle`, colored by the gradient `stops` (offset 0 at `inner`,
    /// offset 1 at `outer`).
    fn fill_gradient_sector(
        &mut self,
        center: Point,
        angle: Angle<Component>,
        inner: Component,
        outer: Component,
        thickness: Component,
        stops: &[GradientStop],
    );

    /// Fill a solid circle.
    fn fill_circle(&mut self, center: Point, radius: Component, fill: Srgb);

    /// Stroke a circle outline of the given line width, straddling the
    /// circle's path.
    fn stroke_circle(&mut self, center: Point, radius: Component, width: Component, color: Srgb);

    /// The color currently drawn at `point`. Out-of-bounds and never-drawn
    /// points are black.
    fn sample(&self, point: Point) -> Srgb;
}
