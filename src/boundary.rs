//! Clamping of pointer positions onto the drawn ring.

use crate::color::Srgb;
use crate::geometry::Point;
use crate::spectrum::Spectrum;
use crate::surface::Surface;

/// The outcome of resolving a pointer position against the spectrum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolved {
    /// The position the marker should move to. Equal to the queried point
    /// when it was on the ring, otherwise the nearest point on a rim.
    pub point: Point,
    /// The spectrum color drawn at [`Resolved::point`].
    pub color: Srgb,
    /// Whether the queried point itself was on the ring.
    pub inside: bool,
}

impl<S: Surface> Spectrum<S> {
    /// Resolve a pointer position to a drawn position and its color.
    ///
    /// The raster's background is black (hex `000000`) and the gradient
    /// never produces black, so sampling black means the pointer left the
    /// ring. Such positions are projected onto the nearest rim and sampled
    /// again, which always lands on a drawn pixel.
    pub fn resolve(&self, point: Point) -> Resolved {
        let color = self.color_at(point);
        if !color.is_black() {
            return Resolved {
                point,
                color,
                inside: true,
            };
        }

        let point = self.ring().snap_to_rim(point);
        Resolved {
            point,
            color: self.color_at(point),
            inside: false,
        }
    }
}
