//! Plane geometry for the annular spectrum.

use euclid::default::{Point2D, Vector2D};

use crate::error::{Error, Result};
use crate::Component;

/// A point on the drawing surface. The origin is the top-left corner of the
/// spectrum's bounding square.
pub type Point = Point2D<Component>;

/// A displacement between two surface points.
pub type Vector = Vector2D<Component>;

/// The ring between an inner and outer radius that the spectrum draws its
/// gradient into. Both radii are fixed for the lifetime of the spectrum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Annulus {
    outer_radius: Component,
    inner_radius: Component,
}

impl Annulus {
    /// Create a ring from its two diameters. The outer diameter must be a
    /// positive finite number and strictly larger than the inner diameter.
    pub fn new(outer_diameter: Component, inner_diameter: Component) -> Result<Self> {
        if !outer_diameter.is_finite() || outer_diameter <= 0.0 {
            return Err(Error::InvalidDiameter(outer_diameter));
        }
        if !inner_diameter.is_finite() || inner_diameter < 0.0 {
            return Err(Error::InvalidDiameter(inner_diameter));
        }
        if inner_diameter >= outer_diameter {
            return Err(Error::DegenerateRing {
                inner: inner_diameter,
                outer: outer_diameter,
            });
        }

        Ok(Self {
            outer_radius: outer_diameter / 2.0,
            inner_radius: inner_diameter / 2.0,
        })
    }

    /// The outer radius of the ring.
    pub fn outer_radius(&self) -> Component {
        self.outer_radius
    }

    /// The inner radius of the ring.
    pub fn inner_radius(&self) -> Component {
        self.inner_radius
    }

    /// The center of the ring, which is also the center of its bounding
    /// square.
    pub fn center(&self) -> Point {
        Point::new(self.outer_radius, self.outer_radius)
    }

    /// Whether the given point lies on the ring.
    pub fn contains(&self, point: Point) -> bool {
        let d = (point - self.center()).length();
        d >= self.inner_radius && d <= self.outer_radius
    }

    /// Project a point that left the ring back onto the nearest rim: points
    /// beyond the outer rim are pulled to one unit inside it, points in the
    /// center hole are pushed to one unit outside it. The direction from the
    /// center to the point is preserved; a point exactly on the center has no
    /// direction and falls back to the positive x axis.
    pub fn snap_to_rim(&self, point: Point) -> Point {
        let v = point - self.center();
        let d = v.length();

        let r = if d > self.outer_radius {
            self.outer_radius - 1.0
        } else {
            self.inner_radius + 1.0
        };

        let direction = if d == 0.0 { Vector::new(1.0, 0.0) } else { v / d };
        self.center() + direction * r
    }
}
