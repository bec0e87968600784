//! The annular hue/lightness spectrum and its two coordinate mappings.
//!
//! The forward mapping ([`Spectrum::color_at`]) samples the rendered raster
//! and is the source of truth for what color sits under a pointer, artifacts
//! included. The inverse mapping ([`Spectrum::position_of`]) is closed-form
//! and only used to place the marker on a known color at construction.

use euclid::Angle;

use crate::color::{Hsl, Srgb};
use crate::error::Result;
use crate::geometry::{Annulus, Point, Vector};
use crate::surface::{GradientStop, Surface};
use crate::Component;

/// One degree of hue resolution over the full circle.
const HUE_STEPS: u32 = 360;

/// The annular spectrum: a ring of every hue, running from white on the
/// inner rim to the fully saturated hue on the outer rim.
pub struct Spectrum<S: Surface> {
    surface: S,
    ring: Annulus,
    sector_thickness: Component,
}

impl<S: Surface> Spectrum<S> {
    /// Create a spectrum over the given surface. The ring geometry derives
    /// from the two diameters and is fixed for the spectrum's lifetime.
    pub fn new(surface: S, outer_diameter: Component, inner_diameter: Component) -> Result<Self> {
        let ring = Annulus::new(outer_diameter, inner_diameter)?;

        // One sector per hue degree. This width leaves no visible gap
        // between neighbouring degrees at the outer rim.
        let sector_thickness = (outer_diameter / 100.0).max(1.0);

        Ok(Self {
            surface,
            ring,
            sector_thickness,
        })
    }

    /// The ring geometry of the spectrum.
    pub fn ring(&self) -> &Annulus {
        &self.ring
    }

    /// The surface the spectrum draws into.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Render the gradient: clear the surface, then fill one radial sector
    /// per hue degree, white at the inner rim (lightness 1.0) fading to the
    /// fully saturated hue at the outer rim (lightness 0.5). Drawing twice
    /// produces the same raster.
    pub fn draw(&mut self) {
        self.surface.clear();

        let white = Srgb::new(1.0, 1.0, 1.0);
        for degree in 0..HUE_STEPS {
            let hue = degree as Component;
            let stops = [
                GradientStop {
                    offset: 0.0,
                    color: white,
                },
                GradientStop {
                    offset: 1.0,
                    color: Hsl::new(hue, 1.0, 0.5).to_srgb(),
                },
            ];

            self.surface.fill_gradient_sector(
                self.ring.center(),
                Angle::degrees(hue),
                self.ring.inner_radius(),
                self.ring.outer_radius(),
                self.sector_thickness,
                &stops,
            );
        }
    }

    /// The color drawn at `point`. Anywhere the gradient was not drawn
    /// samples as black.
    pub fn color_at(&self, point: Point) -> Srgb {
        self.surface.sample(point)
    }

    /// The position on the ring where `color` is drawn.
    ///
    /// The hue picks the angle and the lightness the radial distance:
    /// lightness 1.0 sits on the inner rim, 0.5 on the outer rim, and
    /// anything darker clamps to the outer rim because the ring cannot
    /// display it. Saturation has no radial axis on this wheel and does not
    /// participate.
    pub fn position_of(&self, color: Srgb) -> Point {
        let hsl = color.to_hsl();

        let theta = Angle::degrees(hsl.hue);
        let ratio = 1.0 - (2.0 * (hsl.lightness - 0.5)).max(0.0);
        let distance =
            ratio * (self.ring.outer_radius() - self.ring.inner_radius()) + self.ring.inner_radius();

        self.ring.center() + Vector::from_angle_and_length(theta, distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::raster::Raster;

    fn drawn_spectrum() -> Spectrum<Raster> {
        // Outer diameter 400, inner diameter 60: radii 200 and 30.
        let mut spectrum = Spectrum::new(Raster::new(400, 400), 400.0, 60.0).unwrap();
        spectrum.draw();
        spectrum
    }

    fn hue_distance(a: Component, b: Component) -> Component {
        ((a - b + 180.0).rem_euclid(360.0) - 180.0).abs()
    }

    #[test]
    fn ring_geometry_derives_from_the_diameters() {
        let spectrum = drawn_spectrum();
        assert_component_eq!(spectrum.ring().outer_radius(), 200.0);
        assert_component_eq!(spectrum.ring().inner_radius(), 30.0);
    }

    #[test]
    fn outer_rim_shows_each_hue_at_half_lightness() {
        let spectrum = drawn_spectrum();
        let center = spectrum.ring().center();

        for degree in [0, 45, 90, 135, 180, 225, 270, 315] {
            let theta = degree as Component;
            let point = center + Vector::from_angle_and_length(Angle::degrees(theta), 197.0);
            let hsl = spectrum.color_at(point).to_hsl();

            assert!(
                hue_distance(hsl.hue, theta) <= 2.0,
                "hue at {theta}°: {}",
                hsl.hue
            );
            approx::assert_abs_diff_eq!(hsl.lightness, 0.5, epsilon = 0.02);
        }
    }

    #[test]
    fn inner_rim_is_white_regardless_of_angle() {
        let spectrum = drawn_spectrum();
        let center = spectrum.ring().center();

        for degree in [0, 60, 120, 180, 240, 300] {
            let point =
                center + Vector::from_angle_and_length(Angle::degrees(degree as Component), 32.0);
            let hsl = spectrum.color_at(point).to_hsl();
            assert!(
                hsl.lightness >= 0.97,
                "lightness at {degree}°: {}",
                hsl.lightness
            );
        }
    }

    #[test]
    fn outside_the_ring_samples_black() {
        let spectrum = drawn_spectrum();
        let center = spectrum.ring().center();

        assert!(spectrum.color_at(center).is_black());
        assert!(spectrum.color_at(Point::new(0.0, 0.0)).is_black());
        assert!(spectrum.color_at(Point::new(500.0, 200.0)).is_black());
    }

    #[test]
    fn pure_red_sits_on_the_outer_rim_at_angle_zero() {
        let spectrum = drawn_spectrum();
        let position = spectrum.position_of(Srgb::from_hex("#FF0000").unwrap());

        let offset = position - spectrum.ring().center();
        assert_component_eq!(offset.length(), 200.0);
        assert_component_eq!(offset.angle_from_x_axis().radians, 0.0);
    }

    #[test]
    fn lightness_below_one_half_clamps_to_the_outer_rim() {
        let spectrum = drawn_spectrum();
        let dark = spectrum.position_of(Hsl::new(90.0, 1.0, 0.25).to_srgb());
        let pure = spectrum.position_of(Hsl::new(90.0, 1.0, 0.5).to_srgb());
        assert!(dark.distance_to(pure) <= 0.001);
    }

    #[test]
    fn white_sits_on_the_inner_rim() {
        let spectrum = drawn_spectrum();
        let position = spectrum.position_of(Srgb::new(1.0, 1.0, 1.0));
        let offset = position - spectrum.ring().center();
        assert_component_eq!(offset.length(), 30.0);
    }

    #[test]
    fn forward_and_inverse_mappings_round_trip() {
        let spectrum = drawn_spectrum();

        // Interior colors only: exact rim colors live on the outermost pixel
        // edge where sampling falls off the raster.
        for (hue, lightness) in [(30.0, 0.75), (120.0, 0.6), (200.0, 0.9), (310.0, 0.55)] {
            let color = Hsl::new(hue, 1.0, lightness).to_srgb();
            let position = spectrum.position_of(color);

            let sampled = spectrum.color_at(position);
            let position_again = spectrum.position_of(sampled);

            // Within one hue degree of arc plus 8-bit lightness rounding.
            assert!(
                position.distance_to(position_again) <= 5.0,
                "round trip at hue {hue} drifted from {position:?} to {position_again:?}"
            );
        }
    }

    #[test]
    fn drawing_is_idempotent() {
        let mut spectrum = Spectrum::new(Raster::new(200, 200), 200.0, 30.0).unwrap();
        spectrum.draw();
        let first = spectrum.surface().data().to_vec();
        spectrum.draw();
        assert_eq!(spectrum.surface().data(), first.as_slice());
    }
}
