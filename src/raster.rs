//! A software [`Surface`] backed by an RGBA8 pixel buffer.

use euclid::default::{Rect, Size2D};
use euclid::Angle;
use num_traits::Float;

use crate::color::Srgb;
use crate::geometry::{Point, Vector};
use crate::surface::{GradientStop, Surface};
use crate::Component;

/// Sub-pixel step used when rasterizing shapes. A quarter unit is small
/// enough that rounding to pixel centers leaves no holes in thin bars.
const SAMPLE_STEP: Component = 0.25;

fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Interpolate the gradient `stops` at position `t`. Positions outside the
/// first and last stop clamp to them.
fn gradient_at(stops: &[GradientStop], t: Component) -> Srgb {
    let Some(first) = stops.first() else {
        return Srgb::new(0.0, 0.0, 0.0);
    };
    if t <= first.offset {
        return first.color;
    }

    for pair in stops.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if t <= to.offset {
            let span = to.offset - from.offset;
            let local = if span <= 0.0 { 1.0 } else { (t - from.offset) / span };
            return Srgb::new(
                lerp(from.color.red, to.color.red, local),
                lerp(from.color.green, to.color.green, local),
                lerp(from.color.blue, to.color.blue, local),
            );
        }
    }

    stops[stops.len() - 1].color
}

/// An in-memory pixel buffer, stored as RGBA rows from the top-left corner.
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Create a cleared raster of the given pixel size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA bytes, row by row. Useful for handing the buffer to an
    /// image encoder.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }

    fn put(&mut self, point: Point, color: Srgb) {
        let (x, y) = (point.x.round() as i64, point.y.round() as i64);
        if let Some(i) = self.index(x, y) {
            let [red, green, blue] = color.to_bytes();
            self.data[i] = red;
            self.data[i + 1] = green;
            self.data[i + 2] = blue;
            self.data[i + 3] = 255;
        }
    }
}

impl Surface for Raster {
    fn bounding_rect(&self) -> Rect<Component> {
        Rect::new(
            Point::new(0.0, 0.0),
            Size2D::new(self.width as Component, self.height as Component),
        )
    }

    fn clear(&mut self) {
        self.data.fill(0);
    }

    fn fill_gradient_sector(
        &mut self,
        center: Point,
        angle: Angle<Component>,
        inner: Component,
        outer: Component,
        thickness: Component,
        stops: &[GradientStop],
    ) {
        let direction = Vector::from_angle_and_length(angle, 1.0);
        let normal = Vector::new(-direction.y, direction.x);
        let span = outer - inner;

        let mut r = inner;
        while r <= outer {
            let t = if span <= 0.0 { 1.0 } else { (r - inner) / span };
            let color = gradient_at(stops, t);

            let along = center + direction * r;
            let mut offset = -thickness / 2.0;
            while offset <= thickness / 2.0 {
                self.put(along + normal * offset, color);
                offset += SAMPLE_STEP;
            }

            r += SAMPLE_STEP;
        }
    }

    fn fill_circle(&mut self, center: Point, radius: Component, fill: Srgb) {
        let (min_x, max_x) = ((center.x - radius).floor(), (center.x + radius).ceil());
        let (min_y, max_y) = ((center.y - radius).floor(), (center.y + radius).ceil());

        let mut y = min_y;
        while y <= max_y {
            let mut x = min_x;
            while x <= max_x {
                let p = Point::new(x, y);
                if (p - center).length() <= radius {
                    self.put(p, fill);
                }
                x += 1.0;
            }
            y += 1.0;
        }
    }

    fn stroke_circle(&mut self, center: Point, radius: Component, width: Component, color: Srgb) {
        let reach = radius + width;
        let (min_x, max_x) = ((center.x - reach).floor(), (center.x + reach).ceil());
        let (min_y, max_y) = ((center.y - reach).floor(), (center.y + reach).ceil());

        let mut y = min_y;
        while y <= max_y {
            let mut x = min_x;
            while x <= max_x {
                let p = Point::new(x, y);
                if ((p - center).length() - radius).abs() <= width / 2.0 {
                    self.put(p, color);
                }
                x += 1.0;
            }
            y += 1.0;
        }
    }

    fn sample(&self, point: Point) -> Srgb {
        let (x, y) = (point.x.round() as i64, point.y.round() as i64);
        match self.index(x, y) {
            Some(i) => Srgb::from_bytes([self.data[i], self.data[i + 1], self.data[i + 2]]),
            None => Srgb::new(0.0, 0.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleared_and_out_of_bounds_pixels_sample_black() {
        let mut raster = Raster::new(10, 10);
        assert!(raster.sample(Point::new(5.0, 5.0)).is_black());

        raster.fill_circle(Point::new(5.0, 5.0), 10.0, Srgb::new(1.0, 1.0, 1.0));
        assert!(!raster.sample(Point::new(5.0, 5.0)).is_black());
        assert!(raster.sample(Point::new(-1.0, 5.0)).is_black());
        assert!(raster.sample(Point::new(5.0, 10.0)).is_black());

        raster.clear();
        assert!(raster.sample(Point::new(5.0, 5.0)).is_black());
    }

    #[test]
    fn filled_circles_cover_their_radius_and_no_more() {
        let mut raster = Raster::new(40, 40);
        let center = Point::new(20.0, 20.0);
        raster.fill_circle(center, 8.0, Srgb::new(1.0, 0.0, 0.0));

        assert_eq!(raster.sample(center).to_bytes(), [255, 0, 0]);
        assert_eq!(raster.sample(Point::new(27.0, 20.0)).to_bytes(), [255, 0, 0]);
        assert!(raster.sample(Point::new(30.0, 20.0)).is_black());
    }

    #[test]
    fn stroked_circles_straddle_the_path() {
        let mut raster = Raster::new(40, 40);
        let center = Point::new(20.0, 20.0);
        raster.stroke_circle(center, 10.0, 2.0, Srgb::new(1.0, 1.0, 1.0));

        assert_eq!(raster.sample(Point::new(30.0, 20.0)).to_bytes(), [255; 3]);
        assert!(raster.sample(center).is_black());
        assert!(raster.sample(Point::new(25.0, 20.0)).is_black());
    }

    #[test]
    fn gradient_sectors_interpolate_between_their_stops() {
        let stops = [
            GradientStop {
                offset: 0.0,
                color: Srgb::new(0.0, 0.0, 1.0),
            },
            GradientStop {
                offset: 1.0,
                color: Srgb::new(1.0, 0.0, 1.0),
            },
        ];

        let mut raster = Raster::new(100, 100);
        let center = Point::new(50.0, 50.0);
        raster.fill_gradient_sector(center, Angle::degrees(0.0), 10.0, 40.0, 3.0, &stops);

        // Start, midpoint, and end of the bar along the positive x axis. The
        // sub-pixel overwrites shift interior samples by a fraction of a
        // percent, so interior checks carry a small tolerance.
        let start = raster.sample(Point::new(60.0, 50.0));
        approx::assert_abs_diff_eq!(start.red, 0.0, epsilon = 0.02);
        approx::assert_abs_diff_eq!(start.blue, 1.0, epsilon = 0.02);

        let mid = raster.sample(Point::new(75.0, 50.0));
        approx::assert_abs_diff_eq!(mid.red, 0.5, epsilon = 0.02);
        approx::assert_abs_diff_eq!(mid.blue, 1.0, epsilon = 0.02);

        assert_eq!(
            raster.sample(Point::new(90.0, 50.0)).to_bytes(),
            [255, 0, 255]
        );
        // Off the bar.
        assert!(raster.sample(Point::new(95.0, 50.0)).is_black());
        assert!(raster.sample(Point::new(60.0, 55.0)).is_black());
    }

    #[test]
    fn gradient_positions_clamp_to_the_outermost_stops() {
        let stops = [
            GradientStop {
                offset: 0.25,
                color: Srgb::new(1.0, 0.0, 0.0),
            },
            GradientStop {
                offset: 0.75,
                color: Srgb::new(0.0, 1.0, 0.0),
            },
        ];
        assert_eq!(gradient_at(&stops, 0.0).to_bytes(), [255, 0, 0]);
        assert_eq!(gradient_at(&stops, 1.0).to_bytes(), [0, 255, 0]);
        assert_eq!(gradient_at(&stops, 0.5).to_bytes(), [128, 128, 0]);
    }
}
