//! Color models used by the picker: the sRGB color space, the HSL notation,
//! and the `#RRGGBB` hex form stored in the host input.
//!
//! The spectrum only encodes hue (angle) and lightness (radius), so these two
//! models are all the picker ever converts between. Equality between picked
//! colors is always decided on the 8-bit hex projection, because that is the
//! value the host input observes.

use crate::error::{Error, Result};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// A color specified in the sRGB color space, each component in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Srgb {
    /// The red component of the color.
    pub red: Component,
    /// The green component of the color.
    pub green: Component,
    /// The blue component of the color.
    pub blue: Component,
}

impl Srgb {
    /// Create a new color with RGB (red, green, blue) components.
    pub fn new(red: Component, green: Component, blue: Component) -> Self {
        Self { red, green, blue }
    }

    /// Convert a color specified in the sRGB color space to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl(&Components(self.red, self.green, self.blue)).into()
    }

    /// Parse a color from a strict `#RRGGBB` hex string. Hex digits are
    /// accepted in either case; every other shape is rejected.
    pub fn from_hex(value: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(value.to_string());

        let hex = value.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| -> Component {
            // The digits were checked above, so this cannot fail.
            u8::from_str_radix(&hex[range], 16).unwrap_or_default() as Component / 255.0
        };

        Ok(Self::new(channel(0..2), channel(2..4), channel(4..6)))
    }

    /// The 8-bit projection of the color, clamped into gamut.
    pub fn to_bytes(&self) -> [u8; 3] {
        let quantize = |value: Component| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        [quantize(self.red), quantize(self.green), quantize(self.blue)]
    }

    /// Create a color from its 8-bit projection.
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(
            bytes[0] as Component / 255.0,
            bytes[1] as Component / 255.0,
            bytes[2] as Component / 255.0,
        )
    }

    /// The six lowercase hex digits of the color, without a leading `#`.
    pub fn to_hex(&self) -> String {
        let [red, green, blue] = self.to_bytes();
        format!("{red:02x}{green:02x}{blue:02x}")
    }

    /// The form written back to the host input, e.g. `#ff8800`.
    pub fn to_hex_string(&self) -> String {
        format!("#{}", self.to_hex())
    }

    /// Whether two colors project to the same `#RRGGBB` value.
    pub fn same_hex(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }

    /// Whether the color projects to hex `000000`.
    pub fn is_black(&self) -> bool {
        self.to_bytes() == [0, 0, 0]
    }
}

/// A color specified with the HSL notation in the sRGB color space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// The hue angle of the color, in degrees.
    pub hue: Component,
    /// The saturation component of the color, in `[0, 1]`.
    pub saturation: Component,
    /// The lightness component of the color, in `[0, 1]`.
    pub lightness: Component,
}

impl Hsl {
    /// Create a new color with HSL (hue, saturation, lightness) components.
    pub fn new(hue: Component, saturation: Component, lightness: Component) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Convert this color from the HSL notation to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        util::hsl_to_rgb(&Components(self.hue, self.saturation, self.lightness)).into()
    }
}

impl From<Components> for Srgb {
    fn from(value: Components) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<Components> for Hsl {
    fn from(value: Components) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

mod util {
    use super::{Component, Components};

    fn almost_zero(value: Component) -> bool {
        value.abs() <= Component::EPSILON
    }

    fn normalize(value: Component) -> Component {
        if value.is_nan() {
            0.0
        } else {
            value
        }
    }

    fn normalize_hue(hue: Component) -> Component {
        hue.rem_euclid(360.0)
    }

    /// Calculate the hue from RGB components and return it along with the min
    /// and max RGB values. Achromatic colors have no meaningful hue and take
    /// the value 0, which keeps the angle usable for placement on the wheel.
    fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if delta != 0.0 {
            60.0 * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        } else {
            0.0
        };

        (normalize_hue(hue), min, max)
    }

    /// Convert from RGB notation to HSL notation.
    /// <https://drafts.csswg.org/css-color-4/#rgb-to-hsl>
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation =
            if almost_zero(delta) || almost_zero(lightness) || almost_zero(1.0 - lightness) {
                0.0
            } else {
                (max - lightness) / lightness.min(1.0 - lightness)
            };

        Components(hue, saturation, lightness)
    }

    /// Convert from HSL notation to RGB notation.
    /// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = from.map(normalize);

        if saturation <= 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let hue = normalize_hue(hue);

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue / 30.0) % 12.0;
                let a = saturation * lightness.min(1.0 - lightness);
                lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
            }};
        }

        Components(f!(0.0), f!(8.0), f!(4.0))
    }
}
