//! colorwheel renders an annular hue/lightness spectrum and lets a pointer
//! drag a marker over it to pick a color, keeping a host input field in sync
//! with the picked value.
//!
//! The engine is backend-agnostic: drawing goes through the [`Surface`]
//! trait (a software [`Raster`] implementation is included), the host input
//! through [`HostInput`], and pointer capture hands the controller plain
//! [`PointerEvent`] values. All timing is cooperative; the host calls
//! [`ColorWheel::tick`] on a fixed refresh interval.

#![deny(missing_docs)]

mod boundary;
mod color;
mod error;
mod geometry;
mod marker;
mod raster;
mod spectrum;
mod surface;
mod wheel;


pub use boundary::Resolved;
pub use color::{Component, Components, Hsl, Srgb};
pub use error::{Error, Result};
pub use geometry::{Annulus, Point, Vector};
pub use marker::Marker;
pub use raster::Raster;
pub use spectrum::Spectrum;
pub use surface::{Damage, GradientStop, Surface};
pub use wheel::{ColorWheel, HostInput, InnerSize, Options, PointerEvent};
