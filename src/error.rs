//! Errors reported while constructing a picker. Once construction succeeds
//! the engine has no fallible operations; pointer positions outside the ring
//! are resolved deterministically rather than rejected.

use thiserror::Error;

use crate::Component;

/// The reasons a widget can fail to construct.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// The host input's value is not a `#RRGGBB` hex color string.
    #[error("value must be a valid hex colour string, received: {0}")]
    InvalidColor(String),
    /// The inner/outer diameter ratio is outside the range `[0, 1]`.
    #[error("diameter ratio must be a number in the range [0, 1], received: {0}")]
    InvalidDiameterRatio(Component),
    /// A diameter is zero, negative, or not finite.
    #[error("diameter must be a positive number, received: {0}")]
    InvalidDiameter(Component),
    /// The inner diameter of the ring is not smaller than the outer diameter.
    #[error("inner diameter {inner} must be smaller than outer diameter {outer}")]
    DegenerateRing {
        /// The offending inner diameter.
        inner: Component,
        /// The outer diameter it was checked against.
        outer: Component,
    },
    /// The animation/redraw refresh interval is zero.
    #[error("refresh interval must be at least 1ms")]
    InvalidRefreshInterval,
}

/// Result alias used by all constructors in this crate.
pub type Result<T> = std::result::Result<T, Error>;
