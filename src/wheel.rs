//! The drag controller: wires pointer gestures, the spectrum, and the marker
//! together and keeps the host input in step with the picked color.
//!
//! One controller instance owns one widget's state; nothing is shared
//! between instances and nothing is wired up implicitly. The host constructs
//! a controller per mount point, forwards its normalized pointer events, and
//! calls [`ColorWheel::tick`] on the refresh interval.

use log::{debug, trace};

use crate::boundary::Resolved;
use crate::color::Srgb;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::marker::Marker;
use crate::spectrum::Spectrum;
use crate::surface::{Damage, Surface};
use crate::Component;

/// The host text input that stores the picked color and receives the
/// notifications.
pub trait HostInput {
    /// The current textual value of the input.
    fn value(&self) -> String;

    /// Replace the input's value with a `#rrggbb` string.
    fn set_value(&mut self, value: &str);

    /// Dispatch the continuous notification, fired on every intermediate
    /// color change while dragging.
    fn emit_input(&mut self);

    /// Dispatch the committed notification, fired once per gesture that
    /// ended on a color different from the one it started on.
    fn emit_change(&mut self);
}

/// One normalized pointer or touch event. Capture layers collapse mouse and
/// touch activity into this shape before it reaches the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// The pointer position, in the host's absolute coordinates.
    pub position: Point,
    /// How many contact points the gesture currently has. Mouse events are
    /// always a single contact.
    pub contacts: u32,
}

impl PointerEvent {
    /// A single-contact event at the given absolute position.
    pub fn new(x: Component, y: Component) -> Self {
        Self {
            position: Point::new(x, y),
            contacts: 1,
        }
    }

    /// The same event with a different contact count.
    pub fn with_contacts(mut self, contacts: u32) -> Self {
        self.contacts = contacts;
        self
    }
}

/// How the size of the wheel's center hole is specified.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InnerSize {
    /// The hole's diameter as a ratio of the outer diameter, in `[0, 1]`.
    Ratio(Component),
    /// The hole's diameter in surface units.
    Diameter(Component),
}

/// Recognized construction options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Options {
    /// Outer diameter of the wheel. Derived from the spectrum surface's
    /// size when absent.
    pub outer_diameter: Option<Component>,
    /// Size of the center hole.
    pub inner_size: InnerSize,
    /// Resting diameter of the marker handle.
    pub marker_diameter: Component,
    /// The refresh interval driving animations and the redraw loop, in
    /// milliseconds.
    pub refresh_interval_ms: u64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            outer_diameter: None,
            inner_size: InnerSize::Ratio(0.15),
            marker_diameter: 50.0,
            refresh_interval_ms: 30,
        }
    }
}

/// The drag session. Knowing the color the gesture started on is exactly
/// what an active session consists of; it is what the committed color is
/// diffed against when the gesture ends.
#[derive(Clone, Copy, Debug, PartialEq)]
enum DragState {
    Idle,
    Dragging { start_color: Srgb },
}

/// An annular color picker bound to a host input.
pub struct ColorWheel<S: Surface, H: HostInput> {
    spectrum: Spectrum<S>,
    marker: Marker<S>,
    input: H,
    state: DragState,
    damage: Damage,
}

impl<S: Surface, H: HostInput> ColorWheel<S, H> {
    /// Create a picker over the two drawing layers and the host input.
    ///
    /// The input's current value must be a `#RRGGBB` color; it decides where
    /// the marker starts. All option violations are reported before any
    /// state is touched, so a failed construction leaves nothing behind.
    pub fn new(spectrum_surface: S, marker_surface: S, input: H, options: Options) -> Result<Self> {
        let Options {
            outer_diameter,
            inner_size,
            marker_diameter,
            refresh_interval_ms,
        } = options;

        if !marker_diameter.is_finite() || marker_diameter <= 0.0 {
            return Err(Error::InvalidDiameter(marker_diameter));
        }
        if refresh_interval_ms == 0 {
            return Err(Error::InvalidRefreshInterval);
        }

        let color = Srgb::from_hex(&input.value())?;

        let rect = spectrum_surface.bounding_rect();
        let outer_diameter =
            outer_diameter.unwrap_or_else(|| rect.size.width.max(rect.size.height));
        let inner_diameter = match inner_size {
            InnerSize::Ratio(ratio) => {
                if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
                    return Err(Error::InvalidDiameterRatio(ratio));
                }
                outer_diameter * ratio
            }
            InnerSize::Diameter(diameter) => diameter,
        };

        let spectrum = Spectrum::new(spectrum_surface, outer_diameter, inner_diameter)?;
        let position = spectrum.position_of(color);
        let marker = Marker::new(
            marker_surface,
            position,
            marker_diameter,
            color,
            refresh_interval_ms,
        );

        debug!(
            "color wheel created: outer diameter {outer_diameter}, inner diameter \
             {inner_diameter}, starting on #{}",
            color.to_hex()
        );

        let mut wheel = Self {
            spectrum,
            marker,
            input,
            state: DragState::Idle,
            damage: Damage::all(),
        };
        wheel.draw();
        Ok(wheel)
    }

    /// The spectrum layer.
    pub fn spectrum(&self) -> &Spectrum<S> {
        &self.spectrum
    }

    /// The marker layer.
    pub fn marker(&self) -> &Marker<S> {
        &self.marker
    }

    /// The host input the picker is bound to.
    pub fn input(&self) -> &H {
        &self.input
    }

    /// The currently picked color.
    pub fn color(&self) -> Srgb {
        self.marker.fill()
    }

    /// Whether a gesture is underway.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Repaint damaged layers. The spectrum gradient is only ever redrawn
    /// through here.
    pub fn draw(&mut self) {
        if self.damage.contains(Damage::SPECTRUM) {
            self.spectrum.draw();
        }
        self.damage = Damage::empty();
        self.marker.draw();
    }

    /// Advance one refresh interval of cooperative work: animation steps and
    /// the marker redraw loop.
    pub fn tick(&mut self) {
        self.marker.tick();
    }

    /// A gesture starts: remember the color to diff against, pick the color
    /// under the pointer, and begin repainting the marker every tick.
    /// Gestures with more than one contact point are ignored entirely.
    pub fn pointer_down(&mut self, event: PointerEvent) {
        if event.contacts != 1 {
            return;
        }

        let start_color = self.marker.fill();
        self.marker.start_draw();
        self.apply(self.to_local(event.position));
        self.state = DragState::Dragging { start_color };

        debug!("drag started on #{}", start_color.to_hex());
    }

    /// The pointer moved: pick the color under it and, from the first
    /// movement on, keep the marker zoomed. The nudge lifting the handle
    /// above the pointer only applies while the pointer is on the ring.
    /// Zooming here rather than on pointer-down is what keeps a tap that
    /// never moves from zooming at all.
    pub fn pointer_move(&mut self, event: PointerEvent) {
        if event.contacts != 1 {
            return;
        }
        if !matches!(self.state, DragState::Dragging { .. }) {
            return;
        }

        let resolved = self.apply(self.to_local(event.position));
        self.marker.zoom(resolved.inside);
    }

    /// The gesture ended: shrink the marker back, let the redraw loop wind
    /// down, and notify the host once if the gesture settled on a new color.
    pub fn pointer_up(&mut self) {
        let DragState::Dragging { start_color } =
            std::mem::replace(&mut self.state, DragState::Idle)
        else {
            return;
        };

        self.marker.unzoom();
        self.marker.stop_draw();

        let fill = self.marker.fill();
        if fill.same_hex(&start_color) {
            debug!("drag ended without a net color change");
        } else {
            debug!("drag committed #{}", fill.to_hex());
            self.input.emit_change();
        }
    }

    /// A cancelled gesture ends exactly like a completed one.
    pub fn pointer_cancel(&mut self) {
        self.pointer_up();
    }

    /// Move the marker to the resolved position, take the spectrum's color
    /// there, and keep the host input in step. The continuous notification
    /// fires whenever the color moved to differs from the marker's previous
    /// one.
    fn apply(&mut self, point: Point) -> Resolved {
        let previous = self.marker.fill();
        let resolved = self.spectrum.resolve(point);

        self.marker.set_position(resolved.point);
        self.marker.set_fill(resolved.color);

        if !resolved.color.same_hex(&previous) {
            let value = resolved.color.to_hex_string();
            trace!("picked {value}");
            self.input.set_value(&value);
            self.input.emit_input();
        }

        resolved
    }

    /// Translate an absolute pointer position into surface-local
    /// coordinates.
    fn to_local(&self, position: Point) -> Point {
        position - self.spectrum.surface().bounding_rect().origin.to_vector()
    }
}
