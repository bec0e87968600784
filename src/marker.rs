//! The draggable marker: a round handle that shows the picked color, grows
//! while a drag is underway, and animates its size changes in fixed-interval
//! steps.
//!
//! Nothing in here schedules its own timers. The host event loop calls
//! [`Marker::tick`] once per refresh interval and every piece of deferred
//! work (animation steps, the redraw loop, the delayed stop) advances inside
//! that call, one atomic step at a time.

use log::trace;

use crate::color::Srgb;
use crate::geometry::{Point, Vector};
use crate::surface::{Damage, Surface};
use crate::Component;

/// Factor by which the marker grows while it is being dragged.
const ZOOM_FACTOR: Component = 1.2;

/// Duration of the grow and shrink animations, in milliseconds.
const ZOOM_MS: u64 = 100;

/// Width of the white outline drawn around the handle.
const OUTLINE_WIDTH: Component = 2.0;

/// An in-flight size animation: the diameter the marker is heading to and
/// the time left to get there. Replacing this value is how a newer
/// animation cancels an older one.
#[derive(Clone, Copy, Debug)]
struct Animation {
    target_diameter: Component,
    remaining_ms: u64,
}

/// The visual handle indicating the currently picked point and color.
pub struct Marker<S: Surface> {
    surface: S,
    position: Point,
    fill: Srgb,
    diameter: Component,
    /// The diameter to restore on unzoom. `Some` exactly while zoomed.
    unzoomed_diameter: Option<Component>,
    nudged: bool,
    refresh_ms: u64,
    animation: Option<Animation>,
    damage: Damage,
    drawing: bool,
    stop_requested: bool,
}

impl<S: Surface> Marker<S> {
    /// Create a marker drawing into its own overlay surface.
    pub fn new(
        surface: S,
        position: Point,
        diameter: Component,
        fill: Srgb,
        refresh_ms: u64,
    ) -> Self {
        Self {
            surface,
            position,
            fill,
            diameter,
            unzoomed_diameter: None,
            nudged: false,
            refresh_ms: refresh_ms.max(1),
            animation: None,
            damage: Damage::MARKER,
            drawing: false,
            stop_requested: false,
        }
    }

    /// The position the marker points at.
    pub fn position(&self) -> Point {
        self.position
    }

    /// The color the handle is filled with.
    pub fn fill(&self) -> Srgb {
        self.fill
    }

    /// The current visual diameter of the handle.
    pub fn diameter(&self) -> Component {
        self.diameter
    }

    /// Half the current diameter.
    pub fn radius(&self) -> Component {
        self.diameter / 2.0
    }

    /// Whether a zoom is currently active.
    pub fn is_zoomed(&self) -> bool {
        self.unzoomed_diameter.is_some()
    }

    /// Whether a size animation is still in flight.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether the per-tick redraw loop is running.
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// The surface the marker paints into.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Move the handle. The next repaint shows it at the new position.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
        self.damage |= Damage::MARKER;
    }

    /// Change the handle's fill color. The next repaint shows it.
    pub fn set_fill(&mut self, fill: Srgb) {
        self.fill = fill;
        self.damage |= Damage::MARKER;
    }

    /// Resize the handle. Repainting keeps the circle centered on the
    /// marker position.
    pub fn set_diameter(&mut self, diameter: Component) {
        self.diameter = diameter;
        self.damage |= Damage::MARKER;
    }

    /// Grow the handle to 1.2 times its resting diameter, animated. The
    /// first call of a gesture remembers the resting size; repeat calls
    /// keep that first value, so zooming is stable over a whole drag. With
    /// `nudge` the handle is also lifted above the pointer by one radius.
    pub fn zoom(&mut self, nudge: bool) {
        // While a shrink from the previous gesture is still in flight the
        // current diameter is transient; the size the marker was heading to
        // is the real resting size.
        let resting = self
            .animation
            .map(|animation| animation.target_diameter)
            .unwrap_or(self.diameter);
        let unzoomed = *self.unzoomed_diameter.get_or_insert(resting);

        if self.nudged != nudge {
            self.nudged = nudge;
            self.damage |= Damage::MARKER;
        }

        self.animate_to(unzoomed * ZOOM_FACTOR / 2.0, ZOOM_MS);
    }

    /// Shrink back to the diameter remembered by [`Marker::zoom`], animated,
    /// and forget it. Does nothing if no zoom is active.
    pub fn unzoom(&mut self) {
        let Some(unzoomed) = self.unzoomed_diameter.take() else {
            return;
        };

        self.nudged = false;
        self.damage |= Damage::MARKER;
        self.animate_to(unzoomed / 2.0, ZOOM_MS);
    }

    /// Animate the handle's radius to `target_radius` over `duration_ms`.
    /// Any animation already in flight is cancelled outright; the most
    /// recent caller owns the marker's size. A zero duration jumps to the
    /// target immediately.
    pub fn animate_to(&mut self, target_radius: Component, duration_ms: u64) {
        if duration_ms == 0 {
            self.animation = None;
            self.set_diameter(target_radius * 2.0);
            return;
        }

        trace!("marker animating to radius {target_radius} over {duration_ms}ms");
        self.animation = Some(Animation {
            target_diameter: target_radius * 2.0,
            remaining_ms: duration_ms,
        });
    }

    /// Start repainting the handle on every tick.
    pub fn start_draw(&mut self) {
        self.drawing = true;
        self.stop_requested = false;
    }

    /// Request the per-tick repainting to stop. The request is honored on
    /// the first tick with no animation in flight, so the final animation
    /// frame is never clipped.
    pub fn stop_draw(&mut self) {
        self.stop_requested = true;
    }

    /// Advance one refresh interval: step the animation, repaint if the
    /// redraw loop is active and something changed, then honor a pending
    /// stop request once no animation remains.
    pub fn tick(&mut self) {
        self.step_animation();

        if self.drawing && !self.damage.is_empty() {
            self.draw();
        }

        if self.stop_requested && self.animation.is_none() {
            self.drawing = false;
            self.stop_requested = false;
        }
    }

    /// Repaint the handle: a filled disc with a white outline, centered on
    /// the marker position (lifted by one radius while nudged).
    pub fn draw(&mut self) {
        self.surface.clear();

        let center = self.draw_center();
        self.surface.fill_circle(center, self.radius(), self.fill);
        self.surface
            .stroke_circle(center, self.radius(), OUTLINE_WIDTH, Srgb::new(1.0, 1.0, 1.0));

        self.damage = Damage::empty();
    }

    fn draw_center(&self) -> Point {
        if self.nudged {
            self.position - Vector::new(0.0, self.radius())
        } else {
            self.position
        }
    }

    /// One animation step. The step size is recomputed from the remaining
    /// time every tick, so rounding error shrinks as the animation
    /// approaches its end; the final step lands on the target exactly.
    fn step_animation(&mut self) {
        let Some(Animation {
            target_diameter,
            remaining_ms,
        }) = self.animation
        else {
            return;
        };

        if remaining_ms <= self.refresh_ms {
            self.animation = None;
            self.set_diameter(target_diameter);
            return;
        }

        let steps = remaining_ms.div_ceil(self.refresh_ms);
        let step = ((target_diameter - self.diameter) / steps as Component).round();

        self.animation = Some(Animation {
            target_diameter,
            remaining_ms: remaining_ms - self.refresh_ms,
        });
        self.set_diameter(self.diameter + step);
    }
}
