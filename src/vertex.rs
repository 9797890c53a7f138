//! A single draggable, spring-damped point on the strand.

use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use std::time::Duration;

use kurbo::{Point, Vec2};
use log::{debug, trace, warn};

use crate::hitbox::{HitEvent, Hitbox};
use crate::pointer::Pointer;
use crate::settings::SpringSettings;
use crate::throttle::{Clock, SystemClock, Throttle};

/// Notifies the scene that a vertex was plucked.
pub type HitCallback = Rc<dyn Fn()>;

/// Launch speed used when the pointer reports none; also the divisor that
/// scales pointer speed down to a per-frame velocity.
const RELEASE_TOUCH_SPEED: f64 = 50.0;
/// How closely a dragged vertex follows the pointer.
const DRAG_STRENGTH: f64 = 0.8;
/// Below this speed a springing axis snaps back to rest.
const REST_VELOCITY: f64 = 0.01;
const RELEASE_WINDOW: Duration = Duration::from_millis(400);

/// A point on the strand that can be grabbed, dragged, and let go.
///
/// Anchors (the ends of the strand) have no hit region and never move on
/// their own. Every other vertex follows the pointer while it overlaps
/// the vertex's hit region, then springs back to `initial` once released.
pub struct Vertex<C: Clock = SystemClock> {
    current: Point,
    initial: Point,
    control: Point,
    velocity: Vec2,
    hitbox: Option<Hitbox>,
    release_throttle: Throttle<C>,
    on_hit: Option<HitCallback>,
}

impl Vertex<SystemClock> {
    pub fn new(
        anchor: bool,
        x: f64,
        y: f64,
        angle: f64,
        vertex_separation: f64,
        on_hit: Option<HitCallback>,
        hitbox_width: f64,
    ) -> Vertex<SystemClock> {
        Vertex::with_clock(
            anchor,
            x,
            y,
            angle,
            vertex_separation,
            on_hit,
            hitbox_width,
            SystemClock::new(),
        )
    }
}

impl<C: Clock> Vertex<C> {
    /// Like [`Vertex::new`], but with the clock that paces releases.
    #[allow(clippy::too_many_arguments)]
    pub fn with_clock(
        anchor: bool,
        x: f64,
        y: f64,
        angle: f64,
        vertex_separation: f64,
        on_hit: Option<HitCallback>,
        hitbox_width: f64,
        clock: C,
    ) -> Vertex<C> {
        let pt = Point::new(x, y);
        let hitbox = if anchor {
            None
        } else {
            Some(Hitbox::new(pt, angle, vertex_separation, hitbox_width))
        };
        Vertex {
            current: pt,
            initial: pt,
            control: pt,
            velocity: Vec2::ZERO,
            hitbox,
            release_throttle: Throttle::new(RELEASE_WINDOW, clock),
            on_hit,
        }
    }

    pub fn current(&self) -> Point {
        self.current
    }

    pub fn initial(&self) -> Point {
        self.initial
    }

    /// The midpoint towards the next vertex, as of the last
    /// [`set_control_point`](Vertex::set_control_point).
    pub fn control(&self) -> Point {
        self.control
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn hitbox(&self) -> Option<&Hitbox> {
        self.hitbox.as_ref()
    }

    pub fn is_anchor(&self) -> bool {
        self.hitbox.is_none()
    }

    /// `true` while either axis is springing.
    pub fn is_lerping(&self) -> bool {
        self.velocity.x != 0.0 || self.velocity.y != 0.0
    }

    pub fn has_moved(&self) -> bool {
        self.current.x != self.initial.x || self.current.y != self.initial.y
    }

    /// Advance one frame.
    ///
    /// Integrates both axes, then, for draggable vertices, recentres the hit
    /// region and lets the pointer drag or release the vertex.
    pub fn render<P: Pointer + ?Sized>(&mut self, pointer: &P, settings: &SpringSettings) {
        let hitting = self.hitbox.as_ref().map_or(false, Hitbox::is_hitting);
        let SpringSettings {
            viscosity, damping, ..
        } = *settings;
        lerp_axis(
            &mut self.current.x,
            &mut self.velocity.x,
            self.initial.x,
            hitting,
            viscosity,
            damping,
        );
        lerp_axis(
            &mut self.current.y,
            &mut self.velocity.y,
            self.initial.y,
            hitting,
            viscosity,
            damping,
        );

        if self.hitbox.is_none() {
            return;
        }
        let cancelled = self.was_drag_cancelled(pointer);
        let current = self.current;
        let event = match self.hitbox.as_mut() {
            Some(hitbox) => {
                hitbox.set_coords_by_center(current, settings.hitbox_width);
                if !pointer.is_drawing() && is_truthy(pointer.speed()) {
                    hitbox.hit_test(pointer.current(), pointer.is_touching())
                } else if cancelled {
                    hitbox.end_hit()
                } else {
                    HitEvent::None
                }
            }
            None => HitEvent::None,
        };

        match event {
            HitEvent::Drag => self.handle_drag(pointer),
            HitEvent::Release => self.handle_release(pointer),
            HitEvent::None => (),
        }
    }

    /// Set the control point between this and the next vertex.
    ///
    /// The strand is drawn as quadratic curves through these midpoints.
    pub fn set_control_point<D: Clock>(&mut self, next: &Vertex<D>) {
        self.control = Point::new(
            (self.current.x + next.current.x) / 2.0,
            (self.current.y + next.current.y) / 2.0,
        );
    }

    /// A press ended without the hit region noticing the pointer leave,
    /// e.g. the pointer was lifted while still inside.
    ///
    /// Only meaningful for vertices with a hit region.
    fn was_drag_cancelled<P: Pointer + ?Sized>(&self, pointer: &P) -> bool {
        self.hitbox.as_ref().map_or(false, Hitbox::is_hitting)
            && self.has_moved()
            && !self.is_lerping()
            && !pointer.is_drawing()
            && !pointer.is_touching()
    }

    fn handle_drag<P: Pointer + ?Sized>(&mut self, pointer: &P) {
        let pos = pointer.current();
        self.current.x = (pos.x - self.initial.x) * DRAG_STRENGTH + self.initial.x;
        self.current.y = (pos.y - self.initial.y) * DRAG_STRENGTH + self.initial.y;
    }

    fn handle_release<P: Pointer + ?Sized>(&mut self, pointer: &P) {
        if !self.release_throttle.try_fire() {
            trace!("release at {:?} dropped by throttle", self.initial);
            return;
        }
        let speed = pointer.speed();
        let direction = pointer.direction();
        self.velocity = Vec2::new(
            launch_velocity(direction.x, speed),
            launch_velocity(direction.y, speed),
        );
        debug!(
            "released vertex at {:?} with velocity {:?}",
            self.initial, self.velocity
        );
        attempt_call(self.on_hit.as_ref());
    }
}

/// One integration step on one axis.
fn lerp_axis(
    current: &mut f64,
    velocity: &mut f64,
    initial: f64,
    hitting: bool,
    viscosity: f64,
    damping: f64,
) {
    if *velocity < -REST_VELOCITY || *velocity > REST_VELOCITY {
        *velocity *= 1.0 - damping;
        *current += *velocity;
        if !hitting {
            *velocity += (initial - *current) / viscosity;
        }
    } else if *velocity != 0.0 {
        *velocity = 0.0;
        *current = initial;
    }
}

fn launch_velocity(direction: f64, speed: f64) -> f64 {
    let direction = if is_truthy(direction) { direction } else { 1.0 };
    let launch = direction * speed;
    let launch = if is_truthy(launch) {
        launch
    } else {
        RELEASE_TOUCH_SPEED
    };
    launch / RELEASE_TOUCH_SPEED
}

/// Zero and NaN count as "no value".
fn is_truthy(x: f64) -> bool {
    x != 0.0 && !x.is_nan()
}

/// Run the scene callback, swallowing any panic so one bad callback can't
/// stop the frame.
fn attempt_call(callback: Option<&HitCallback>) {
    if let Some(callback) = callback {
        if panic::catch_unwind(AssertUnwindSafe(|| callback())).is_err() {
            warn!("hit callback panicked; ignoring");
        }
    }
}
