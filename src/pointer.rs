//! Pointer state as seen by the vertices.

use kurbo::{Point, Vec2};

/// Read-only view of the pointer for one frame.
pub trait Pointer {
    /// Latest pointer position.
    fn current(&self) -> Point;
    /// `true` while the host is in freehand drawing mode.
    fn is_drawing(&self) -> bool;
    /// `true` while a button is held or a finger is down.
    fn is_touching(&self) -> bool;
    /// Distance covered by the last movement sample.
    fn speed(&self) -> f64;
    /// Per-axis sign of the last movement; components may be zero.
    fn direction(&self) -> Vec2;
}

/// Tracks a single pointer from host input events.
#[derive(Clone, Debug, Default)]
pub struct MouseTracker {
    current: Option<Point>,
    drawing: bool,
    touching: bool,
    speed: f64,
    direction: Vec2,
}

impl MouseTracker {
    pub fn new() -> MouseTracker {
        MouseTracker::default()
    }

    /// Record a new pointer position.
    ///
    /// The first sample only places the pointer; speed and direction come
    /// from the motion between samples.
    pub fn move_to(&mut self, pos: Point) {
        if let Some(prev) = self.current {
            let delta = pos - prev;
            self.speed = delta.hypot();
            self.direction = Vec2::new(sign(delta.x), sign(delta.y));
        }
        self.current = Some(pos);
    }

    /// The pointer did not move this frame.
    ///
    /// Direction is kept so a release right after stopping still launches
    /// the way the pointer was heading.
    pub fn settle(&mut self) {
        self.speed = 0.0;
    }

    pub fn press(&mut self) {
        self.touching = true;
    }

    pub fn lift(&mut self) {
        self.touching = false;
    }

    pub fn set_drawing(&mut self, drawing: bool) {
        self.drawing = drawing;
    }
}

fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

impl Pointer for MouseTracker {
    /// Before the first [`MouseTracker::move_to`] this is `Point::ORIGIN`,
    /// not a real position. Speed stays zero until then, so no vertex
    /// hit-tests against it.
    fn current(&self) -> Point {
        self.current.unwrap_or(Point::ORIGIN)
    }

    fn is_drawing(&self) -> bool {
        self.drawing
    }

    fn is_touching(&self) -> bool {
        self.touching
    }

    fn speed(&self) -> f64 {
        self.speed
    }

    fn direction(&self) -> Vec2 {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_has_no_speed() {
        let mut mouse = MouseTracker::new();
        mouse.move_to(Point::new(10.0, 10.0));
        assert_eq!(mouse.current(), Point::new(10.0, 10.0));
        assert_eq!(mouse.speed(), 0.0);
        assert_eq!(mouse.direction(), Vec2::ZERO);
    }

    #[test]
    fn motion_sets_speed_and_direction() {
        let mut mouse = MouseTracker::new();
        mouse.move_to(Point::new(0.0, 0.0));
        mouse.move_to(Point::new(3.0, -4.0));
        assert_eq!(mouse.speed(), 5.0);
        assert_eq!(mouse.direction(), Vec2::new(1.0, -1.0));

        mouse.move_to(Point::new(3.0, 0.0));
        assert_eq!(mouse.direction(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn settle_keeps_direction() {
        let mut mouse = MouseTracker::new();
        mouse.move_to(Point::ORIGIN);
        mouse.move_to(Point::new(-2.0, 0.0));
        mouse.settle();
        assert_eq!(mouse.speed(), 0.0);
        assert_eq!(mouse.direction(), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn flags() {
        let mut mouse = MouseTracker::new();
        mouse.press();
        mouse.set_drawing(true);
        assert!(mouse.is_touching());
        assert!(mouse.is_drawing());
        mouse.lift();
        assert!(!mouse.is_touching());
    }
}
