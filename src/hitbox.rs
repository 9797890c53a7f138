//! The pointer-overlap region around a draggable vertex.

use kurbo::{Point, Rect, Vec2};

/// What the owner of a [`Hitbox`] should do after a hit test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitEvent {
    /// A pressed pointer overlaps the region.
    Drag,
    /// The pointer left the region, or the hit was ended by hand.
    Release,
    None,
}

/// A rectangle oriented along the strand at one vertex.
///
/// `length` runs along `angle`, `width` across it. The region remembers
/// whether the pointer was inside on the last test so that leaving it can
/// be reported exactly once.
#[derive(Clone, Debug)]
pub struct Hitbox {
    center: Point,
    angle: f64,
    length: f64,
    width: f64,
    hitting: bool,
}

impl Hitbox {
    pub fn new(center: Point, angle: f64, length: f64, width: f64) -> Hitbox {
        Hitbox {
            center,
            angle,
            length,
            width,
            hitting: false,
        }
    }

    /// Recentre the region, picking up the latest thickness.
    pub fn set_coords_by_center(&mut self, center: Point, width: f64) {
        self.center = center;
        self.width = width;
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn is_hitting(&self) -> bool {
        self.hitting
    }

    fn axes(&self) -> (Vec2, Vec2) {
        let along = Vec2::from_angle(self.angle);
        let across = Vec2::new(-along.y, along.x);
        (along, across)
    }

    /// Point-in-region test. Edges count as inside.
    pub fn contains(&self, point: Point) -> bool {
        let (along, across) = self.axes();
        let local = point - self.center;
        local.dot(along).abs() <= 0.5 * self.length && local.dot(across).abs() <= 0.5 * self.width
    }

    /// The four corners, in winding order.
    pub fn corners(&self) -> [Point; 4] {
        let (along, across) = self.axes();
        let a = along * (0.5 * self.length);
        let b = across * (0.5 * self.width);
        [
            self.center - a - b,
            self.center + a - b,
            self.center + a + b,
            self.center - a + b,
        ]
    }

    /// The axis-aligned bounds of the rotated rectangle.
    pub fn bounding_box(&self) -> Rect {
        let [p0, p1, p2, p3] = self.corners();
        Rect::from_points(p0, p1).union_pt(p2).union_pt(p3)
    }

    /// Test the pointer against the region.
    ///
    /// Reports `Drag` on every test where a pressed pointer overlaps, and
    /// `Release` once on the first test after the pointer leaves or lets go.
    pub fn hit_test(&mut self, point: Point, pressed: bool) -> HitEvent {
        if pressed && self.contains(point) {
            self.hitting = true;
            HitEvent::Drag
        } else if self.hitting {
            self.hitting = false;
            HitEvent::Release
        } else {
            HitEvent::None
        }
    }

    /// Force the current hit to end.
    pub fn end_hit(&mut self) -> HitEvent {
        self.hitting = false;
        HitEvent::Release
    }
}
