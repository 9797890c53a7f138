//! A chain of vertices drawn as one smooth curve.

use kurbo::{BezPath, Point};

use crate::pointer::Pointer;
use crate::settings::SpringSettings;
use crate::throttle::{Clock, SystemClock};
use crate::vertex::{HitCallback, Vertex};

/// A straight strand of vertices between two anchors.
///
/// The strand owns the frame ordering: every vertex is rendered before any
/// control point is computed, since control points depend on the updated
/// neighbours.
pub struct Strand<C: Clock = SystemClock> {
    vertices: Vec<Vertex<C>>,
    settings: SpringSettings,
}

impl Strand<SystemClock> {
    pub fn new(
        start: Point,
        end: Point,
        count: usize,
        settings: SpringSettings,
        on_hit: Option<HitCallback>,
    ) -> Strand<SystemClock> {
        Strand::with_clock(start, end, count, settings, on_hit, SystemClock::new())
    }
}

impl<C: Clock + Clone> Strand<C> {
    /// Lay out `count` evenly spaced vertices from `start` to `end`.
    ///
    /// Fewer than two vertices is treated as two. The end vertices are
    /// anchors; every vertex in between is draggable.
    pub fn with_clock(
        start: Point,
        end: Point,
        count: usize,
        settings: SpringSettings,
        on_hit: Option<HitCallback>,
        clock: C,
    ) -> Strand<C> {
        let count = count.max(2);
        let chord = end - start;
        let angle = chord.atan2();
        let segments = (count - 1) as f64;
        let separation = chord.hypot() / segments;
        let vertices = (0..count)
            .map(|i| {
                let pt = start.lerp(end, i as f64 / segments);
                let anchor = i == 0 || i == count - 1;
                Vertex::with_clock(
                    anchor,
                    pt.x,
                    pt.y,
                    angle,
                    separation,
                    on_hit.clone(),
                    settings.hitbox_width,
                    clock.clone(),
                )
            })
            .collect();
        Strand { vertices, settings }
    }
}

impl<C: Clock> Strand<C> {
    pub fn vertices(&self) -> &[Vertex<C>] {
        &self.vertices
    }

    pub fn settings(&self) -> &SpringSettings {
        &self.settings
    }

    /// Takes effect on the next frame.
    pub fn set_settings(&mut self, settings: SpringSettings) {
        self.settings = settings;
    }

    /// Advance every vertex one frame, then refresh the control points.
    ///
    /// The last vertex has no successor; its control point is left as is.
    pub fn render<P: Pointer + ?Sized>(&mut self, pointer: &P) {
        let settings = self.settings;
        for vertex in &mut self.vertices {
            vertex.render(pointer, &settings);
        }
        for i in 1..self.vertices.len() {
            let (head, tail) = self.vertices.split_at_mut(i);
            head[i - 1].set_control_point(&tail[0]);
        }
    }

    /// `true` once nothing is being dragged or springing back.
    pub fn is_at_rest(&self) -> bool {
        self.vertices
            .iter()
            .all(|v| !v.is_lerping() && !v.has_moved())
    }

    /// The strand as a path: quadratic segments through each interior
    /// vertex, ending on the midpoint to its successor.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let n = self.vertices.len();
        if n == 0 {
            return path;
        }
        path.move_to(self.vertices[0].current());
        for vertex in &self.vertices[1..n - 1] {
            path.quad_to(vertex.current(), vertex.control());
        }
        path.line_to(self.vertices[n - 1].current());
        path
    }
}
