// File: crates/graph-core/src/curve.rs
// Summary: Curve builder: cubic Bezier stroke and shadow paths over mapped points.

use crate::geometry::{Path, PxPoint};

/// Shared control X for the segment between two columns: halfway between
/// their X positions. Keeping both control Ys on the endpoints' rows makes
/// each segment's tangent roughly horizontal at the data points.
#[inline]
pub fn half_x(a: PxPoint, b: PxPoint) -> f32 {
    a.x + (b.x - a.x) / 2.0
}

/// Smooth curve through `points` in sequence order: a move to the first
/// point, then one cubic per consecutive pair. L points yield L-1 segments.
pub fn curve_through(points: &[PxPoint]) -> Path {
    let mut path = Path::new();
    if points.is_empty() {
        return path;
    }
    path.move_to(points[0]);
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let cx = half_x(a, b);
        path.cubic_to(PxPoint::new(cx, a.y), PxPoint::new(cx, b.y), b);
    }
    path
}

/// The full stroke: the curve through `points` extended by one last segment
/// out to the `tail` anchor at the canvas edge.
pub fn stroke_path(points: &[PxPoint], tail: PxPoint) -> Path {
    let mut path = curve_through(points);
    if let Some(&last) = points.last() {
        let cx = half_x(last, tail);
        path.cubic_to(PxPoint::new(cx, last.y), PxPoint::new(cx, tail.y), tail);
    }
    path
}

/// The shadow outline: the curve through `points` only (the tail segment is
/// excluded), closed down to the chart floor and back to the left edge.
pub fn shadow_path(points: &[PxPoint], bottom: f32) -> Path {
    let mut path = curve_through(points);
    if let Some(&last) = points.last() {
        path.line_to(PxPoint::new(last.x, bottom));
        path.line_to(PxPoint::new(0.0, bottom));
        path.close();
    }
    path
}
