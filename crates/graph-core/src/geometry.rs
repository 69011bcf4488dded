// File: crates/graph-core/src/geometry.rs
// Summary: Lightweight geometry primitives: pixel points and verb-list paths.

/// A resolved pixel offset on the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PxPoint {
    pub x: f32,
    pub y: f32,
}

impl PxPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One drawing instruction of a [`Path`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathVerb {
    MoveTo(PxPoint),
    LineTo(PxPoint),
    CubicTo { c1: PxPoint, c2: PxPoint, to: PxPoint },
    Close,
}

/// A renderer-agnostic path: an ordered list of verbs. The curve builder
/// produces these; only the renderer converts them to backend paths.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub verbs: Vec<PathVerb>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: PxPoint) {
        self.verbs.push(PathVerb::MoveTo(p));
    }

    pub fn line_to(&mut self, p: PxPoint) {
        self.verbs.push(PathVerb::LineTo(p));
    }

    pub fn cubic_to(&mut self, c1: PxPoint, c2: PxPoint, to: PxPoint) {
        self.verbs.push(PathVerb::CubicTo { c1, c2, to });
    }

    pub fn close(&mut self) {
        self.verbs.push(PathVerb::Close);
    }

    /// Number of curve segments (cubics) in the path.
    pub fn cubic_count(&self) -> usize {
        self.verbs
            .iter()
            .filter(|v| matches!(v, PathVerb::CubicTo { .. }))
            .count()
    }

    /// Endpoint of the last positioned verb, if any.
    pub fn last_point(&self) -> Option<PxPoint> {
        self.verbs.iter().rev().find_map(|v| match v {
            PathVerb::MoveTo(p) | PathVerb::LineTo(p) => Some(*p),
            PathVerb::CubicTo { to, .. } => Some(*to),
            PathVerb::Close => None,
        })
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.verbs.last(), Some(PathVerb::Close))
    }
}
