use glam::{Vec2, vec2};

/// One impenetrable boundary in the plane (immutable after construction).
///
/// Endpoints are directed `a → b` but nothing downstream depends on the
/// orientation.  A zero-length wall (`a == b`) is tolerated; it simply can
/// never be struck.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wall {
    pub a: Vec2,
    pub b: Vec2,
}

impl Wall {
    #[inline]
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    /// Endpoints given as raw scalars, handy for literal layouts.
    #[inline]
    pub fn from_coords(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::new(vec2(x1, y1), vec2(x2, y2))
    }
}
