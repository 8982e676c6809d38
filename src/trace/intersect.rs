//! Ray–wall intersection and nearest-hit selection.
//!
//! The [`Ray`] struct itself lives in `ray.rs`; the geometric queries are
//! implemented here.

use glam::{Vec2, vec2};

use crate::trace::Ray;
use crate::world::Wall;

impl Ray {
    /// Unique intersection of this ray with `wall`, if any.
    ///
    /// Solves the two-line parametric form
    /// (<https://en.wikipedia.org/wiki/Line%E2%80%93line_intersection>)
    /// where `t` parametrises the wall and `u` the ray.  A hit requires
    /// `0 < t < 1` (strictly inside the wall, endpoints excluded) and
    /// `u > 0` (strictly ahead of the origin; the ray is infinite, not a
    /// finite cast, so `u` has no upper bound).
    pub fn cast(&self, wall: &Wall) -> Option<Vec2> {
        let (x1, y1) = (wall.a.x, wall.a.y);
        let (x2, y2) = (wall.b.x, wall.b.y);
        let (x3, y3) = (self.origin.x, self.origin.y);
        let (x4, y4) = (x3 + self.dir.x, y3 + self.dir.y);

        // Parallel or coincident lines share a zero determinant, as do
        // zero-length walls.  Exact comparison on purpose: near-parallel
        // pairs still intersect, however far out the point lands.
        let den = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
        if den == 0.0 {
            return None;
        }

        let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / den;
        let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / den;

        (t > 0.0 && t < 1.0 && u > 0.0)
            .then(|| vec2(x1 + t * (x2 - x1), y1 + t * (y2 - y1)))
    }

    /// Closest struck point across `walls`, by Euclidean distance from the
    /// ray origin.  Squared distance keeps the same ordering and skips the
    /// square root; the strict `<` lets the earliest wall in slice order
    /// win ties.
    pub fn nearest_hit(&self, walls: &[Wall]) -> Option<Vec2> {
        let mut record = f32::INFINITY;
        let mut closest = None;
        for wall in walls {
            if let Some(pt) = self.cast(wall) {
                let d = self.origin.distance_squared(pt);
                if d < record {
                    record = d;
                    closest = Some(pt);
                }
            }
        }
        closest
    }
}

/*====================================================================*/
/*                                Tests                               */
/*====================================================================*/
