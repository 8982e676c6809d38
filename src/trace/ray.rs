use glam::Vec2;

/// Visibility probe: an infinite half-line from `origin` along `dir`.
///
/// `dir` is unit length when built through [`Ray::from_angle`] and is never
/// recomputed afterwards; moving a probe only ever translates its origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec2,
    pub dir: Vec2, // unit length; angle 0 = +X (east), counter-clockwise
}

impl Ray {
    #[inline]
    pub fn new(origin: Vec2, dir: Vec2) -> Self {
        Self { origin, dir }
    }

    /// Probe anchored at `origin` pointing along `angle` (radians).
    #[inline]
    pub fn from_angle(origin: Vec2, angle: f32) -> Self {
        Self::new(origin, Vec2::from_angle(angle))
    }

    /// Point reached after travelling `t` units from the origin.
    #[inline]
    pub fn at(&self, t: f32) -> Vec2 {
        self.origin + self.dir * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    #[test]
    fn from_angle_yields_unit_directions() {
        for deg in (0..360).step_by(15) {
            let ray = Ray::from_angle(Vec2::ZERO, (deg as f32).to_radians());
            assert!(
                (ray.dir.length() - 1.0).abs() < 1e-5,
                "non-unit dir at {deg}°: {}",
                ray.dir
            );
        }
    }

    #[test]
    fn at_walks_along_the_direction() {
        let ray = Ray::new(vec2(1.0, 2.0), vec2(1.0, 0.0));
        assert_eq!(ray.at(3.0), vec2(4.0, 2.0));
        assert_eq!(ray.at(0.0), ray.origin);
    }
}
