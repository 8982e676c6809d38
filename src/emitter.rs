//! The moving point source that casts a fixed fan of rays each frame.

use glam::Vec2;

use crate::trace::Ray;
use crate::world::Wall;

/// Default fan: one ray every 10°, all the way around (0°–350°).
pub const DEFAULT_RAY_COUNT: usize = 36;
pub const DEFAULT_RAY_STEP: f32 = std::f32::consts::TAU / DEFAULT_RAY_COUNT as f32;

/// Point emitter with a fixed angular fan.
///
/// The fan directions are derived once, at construction; updating the
/// position translates ray origins and nothing else, so angles never drift
/// across frames.
#[derive(Clone, Debug)]
pub struct Emitter {
    pos: Vec2,
    dirs: Vec<Vec2>, // unit directions, fixed for the emitter's lifetime
}

impl Emitter {
    /// Emitter at `pos` with the default 36-ray fan.
    pub fn new(pos: Vec2) -> Self {
        Self::with_fan(pos, DEFAULT_RAY_COUNT, DEFAULT_RAY_STEP)
    }

    /// `count` rays starting at angle 0, spaced `step` radians apart.
    pub fn with_fan(pos: Vec2, count: usize, step: f32) -> Self {
        let dirs = (0..count)
            .map(|i| Vec2::from_angle(i as f32 * step))
            .collect();
        Self { pos, dirs }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn ray_count(&self) -> usize {
        self.dirs.len()
    }

    /// Overwrite the position (typically the pointer, once per frame).
    pub fn move_to(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    /// Rays anchored at the current position, in fan order.
    pub fn rays(&self) -> impl Iterator<Item = Ray> + '_ {
        self.dirs.iter().map(|&dir| Ray::new(self.pos, dir))
    }

    /// Per ray, in fan order: the nearest wall point struck, if any.
    ///
    /// Pure in `self` and `walls`; scanning twice without moving yields
    /// identical results.
    pub fn scan(&self, walls: &[Wall]) -> Vec<Option<Vec2>> {
        self.rays().map(|ray| ray.nearest_hit(walls)).collect()
    }
}

/*====================================================================*/
/*                                Tests                               */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::WorldRecipe;
    use glam::vec2;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn default_fan_covers_the_full_circle() {
        let emitter = Emitter::new(Vec2::ZERO);
        assert_eq!(emitter.ray_count(), 36);
        for (i, ray) in emitter.rays().enumerate() {
            let want = Vec2::from_angle((i as f32 * 10.0).to_radians());
            assert!((ray.dir.length() - 1.0).abs() < 1e-5);
            assert!(
                (ray.dir - want).length() < 1e-5,
                "ray {i} points {} instead of {want}",
                ray.dir
            );
        }
    }

    #[test]
    fn scan_reports_one_entry_per_ray_in_fan_order() {
        // A short wall due east: ray 0 hits, every other fan angle passes
        // wide of it (the 10° neighbours already cross x = 5 at |y| ≈ 0.88).
        let emitter = Emitter::new(Vec2::ZERO);
        let walls = [Wall::from_coords(5.0, -0.5, 5.0, 0.5)];
        let hits = emitter.scan(&walls);
        assert_eq!(hits.len(), 36);
        assert!((hits[0].expect("eastward ray") - vec2(5.0, 0.0)).length() < 1e-5);
        assert!(hits[1..].iter().all(Option::is_none));
    }

    #[test]
    fn scanning_twice_yields_identical_results() {
        let walls = WorldRecipe::default()
            .build(&mut StdRng::seed_from_u64(11))
            .unwrap();
        let emitter = Emitter::new(vec2(300.0, 300.0));
        assert_eq!(emitter.scan(&walls), emitter.scan(&walls));
    }

    #[test]
    fn moving_translates_origins_but_not_directions() {
        let mut emitter = Emitter::new(Vec2::ZERO);
        let before: Vec<_> = emitter.rays().map(|r| r.dir).collect();

        emitter.move_to(vec2(120.0, -40.0));
        assert_eq!(emitter.pos(), vec2(120.0, -40.0));

        let after: Vec<_> = emitter.rays().map(|r| r.dir).collect();
        assert_eq!(before, after);
        assert!(emitter.rays().all(|r| r.origin == vec2(120.0, -40.0)));
    }

    #[test]
    fn custom_fans_honour_count_and_step() {
        let emitter = Emitter::with_fan(Vec2::ZERO, 4, 90f32.to_radians());
        let dirs: Vec<_> = emitter.rays().map(|r| r.dir).collect();
        assert_eq!(dirs.len(), 4);
        assert!((dirs[1] - vec2(0.0, 1.0)).length() < 1e-5);
        assert!((dirs[2] - vec2(-1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn emitter_inside_a_framed_world_sees_every_direction() {
        // The frame closes the world, so no ray can escape.
        let walls = WorldRecipe::default()
            .build(&mut StdRng::seed_from_u64(5))
            .unwrap();
        let emitter = Emitter::new(vec2(300.0, 300.0));
        assert!(emitter.scan(&walls).iter().all(Option::is_some));
    }
}
