//! Obstacle-set assembly.
//!
//! A [`WorldRecipe`] names how many walls each generator strategy
//! contributes; [`WorldRecipe::build`] samples them all from an injected
//! random source so a fixed seed reproduces the exact same layout.

use glam::vec2;
use rand::Rng;
use thiserror::Error;

use crate::world::Wall;

/// Composition recipe for one obstacle set.
///
/// `build` emits walls in a fixed order (loose walls, quads, triangles,
/// frame).  The order carries no meaning of its own, but nearest-hit
/// tie-breaks follow wall order, so it stays stable for reproducibility.
#[derive(Clone, Debug)]
pub struct WorldRecipe {
    /// Viewport extent; random coordinates are sampled from `[0, width)`
    /// and `[0, height)`.
    pub width: f32,
    pub height: f32,
    /// Walls with two independently random endpoints.
    pub loose_walls: usize,
    /// Closed four-wall loops over two random x- and two random y-levels.
    pub quads: usize,
    /// Right triangles over the same kind of sampled levels.
    pub triangles: usize,
    /// Whether the viewport bounding box is added last.
    pub frame: bool,
}

impl Default for WorldRecipe {
    /// 600×600 viewport, 5 loose walls, one quad, one triangle, framed.
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
            loose_walls: 5,
            quads: 1,
            triangles: 1,
            frame: true,
        }
    }
}

/// Rejected recipe values.  Extents come straight from user input (CLI
/// flags), so they are validated here rather than asserted.
#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("viewport must have positive finite extent, got {width}x{height}")]
    BadViewport { width: f32, height: f32 },
}

impl WorldRecipe {
    /// Default recipe scaled to a `width` × `height` viewport.
    pub fn sized(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Sample a full obstacle set.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Wall>, RecipeError> {
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(RecipeError::BadViewport {
                width: self.width,
                height: self.height,
            });
        }

        let mut walls = Vec::with_capacity(self.wall_count());

        for _ in 0..self.loose_walls {
            walls.push(loose_wall(self.width, self.height, rng));
        }
        for _ in 0..self.quads {
            walls.extend(quad(self.width, self.height, rng));
        }
        for _ in 0..self.triangles {
            walls.extend(triangle(self.width, self.height, rng));
        }
        if self.frame {
            walls.extend(frame(self.width, self.height));
        }

        Ok(walls)
    }

    /// Number of walls `build` will emit.
    pub fn wall_count(&self) -> usize {
        self.loose_walls + 4 * self.quads + 3 * self.triangles + if self.frame { 4 } else { 0 }
    }
}

/*──────────────────────── generator strategies ───────────────────────*/

/// One wall between two independent random points.
fn loose_wall<R: Rng + ?Sized>(w: f32, h: f32, rng: &mut R) -> Wall {
    let (x1, x2) = (rng.gen_range(0.0..w), rng.gen_range(0.0..w));
    let (y1, y2) = (rng.gen_range(0.0..h), rng.gen_range(0.0..h));
    Wall::new(vec2(x1, y1), vec2(x2, y2))
}

/// Closed four-wall loop: bottom, top, right, left over two sampled
/// x-levels and two sampled y-levels.  Degenerate sampling (`x1 == x2`)
/// just collapses the loop; nothing guards against it.
fn quad<R: Rng + ?Sized>(w: f32, h: f32, rng: &mut R) -> [Wall; 4] {
    let (x1, x2) = (rng.gen_range(0.0..w), rng.gen_range(0.0..w));
    let (y1, y2) = (rng.gen_range(0.0..h), rng.gen_range(0.0..h));
    [
        Wall::from_coords(x1, y2, x2, y2),
        Wall::from_coords(x1, y1, x2, y1),
        Wall::from_coords(x2, y1, x2, y2),
        Wall::from_coords(x1, y1, x1, y2),
    ]
}

/// Hypotenuse plus two axis-aligned legs, chained into a closed triangle.
fn triangle<R: Rng + ?Sized>(w: f32, h: f32, rng: &mut R) -> [Wall; 3] {
    let (x1, x2) = (rng.gen_range(0.0..w), rng.gen_range(0.0..w));
    let (y1, y2) = (rng.gen_range(0.0..h), rng.gen_range(0.0..h));
    [
        Wall::from_coords(x1, y1, x2, y2),
        Wall::from_coords(x2, y2, x2, y1),
        Wall::from_coords(x2, y1, x1, y1),
    ]
}

/// Viewport bounding box.  The top and left edges sit 1 unit outside the
/// drawable area so they never coincide with the viewport border itself.
fn frame(w: f32, h: f32) -> [Wall; 4] {
    [
        Wall::from_coords(-1.0, -1.0, w, -1.0),
        Wall::from_coords(w, -1.0, w, h),
        Wall::from_coords(w, h, -1.0, h),
        Wall::from_coords(-1.0, h, -1.0, -1.0),
    ]
}

/*====================================================================*/
/*                                Tests                               */
/*====================================================================*/
