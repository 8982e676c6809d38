//! Mouse-driven 2-D visibility viewer.
//!
//! ```bash
//! cargo run --release -- --seed 7
//! ```
//!
//! The emitter follows the pointer; yellow sight lines run from it to the
//! nearest wall point each of its rays strikes.

use clap::Parser;
use glam::vec2;
use minifb::{Key, MouseMode, Window, WindowOptions};
use rand::{SeedableRng, rngs::StdRng};

use lightcast::{Emitter, WorldRecipe};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Opts {
    /// Viewport width in pixels
    #[arg(long, default_value_t = 600)]
    width: usize,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 600)]
    height: usize,

    /// Number of rays in the emitter's fan
    #[arg(long, default_value_t = 36)]
    rays: usize,

    /// Angular spacing between rays, in degrees
    #[arg(long, default_value_t = 10.0)]
    step: f32,

    /// Loose random walls (the quad, triangle and frame are always added)
    #[arg(long, default_value_t = 5)]
    walls: usize,

    /// Obstacle-layout seed; sampled from entropy when omitted
    #[arg(long)]
    seed: Option<u64>,
}

const WALL_COLOUR: u32 = 0x00_FFFFFF;
const SIGHT_COLOUR: u32 = 0x00_FFFF00;

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    let (w, h) = (opts.width, opts.height);

    /*----------- 1. sample the obstacle set -------------------------*/
    let seed = opts.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let recipe = WorldRecipe {
        loose_walls: opts.walls,
        ..WorldRecipe::sized(w as f32, h as f32)
    };
    let walls = recipe.build(&mut rng)?;
    println!("{} walls (seed {seed})", walls.len());

    /*----------- 2. emitter starts at the viewport centre -----------*/
    let mut emitter = Emitter::with_fan(
        vec2(w as f32 / 2.0, h as f32 / 2.0),
        opts.rays,
        opts.step.to_radians(),
    );

    /*----------- 3. frame loop --------------------------------------*/
    let mut window = Window::new("lightcast", w, h, WindowOptions::default())?;
    window.set_target_fps(60);

    let mut buffer = vec![0u32; w * h];

    while window.is_open() && !window.is_key_down(Key::Escape) {
        buffer.fill(0);

        if let Some((mx, my)) = window.get_mouse_pos(MouseMode::Clamp) {
            emitter.move_to(vec2(mx, my));
        }

        for wall in &walls {
            draw_line(
                &mut buffer,
                w,
                h,
                wall.a.x as i32,
                wall.a.y as i32,
                wall.b.x as i32,
                wall.b.y as i32,
                WALL_COLOUR,
            );
        }

        let pos = emitter.pos();
        for hit in emitter.scan(&walls).into_iter().flatten() {
            draw_line(
                &mut buffer,
                w,
                h,
                pos.x as i32,
                pos.y as i32,
                hit.x as i32,
                hit.y as i32,
                SIGHT_COLOUR,
            );
        }

        window.update_with_buffer(&buffer, w, h)?;
    }
    Ok(())
}

/// Integer Bresenham line‑drawing into a u32 framebuffer.
fn draw_line(
    buf: &mut [u32],
    w: usize,
    h: usize,
    mut x0: i32,
    mut y0: i32,
    x1: i32,
    y1: i32,
    colour: u32,
) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if (0..w as i32).contains(&x0) && (0..h as i32).contains(&y0) {
            buf[y0 as usize * w + x0 as usize] = colour;
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            if x0 == x1 {
                break;
            }
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            if y0 == y1 {
                break;
            }
            err += dx;
            y0 += sy;
        }
    }
}
