//! 2-D ray-cast visibility.
//!
//! A point-shaped [`Emitter`] casts a fixed fan of rays against a static set
//! of [`Wall`] segments and reports, per ray, the nearest point struck.  The
//! obstacle set itself comes out of a [`WorldRecipe`], which assembles a
//! handful of random generator strategies into one wall list.
//!
//! Rendering, pointer input and the frame loop live in the viewer binary;
//! the library is pure geometry.

pub mod emitter;
pub mod trace;
pub mod world;

pub use emitter::Emitter;
pub use trace::Ray;
pub use world::{RecipeError, Wall, WorldRecipe};
