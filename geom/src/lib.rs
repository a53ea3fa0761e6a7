//! Mesh generation and object placement for `tg` scenes.

pub mod solids;
pub mod transform;

pub use solids::{cube, cylinder};
pub use transform::place;
