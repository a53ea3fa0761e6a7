//! Vector, color, and interpolation math for the rasterizer.

pub mod color;
pub mod vary;
pub mod vec;

pub use color::{rgba, Color};
pub use vary::interpolate;
pub use vec::{vec3, Vec3};
