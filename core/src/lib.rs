//! A software (CPU) triangle rasterizer.
//!
//! `tg` renders scenes of colored, lit triangles into a pixel canvas
//! without any GPU involvement. The pipeline comprises projection from
//! 3D scene space to 2D canvas space, backface culling, clipping
//! against the near plane, scanline fill with per-vertex attribute
//! interpolation, depth testing through a z-buffer, and Gouraud-style
//! illumination combining ambient, point, and directional light
//! sources with optional specular reflection.
//!
//! Scene space is right-handed, with the camera at the origin looking
//! toward +z. A point is visible iff its z coordinate exceeds the
//! near-plane distance. Canvas space puts the origin at the center of
//! the image, +x right and +y up; pixel sinks translate to their own
//! storage layout.

pub mod geom;
pub mod math;
pub mod render;
pub mod scene;
pub mod util;

/// The most commonly used items, re-exported in one place.
pub mod prelude {
    pub use crate::geom::{Line, Triangle};
    pub use crate::math::{rgba, vec3, Color, Vec3};
    pub use crate::render::{
        BufCanvas, Canvas, CanvasPt, Config, Light, Mode, Projection,
        Renderer, Stats,
    };
    pub use crate::util::buf::Buf2;
}
