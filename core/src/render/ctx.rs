//! Render configuration.

/// Per-call render configuration. Immutable for the duration of a
/// render call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    /// Distance from the camera to the near plane `z = d`. Geometry at
    /// `z <= d` is clipped away. Must be positive.
    pub d: f32,

    /// Width and height of the view window at `z = d`, in scene units.
    /// The window maps to the full canvas. Both must be positive.
    pub view_size: (f32, f32),

    /// Whether to draw triangle edges only, or filled and illuminated
    /// interiors.
    pub mode: Mode,

    /// How scene points map onto the view plane.
    pub projection: Projection,
}

/// The two render modes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    /// Triangle edges only, flat triangle color, no lighting.
    Wireframe,
    /// Scanline-filled interiors with per-vertex illumination.
    Fill,
}

/// Supported projections.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Projection {
    /// Parallel projection that discards z: `(x, y, z) → (x, y)`.
    Isometric,
    /// Pinhole projection through the origin onto the plane `z = d`:
    /// `(x, y, z) → (x·d/z, y·d/z)`.
    Perspective,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            d: 1.0,
            view_size: (1.0, 1.0),
            mode: Mode::Fill,
            projection: Projection::Perspective,
        }
    }
}
