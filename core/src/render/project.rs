//! Projection from scene space to canvas space.

use crate::math::Vec3;

use super::ctx::{Config, Projection};
use super::target::{canvas_pt, CanvasPt};

/// Projects `point` onto the canvas under the configured projection.
///
/// The point first maps onto the view plane (perspective division for
/// [`Projection::Perspective`], plain x/y for
/// [`Projection::Isometric`]), then the view window `(vw, vh)` is
/// scaled to the full canvas `(w, h)`. The result is in centered
/// canvas coordinates; the float-to-int conversion truncates toward
/// zero.
pub fn project(cfg: &Config, dims: (i32, i32), point: Vec3) -> CanvasPt {
    let (u, v) = match cfg.projection {
        Projection::Isometric => (point.x, point.y),
        Projection::Perspective => {
            (point.x * cfg.d / point.z, point.y * cfg.d / point.z)
        }
    };
    to_canvas(cfg, dims, u, v)
}

/// Maps view-plane coordinates to canvas pixels: the view window
/// spans the full canvas.
fn to_canvas(cfg: &Config, (w, h): (i32, i32), u: f32, v: f32) -> CanvasPt {
    let (vw, vh) = cfg.view_size;
    canvas_pt((u / vw * w as f32) as i32, (v / vh * h as f32) as i32)
}
