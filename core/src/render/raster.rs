//! Turning lines and triangles into depth-tested pixels.
//!
//! Triangles are filled scanline by scanline. The per-vertex
//! attributes (edge x coordinate, reciprocal depth, light intensity)
//! are interpolated down the triangle's edges, yielding one left/right
//! value pair per scanline, and then across each horizontal span:
//!
//! ```text
//!            p0
//!            /\
//!   x02[i] _/__\_ x012[i]
//!          /    \
//!         /______\ p1
//!        / __--
//!    p2 /-
//! ```
//!
//! The "long" edge runs from the topmost to the bottommost vertex; the
//! two "short" edges are concatenated into an array of equal length,
//! so indexing both arrays with the scanline number gives the span
//! endpoints. Depth is interpolated as 1/z, which is linear in screen
//! space; intensity is interpolated as is.

use std::mem::swap;

use crate::geom::{Line, Triangle};
use crate::math::{interpolate, vary, Color, Vec3};

use super::clip::{cut_line, out_of_range};
use super::ctx::Config;
use super::light::{compute_lighting, Light};
use super::project::project;
use super::target::{canvas_pt, Canvas, CanvasPt, DepthCanvas};

/// Rasterizes `line` with a flat color.
///
/// The segment is dropped if entirely behind the near plane and cut
/// against it if one endpoint is behind. Pixels step along the
/// dominant axis of the projected segment, interpolating the other
/// coordinate and the depth. The depth value carried along a line is
/// the endpoint z itself.
pub fn line<C: Canvas>(
    sink: &mut DepthCanvas<C>,
    cfg: &Config,
    line: Line,
    color: Color,
) {
    let begin_out = out_of_range(line.begin, cfg.d);
    let end_out = out_of_range(line.end, cfg.d);

    if begin_out && end_out {
        return;
    }
    let line = if begin_out || end_out {
        cut_line(line, cfg.d)
    } else {
        line
    };

    let dims = sink.dims();
    let mut a = (project(cfg, dims, line.begin), line.begin.z);
    let mut b = (project(cfg, dims, line.end), line.end.z);

    if a.0 == b.0 {
        sink.put_pixel(a.0, a.1, color);
    } else if (a.0.x - b.0.x).abs() > (a.0.y - b.0.y).abs() {
        // Mostly horizontal: one pixel per column.
        if a.0.x > b.0.x {
            swap(&mut a, &mut b);
        }
        let ys = interpolate(a.0.x, a.0.y as f32, b.0.x, b.0.y as f32);
        let zs = interpolate(a.0.x, a.1, b.0.x, b.1);

        for ((x, y), z) in (a.0.x..=b.0.x).zip(ys).zip(zs) {
            sink.put_pixel(canvas_pt(x, y as i32), z, color);
        }
    } else {
        // Mostly vertical: one pixel per row.
        if a.0.y > b.0.y {
            swap(&mut a, &mut b);
        }
        let xs = interpolate(a.0.y, a.0.x as f32, b.0.y, b.0.x as f32);
        let zs = interpolate(a.0.y, a.1, b.0.y, b.1);

        for ((y, x), z) in (a.0.y..=b.0.y).zip(xs).zip(zs) {
            sink.put_pixel(canvas_pt(x as i32, y), z, color);
        }
    }
}

/// Rasterizes the three edges of `tri` with its flat color,
/// illumination not applied.
pub fn wire_tri<C: Canvas>(
    sink: &mut DepthCanvas<C>,
    cfg: &Config,
    tri: &Triangle,
) {
    let [a, b, c] = tri.points;
    line(sink, cfg, Line::new(a, b), tri.color);
    line(sink, cfg, Line::new(b, c), tri.color);
    line(sink, cfg, Line::new(c, a), tri.color);
}

/// Scanline-fills an already-clipped triangle, illuminating its
/// vertices and interpolating the attributes across the face.
///
/// Returns `false` without drawing if the triangle is back-facing:
/// with the camera at the origin looking toward +z, a face is a
/// backface iff its centroid and face normal point into opposite
/// half-spaces, `h · n < 0`.
pub fn fill_tri<C: Canvas>(
    sink: &mut DepthCanvas<C>,
    cfg: &Config,
    tri: &Triangle,
    lights: &[Light],
) -> bool {
    if is_backface(tri) {
        return false;
    }

    let dims = sink.dims();

    // Per-vertex attributes: projected point, view depth, intensity.
    let mut verts = [(CanvasPt::default(), 0.0f32, 0.0f32); 3];
    for i in 0..3 {
        verts[i] = (
            project(cfg, dims, tri.points[i]),
            tri.points[i].z,
            compute_lighting(tri.points[i], tri.normals[i], lights, tri.specular),
        );
    }
    verts.sort_by(|a, b| a.0.y.cmp(&b.0.y));
    let [(p0, z0, l0), (p1, z1, l1), (p2, z2, l2)] = verts;

    let x02: Vec<f32> =
        interpolate(p0.y, p0.x as f32, p2.y, p2.x as f32).collect();
    let x012 = join_edges(
        interpolate(p0.y, p0.x as f32, p1.y, p1.x as f32),
        interpolate(p1.y, p1.x as f32, p2.y, p2.x as f32),
    );
    let z02: Vec<f32> =
        interpolate(p0.y, z0.recip(), p2.y, z2.recip()).collect();
    let z012 = join_edges(
        interpolate(p0.y, z0.recip(), p1.y, z1.recip()),
        interpolate(p1.y, z1.recip(), p2.y, z2.recip()),
    );
    let l02: Vec<f32> = interpolate(p0.y, l0, p2.y, l2).collect();
    let l012 = join_edges(
        interpolate(p0.y, l0, p1.y, l1),
        interpolate(p1.y, l1, p2.y, l2),
    );

    for i in 0..=(p2.y - p0.y) as usize {
        let (mut x_l, mut x_r) = (x02[i] as i32, x012[i] as i32);
        let (mut z_l, mut z_r) = (z02[i], z012[i]);
        let (mut l_l, mut l_r) = (l02[i], l012[i]);

        if x_r < x_l {
            swap(&mut x_l, &mut x_r);
            swap(&mut z_l, &mut z_r);
            swap(&mut l_l, &mut l_r);
        }

        let zs = interpolate(x_l, z_l, x_r, z_r);
        let ls = interpolate(x_l, l_l, x_r, l_r);
        let y = p0.y + i as i32;

        for ((x, z), l) in (x_l..=x_r).zip(zs).zip(ls) {
            sink.put_pixel(canvas_pt(x, y), z, tri.color.shade(l));
        }
    }
    true
}

/// Concatenates two edge interpolations into one attribute array,
/// dropping the last entry of the first so the shared scanline
/// appears once.
fn join_edges(first: vary::Iter, second: vary::Iter) -> Vec<f32> {
    let mut vals: Vec<f32> = first.collect();
    vals.pop();
    vals.extend(second);
    vals
}

fn is_backface(tri: &Triangle) -> bool {
    let [p0, p1, p2] = tri.points;
    let n = (p1 - p0).cross(&(p2 - p0));
    let h: Vec3 = (p0 + p1 + p2) * (1.0 / 3.0);
    h.dot(&n) < 0.0
}
