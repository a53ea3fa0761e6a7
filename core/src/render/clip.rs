//! Clipping geometry against the near plane `z = d`.
//!
//! A point is visible iff `z > d`. Segments crossing the plane are cut
//! at the intersection; triangles are reduced to the parts in front of
//! the plane. Clipping before rasterization also guarantees that every
//! depth value reaching the z-buffer is strictly positive.

use crate::geom::{Line, Triangle};
use crate::math::Vec3;

/// Returns whether `point` is out of the visible range, i.e. at or
/// behind the near plane.
#[inline]
pub fn out_of_range(point: Vec3, d: f32) -> bool {
    point.z <= d
}

/// Cuts `line` at the near plane, replacing the endpoint behind the
/// plane with the intersection point.
///
/// Solves `t = (d - begin.z) / (end.z - begin.z)` and substitutes the
/// intersection `begin + t·(end - begin)` for the out-of-range
/// endpoint. A segment that does not cross the plane within its extent
/// is returned unchanged. Expects at least one endpoint in front of
/// the plane; a segment parallel to it yields `t = NaN` and passes
/// through unchanged.
pub fn cut_line(line: Line, d: f32) -> Line {
    let delta = line.end - line.begin;
    let t = (d - line.begin.z) / delta.z;

    if !(0.0..=1.0).contains(&t) {
        return line;
    }
    let point = line.begin + delta * t;

    if delta.z > 0.0 {
        Line { begin: point, end: line.end }
    } else {
        Line { begin: line.begin, end: point }
    }
}

/// Clips `tri` against the near plane, pushing the visible parts into
/// `out`.
///
/// * No vertex behind the plane: the triangle passes through as is.
/// * One behind (say A): edges (A,B) and (A,C) are cut at A₁ and A₂,
///   and two triangles {A₁, B, C} and {A₂, B, C} are emitted. They
///   share the edge B–C and together cover the visible trapezoid,
///   overlapping along the shared edge.
/// * Two behind: both are cut against the remaining vertex and a
///   single reduced triangle is emitted.
/// * All three behind: nothing is emitted.
///
/// Normals, color, and specular exponent carry over unchanged to every
/// emitted triangle.
pub fn clip_triangle(tri: &Triangle, d: f32, out: &mut Vec<Triangle>) {
    let [a, b, c] = tri.points;
    let cut = |begin, end| cut_line(Line { begin, end }, d);

    match [a, b, c].map(|p| out_of_range(p, d)) {
        [false, false, false] => out.push(*tri),
        [true, true, true] => {}

        [true, true, false] => {
            let a1 = cut(a, c).begin;
            let b1 = cut(b, c).begin;
            out.push(Triangle { points: [a1, b1, c], ..*tri });
        }
        [true, false, true] => {
            let a1 = cut(a, b).begin;
            let c1 = cut(b, c).end;
            out.push(Triangle { points: [a1, b, c1], ..*tri });
        }
        [false, true, true] => {
            let b1 = cut(a, b).end;
            let c1 = cut(a, c).end;
            out.push(Triangle { points: [a, b1, c1], ..*tri });
        }

        [true, false, false] => {
            let a1 = cut(a, b).begin;
            let a2 = cut(a, c).begin;
            out.push(Triangle { points: [a1, b, c], ..*tri });
            out.push(Triangle { points: [a2, b, c], ..*tri });
        }
        [false, true, false] => {
            let b1 = cut(a, b).end;
            let b2 = cut(b, c).begin;
            out.push(Triangle { points: [a, b1, c], ..*tri });
            out.push(Triangle { points: [a, b2, c], ..*tri });
        }
        [false, false, true] => {
            let c1 = cut(a, c).end;
            let c2 = cut(b, c).end;
            out.push(Triangle { points: [a, b, c1], ..*tri });
            out.push(Triangle { points: [a, b, c2], ..*tri });
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::math::{rgba, vec3};

    use super::*;

    const D: f32 = 1.0;

    fn tri(a: Vec3, b: Vec3, c: Vec3) -> Triangle {
        Triangle {
            points: [a, b, c],
            normals: [vec3(0.0, 0.0, -1.0); 3],
            color: rgba(255, 0, 0, 255),
            specular: 5.0,
        }
    }

    fn clip(t: &Triangle) -> Vec<Triangle> {
        let mut out = vec![];
        clip_triangle(t, D, &mut out);
        out
    }

    #[test]
    fn visible_range_boundary() {
        assert!(out_of_range(vec3(0.0, 0.0, 0.5), D));
        assert!(out_of_range(vec3(0.0, 0.0, 1.0), D));
        assert!(!out_of_range(vec3(0.0, 0.0, 1.1), D));
    }

    #[test]
    fn cut_replaces_begin_when_begin_is_behind() {
        let line = Line::new(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 2.0));
        let cut = cut_line(line, D);
        assert_eq!(cut.begin, vec3(0.0, 0.0, 1.0));
        assert_eq!(cut.end, line.end);
    }

    #[test]
    fn cut_replaces_end_when_end_is_behind() {
        let line = Line::new(vec3(0.0, 2.0, 3.0), vec3(0.0, 0.0, -1.0));
        let cut = cut_line(line, D);
        assert_eq!(cut.begin, line.begin);
        // Halfway from begin to end.
        assert_eq!(cut.end, vec3(0.0, 1.0, 1.0));
    }

    #[test]
    fn cut_leaves_non_crossing_segment_alone() {
        let line = Line::new(vec3(0.0, 0.0, 2.0), vec3(1.0, 0.0, 4.0));
        assert_eq!(cut_line(line, D), line);
    }

    #[test]
    fn fully_visible_passes_through() {
        let t = tri(
            vec3(-1.0, -1.0, 2.0),
            vec3(1.0, -1.0, 2.0),
            vec3(0.0, 1.0, 3.0),
        );
        assert_eq!(clip(&t), [t]);
    }

    #[test]
    fn fully_behind_is_dropped() {
        let t = tri(
            vec3(-1.0, -1.0, 0.2),
            vec3(1.0, -1.0, 0.5),
            vec3(0.0, 1.0, 1.0),
        );
        assert_eq!(clip(&t), []);
    }

    #[test]
    fn one_behind_emits_two_triangles_sharing_far_edge() {
        let a = vec3(0.0, 0.0, 0.0);
        let b = vec3(-1.0, 0.0, 2.0);
        let c = vec3(1.0, 0.0, 2.0);
        let res = clip(&tri(a, b, c));

        let a1 = vec3(-0.5, 0.0, 1.0);
        let a2 = vec3(0.5, 0.0, 1.0);
        assert_eq!(res.len(), 2);
        assert_eq!(res[0].points, [a1, b, c]);
        assert_eq!(res[1].points, [a2, b, c]);
    }

    #[test]
    fn two_behind_emits_one_reduced_triangle() {
        let a = vec3(-1.0, -1.0, 0.5);
        let b = vec3(1.0, -1.0, 0.5);
        let c = vec3(0.0, 1.0, 2.5);
        let res = clip(&tri(a, b, c));

        assert_eq!(res.len(), 1);
        let [a1, b1, c1] = res[0].points;
        assert_eq!(a1, vec3(-0.75, -0.5, 1.0));
        assert_eq!(b1, vec3(0.75, -0.5, 1.0));
        assert_eq!(c1, c);
    }

    #[test]
    fn clip_preserves_surface_attributes() {
        let t = tri(
            vec3(0.0, 0.0, 0.0),
            vec3(-1.0, 0.0, 2.0),
            vec3(1.0, 0.0, 2.0),
        );
        for part in clip(&t) {
            assert_eq!(part.normals, t.normals);
            assert_eq!(part.color, t.color);
            assert_eq!(part.specular, t.specular);
        }
    }
}
