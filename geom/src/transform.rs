//! Placing meshes in the scene: scale, rotation, translation.

use tg::geom::Triangle;
use tg::math::{vec3, Vec3};

/// A 3 × 3 matrix, applied to row vectors.
#[derive(Copy, Clone, Debug)]
struct Mat3([[f32; 3]; 3]);

impl Mat3 {
    /// Applies `self` to a row vector: `v · M`.
    fn apply(&self, v: Vec3) -> Vec3 {
        let m = &self.0;
        vec3(
            v.x * m[0][0] + v.y * m[1][0] + v.z * m[2][0],
            v.x * m[0][1] + v.y * m[1][1] + v.z * m[2][1],
            v.x * m[0][2] + v.y * m[1][2] + v.z * m[2][2],
        )
    }
}

/// Rotation about the coordinate axis with the given index
/// (0 = x, 1 = y, 2 = z) by `angle` radians.
fn axis_rotation(axis: usize, angle: f32) -> Mat3 {
    let (sin, cos) = angle.sin_cos();
    match axis {
        0 => Mat3([
            [1.0, 0.0, 0.0],
            [0.0, cos, -sin],
            [0.0, sin, cos],
        ]),
        1 => Mat3([
            [cos, 0.0, sin],
            [0.0, 1.0, 0.0],
            [-sin, 0.0, cos],
        ]),
        _ => Mat3([
            [cos, -sin, 0.0],
            [sin, cos, 0.0],
            [0.0, 0.0, 1.0],
        ]),
    }
}

/// Rotates `v` by the per-axis angles of `rotation` (radians),
/// applied in x, y, z order.
pub fn rotate(v: Vec3, rotation: Vec3) -> Vec3 {
    [rotation.x, rotation.y, rotation.z]
        .into_iter()
        .enumerate()
        .fold(v, |v, (axis, angle)| axis_rotation(axis, angle).apply(v))
}

/// Returns `mesh` scaled by `scale`, rotated by the per-axis angles
/// of `rotation`, and then translated to `position`, in that order.
///
/// Normals are rotated only; translation and uniform scale leave
/// surface orientation unchanged.
pub fn place(
    mesh: &[Triangle],
    scale: f32,
    rotation: Vec3,
    position: Vec3,
) -> Vec<Triangle> {
    mesh.iter()
        .map(|tri| Triangle {
            points: tri.points.map(|p| rotate(p * scale, rotation) + position),
            normals: tri.normals.map(|n| rotate(n, rotation)),
            ..*tri
        })
        .collect()
}
