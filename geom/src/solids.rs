//! Generators for basic solids as triangle lists.

use std::f32::consts::TAU;

use tg::geom::Triangle;
use tg::math::{vec3, Color, Vec3};

/// Returns a cylinder of radius `r` and height `h`, centered at the
/// origin with its axis along z.
///
/// `n` is the number of vertices per ring; the first and last ring
/// vertex coincide, closing the hull. Caps are triangle fans, sides
/// are quads split in two. Vertex normals are the vertex positions
/// themselves, giving the hull a rounded look under Gouraud shading.
pub fn cylinder(
    r: f32,
    h: f32,
    n: usize,
    color: Color,
    specular: f32,
) -> Vec<Triangle> {
    let ring: Vec<Vec3> = (0..n)
        .map(|i| {
            let angle = i as f32 / (n - 1) as f32 * TAU;
            vec3(r * angle.cos(), r * angle.sin(), 0.0)
        })
        .collect();
    let top: Vec<Vec3> =
        ring.iter().map(|&p| p + vec3(0.0, 0.0, h / 2.0)).collect();
    let bottom: Vec<Vec3> =
        ring.iter().map(|&p| p - vec3(0.0, 0.0, h / 2.0)).collect();

    let tri = |points: [Vec3; 3]| Triangle {
        points,
        normals: points,
        color,
        specular,
    };
    let mut tris = Vec::with_capacity(4 * n - 6);

    for i in 1..n - 1 {
        tris.push(tri([top[i], top[0], top[i + 1]]));
        tris.push(tri([bottom[0], bottom[i], bottom[i + 1]]));
    }
    for i in 0..n - 1 {
        tris.push(tri([bottom[i], top[i], top[i + 1]]));
        tris.push(tri([bottom[i + 1], bottom[i], top[i + 1]]));
    }

    tris
}

/// Returns an axis-aligned cube with edge length `size`, centered at
/// the origin. Each face carries its outward face normal at all three
/// vertices of both its triangles.
pub fn cube(size: f32, color: Color, specular: f32) -> Vec<Triangle> {
    let s = size / 2.0;

    // One entry per face: outward normal, then the four corners in
    // fan order, counterclockwise seen from outside.
    let faces: [(Vec3, [Vec3; 4]); 6] = [
        (
            vec3(0.0, 0.0, -1.0),
            [
                vec3(-s, -s, -s),
                vec3(-s, s, -s),
                vec3(s, s, -s),
                vec3(s, -s, -s),
            ],
        ),
        (
            vec3(0.0, 0.0, 1.0),
            [
                vec3(-s, -s, s),
                vec3(s, -s, s),
                vec3(s, s, s),
                vec3(-s, s, s),
            ],
        ),
        (
            vec3(-1.0, 0.0, 0.0),
            [
                vec3(-s, -s, -s),
                vec3(-s, -s, s),
                vec3(-s, s, s),
                vec3(-s, s, -s),
            ],
        ),
        (
            vec3(1.0, 0.0, 0.0),
            [
                vec3(s, -s, s),
                vec3(s, -s, -s),
                vec3(s, s, -s),
                vec3(s, s, s),
            ],
        ),
        (
            vec3(0.0, -1.0, 0.0),
            [
                vec3(-s, -s, -s),
                vec3(s, -s, -s),
                vec3(s, -s, s),
                vec3(-s, -s, s),
            ],
        ),
        (
            vec3(0.0, 1.0, 0.0),
            [
                vec3(-s, s, -s),
                vec3(-s, s, s),
                vec3(s, s, s),
                vec3(s, s, -s),
            ],
        ),
    ];

    let mut tris = Vec::with_capacity(12);
    for (normal, [a, b, c, d]) in faces {
        for points in [[a, b, c], [a, c, d]] {
            tris.push(Triangle {
                points,
                normals: [normal; 3],
                color,
                specular,
            });
        }
    }
    tris
}
