//! Light sources and Gouraud-style illumination.

use crate::math::Vec3;

/// A light source.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    /// Intensity scale applied to this light's contribution.
    pub intensity: f32,
    pub kind: Kind,
}

/// The kind of a light source.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Kind {
    /// Base illumination reaching every surface point equally,
    /// regardless of position or orientation.
    Ambient,
    /// A light radiating omnidirectionally from a single point.
    Point(Vec3),
    /// A light "at infinity" whose rays arrive along one direction at
    /// every point, such as the sun.
    Directional(Vec3),
}

impl Light {
    /// Creates an ambient light.
    pub const fn ambient(intensity: f32) -> Self {
        Self { intensity, kind: Kind::Ambient }
    }
    /// Creates a point light at `position`.
    pub const fn point(intensity: f32, position: Vec3) -> Self {
        Self { intensity, kind: Kind::Point(position) }
    }
    /// Creates a directional light shining along `direction`.
    pub const fn directional(intensity: f32, direction: Vec3) -> Self {
        Self { intensity, kind: Kind::Directional(direction) }
    }

    /// Returns the illumination coefficient of `self` at a surface
    /// point.
    ///
    /// `p` is the point in scene space, `n` its normal (any length),
    /// and `specular` the surface's specular exponent, with `0.0`
    /// meaning no specular reflection.
    ///
    /// The caller scales the result by `self.intensity`. Directional
    /// lights additionally scale their diffuse term by it themselves.
    pub fn intensity_at(&self, p: Vec3, n: Vec3, specular: f32) -> f32 {
        match self.kind {
            Kind::Ambient => 1.0,
            Kind::Point(pos) => phong(p, n, pos - p, specular, 1.0),
            Kind::Directional(dir) => {
                phong(p, n, dir, specular, self.intensity)
            }
        }
    }
}

/// Diffuse and specular reflection toward the viewer at the origin.
///
/// `l` is the direction from the surface point toward the light. The
/// division by `|n|` and `|l|` compensates for un-normalized inputs.
fn phong(p: Vec3, n: Vec3, l: Vec3, specular: f32, diffuse_scale: f32) -> f32 {
    let mut result = 0.0;

    let n_dot_l = n.dot(&l);
    if n_dot_l > 0.0 {
        result += diffuse_scale * n_dot_l / (n.len() * l.len());
    }

    if specular != 0.0 {
        let r = n * (2.0 * n_dot_l) - l;
        let r_dot_v = r.dot(&-p);
        if r_dot_v > 0.0 {
            result += (r_dot_v / (r.len() * p.len())).powf(specular);
        }
    }

    result
}

/// Returns the total illumination at surface point `p` with normal `n`:
/// the sum over `lights` of each light's coefficient scaled by its
/// intensity. The result modulates the surface's base color
/// channel-wise.
pub fn compute_lighting(
    p: Vec3,
    n: Vec3,
    lights: &[Light],
    specular: f32,
) -> f32 {
    lights
        .iter()
        .map(|light| light.intensity * light.intensity_at(p, n, specular))
        .sum()
}

#[cfg(test)]
mod tests {
    use crate::math::vec3;

    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn ambient_is_unconditional() {
        let light = Light::ambient(0.25);
        assert_eq!(light.intensity_at(vec3(1.0, 2.0, 3.0), vec3(0.0, 0.0, -1.0), 10.0), 1.0);
        assert_eq!(compute_lighting(Vec3::ZERO, Vec3::ZERO, &[light], 0.0), 0.25);
    }

    #[test]
    fn point_diffuse_head_on() {
        // Light directly along the normal: full diffuse contribution.
        let light = Light::point(1.0, vec3(0.0, 0.0, 0.0));
        let p = vec3(0.0, 0.0, 2.0);
        let n = vec3(0.0, 0.0, -2.0);
        assert!((light.intensity_at(p, n, 0.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn point_diffuse_at_angle() {
        // 45 degrees off the normal: cos(45°).
        let light = Light::point(1.0, vec3(0.0, 2.0, 0.0));
        let p = vec3(0.0, 0.0, 2.0);
        let n = vec3(0.0, 0.0, -1.0);
        let expected = std::f32::consts::FRAC_1_SQRT_2;
        assert!((light.intensity_at(p, n, 0.0) - expected).abs() < EPS);
    }

    #[test]
    fn point_behind_surface_contributes_nothing() {
        let light = Light::point(1.0, vec3(0.0, 0.0, 4.0));
        let p = vec3(0.0, 0.0, 2.0);
        let n = vec3(0.0, 0.0, -1.0);
        assert_eq!(light.intensity_at(p, n, 0.0), 0.0);
    }

    #[test]
    fn specular_adds_to_diffuse() {
        // Mirror setup: N, L, and V all along -z from the surface point,
        // so the reflection points straight at the viewer.
        let light = Light::point(1.0, vec3(0.0, 0.0, 0.0));
        let p = vec3(0.0, 0.0, 2.0);
        let n = vec3(0.0, 0.0, -1.0);
        let diffuse_only = light.intensity_at(p, n, 0.0);
        let with_specular = light.intensity_at(p, n, 8.0);
        assert!((with_specular - (diffuse_only + 1.0)).abs() < EPS);
    }

    #[test]
    fn directional_scales_diffuse_by_own_intensity() {
        // The diffuse term of a directional light carries the light's
        // intensity; the aggregator applies it once more.
        let light = Light::directional(0.5, vec3(0.0, 0.0, -1.0));
        let p = vec3(0.0, 0.0, 2.0);
        let n = vec3(0.0, 0.0, -1.0);
        assert!((light.intensity_at(p, n, 0.0) - 0.5).abs() < EPS);
        assert!((compute_lighting(p, n, &[light], 0.0) - 0.25).abs() < EPS);
    }

    #[test]
    fn lighting_sums_all_sources() {
        let p = vec3(0.0, 0.0, 2.0);
        let n = vec3(0.0, 0.0, -1.0);
        let lights = [
            Light::ambient(0.2),
            Light::point(0.6, vec3(0.0, 0.0, 0.0)),
        ];
        assert!((compute_lighting(p, n, &lights, 0.0) - 0.8).abs() < EPS);
    }
}
