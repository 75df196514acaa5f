//! Planes and view frusta.
//!
//! Frustum planes are extracted from a view-projection matrix and used to
//! check that a fitted bounding sphere actually lands on screen. [`Plane`]
//! doubles as the representation of section clipping planes.

use glam::{Mat4, Vec3, Vec4};

use crate::bounds::BoundingSphere;

/// A plane `normal · p + distance = 0`; the positive half-space is the
/// side the normal points to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal pointing into the positive half-space.
    pub normal: Vec3,
    /// Signed distance term (`n · p + d = 0`).
    pub distance: f32,
}

impl Plane {
    /// Plane from a normal (normalized here) and distance term.
    #[must_use]
    pub fn new(normal: Vec3, distance: f32) -> Self {
        let len = normal.length();
        if len > 0.0 {
            Self {
                normal: normal / len,
                distance: distance / len,
            }
        } else {
            Self {
                normal: Vec3::ZERO,
                distance: 0.0,
            }
        }
    }

    /// Plane from raw `(a, b, c, d)` coefficients, normalized.
    #[must_use]
    pub fn from_coefficients(coefficients: Vec4) -> Self {
        Self::new(coefficients.truncate(), coefficients.w)
    }

    /// Coefficients `(a, b, c, d)` for shader upload.
    #[must_use]
    pub fn to_vec4(self) -> Vec4 {
        self.normal.extend(self.distance)
    }

    /// Signed distance from point to plane (positive = in front).
    #[inline]
    #[must_use]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }
}

/// View frustum bounded by six inward-facing planes.
#[derive(Debug, Clone)]
pub struct Frustum {
    /// Left, right, bottom, top, near, far.
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extract planes from a view-projection matrix (Gribb/Hartmann).
    /// Assumes a right-handed projection with [0, 1] depth.
    #[must_use]
    pub fn from_view_projection(vp: Mat4) -> Self {
        let row0 = vp.row(0);
        let row1 = vp.row(1);
        let row2 = vp.row(2);
        let row3 = vp.row(3);

        Self {
            planes: [
                Plane::from_coefficients(row3 + row0),
                Plane::from_coefficients(row3 - row0),
                Plane::from_coefficients(row3 + row1),
                Plane::from_coefficients(row3 - row1),
                // [0,1] depth: near plane is just row2
                Plane::from_coefficients(row2),
                Plane::from_coefficients(row3 - row2),
            ],
        }
    }

    /// Whether a point is inside the frustum.
    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(point) >= 0.0)
    }

    /// Whether a sphere intersects or is inside the frustum.
    #[inline]
    #[must_use]
    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(sphere.center) >= -sphere.radius)
    }

    /// Whether a sphere is completely inside the frustum, allowing it to
    /// poke out by `tolerance`.
    #[inline]
    #[must_use]
    pub fn contains_sphere(&self, sphere: &BoundingSphere, tolerance: f32) -> bool {
        self.planes.iter().all(|plane| {
            plane.distance_to_point(sphere.center) >= sphere.radius - tolerance
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perspective_frustum() -> Frustum {
        let proj = Mat4::perspective_rh(45.0_f32.to_radians(), 1.0, 0.1, 100.0);
        let view =
            Mat4::look_at_rh(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
        Frustum::from_view_projection(proj * view)
    }

    #[test]
    fn frustum_contains_origin() {
        let frustum = perspective_frustum();
        assert!(frustum.contains_point(Vec3::ZERO));
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 20.0)));
    }

    #[test]
    fn sphere_intersection() {
        let frustum = perspective_frustum();
        assert!(frustum.intersects_sphere(&BoundingSphere::new(Vec3::ZERO, 1.0)));
        assert!(!frustum
            .intersects_sphere(&BoundingSphere::new(Vec3::new(0.0, 0.0, 50.0), 1.0)));
    }

    #[test]
    fn ortho_box_contains_sphere_exactly() {
        let proj = Mat4::orthographic_rh(-5.0, 5.0, -5.0, 5.0, -50.0, 50.0);
        let frustum = Frustum::from_view_projection(proj);
        assert!(frustum.contains_sphere(&BoundingSphere::new(Vec3::ZERO, 5.0), 1e-4));
        assert!(!frustum.contains_sphere(
            &BoundingSphere::new(Vec3::new(1.0, 0.0, 0.0), 5.0),
            1e-4
        ));
    }

    #[test]
    fn plane_normalizes() {
        let plane = Plane::new(Vec3::new(0.0, 2.0, 0.0), -4.0);
        assert_eq!(plane.normal, Vec3::Y);
        assert_eq!(plane.distance, -2.0);
        assert_eq!(plane.distance_to_point(Vec3::new(7.0, 5.0, 1.0)), 3.0);
        assert_eq!(plane.to_vec4(), Vec4::new(0.0, 1.0, 0.0, -2.0));
    }
}
