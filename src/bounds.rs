//! Bounding spheres for framing models.
//!
//! Per-mesh spheres come from Ritter's approximation: fast, one growth pass,
//! typically within a few percent of the minimal sphere. Good enough for
//! choosing a view range; not a minimal enclosing sphere.

use glam::Vec3;

/// Centre/radius comparisons within this tolerance count as equal.
const FUZZY_EPSILON: f32 = 1e-5;

/// A world-space sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// Sphere centre.
    pub center: Vec3,
    /// Sphere radius.
    pub radius: f32,
}

impl Default for BoundingSphere {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            radius: 1.0,
        }
    }
}

impl BoundingSphere {
    /// Sphere from centre and radius.
    #[must_use]
    pub const fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Ritter's approximate bounding sphere of a point set.
    ///
    /// Seeds the sphere with the widest of the three axis-extreme point
    /// pairs, then grows it once over all points. Returns `None` for an
    /// empty set.
    #[must_use]
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let first = *points.first()?;

        let mut min = [first; 3];
        let mut max = [first; 3];
        for &p in points {
            for (axis, (lo, hi)) in
                min.iter_mut().zip(max.iter_mut()).enumerate()
            {
                if p[axis] < lo[axis] {
                    *lo = p;
                }
                if p[axis] > hi[axis] {
                    *hi = p;
                }
            }
        }

        // Widest extreme pair seeds the sphere; ties keep the earlier axis.
        let (mut a, mut b) = (min[0], max[0]);
        let mut widest = a.distance_squared(b);
        for (lo, hi) in min.into_iter().zip(max).skip(1) {
            let span = lo.distance_squared(hi);
            if span > widest {
                widest = span;
                (a, b) = (lo, hi);
            }
        }

        let mut center = (a + b) * 0.5;
        let mut radius = b.distance(center);
        let mut radius_sq = radius * radius;
        for &p in points {
            let d_sq = p.distance_squared(center);
            if d_sq > radius_sq {
                let d = d_sq.sqrt();
                let grown = (radius + d) * 0.5;
                center = (center * grown + p * (d - grown)) / d;
                radius = grown;
                radius_sq = radius * radius;
            }
        }

        Some(Self { center, radius })
    }

    /// Union of several spheres, `None` when the iterator is empty.
    pub fn from_spheres<I>(spheres: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut iter = spheres.into_iter();
        let mut acc = iter.next()?;
        for sphere in iter {
            acc.add_sphere(&sphere);
        }
        Some(acc)
    }

    /// Sphere diameter.
    #[must_use]
    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }

    /// Whether `point` lies inside or on the sphere, within `tolerance`.
    #[must_use]
    pub fn contains_point(&self, point: Vec3, tolerance: f32) -> bool {
        self.center.distance(point) <= self.radius + tolerance
    }

    /// Whether `other` lies entirely inside this sphere, within `tolerance`.
    #[must_use]
    pub fn contains_sphere(&self, other: &Self, tolerance: f32) -> bool {
        self.center.distance(other.center) + other.radius
            <= self.radius + tolerance
    }

    /// Same sphere within floating tolerance.
    #[must_use]
    pub fn fuzzy_eq(&self, other: &Self) -> bool {
        let scale = self.radius.abs().max(other.radius.abs()).max(1.0);
        self.center.abs_diff_eq(other.center, FUZZY_EPSILON * scale)
            && (self.radius - other.radius).abs() <= FUZZY_EPSILON * scale
    }

    /// Grow this sphere to also enclose `other`.
    ///
    /// Identical spheres are a no-op. When one sphere contains the other
    /// the containing one is the result. Otherwise the new sphere spans the
    /// two far end points on the line through both centres.
    pub fn add_sphere(&mut self, other: &Self) {
        if self.fuzzy_eq(other) {
            return;
        }
        if self.contains_sphere(other, FUZZY_EPSILON) {
            return;
        }
        if other.contains_sphere(self, FUZZY_EPSILON) {
            *self = *other;
            return;
        }

        let to_other = (other.center - self.center).normalize();
        let this_end = self.center - to_other * self.radius;
        let other_end = other.center + to_other * other.radius;

        self.radius = this_end.distance(other_end) * 0.5;
        self.center = this_end + to_other * self.radius;
    }

    /// Owned variant of [`Self::add_sphere`].
    #[must_use]
    pub fn union(mut self, other: &Self) -> Self {
        self.add_sphere(other);
        self
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    const EPS: f32 = 1e-4;

    fn random_unit(rng: &mut StdRng) -> Vec3 {
        loop {
            let v = Vec3::new(
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
            );
            if let Some(n) = v.try_normalize() {
                return n;
            }
        }
    }

    #[test]
    fn empty_point_set_has_no_sphere() {
        assert!(BoundingSphere::from_points(&[]).is_none());
    }

    #[test]
    fn single_point_is_a_zero_sphere() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let s = BoundingSphere::from_points(&[p]).unwrap();
        assert_eq!(s.center, p);
        assert_eq!(s.radius, 0.0);
    }

    #[test]
    fn ritter_encloses_cube_corners() {
        let mut corners = Vec::new();
        for x in [-1.0, 1.0] {
            for y in [-1.0, 1.0] {
                for z in [-1.0, 1.0] {
                    corners.push(Vec3::new(x, y, z) * 2.0 + Vec3::X * 10.0);
                }
            }
        }
        let s = BoundingSphere::from_points(&corners).unwrap();
        for c in &corners {
            assert!(s.contains_point(*c, EPS), "{c} outside {s:?}");
        }
        // Approximate: never smaller than the exact circumradius.
        assert!(s.radius >= 2.0 * 3.0_f32.sqrt() - EPS);
    }

    #[test]
    fn ritter_encloses_random_cloud() {
        let mut rng = StdRng::seed_from_u64(42);
        let points: Vec<Vec3> = (0..2_000)
            .map(|_| {
                Vec3::new(
                    rng.random_range(-50.0..50.0),
                    rng.random_range(-5.0..5.0),
                    rng.random_range(0.0..20.0),
                )
            })
            .collect();
        let s = BoundingSphere::from_points(&points).unwrap();
        assert!(points.iter().all(|p| s.contains_point(*p, 1e-3)));
    }

    #[test]
    fn ritter_seeds_from_widest_axis() {
        let points = [
            Vec3::new(-10.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        let s = BoundingSphere::from_points(&points).unwrap();
        assert!(s.center.abs_diff_eq(Vec3::ZERO, EPS));
        assert!((s.radius - 10.0).abs() < EPS);
    }

    #[test]
    fn identical_spheres_are_unchanged() {
        let a = BoundingSphere::new(Vec3::new(1.0, 1.0, 1.0), 3.0);
        assert_eq!(a.union(&a), a);
    }

    #[test]
    fn container_absorbs_contained() {
        let a = BoundingSphere::new(Vec3::ZERO, 10.0);
        let b = BoundingSphere::new(Vec3::new(8.0, 0.0, 0.0), 1.0);
        assert_eq!(a.union(&b), a);
    }

    #[test]
    fn smaller_self_is_replaced_by_container() {
        let small = BoundingSphere::new(Vec3::new(0.0, 2.0, 0.0), 1.0);
        let big = BoundingSphere::new(Vec3::ZERO, 10.0);
        assert_eq!(small.union(&big), big);
    }

    #[test]
    fn separated_spheres_envelope() {
        let a = BoundingSphere::new(Vec3::ZERO, 10.0);
        let b = BoundingSphere::new(Vec3::new(25.0, 0.0, 0.0), 5.0);
        let merged = a.union(&b);
        assert!(merged.center.abs_diff_eq(Vec3::new(10.0, 0.0, 0.0), EPS));
        assert!((merged.radius - 20.0).abs() < EPS);
        assert!(merged.contains_sphere(&a, EPS));
        assert!(merged.contains_sphere(&b, EPS));
    }

    #[test]
    fn merged_sphere_covers_both_surfaces() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let a = BoundingSphere::new(
                random_unit(&mut rng) * rng.random_range(0.0..30.0),
                rng.random_range(0.1..15.0),
            );
            let b = BoundingSphere::new(
                random_unit(&mut rng) * rng.random_range(0.0..30.0),
                rng.random_range(0.1..15.0),
            );
            let merged = a.union(&b);
            for _ in 0..50 {
                let on_a = a.center + random_unit(&mut rng) * a.radius;
                let on_b = b.center + random_unit(&mut rng) * b.radius;
                assert!(merged.contains_point(on_a, 1e-3), "{a:?} {b:?}");
                assert!(merged.contains_point(on_b, 1e-3), "{a:?} {b:?}");
            }
        }
    }

    #[test]
    fn scene_union_of_many() {
        let spheres = [
            BoundingSphere::new(Vec3::new(-5.0, 0.0, 0.0), 1.0),
            BoundingSphere::new(Vec3::new(5.0, 0.0, 0.0), 1.0),
            BoundingSphere::new(Vec3::new(0.0, 0.0, 0.0), 0.5),
        ];
        let all = BoundingSphere::from_spheres(spheres).unwrap();
        assert!(all.center.abs_diff_eq(Vec3::ZERO, EPS));
        assert!((all.radius - 6.0).abs() < EPS);
        assert!(BoundingSphere::from_spheres(Vec::new()).is_none());
    }
}
