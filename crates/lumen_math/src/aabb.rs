use crate::{Interval, Ray, Vec3};

/// Axis-aligned bounding box used by the BVH.
///
/// Stored as two corners. Boxes built through [`Aabb::from_points`] or
/// [`Aabb::surrounding`] always satisfy `min[i] <= max[i]` on every axis;
/// zero extent on an axis is allowed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    min: Vec3,
    max: Vec3,
}

impl Aabb {
    /// Create an AABB from two opposite corners in any order.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Box of a sphere centered at `center`.
    pub fn around_sphere(center: Vec3, radius: f32) -> Self {
        let r = Vec3::splat(radius.abs());
        Self::from_points(center - r, center + r)
    }

    /// Smallest box enclosing both inputs.
    pub fn surrounding(box0: &Aabb, box1: &Aabb) -> Self {
        Self {
            min: box0.min.min(box1.min),
            max: box0.max.max(box1.max),
        }
    }

    #[inline]
    pub fn min(&self) -> Vec3 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// Extent along an axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, axis: usize) -> Interval {
        Interval::new(self.min[axis], self.max[axis])
    }

    /// Slab test: does the ray enter the box somewhere inside `ray_t`?
    ///
    /// Zero direction components are left to IEEE semantics. `1/0` gives an
    /// infinite slab, and a `0 * inf` NaN (origin exactly on a face) is
    /// discarded by `f32::max`/`f32::min`, which return the non-NaN operand.
    pub fn hit(&self, ray: &Ray, mut ray_t: Interval) -> bool {
        for axis in 0..3 {
            let inv_d = 1.0 / ray.direction[axis];
            let origin = ray.origin[axis];

            let mut t0 = (self.min[axis] - origin) * inv_d;
            let mut t1 = (self.max[axis] - origin) * inv_d;
            if inv_d < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }

            ray_t.min = t0.max(ray_t.min);
            ray_t.max = t1.min(ray_t.max);
            if ray_t.max <= ray_t.min {
                return false;
            }
        }
        true
    }
}

impl std::fmt::Display for Aabb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "min: ({}, {}, {}) max: ({}, {}, {})",
            self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn unit_box() -> Aabb {
        Aabb::from_points(Vec3::splat(-1.0), Vec3::splat(1.0))
    }

    #[test]
    fn test_aabb_from_points_orders_corners() {
        let aabb = Aabb::from_points(Vec3::new(10.0, 0.0, 5.0), Vec3::new(0.0, 10.0, -5.0));

        assert_eq!(aabb.min(), Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(aabb.max(), Vec3::new(10.0, 10.0, 5.0));
    }

    #[test]
    fn test_aabb_surrounding_is_commutative_and_encloses() {
        let boxes = [
            Aabb::from_points(Vec3::ZERO, Vec3::splat(5.0)),
            Aabb::from_points(Vec3::splat(3.0), Vec3::splat(10.0)),
            Aabb::from_points(Vec3::new(-4.0, 2.0, 8.0), Vec3::new(-3.0, 2.0, 9.0)),
            Aabb::from_points(Vec3::new(1.0, -7.0, 0.5), Vec3::new(1.0, -7.0, 0.5)),
        ];

        for a in &boxes {
            for b in &boxes {
                let ab = Aabb::surrounding(a, b);
                assert_eq!(ab, Aabb::surrounding(b, a));
                assert!(ab.min().cmple(a.min()).all() && ab.min().cmple(b.min()).all());
                assert!(ab.max().cmpge(a.max()).all() && ab.max().cmpge(b.max()).all());
            }
        }
    }

    #[test]
    fn test_aabb_surrounding_random_boxes() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut random_point = |rng: &mut StdRng| {
            Vec3::new(
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
            )
        };

        for _ in 0..1000 {
            let a = Aabb::from_points(random_point(&mut rng), random_point(&mut rng));
            let b = Aabb::from_points(random_point(&mut rng), random_point(&mut rng));
            let ab = Aabb::surrounding(&a, &b);

            assert_eq!(ab, Aabb::surrounding(&b, &a));
            assert!(ab.min().cmple(a.min()).all() && ab.min().cmple(b.min()).all());
            assert!(ab.max().cmpge(a.max()).all() && ab.max().cmpge(b.max()).all());
            assert!(ab.min().cmple(ab.max()).all());
        }
    }

    #[test]
    fn test_aabb_hit() {
        let aabb = unit_box();

        let toward = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0), 0.0);
        assert!(aabb.hit(&toward, Interval::new(0.0, 100.0)));

        let away = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, -1.0), 0.0);
        assert!(!aabb.hit(&away, Interval::new(0.0, 100.0)));

        let beside = Ray::new(Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0), 0.0);
        assert!(!aabb.hit(&beside, Interval::new(0.0, 100.0)));
    }

    #[test]
    fn test_aabb_hit_respects_interval() {
        let aabb = unit_box();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0), 0.0);

        // Box spans t in [4, 6]
        assert!(!aabb.hit(&ray, Interval::new(0.0, 3.9)));
        assert!(!aabb.hit(&ray, Interval::new(6.1, 100.0)));
        assert!(aabb.hit(&ray, Interval::new(5.0, 5.5)));
    }

    #[test]
    fn test_aabb_hit_with_zero_direction_components() {
        let aabb = unit_box();

        // Parallel to the X and Y slabs, inside both
        let inside = Ray::new(Vec3::new(0.5, -0.5, 5.0), Vec3::new(0.0, 0.0, -1.0), 0.0);
        assert!(aabb.hit(&inside, Interval::new(0.0, f32::INFINITY)));

        // Parallel to the X slab but outside it
        let outside = Ray::new(Vec3::new(2.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0), 0.0);
        assert!(!aabb.hit(&outside, Interval::new(0.0, f32::INFINITY)));

        // Negative zero must behave like positive zero
        let neg_zero = Ray::new(Vec3::new(2.0, 0.0, 5.0), Vec3::new(-0.0, -0.0, -1.0), 0.0);
        assert!(!aabb.hit(&neg_zero, Interval::new(0.0, f32::INFINITY)));
    }

    #[test]
    fn test_aabb_hit_origin_on_face_parallel() {
        // Origin lies exactly on the x = 1 face, direction has no x part.
        let aabb = unit_box();
        let grazing = Ray::new(Vec3::new(1.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0), 0.0);
        assert!(aabb.hit(&grazing, Interval::new(0.0, f32::INFINITY)));
    }

    #[test]
    fn test_aabb_degenerate_box() {
        let point = Aabb::around_sphere(Vec3::new(2.0, 2.0, 2.0), 0.0);
        assert_eq!(point.axis_interval(1).size(), 0.0);

        let merged = Aabb::surrounding(&point, &unit_box());
        assert_eq!(merged.min(), Vec3::splat(-1.0));
        assert_eq!(merged.max(), Vec3::splat(2.0));
    }

    #[test]
    fn test_aabb_display() {
        let aabb = Aabb::from_points(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(1.0, 0.5, 3.0));
        assert_eq!(aabb.to_string(), "min: (-1, 0, 2) max: (1, 0.5, 3)");
    }

    #[test]
    fn test_aabb_around_sphere() {
        let aabb = Aabb::around_sphere(Vec3::new(1.0, 2.0, 3.0), 0.5);
        assert_eq!(aabb.min(), Vec3::new(0.5, 1.5, 2.5));
        assert_eq!(aabb.max(), Vec3::new(1.5, 2.5, 3.5));
    }
}
