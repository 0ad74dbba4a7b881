//! Hittable trait and HitRecord for ray-object intersection.

use crate::Material;
use lumen_math::{Aabb, Interval, Ray, Vec3};

/// Record of a ray-object intersection.
///
/// Built fresh by each successful `hit` and never modified afterwards.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal, pointing out of the geometric surface
    /// (not flipped toward the ray)
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a dyn Material,
}

impl<'a> HitRecord<'a> {
    /// True when the ray arrives from the side the normal points to.
    pub fn is_front_face(&self, ray: &Ray) -> bool {
        ray.direction().dot(self.normal) < 0.0
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Nearest intersection with parameter strictly inside `ray_t`, if any.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;

    /// Spatial extent over the time range `time`.
    ///
    /// `None` means the object cannot be bounded, which makes it unusable
    /// inside a BVH.
    fn bounding_box(&self, time: Interval) -> Option<Aabb>;
}

/// A list of hittable objects, intersected by linear scan.
#[derive(Default)]
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> &[Box<dyn Hittable>] {
        &self.objects
    }

    /// Give up the members, e.g. to hand them to `BvhNode::new`.
    pub fn into_objects(self) -> Vec<Box<dyn Hittable>> {
        self.objects
    }
}

impl From<Vec<Box<dyn Hittable>>> for HittableList {
    fn from(objects: Vec<Box<dyn Hittable>>) -> Self {
        Self { objects }
    }
}

impl FromIterator<Box<dyn Hittable>> for HittableList {
    fn from_iter<I: IntoIterator<Item = Box<dyn Hittable>>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;

        for object in &self.objects {
            let search = closest.map_or(ray_t, |rec| ray_t.with_max(rec.t));
            if let Some(rec) = object.hit(ray, search) {
                closest = Some(rec);
            }
        }

        closest
    }

    fn bounding_box(&self, time: Interval) -> Option<Aabb> {
        let (first, rest) = self.objects.split_first()?;
        rest.iter().try_fold(first.bounding_box(time)?, |acc, object| {
            Some(Aabb::surrounding(&acc, &object.bounding_box(time)?))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Lambertian, Sphere};
    use std::sync::Arc;

    /// Hittable with no spatial extent.
    struct Unbounded;

    impl Hittable for Unbounded {
        fn hit(&self, _ray: &Ray, _ray_t: Interval) -> Option<HitRecord<'_>> {
            None
        }

        fn bounding_box(&self, _time: Interval) -> Option<Aabb> {
            None
        }
    }

    fn sphere_at(z: f32) -> Box<dyn Hittable> {
        let material = Arc::new(Lambertian::new(Vec3::splat(0.5)));
        Box::new(Sphere::new(Vec3::new(0.0, 0.0, z), 0.5, material))
    }

    #[test]
    fn test_list_returns_nearest_regardless_of_order() {
        let list: HittableList = vec![sphere_at(-10.0), sphere_at(-3.0), sphere_at(-6.0)]
            .into_iter()
            .collect();

        let ray = Ray::new_simple(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = list.hit(&ray, Interval::new(0.001, f32::INFINITY)).unwrap();
        assert!((rec.t - 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_list_miss() {
        let list = HittableList::from(vec![sphere_at(-3.0)]);
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::Y);
        assert!(list.hit(&ray, Interval::new(0.001, f32::INFINITY)).is_none());
    }

    #[test]
    fn test_list_bounding_box_is_union() {
        let list = HittableList::from(vec![sphere_at(-3.0), sphere_at(-10.0)]);
        let bbox = list.bounding_box(Interval::point(0.0)).unwrap();

        assert_eq!(bbox.min(), Vec3::new(-0.5, -0.5, -10.5));
        assert_eq!(bbox.max(), Vec3::new(0.5, 0.5, -2.5));
    }

    #[test]
    fn test_list_bounding_box_none_when_empty_or_unbounded() {
        assert!(HittableList::new().bounding_box(Interval::point(0.0)).is_none());

        let mut list = HittableList::new();
        list.add(sphere_at(-3.0));
        list.add(Box::new(Unbounded));
        assert_eq!(list.len(), 2);
        assert!(list.bounding_box(Interval::point(0.0)).is_none());
    }

    #[test]
    fn test_list_clear() {
        let mut list = HittableList::from(vec![sphere_at(-3.0), sphere_at(-6.0)]);
        list.clear();

        assert!(list.is_empty());
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(list.hit(&ray, Interval::new(0.001, f32::INFINITY)).is_none());
    }

    #[test]
    fn test_front_face() {
        let list = HittableList::from(vec![sphere_at(-3.0)]);
        let outside = Ray::new_simple(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = list.hit(&outside, Interval::new(0.001, f32::INFINITY)).unwrap();
        assert!(rec.is_front_face(&outside));

        let inside = Ray::new_simple(Vec3::new(0.0, 0.0, -3.0), Vec3::new(0.0, 0.0, -1.0));
        let rec = list.hit(&inside, Interval::new(0.001, f32::INFINITY)).unwrap();
        assert!(!rec.is_front_face(&inside));
    }
}
