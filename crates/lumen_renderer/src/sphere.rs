//! Sphere primitives for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use lumen_math::{Aabb, Interval, Ray, Vec3};
use std::sync::Arc;

/// Solve `|origin + t*dir - center|^2 = radius^2` for the nearest root in
/// `ray_t`, trying the smaller root first.
///
/// Uses the half-b form: with `oc = center - origin`, `h = dot(dir, oc)`,
/// the discriminant is `h^2 - a*c`. A tangent ray (discriminant zero) counts
/// as a miss.
fn nearest_root(center: Vec3, radius: f32, ray: &Ray, ray_t: Interval) -> Option<f32> {
    let oc = center - ray.origin();
    let a = ray.direction().length_squared();
    let h = ray.direction().dot(oc);
    let c = oc.length_squared() - radius * radius;

    let discriminant = h * h - a * c;
    if discriminant <= 0.0 {
        return None;
    }

    let sqrtd = discriminant.sqrt();
    [(h - sqrtd) / a, (h + sqrtd) / a]
        .into_iter()
        .find(|&root| ray_t.surrounds(root))
}

fn sphere_hit<'a>(
    center: Vec3,
    radius: f32,
    material: &'a dyn Material,
    ray: &Ray,
    ray_t: Interval,
) -> Option<HitRecord<'a>> {
    let t = nearest_root(center, radius, ray, ray_t)?;
    let p = ray.at(t);
    // Dividing by a signed radius lets a negative radius flip the normal
    // inward (hollow dielectric shells).
    let normal = ((p - center) / radius).normalize();

    Some(HitRecord {
        t,
        p,
        normal,
        material,
    })
}

/// A static sphere.
///
/// A negative radius keeps the same surface but points the normals inward.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<dyn Material>,
    bbox: Aabb,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, material: Arc<dyn Material>) -> Self {
        Self {
            center,
            radius,
            material,
            bbox: Aabb::around_sphere(center, radius),
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        sphere_hit(self.center, self.radius, self.material.as_ref(), ray, ray_t)
    }

    fn bounding_box(&self, _time: Interval) -> Option<Aabb> {
        Some(self.bbox)
    }
}

/// A sphere whose center moves linearly from `center0` at `time0` to
/// `center1` at `time1`. Rays pick the position through their `time`.
pub struct MovingSphere {
    center0: Vec3,
    center1: Vec3,
    time0: f32,
    time1: f32,
    radius: f32,
    material: Arc<dyn Material>,
}

impl MovingSphere {
    pub fn new(
        center0: Vec3,
        center1: Vec3,
        time0: f32,
        time1: f32,
        radius: f32,
        material: Arc<dyn Material>,
    ) -> Self {
        Self {
            center0,
            center1,
            time0,
            time1,
            radius,
            material,
        }
    }

    /// Center position at `time`. Times outside `[time0, time1]` extrapolate
    /// along the same line.
    pub fn center(&self, time: f32) -> Vec3 {
        let span = self.time1 - self.time0;
        if span == 0.0 {
            return self.center0;
        }
        self.center0 + ((time - self.time0) / span) * (self.center1 - self.center0)
    }
}

impl Hittable for MovingSphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let center = self.center(ray.time());
        sphere_hit(center, self.radius, self.material.as_ref(), ray, ray_t)
    }

    /// Union of the boxes at both ends of the time range. Conservative for
    /// linear motion, since the swept volume lies between the two.
    fn bounding_box(&self, time: Interval) -> Option<Aabb> {
        let start = Aabb::around_sphere(self.center(time.min), self.radius);
        let end = Aabb::around_sphere(self.center(time.max), self.radius);
        Some(Aabb::surrounding(&start, &end))
    }
}
