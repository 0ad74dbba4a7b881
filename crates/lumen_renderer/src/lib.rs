//! Lumen - CPU Path Tracing
//!
//! A Monte Carlo path tracer over spheres and moving spheres, accelerated by
//! a randomized-axis BVH, with diffuse, metal, glass and emissive materials.
//!
//! The crate never seeds randomness on its own: every stochastic operation
//! takes an explicit `&mut dyn RngCore`.

mod bvh;
mod camera;
mod config;
mod hittable;
mod integrator;
mod material;
mod ppm;
mod random;
mod renderer;
mod sphere;

pub use bvh::{BuildError, BvhNode};
pub use camera::Camera;
pub use config::{ConfigError, RenderConfig};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use integrator::{Background, PathTracer, Sky};
pub use material::{
    reflect, refract, schlick, Color, Dielectric, DiffuseLight, Lambertian, Material, Metal,
    ScatterResult,
};
pub use ppm::write_ppm;
pub use random::{gen_f32, random_in_unit_disk, random_on_unit_sphere};
pub use renderer::{color_to_rgb, linear_to_gamma, render, render_pixel, ImageBuffer};
pub use sphere::{MovingSphere, Sphere};

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Aabb, Interval, Ray, Vec3};
