//! Sampling helpers. All of them draw from a caller-supplied generator.

use lumen_math::Vec3;
use rand::{Rng, RngCore};
use std::f32::consts::TAU;

/// Uniform float in `[0, 1)`.
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Uniformly distributed point on the unit sphere.
///
/// Picks an azimuth `phi` and a height `z` uniformly; the projected circle
/// at height `z` has radius `sqrt(1 - z^2)` (Archimedes' hat-box theorem).
pub fn random_on_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    let phi = gen_f32(rng) * TAU;
    let z = gen_f32(rng) * 2.0 - 1.0;
    let r = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(r * phi.cos(), r * phi.sin(), z)
}

/// Random point inside the unit disk on the z = 0 plane.
pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(gen_f32(rng) * 2.0 - 1.0, gen_f32(rng) * 2.0 - 1.0, 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}
