//! Recursive path-tracing estimator.
//!
//! `radiance = emitted + attenuation * radiance(scattered)`, cut off by a hard
//! depth bound (no Russian roulette). The estimator only reads the scene, so
//! independent samples can run on any number of threads as long as each
//! one brings its own generator.

use crate::{Color, Hittable, RenderConfig, ScatterResult};
use lumen_math::{Interval, Ray};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Radiance arriving along rays that leave the scene.
pub trait Background: Send + Sync {
    fn radiance(&self, ray: &Ray) -> Color;
}

impl<F> Background for F
where
    F: Fn(&Ray) -> Color + Send + Sync,
{
    fn radiance(&self, ray: &Ray) -> Color {
        self(ray)
    }
}

/// Configurable background: a constant color or a vertical gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sky {
    Solid(Color),
    /// Linear blend from `bottom` (straight down) to `top` (straight up)
    /// on the normalized direction's y component.
    Gradient { bottom: Color, top: Color },
}

impl Default for Sky {
    fn default() -> Self {
        Sky::Gradient {
            bottom: Color::ONE,
            top: Color::new(0.5, 0.7, 1.0),
        }
    }
}

impl Background for Sky {
    fn radiance(&self, ray: &Ray) -> Color {
        match *self {
            Sky::Solid(color) => color,
            Sky::Gradient { bottom, top } => {
                let a = 0.5 * (ray.direction().normalize_or_zero().y + 1.0);
                bottom.lerp(top, a)
            }
        }
    }
}

/// Path tracer over an immutable scene root.
pub struct PathTracer<'a> {
    world: &'a dyn Hittable,
    background: &'a dyn Background,
    max_depth: u32,
    shadow_bias: f32,
}

impl<'a> PathTracer<'a> {
    pub const DEFAULT_MAX_DEPTH: u32 = 50;
    pub const DEFAULT_SHADOW_BIAS: f32 = 1e-4;

    pub fn new(world: &'a dyn Hittable, background: &'a dyn Background) -> Self {
        Self {
            world,
            background,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            shadow_bias: Self::DEFAULT_SHADOW_BIAS,
        }
    }

    /// Tracer using the depth, bias and background of `config`.
    pub fn from_config(world: &'a dyn Hittable, config: &'a RenderConfig) -> Self {
        Self::new(world, &config.background)
            .with_max_depth(config.max_depth)
            .with_shadow_bias(config.shadow_bias)
    }

    /// Number of scatter events followed before only emission is counted.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Lower bound of the hit interval, keeping scattered rays from
    /// re-hitting the surface they start on.
    pub fn with_shadow_bias(mut self, shadow_bias: f32) -> Self {
        self.shadow_bias = shadow_bias;
        self
    }

    pub fn with_background(mut self, background: &'a dyn Background) -> Self {
        self.background = background;
        self
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Radiance estimate for a camera ray.
    pub fn radiance(&self, ray: &Ray, rng: &mut dyn RngCore) -> Color {
        self.trace(ray, 0, rng)
    }

    /// Radiance estimate for a ray that is already `depth` bounces deep.
    pub fn trace(&self, ray: &Ray, depth: u32, rng: &mut dyn RngCore) -> Color {
        let Some(rec) = self
            .world
            .hit(ray, Interval::new(self.shadow_bias, f32::INFINITY))
        else {
            return self.background.radiance(ray);
        };

        let emitted = rec.material.emitted(rec.p);
        if depth >= self.max_depth {
            return emitted;
        }

        match rec.material.scatter(ray, &rec, rng) {
            Some(ScatterResult {
                attenuation,
                scattered,
            }) => emitted + attenuation * self.trace(&scattered, depth + 1, rng),
            None => emitted,
        }
    }
}
