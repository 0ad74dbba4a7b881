//! Per-pixel sampling loop and image buffer.
//!
//! Single threaded and row-major. Each pixel averages
//! `samples_per_pixel` jittered radiance estimates.

use crate::{Camera, Color, PathTracer, RenderConfig};
use crate::random::gen_f32;
use rand::RngCore;
use std::time::Instant;

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Gamma-correct a linear color and quantize each channel to `[0, 255]`.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let channel = |x: f32| (255.0 * linear_to_gamma(x).clamp(0.0, 1.0)) as u8;
    [channel(color.x), channel(color.y), channel(color.z)]
}

/// Average of `samples` radiance estimates through pixel `(x, y)`.
pub fn render_pixel(
    camera: &Camera,
    tracer: &PathTracer<'_>,
    x: u32,
    y: u32,
    samples: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let width = camera.image_width as f32;
    let height = camera.image_height as f32;

    let mut pixel_color = Color::ZERO;
    for _ in 0..samples {
        let s = (x as f32 + gen_f32(rng)) / width;
        let t = (y as f32 + gen_f32(rng)) / height;
        let ray = camera.get_ray(s, t, rng);
        pixel_color += tracer.radiance(&ray, rng);
    }

    pixel_color / samples.max(1) as f32
}

/// Linear-space image, row-major, top row first.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Gamma-corrected 8-bit RGB triples in pixel order.
    pub fn to_rgb(&self) -> Vec<[u8; 3]> {
        self.pixels.iter().copied().map(color_to_rgb).collect()
    }
}

/// Render the whole frame.
pub fn render(
    camera: &Camera,
    tracer: &PathTracer<'_>,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);
    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}",
        image.width,
        image.height,
        config.samples_per_pixel,
        tracer.max_depth()
    );

    let start = Instant::now();
    for y in 0..image.height {
        for x in 0..image.width {
            let color = render_pixel(camera, tracer, x, y, config.samples_per_pixel, rng);
            image.set(x, y, color);
        }
        log::debug!(
            "Progress: {:.1}%",
            100.0 * (y + 1) as f32 / image.height as f32
        );
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}
