//! Random spheres scene.
//!
//! Builds the classic "many small spheres" scene with a few bouncing
//! spheres and a light, renders it and saves `render.ppm`.
//!
//! Usage: `cargo run --release --example random_spheres [config.json]`

use anyhow::Context;
use lumen_renderer::{
    render, BvhNode, Camera, Color, Dielectric, DiffuseLight, Hittable, Interval, Lambertian,
    Material, Metal, MovingSphere, PathTracer, RenderConfig, Sphere, Vec3,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

const OUTPUT: &str = "render.ppm";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            RenderConfig::from_json(&json).with_context(|| format!("parsing config {path}"))?
        }
        None => RenderConfig {
            samples_per_pixel: 32,
            max_depth: 10,
            ..RenderConfig::default()
        },
    };

    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut camera = Camera::new()
        .with_resolution(800, 450)
        .with_position(
            Vec3::new(13.0, 2.0, 3.0), // look_from
            Vec3::new(0.0, 0.0, 0.0),  // look_at
            Vec3::new(0.0, 1.0, 0.0),  // vup
        )
        .with_lens(20.0, 0.6, 10.0)
        .with_shutter(0.0, 1.0);
    camera.initialize();

    let (time0, time1) = camera.shutter();
    let objects = build_scene(&mut rng);
    log::info!("Created {} objects", objects.len());
    let world = BvhNode::new(objects, Interval::new(time0, time1), &mut rng)?;

    let tracer = PathTracer::from_config(&world, &config);
    let image = render(&camera, &tracer, &config, &mut rng);

    image
        .save_ppm(OUTPUT)
        .with_context(|| format!("writing {OUTPUT}"))?;
    log::info!("Saved to {}", OUTPUT);
    Ok(())
}

fn build_scene(rng: &mut StdRng) -> Vec<Box<dyn Hittable>> {
    let mut objects: Vec<Box<dyn Hittable>> = Vec::new();

    // Ground
    let ground: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5)));
    objects.push(Box::new(Sphere::new(Vec3::new(0.0, -1000.0, 0.0), 1000.0, ground)));

    // Three feature spheres; glass is shared by every glass sphere
    let glass: Arc<dyn Material> = Arc::new(Dielectric::new(1.5));
    objects.push(Box::new(Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0, glass.clone())));
    objects.push(Box::new(Sphere::new(
        Vec3::new(-4.0, 1.0, 0.0),
        1.0,
        Arc::new(Lambertian::new(Color::new(0.4, 0.2, 0.1))),
    )));
    objects.push(Box::new(Sphere::new(
        Vec3::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0)),
    )));

    // Light above the scene
    objects.push(Box::new(Sphere::new(
        Vec3::new(0.0, 7.0, 0.0),
        1.5,
        Arc::new(DiffuseLight::new(Color::new(4.0, 4.0, 4.0))),
    )));

    // Small random spheres
    for a in -11..11 {
        for b in -11..11 {
            let center = Vec3::new(
                a as f32 + 0.9 * rng.gen::<f32>(),
                0.2,
                b as f32 + 0.9 * rng.gen::<f32>(),
            );

            if (center - Vec3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let choose_mat: f32 = rng.gen();
            if choose_mat < 0.8 {
                // Diffuse, bouncing upward during the shutter
                let albedo = Color::new(
                    rng.gen::<f32>() * rng.gen::<f32>(),
                    rng.gen::<f32>() * rng.gen::<f32>(),
                    rng.gen::<f32>() * rng.gen::<f32>(),
                );
                let center1 = center + Vec3::new(0.0, 0.5 * rng.gen::<f32>(), 0.0);
                objects.push(Box::new(MovingSphere::new(
                    center,
                    center1,
                    0.0,
                    1.0,
                    0.2,
                    Arc::new(Lambertian::new(albedo)),
                )));
            } else if choose_mat < 0.95 {
                let albedo = Color::new(
                    0.5 + 0.5 * rng.gen::<f32>(),
                    0.5 + 0.5 * rng.gen::<f32>(),
                    0.5 + 0.5 * rng.gen::<f32>(),
                );
                let fuzz = 0.5 * rng.gen::<f32>();
                objects.push(Box::new(Sphere::new(
                    center,
                    0.2,
                    Arc::new(Metal::new(albedo, fuzz)),
                )));
            } else {
                objects.push(Box::new(Sphere::new(center, 0.2, glass.clone())));
            }
        }
    }

    objects
}
