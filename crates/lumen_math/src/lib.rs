// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod aabb;
mod interval;
mod ray;

pub use aabb::Aabb;
pub use interval::Interval;
pub use ray::Ray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_indexing_matches_fields() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], v.x);
        assert_eq!(v[1], v.y);
        assert_eq!(v[2], v.z);
    }

    #[test]
    fn test_vec3_componentwise_product() {
        let attenuation = Vec3::new(0.5, 1.0, 0.25);
        let light = Vec3::new(2.0, 2.0, 4.0);
        assert_eq!(attenuation * light, Vec3::new(1.0, 2.0, 1.0));
    }
}
