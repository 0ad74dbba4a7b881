//! Render configuration.

use crate::Sky;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("samples_per_pixel must be at least 1")]
    InvalidSamples,

    #[error("max_depth must be at least 1")]
    InvalidMaxDepth,

    #[error("shadow_bias must be positive and finite, got {0}")]
    InvalidShadowBias(f32),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Minimum hit distance for scattered rays
    pub shadow_bias: f32,
    /// Radiance for rays that escape the scene
    pub background: Sky,
    /// Seed for the render's random generator
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 100,
            max_depth: 50,
            shadow_bias: 1e-4,
            background: Sky::default(),
            seed: 0,
        }
    }
}

impl RenderConfig {
    /// Parse a JSON configuration. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: RenderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::InvalidSamples);
        }
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidMaxDepth);
        }
        if !(self.shadow_bias.is_finite() && self.shadow_bias > 0.0) {
            return Err(ConfigError::InvalidShadowBias(self.shadow_bias));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn test_default_is_valid() {
        assert!(RenderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = RenderConfig::from_json(r#"{ "samples_per_pixel": 8, "seed": 42 }"#).unwrap();
        assert_eq!(config.samples_per_pixel, 8);
        assert_eq!(config.seed, 42);
        assert_eq!(config.max_depth, 50);
    }

    #[test]
    fn test_from_json_background() {
        let solid = RenderConfig::from_json(r#"{ "background": { "solid": [0.0, 0.0, 0.0] } }"#)
            .unwrap();
        assert_eq!(solid.background, Sky::Solid(Color::ZERO));

        let gradient = RenderConfig::from_json(
            r#"{ "background": { "gradient": { "bottom": [1, 1, 1], "top": [0.2, 0.3, 0.9] } } }"#,
        )
        .unwrap();
        assert_eq!(
            gradient.background,
            Sky::Gradient {
                bottom: Color::ONE,
                top: Color::new(0.2, 0.3, 0.9)
            }
        );
    }

    #[test]
    fn test_round_trip_through_json() {
        let config = RenderConfig {
            samples_per_pixel: 16,
            max_depth: 8,
            shadow_bias: 0.001,
            background: Sky::Solid(Color::new(0.1, 0.2, 0.3)),
            seed: 7,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(RenderConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_validation_errors() {
        let zero_samples = RenderConfig {
            samples_per_pixel: 0,
            ..RenderConfig::default()
        };
        assert!(matches!(zero_samples.validate(), Err(ConfigError::InvalidSamples)));

        let zero_depth = RenderConfig {
            max_depth: 0,
            ..RenderConfig::default()
        };
        assert!(matches!(zero_depth.validate(), Err(ConfigError::InvalidMaxDepth)));

        for bias in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let config = RenderConfig {
                shadow_bias: bias,
                ..RenderConfig::default()
            };
            assert!(matches!(config.validate(), Err(ConfigError::InvalidShadowBias(_))));
        }
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            RenderConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
