// Per-demo constants and the optional JSON overrides a page can pass in

use crate::error::RenderError;
use crate::factory::{Palette, ParticleFactory, SpawnPoint};
use crate::viewport::CoordinateSpace;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Variant {
    // Canvas 2D with fading trails
    Starfield,
    // WebGL2 points in clip space
    WebGlStarfield,
    // WebGL2 quads, one draw call each
    Squares,
}

impl FromStr for Variant {
    type Err = RenderError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "starfield" | "canvas" | "canvas-2d" => Ok(Variant::Starfield),
            "webgl-starfield" | "webgl" => Ok(Variant::WebGlStarfield),
            "squares" | "webgl2" => Ok(Variant::Squares),
            _ => Err(RenderError::UnknownVariant(name.to_owned())),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VariantConfig {
    pub variant: Variant,
    pub particle_count: usize,
    pub space: CoordinateSpace,
    pub factory: ParticleFactory,
}

impl VariantConfig {
    pub const MAX_PARTICLES: usize = 100_000;

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Starfield => VariantConfig {
                variant,
                particle_count: 500,
                space: CoordinateSpace::Pixels,
                factory: ParticleFactory::new(400.0, SpawnPoint::ViewportCentre, Palette::Hue),
            },
            Variant::WebGlStarfield => VariantConfig {
                variant,
                particle_count: 5000,
                space: CoordinateSpace::Normalized,
                factory: ParticleFactory::new(0.6, SpawnPoint::Origin, Palette::Hue),
            },
            Variant::Squares => VariantConfig {
                variant,
                particle_count: 500,
                space: CoordinateSpace::Pixels,
                factory: ParticleFactory::new(500.0, SpawnPoint::ViewportCentre, Palette::Rgb),
            },
        }
    }

    pub fn with_options(mut self, options: &DemoOptions) -> Result<Self, RenderError> {
        if let Some(count) = options.particle_count {
            if count == 0 {
                return Err(RenderError::InvalidOptions(
                    "particleCount must be positive".to_owned(),
                ));
            }
            if count > VariantConfig::MAX_PARTICLES {
                return Err(RenderError::InvalidOptions(format!(
                    "particleCount must be at most {}, got {}",
                    VariantConfig::MAX_PARTICLES,
                    count
                )));
            }
            self.particle_count = count;
        }
        if let Some(max_velocity) = options.max_velocity {
            if !max_velocity.is_finite() || max_velocity <= 0.0 {
                return Err(RenderError::InvalidOptions(format!(
                    "maxVelocity must be a positive number, got {}",
                    max_velocity
                )));
            }
            self.factory.max_velocity = max_velocity;
        }
        Ok(self)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DemoOptions {
    #[serde(default)]
    pub particle_count: Option<usize>,
    #[serde(default)]
    pub max_velocity: Option<f64>,
}

impl DemoOptions {
    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        if json.trim().is_empty() {
            return Ok(DemoOptions::default());
        }
        Ok(serde_json::from_str(json)?)
    }
}
