// Builds fresh particles at the spawn point with randomized velocity, size and color

use crate::color::Color;
use crate::particle::Particle;
use crate::viewport::Viewport;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpawnPoint {
    ViewportCentre,
    Origin,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Palette {
    Hue,
    Rgb,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParticleFactory {
    pub max_velocity: f64,
    pub spawn: SpawnPoint,
    pub palette: Palette,
}

impl ParticleFactory {
    pub const MIN_SIZE: f64 = 1.0;
    pub const MAX_SIZE: f64 = 21.0;
    pub const MAX_HUE: f64 = 360.0;

    pub fn new(max_velocity: f64, spawn: SpawnPoint, palette: Palette) -> Self {
        ParticleFactory {
            max_velocity,
            spawn,
            palette,
        }
    }

    pub fn spawn_point(&self, viewport: &Viewport) -> [f64; 2] {
        match self.spawn {
            SpawnPoint::ViewportCentre => viewport.centre,
            SpawnPoint::Origin => [0.0, 0.0],
        }
    }

    pub fn create<R: Rng + ?Sized>(&self, viewport: &Viewport, rng: &mut R) -> Particle {
        let vel = [self.make_velocity(rng), self.make_velocity(rng)];
        let size = rng.gen::<f64>() * (ParticleFactory::MAX_SIZE - ParticleFactory::MIN_SIZE)
            + ParticleFactory::MIN_SIZE;
        let color = match self.palette {
            Palette::Hue => Color::Hue(rng.gen::<f64>() * ParticleFactory::MAX_HUE),
            Palette::Rgb => Color::Rgb([rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>()]),
        };
        Particle::new(self.spawn_point(viewport), vel, size, color)
    }

    // Uniform in [-max/2, max/2), drawn independently per axis
    fn make_velocity<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen::<f64>() * self.max_velocity - self.max_velocity / 2.0
    }
}
