// Fixed-size particle population, advanced by elapsed frame time.
// Particles that leave the bounds are replaced in their slot by a fresh one
// from the factory, so the population never changes size.

use crate::config::VariantConfig;
use crate::factory::ParticleFactory;
use crate::particle::Particle;
use crate::viewport::{Bounds, CoordinateSpace, Viewport};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct ParticleSystem<R = StdRng> {
    particles: Vec<Particle>,
    viewport: Viewport,
    space: CoordinateSpace,
    factory: ParticleFactory,
    last_frame_at: Option<f64>,
    rng: R,
}

impl ParticleSystem<StdRng> {
    pub fn new(config: &VariantConfig, viewport: Viewport) -> Self {
        ParticleSystem::with_rng(config, viewport, StdRng::from_entropy())
    }
}

impl<R: Rng> ParticleSystem<R> {
    pub fn with_rng(config: &VariantConfig, viewport: Viewport, mut rng: R) -> Self {
        let factory = config.factory;
        let particles = (0..config.particle_count)
            .map(|_| factory.create(&viewport, &mut rng))
            .collect();
        ParticleSystem {
            particles,
            viewport,
            space: config.space,
            factory,
            last_frame_at: None,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn bounds(&self) -> Bounds {
        self.space.bounds(&self.viewport)
    }

    pub fn last_frame_at(&self) -> Option<f64> {
        self.last_frame_at
    }

    // Frame-clock entry point. The first frame only records its timestamp.
    pub fn advance(&mut self, timestamp: f64) {
        let elapsed_ms = match self.last_frame_at {
            Some(previous) => timestamp - previous,
            None => 0.0,
        };
        self.last_frame_at = Some(timestamp);
        self.update(elapsed_ms);
    }

    pub fn update(&mut self, elapsed_ms: f64) {
        let bounds = self.space.bounds(&self.viewport);
        for particle in self.particles.iter_mut() {
            particle.integrate(elapsed_ms);
            if !bounds.contains(particle.pos) {
                *particle = self.factory.create(&self.viewport, &mut self.rng);
            }
        }
    }

    // Only the bounds and spawn point move; particles keep their positions
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport.resize(width, height);
    }
}
