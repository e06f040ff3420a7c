// One frame = advance the simulation from the frame timestamp, then clear and redraw.
// Scheduling belongs to whoever calls `tick`.

use crate::error::RenderError;
use crate::renderer::Renderer;
use crate::simulation::ParticleSystem;

pub struct FrameDriver {
    system: ParticleSystem,
    renderer: Box<dyn Renderer>,
}

impl FrameDriver {
    // Brings the renderer to the simulation's viewport size before the first frame
    pub fn new(system: ParticleSystem, mut renderer: Box<dyn Renderer>) -> Self {
        let viewport = *system.viewport();
        renderer.resize(viewport.width, viewport.height);
        FrameDriver { system, renderer }
    }

    pub fn system(&self) -> &ParticleSystem {
        &self.system
    }

    pub fn tick(&mut self, timestamp: f64) -> Result<(), RenderError> {
        {
            #[cfg(feature = "frame-timers")]
            let _timer = crate::Timer::new("ParticleSystem::advance");
            self.system.advance(timestamp);
        }

        #[cfg(feature = "frame-timers")]
        let _timer = crate::Timer::new("Renderer::draw_particles");
        self.renderer.clear();
        self.renderer.draw_particles(self.system.particles())
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.system.resize(width, height);
        self.renderer.resize(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Variant, VariantConfig};
    use crate::particle::Particle;
    use crate::viewport::Viewport;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, PartialEq)]
    enum Call {
        Resize(u32, u32),
        Clear,
        Draw(usize),
    }

    struct RecordingRenderer {
        calls: Rc<RefCell<Vec<Call>>>,
        frames: Rc<RefCell<Vec<Vec<Particle>>>>,
    }

    impl Renderer for RecordingRenderer {
        fn resize(&mut self, width: u32, height: u32) {
            self.calls.borrow_mut().push(Call::Resize(width, height));
        }

        fn clear(&mut self) {
            self.calls.borrow_mut().push(Call::Clear);
        }

        fn draw_particles(&mut self, particles: &[Particle]) -> Result<(), RenderError> {
            self.calls.borrow_mut().push(Call::Draw(particles.len()));
            self.frames.borrow_mut().push(particles.to_vec());
            Ok(())
        }
    }

    struct FailingRenderer;

    impl Renderer for FailingRenderer {
        fn resize(&mut self, _width: u32, _height: u32) {}
        fn clear(&mut self) {}
        fn draw_particles(&mut self, _particles: &[Particle]) -> Result<(), RenderError> {
            Err(RenderError::Js("context lost".to_owned()))
        }
    }

    fn recording_driver(
        variant: Variant,
    ) -> (
        FrameDriver,
        Rc<RefCell<Vec<Call>>>,
        Rc<RefCell<Vec<Vec<Particle>>>>,
    ) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let frames = Rc::new(RefCell::new(Vec::new()));
        let system = ParticleSystem::with_rng(
            &VariantConfig::for_variant(variant),
            Viewport::new(800, 600),
            StdRng::seed_from_u64(11),
        );
        let renderer = RecordingRenderer {
            calls: calls.clone(),
            frames: frames.clone(),
        };
        (FrameDriver::new(system, Box::new(renderer)), calls, frames)
    }

    #[test]
    fn sizes_renderer_on_creation() {
        let (_driver, calls, _) = recording_driver(Variant::Starfield);
        assert_eq!(*calls.borrow(), vec![Call::Resize(800, 600)]);
    }

    #[test]
    fn tick_clears_then_draws_every_particle() {
        let (mut driver, calls, frames) = recording_driver(Variant::Squares);
        driver.tick(16.0).unwrap();
        driver.tick(32.0).unwrap();
        assert_eq!(
            *calls.borrow(),
            vec![
                Call::Resize(800, 600),
                Call::Clear,
                Call::Draw(500),
                Call::Clear,
                Call::Draw(500),
            ]
        );
        // The first frame draws the freshly spawned population unmoved
        assert!(frames.borrow()[0].iter().all(|p| p.pos == [400.0, 300.0]));
        assert_eq!(frames.borrow()[1], driver.system().particles());
    }

    #[test]
    fn resize_reaches_system_and_renderer() {
        let (mut driver, calls, _) = recording_driver(Variant::WebGlStarfield);
        driver.resize(400, 300);
        assert_eq!(driver.system().viewport().centre, [200.0, 150.0]);
        assert_eq!(calls.borrow().last(), Some(&Call::Resize(400, 300)));
    }

    #[test]
    fn render_failures_are_returned() {
        let system = ParticleSystem::with_rng(
            &VariantConfig::for_variant(Variant::Starfield),
            Viewport::new(10, 10),
            StdRng::seed_from_u64(0),
        );
        let mut driver = FrameDriver::new(system, Box::new(FailingRenderer));
        assert!(driver.tick(0.0).is_err());
    }
}
