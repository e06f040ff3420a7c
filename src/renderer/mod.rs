// Renderers read the particle slice each frame and never touch simulation state.
// Every one of them owns its canvas and keeps the backing store the size of the window.

mod points;
mod squares;
mod trail;

pub use points::PointRenderer;
pub use squares::SquareRenderer;
pub use trail::TrailRenderer;

use crate::config::Variant;
use crate::error::RenderError;
use crate::particle::Particle;
use web_sys::HtmlCanvasElement;

pub trait Renderer {
    fn resize(&mut self, width: u32, height: u32);
    fn clear(&mut self);
    fn draw_particles(&mut self, particles: &[Particle]) -> Result<(), RenderError>;
}

pub fn for_variant(
    variant: Variant,
    canvas: HtmlCanvasElement,
) -> Result<Box<dyn Renderer>, RenderError> {
    let renderer: Box<dyn Renderer> = match variant {
        Variant::Starfield => Box::new(TrailRenderer::new(canvas)?),
        Variant::WebGlStarfield => Box::new(PointRenderer::new(canvas)?),
        Variant::Squares => Box::new(SquareRenderer::new(canvas)?),
    };
    Ok(renderer)
}
