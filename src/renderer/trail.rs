// Canvas 2D renderer. Instead of wiping the frame it paints a translucent black
// rectangle over it, so moving particles leave fading trails.

use super::Renderer;
use crate::error::RenderError;
use crate::particle::Particle;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct TrailRenderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl TrailRenderer {
    pub const PARTICLE_ALPHA: f64 = 0.4;
    pub const FADE_STYLE: &'static str = "rgba(0,0,0,0.2)";

    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, RenderError> {
        let context = canvas
            .get_context("2d")?
            .ok_or(RenderError::ContextUnavailable("2d"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RenderError::ContextUnavailable("2d"))?;

        Ok(TrailRenderer {
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            canvas,
            context,
        })
    }
}

impl Renderer for TrailRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.width = width as f64;
        self.height = height as f64;
    }

    #[allow(deprecated)]
    fn clear(&mut self) {
        self.context
            .set_fill_style(&JsValue::from_str(TrailRenderer::FADE_STYLE));
        self.context.fill_rect(0.0, 0.0, self.width, self.height);
    }

    #[allow(deprecated)]
    fn draw_particles(&mut self, particles: &[Particle]) -> Result<(), RenderError> {
        self.context.save();
        self.context.set_global_composite_operation("lighter")?;
        self.context.set_global_alpha(TrailRenderer::PARTICLE_ALPHA);

        for p in particles {
            self.context
                .set_fill_style(&JsValue::from_str(&p.color.to_css()));
            self.context.fill_rect(p.pos[0], p.pos[1], p.size, p.size);
        }

        self.context.restore();
        Ok(())
    }
}
