// WebGL2 renderer for particles living in clip space. Positions go straight
// into a dynamic vertex buffer and the whole population is one POINTS call.

use super::Renderer;
use crate::error::RenderError;
use crate::particle::Particle;
use crate::webgl_helpers;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext, WebGlBuffer, WebGlProgram};

const VERTEX_SHADER: &str = r#"#version 300 es
    in vec2 a_position;

    void main() {
        gl_Position = vec4(a_position, 1, 1);
        gl_PointSize = 1.0;
    }
"#;

const FRAGMENT_SHADER: &str = r#"#version 300 es
    precision mediump float;

    out vec4 outColor;

    void main() {
        outColor = vec4(1, 0, 0.5, 1);
    }
"#;

pub struct PointRenderer {
    canvas: HtmlCanvasElement,
    context: WebGl2RenderingContext,
    program: WebGlProgram,
    position_buffer: WebGlBuffer,
    position_location: u32,
    vertex_array: Vec<f32>,
}

impl PointRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, RenderError> {
        let context = canvas
            .get_context("webgl2")?
            .ok_or(RenderError::ContextUnavailable("webgl2"))?
            .dyn_into::<WebGl2RenderingContext>()
            .map_err(|_| RenderError::ContextUnavailable("webgl2"))?;

        let program = webgl_helpers::build_program(&context, VERTEX_SHADER, FRAGMENT_SHADER)?;
        context.use_program(Some(&program));

        context.clear_color(0.0, 0.0, 0.0, 1.0);
        context.clear_depth(1.0);
        context.enable(WebGl2RenderingContext::BLEND);
        context.disable(WebGl2RenderingContext::DEPTH_TEST);
        context.blend_func(WebGl2RenderingContext::SRC_ALPHA, WebGl2RenderingContext::ONE);

        let position_location = webgl_helpers::attrib_location(&context, &program, "a_position")?;
        context.enable_vertex_attrib_array(position_location);

        let position_buffer = context
            .create_buffer()
            .ok_or(RenderError::ResourceCreation("position buffer"))?;

        Ok(PointRenderer {
            canvas,
            context,
            program,
            position_buffer,
            position_location,
            vertex_array: Vec::new(),
        })
    }
}

impl Renderer for PointRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.context.viewport(0, 0, width as i32, height as i32);
    }

    fn clear(&mut self) {
        self.context.clear(
            WebGl2RenderingContext::COLOR_BUFFER_BIT | WebGl2RenderingContext::DEPTH_BUFFER_BIT,
        );
    }

    fn draw_particles(&mut self, particles: &[Particle]) -> Result<(), RenderError> {
        self.vertex_array.clear();
        for p in particles {
            self.vertex_array.push(p.pos[0] as f32);
            self.vertex_array.push(p.pos[1] as f32);
        }

        self.context.use_program(Some(&self.program));
        self.context.bind_buffer(
            WebGl2RenderingContext::ARRAY_BUFFER,
            Some(&self.position_buffer),
        );
        // The view is only valid until the next wasm allocation, so upload right away
        unsafe {
            let vertex_array = js_sys::Float32Array::view(&self.vertex_array);
            self.context.buffer_data_with_array_buffer_view(
                WebGl2RenderingContext::ARRAY_BUFFER,
                &vertex_array,
                WebGl2RenderingContext::DYNAMIC_DRAW,
            );
        }
        self.context.vertex_attrib_pointer_with_i32(
            self.position_location,
            2,
            WebGl2RenderingContext::FLOAT,
            false,
            0,
            0,
        );

        self.context
            .draw_arrays(WebGl2RenderingContext::POINTS, 0, particles.len() as i32);
        self.context.flush();
        Ok(())
    }
}
