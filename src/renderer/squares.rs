// WebGL2 renderer drawing each particle as a coloured square in pixel space.
// One unit quad lives in a vertex array object; every particle gets its own
// matrix and colour uniform and a separate draw call.

use super::Renderer;
use crate::error::RenderError;
use crate::particle::Particle;
use crate::webgl_helpers;
use nalgebra_glm as glm;
use nalgebra_glm::TMat3;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext, WebGlBuffer, WebGlProgram, WebGlUniformLocation,
    WebGlVertexArrayObject,
};

const VERTEX_SHADER: &str = r#"#version 300 es
    in vec2 a_position;

    uniform mat3 u_matrix;

    void main() {
        gl_Position = vec4((u_matrix * vec3(a_position, 1)).xy, 0, 1);
    }
"#;

const FRAGMENT_SHADER: &str = r#"#version 300 es
    precision mediump float;

    uniform vec4 u_color;

    out vec4 outColor;

    void main() {
        outColor = u_color;
    }
"#;

// Two triangles covering (0,0)..(1,1)
const UNIT_QUAD: [f32; 12] = [
    0.0, 0.0, //
    1.0, 0.0, //
    0.0, 1.0, //
    0.0, 1.0, //
    1.0, 0.0, //
    1.0, 1.0, //
];

pub struct SquareRenderer {
    canvas: HtmlCanvasElement,
    context: WebGl2RenderingContext,
    program: WebGlProgram,
    // Kept alive for the vertex array that references it
    _quad_buffer: WebGlBuffer,
    vertex_array: WebGlVertexArrayObject,
    color_location: WebGlUniformLocation,
    matrix_location: WebGlUniformLocation,
    projection_mat: TMat3<f32>,
}

impl SquareRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, RenderError> {
        let context = canvas
            .get_context("webgl2")?
            .ok_or(RenderError::ContextUnavailable("webgl2"))?
            .dyn_into::<WebGl2RenderingContext>()
            .map_err(|_| RenderError::ContextUnavailable("webgl2"))?;

        let program = webgl_helpers::build_program(&context, VERTEX_SHADER, FRAGMENT_SHADER)?;
        let position_location = webgl_helpers::attrib_location(&context, &program, "a_position")?;
        let color_location = webgl_helpers::uniform_location(&context, &program, "u_color")?;
        let matrix_location = webgl_helpers::uniform_location(&context, &program, "u_matrix")?;

        let quad_buffer = context
            .create_buffer()
            .ok_or(RenderError::ResourceCreation("quad buffer"))?;
        let vertex_array = context
            .create_vertex_array()
            .ok_or(RenderError::ResourceCreation("vertex array"))?;

        context.bind_vertex_array(Some(&vertex_array));
        context.bind_buffer(WebGl2RenderingContext::ARRAY_BUFFER, Some(&quad_buffer));
        unsafe {
            let quad = js_sys::Float32Array::view(&UNIT_QUAD);
            context.buffer_data_with_array_buffer_view(
                WebGl2RenderingContext::ARRAY_BUFFER,
                &quad,
                WebGl2RenderingContext::STATIC_DRAW,
            );
        }
        context.enable_vertex_attrib_array(position_location);
        context.vertex_attrib_pointer_with_i32(
            position_location,
            2,
            WebGl2RenderingContext::FLOAT,
            false,
            0,
            0,
        );
        context.bind_vertex_array(None);

        let width = canvas.width();
        let height = canvas.height();
        Ok(SquareRenderer {
            canvas,
            context,
            program,
            _quad_buffer: quad_buffer,
            vertex_array,
            color_location,
            matrix_location,
            projection_mat: pixel_projection(width, height),
        })
    }
}

// Maps pixel coordinates (origin top left, y down) to clip space
#[rustfmt::skip]
pub fn pixel_projection(width: u32, height: u32) -> TMat3<f32> {
    let width = (width.max(1)) as f32;
    let height = (height.max(1)) as f32;
    glm::mat3(
        2.0 / width, 0.0, -1.0,
        0.0, -2.0 / height, 1.0,
        0.0, 0.0, 1.0,
    )
}

pub fn square_transform(projection: &TMat3<f32>, particle: &Particle) -> TMat3<f32> {
    let translated = glm::translate2d(
        projection,
        &glm::vec2(particle.pos[0] as f32, particle.pos[1] as f32),
    );
    glm::scale2d(&translated, &glm::vec2(particle.size as f32, particle.size as f32))
}

impl Renderer for SquareRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.context.viewport(0, 0, width as i32, height as i32);
        self.projection_mat = pixel_projection(width, height);
    }

    fn clear(&mut self) {
        self.context.clear_color(0.0, 0.0, 0.0, 0.0);
        self.context.clear(WebGl2RenderingContext::COLOR_BUFFER_BIT);
    }

    fn draw_particles(&mut self, particles: &[Particle]) -> Result<(), RenderError> {
        self.context.use_program(Some(&self.program));
        self.context.enable(WebGl2RenderingContext::BLEND);
        self.context.disable(WebGl2RenderingContext::DEPTH_TEST);
        self.context
            .blend_func(WebGl2RenderingContext::SRC_ALPHA, WebGl2RenderingContext::ONE);
        self.context.bind_vertex_array(Some(&self.vertex_array));

        for p in particles {
            let [r, g, b] = p.color.to_rgb();
            let matrix = square_transform(&self.projection_mat, p);
            self.context
                .uniform4f(Some(&self.color_location), r, g, b, 1.0);
            self.context.uniform_matrix3fv_with_f32_array(
                Some(&self.matrix_location),
                false,
                matrix.as_slice(),
            );
            self.context
                .draw_arrays(WebGl2RenderingContext::TRIANGLES, 0, 6);
        }

        self.context.bind_vertex_array(None);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn apply(matrix: &TMat3<f32>, x: f32, y: f32) -> (f32, f32) {
        let v = matrix * glm::vec3(x, y, 1.0);
        (v.x, v.y)
    }

    fn assert_close(actual: (f32, f32), expected: (f32, f32)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-5 && (actual.1 - expected.1).abs() < 1e-5,
            "{:?} != {:?}",
            actual,
            expected
        );
    }

    #[test]
    fn projection_maps_corners_to_clip_space() {
        let projection = pixel_projection(800, 600);
        assert_close(apply(&projection, 0.0, 0.0), (-1.0, 1.0));
        assert_close(apply(&projection, 800.0, 600.0), (1.0, -1.0));
        assert_close(apply(&projection, 400.0, 300.0), (0.0, 0.0));
    }

    #[test]
    fn square_covers_size_from_position() {
        let projection = pixel_projection(100, 100);
        let p = Particle::new([50.0, 25.0], [0.0, 0.0], 10.0, Color::Rgb([1.0, 1.0, 1.0]));
        let transform = square_transform(&projection, &p);
        assert_close(apply(&transform, 0.0, 0.0), apply(&projection, 50.0, 25.0));
        assert_close(apply(&transform, 1.0, 1.0), apply(&projection, 60.0, 35.0));
    }
}
