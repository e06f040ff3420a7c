// Helper functions for dealing with shaders, compiling and linking them into shader programs

use crate::error::RenderError;
use web_sys::{WebGl2RenderingContext, WebGlProgram, WebGlShader, WebGlUniformLocation};

pub fn compile_shader(
    context: &WebGl2RenderingContext,
    shader_type: u32,
    source: &str,
) -> Result<WebGlShader, RenderError> {
    let shader = context
        .create_shader(shader_type)
        .ok_or(RenderError::ResourceCreation("shader object"))?;
    context.shader_source(&shader, source);
    context.compile_shader(&shader);

    if context
        .get_shader_parameter(&shader, WebGl2RenderingContext::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let log = context
            .get_shader_info_log(&shader)
            .unwrap_or_else(|| String::from("Unknown error creating shader"));
        context.delete_shader(Some(&shader));
        Err(RenderError::ShaderCompile(log))
    }
}

pub fn link_program(
    context: &WebGl2RenderingContext,
    vertex_shader: &WebGlShader,
    fragment_shader: &WebGlShader,
) -> Result<WebGlProgram, RenderError> {
    let program = context
        .create_program()
        .ok_or(RenderError::ResourceCreation("program object"))?;
    context.attach_shader(&program, vertex_shader);
    context.attach_shader(&program, fragment_shader);
    context.link_program(&program);

    if context
        .get_program_parameter(&program, WebGl2RenderingContext::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let log = context
            .get_program_info_log(&program)
            .unwrap_or_else(|| String::from("Unknown error creating program object"));
        context.delete_program(Some(&program));
        Err(RenderError::ProgramLink(log))
    }
}

pub fn build_program(
    context: &WebGl2RenderingContext,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<WebGlProgram, RenderError> {
    let vertex_shader =
        compile_shader(context, WebGl2RenderingContext::VERTEX_SHADER, vertex_source)?;
    let fragment_shader =
        compile_shader(context, WebGl2RenderingContext::FRAGMENT_SHADER, fragment_source)?;
    link_program(context, &vertex_shader, &fragment_shader)
}

pub fn attrib_location(
    context: &WebGl2RenderingContext,
    program: &WebGlProgram,
    name: &'static str,
) -> Result<u32, RenderError> {
    let location = context.get_attrib_location(program, name);
    if location < 0 {
        return Err(RenderError::MissingAttribute(name));
    }
    Ok(location as u32)
}

pub fn uniform_location(
    context: &WebGl2RenderingContext,
    program: &WebGlProgram,
    name: &'static str,
) -> Result<WebGlUniformLocation, RenderError> {
    context
        .get_uniform_location(program, name)
        .ok_or(RenderError::MissingUniform(name))
}
