//! Shader compilation and linking against a live `glow::Context`.
//!
//! Source formatting and the error type live in [`crate::shader`]; this
//! module only issues the native calls.

use crate::shader::{format_shader_error, ShaderError, ShaderPair};

fn stage_name(shader_type: u32) -> &'static str {
    match shader_type {
        glow::VERTEX_SHADER => "vertex",
        glow::FRAGMENT_SHADER => "fragment",
        _ => "unknown",
    }
}

/// Compiles a single shader stage.
///
/// # Errors
///
/// Returns `ShaderError::CompileError` carrying the line-numbered source and
/// the driver's info log if the GLSL fails to compile.
#[allow(unsafe_code)]
pub fn compile_shader(
    gl: &glow::Context,
    shader_type: u32,
    source: &str,
) -> Result<glow::Shader, ShaderError> {
    use glow::HasContext;

    let stage = stage_name(shader_type);

    // SAFETY: glow wraps raw GL calls as unsafe. shader_type is a stage
    // constant and the shader is deleted on the failure path.
    unsafe {
        let shader = gl
            .create_shader(shader_type)
            .map_err(|log| ShaderError::CompileError {
                stage: stage.to_string(),
                log,
            })?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if gl.get_shader_compile_status(shader) {
            return Ok(shader);
        }

        let info_log = gl.get_shader_info_log(shader);
        gl.delete_shader(shader);
        Err(ShaderError::CompileError {
            stage: stage.to_string(),
            log: format_shader_error(source, &info_log),
        })
    }
}

/// Links compiled vertex and fragment stages into a program.
///
/// The stages are detached afterwards; the caller still owns and deletes them.
///
/// # Errors
///
/// Returns `ShaderError::LinkError` with the driver's info log if linking fails.
#[allow(unsafe_code)]
pub fn link_program(
    gl: &glow::Context,
    vertex: glow::Shader,
    fragment: glow::Shader,
) -> Result<glow::Program, ShaderError> {
    use glow::HasContext;

    // SAFETY: both shader handles come from compile_shader; the program is
    // deleted if linking fails.
    unsafe {
        let program = gl.create_program().map_err(ShaderError::LinkError)?;
        gl.attach_shader(program, vertex);
        gl.attach_shader(program, fragment);
        gl.link_program(program);
        gl.detach_shader(program, vertex);
        gl.detach_shader(program, fragment);

        if gl.get_program_link_status(program) {
            return Ok(program);
        }

        let info_log = gl.get_program_info_log(program);
        gl.delete_program(program);
        Err(ShaderError::LinkError(info_log))
    }
}

/// Compiles and links a [`ShaderPair`]. Intermediate shader objects are always
/// deleted.
///
/// # Errors
///
/// Returns the first compile error, or the link error.
#[allow(unsafe_code)]
pub fn compile_program(gl: &glow::Context, shaders: &ShaderPair) -> Result<glow::Program, ShaderError> {
    use glow::HasContext;

    let vert = compile_shader(gl, glow::VERTEX_SHADER, &shaders.vertex)?;
    let frag = match compile_shader(gl, glow::FRAGMENT_SHADER, &shaders.fragment) {
        Ok(frag) => frag,
        Err(e) => {
            // SAFETY: vert is a live shader from compile_shader.
            unsafe { gl.delete_shader(vert) };
            return Err(e);
        }
    };

    let result = link_program(gl, vert, frag);

    // SAFETY: both handles are live; a linked program keeps its own copy.
    unsafe {
        gl.delete_shader(vert);
        gl.delete_shader(frag);
    }

    if result.is_ok() {
        tracing::debug!(
            vertex_len = shaders.vertex.len(),
            fragment_len = shaders.fragment.len(),
            "linked shader program"
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_names_follow_shader_type() {
        assert_eq!(stage_name(glow::VERTEX_SHADER), "vertex");
        assert_eq!(stage_name(glow::FRAGMENT_SHADER), "fragment");
        assert_eq!(stage_name(0), "unknown");
    }

    #[test]
    #[ignore = "requires GL context"]
    fn compile_program_links_valid_pair() {
        // Would test: compile_program(gl, &ShaderPair) returns Ok for valid GLSL.
    }

    #[test]
    #[ignore = "requires GL context"]
    fn compile_program_reports_numbered_source_on_error() {
        // Would test: a syntax error yields CompileError whose log contains "1: ".
    }
}
