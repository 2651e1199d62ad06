//! Drawing surface: a `glow::Context` plus its configuration and program cache.

use std::collections::HashMap;

use super::mesh_buffer::GpuMesh;
use super::native::{execute, execute_all};
use super::shader::compile_program;
use super::texture::{self, Texture};
use crate::context_options::ContextConfig;
use crate::error::GlError;
use crate::mesh::Mesh;
use crate::native::NativeCall;
use crate::settings::{draw_steps, DrawStep, Setting};
use crate::shader::{ShaderError, ShaderPair};
use crate::texture::{TextureBackend, TextureError, TextureUpload};
use crate::uniform::{Uniform, Uniforms};

/// One draw call: shaders, mesh, uniform values, and settings active while drawing.
pub struct Entity<'a> {
    pub shaders: &'a ShaderPair,
    pub mesh: &'a GpuMesh,
    pub uniforms: &'a Uniforms<Texture>,
    pub settings: &'a [Setting],
}

/// Wraps a `glow::Context` configured by a [`ContextConfig`].
///
/// Programs are compiled the first time a shader pair is drawn and reused
/// afterwards.
pub struct Surface {
    gl: glow::Context,
    config: ContextConfig,
    width: i32,
    height: i32,
    programs: HashMap<ShaderPair, glow::Program>,
}

impl Surface {
    /// Wraps `gl`, which must have been created with `config`'s attributes.
    ///
    /// Binds a vertex array object when the context supports one, since
    /// desktop core profiles refuse to draw without it.
    #[allow(unsafe_code)]
    pub fn new(gl: glow::Context, config: ContextConfig, width: i32, height: i32) -> Self {
        use glow::HasContext;

        // SAFETY: creating and binding a VAO has no preconditions.
        unsafe {
            if let Ok(vao) = gl.create_vertex_array() {
                gl.bind_vertex_array(Some(vao));
            }
        }

        Self {
            gl,
            config,
            width,
            height,
            programs: HashMap::new(),
        }
    }

    /// Returns a reference to the underlying `glow::Context`.
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    /// `(width, height)` of the drawing buffer.
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Updates the viewport size used by the next [`Surface::render`].
    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }

    /// Returns the program for `shaders`, compiling it on first use.
    pub fn program(&mut self, shaders: &ShaderPair) -> Result<glow::Program, ShaderError> {
        if let Some(&program) = self.programs.get(shaders) {
            return Ok(program);
        }
        let program = compile_program(&self.gl, shaders)?;
        self.programs.insert(shaders.clone(), program);
        Ok(program)
    }

    /// Uploads `mesh` into GPU buffers.
    pub fn upload_mesh(&self, mesh: &Mesh) -> Result<GpuMesh, GlError> {
        GpuMesh::upload(&self.gl, mesh)
    }

    /// Clears the drawing buffer and draws `entities` in order.
    ///
    /// # Errors
    ///
    /// Stops at the first entity whose shaders fail to compile.
    pub fn render(&mut self, entities: &[Entity<'_>]) -> Result<(), GlError> {
        let mut frame = vec![NativeCall::Viewport(0, 0, self.width, self.height)];
        frame.extend(self.config.clear_calls());
        execute_all(&self.gl, &frame);

        for entity in entities {
            let program = self.program(entity.shaders)?;
            self.draw(program, entity);
        }
        Ok(())
    }

    #[allow(unsafe_code)]
    fn draw(&self, program: glow::Program, entity: &Entity<'_>) {
        use glow::HasContext;

        // SAFETY: program was linked on this context; uniform locations are
        // looked up on that same program.
        unsafe {
            self.gl.use_program(Some(program));
        }
        let enabled = entity.mesh.bind(&self.gl, program);
        self.set_uniforms(program, entity.uniforms);

        for step in draw_steps(entity.settings) {
            match step {
                DrawStep::Call(call) => execute(&self.gl, &call),
                DrawStep::Draw => entity.mesh.draw(&self.gl),
            }
        }

        // SAFETY: these locations were enabled by bind() above.
        unsafe {
            for location in enabled {
                self.gl.disable_vertex_attrib_array(location);
            }
        }
    }

    #[allow(unsafe_code)]
    fn set_uniforms(&self, program: glow::Program, uniforms: &Uniforms<Texture>) {
        use glow::HasContext;

        let mut unit = 0;
        // SAFETY: locations come from the program currently in use; texture
        // handles were created on this context.
        unsafe {
            for (name, value) in uniforms.iter() {
                let Some(location) = self.gl.get_uniform_location(program, name) else {
                    continue;
                };
                let location = Some(&location);
                match value {
                    Uniform::Int(v) => self.gl.uniform_1_i32(location, *v),
                    Uniform::Float(v) => self.gl.uniform_1_f32(location, *v),
                    Uniform::Vec2(v) => self.gl.uniform_2_f32(location, v.x, v.y),
                    Uniform::Vec3(v) => self.gl.uniform_3_f32(location, v.x, v.y, v.z),
                    Uniform::Vec4(v) => self.gl.uniform_4_f32(location, v.x, v.y, v.z, v.w),
                    Uniform::Mat4(m) => {
                        self.gl
                            .uniform_matrix_4_f32_slice(location, false, &m.to_cols_array())
                    }
                    Uniform::Texture(t) => {
                        self.gl.active_texture(glow::TEXTURE0 + unit);
                        self.gl.bind_texture(glow::TEXTURE_2D, Some(t.raw()));
                        self.gl.uniform_1_i32(location, unit as i32);
                        unit += 1;
                    }
                }
            }
        }
    }

    /// Deletes cached programs and returns the underlying context.
    #[allow(unsafe_code)]
    pub fn into_gl(self) -> glow::Context {
        use glow::HasContext;

        // SAFETY: every cached program was linked on this context.
        unsafe {
            for program in self.programs.values() {
                self.gl.delete_program(*program);
            }
        }
        self.gl
    }
}

impl TextureBackend for Surface {
    type Texture = Texture;

    fn upload(&mut self, upload: &TextureUpload<'_>) -> Result<Texture, TextureError> {
        texture::upload(&self.gl, upload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Surface requires a live GL context, so behavioral tests are ignored.

    #[test]
    fn surface_api_compiles() {
        fn _assert_api(surface: &mut Surface, mesh: &Mesh, shaders: &ShaderPair) {
            let _: &glow::Context = surface.gl();
            let _: (i32, i32) = surface.size();
            let _: Result<GpuMesh, GlError> = surface.upload_mesh(mesh);
            let _: Result<glow::Program, ShaderError> = surface.program(shaders);
        }
    }

    #[test]
    #[ignore = "requires GL context"]
    fn program_is_compiled_once_per_shader_pair() {
        // Would test: two program() calls with equal pairs return the same handle.
    }

    #[test]
    #[ignore = "requires GL context"]
    fn render_restores_settings_after_each_entity() {
        // Would test: after render() with a Blend setting, BLEND is disabled.
        // The call order itself is covered by settings::draw_steps tests.
    }
}
