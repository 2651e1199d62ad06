//! Vertex and index buffers for an uploaded [`Mesh`].

use crate::error::GlError;
use crate::mesh::{Attribute, Mesh};

/// A mesh uploaded to GPU buffers.
pub struct GpuMesh {
    vertex_buffer: glow::Buffer,
    index_buffer: Option<glow::Buffer>,
    attributes: &'static [Attribute],
    stride: usize,
    mode: u32,
    element_count: i32,
}

impl GpuMesh {
    /// Uploads the vertex data and, for indexed meshes, the index data.
    ///
    /// # Errors
    ///
    /// Returns [`GlError::Native`] if a buffer cannot be created.
    #[allow(unsafe_code)]
    pub fn upload(gl: &glow::Context, mesh: &Mesh) -> Result<Self, GlError> {
        use glow::HasContext;

        let vertex_bytes: Vec<u8> = mesh
            .vertex_data()
            .iter()
            .flat_map(|v| v.to_ne_bytes())
            .collect();
        let element_count = i32::try_from(mesh.element_count())
            .map_err(|_| GlError::Native("mesh has too many elements".into()))?;

        // SAFETY: glow wraps raw GL calls as unsafe. Buffers are bound, filled
        // from owned byte vectors, and unbound.
        unsafe {
            let vertex_buffer = gl.create_buffer().map_err(GlError::Native)?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vertex_buffer));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, &vertex_bytes, glow::STATIC_DRAW);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            let index_buffer = match mesh.indices() {
                Some(indices) => {
                    let index_bytes: Vec<u8> =
                        indices.iter().flat_map(|i| i.to_ne_bytes()).collect();
                    let buffer = match gl.create_buffer() {
                        Ok(buffer) => buffer,
                        Err(e) => {
                            gl.delete_buffer(vertex_buffer);
                            return Err(GlError::Native(e));
                        }
                    };
                    gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(buffer));
                    gl.buffer_data_u8_slice(
                        glow::ELEMENT_ARRAY_BUFFER,
                        &index_bytes,
                        glow::STATIC_DRAW,
                    );
                    gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);
                    Some(buffer)
                }
                None => None,
            };

            Ok(Self {
                vertex_buffer,
                index_buffer,
                attributes: mesh.attributes(),
                stride: mesh.stride(),
                mode: mesh.mode().code(),
                element_count,
            })
        }
    }

    /// Binds the buffers and points each attribute the program uses at them.
    /// Returns the attribute locations that were enabled.
    #[allow(unsafe_code)]
    pub(crate) fn bind(&self, gl: &glow::Context, program: glow::Program) -> Vec<u32> {
        use glow::HasContext;

        let stride_bytes = (self.stride * std::mem::size_of::<f32>()) as i32;
        let mut enabled = Vec::with_capacity(self.attributes.len());
        let mut offset = 0;

        // SAFETY: the buffers are live and offsets stay within one vertex.
        unsafe {
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.vertex_buffer));
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, self.index_buffer);
            for attribute in self.attributes {
                // Attributes the shader does not use are optimized away.
                if let Some(location) = gl.get_attrib_location(program, attribute.name) {
                    gl.enable_vertex_attrib_array(location);
                    gl.vertex_attrib_pointer_f32(
                        location,
                        attribute.size,
                        glow::FLOAT,
                        false,
                        stride_bytes,
                        offset,
                    );
                    enabled.push(location);
                }
                offset += attribute.size * std::mem::size_of::<f32>() as i32;
            }
        }
        enabled
    }

    /// Issues the draw call for the currently bound program.
    #[allow(unsafe_code)]
    pub(crate) fn draw(&self, gl: &glow::Context) {
        use glow::HasContext;

        // SAFETY: bind() has attached this mesh's buffers.
        unsafe {
            if self.index_buffer.is_some() {
                gl.draw_elements(self.mode, self.element_count, glow::UNSIGNED_SHORT, 0);
            } else {
                gl.draw_arrays(self.mode, 0, self.element_count);
            }
        }
    }

    /// Number of vertices or indices submitted per draw.
    pub fn element_count(&self) -> i32 {
        self.element_count
    }

    /// Deletes the GPU buffers.
    #[allow(unsafe_code)]
    pub fn destroy(&self, gl: &glow::Context) {
        use glow::HasContext;

        // SAFETY: the buffers were created by upload() on this context.
        unsafe {
            gl.delete_buffer(self.vertex_buffer);
            if let Some(buffer) = self.index_buffer {
                gl.delete_buffer(buffer);
            }
        }
    }
}
