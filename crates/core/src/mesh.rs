//! Meshes: interleaved vertex data plus a primitive mode.
//!
//! A [`Vertex`] type describes its attributes once; mesh constructors flatten
//! the vertices into an `f32` buffer in attribute order. Index buffers are
//! `u16`, the only index type WebGL 1 guarantees.

use thiserror::Error;

use crate::constants;

/// Largest vertex count addressable by a `u16` index buffer.
pub const MAX_INDEXED_VERTICES: usize = u16::MAX as usize + 1;

/// Errors produced while building a mesh.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// An index referred past the end of the vertex list.
    #[error("index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u16, vertex_count: usize },

    /// Too many vertices for 16-bit indices.
    #[error("{0} vertices exceed the 16-bit index limit")]
    TooManyVertices(usize),

    /// A grid needs at least one column and one row.
    #[error("grid must have at least one column and one row, got {columns}x{rows}")]
    EmptyGrid { columns: usize, rows: usize },
}

/// A named float attribute with `size` components (1 to 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub name: &'static str,
    pub size: i32,
}

/// A vertex type that can be written into an interleaved buffer.
pub trait Vertex {
    /// Attribute layout, in the order [`Vertex::write`] emits components.
    fn attributes() -> &'static [Attribute];

    /// Appends this vertex's components to `out`.
    fn write(&self, out: &mut Vec<f32>);
}

/// Primitive assembly mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Points,
    Lines,
    LineLoop,
    LineStrip,
    Triangles,
    TriangleStrip,
    TriangleFan,
}

impl Mode {
    pub fn code(self) -> u32 {
        match self {
            Mode::Points => constants::POINTS,
            Mode::Lines => constants::LINES,
            Mode::LineLoop => constants::LINE_LOOP,
            Mode::LineStrip => constants::LINE_STRIP,
            Mode::Triangles => constants::TRIANGLES,
            Mode::TriangleStrip => constants::TRIANGLE_STRIP,
            Mode::TriangleFan => constants::TRIANGLE_FAN,
        }
    }
}

/// Vertex data ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    mode: Mode,
    attributes: &'static [Attribute],
    data: Vec<f32>,
    vertex_count: usize,
    indices: Option<Vec<u16>>,
}

impl Mesh {
    fn from_vertices<'a, V: Vertex + 'a>(
        mode: Mode,
        vertices: impl IntoIterator<Item = &'a V>,
    ) -> Self {
        let attributes = V::attributes();
        let mut data = Vec::new();
        let mut vertex_count = 0;
        for vertex in vertices {
            vertex.write(&mut data);
            vertex_count += 1;
        }
        debug_assert_eq!(
            data.len(),
            vertex_count * stride_of(attributes),
            "Vertex::write disagrees with Vertex::attributes"
        );
        Self {
            mode,
            attributes,
            data,
            vertex_count,
            indices: None,
        }
    }

    /// Independent triangles, three vertices each.
    pub fn triangles<V: Vertex>(triangles: &[(V, V, V)]) -> Self {
        Self::from_vertices(
            Mode::Triangles,
            triangles.iter().flat_map(|(a, b, c)| [a, b, c]),
        )
    }

    /// Independent line segments.
    pub fn lines<V: Vertex>(lines: &[(V, V)]) -> Self {
        Self::from_vertices(Mode::Lines, lines.iter().flat_map(|(a, b)| [a, b]))
    }

    /// Connected line segments through every vertex.
    pub fn line_strip<V: Vertex>(vertices: &[V]) -> Self {
        Self::from_vertices(Mode::LineStrip, vertices)
    }

    /// A line strip that also joins the last vertex back to the first.
    pub fn line_loop<V: Vertex>(vertices: &[V]) -> Self {
        Self::from_vertices(Mode::LineLoop, vertices)
    }

    pub fn points<V: Vertex>(vertices: &[V]) -> Self {
        Self::from_vertices(Mode::Points, vertices)
    }

    /// Triangles sharing the first vertex.
    pub fn triangle_fan<V: Vertex>(vertices: &[V]) -> Self {
        Self::from_vertices(Mode::TriangleFan, vertices)
    }

    /// Each vertex after the second forms a triangle with the previous two.
    pub fn triangle_strip<V: Vertex>(vertices: &[V]) -> Self {
        Self::from_vertices(Mode::TriangleStrip, vertices)
    }

    /// Triangles referring to shared vertices by index.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::TooManyVertices`] if `vertices` cannot be addressed
    /// with `u16`, or [`MeshError::IndexOutOfRange`] for a dangling index.
    pub fn indexed_triangles<V: Vertex>(
        vertices: &[V],
        triangles: &[(u16, u16, u16)],
    ) -> Result<Self, MeshError> {
        if vertices.len() > MAX_INDEXED_VERTICES {
            return Err(MeshError::TooManyVertices(vertices.len()));
        }
        let indices: Vec<u16> = triangles.iter().flat_map(|&(a, b, c)| [a, b, c]).collect();
        if let Some(&index) = indices.iter().find(|&&i| usize::from(i) >= vertices.len()) {
            return Err(MeshError::IndexOutOfRange {
                index,
                vertex_count: vertices.len(),
            });
        }
        let mut mesh = Self::from_vertices(Mode::Triangles, vertices);
        mesh.indices = Some(indices);
        Ok(mesh)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn attributes(&self) -> &'static [Attribute] {
        self.attributes
    }

    /// Floats per vertex.
    pub fn stride(&self) -> usize {
        stride_of(self.attributes)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn vertex_data(&self) -> &[f32] {
        &self.data
    }

    pub fn indices(&self) -> Option<&[u16]> {
        self.indices.as_deref()
    }

    /// Number of elements a draw call submits: indices if present, else vertices.
    pub fn element_count(&self) -> usize {
        self.indices.as_ref().map_or(self.vertex_count, Vec::len)
    }
}

fn stride_of(attributes: &[Attribute]) -> usize {
    attributes.iter().map(|a| a.size as usize).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2D position with an RGB color.
    #[derive(Debug, Clone, Copy)]
    struct ColorVertex {
        position: [f32; 2],
        color: [f32; 3],
    }

    impl Vertex for ColorVertex {
        fn attributes() -> &'static [Attribute] {
            &[
                Attribute {
                    name: "position",
                    size: 2,
                },
                Attribute {
                    name: "color",
                    size: 3,
                },
            ]
        }

        fn write(&self, out: &mut Vec<f32>) {
            out.extend_from_slice(&self.position);
            out.extend_from_slice(&self.color);
        }
    }

    fn vertex(x: f32, y: f32) -> ColorVertex {
        ColorVertex {
            position: [x, y],
            color: [1.0, 0.5, 0.0],
        }
    }

    #[test]
    fn triangles_flatten_in_order() {
        let mesh = Mesh::triangles(&[(vertex(0.0, 0.0), vertex(1.0, 0.0), vertex(0.0, 1.0))]);
        assert_eq!(mesh.mode(), Mode::Triangles);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.stride(), 5);
        assert_eq!(mesh.vertex_data().len(), 15);
        assert_eq!(&mesh.vertex_data()[5..7], &[1.0, 0.0]);
        assert_eq!(mesh.element_count(), 3);
        assert!(mesh.indices().is_none());
    }

    #[test]
    fn lines_emit_two_vertices_per_segment() {
        let mesh = Mesh::lines(&[
            (vertex(0.0, 0.0), vertex(1.0, 1.0)),
            (vertex(1.0, 1.0), vertex(2.0, 0.0)),
        ]);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.mode().code(), 1);
    }

    #[test]
    fn strip_and_fan_modes_keep_vertex_list() {
        let verts = [vertex(0.0, 0.0), vertex(1.0, 0.0), vertex(1.0, 1.0), vertex(0.0, 1.0)];
        assert_eq!(Mesh::triangle_strip(&verts).mode().code(), 5);
        assert_eq!(Mesh::triangle_fan(&verts).mode().code(), 6);
        assert_eq!(Mesh::line_loop(&verts).mode().code(), 2);
        assert_eq!(Mesh::line_strip(&verts).mode().code(), 3);
        assert_eq!(Mesh::points(&verts).element_count(), 4);
    }

    #[test]
    fn indexed_triangles_count_indices() {
        let verts = [vertex(0.0, 0.0), vertex(1.0, 0.0), vertex(1.0, 1.0), vertex(0.0, 1.0)];
        let mesh = Mesh::indexed_triangles(&verts, &[(0, 1, 2), (0, 2, 3)]).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.element_count(), 6);
        assert_eq!(mesh.indices(), Some(&[0, 1, 2, 0, 2, 3][..]));
    }

    #[test]
    fn indexed_triangles_reject_dangling_index() {
        let verts = [vertex(0.0, 0.0), vertex(1.0, 0.0), vertex(1.0, 1.0)];
        let err = Mesh::indexed_triangles(&verts, &[(0, 1, 3)]).unwrap_err();
        assert_eq!(
            err,
            MeshError::IndexOutOfRange {
                index: 3,
                vertex_count: 3
            }
        );
    }

    #[test]
    fn indexed_triangles_reject_too_many_vertices() {
        let verts = vec![vertex(0.0, 0.0); MAX_INDEXED_VERTICES + 1];
        let err = Mesh::indexed_triangles(&verts, &[]).unwrap_err();
        assert_eq!(err, MeshError::TooManyVertices(MAX_INDEXED_VERTICES + 1));
    }

    #[test]
    fn empty_mesh_has_no_elements() {
        let mesh = Mesh::triangles::<ColorVertex>(&[]);
        assert_eq!(mesh.element_count(), 0);
        assert!(mesh.vertex_data().is_empty());
    }
}
