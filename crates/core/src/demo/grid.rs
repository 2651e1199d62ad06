//! Uniform grid mesh: `columns x rows` quads, two triangles each, spanning
//! clip space [-1, 1] on both axes.

use glam::{Vec2, Vec3};

use crate::mesh::{Attribute, Mesh, MeshError, Vertex, MAX_INDEXED_VERTICES};
use crate::shader::ShaderPair;

/// Grid vertex: clip-space position and a [0, 1] texture coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridVertex {
    pub position: Vec3,
    pub coord: Vec2,
}

impl Vertex for GridVertex {
    fn attributes() -> &'static [Attribute] {
        &[
            Attribute {
                name: "position",
                size: 3,
            },
            Attribute {
                name: "coord",
                size: 2,
            },
        ]
    }

    fn write(&self, out: &mut Vec<f32>) {
        out.extend_from_slice(&self.position.to_array());
        out.extend_from_slice(&self.coord.to_array());
    }
}

/// Vertices of the grid, row by row from the bottom-left corner.
pub fn grid_vertices(columns: usize, rows: usize) -> Vec<GridVertex> {
    (0..=rows)
        .flat_map(|j| {
            (0..=columns).map(move |i| {
                let coord = Vec2::new(i as f32 / columns as f32, j as f32 / rows as f32);
                GridVertex {
                    position: (coord * 2.0 - Vec2::ONE).extend(0.0),
                    coord,
                }
            })
        })
        .collect()
}

/// Two counter-clockwise triangles per cell, indexing [`grid_vertices`].
pub fn grid_indices(columns: usize, rows: usize) -> Vec<(u16, u16, u16)> {
    let index = |i: usize, j: usize| (j * (columns + 1) + i) as u16;
    (0..rows)
        .flat_map(|j| {
            (0..columns).flat_map(move |i| {
                let a = index(i, j);
                let b = index(i + 1, j);
                let c = index(i, j + 1);
                let d = index(i + 1, j + 1);
                [(a, b, d), (a, d, c)]
            })
        })
        .collect()
}

/// Builds the indexed grid mesh.
///
/// # Errors
///
/// Returns [`MeshError::EmptyGrid`] for zero columns or rows, and
/// [`MeshError::TooManyVertices`] when the vertex count exceeds `u16` indexing.
pub fn grid(columns: usize, rows: usize) -> Result<Mesh, MeshError> {
    if columns == 0 || rows == 0 {
        return Err(MeshError::EmptyGrid { columns, rows });
    }
    let vertex_count = columns
        .checked_add(1)
        .zip(rows.checked_add(1))
        .and_then(|(c, r)| c.checked_mul(r))
        .unwrap_or(usize::MAX);
    if vertex_count > MAX_INDEXED_VERTICES {
        return Err(MeshError::TooManyVertices(vertex_count));
    }
    Mesh::indexed_triangles(&grid_vertices(columns, rows), &grid_indices(columns, rows))
}

/// Shades each cell as a checkerboard tinted by its texture coordinate.
pub fn grid_shaders() -> ShaderPair {
    ShaderPair::new(GRID_VERTEX_SHADER, GRID_FRAGMENT_SHADER)
}

const GRID_VERTEX_SHADER: &str = r#"
attribute vec3 position;
attribute vec2 coord;
uniform vec2 offset;
uniform float cells;
varying vec2 vcoord;
void main() {
    vcoord = coord * cells;
    gl_Position = vec4(position.xy + offset, position.z, 1.0);
}
"#;

const GRID_FRAGMENT_SHADER: &str = r#"
precision mediump float;
varying vec2 vcoord;
void main() {
    vec2 cell = floor(vcoord);
    float checker = mod(cell.x + cell.y, 2.0);
    gl_FragColor = vec4(fract(vcoord) * 0.5 + 0.25 * checker, 0.6, 1.0);
}
"#;
