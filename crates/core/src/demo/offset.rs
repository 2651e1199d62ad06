//! Interactive shader-offset demo.
//!
//! A colored triangle whose vertex shader adds an `offset` uniform to every
//! position. Arrow keys nudge the offset; `Escape` or `r` resets it. The demo
//! sits idle until the next message arrives.

use glam::{Vec2, Vec3};

use crate::mesh::{Attribute, Mesh, Vertex};
use crate::shader::ShaderPair;
use crate::uniform::Uniforms;

/// Offset change per key press, in clip-space units.
pub const STEP: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    fn delta(self) -> Vec2 {
        match self {
            Direction::Left => Vec2::new(-STEP, 0.0),
            Direction::Right => Vec2::new(STEP, 0.0),
            Direction::Up => Vec2::new(0.0, STEP),
            Direction::Down => Vec2::new(0.0, -STEP),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Move(Direction),
    Reset,
}

impl Message {
    /// Maps a DOM `KeyboardEvent.key` value to a message.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Message::Move(Direction::Left)),
            "ArrowRight" => Some(Message::Move(Direction::Right)),
            "ArrowUp" => Some(Message::Move(Direction::Up)),
            "ArrowDown" => Some(Message::Move(Direction::Down)),
            "Escape" | "r" | "R" => Some(Message::Reset),
            _ => None,
        }
    }
}

/// Position and color vertex for the demo triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorVertex {
    pub position: Vec3,
    pub color: Vec3,
}

impl Vertex for ColorVertex {
    fn attributes() -> &'static [Attribute] {
        &[
            Attribute {
                name: "position",
                size: 3,
            },
            Attribute {
                name: "color",
                size: 3,
            },
        ]
    }

    fn write(&self, out: &mut Vec<f32>) {
        out.extend_from_slice(&self.position.to_array());
        out.extend_from_slice(&self.color.to_array());
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OffsetDemo {
    offset: Vec2,
}

impl OffsetDemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Move(direction) => self.offset += direction.delta(),
            Message::Reset => self.offset = Vec2::ZERO,
        }
    }

    /// Uniforms for the current frame.
    pub fn uniforms<T>(&self) -> Uniforms<T> {
        Uniforms::new().with("offset", self.offset)
    }

    /// A single red/green/blue triangle centered on the origin.
    pub fn mesh() -> Mesh {
        let vertex = |x: f32, y: f32, color: Vec3| ColorVertex {
            position: Vec3::new(x, y, 0.0),
            color,
        };
        Mesh::triangles(&[(
            vertex(-0.5, -0.5, Vec3::X),
            vertex(0.5, -0.5, Vec3::Y),
            vertex(0.0, 0.5, Vec3::Z),
        )])
    }

    pub fn shaders() -> ShaderPair {
        ShaderPair::new(VERTEX_SHADER, FRAGMENT_SHADER)
    }
}

const VERTEX_SHADER: &str = r#"
attribute vec3 position;
attribute vec3 color;
uniform vec2 offset;
varying vec3 vcolor;
void main() {
    gl_Position = vec4(position.xy + offset, position.z, 1.0);
    vcolor = color;
}
"#;

const FRAGMENT_SHADER: &str = r#"
precision mediump float;
varying vec3 vcolor;
void main() {
    gl_FragColor = vec4(vcolor, 1.0);
}
"#;
