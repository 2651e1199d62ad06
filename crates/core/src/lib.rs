#![deny(unsafe_code)]
//! Core of the webgl-kit binding: a typed layer over WebGL / OpenGL ES 2.0.
//!
//! Provides texture `Options`/`Format` records with size validation before
//! upload, render `Setting`s encoded as `NativeCall`s, context-creation
//! options, `Mesh`/`Vertex`, `Uniforms`, and shader sources. The `render`
//! feature executes all of it on a `glow` context; the `image` feature adds
//! asynchronous texture loading from image files.

pub mod constants;
pub mod context_options;
pub mod demo;
pub mod error;
pub mod mesh;
pub mod native;
pub mod params;
pub mod settings;
pub mod shader;
pub mod texture;
pub mod uniform;

#[cfg(feature = "render")]
pub mod render;

pub use context_options::{ContextConfig, ContextOption};
pub use error::GlError;
pub use mesh::{Attribute, Mesh, MeshError, Mode, Vertex};
pub use native::NativeCall;
pub use settings::Setting;
pub use shader::{ShaderError, ShaderPair};
pub use texture::{Format, Magnify, Minify, Options, TextureError, Wrap};
pub use uniform::{Uniform, Uniforms};
