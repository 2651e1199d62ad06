//! GL execution layer over `glow`.
//!
//! This module is only available when the `render` feature is enabled.
//! Everything else in the crate describes work as data; this is where that
//! data becomes native calls on WebGL (via `glow`'s web-sys backend) or
//! desktop GL.
//!
//! # Module overview
//!
//! - [`context`] -- [`Surface`] and [`Entity`]: clearing, program cache, draw calls.
//! - [`mesh_buffer`] -- vertex/index buffer upload and attribute binding.
//! - [`native`] -- dispatch of [`crate::native::NativeCall`] to `glow`.
//! - [`shader`] -- shader compilation and linking.
//! - [`texture`] -- texture upload from validated arguments.

pub mod context;
pub mod mesh_buffer;
pub mod native;
pub mod shader;
pub mod texture;

pub use context::{Entity, Surface};
pub use mesh_buffer::GpuMesh;
pub use native::{execute, execute_all};
pub use shader::{compile_program, compile_shader, link_program};
pub use texture::Texture;
