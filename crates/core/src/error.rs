//! Error types for the webgl-kit core.

use thiserror::Error;

pub use crate::mesh::MeshError;
pub use crate::shader::ShaderError;
pub use crate::texture::TextureError;

/// Errors produced by binding operations.
///
/// Module-level errors ([`TextureError`], [`MeshError`], [`ShaderError`]) are
/// returned directly by the functions that produce them; `GlError` collects
/// them for callers that mix operations, and adds configuration errors.
#[derive(Debug, Error)]
pub enum GlError {
    /// Texture loading or validation failed.
    #[error(transparent)]
    Texture(#[from] TextureError),

    /// A mesh could not be built.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// A shader failed to compile or link.
    #[error(transparent)]
    Shader(#[from] ShaderError),

    /// A configuration key existed but had the wrong JSON type.
    #[error("parameter type mismatch for '{name}': expected {expected}, got {got}")]
    ParamTypeMismatch {
        name: String,
        expected: String,
        got: String,
    },

    /// A configuration key named a value outside its enumerated set.
    #[error("invalid value for '{name}': {value}")]
    InvalidValue { name: String, value: String },

    /// The native GL context reported a failure (buffer or program creation).
    #[error("native GL call failed: {0}")]
    Native(String),
}
