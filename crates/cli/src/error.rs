//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: texture error (size rejected, image failed to load)
//! - 11: I/O error (reading an input file)
//! - 12: input error (bad format name, bad JSON options or settings)
//! - 13: serialization error
//! - 14: mesh error (grid too large or empty)

use std::fmt;

use webgl_kit_core::{GlError, MeshError, TextureError};

/// Errors produced by CLI operations, each mapped to a distinct exit code.
pub enum CliError {
    /// Texture validation or loading failed.
    Texture(TextureError),
    /// An input file could not be read.
    Io(String),
    /// A user input error (bad names, bad JSON).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
    /// A demo mesh could not be built.
    Mesh(MeshError),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Texture(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
            CliError::Mesh(_) => 14,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Texture(e) => write!(f, "{e}"),
            CliError::Mesh(e) => write!(f, "{e}"),
            CliError::Io(msg) | CliError::Input(msg) | CliError::Serialization(msg) => {
                write!(f, "{msg}")
            }
        }
    }
}

impl From<TextureError> for CliError {
    fn from(e: TextureError) -> Self {
        CliError::Texture(e)
    }
}

impl From<MeshError> for CliError {
    fn from(e: MeshError) -> Self {
        CliError::Mesh(e)
    }
}

impl From<GlError> for CliError {
    fn from(e: GlError) -> Self {
        match e {
            GlError::Texture(e) => CliError::Texture(e),
            GlError::Mesh(e) => CliError::Mesh(e),
            other => CliError::Input(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
