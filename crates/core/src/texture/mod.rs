//! Textures: sampling options, pixel formats, validation, and loading.
//!
//! Uploading is delegated to a [`TextureBackend`], the hook through which the
//! native GL context receives validated pixel data. With the `render` feature,
//! [`crate::render::Surface`] is the backend; tests use a recording stand-in.
//!
//! # Module overview
//!
//! - [`options`] -- resize filters, wrap modes, and the [`Options`] record.
//! - [`format`] -- raw pixel layouts and their byte widths.
//! - [`validate`] -- size checks run before any native upload.
//! - `load` -- asynchronous image file loading (feature `image`).

pub mod format;
#[cfg(feature = "image")]
pub mod load;
pub mod options;
pub mod validate;

use thiserror::Error;

pub use format::Format;
#[cfg(feature = "image")]
pub use load::{load, load_with, DecodedImage, PendingTexture};
pub use options::{Magnify, Minify, Options, Wrap};
pub use validate::{is_power_of_two, is_size_valid, validate_bytes, TextureUpload};

/// Why a texture could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextureError {
    /// The image could not be fetched or decoded.
    #[error("texture load failed: {0}")]
    LoadError(String),

    /// The dimensions are unusable with the requested options, or the buffer
    /// is too small for them.
    #[error("invalid texture size {width}x{height}")]
    SizeError { width: i32, height: i32 },
}

/// Native upload hook for validated texture data.
pub trait TextureBackend {
    /// Handle to the GPU-resident texture.
    type Texture;

    /// Creates a texture from already-validated arguments.
    fn upload(&mut self, upload: &TextureUpload<'_>) -> Result<Self::Texture, TextureError>;
}

/// Loads a texture from raw bytes with [`Options::default`].
pub fn load_bytes<B: TextureBackend>(
    backend: &mut B,
    size: (i32, i32),
    format: Format,
    pixels: &[u8],
) -> Result<B::Texture, TextureError> {
    load_bytes_with(backend, &Options::default(), size, format, pixels)
}

/// Validates raw bytes against `options` and hands them to the backend.
///
/// # Errors
///
/// Returns [`TextureError::SizeError`] if validation fails (the backend is
/// not called), or whatever error the backend reports.
pub fn load_bytes_with<B: TextureBackend>(
    backend: &mut B,
    options: &Options,
    size: (i32, i32),
    format: Format,
    pixels: &[u8],
) -> Result<B::Texture, TextureError> {
    let upload = validate_bytes(options, size, format, pixels)?;
    tracing::debug!(
        width = upload.width,
        height = upload.height,
        format = upload.format,
        mipmap = upload.mipmap,
        "uploading texture"
    );
    backend.upload(&upload)
}

/// Returns a copy of `pixels` with the row order reversed.
///
/// `pixels` must hold at least `width * height * bytes_per_pixel` bytes; any
/// excess is dropped.
pub fn flip_rows(pixels: &[u8], width: usize, height: usize, bytes_per_pixel: usize) -> Vec<u8> {
    let row = width * bytes_per_pixel;
    if row == 0 {
        return Vec::new();
    }
    pixels[..row * height]
        .chunks_exact(row)
        .rev()
        .flatten()
        .copied()
        .collect()
}
