//! GPU textures created from validated uploads.

use crate::texture::{flip_rows, TextureError, TextureUpload};

/// A texture resident on the GPU, with the size it was uploaded at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Texture {
    raw: glow::Texture,
    width: i32,
    height: i32,
}

impl Texture {
    /// Underlying `glow` handle.
    pub fn raw(&self) -> glow::Texture {
        self.raw
    }

    /// `(width, height)` in pixels.
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Deletes the GPU texture.
    #[allow(unsafe_code)]
    pub fn destroy(&self, gl: &glow::Context) {
        use glow::HasContext;

        // SAFETY: self.raw was created by upload() on this context.
        unsafe { gl.delete_texture(self.raw) };
    }
}

/// Creates a texture from already-validated arguments.
///
/// Rows are flipped on the CPU when `flip_y` is set, which behaves the same on
/// WebGL and desktop GL. Mipmaps are generated when the minify filter needs them.
///
/// # Errors
///
/// Returns [`TextureError::LoadError`] if the context cannot create a texture.
#[allow(unsafe_code)]
pub fn upload(gl: &glow::Context, upload: &TextureUpload<'_>) -> Result<Texture, TextureError> {
    use glow::HasContext;

    let flipped;
    let pixels = if upload.flip_y {
        flipped = flip_rows(
            upload.pixels,
            upload.width as usize,
            upload.height as usize,
            upload.bytes_per_pixel,
        );
        &flipped[..]
    } else {
        upload.pixels
    };

    // SAFETY: glow wraps raw GL calls as unsafe. `pixels` holds exactly
    // width * height * bytes_per_pixel bytes, and UNPACK_ALIGNMENT is 1 so
    // the driver reads tightly packed rows.
    unsafe {
        let raw = gl.create_texture().map_err(TextureError::LoadError)?;
        gl.bind_texture(glow::TEXTURE_2D, Some(raw));
        gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
        gl.tex_image_2d(
            glow::TEXTURE_2D,
            0,
            upload.format as i32,
            upload.width,
            upload.height,
            0,
            upload.format,
            glow::UNSIGNED_BYTE,
            glow::PixelUnpackData::Slice(Some(pixels)),
        );
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, upload.magnify as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, upload.minify as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, upload.wrap_s as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, upload.wrap_t as i32);
        if upload.mipmap {
            gl.generate_mipmap(glow::TEXTURE_2D);
        }
        gl.bind_texture(glow::TEXTURE_2D, None);

        Ok(Texture {
            raw,
            width: upload.width,
            height: upload.height,
        })
    }
}
