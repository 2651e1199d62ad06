//! Size and format checks performed before texture bytes reach the GPU.
//!
//! WebGL 1 only supports mipmapping and repeating wrap modes on textures whose
//! sides are powers of two. Anything else must use a plain filter and clamp on
//! both axes. A buffer that is too short for the requested dimensions would make
//! the native upload read past its end, so that is rejected here as well.

use super::format::Format;
use super::options::Options;
use super::TextureError;

/// Validated arguments for a native texture upload, with every option expanded
/// to its GL code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureUpload<'a> {
    pub magnify: u32,
    pub minify: u32,
    pub wrap_s: u32,
    pub wrap_t: u32,
    pub flip_y: bool,
    /// Whether the minify filter needs a mipmap chain generated after upload.
    pub mipmap: bool,
    pub width: i32,
    pub height: i32,
    pub format: u32,
    pub bytes_per_pixel: usize,
    /// Exactly `width * height * bytes_per_pixel` bytes.
    pub pixels: &'a [u8],
}

/// Returns true when `n` is a power of two, using `n & (n - 1) == 0`.
///
/// Zero passes this test; callers reject non-positive sizes separately.
pub fn is_power_of_two(n: i32) -> bool {
    n & n.wrapping_sub(1) == 0
}

/// Whether a `width` x `height` texture may be sampled with `options`.
pub fn is_size_valid(options: &Options, width: i32, height: i32) -> bool {
    let mipmap = options.minify.is_mipmap();
    (is_power_of_two(width) && is_power_of_two(height))
        || (!mipmap && options.clamps_both_axes())
}

/// Checks that `pixels` can be uploaded as a `width` x `height` texture in `format`.
///
/// # Errors
///
/// Returns [`TextureError::SizeError`] carrying the requested dimensions if
/// either dimension is non-positive, the size is incompatible with the
/// options, or the buffer holds fewer than `width * height * bytes_per_pixel` bytes.
pub fn validate_bytes<'a>(
    options: &Options,
    (width, height): (i32, i32),
    format: Format,
    pixels: &'a [u8],
) -> Result<TextureUpload<'a>, TextureError> {
    let size_error = TextureError::SizeError { width, height };

    if width <= 0 || height <= 0 || !is_size_valid(options, width, height) {
        tracing::warn!(width, height, ?options, "rejected texture size");
        return Err(size_error);
    }

    let bpp = format.bytes_per_pixel();
    let required = i64::from(width) * i64::from(height) * bpp as i64;
    let required = usize::try_from(required).map_err(|_| size_error.clone())?;
    if pixels.len() < required {
        tracing::warn!(
            width,
            height,
            required,
            len = pixels.len(),
            "texture buffer too short"
        );
        return Err(size_error);
    }

    Ok(TextureUpload {
        magnify: options.magnify.code(),
        minify: options.minify.code(),
        wrap_s: options.horizontal_wrap.code(),
        wrap_t: options.vertical_wrap.code(),
        flip_y: options.flip_y,
        mipmap: options.minify.is_mipmap(),
        width,
        height,
        format: format.code(),
        bytes_per_pixel: bpp,
        pixels: &pixels[..required],
    })
}
