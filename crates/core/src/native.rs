//! Native GL calls as data.
//!
//! Settings and context options are translated into [`NativeCall`] values
//! rather than executed directly, which keeps the translation testable without
//! a GPU. With the `render` feature, `render::native::execute` maps each variant
//! onto exactly one `glow` call.

use serde::Serialize;

/// One GL entry point with its positional arguments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "call", content = "args", rename_all = "camelCase")]
pub enum NativeCall {
    Enable(u32),
    Disable(u32),
    /// `(mode_rgb, mode_alpha)`
    BlendEquationSeparate(u32, u32),
    /// `(src_rgb, dst_rgb, src_alpha, dst_alpha)`
    BlendFuncSeparate(u32, u32, u32, u32),
    BlendColor(f32, f32, f32, f32),
    DepthFunc(u32),
    DepthMask(bool),
    /// `(near, far)`
    DepthRange(f32, f32),
    /// `(face, func, reference, mask)`
    StencilFuncSeparate(u32, u32, i32, u32),
    /// `(face, fail, zfail, zpass)`
    StencilOpSeparate(u32, u32, u32, u32),
    /// `(face, mask)`
    StencilMaskSeparate(u32, u32),
    /// `(x, y, width, height)`
    Scissor(i32, i32, i32, i32),
    ColorMask(bool, bool, bool, bool),
    CullFace(u32),
    /// `(factor, units)`
    PolygonOffset(f32, f32),
    /// `(value, invert)`
    SampleCoverage(f32, bool),
    ClearColor(f32, f32, f32, f32),
    ClearDepth(f32),
    ClearStencil(i32),
    /// Bitwise OR of `*_BUFFER_BIT` values.
    Clear(u32),
    /// `(x, y, width, height)`
    Viewport(i32, i32, i32, i32),
}
