//! Executes [`NativeCall`]s on a `glow::Context`.

use crate::native::NativeCall;

/// Issues the single GL call named by `call`.
#[allow(unsafe_code)]
pub fn execute(gl: &glow::Context, call: &NativeCall) {
    use glow::HasContext;

    // SAFETY: every argument is a GL enum or value produced by this crate's
    // encoders; none of these calls dereference client memory.
    unsafe {
        match *call {
            NativeCall::Enable(cap) => gl.enable(cap),
            NativeCall::Disable(cap) => gl.disable(cap),
            NativeCall::BlendEquationSeparate(rgb, alpha) => gl.blend_equation_separate(rgb, alpha),
            NativeCall::BlendFuncSeparate(src_rgb, dst_rgb, src_alpha, dst_alpha) => {
                gl.blend_func_separate(src_rgb, dst_rgb, src_alpha, dst_alpha)
            }
            NativeCall::BlendColor(r, g, b, a) => gl.blend_color(r, g, b, a),
            NativeCall::DepthFunc(func) => gl.depth_func(func),
            NativeCall::DepthMask(write) => gl.depth_mask(write),
            NativeCall::DepthRange(near, far) => gl.depth_range_f32(near, far),
            NativeCall::StencilFuncSeparate(face, func, reference, mask) => {
                gl.stencil_func_separate(face, func, reference, mask)
            }
            NativeCall::StencilOpSeparate(face, fail, zfail, zpass) => {
                gl.stencil_op_separate(face, fail, zfail, zpass)
            }
            NativeCall::StencilMaskSeparate(face, mask) => gl.stencil_mask_separate(face, mask),
            NativeCall::Scissor(x, y, w, h) => gl.scissor(x, y, w, h),
            NativeCall::ColorMask(r, g, b, a) => gl.color_mask(r, g, b, a),
            NativeCall::CullFace(face) => gl.cull_face(face),
            NativeCall::PolygonOffset(factor, units) => gl.polygon_offset(factor, units),
            NativeCall::SampleCoverage(value, invert) => gl.sample_coverage(value, invert),
            NativeCall::ClearColor(r, g, b, a) => gl.clear_color(r, g, b, a),
            NativeCall::ClearDepth(depth) => gl.clear_depth_f32(depth),
            NativeCall::ClearStencil(value) => gl.clear_stencil(value),
            NativeCall::Clear(mask) => gl.clear(mask),
            NativeCall::Viewport(x, y, w, h) => gl.viewport(x, y, w, h),
        }
    }
}

/// Issues every call in order.
pub fn execute_all(gl: &glow::Context, calls: &[NativeCall]) {
    for call in calls {
        execute(gl, call);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore = "requires GL context"]
    fn execute_enables_capability() {
        // Would test: execute(gl, &NativeCall::Enable(BLEND)) makes is_enabled(BLEND) true.
    }
}
