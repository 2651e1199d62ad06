//! GL enum values used by the binding.
//!
//! These are the WebGL 1 / OpenGL ES 2.0 numeric codes, reproduced verbatim so
//! that option and setting values can be handed to any GL implementation
//! without a translation table. With the `render` feature the test module
//! checks every value against the `glow` constant of the same name.

// Texture wrap modes.
pub const REPEAT: u32 = 10497;
pub const CLAMP_TO_EDGE: u32 = 33071;
pub const MIRRORED_REPEAT: u32 = 33648;

// Texture filters.
pub const NEAREST: u32 = 9728;
pub const LINEAR: u32 = 9729;
pub const NEAREST_MIPMAP_NEAREST: u32 = 9984;
pub const LINEAR_MIPMAP_NEAREST: u32 = 9985;
pub const NEAREST_MIPMAP_LINEAR: u32 = 9986;
pub const LINEAR_MIPMAP_LINEAR: u32 = 9987;

// Pixel formats.
pub const ALPHA: u32 = 6406;
pub const RGB: u32 = 6407;
pub const RGBA: u32 = 6408;
pub const LUMINANCE: u32 = 6409;
pub const LUMINANCE_ALPHA: u32 = 6410;

// Capabilities toggled with enable/disable.
pub const CULL_FACE: u32 = 2884;
pub const DEPTH_TEST: u32 = 2929;
pub const STENCIL_TEST: u32 = 2960;
pub const BLEND: u32 = 3042;
pub const SCISSOR_TEST: u32 = 3089;
pub const POLYGON_OFFSET_FILL: u32 = 32823;
pub const SAMPLE_ALPHA_TO_COVERAGE: u32 = 32926;
pub const SAMPLE_COVERAGE: u32 = 32928;

// Comparison functions for depth and stencil tests.
pub const NEVER: u32 = 512;
pub const LESS: u32 = 513;
pub const EQUAL: u32 = 514;
pub const LEQUAL: u32 = 515;
pub const GREATER: u32 = 516;
pub const NOTEQUAL: u32 = 517;
pub const GEQUAL: u32 = 518;
pub const ALWAYS: u32 = 519;

// Stencil operations.
pub const ZERO: u32 = 0;
pub const KEEP: u32 = 7680;
pub const REPLACE: u32 = 7681;
pub const INCR: u32 = 7682;
pub const DECR: u32 = 7683;
pub const INVERT: u32 = 5386;
pub const INCR_WRAP: u32 = 34055;
pub const DECR_WRAP: u32 = 34056;

// Blend equations.
pub const FUNC_ADD: u32 = 32774;
pub const FUNC_SUBTRACT: u32 = 32778;
pub const FUNC_REVERSE_SUBTRACT: u32 = 32779;

// Blend factors (ZERO is shared with the stencil ops).
pub const ONE: u32 = 1;
pub const SRC_COLOR: u32 = 768;
pub const ONE_MINUS_SRC_COLOR: u32 = 769;
pub const SRC_ALPHA: u32 = 770;
pub const ONE_MINUS_SRC_ALPHA: u32 = 771;
pub const DST_ALPHA: u32 = 772;
pub const ONE_MINUS_DST_ALPHA: u32 = 773;
pub const DST_COLOR: u32 = 774;
pub const ONE_MINUS_DST_COLOR: u32 = 775;
pub const SRC_ALPHA_SATURATE: u32 = 776;
pub const CONSTANT_COLOR: u32 = 32769;
pub const ONE_MINUS_CONSTANT_COLOR: u32 = 32770;
pub const CONSTANT_ALPHA: u32 = 32771;
pub const ONE_MINUS_CONSTANT_ALPHA: u32 = 32772;

// Faces.
pub const FRONT: u32 = 1028;
pub const BACK: u32 = 1029;
pub const FRONT_AND_BACK: u32 = 1032;

// Draw modes.
pub const POINTS: u32 = 0;
pub const LINES: u32 = 1;
pub const LINE_LOOP: u32 = 2;
pub const LINE_STRIP: u32 = 3;
pub const TRIANGLES: u32 = 4;
pub const TRIANGLE_STRIP: u32 = 5;
pub const TRIANGLE_FAN: u32 = 6;

// Clear mask bits.
pub const DEPTH_BUFFER_BIT: u32 = 256;
pub const STENCIL_BUFFER_BIT: u32 = 1024;
pub const COLOR_BUFFER_BIT: u32 = 16384;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_codes_match_webgl() {
        assert_eq!(REPEAT, 10497);
        assert_eq!(CLAMP_TO_EDGE, 33071);
        assert_eq!(MIRRORED_REPEAT, 33648);
    }

    #[test]
    fn mipmap_filters_are_contiguous() {
        assert_eq!(NEAREST_MIPMAP_NEAREST, 9984);
        assert_eq!(LINEAR_MIPMAP_NEAREST, 9985);
        assert_eq!(NEAREST_MIPMAP_LINEAR, 9986);
        assert_eq!(LINEAR_MIPMAP_LINEAR, 9987);
    }

    #[test]
    fn comparison_functions_span_never_to_always() {
        let funcs = [NEVER, LESS, EQUAL, LEQUAL, GREATER, NOTEQUAL, GEQUAL, ALWAYS];
        for (i, f) in funcs.iter().enumerate() {
            assert_eq!(*f, 512 + i as u32);
        }
    }

    #[cfg(feature = "render")]
    #[test]
    fn constants_agree_with_glow() {
        let pairs = [
            (REPEAT, glow::REPEAT),
            (CLAMP_TO_EDGE, glow::CLAMP_TO_EDGE),
            (MIRRORED_REPEAT, glow::MIRRORED_REPEAT),
            (NEAREST, glow::NEAREST),
            (LINEAR, glow::LINEAR),
            (NEAREST_MIPMAP_NEAREST, glow::NEAREST_MIPMAP_NEAREST),
            (LINEAR_MIPMAP_NEAREST, glow::LINEAR_MIPMAP_NEAREST),
            (NEAREST_MIPMAP_LINEAR, glow::NEAREST_MIPMAP_LINEAR),
            (LINEAR_MIPMAP_LINEAR, glow::LINEAR_MIPMAP_LINEAR),
            (ALPHA, glow::ALPHA),
            (RGB, glow::RGB),
            (RGBA, glow::RGBA),
            (LUMINANCE, glow::LUMINANCE),
            (LUMINANCE_ALPHA, glow::LUMINANCE_ALPHA),
            (CULL_FACE, glow::CULL_FACE),
            (DEPTH_TEST, glow::DEPTH_TEST),
            (STENCIL_TEST, glow::STENCIL_TEST),
            (BLEND, glow::BLEND),
            (SCISSOR_TEST, glow::SCISSOR_TEST),
            (POLYGON_OFFSET_FILL, glow::POLYGON_OFFSET_FILL),
            (SAMPLE_ALPHA_TO_COVERAGE, glow::SAMPLE_ALPHA_TO_COVERAGE),
            (SAMPLE_COVERAGE, glow::SAMPLE_COVERAGE),
            (KEEP, glow::KEEP),
            (REPLACE, glow::REPLACE),
            (INCR, glow::INCR),
            (DECR, glow::DECR),
            (INVERT, glow::INVERT),
            (INCR_WRAP, glow::INCR_WRAP),
            (DECR_WRAP, glow::DECR_WRAP),
            (FUNC_ADD, glow::FUNC_ADD),
            (FUNC_SUBTRACT, glow::FUNC_SUBTRACT),
            (FUNC_REVERSE_SUBTRACT, glow::FUNC_REVERSE_SUBTRACT),
            (SRC_ALPHA_SATURATE, glow::SRC_ALPHA_SATURATE),
            (CONSTANT_COLOR, glow::CONSTANT_COLOR),
            (ONE_MINUS_CONSTANT_ALPHA, glow::ONE_MINUS_CONSTANT_ALPHA),
            (FRONT_AND_BACK, glow::FRONT_AND_BACK),
            (TRIANGLE_FAN, glow::TRIANGLE_FAN),
            (COLOR_BUFFER_BIT, glow::COLOR_BUFFER_BIT),
            (DEPTH_BUFFER_BIT, glow::DEPTH_BUFFER_BIT),
            (STENCIL_BUFFER_BIT, glow::STENCIL_BUFFER_BIT),
        ];
        for (ours, theirs) in pairs {
            assert_eq!(ours, theirs, "constant {ours} differs from glow value {theirs}");
        }
    }
}
