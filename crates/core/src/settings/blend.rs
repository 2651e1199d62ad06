//! Blending: how a fragment's color is combined with the framebuffer.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Combines the weighted source and destination terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlendEquation {
    /// `src * srcFactor + dst * dstFactor`
    Add,
    /// `src * srcFactor - dst * dstFactor`
    Subtract,
    /// `dst * dstFactor - src * srcFactor`
    ReverseSubtract,
}

impl BlendEquation {
    pub fn code(self) -> u32 {
        match self {
            BlendEquation::Add => constants::FUNC_ADD,
            BlendEquation::Subtract => constants::FUNC_SUBTRACT,
            BlendEquation::ReverseSubtract => constants::FUNC_REVERSE_SUBTRACT,
        }
    }
}

/// Weight applied to the source or destination term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Factor {
    Zero,
    One,
    SrcColor,
    OneMinusSrcColor,
    DstColor,
    OneMinusDstColor,
    SrcAlpha,
    OneMinusSrcAlpha,
    DstAlpha,
    OneMinusDstAlpha,
    ConstantColor,
    OneMinusConstantColor,
    ConstantAlpha,
    OneMinusConstantAlpha,
    /// Only valid as a source factor.
    SrcAlphaSaturate,
}

impl Factor {
    pub fn code(self) -> u32 {
        match self {
            Factor::Zero => constants::ZERO,
            Factor::One => constants::ONE,
            Factor::SrcColor => constants::SRC_COLOR,
            Factor::OneMinusSrcColor => constants::ONE_MINUS_SRC_COLOR,
            Factor::DstColor => constants::DST_COLOR,
            Factor::OneMinusDstColor => constants::ONE_MINUS_DST_COLOR,
            Factor::SrcAlpha => constants::SRC_ALPHA,
            Factor::OneMinusSrcAlpha => constants::ONE_MINUS_SRC_ALPHA,
            Factor::DstAlpha => constants::DST_ALPHA,
            Factor::OneMinusDstAlpha => constants::ONE_MINUS_DST_ALPHA,
            Factor::ConstantColor => constants::CONSTANT_COLOR,
            Factor::OneMinusConstantColor => constants::ONE_MINUS_CONSTANT_COLOR,
            Factor::ConstantAlpha => constants::CONSTANT_ALPHA,
            Factor::OneMinusConstantAlpha => constants::ONE_MINUS_CONSTANT_ALPHA,
            Factor::SrcAlphaSaturate => constants::SRC_ALPHA_SATURATE,
        }
    }
}

/// Equation plus source and destination factors for one set of channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlendFunc {
    pub equation: BlendEquation,
    pub source: Factor,
    pub destination: Factor,
}

/// Full blend state: separate RGB and alpha functions and a constant color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blend {
    pub color: BlendFunc,
    pub alpha: BlendFunc,
    /// Color referenced by the `Constant*` factors, RGBA in [0, 1].
    #[serde(default)]
    pub constant: [f32; 4],
}

impl Blend {
    fn uniform(equation: BlendEquation, source: Factor, destination: Factor) -> Self {
        let func = BlendFunc {
            equation,
            source,
            destination,
        };
        Self {
            color: func,
            alpha: func,
            constant: [0.0; 4],
        }
    }

    /// Same additive function for color and alpha.
    ///
    /// `Blend::add(Factor::SrcAlpha, Factor::OneMinusSrcAlpha)` is ordinary
    /// alpha blending.
    pub fn add(source: Factor, destination: Factor) -> Self {
        Self::uniform(BlendEquation::Add, source, destination)
    }

    pub fn subtract(source: Factor, destination: Factor) -> Self {
        Self::uniform(BlendEquation::Subtract, source, destination)
    }

    pub fn reverse_subtract(source: Factor, destination: Factor) -> Self {
        Self::uniform(BlendEquation::ReverseSubtract, source, destination)
    }

    /// Independent color and alpha functions with a constant blend color.
    pub fn custom(constant: [f32; 4], color: BlendFunc, alpha: BlendFunc) -> Self {
        Self {
            color,
            alpha,
            constant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_uses_same_function_for_color_and_alpha() {
        let blend = Blend::add(Factor::SrcAlpha, Factor::OneMinusSrcAlpha);
        assert_eq!(blend.color, blend.alpha);
        assert_eq!(blend.color.equation.code(), 32774);
        assert_eq!(blend.constant, [0.0; 4]);
    }

    #[test]
    fn factor_codes_match_gl() {
        assert_eq!(Factor::Zero.code(), 0);
        assert_eq!(Factor::One.code(), 1);
        assert_eq!(Factor::SrcColor.code(), 768);
        assert_eq!(Factor::OneMinusSrcAlpha.code(), 771);
        assert_eq!(Factor::DstColor.code(), 774);
        assert_eq!(Factor::SrcAlphaSaturate.code(), 776);
        assert_eq!(Factor::ConstantColor.code(), 32769);
        assert_eq!(Factor::OneMinusConstantAlpha.code(), 32772);
    }

    #[test]
    fn equation_codes_match_gl() {
        assert_eq!(BlendEquation::Subtract.code(), 32778);
        assert_eq!(BlendEquation::ReverseSubtract.code(), 32779);
    }

    #[test]
    fn custom_keeps_constant_color() {
        let func = BlendFunc {
            equation: BlendEquation::Add,
            source: Factor::ConstantColor,
            destination: Factor::One,
        };
        let blend = Blend::custom([0.1, 0.2, 0.3, 0.4], func, func);
        assert_eq!(blend.constant, [0.1, 0.2, 0.3, 0.4]);
    }
}
