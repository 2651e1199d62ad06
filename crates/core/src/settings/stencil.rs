//! Stencil testing with independent front- and back-face behavior.

use serde::{Deserialize, Serialize};

use super::depth::CompareFunc;
use crate::constants;

/// What happens to the stored stencil value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StencilOp {
    Keep,
    Zero,
    Replace,
    Increment,
    Decrement,
    Invert,
    IncrementWrap,
    DecrementWrap,
}

impl StencilOp {
    pub fn code(self) -> u32 {
        match self {
            StencilOp::Keep => constants::KEEP,
            StencilOp::Zero => constants::ZERO,
            StencilOp::Replace => constants::REPLACE,
            StencilOp::Increment => constants::INCR,
            StencilOp::Decrement => constants::DECR,
            StencilOp::Invert => constants::INVERT,
            StencilOp::IncrementWrap => constants::INCR_WRAP,
            StencilOp::DecrementWrap => constants::DECR_WRAP,
        }
    }
}

/// Test and update operations for one face orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StencilFace {
    pub test: CompareFunc,
    /// Stencil test failed.
    pub fail: StencilOp,
    /// Stencil passed, depth failed.
    pub zfail: StencilOp,
    /// Both passed.
    pub zpass: StencilOp,
}

impl Default for StencilFace {
    fn default() -> Self {
        Self {
            test: CompareFunc::Always,
            fail: StencilOp::Keep,
            zfail: StencilOp::Keep,
            zpass: StencilOp::Keep,
        }
    }
}

/// Stencil test state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StencilTest {
    /// Reference value compared against the buffer.
    pub reference: i32,
    /// ANDed with both reference and stored value before comparison.
    pub mask: u32,
    /// Bits of the stencil buffer that may be written.
    pub write_mask: u32,
    pub front: StencilFace,
    pub back: StencilFace,
}

impl Default for StencilTest {
    fn default() -> Self {
        Self::both(0, 0xFF, 0xFF, StencilFace::default())
    }
}

impl StencilTest {
    /// The same behavior for front and back faces.
    pub fn both(reference: i32, mask: u32, write_mask: u32, face: StencilFace) -> Self {
        Self::separate(reference, mask, write_mask, face, face)
    }

    pub fn separate(
        reference: i32,
        mask: u32,
        write_mask: u32,
        front: StencilFace,
        back: StencilFace,
    ) -> Self {
        Self {
            reference,
            mask,
            write_mask,
            front,
            back,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_codes_match_gl() {
        let codes: Vec<u32> = [
            StencilOp::Keep,
            StencilOp::Zero,
            StencilOp::Replace,
            StencilOp::Increment,
            StencilOp::Decrement,
            StencilOp::Invert,
            StencilOp::IncrementWrap,
            StencilOp::DecrementWrap,
        ]
        .iter()
        .map(|op| op.code())
        .collect();
        assert_eq!(codes, vec![7680, 0, 7681, 7682, 7683, 5386, 34055, 34056]);
    }

    #[test]
    fn both_copies_face_to_front_and_back() {
        let face = StencilFace {
            test: CompareFunc::Equal,
            fail: StencilOp::Zero,
            zfail: StencilOp::Keep,
            zpass: StencilOp::Replace,
        };
        let stencil = StencilTest::both(1, 0xFF, 0x0F, face);
        assert_eq!(stencil.front, stencil.back);
        assert_eq!(stencil.write_mask, 0x0F);
    }

    #[test]
    fn deserialize_uses_camel_case_write_mask() {
        let stencil: StencilTest =
            serde_json::from_value(serde_json::json!({"reference": 2, "writeMask": 1})).unwrap();
        assert_eq!(stencil.reference, 2);
        assert_eq!(stencil.write_mask, 1);
        assert_eq!(stencil.mask, 0xFF);
    }
}
