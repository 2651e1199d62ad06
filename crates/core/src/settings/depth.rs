//! Depth testing, and the comparison functions it shares with stencil testing.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Comparison used by depth and stencil tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompareFunc {
    Never,
    Less,
    Equal,
    LessOrEqual,
    Greater,
    NotEqual,
    GreaterOrEqual,
    Always,
}

impl CompareFunc {
    pub fn code(self) -> u32 {
        match self {
            CompareFunc::Never => constants::NEVER,
            CompareFunc::Less => constants::LESS,
            CompareFunc::Equal => constants::EQUAL,
            CompareFunc::LessOrEqual => constants::LEQUAL,
            CompareFunc::Greater => constants::GREATER,
            CompareFunc::NotEqual => constants::NOTEQUAL,
            CompareFunc::GreaterOrEqual => constants::GEQUAL,
            CompareFunc::Always => constants::ALWAYS,
        }
    }
}

/// Depth test state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DepthTest {
    /// Passes when `func(incoming, stored)` holds.
    pub test: CompareFunc,
    /// Whether passing fragments write their depth.
    pub write: bool,
    /// Depth range mapping, both in [0, 1].
    pub near: f32,
    pub far: f32,
}

impl Default for DepthTest {
    fn default() -> Self {
        Self {
            test: CompareFunc::Less,
            write: true,
            near: 0.0,
            far: 1.0,
        }
    }
}

impl DepthTest {
    /// A depth test with `test`, depth writes on, and the full [0, 1] range.
    pub fn new(test: CompareFunc) -> Self {
        Self {
            test,
            ..Self::default()
        }
    }
}
