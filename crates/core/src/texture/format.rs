//! Pixel layouts for raw byte-buffer textures.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Layout of one pixel in a raw texture buffer. Every channel is one unsigned byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Format {
    Rgba,
    Rgb,
    LuminanceAlpha,
    Luminance,
    Alpha,
}

impl Format {
    /// All variants, in declaration order.
    pub const ALL: [Format; 5] = [
        Format::Rgba,
        Format::Rgb,
        Format::LuminanceAlpha,
        Format::Luminance,
        Format::Alpha,
    ];

    /// GL enum value passed as both internal format and pixel format.
    pub fn code(self) -> u32 {
        match self {
            Format::Rgba => constants::RGBA,
            Format::Rgb => constants::RGB,
            Format::LuminanceAlpha => constants::LUMINANCE_ALPHA,
            Format::Luminance => constants::LUMINANCE,
            Format::Alpha => constants::ALPHA,
        }
    }

    /// Bytes occupied by one pixel.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Format::Rgba => 4,
            Format::Rgb => 3,
            Format::LuminanceAlpha => 2,
            Format::Luminance | Format::Alpha => 1,
        }
    }

    /// Looks a format up by its camelCase name (`"rgba"`, `"luminanceAlpha"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// The camelCase name used in JSON and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Format::Rgba => "rgba",
            Format::Rgb => "rgb",
            Format::LuminanceAlpha => "luminanceAlpha",
            Format::Luminance => "luminance",
            Format::Alpha => "alpha",
        }
    }
}
