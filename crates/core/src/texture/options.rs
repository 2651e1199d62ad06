//! Texture sampling options: resize filters, wrap modes, and vertical flip.
//!
//! Magnification and minification filters are separate types. GL only accepts
//! the two plain filters for magnification, so mipmap variants are simply not
//! representable there.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants;
use crate::error::GlError;
use crate::params::{param_bool, param_enum};

/// Filter used when a texel covers more than one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Magnify {
    Linear,
    Nearest,
}

impl Magnify {
    /// All variants, in declaration order.
    pub const ALL: [Magnify; 2] = [Magnify::Linear, Magnify::Nearest];

    /// GL enum value for `TEXTURE_MAG_FILTER`.
    pub fn code(self) -> u32 {
        match self {
            Magnify::Linear => constants::LINEAR,
            Magnify::Nearest => constants::NEAREST,
        }
    }
}

/// Filter used when a pixel covers more than one texel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Minify {
    Linear,
    Nearest,
    NearestMipmapNearest,
    LinearMipmapNearest,
    NearestMipmapLinear,
    LinearMipmapLinear,
}

impl Minify {
    /// All variants, in declaration order.
    pub const ALL: [Minify; 6] = [
        Minify::Linear,
        Minify::Nearest,
        Minify::NearestMipmapNearest,
        Minify::LinearMipmapNearest,
        Minify::NearestMipmapLinear,
        Minify::LinearMipmapLinear,
    ];

    /// GL enum value for `TEXTURE_MIN_FILTER`.
    pub fn code(self) -> u32 {
        match self {
            Minify::Linear => constants::LINEAR,
            Minify::Nearest => constants::NEAREST,
            Minify::NearestMipmapNearest => constants::NEAREST_MIPMAP_NEAREST,
            Minify::LinearMipmapNearest => constants::LINEAR_MIPMAP_NEAREST,
            Minify::NearestMipmapLinear => constants::NEAREST_MIPMAP_LINEAR,
            Minify::LinearMipmapLinear => constants::LINEAR_MIPMAP_LINEAR,
        }
    }

    /// Whether sampling with this filter reads from a mipmap chain.
    pub fn is_mipmap(self) -> bool {
        !matches!(self, Minify::Linear | Minify::Nearest)
    }
}

impl From<Magnify> for Minify {
    fn from(filter: Magnify) -> Self {
        match filter {
            Magnify::Linear => Minify::Linear,
            Magnify::Nearest => Minify::Nearest,
        }
    }
}

/// How texture coordinates outside [0, 1] are resolved along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Wrap {
    Repeat,
    ClampToEdge,
    MirroredRepeat,
}

impl Wrap {
    /// All variants, in declaration order.
    pub const ALL: [Wrap; 3] = [Wrap::Repeat, Wrap::ClampToEdge, Wrap::MirroredRepeat];

    /// GL enum value for `TEXTURE_WRAP_S` / `TEXTURE_WRAP_T`.
    pub fn code(self) -> u32 {
        match self {
            Wrap::Repeat => constants::REPEAT,
            Wrap::ClampToEdge => constants::CLAMP_TO_EDGE,
            Wrap::MirroredRepeat => constants::MIRRORED_REPEAT,
        }
    }
}

/// Sampling options applied when a texture is uploaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    pub magnify: Magnify,
    pub minify: Minify,
    pub horizontal_wrap: Wrap,
    pub vertical_wrap: Wrap,
    /// Flip the image vertically so row 0 is the bottom, matching GL texture space.
    pub flip_y: bool,
}

impl Default for Options {
    /// Linear magnification, trilinear-ish `NearestMipmapLinear` minification,
    /// repeating on both axes, flipped. Requires power-of-two dimensions.
    fn default() -> Self {
        Self {
            magnify: Magnify::Linear,
            minify: Minify::NearestMipmapLinear,
            horizontal_wrap: Wrap::Repeat,
            vertical_wrap: Wrap::Repeat,
            flip_y: true,
        }
    }
}

impl Options {
    /// Options accepted for textures of any size: no mipmaps, clamped edges.
    pub fn non_power_of_two() -> Self {
        Self {
            magnify: Magnify::Linear,
            minify: Minify::Linear,
            horizontal_wrap: Wrap::ClampToEdge,
            vertical_wrap: Wrap::ClampToEdge,
            flip_y: true,
        }
    }

    /// Reads options from a JSON object with camelCase keys, falling back to
    /// [`Options::default`] for missing keys.
    pub fn from_json(params: &Value) -> Result<Self, GlError> {
        let d = Self::default();
        Ok(Self {
            magnify: param_enum(params, "magnify", d.magnify)?,
            minify: param_enum(params, "minify", d.minify)?,
            horizontal_wrap: param_enum(params, "horizontalWrap", d.horizontal_wrap)?,
            vertical_wrap: param_enum(params, "verticalWrap", d.vertical_wrap)?,
            flip_y: param_bool(params, "flipY", d.flip_y),
        })
    }

    /// Whether both axes clamp to the edge.
    pub fn clamps_both_axes(&self) -> bool {
        self.horizontal_wrap == Wrap::ClampToEdge && self.vertical_wrap == Wrap::ClampToEdge
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_plain_filters_skip_mipmaps() {
        let plain: Vec<Minify> = Minify::ALL
            .into_iter()
            .filter(|m| !m.is_mipmap())
            .collect();
        assert_eq!(plain, vec![Minify::Linear, Minify::Nearest]);
    }

    #[test]
    fn minify_codes_match_gl() {
        let codes: Vec<u32> = Minify::ALL.iter().map(|m| m.code()).collect();
        assert_eq!(codes, vec![9729, 9728, 9984, 9985, 9986, 9987]);
    }

    #[test]
    fn magnify_converts_to_minify_with_same_code() {
        for mag in Magnify::ALL {
            let min = Minify::from(mag);
            assert_eq!(mag.code(), min.code());
            assert!(!min.is_mipmap());
        }
    }

    #[test]
    fn wrap_codes_match_gl() {
        assert_eq!(Wrap::Repeat.code(), 10497);
        assert_eq!(Wrap::ClampToEdge.code(), 33071);
        assert_eq!(Wrap::MirroredRepeat.code(), 33648);
    }

    #[test]
    fn default_options_mipmap_and_repeat() {
        let opts = Options::default();
        assert_eq!(opts.magnify, Magnify::Linear);
        assert_eq!(opts.minify, Minify::NearestMipmapLinear);
        assert_eq!(opts.horizontal_wrap, Wrap::Repeat);
        assert_eq!(opts.vertical_wrap, Wrap::Repeat);
        assert!(opts.flip_y);
    }

    #[test]
    fn non_power_of_two_options_clamp_without_mipmaps() {
        let opts = Options::non_power_of_two();
        assert!(opts.clamps_both_axes());
        assert!(!opts.minify.is_mipmap());
    }

    #[test]
    fn from_json_overrides_only_given_keys() {
        let opts = Options::from_json(&json!({
            "minify": "linearMipmapLinear",
            "verticalWrap": "mirroredRepeat",
            "flipY": false,
        }))
        .unwrap();
        assert_eq!(opts.magnify, Magnify::Linear);
        assert_eq!(opts.minify, Minify::LinearMipmapLinear);
        assert_eq!(opts.horizontal_wrap, Wrap::Repeat);
        assert_eq!(opts.vertical_wrap, Wrap::MirroredRepeat);
        assert!(!opts.flip_y);
    }

    #[test]
    fn from_json_rejects_mipmap_magnify() {
        let err = Options::from_json(&json!({"magnify": "linearMipmapLinear"})).unwrap_err();
        assert!(
            matches!(err, GlError::InvalidValue { ref name, .. } if name == "magnify"),
            "got: {err}"
        );
    }

    #[test]
    fn options_serialize_with_camel_case_keys() {
        let value = serde_json::to_value(Options::non_power_of_two()).unwrap();
        assert_eq!(value["horizontalWrap"], "clampToEdge");
        assert_eq!(value["flipY"], true);
    }
}
