//! Per-entity render settings.
//!
//! Each [`Setting`] is turned on right before its entity is drawn and turned
//! off right after, so entities never leak state into each other. Turning a
//! setting on or off is expressed as a list of [`NativeCall`]s.

pub mod blend;
pub mod depth;
pub mod stencil;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::native::NativeCall;

pub use blend::{Blend, BlendEquation, BlendFunc, Factor};
pub use depth::{CompareFunc, DepthTest};
pub use stencil::{StencilFace, StencilOp, StencilTest};

/// Which polygon faces to cull.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Face {
    Front,
    Back,
    FrontAndBack,
}

impl Face {
    pub fn code(self) -> u32 {
        match self {
            Face::Front => constants::FRONT,
            Face::Back => constants::BACK,
            Face::FrontAndBack => constants::FRONT_AND_BACK,
        }
    }
}

/// A GL capability toggle together with the parameters it needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Setting {
    Blend(Blend),
    DepthTest(DepthTest),
    StencilTest(StencilTest),
    /// Discard fragments outside the rectangle (window coordinates).
    Scissor {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    /// Channels that may be written.
    ColorMask {
        red: bool,
        green: bool,
        blue: bool,
        alpha: bool,
    },
    CullFace { face: Face },
    PolygonOffset { factor: f32, units: f32 },
    SampleCoverage { value: f32, invert: bool },
    SampleAlphaToCoverage,
}

impl Setting {
    /// The capability passed to `enable`/`disable`, if the setting has one.
    ///
    /// `ColorMask` is not a capability; it is reset instead of disabled.
    pub fn capability(&self) -> Option<u32> {
        match self {
            Setting::Blend(_) => Some(constants::BLEND),
            Setting::DepthTest(_) => Some(constants::DEPTH_TEST),
            Setting::StencilTest(_) => Some(constants::STENCIL_TEST),
            Setting::Scissor { .. } => Some(constants::SCISSOR_TEST),
            Setting::ColorMask { .. } => None,
            Setting::CullFace { .. } => Some(constants::CULL_FACE),
            Setting::PolygonOffset { .. } => Some(constants::POLYGON_OFFSET_FILL),
            Setting::SampleCoverage { .. } => Some(constants::SAMPLE_COVERAGE),
            Setting::SampleAlphaToCoverage => Some(constants::SAMPLE_ALPHA_TO_COVERAGE),
        }
    }

    /// Calls that switch this setting on with its parameters.
    pub fn enable(&self) -> Vec<NativeCall> {
        match *self {
            Setting::Blend(blend) => {
                let [r, g, b, a] = blend.constant;
                vec![
                    NativeCall::Enable(constants::BLEND),
                    NativeCall::BlendEquationSeparate(
                        blend.color.equation.code(),
                        blend.alpha.equation.code(),
                    ),
                    NativeCall::BlendFuncSeparate(
                        blend.color.source.code(),
                        blend.color.destination.code(),
                        blend.alpha.source.code(),
                        blend.alpha.destination.code(),
                    ),
                    NativeCall::BlendColor(r, g, b, a),
                ]
            }
            Setting::DepthTest(depth) => vec![
                NativeCall::Enable(constants::DEPTH_TEST),
                NativeCall::DepthFunc(depth.test.code()),
                NativeCall::DepthMask(depth.write),
                NativeCall::DepthRange(depth.near, depth.far),
            ],
            Setting::StencilTest(stencil) => {
                let mut calls = vec![NativeCall::Enable(constants::STENCIL_TEST)];
                for (face, ops) in [
                    (constants::FRONT, stencil.front),
                    (constants::BACK, stencil.back),
                ] {
                    calls.push(NativeCall::StencilFuncSeparate(
                        face,
                        ops.test.code(),
                        stencil.reference,
                        stencil.mask,
                    ));
                    calls.push(NativeCall::StencilOpSeparate(
                        face,
                        ops.fail.code(),
                        ops.zfail.code(),
                        ops.zpass.code(),
                    ));
                    calls.push(NativeCall::StencilMaskSeparate(face, stencil.write_mask));
                }
                calls
            }
            Setting::Scissor {
                x,
                y,
                width,
                height,
            } => vec![
                NativeCall::Enable(constants::SCISSOR_TEST),
                NativeCall::Scissor(x, y, width, height),
            ],
            Setting::ColorMask {
                red,
                green,
                blue,
                alpha,
            } => vec![NativeCall::ColorMask(red, green, blue, alpha)],
            Setting::CullFace { face } => vec![
                NativeCall::Enable(constants::CULL_FACE),
                NativeCall::CullFace(face.code()),
            ],
            Setting::PolygonOffset { factor, units } => vec![
                NativeCall::Enable(constants::POLYGON_OFFSET_FILL),
                NativeCall::PolygonOffset(factor, units),
            ],
            Setting::SampleCoverage { value, invert } => vec![
                NativeCall::Enable(constants::SAMPLE_COVERAGE),
                NativeCall::SampleCoverage(value, invert),
            ],
            Setting::SampleAlphaToCoverage => {
                vec![NativeCall::Enable(constants::SAMPLE_ALPHA_TO_COVERAGE)]
            }
        }
    }

    /// Calls that restore the default state after drawing.
    ///
    /// Write masks survive `disable` and also gate `clear`, so depth and
    /// stencil tests put their masks back to all-writable.
    pub fn disable(&self) -> Vec<NativeCall> {
        match self {
            Setting::DepthTest(_) => vec![
                NativeCall::Disable(constants::DEPTH_TEST),
                NativeCall::DepthMask(true),
            ],
            Setting::StencilTest(_) => vec![
                NativeCall::Disable(constants::STENCIL_TEST),
                NativeCall::StencilMaskSeparate(constants::FRONT_AND_BACK, !0),
            ],
            Setting::ColorMask { .. } => vec![NativeCall::ColorMask(true, true, true, true)],
            _ => self
                .capability()
                .map(NativeCall::Disable)
                .into_iter()
                .collect(),
        }
    }
}

/// One step of drawing an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawStep {
    Call(NativeCall),
    /// Issue the entity's draw call.
    Draw,
}

/// Steps for drawing one entity under `settings`: every setting switched on in
/// order, the draw, then every setting switched off in reverse order.
pub fn draw_steps(settings: &[Setting]) -> Vec<DrawStep> {
    let enable = settings.iter().flat_map(Setting::enable);
    let disable = settings.iter().rev().flat_map(Setting::disable);
    enable
        .map(DrawStep::Call)
        .chain(std::iter::once(DrawStep::Draw))
        .chain(disable.map(DrawStep::Call))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn every_setting() -> Vec<Setting> {
        vec![
            Setting::Blend(Blend::add(Factor::SrcAlpha, Factor::OneMinusSrcAlpha)),
            Setting::DepthTest(DepthTest::default()),
            Setting::StencilTest(StencilTest::default()),
            Setting::Scissor {
                x: 0,
                y: 0,
                width: 10,
                height: 10,
            },
            Setting::ColorMask {
                red: true,
                green: false,
                blue: true,
                alpha: false,
            },
            Setting::CullFace { face: Face::Back },
            Setting::PolygonOffset {
                factor: 1.0,
                units: 2.0,
            },
            Setting::SampleCoverage {
                value: 0.5,
                invert: false,
            },
            Setting::SampleAlphaToCoverage,
        ]
    }

    #[test]
    fn every_setting_enables_with_its_capability_first() {
        for setting in every_setting() {
            let calls = setting.enable();
            assert!(!calls.is_empty(), "{setting:?} produced no calls");
            if let Some(cap) = setting.capability() {
                assert_eq!(calls[0], NativeCall::Enable(cap), "for {setting:?}");
            }
        }
    }

    #[test]
    fn disable_starts_with_the_capability() {
        for setting in every_setting() {
            let calls = setting.disable();
            match (setting.capability(), calls.first()) {
                (Some(cap), Some(&first)) => assert_eq!(first, NativeCall::Disable(cap)),
                (None, Some(&first)) => {
                    assert_eq!(first, NativeCall::ColorMask(true, true, true, true))
                }
                (_, None) => panic!("{setting:?} produced no disable calls"),
            }
        }
    }

    #[test]
    fn plain_capabilities_disable_with_one_call() {
        for setting in every_setting() {
            if !matches!(setting, Setting::DepthTest(_) | Setting::StencilTest(_)) {
                assert_eq!(setting.disable().len(), 1, "for {setting:?}");
            }
        }
    }

    #[test]
    fn depth_and_stencil_disable_restore_write_masks() {
        let depth = Setting::DepthTest(DepthTest {
            write: false,
            ..DepthTest::default()
        });
        assert_eq!(
            depth.disable(),
            vec![NativeCall::Disable(2929), NativeCall::DepthMask(true)]
        );

        let stencil = Setting::StencilTest(StencilTest::both(1, 0xFF, 0, StencilFace::default()));
        assert_eq!(
            stencil.disable(),
            vec![
                NativeCall::Disable(2960),
                NativeCall::StencilMaskSeparate(1032, u32::MAX),
            ]
        );
    }

    #[test]
    fn draw_steps_wrap_the_draw_in_enable_and_reverse_disable() {
        let settings = [
            Setting::CullFace { face: Face::Back },
            Setting::DepthTest(DepthTest::default()),
        ];
        let steps = draw_steps(&settings);
        let draw_at = steps
            .iter()
            .position(|s| *s == DrawStep::Draw)
            .expect("no draw step");

        assert_eq!(steps[0], DrawStep::Call(NativeCall::Enable(2884)));
        assert_eq!(draw_at, 2 + 4);
        assert_eq!(
            &steps[draw_at + 1..],
            &[
                DrawStep::Call(NativeCall::Disable(2929)),
                DrawStep::Call(NativeCall::DepthMask(true)),
                DrawStep::Call(NativeCall::Disable(2884)),
            ]
        );
    }

    #[test]
    fn draw_steps_without_settings_is_just_the_draw() {
        assert_eq!(draw_steps(&[]), vec![DrawStep::Draw]);
    }

    #[test]
    fn blend_expands_to_separate_equation_and_func() {
        let setting = Setting::Blend(Blend::add(Factor::One, Factor::One));
        assert_eq!(
            setting.enable(),
            vec![
                NativeCall::Enable(3042),
                NativeCall::BlendEquationSeparate(32774, 32774),
                NativeCall::BlendFuncSeparate(1, 1, 1, 1),
                NativeCall::BlendColor(0.0, 0.0, 0.0, 0.0),
            ]
        );
    }

    #[test]
    fn depth_test_expands_function_mask_and_range() {
        let setting = Setting::DepthTest(DepthTest {
            test: CompareFunc::LessOrEqual,
            write: false,
            near: 0.25,
            far: 0.75,
        });
        assert_eq!(
            setting.enable(),
            vec![
                NativeCall::Enable(2929),
                NativeCall::DepthFunc(515),
                NativeCall::DepthMask(false),
                NativeCall::DepthRange(0.25, 0.75),
            ]
        );
    }

    #[test]
    fn stencil_test_configures_front_then_back() {
        let front = StencilFace {
            test: CompareFunc::Equal,
            ..StencilFace::default()
        };
        let back = StencilFace {
            zpass: StencilOp::Replace,
            ..StencilFace::default()
        };
        let calls = Setting::StencilTest(StencilTest::separate(3, 0x0F, 0xF0, front, back)).enable();
        assert_eq!(calls.len(), 7);
        assert_eq!(calls[1], NativeCall::StencilFuncSeparate(1028, 514, 3, 0x0F));
        assert_eq!(calls[2], NativeCall::StencilOpSeparate(1028, 7680, 7680, 7680));
        assert_eq!(calls[3], NativeCall::StencilMaskSeparate(1028, 0xF0));
        assert_eq!(calls[4], NativeCall::StencilFuncSeparate(1029, 519, 3, 0x0F));
        assert_eq!(calls[5], NativeCall::StencilOpSeparate(1029, 7680, 7680, 7681));
    }

    #[test]
    fn cull_face_passes_face_code() {
        let calls = Setting::CullFace {
            face: Face::FrontAndBack,
        }
        .enable();
        assert_eq!(calls[1], NativeCall::CullFace(1032));
    }

    #[test]
    fn settings_deserialize_from_tagged_json() {
        let settings: Vec<Setting> = serde_json::from_value(json!([
            {"kind": "cullFace", "face": "back"},
            {"kind": "depthTest", "test": "greater"},
            {"kind": "sampleAlphaToCoverage"},
            {
                "kind": "blend",
                "color": {"equation": "add", "source": "srcAlpha", "destination": "oneMinusSrcAlpha"},
                "alpha": {"equation": "add", "source": "one", "destination": "zero"}
            }
        ]))
        .unwrap();
        assert_eq!(settings[0], Setting::CullFace { face: Face::Back });
        assert_eq!(
            settings[1],
            Setting::DepthTest(DepthTest::new(CompareFunc::Greater))
        );
        assert_eq!(settings[2], Setting::SampleAlphaToCoverage);
        assert!(matches!(settings[3], Setting::Blend(b) if b.alpha.destination == Factor::Zero));
    }
}
