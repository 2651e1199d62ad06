//! Context-creation options for a drawing surface.
//!
//! Options are given as a list; [`ContextConfig::from_options`] folds them into
//! the resolved attributes requested from the browser (or windowing layer) and
//! the clear values used at the start of each frame.

use serde::Serialize;
use serde_json::Value;

use crate::constants;
use crate::native::NativeCall;
use crate::params::{param_bool, param_f64, param_i64};

/// One context-creation option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContextOption {
    /// Give the drawing buffer an alpha channel; the flag selects premultiplied alpha.
    Alpha(bool),
    /// Allocate a depth buffer, cleared to the given value each frame.
    Depth(f32),
    /// Allocate a stencil buffer, cleared to the given value each frame.
    Stencil(i32),
    Antialias,
    /// RGBA color the drawing buffer is cleared to.
    ClearColor(f32, f32, f32, f32),
    /// Keep the drawing buffer contents after compositing.
    PreserveDrawingBuffer,
}

/// Resolved context attributes and per-frame clear values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextConfig {
    pub alpha: bool,
    pub premultiplied_alpha: bool,
    pub depth: bool,
    pub clear_depth: f32,
    pub stencil: bool,
    pub clear_stencil: i32,
    pub antialias: bool,
    pub clear_color: [f32; 4],
    pub preserve_drawing_buffer: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            alpha: false,
            premultiplied_alpha: false,
            depth: false,
            clear_depth: 1.0,
            stencil: false,
            clear_stencil: 0,
            antialias: false,
            clear_color: [0.0; 4],
            preserve_drawing_buffer: false,
        }
    }
}

impl ContextConfig {
    /// Folds `options` over the defaults. Later options override earlier ones.
    pub fn from_options(options: &[ContextOption]) -> Self {
        options
            .iter()
            .fold(Self::default(), |mut config, option| {
                match *option {
                    ContextOption::Alpha(premultiplied) => {
                        config.alpha = true;
                        config.premultiplied_alpha = premultiplied;
                    }
                    ContextOption::Depth(value) => {
                        config.depth = true;
                        config.clear_depth = value;
                    }
                    ContextOption::Stencil(value) => {
                        config.stencil = true;
                        config.clear_stencil = value;
                    }
                    ContextOption::Antialias => config.antialias = true,
                    ContextOption::ClearColor(r, g, b, a) => config.clear_color = [r, g, b, a],
                    ContextOption::PreserveDrawingBuffer => config.preserve_drawing_buffer = true,
                }
                config
            })
    }

    /// Alpha with premultiplication, antialiasing, and a depth buffer cleared to 1.
    pub fn standard() -> Self {
        Self::from_options(&[
            ContextOption::Alpha(true),
            ContextOption::Antialias,
            ContextOption::Depth(1.0),
        ])
    }

    /// Reads options from a JSON object.
    ///
    /// Recognized keys: `alpha` (bool), `premultipliedAlpha` (bool), `depth`
    /// (number, enables the depth buffer), `stencil` (integer, enables the
    /// stencil buffer), `antialias` (bool), `clearColor` (array of four
    /// numbers), `preserveDrawingBuffer` (bool). Missing keys leave the
    /// option unset.
    pub fn from_json(params: &Value) -> Self {
        let mut options = Vec::new();
        if param_bool(params, "alpha", false) {
            options.push(ContextOption::Alpha(param_bool(
                params,
                "premultipliedAlpha",
                true,
            )));
        }
        if params.get("depth").is_some_and(Value::is_number) {
            options.push(ContextOption::Depth(param_f64(params, "depth", 1.0) as f32));
        }
        if params.get("stencil").is_some_and(Value::is_i64) {
            let value = param_i64(params, "stencil", 0);
            options.push(ContextOption::Stencil(
                i32::try_from(value).unwrap_or(i32::MAX),
            ));
        }
        if param_bool(params, "antialias", false) {
            options.push(ContextOption::Antialias);
        }
        if let Some([r, g, b, a]) = clear_color(params) {
            options.push(ContextOption::ClearColor(r, g, b, a));
        }
        if param_bool(params, "preserveDrawingBuffer", false) {
            options.push(ContextOption::PreserveDrawingBuffer);
        }
        Self::from_options(&options)
    }

    /// Bits passed to `clear` at the start of a frame.
    pub fn clear_mask(&self) -> u32 {
        let mut mask = constants::COLOR_BUFFER_BIT;
        if self.depth {
            mask |= constants::DEPTH_BUFFER_BIT;
        }
        if self.stencil {
            mask |= constants::STENCIL_BUFFER_BIT;
        }
        mask
    }

    /// Calls that set the clear values and clear the drawing buffer.
    pub fn clear_calls(&self) -> Vec<NativeCall> {
        let [r, g, b, a] = self.clear_color;
        let mut calls = vec![NativeCall::ClearColor(r, g, b, a)];
        if self.depth {
            calls.push(NativeCall::ClearDepth(self.clear_depth));
        }
        if self.stencil {
            calls.push(NativeCall::ClearStencil(self.clear_stencil));
        }
        calls.push(NativeCall::Clear(self.clear_mask()));
        calls
    }
}

fn clear_color(params: &Value) -> Option<[f32; 4]> {
    let values = params.get("clearColor")?.as_array()?;
    if values.len() != 4 {
        return None;
    }
    let mut rgba = [0.0; 4];
    for (slot, value) in rgba.iter_mut().zip(values) {
        *slot = value.as_f64()? as f32;
    }
    Some(rgba)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_options_resolve_to_defaults() {
        assert_eq!(ContextConfig::from_options(&[]), ContextConfig::default());
    }

    #[test]
    fn standard_enables_alpha_antialias_and_depth() {
        let config = ContextConfig::standard();
        assert!(config.alpha && config.premultiplied_alpha);
        assert!(config.antialias);
        assert!(config.depth);
        assert_eq!(config.clear_depth, 1.0);
        assert!(!config.stencil);
    }

    #[test]
    fn later_options_override_earlier_ones() {
        let config = ContextConfig::from_options(&[
            ContextOption::ClearColor(1.0, 0.0, 0.0, 1.0),
            ContextOption::Alpha(true),
            ContextOption::ClearColor(0.0, 0.0, 1.0, 1.0),
            ContextOption::Alpha(false),
        ]);
        assert_eq!(config.clear_color, [0.0, 0.0, 1.0, 1.0]);
        assert!(config.alpha);
        assert!(!config.premultiplied_alpha);
    }

    #[test]
    fn clear_calls_follow_enabled_buffers() {
        let config = ContextConfig::from_options(&[
            ContextOption::Depth(0.5),
            ContextOption::Stencil(3),
            ContextOption::ClearColor(0.1, 0.2, 0.3, 1.0),
        ]);
        assert_eq!(
            config.clear_calls(),
            vec![
                NativeCall::ClearColor(0.1, 0.2, 0.3, 1.0),
                NativeCall::ClearDepth(0.5),
                NativeCall::ClearStencil(3),
                NativeCall::Clear(16384 | 256 | 1024),
            ]
        );
    }

    #[test]
    fn color_only_clear_mask() {
        let calls = ContextConfig::default().clear_calls();
        assert_eq!(calls.last(), Some(&NativeCall::Clear(16384)));
        assert_eq!(calls.len(), 2);
    }

    #[test]
    fn from_json_reads_all_knobs() {
        let config = ContextConfig::from_json(&json!({
            "alpha": true,
            "premultipliedAlpha": false,
            "depth": 1,
            "stencil": 7,
            "antialias": true,
            "clearColor": [0, 0.5, 1, 1],
            "preserveDrawingBuffer": true,
        }));
        assert!(config.alpha && !config.premultiplied_alpha);
        assert!(config.depth);
        assert_eq!(config.clear_stencil, 7);
        assert!(config.antialias && config.preserve_drawing_buffer);
        assert_eq!(config.clear_color, [0.0, 0.5, 1.0, 1.0]);
    }

    #[test]
    fn from_json_ignores_malformed_clear_color() {
        let config = ContextConfig::from_json(&json!({"clearColor": [1, 2]}));
        assert_eq!(config.clear_color, [0.0; 4]);
    }
}
