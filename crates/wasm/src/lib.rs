//! Browser entry point: runs the offset and grid demos on a canvas.
//!
//! ```js
//! const app = new App("canvas", 16, 16);
//! window.addEventListener("keydown", (e) => app.key_down(e.key));
//! ```
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGlRenderingContext};
use webgl_kit_core::demo::{self, Message, OffsetDemo};
use webgl_kit_core::render::{Entity, GpuMesh, Surface, Texture};
use webgl_kit_core::settings::{Blend, Factor};
use webgl_kit_core::{ContextConfig, Setting, ShaderPair, Uniforms};

fn error(message: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&message.to_string())
}

/// Context creation attributes as the object `getContext` expects.
fn context_attributes(config: &ContextConfig) -> Result<js_sys::Object, JsValue> {
    let attributes = js_sys::Object::new();
    for (key, value) in [
        ("alpha", config.alpha),
        ("premultipliedAlpha", config.premultiplied_alpha),
        ("depth", config.depth),
        ("stencil", config.stencil),
        ("antialias", config.antialias),
        ("preserveDrawingBuffer", config.preserve_drawing_buffer),
    ] {
        js_sys::Reflect::set(&attributes, &key.into(), &JsValue::from_bool(value))?;
    }
    Ok(attributes)
}

#[wasm_bindgen]
pub struct App {
    surface: Surface,
    demo: OffsetDemo,
    triangle: GpuMesh,
    triangle_shaders: ShaderPair,
    grid: GpuMesh,
    grid_shaders: ShaderPair,
    grid_uniforms: Uniforms<Texture>,
    blend: Vec<Setting>,
}

#[wasm_bindgen]
impl App {
    /// Creates a WebGL 1 context on the canvas with id `canvas_id` and
    /// uploads both demo meshes.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, columns: usize, rows: usize) -> Result<App, JsValue> {
        let window = web_sys::window().ok_or_else(|| error("missing window"))?;
        let document = window.document().ok_or_else(|| error("missing document"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| error("canvas not found"))?
            .dyn_into::<HtmlCanvasElement>()?;

        let config = ContextConfig::standard();
        let webgl: WebGlRenderingContext = canvas
            .get_context_with_context_options("webgl", &context_attributes(&config)?)?
            .ok_or_else(|| error("webgl context unavailable"))?
            .dyn_into()?;
        let gl = glow::Context::from_webgl1_context(webgl);

        let width = i32::try_from(canvas.width()).map_err(error)?;
        let height = i32::try_from(canvas.height()).map_err(error)?;
        let surface = Surface::new(gl, config, width, height);

        let triangle = surface.upload_mesh(&OffsetDemo::mesh()).map_err(error)?;
        let grid = surface
            .upload_mesh(&demo::grid(columns, rows).map_err(error)?)
            .map_err(error)?;

        Ok(App {
            surface,
            demo: OffsetDemo::new(),
            triangle,
            triangle_shaders: OffsetDemo::shaders(),
            grid,
            grid_shaders: demo::grid_shaders(),
            grid_uniforms: Uniforms::new().with("cells", columns.max(rows) as f32),
            blend: vec![Setting::Blend(Blend::add(
                Factor::SrcAlpha,
                Factor::OneMinusSrcAlpha,
            ))],
        })
    }

    /// Feeds a `KeyboardEvent.key` value to the demo and redraws if it mattered.
    pub fn key_down(&mut self, key: &str) -> Result<(), JsValue> {
        match Message::from_key(key) {
            Some(message) => {
                self.demo.update(message);
                self.render()
            }
            None => Ok(()),
        }
    }

    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), JsValue> {
        self.surface.resize(width, height);
        self.render()
    }

    pub fn render(&mut self) -> Result<(), JsValue> {
        let mut grid_uniforms = self.grid_uniforms.clone();
        grid_uniforms.set("offset", self.demo.offset() * -0.25);
        let triangle_uniforms = self.demo.uniforms();

        let entities = [
            Entity {
                shaders: &self.grid_shaders,
                mesh: &self.grid,
                uniforms: &grid_uniforms,
                settings: &[],
            },
            Entity {
                shaders: &self.triangle_shaders,
                mesh: &self.triangle,
                uniforms: &triangle_uniforms,
                settings: &self.blend,
            },
        ];
        self.surface.render(&entities).map_err(error)
    }
}
