//! Canvas 2D presenter: every entity is drawn as a stroked line loop.

pub mod draw;

use game_core::{Frame, Presenter};
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::Camera;

pub struct Renderer {
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
    pub size: (u32, u32),
}

impl Renderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let size = (canvas.width(), canvas.height());
        Ok(Self { canvas, ctx, size })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.size = (width, height);
    }

    fn camera(&self, frame: &Frame) -> Camera {
        Camera::orthographic(
            frame.world_size,
            Vec2::new(self.size.0 as f32, self.size.1 as f32),
        )
    }
}

impl Presenter for Renderer {
    fn present(&mut self, frame: &Frame) {
        let camera = self.camera(frame);
        if let Err(err) = draw::draw_frame(&self.ctx, &camera, self.size, frame) {
            web_sys::console::warn_1(&err);
        }
    }
}
