// Helper functions for dealing with the browser: creating the owned canvas element,
// grabbing its 2d context, and the DrawContext / Viewport impls over web-sys types.

use crate::color::Color;
use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::renderer::DrawContext;
use crate::surface::Viewport;
use std::f64::consts::PI;
use vecmath::Vector2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

pub fn window() -> Result<Window, FieldError> {
    web_sys::window().ok_or(FieldError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, FieldError> {
    window.document().ok_or(FieldError::NoDocument)
}

// Creates a full-bleed canvas behind the page content and appends it to <body>
pub fn create_canvas(document: &Document, config: &FieldConfig) -> Result<HtmlCanvasElement, FieldError> {
    let body = document.body().ok_or(FieldError::NoBody)?;
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| FieldError::Js("created element is not a canvas".to_owned()))?;
    canvas.set_id(&config.canvas_id);

    let style = canvas.style();
    style.set_property("position", "absolute")?;
    style.set_property("top", "0")?;
    style.set_property("left", "0")?;
    style.set_property("z-index", &config.z_index.to_string())?;
    style.set_property("width", "100%")?;
    style.set_property("height", "100%")?;
    style.set_property("pointer-events", "none")?;

    body.append_child(&canvas)?;
    Ok(canvas)
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, FieldError> {
    canvas
        .get_context("2d")?
        .ok_or(FieldError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| FieldError::NoContext)
}

impl Viewport for Window {
    fn viewport_width(&self) -> Result<u32, FieldError> {
        let width = self
            .inner_width()?
            .as_f64()
            .ok_or_else(|| FieldError::Js("innerWidth is not a number".to_owned()))?;
        Ok(width.max(0.0) as u32)
    }

    fn document_height(&self) -> Result<u32, FieldError> {
        let body = document(self)?.body().ok_or(FieldError::NoBody)?;
        Ok(body.scroll_height().max(0) as u32)
    }
}

impl DrawContext for CanvasRenderingContext2d {
    fn set_size(&mut self, width: u32, height: u32) {
        if let Some(canvas) = self.canvas() {
            canvas.set_width(width);
            canvas.set_height(height);
        }
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    #[allow(deprecated)]
    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color) -> Result<(), FieldError> {
        self.begin_path();
        self.arc(center[0], center[1], radius, 0.0, PI * 2.0)?;
        self.set_fill_style(&JsValue::from_str(&color.to_css()));
        self.fill();
        Ok(())
    }

    #[allow(deprecated)]
    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, line_width: f64, color: Color) {
        self.set_stroke_style(&JsValue::from_str(&color.to_css()));
        self.set_line_width(line_width);
        self.begin_path();
        self.move_to(from[0], from[1]);
        self.line_to(to[0], to[1]);
        self.stroke();
    }
}
