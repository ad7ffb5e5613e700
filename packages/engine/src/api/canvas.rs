//! `DrawSurface` for the browser's 2D canvas context.
//!
//! Calls are written fully qualified: the trait methods share names with the
//! inherent `CanvasRenderingContext2d` ones and would otherwise recurse.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::systems::render::{DrawSurface, GlyphMetrics};

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

impl DrawSurface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) {
        CanvasRenderingContext2d::clear_rect(self, 0.0, 0.0, width, height);
    }

    fn set_font(&mut self, font: &str) {
        CanvasRenderingContext2d::set_font(self, font);
    }

    fn set_fill_style(&mut self, style: &str) {
        CanvasRenderingContext2d::set_fill_style_str(self, style);
    }

    fn save(&mut self) {
        CanvasRenderingContext2d::save(self);
    }

    fn restore(&mut self) {
        CanvasRenderingContext2d::restore(self);
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), String> {
        CanvasRenderingContext2d::translate(self, x, y).map_err(js_error)
    }

    fn rotate(&mut self, angle: f64) -> Result<(), String> {
        CanvasRenderingContext2d::rotate(self, angle).map_err(js_error)
    }

    fn measure_glyph(&mut self, glyph: &str) -> Result<GlyphMetrics, String> {
        let m = CanvasRenderingContext2d::measure_text(self, glyph).map_err(js_error)?;
        Ok(GlyphMetrics::new(
            m.actual_bounding_box_left(),
            m.actual_bounding_box_right(),
            m.actual_bounding_box_ascent(),
            m.actual_bounding_box_descent(),
        ))
    }

    fn fill_glyph(&mut self, glyph: &str, x: f64, y: f64) -> Result<(), String> {
        CanvasRenderingContext2d::fill_text(self, glyph, x, y).map_err(js_error)
    }
}
