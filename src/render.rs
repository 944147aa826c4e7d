//! Rendering: draws every box to a 2D surface.
//!
//! The drawing target is abstracted as [`Surface`] so the frame logic can be
//! exercised without a browser. The only production implementation is for
//! [`web_sys::CanvasRenderingContext2d`]; this module is the only place that
//! touches it. Rendering reads the store and config and never mutates
//! application state. The per-tick re-sort happens in
//! [`crate::engine::EngineCore::tick`] before [`draw`] is called.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::config::Config;
use crate::doc::{BoxObject, BoxStore};

/// Minimal raster drawing context consumed by the render loop.
pub trait Surface {
    type Error;

    fn clear_rect(&self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect(&self, color: &str, x: f64, y: f64, w: f64, h: f64);
    /// Draw `text` with its alphabetic baseline starting at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Implementation-defined; the browser can reject text calls.
    fn fill_text(&self, text: &str, color: &str, font: &str, x: f64, y: f64) -> Result<(), Self::Error>;
}

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn clear_rect(&self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::clear_rect(self, x, y, w, h);
    }

    fn fill_rect(&self, color: &str, x: f64, y: f64, w: f64, h: f64) {
        self.set_fill_style_str(color);
        CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
    }

    fn fill_text(&self, text: &str, color: &str, font: &str, x: f64, y: f64) -> Result<(), JsValue> {
        self.set_fill_style_str(color);
        self.set_font(font);
        CanvasRenderingContext2d::fill_text(self, text, x, y)
    }
}

/// Clear the whole canvas and draw every box in collection order.
///
/// # Errors
///
/// Returns the first surface error; boxes after it are not drawn.
pub fn draw<S: Surface>(surface: &S, doc: &BoxStore, config: &Config) -> Result<(), S::Error> {
    surface.clear_rect(0.0, 0.0, f64::from(config.canvas_width), f64::from(config.canvas_height));
    for obj in doc {
        draw_box(surface, obj, config)?;
    }
    Ok(())
}

fn draw_box<S: Surface>(surface: &S, obj: &BoxObject, config: &Config) -> Result<(), S::Error> {
    let side = f64::from(obj.side);
    surface.fill_rect(config.css_color(obj.color), f64::from(obj.x), f64::from(obj.y), side, side);

    let (lx, ly) = label_origin(obj);
    surface.fill_text(&obj.z_index.to_string(), &config.label_color, &label_font(obj.side), lx, ly)
}

/// Font for the z-index label: a quarter of the side, in points.
#[must_use]
pub fn label_font(side: i32) -> String {
    format!("{}pt sans-serif", f64::from(side) / 4.0)
}

/// Baseline origin that roughly centers a short label on the box.
#[must_use]
pub fn label_origin(obj: &BoxObject) -> (f64, f64) {
    let side = f64::from(obj.side);
    (f64::from(obj.x) + side / 3.5, f64::from(obj.y) + side / 1.7)
}
