//! Canvas 2D backend
//!
//! Paints a shape list onto an HTML canvas.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes::{Paint, Shape, css_color};

/// Dash pattern for target markers (on, off)
const DASH: [f64; 2] = [8.0, 5.0];

pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    /// Acquire the 2D context of `canvas`
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    /// Paint shapes in order
    pub fn draw(&self, shapes: &[Shape]) -> Result<(), JsValue> {
        for shape in shapes {
            self.draw_shape(shape)?;
        }
        Ok(())
    }

    fn draw_shape(&self, shape: &Shape) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match shape {
            Shape::Rect { origin, size, color } => {
                ctx.set_fill_style_str(&css_color(*color));
                ctx.fill_rect(origin.x.into(), origin.y.into(), size.x.into(), size.y.into());
            }
            Shape::Ellipse { center, radii, paint } => {
                ctx.begin_path();
                ctx.ellipse(
                    center.x.into(),
                    center.y.into(),
                    radii.x.into(),
                    radii.y.into(),
                    0.0,
                    0.0,
                    TAU,
                )?;
                self.paint(paint)?;
            }
            Shape::Arc { center, radius, start, end, color, width } => {
                ctx.set_stroke_style_str(&css_color(*color));
                ctx.set_line_width((*width).into());
                ctx.set_line_cap("round");
                ctx.begin_path();
                ctx.arc(
                    center.x.into(),
                    center.y.into(),
                    (*radius).into(),
                    (*start).into(),
                    (*end).into(),
                )?;
                ctx.stroke();
            }
            Shape::Text { pos, text, size, color } => {
                ctx.set_fill_style_str(&css_color(*color));
                ctx.set_font(&format!("bold {}px sans-serif", size));
                ctx.set_text_align("center");
                ctx.set_text_baseline("middle");
                ctx.fill_text(text, pos.x.into(), pos.y.into())?;
            }
        }
        Ok(())
    }

    fn paint(&self, paint: &Paint) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match paint {
            Paint::Fill(color) => {
                ctx.set_fill_style_str(&css_color(*color));
                ctx.fill();
            }
            Paint::Stroke { color, width, dashed } => {
                ctx.set_stroke_style_str(&css_color(*color));
                ctx.set_line_width((*width).into());
                if *dashed {
                    let pattern: js_sys::Array = DASH.iter().map(|&d| JsValue::from_f64(d)).collect();
                    ctx.set_line_dash(&pattern)?;
                }
                ctx.stroke();
                if *dashed {
                    ctx.set_line_dash(&js_sys::Array::new())?;
                }
            }
        }
        Ok(())
    }
}
