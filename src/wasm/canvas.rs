use std::collections::HashMap;
use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::js_err;
use crate::error::{Result, SketchError};
use crate::paint::{Painter, Rgba};
use crate::sprite::Strip;

/// `Painter` over a 2D canvas context. Sheets are looked up by asset name.
pub struct CanvasPainter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    sheets: HashMap<String, HtmlImageElement>,
}

impl CanvasPainter {
    pub fn new(canvas: HtmlCanvasElement, sheets: HashMap<String, HtmlImageElement>) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or(SketchError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SketchError::NoContext)?;
        Ok(Self { canvas, ctx, sheets })
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, css_color: &str) {
        self.ctx.set_fill_style_str(css_color);
        self.ctx.fill_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    fn fill_circle(&mut self, (x, y): (f64, f64), diameter: f64, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.begin_path();
        if self.ctx.arc(x, y, diameter / 2.0, 0.0, TAU).is_ok() {
            self.ctx.fill();
        }
    }

    fn fill_rotated_square(&mut self, (x, y): (f64, f64), side: f64, angle: f64, color: Rgba) {
        self.ctx.save();
        self.ctx.set_fill_style_str(&color.css());
        if self.ctx.translate(x, y).is_ok() && self.ctx.rotate(angle).is_ok() {
            self.ctx.fill_rect(-side / 2.0, -side / 2.0, side, side);
        }
        self.ctx.restore();
    }

    fn fill_polygon(&mut self, points: &[(f64, f64)], color: Rgba) {
        let Some((&(x0, y0), rest)) = points.split_first() else {
            return;
        };
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.begin_path();
        self.ctx.move_to(x0, y0);
        for &(x, y) in rest {
            self.ctx.line_to(x, y);
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn draw_sprite(&mut self, asset: &str, strip: Strip, (x, y): (f64, f64)) {
        let Some(img) = self.sheets.get(asset) else {
            return;
        };
        let (w, h) = (f64::from(strip.width), f64::from(strip.height));
        let drawn = self
            .ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                img,
                0.0,
                f64::from(strip.y),
                w,
                h,
                x,
                y,
                w,
                h,
            );
        if let Err(e) = drawn {
            log::debug!("sprite {asset} not drawn: {}", js_err(e));
        }
    }
}
