use friction_core::{Point, Stroke, Surface, TextStyle};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// [`Surface`] backed by a 2D canvas context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context threw: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("unexpected context type: {:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    fn set_dash(&self, dash: &[f64]) {
        let segments: js_sys::Array = dash.iter().map(|d| JsValue::from_f64(*d)).collect();
        if let Err(e) = self.ctx.set_line_dash(&segments) {
            log::warn!("[canvas] set_line_dash failed: {:?}", e);
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn stroke_path(&mut self, points: &[Point], stroke: &Stroke) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.save();
        self.ctx.set_stroke_style_str(stroke.color);
        self.ctx.set_line_width(stroke.width);
        self.set_dash(stroke.dash);
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.stroke();
        self.ctx.restore();
    }

    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        self.ctx.set_fill_style_str(style.color);
        self.ctx.set_font(style.font);
        if let Err(e) = self.ctx.fill_text(text, at.x, at.y) {
            log::warn!("[canvas] fill_text {text:?} failed: {:?}", e);
        }
    }
}
