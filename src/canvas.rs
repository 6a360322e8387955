use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::env::{self, Viewport};
use crate::core::error::CoreError;
use crate::core::starfield::{Line, Rgba, Surface};
use crate::dom;

/// 2D canvas the starfield draws into. Coordinates are CSS pixels; the
/// backing store is scaled by the device pixel ratio.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    dpr: f64,
}

impl CanvasSurface {
    pub fn acquire(canvas: &web::HtmlCanvasElement) -> Result<Self, CoreError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
            .ok_or(CoreError::SurfaceUnavailable)?;
        // sized on the first clear, once the viewport is known
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
            dpr: 0.0,
        })
    }

    fn sync_size(&mut self, viewport: Viewport, dpr: f64) {
        let size = viewport.backing_size(dpr);
        dom::set_canvas_backing_size(&self.canvas, size);
        self.dpr = dpr;
        // resizing the backing store resets the context transform
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        log::debug!("[canvas] backing {}x{} at dpr {dpr}", size.0, size.1);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, viewport: Viewport) {
        let dpr = dom::device_pixel_ratio();
        let backing = (self.canvas.width(), self.canvas.height());
        if dpr != self.dpr || env::needs_resync(backing, viewport, dpr) {
            self.sync_size(viewport, dpr);
        }
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
    }

    fn stroke_lines(&mut self, lines: &[Line], color: Rgba, width: f32) {
        if lines.is_empty() {
            return;
        }
        self.ctx.begin_path();
        for l in lines {
            self.ctx.move_to(l.from.x as f64, l.from.y as f64);
            self.ctx.line_to(l.to.x as f64, l.to.y as f64);
        }
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }

    fn line(&mut self, line: Line, color: Rgba, width: f32) {
        self.stroke_lines(&[line], color, width);
    }
}
