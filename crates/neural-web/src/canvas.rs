use glam::Vec2;
use neural_core::{Glow, Rgba, Surface};
use std::f64::consts::TAU;
use web_sys as web;

/// [`Surface`] backed by a 2D canvas context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, at: Vec2, font_px: f32, color: Rgba, glow: Option<Glow>) {
        self.ctx.save();
        self.ctx.set_font(&format!("{}px monospace", font_px));
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        if let Some(g) = glow {
            self.ctx.set_shadow_color(&g.color.to_css());
            self.ctx.set_shadow_blur(g.blur as f64);
        }
        _ = self.ctx.fill_text(text, at.x as f64, at.y as f64);
        self.ctx.restore();
    }
}
