// Recording surface shared by the host-side tests.

#![allow(dead_code)]
use glam::Vec2;
use neural_core::{Glow, Rgba, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Clear(f32, f32),
    Circle(Vec2, f32, Rgba),
    Line(Vec2, Vec2, Rgba),
    Text(String, Vec2, Rgba, bool),
}

#[derive(Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
}

impl Recorder {
    pub fn lines(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Line(..)))
            .count()
    }

    pub fn texts(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Text(..)))
            .count()
    }

    pub fn all_finite(&self) -> bool {
        self.calls.iter().all(|c| match c {
            Call::Clear(w, h) => w.is_finite() && h.is_finite(),
            Call::Circle(p, r, col) => p.is_finite() && r.is_finite() && col.a.is_finite(),
            Call::Line(a, b, col) => a.is_finite() && b.is_finite() && col.a.is_finite(),
            Call::Text(_, p, col, _) => p.is_finite() && col.a.is_finite(),
        })
    }
}

impl Surface for Recorder {
    fn clear(&mut self, width: f32, height: f32) {
        self.calls.push(Call::Clear(width, height));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.calls.push(Call::Circle(center, radius, color));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, _width: f32, color: Rgba) {
        self.calls.push(Call::Line(from, to, color));
    }

    fn fill_text(&mut self, text: &str, at: Vec2, _font_px: f32, color: Rgba, glow: Option<Glow>) {
        self.calls
            .push(Call::Text(text.to_string(), at, color, glow.is_some()));
    }
}
