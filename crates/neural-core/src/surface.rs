//! Drawing seam between the simulation and whatever paints it.
//!
//! The core never talks to a browser directly. The web frontend implements
//! [`Surface`] over a `CanvasRenderingContext2d`; tests implement it with a
//! recorder.

use glam::Vec2;

/// 8-bit colour with a floating point alpha, matching CSS `rgba()`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS colour string, e.g. `rgba(230, 57, 70, 0.5)`.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Soft shadow drawn behind text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub color: Rgba,
    pub blur: f32,
}

pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
    /// Centred, monospace text.
    fn fill_text(&mut self, text: &str, at: Vec2, font_px: f32, color: Rgba, glow: Option<Glow>);
}
