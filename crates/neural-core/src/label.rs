//! Floating AI-term labels that drift over the network.
//!
//! Labels live in a fixed-size pool. A label that finishes fading out is
//! regenerated in place: same slot, new text and attributes, `generation`
//! bumped by one.

use crate::config::Physics;
use crate::constants::*;
use crate::geom::{self, Pointer};
use crate::surface::{Glow, Surface};
use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

pub const VOCABULARY: &[&str] = &[
    "CRISP", "COSTAR", "ReAct", "CRISPE", "Chain-of-Thought", "Few-Shot",
    "Zero-Shot", "Role Play", "System Prompt", "Meta Prompt",
    "Prompt", "Context", "Token", "Completion", "Temperature", "Top-P",
    "Hallucination", "Grounding", "Retrieval", "RAG", "Fine-tune",
    "LLM", "GPT", "Claude", "Gemini", "Neural", "Transformer",
    "Attention", "BERT", "Diffusion", "Multimodal", "Vision",
    "Embedding", "Vector", "Semantic", "Inference", "Latent",
    "Generate", "Train", "Evaluate", "Iterate", "Optimize",
    "Agent", "Memory", "Chain", "Tool Use", "Function Call",
    "Alignment", "Safety", "Bias", "Fairness", "RLHF",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelPhase {
    FadeIn,
    Visible,
    FadeOut,
}

#[derive(Clone, Debug)]
pub struct Label {
    pub text: &'static str,
    pub pos: Vec2,
    pub vel: Vec2,
    pub font_px: f32,
    pub brightness: f32,
    pub target_brightness: f32,
    pub fade_speed: f32,
    pub phase: LabelPhase,
    pub born_ms: f64,
    pub lifetime_ms: f64,
    pub generation: u32,
}

impl Label {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2, now_ms: f64, physics: &Physics) -> Self {
        Self {
            text: VOCABULARY.choose(rng).copied().unwrap_or("Prompt"),
            pos: geom::random_point(rng, bounds),
            vel: geom::drift_velocity(rng, physics.drift_speed),
            font_px: LABEL_FONT_MIN + rng.gen::<f32>() * LABEL_FONT_SPAN,
            brightness: 0.0,
            target_brightness: LABEL_TARGET_MIN + rng.gen::<f32>() * LABEL_TARGET_SPAN,
            fade_speed: LABEL_FADE_MIN + rng.gen::<f32>() * LABEL_FADE_SPAN,
            phase: LabelPhase::FadeIn,
            lifetime_ms: LABEL_LIFETIME_MIN_MS + rng.gen::<f64>() * LABEL_LIFETIME_SPAN_MS,
            born_ms: now_ms - rng.gen::<f64>() * LABEL_BIRTH_JITTER_MS,
            generation: 0,
        }
    }

    /// Overwrite this slot with a freshly generated label.
    pub fn recycle<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Vec2, now_ms: f64, physics: &Physics) {
        let generation = self.generation.wrapping_add(1);
        *self = Self::spawn(rng, bounds, now_ms, physics);
        self.generation = generation;
    }

    pub fn update<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        pointer: Option<&Pointer>,
        bounds: Vec2,
        now_ms: f64,
        physics: &Physics,
    ) {
        self.pos += self.vel;

        if let Some(p) = pointer {
            let radius = p.radius * physics.label_scatter_factor;
            self.pos += geom::repel(self.pos, p.pos, radius, physics.repulsion_strength);
        }

        self.wrap(bounds);

        match self.phase {
            LabelPhase::FadeIn => {
                self.brightness += self.fade_speed;
                if self.brightness >= self.target_brightness {
                    self.brightness = self.target_brightness;
                    self.phase = LabelPhase::Visible;
                }
            }
            LabelPhase::Visible => {
                if now_ms - self.born_ms > self.lifetime_ms {
                    self.phase = LabelPhase::FadeOut;
                }
            }
            LabelPhase::FadeOut => {
                self.brightness -= self.fade_speed * LABEL_FADE_OUT_RATIO;
                if self.brightness <= 0.0 {
                    self.recycle(rng, bounds, now_ms, physics);
                }
            }
        }
        self.brightness = self.brightness.clamp(0.0, self.target_brightness);
    }

    fn wrap(&mut self, bounds: Vec2) {
        if self.pos.x < -LABEL_WRAP_MARGIN_X {
            self.pos.x = bounds.x + LABEL_WRAP_MARGIN_X;
        } else if self.pos.x > bounds.x + LABEL_WRAP_MARGIN_X {
            self.pos.x = -LABEL_WRAP_MARGIN_X;
        }
        if self.pos.y < -LABEL_WRAP_MARGIN_Y {
            self.pos.y = bounds.y + LABEL_WRAP_MARGIN_Y;
        } else if self.pos.y > bounds.y + LABEL_WRAP_MARGIN_Y {
            self.pos.y = -LABEL_WRAP_MARGIN_Y;
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, glow: bool) {
        if self.brightness <= 0.0 {
            return;
        }
        let glow = glow.then(|| Glow {
            color: ACCENT.with_alpha(self.brightness * LABEL_GLOW_ALPHA),
            blur: LABEL_GLOW_BLUR,
        });
        surface.fill_text(
            self.text,
            self.pos,
            self.font_px,
            ACCENT.with_alpha(self.brightness),
            glow,
        );
    }
}
