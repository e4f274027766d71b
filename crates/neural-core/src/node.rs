use crate::config::{NetworkConfig, Physics};
use crate::constants::*;
use crate::geom::{self, Pointer};
use crate::surface::Surface;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub pos: Vec2,
    pub anchor: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub brightness: f32,
}

/// Number of nodes for a surface: `clamp(round(w*h*density), min, max)`.
/// Surfaces without a positive, finite area get no nodes at all.
pub fn node_count(width: f32, height: f32, config: &NetworkConfig) -> usize {
    if !has_area(width, height) {
        return 0;
    }
    let raw = (width as f64 * height as f64 * config.node_density as f64).round();
    let raw = if raw.is_finite() && raw > 0.0 {
        raw as usize
    } else {
        0
    };
    raw.max(config.min_nodes).min(config.max_nodes)
}

#[inline]
pub(crate) fn has_area(width: f32, height: f32) -> bool {
    width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
}

impl Node {
    /// A stationary node anchored where it stands.
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            anchor: pos,
            vel: Vec2::ZERO,
            radius: NODE_RADIUS_MIN,
            brightness: NODE_BRIGHTNESS_MIN,
        }
    }

    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2, physics: &Physics) -> Self {
        let pos = geom::random_point(rng, bounds);
        Self {
            pos,
            anchor: pos,
            vel: geom::drift_velocity(rng, physics.drift_speed),
            radius: NODE_RADIUS_MIN + rng.gen::<f32>() * NODE_RADIUS_SPAN,
            brightness: NODE_BRIGHTNESS_MIN + rng.gen::<f32>() * NODE_BRIGHTNESS_SPAN,
        }
    }

    pub fn update(&mut self, pointer: Option<&Pointer>, bounds: Vec2, physics: &Physics) {
        if let Some(p) = pointer {
            self.pos += geom::repel(self.pos, p.pos, p.radius, physics.repulsion_strength);
        }

        self.pos += (self.anchor - self.pos) * physics.spring_factor;

        self.anchor += self.vel;
        // Once past a bound, velocity points back inside.
        if self.anchor.x < 0.0 {
            self.vel.x = self.vel.x.abs();
        } else if self.anchor.x > bounds.x {
            self.vel.x = -self.vel.x.abs();
        }
        if self.anchor.y < 0.0 {
            self.vel.y = self.vel.y.abs();
        } else if self.anchor.y > bounds.y {
            self.vel.y = -self.vel.y.abs();
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(self.pos, self.radius, ACCENT.with_alpha(self.brightness));
    }
}

/// Fresh node pool for a surface of `bounds`.
pub fn spawn_nodes<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: Vec2,
    config: &NetworkConfig,
) -> Vec<Node> {
    let count = node_count(bounds.x, bounds.y, config);
    (0..count)
        .map(|_| Node::spawn(rng, bounds, &config.physics))
        .collect()
}
