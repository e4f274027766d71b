//! Markers travelling along active edges, chaining onward on arrival.
//!
//! Two independent layers use the same machinery: a bright foreground layer
//! and a dim, randomised background layer that reads as depth.

use crate::config::Profile;
use crate::constants::*;
use crate::graph::ConnectionGraph;
use crate::node::Node;
use crate::surface::{Rgba, Surface};
use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;

/// Closed-open sampling range; `lo == hi` is a fixed value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub lo: f32,
    pub hi: f32,
}

impl Span {
    pub const fn fixed(v: f32) -> Self {
        Self { lo: v, hi: v }
    }

    pub const fn new((lo, hi): (f32, f32)) -> Self {
        Self { lo, hi }
    }

    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.hi > self.lo {
            rng.gen_range(self.lo..self.hi)
        } else {
            self.lo
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayerParams {
    pub spawn_interval_ms: f64,
    pub max_pulses: usize,
    pub chain_chance: f64,
    pub speed: Span,
    pub size: Span,
    pub opacity: Span,
    pub trail: Span,
    pub trail_steps: usize,
    pub trail_alpha_scale: f32,
    pub trail_radius_scale: f32,
    pub core_color: Rgba,
    pub trail_color: Rgba,
    /// Soft disc of `size * PULSE_HALO_SCALE` behind the core.
    pub halo: Option<Rgba>,
    /// Trail alpha is multiplied by the pulse's own opacity.
    pub trail_uses_opacity: bool,
}

impl LayerParams {
    pub fn foreground(profile: Profile) -> Self {
        let reduced = profile == Profile::Reduced;
        Self {
            spawn_interval_ms: if reduced { REDUCED_PULSE_SPAWN_MS } else { PULSE_SPAWN_MS },
            max_pulses: if reduced { REDUCED_MAX_PULSES } else { MAX_PULSES },
            chain_chance: if reduced {
                REDUCED_PULSE_CHAIN_CHANCE
            } else {
                PULSE_CHAIN_CHANCE
            },
            speed: Span::fixed(PULSE_SPEED),
            size: Span::fixed(PULSE_SIZE),
            opacity: Span::fixed(PULSE_CORE_ALPHA),
            trail: Span::fixed(PULSE_TRAIL),
            trail_steps: if reduced {
                REDUCED_PULSE_TRAIL_STEPS
            } else {
                PULSE_TRAIL_STEPS
            },
            trail_alpha_scale: FG_TRAIL_ALPHA_SCALE,
            trail_radius_scale: FG_TRAIL_RADIUS_SCALE,
            core_color: PULSE_CORE,
            trail_color: PULSE_CORE,
            halo: (!reduced).then(|| ACCENT.with_alpha(PULSE_HALO_ALPHA)),
            trail_uses_opacity: false,
        }
    }

    pub fn background() -> Self {
        Self {
            spawn_interval_ms: BG_PULSE_SPAWN_MS,
            max_pulses: MAX_BG_PULSES,
            chain_chance: BG_PULSE_CHAIN_CHANCE,
            speed: Span::new(BG_PULSE_SPEED),
            size: Span::new(BG_PULSE_SIZE),
            opacity: Span::new(BG_PULSE_OPACITY),
            trail: Span::new(BG_PULSE_TRAIL_LEN),
            trail_steps: BG_PULSE_TRAIL_STEPS,
            trail_alpha_scale: BG_TRAIL_ALPHA_SCALE,
            trail_radius_scale: BG_TRAIL_RADIUS_SCALE,
            core_color: BG_PULSE_CORE,
            trail_color: BG_PULSE_TRAIL,
            halo: None,
            trail_uses_opacity: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Pulse {
    pub from: usize,
    pub to: usize,
    pub progress: f32,
    pub speed: f32,
    pub size: f32,
    pub trail: f32,
    pub opacity: f32,
}

/// What happened to the pulses that arrived during one [`PulseLayer::advance`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Arrivals {
    pub chained: usize,
    pub removed: usize,
}

#[derive(Debug)]
pub struct PulseLayer {
    params: LayerParams,
    pulses: Vec<Pulse>,
    last_spawn_ms: Option<f64>,
}

impl PulseLayer {
    pub fn new(params: LayerParams) -> Self {
        let cap = params.max_pulses;
        Self {
            params,
            pulses: Vec::with_capacity(cap),
            last_spawn_ms: None,
        }
    }

    pub fn params(&self) -> &LayerParams {
        &self.params
    }

    pub fn pulses(&self) -> &[Pulse] {
        &self.pulses
    }

    pub fn len(&self) -> usize {
        self.pulses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pulses.is_empty()
    }

    pub fn clear(&mut self) {
        self.pulses.clear();
    }

    /// Insert a pulse directly, bypassing the spawn interval. Refused at the cap.
    pub fn push(&mut self, pulse: Pulse) -> bool {
        if self.pulses.len() >= self.params.max_pulses {
            return false;
        }
        self.pulses.push(pulse);
        true
    }

    fn make_pulse<R: Rng + ?Sized>(&self, rng: &mut R, from: usize, to: usize) -> Pulse {
        Pulse {
            from,
            to,
            progress: 0.0,
            speed: self.params.speed.sample(rng),
            size: self.params.size.sample(rng),
            trail: self.params.trail.sample(rng),
            opacity: self.params.opacity.sample(rng),
        }
    }

    /// Start a pulse on a random active edge, at most once per spawn interval
    /// and only below the cap. Returns whether a pulse was spawned.
    pub fn try_spawn<R: Rng + ?Sized>(
        &mut self,
        now_ms: f64,
        graph: &ConnectionGraph,
        rng: &mut R,
    ) -> bool {
        if let Some(last) = self.last_spawn_ms {
            if now_ms - last < self.params.spawn_interval_ms {
                return false;
            }
        }
        if self.pulses.len() >= self.params.max_pulses {
            return false;
        }
        let Some(edge) = graph.active_candidates().choose(rng).map(|c| c.key) else {
            return false;
        };
        let (from, to) = if rng.gen_bool(0.5) {
            (edge.high(), edge.low())
        } else {
            (edge.low(), edge.high())
        };
        let pulse = self.make_pulse(rng, from, to);
        self.pulses.push(pulse);
        self.last_spawn_ms = Some(now_ms);
        true
    }

    /// Move every pulse forward. Arrived pulses are replaced in place by one
    /// successor when the chain roll succeeds and the arrival node has an
    /// eligible neighbour; otherwise they are removed.
    pub fn advance<R: Rng + ?Sized>(&mut self, graph: &ConnectionGraph, rng: &mut R) -> Arrivals {
        let mut arrivals = Arrivals::default();
        for i in 0..self.pulses.len() {
            let pulse = &mut self.pulses[i];
            pulse.progress += pulse.speed;
            if pulse.progress < 1.0 {
                continue;
            }
            let (from, to) = (pulse.from, pulse.to);
            let next = if rng.gen_bool(self.params.chain_chance) {
                graph.active_neighbors(to, from).choose(rng).copied()
            } else {
                None
            };
            match next {
                Some(n) => {
                    log::trace!("[pulse] chain {} -> {} -> {}", from, to, n);
                    self.pulses[i] = self.make_pulse(rng, to, n);
                    arrivals.chained += 1;
                }
                None => arrivals.removed += 1,
            }
        }
        if arrivals.removed > 0 {
            self.pulses.retain(|p| p.progress < 1.0);
        }
        arrivals
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, nodes: &[Node]) {
        let p = &self.params;
        for pulse in &self.pulses {
            let (Some(a), Some(b)) = (nodes.get(pulse.from), nodes.get(pulse.to)) else {
                continue;
            };
            let at = |t: f32| a.pos.lerp(b.pos, t);

            let steps = p.trail_steps.max(1);
            let trail_alpha = if p.trail_uses_opacity {
                p.trail_alpha_scale * pulse.opacity
            } else {
                p.trail_alpha_scale
            };
            for t in (0..=p.trail_steps).rev() {
                let frac = t as f32 / steps as f32;
                let tp = pulse.progress - pulse.trail * frac;
                if tp < 0.0 {
                    continue;
                }
                surface.fill_circle(
                    at(tp),
                    pulse.size * p.trail_radius_scale,
                    p.trail_color.with_alpha((1.0 - frac) * trail_alpha),
                );
            }

            let pos = at(pulse.progress);
            surface.fill_circle(pos, pulse.size, p.core_color.with_alpha(pulse.opacity));
            if let Some(halo) = p.halo {
                surface.fill_circle(pos, pulse.size * PULSE_HALO_SCALE, halo);
            }
        }
    }
}
