//! Proximity graph over the node pool with a persistent per-edge state.
//!
//! Candidate edges are recomputed from node positions every frame. The state
//! map only grows while the node pool lives: an edge stays tracked after its
//! endpoints drift apart, it just stops being a candidate.

use crate::constants::*;
use crate::node::Node;
use crate::surface::Surface;
use fnv::FnvHashMap;
use rand::Rng;
use smallvec::SmallVec;

/// Unordered pair of node indices, stored lower index first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    low: usize,
    high: usize,
}

impl EdgeKey {
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    #[inline]
    pub fn low(&self) -> usize {
        self.low
    }

    #[inline]
    pub fn high(&self) -> usize {
        self.high
    }

    /// The endpoint opposite `node`, if `node` is an endpoint.
    #[inline]
    pub fn other(&self, node: usize) -> Option<usize> {
        if node == self.low {
            Some(self.high)
        } else if node == self.high {
            Some(self.low)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgeState {
    Active,
    Released { at_ms: f64, reconnect_delay_ms: f64 },
}

impl EdgeState {
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, EdgeState::Active)
    }
}

/// A pair within the connection distance this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub key: EdgeKey,
    pub distance: f32,
}

pub type Neighbors = SmallVec<[usize; 16]>;

#[derive(Debug)]
pub struct ConnectionGraph {
    max_distance: f32,
    states: FnvHashMap<EdgeKey, EdgeState>,
    candidates: Vec<Candidate>,
    last_cycle_ms: f64,
}

impl ConnectionGraph {
    pub fn new(max_distance: f32) -> Self {
        Self {
            max_distance,
            states: FnvHashMap::default(),
            candidates: Vec::new(),
            last_cycle_ms: 0.0,
        }
    }

    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }

    /// Number of tracked edges.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, a: usize, b: usize) -> Option<EdgeState> {
        self.states.get(&EdgeKey::new(a, b)).copied()
    }

    pub fn is_active(&self, a: usize, b: usize) -> bool {
        self.state(a, b).is_some_and(|s| s.is_active())
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Forget every edge, e.g. when the node pool is regenerated.
    pub fn clear(&mut self) {
        self.states.clear();
        self.candidates.clear();
    }

    /// Recompute this frame's candidate pairs and start tracking new ones.
    pub fn observe(&mut self, nodes: &[Node]) {
        self.candidates.clear();
        let max = self.max_distance;
        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                let distance = nodes[i].pos.distance(nodes[j].pos);
                if distance < max {
                    let key = EdgeKey::new(i, j);
                    self.states.entry(key).or_insert(EdgeState::Active);
                    self.candidates.push(Candidate { key, distance });
                }
            }
        }
    }

    /// Run the release/reconnect state machine for time `now_ms`.
    pub fn update_states<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) {
        if now_ms - self.last_cycle_ms > EDGE_CYCLE_MS {
            self.last_cycle_ms = now_ms;
            for state in self.states.values_mut() {
                if state.is_active() && rng.gen_bool(EDGE_RELEASE_CHANCE) {
                    *state = EdgeState::Released {
                        at_ms: now_ms,
                        reconnect_delay_ms: rng.gen_range(EDGE_RECONNECT_MIN_MS..EDGE_RECONNECT_MAX_MS),
                    };
                }
            }
        }

        for state in self.states.values_mut() {
            if let EdgeState::Released {
                at_ms,
                reconnect_delay_ms,
            } = *state
            {
                if now_ms - at_ms > reconnect_delay_ms {
                    *state = EdgeState::Active;
                }
            }
        }
    }

    /// Candidates whose edge is currently active.
    pub fn active_candidates(&self) -> impl Iterator<Item = &Candidate> + '_ {
        self.candidates.iter().filter(|c| {
            self.states
                .get(&c.key)
                .is_some_and(|s| s.is_active())
        })
    }

    /// Nodes joined to `node` by an active candidate edge, minus `exclude`.
    pub fn active_neighbors(&self, node: usize, exclude: usize) -> Neighbors {
        self.active_candidates()
            .filter_map(|c| c.key.other(node))
            .filter(|&n| n != exclude && n != node)
            .collect()
    }

    /// Stroke alpha for a candidate, or `None` once a released edge has faded.
    pub fn edge_alpha(&self, candidate: &Candidate, now_ms: f64) -> Option<f32> {
        let closeness = 1.0 - candidate.distance / self.max_distance;
        let base = closeness * EDGE_ALPHA_SCALE;
        match self.states.get(&candidate.key)? {
            EdgeState::Active => {
                let phase = now_ms * EDGE_BREATH_RATE
                    + candidate.key.low() as f64 * EDGE_BREATH_INDEX_PHASE;
                let breath = phase.sin() as f32 * EDGE_BREATH_AMPLITUDE;
                Some((base + breath).max(EDGE_ALPHA_FLOOR))
            }
            EdgeState::Released { at_ms, .. } => {
                let fade = ((now_ms - at_ms) / EDGE_FADE_MS).clamp(0.0, 1.0) as f32;
                (fade < 1.0).then(|| base * (1.0 - fade))
            }
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, nodes: &[Node], now_ms: f64) {
        for c in &self.candidates {
            let (Some(a), Some(b)) = (nodes.get(c.key.low()), nodes.get(c.key.high())) else {
                continue;
            };
            if let Some(alpha) = self.edge_alpha(c, now_ms) {
                surface.stroke_line(a.pos, b.pos, EDGE_LINE_WIDTH, ACCENT.with_alpha(alpha));
            }
        }
    }
}
