//! The per-canvas animation instance: owns every pool, timer and the RNG.

use crate::config::{ConfigError, NetworkConfig, Profile, Tuning};
use crate::geom::Pointer;
use crate::graph::ConnectionGraph;
use crate::label::Label;
use crate::node::{self, Node};
use crate::pulse::PulseLayer;
use crate::surface::Surface;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    Running,
    Destroyed,
}

/// Result of one [`NeuralNetwork::tick`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
    /// Arrived before the minimum frame interval; nothing was touched.
    Throttled,
    Rendered,
    /// The instance is destroyed; the caller must not reschedule.
    Halted,
}

impl Frame {
    #[inline]
    pub fn reschedule(self) -> bool {
        !matches!(self, Frame::Halted)
    }
}

pub struct NeuralNetwork {
    config: NetworkConfig,
    profile: Profile,
    tuning: Tuning,
    bounds: Vec2,
    nodes: Vec<Node>,
    labels: Vec<Label>,
    graph: ConnectionGraph,
    foreground: PulseLayer,
    background: Option<PulseLayer>,
    pointer: Option<Vec2>,
    rng: StdRng,
    last_frame_ms: Option<f64>,
    lifecycle: Lifecycle,
}

impl NeuralNetwork {
    /// Build an empty instance; [`resize`](Self::resize) populates it.
    pub fn new(config: NetworkConfig, profile: Profile, seed: u64) -> Result<Self, ConfigError> {
        let config = config.with_profile(profile);
        config.validate()?;
        let tuning = Tuning::for_profile(profile);
        Ok(Self {
            graph: ConnectionGraph::new(config.max_connection_distance),
            foreground: PulseLayer::new(tuning.foreground.clone()),
            background: tuning.background.clone().map(PulseLayer::new),
            config,
            profile,
            tuning,
            bounds: Vec2::ZERO,
            nodes: Vec::new(),
            labels: Vec::new(),
            pointer: None,
            rng: StdRng::seed_from_u64(seed),
            last_frame_ms: None,
            lifecycle: Lifecycle::Created,
        })
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn graph(&self) -> &ConnectionGraph {
        &self.graph
    }

    pub fn foreground(&self) -> &PulseLayer {
        &self.foreground
    }

    pub fn background(&self) -> Option<&PulseLayer> {
        self.background.as_ref()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_alive(&self) -> bool {
        self.lifecycle != Lifecycle::Destroyed
    }

    fn pointer_state(&self) -> Option<Pointer> {
        self.pointer.map(|pos| Pointer {
            pos,
            radius: self.config.physics.pointer_radius,
        })
    }

    /// Pointer position in canvas pixels, `None` when it left the surface.
    pub fn set_pointer(&mut self, pos: Option<Vec2>) {
        if !self.is_alive() {
            return;
        }
        self.pointer = pos.filter(|p| p.is_finite());
    }

    /// Regenerate nodes and labels for a new surface size and drop all pulses
    /// and edge state.
    pub fn resize(&mut self, width: f32, height: f32, now_ms: f64) {
        if !self.is_alive() {
            return;
        }
        let bounds = if node::has_area(width, height) {
            Vec2::new(width, height)
        } else {
            Vec2::ZERO
        };
        self.bounds = bounds;
        self.nodes = node::spawn_nodes(&mut self.rng, bounds, &self.config);
        self.graph.clear();
        self.foreground.clear();
        if let Some(bg) = &mut self.background {
            bg.clear();
        }

        let label_count = if self.config.show_labels && bounds != Vec2::ZERO {
            self.config.label_count
        } else {
            0
        };
        let physics = &self.config.physics;
        let rng = &mut self.rng;
        self.labels = (0..label_count)
            .map(|_| Label::spawn(rng, bounds, now_ms, physics))
            .collect();

        log::debug!(
            "[network] resized to {}x{}: nodes={} labels={}",
            width,
            height,
            self.nodes.len(),
            self.labels.len()
        );
    }

    /// Mark the instance as scheduled.
    pub fn start(&mut self) {
        if self.lifecycle == Lifecycle::Created {
            self.lifecycle = Lifecycle::Running;
        }
    }

    /// Run one frame at host timestamp `now_ms`.
    pub fn tick<S: Surface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> Frame {
        match self.lifecycle {
            Lifecycle::Destroyed => return Frame::Halted,
            Lifecycle::Created => self.lifecycle = Lifecycle::Running,
            Lifecycle::Running => {}
        }

        if let Some(last) = self.last_frame_ms {
            if now_ms - last < self.tuning.frame_interval_ms {
                return Frame::Throttled;
            }
        }
        self.last_frame_ms = Some(now_ms);

        surface.clear(self.bounds.x, self.bounds.y);

        self.graph.observe(&self.nodes);
        self.graph.update_states(now_ms, &mut self.rng);

        if let Some(bg) = &mut self.background {
            bg.try_spawn(now_ms, &self.graph, &mut self.rng);
            bg.advance(&self.graph, &mut self.rng);
            bg.draw(surface, &self.nodes);
        }

        self.graph.draw(surface, &self.nodes, now_ms);

        self.foreground.try_spawn(now_ms, &self.graph, &mut self.rng);
        self.foreground.advance(&self.graph, &mut self.rng);
        self.foreground.draw(surface, &self.nodes);

        let pointer = self.pointer_state();
        let physics = &self.config.physics;
        for node in &mut self.nodes {
            node.update(pointer.as_ref(), self.bounds, physics);
            node.draw(surface);
        }

        if self.config.show_labels {
            for label in &mut self.labels {
                label.update(&mut self.rng, pointer.as_ref(), self.bounds, now_ms, physics);
                label.draw(surface, self.tuning.glow);
            }
        }

        Frame::Rendered
    }

    /// Terminal. Every later call is a no-op.
    pub fn destroy(&mut self) {
        if self.lifecycle == Lifecycle::Destroyed {
            return;
        }
        self.lifecycle = Lifecycle::Destroyed;
        self.pointer = None;
        log::info!(
            "[network] destroyed ({} nodes, {} tracked edges)",
            self.nodes.len(),
            self.graph.len()
        );
    }
}
