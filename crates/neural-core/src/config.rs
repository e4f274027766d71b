//! Construction-time configuration and capability profiles.

use crate::constants::*;
use crate::pulse::LayerParams;
use thiserror::Error;

/// Per-frame motion constants. These are tuned by eye, not derived from a
/// physical model; everything is applied once per executed frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct Physics {
    pub spring_factor: f32,
    pub drift_speed: f32,
    pub repulsion_strength: f32,
    pub pointer_radius: f32,
    pub label_scatter_factor: f32,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            spring_factor: SPRING_FACTOR,
            drift_speed: DRIFT_SPEED,
            repulsion_strength: REPULSION_STRENGTH,
            pointer_radius: POINTER_RADIUS,
            label_scatter_factor: LABEL_SCATTER_FACTOR,
        }
    }
}

/// Options for one animation instance. Every field has a default, so a JS
/// options object may supply any subset of them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct NetworkConfig {
    pub show_labels: bool,
    pub node_density: f32,
    pub max_nodes: usize,
    pub min_nodes: usize,
    pub label_count: usize,
    pub max_connection_distance: f32,
    pub physics: Physics,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            show_labels: true,
            node_density: 0.00015,
            max_nodes: 300,
            min_nodes: 40,
            label_count: 12,
            max_connection_distance: MAX_CONNECTION_DISTANCE,
            physics: Physics::default(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("node density must be finite and non-negative, got {0}")]
    InvalidDensity(f32),
    #[error("min_nodes ({min}) exceeds max_nodes ({max})")]
    NodeBounds { min: usize, max: usize },
    #[error("{field} ({value}) exceeds the hard limit of {limit}")]
    OverLimit {
        field: &'static str,
        value: usize,
        limit: usize,
    },
    #[error("max connection distance must be finite and positive, got {0}")]
    InvalidDistance(f32),
    #[error("physics constant `{name}` is out of range: {value}")]
    InvalidPhysics { name: &'static str, value: f32 },
}

impl NetworkConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.node_density.is_finite() || self.node_density < 0.0 {
            return Err(ConfigError::InvalidDensity(self.node_density));
        }
        if self.min_nodes > self.max_nodes {
            return Err(ConfigError::NodeBounds {
                min: self.min_nodes,
                max: self.max_nodes,
            });
        }
        for (field, value, limit) in [
            ("max_nodes", self.max_nodes, MAX_NODES_LIMIT),
            ("label_count", self.label_count, MAX_LABELS_LIMIT),
        ] {
            if value > limit {
                return Err(ConfigError::OverLimit { field, value, limit });
            }
        }
        let d = self.max_connection_distance;
        if !d.is_finite() || d <= 0.0 {
            return Err(ConfigError::InvalidDistance(d));
        }
        self.physics.validate()
    }

    /// Apply the profile's overrides. The reduced profile wins over whatever
    /// the caller supplied for counts, density and distance.
    pub fn with_profile(mut self, profile: Profile) -> Self {
        if profile == Profile::Reduced {
            self.node_density = 0.00008;
            self.max_nodes = 60;
            self.min_nodes = 20;
            self.label_count = 4;
            self.max_connection_distance = REDUCED_CONNECTION_DISTANCE;
        }
        self
    }
}

impl Physics {
    fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("spring_factor", self.spring_factor, (0.0..=1.0).contains(&self.spring_factor)),
            ("drift_speed", self.drift_speed, self.drift_speed >= 0.0),
            ("repulsion_strength", self.repulsion_strength, self.repulsion_strength >= 0.0),
            ("pointer_radius", self.pointer_radius, self.pointer_radius >= 0.0),
            (
                "label_scatter_factor",
                self.label_scatter_factor,
                self.label_scatter_factor >= 0.0,
            ),
        ];
        for (name, value, ok) in checks {
            if !value.is_finite() || !ok {
                return Err(ConfigError::InvalidPhysics { name, value });
            }
        }
        Ok(())
    }
}

/// Capability profile picked by the host from viewport width and touch
/// support.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Profile {
    #[default]
    Full,
    Reduced,
}

impl Profile {
    pub fn detect(viewport_width: f64, has_touch: bool) -> Self {
        if viewport_width < NARROW_VIEWPORT_PX || has_touch {
            Profile::Reduced
        } else {
            Profile::Full
        }
    }
}

/// Everything the profile decides that is not part of [`NetworkConfig`].
#[derive(Clone, Debug)]
pub struct Tuning {
    pub frame_interval_ms: f64,
    pub glow: bool,
    pub foreground: LayerParams,
    pub background: Option<LayerParams>,
}

impl Tuning {
    pub fn for_profile(profile: Profile) -> Self {
        match profile {
            Profile::Full => Self {
                frame_interval_ms: FRAME_INTERVAL_MS,
                glow: true,
                foreground: LayerParams::foreground(profile),
                background: Some(LayerParams::background()),
            },
            Profile::Reduced => Self {
                frame_interval_ms: REDUCED_FRAME_INTERVAL_MS,
                glow: false,
                foreground: LayerParams::foreground(profile),
                background: None,
            },
        }
    }
}
