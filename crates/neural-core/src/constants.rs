use crate::surface::Rgba;

// Shared visual tuning constants for the network animation.

// Palette
pub const ACCENT: Rgba = Rgba::rgb(230, 57, 70); // nodes, connections, labels, halo
pub const PULSE_CORE: Rgba = Rgba::rgb(255, 255, 255);
pub const BG_PULSE_CORE: Rgba = Rgba::rgb(200, 60, 70);
pub const BG_PULSE_TRAIL: Rgba = Rgba::rgb(180, 50, 60);

// Node spawning
pub const NODE_RADIUS_MIN: f32 = 0.5;
pub const NODE_RADIUS_SPAN: f32 = 1.5;
pub const NODE_BRIGHTNESS_MIN: f32 = 0.2;
pub const NODE_BRIGHTNESS_SPAN: f32 = 0.3;
pub const MAX_NODES_LIMIT: usize = 1000; // pair scan is quadratic in node count
pub const MAX_LABELS_LIMIT: usize = 64;

// Motion (per frame, not time-scaled)
pub const SPRING_FACTOR: f32 = 0.03; // pull of position toward anchor
pub const DRIFT_SPEED: f32 = 0.2; // full width of the random velocity range
pub const REPULSION_STRENGTH: f32 = 2.0; // displacement at zero distance
pub const POINTER_RADIUS: f32 = 100.0;
pub const LABEL_SCATTER_FACTOR: f32 = 0.8; // labels react inside 0.8 * pointer radius

// Connection graph
pub const MAX_CONNECTION_DISTANCE: f32 = 150.0;
pub const REDUCED_CONNECTION_DISTANCE: f32 = 100.0;
pub const EDGE_CYCLE_MS: f64 = 2000.0;
pub const EDGE_RELEASE_CHANCE: f64 = 0.08;
pub const EDGE_RECONNECT_MIN_MS: f64 = 1000.0;
pub const EDGE_RECONNECT_MAX_MS: f64 = 4000.0;
pub const EDGE_FADE_MS: f64 = 500.0;
pub const EDGE_ALPHA_SCALE: f32 = 0.5;
pub const EDGE_ALPHA_FLOOR: f32 = 0.1;
pub const EDGE_BREATH_AMPLITUDE: f32 = 0.1;
pub const EDGE_BREATH_RATE: f64 = 0.002; // radians per ms
pub const EDGE_BREATH_INDEX_PHASE: f64 = 0.1;
pub const EDGE_LINE_WIDTH: f32 = 1.0;

// Labels
pub const LABEL_FONT_MIN: f32 = 10.0;
pub const LABEL_FONT_SPAN: f32 = 8.0;
pub const LABEL_TARGET_MIN: f32 = 0.15;
pub const LABEL_TARGET_SPAN: f32 = 0.35;
pub const LABEL_FADE_MIN: f32 = 0.003;
pub const LABEL_FADE_SPAN: f32 = 0.006;
pub const LABEL_FADE_OUT_RATIO: f32 = 0.8; // fade-out runs slower than fade-in
pub const LABEL_LIFETIME_MIN_MS: f64 = 5000.0;
pub const LABEL_LIFETIME_SPAN_MS: f64 = 8000.0;
pub const LABEL_BIRTH_JITTER_MS: f64 = 5000.0;
pub const LABEL_WRAP_MARGIN_X: f32 = 100.0;
pub const LABEL_WRAP_MARGIN_Y: f32 = 50.0;
pub const LABEL_GLOW_BLUR: f32 = 8.0;
pub const LABEL_GLOW_ALPHA: f32 = 0.6;

// Foreground pulses
pub const PULSE_SPAWN_MS: f64 = 800.0;
pub const REDUCED_PULSE_SPAWN_MS: f64 = 1500.0;
pub const MAX_PULSES: usize = 15;
pub const REDUCED_MAX_PULSES: usize = 5;
pub const PULSE_SPEED: f32 = 0.015;
pub const PULSE_SIZE: f32 = 1.5;
pub const PULSE_TRAIL: f32 = 0.12;
pub const PULSE_CORE_ALPHA: f32 = 0.95;
pub const PULSE_CHAIN_CHANCE: f64 = 0.4;
pub const REDUCED_PULSE_CHAIN_CHANCE: f64 = 0.2;
pub const PULSE_TRAIL_STEPS: usize = 4;
pub const REDUCED_PULSE_TRAIL_STEPS: usize = 2;
pub const PULSE_HALO_SCALE: f32 = 2.0;
pub const PULSE_HALO_ALPHA: f32 = 0.25;

// Background pulses
pub const BG_PULSE_SPAWN_MS: f64 = 300.0;
pub const MAX_BG_PULSES: usize = 30;
pub const BG_PULSE_CHAIN_CHANCE: f64 = 0.25;
pub const BG_PULSE_TRAIL_STEPS: usize = 3;
pub const BG_PULSE_SPEED: (f32, f32) = (0.008, 0.014); // slower, reads as distant
pub const BG_PULSE_SIZE: (f32, f32) = (0.8, 1.2);
pub const BG_PULSE_OPACITY: (f32, f32) = (0.15, 0.30);
pub const BG_PULSE_TRAIL_LEN: (f32, f32) = (0.08, 0.14);
pub const BG_TRAIL_ALPHA_SCALE: f32 = 0.6;
pub const BG_TRAIL_RADIUS_SCALE: f32 = 0.6;
pub const FG_TRAIL_ALPHA_SCALE: f32 = 0.5;
pub const FG_TRAIL_RADIUS_SCALE: f32 = 0.8;

// Frame pacing
pub const FRAME_INTERVAL_MS: f64 = 16.0; // ~60fps
pub const REDUCED_FRAME_INTERVAL_MS: f64 = 33.0; // ~30fps

// Reduced-capability detection
pub const NARROW_VIEWPORT_PX: f64 = 768.0;
