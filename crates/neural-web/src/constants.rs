// Page wiring constants for the web frontend.

// Hero canvas, with floating labels
pub const HERO_CANVAS_ID: &str = "neural-network";

// Lighter, label-free canvases (CTA cards, footer); skipped on reduced devices
pub const SECONDARY_CANVAS_SELECTOR: &str = ".neural-canvas-secondary";
pub const SECONDARY_NODE_DENSITY: f32 = 0.0001;
pub const SECONDARY_MAX_NODES: usize = 60;
pub const SECONDARY_MIN_NODES: usize = 20;
