//! Quad Pack - a quad-tree spatial partition demo
//!
//! Core modules:
//! - `sim`: Deterministic world model (circle placement, quad-tree index)
//! - `renderer`: One-way draw contract plus a command-recording backend
//! - `settings`: Persisted demo parameters

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{Model, SimError};

/// World and placement constants
pub mod consts {
    /// Side length of the square world; circles live in `[0, WORLD_SIZE]²`
    pub const WORLD_SIZE: f32 = 1.0;

    /// Smallest leaf capacity the quad-tree accepts
    pub const MIN_SPLIT_CRITERIA: usize = 3;
    /// Leaf capacity used when nothing else is configured
    pub const DEFAULT_SPLIT_CRITERIA: usize = 6;

    /// Circle radius draw (Gaussian, floored)
    pub const CIRCLE_RADIUS_MEAN: f32 = 0.01;
    pub const CIRCLE_RADIUS_STD_DEV: f32 = 0.005;
    pub const MIN_CIRCLE_RADIUS: f32 = 0.0025;
    /// Drift speed attached to every circle (world units per second)
    pub const CIRCLE_SPEED: f32 = 0.2;

    /// Candidate draws per circle before placement gives up
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

    /// Initial population when no settings say otherwise
    pub const DEFAULT_CIRCLE_COUNT: usize = 100;
}
