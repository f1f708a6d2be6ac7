//! Seeded random source for reproducible worlds

use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// The random source behind circle placement
///
/// Wraps a PCG-32 stream so an entire world is reproducible from one
/// seed; the model takes this by value at construction.
#[derive(Debug, Clone)]
pub struct WorldRng {
    rng: Pcg32,
}

impl WorldRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Uniform sample in `[0, 1)`
    #[inline]
    pub fn next_double(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// Normal sample via Box-Muller over the uniform stream
    pub fn next_gaussian(&mut self, mean: f32, std_dev: f32) -> f32 {
        // 1 - u keeps the log argument strictly positive
        let u1 = 1.0 - self.next_double();
        let u2 = self.next_double();
        mean + std_dev * (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
    }

    /// Uniformly random direction scaled to `magnitude`
    pub fn next_circle_vector(&mut self, magnitude: f32) -> Vec2 {
        let angle = TAU * self.next_double();
        Vec2::new(angle.cos(), angle.sin()) * magnitude
    }
}
