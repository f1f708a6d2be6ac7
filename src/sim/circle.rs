//! Circle primitive for the unit-square world

use glam::Vec2;

use crate::consts::WORLD_SIZE;

/// A circle with a drift velocity
///
/// Construction clamps the center so the full disk stays inside the
/// world. The velocity is carried for a future motion extension and has
/// no effect on placement or indexing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
    pub velocity: Vec2,
}

impl Circle {
    /// Build a circle, pulling the center in until the disk fits the world
    pub fn new(center: Vec2, radius: f32, velocity: Vec2) -> Self {
        let center = Vec2::new(
            center.x.max(radius).min(WORLD_SIZE - radius),
            center.y.max(radius).min(WORLD_SIZE - radius),
        );
        Self {
            center,
            radius,
            velocity,
        }
    }

    /// Standard two-circle overlap test: center distance strictly below
    /// the radius sum
    #[inline]
    pub fn intersects(&self, other: &Circle) -> bool {
        self.center.distance(other.center) < self.radius + other.radius
    }
}
