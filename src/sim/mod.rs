//! Deterministic world model
//!
//! Everything that decides where circles go and how the quad-tree is
//! shaped lives here. This module must stay pure and deterministic:
//! - Seeded RNG only, injected at model construction
//! - Single-threaded, every operation runs to completion
//! - Rendering stays behind the one-way `renderer` trait; nothing in
//!   here reads back from a draw surface

pub mod circle;
pub mod model;
pub mod quadtree;
pub mod rng;
pub mod spawn;

pub use circle::Circle;
pub use model::Model;
pub use quadtree::{Leaves, QuadNode, QuadTree};
pub use rng::WorldRng;
pub use spawn::place_circles;

use thiserror::Error;

use crate::consts::MIN_SPLIT_CRITERIA;

/// Errors surfaced by tree construction and circle placement
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// Split criteria below the minimum of [`MIN_SPLIT_CRITERIA`]
    #[error("split criteria {got} is below the minimum of {min}", min = MIN_SPLIT_CRITERIA)]
    InvalidConfig { got: usize },
    /// Rejection sampling ran out of attempts before placing every circle
    #[error("placed {placed} of {requested} circles before running out of {attempts} attempts")]
    PlacementExhausted {
        placed: usize,
        requested: usize,
        attempts: u32,
    },
}
