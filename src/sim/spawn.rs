//! Rejection-sampled placement of non-overlapping circles

use glam::Vec2;

use super::SimError;
use super::circle::Circle;
use super::rng::WorldRng;
use crate::consts::{
    CIRCLE_RADIUS_MEAN, CIRCLE_RADIUS_STD_DEV, CIRCLE_SPEED, MAX_PLACEMENT_ATTEMPTS,
    MIN_CIRCLE_RADIUS,
};

/// Append `count` circles to `circles`, none overlapping any other.
///
/// Each candidate draws a uniform center, a floored Gaussian radius, and
/// a random drift direction, then is discarded and redrawn if it
/// intersects any circle already in the collection (including ones
/// accepted earlier in this call). A circle that cannot be placed within
/// [`MAX_PLACEMENT_ATTEMPTS`] draws aborts the batch with
/// `PlacementExhausted`; circles accepted before that point stay in the
/// collection.
pub fn place_circles(
    rng: &mut WorldRng,
    circles: &mut Vec<Circle>,
    count: usize,
) -> Result<(), SimError> {
    let mut placed = 0;
    while placed < count {
        let mut attempts = 0u32;
        loop {
            if attempts == MAX_PLACEMENT_ATTEMPTS {
                log::warn!(
                    "circle placement exhausted after {attempts} attempts ({placed}/{count} placed)"
                );
                return Err(SimError::PlacementExhausted {
                    placed,
                    requested: count,
                    attempts,
                });
            }
            attempts += 1;

            let candidate = random_circle(rng);
            if circles.iter().all(|c| !c.intersects(&candidate)) {
                circles.push(candidate);
                placed += 1;
                break;
            }
        }
    }
    Ok(())
}

fn random_circle(rng: &mut WorldRng) -> Circle {
    let center = Vec2::new(rng.next_double(), rng.next_double());
    let radius = rng
        .next_gaussian(CIRCLE_RADIUS_MEAN, CIRCLE_RADIUS_STD_DEV)
        .abs()
        .max(MIN_CIRCLE_RADIUS);
    Circle::new(center, radius, rng.next_circle_vector(CIRCLE_SPEED))
}
