//! World model: the circle collection and the quad-tree built over it

use glam::Vec2;

use super::quadtree::QuadTree;
use super::rng::WorldRng;
use super::spawn::place_circles;
use super::{Circle, SimError};
use crate::consts::{MIN_SPLIT_CRITERIA, WORLD_SIZE};
use crate::renderer::{
    BORDER_COLOR, CIRCLE_COLOR, LABEL_COLOR, LABEL_FONT, QUAD_BOUNDS_COLOR, RenderBackend,
    TextLabel,
};

/// Status label positions, just right of the unit square
const OBJECTS_LABEL_POS: Vec2 = Vec2::new(1.05, 0.08);
const CRITERIA_LABEL_POS: Vec2 = Vec2::new(1.05, 0.11);

/// The demo world
///
/// Owns the circles, the quad-tree indexing them, and the injected
/// random source. Every mutation of the collection or the split
/// criteria discards the tree and rebuilds it from the full collection;
/// there are no partial updates.
#[derive(Debug)]
pub struct Model {
    circles: Vec<Circle>,
    tree: QuadTree,
    rng: WorldRng,
    split_criteria: usize,
    show_quadtree: bool,
}

impl Model {
    /// Create an empty world.
    ///
    /// Fails with `InvalidConfig` when `split_criteria` is below 3.
    pub fn new(split_criteria: usize, rng: WorldRng) -> Result<Self, SimError> {
        let tree = QuadTree::new(split_criteria)?;
        Ok(Self {
            circles: Vec::new(),
            tree,
            rng,
            split_criteria,
            show_quadtree: true,
        })
    }

    /// Populate a fresh world with `count` circles and build the first tree
    pub fn initialize(&mut self, count: usize) -> Result<(), SimError> {
        log::info!("initializing world with {count} circles");
        self.add_circles(count)
    }

    /// Place `count` more non-overlapping circles, then rebuild the tree
    /// over the whole collection.
    ///
    /// On `PlacementExhausted` the circles accepted before the failure
    /// stay in the world and the tree is still rebuilt over them.
    pub fn add_circles(&mut self, count: usize) -> Result<(), SimError> {
        let result = place_circles(&mut self.rng, &mut self.circles, count);
        self.rebuild();
        result
    }

    /// Drop the `count` most recently added circles (clamped at zero)
    /// and rebuild the tree
    pub fn remove_circles(&mut self, count: usize) {
        self.circles
            .truncate(self.circles.len().saturating_sub(count));
        self.rebuild();
    }

    /// Change the leaf capacity and rebuild the tree.
    ///
    /// Values below 3 are silently discarded; the current criteria and
    /// tree stay as they are.
    pub fn set_split_criteria(&mut self, value: usize) {
        if value < MIN_SPLIT_CRITERIA {
            log::debug!("ignoring split criteria {value}");
            return;
        }
        self.split_criteria = value;
        self.rebuild();
    }

    #[inline]
    pub fn split_criteria(&self) -> usize {
        self.split_criteria
    }

    /// Flip whether `render` overlays the quad-tree leaf bounds
    pub fn toggle_quadtree_overlay(&mut self) {
        self.show_quadtree = !self.show_quadtree;
    }

    #[inline]
    pub fn shows_quadtree(&self) -> bool {
        self.show_quadtree
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn quadtree(&self) -> &QuadTree {
        &self.tree
    }

    /// Reserved extension point; circles carry a velocity but do not
    /// move yet
    pub fn update(&mut self, _elapsed: f32) {}

    /// Push one frame of draw commands: circles, the optional leaf-bound
    /// overlay, the world border, and the two status labels.
    ///
    /// The border draws after the overlay so it stays visible along the
    /// world edge.
    pub fn render(&self, backend: &mut dyn RenderBackend) {
        for circle in &self.circles {
            backend.draw_circle(CIRCLE_COLOR, circle.center, circle.radius);
        }

        if self.show_quadtree {
            for leaf in self.tree.leaves() {
                backend.draw_rectangle(
                    QUAD_BOUNDS_COLOR,
                    leaf.left(),
                    leaf.top(),
                    leaf.size(),
                    leaf.size(),
                );
            }
        }

        backend.draw_rectangle(BORDER_COLOR, 0.0, 0.0, WORLD_SIZE, WORLD_SIZE);

        backend.draw_text(&TextLabel {
            text: format!("objects: {}", self.circles.len()),
            font: LABEL_FONT,
            fill: LABEL_COLOR,
            pos: OBJECTS_LABEL_POS,
        });
        backend.draw_text(&TextLabel {
            text: format!("criteria: {}", self.split_criteria),
            font: LABEL_FONT,
            fill: LABEL_COLOR,
            pos: CRITERIA_LABEL_POS,
        });
    }

    fn rebuild(&mut self) {
        let mut tree = QuadTree::new(self.split_criteria)
            .expect("split criteria stays valid: checked at construction and in the setter");
        for circle in &self.circles {
            tree.insert(*circle);
        }
        self.tree = tree;
    }
}
