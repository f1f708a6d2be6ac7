//! Draw contract between the world model and whatever renders a frame
//!
//! The model only pushes draw commands through [`RenderBackend`]; it
//! never queries the backend. [`DrawList`] records the stream so tests
//! and the headless binary can observe a frame without a real surface.

pub mod draw_list;

pub use draw_list::{DrawCommand, DrawList};

use glam::Vec2;

/// RGBA color, each channel in `[0, 1]`
pub type Color = [f32; 4];

/// Violet fill for circles
pub const CIRCLE_COLOR: Color = [0.59, 0.0, 1.0, 1.0];
/// Grey outline for quad-tree leaf bounds
pub const QUAD_BOUNDS_COLOR: Color = [0.39, 0.39, 0.39, 1.0];
/// White world border
pub const BORDER_COLOR: Color = [1.0, 1.0, 1.0, 1.0];
/// White status text
pub const LABEL_COLOR: Color = [1.0, 1.0, 1.0, 1.0];
/// Font for the status labels
pub const LABEL_FONT: &str = "16px Arial, sans-serif";

/// A positioned piece of status text
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub font: &'static str,
    pub fill: Color,
    pub pos: Vec2,
}

/// One-way sink for draw commands, in world coordinates
pub trait RenderBackend {
    fn draw_circle(&mut self, color: Color, center: Vec2, radius: f32);
    fn draw_rectangle(&mut self, color: Color, left: f32, top: f32, width: f32, height: f32);
    fn draw_text(&mut self, label: &TextLabel);
}
