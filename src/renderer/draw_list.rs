//! Command-recording render backend

use glam::Vec2;

use super::{Color, RenderBackend, TextLabel};

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        color: Color,
        center: Vec2,
        radius: f32,
    },
    Rectangle {
        color: Color,
        left: f32,
        top: f32,
        width: f32,
        height: f32,
    },
    Text(TextLabel),
}

/// Backend that records every draw call in order
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in submission order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    pub fn rectangle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rectangle { .. }))
            .count()
    }

    pub fn text_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Text(_)))
            .count()
    }
}

impl RenderBackend for DrawList {
    fn draw_circle(&mut self, color: Color, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::Circle {
            color,
            center,
            radius,
        });
    }

    fn draw_rectangle(&mut self, color: Color, left: f32, top: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::Rectangle {
            color,
            left,
            top,
            width,
            height,
        });
    }

    fn draw_text(&mut self, label: &TextLabel) {
        self.commands.push(DrawCommand::Text(label.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{BORDER_COLOR, CIRCLE_COLOR, LABEL_COLOR, LABEL_FONT};

    #[test]
    fn test_records_commands_in_order() {
        let mut list = DrawList::new();
        list.draw_circle(CIRCLE_COLOR, Vec2::new(0.5, 0.5), 0.1);
        list.draw_rectangle(BORDER_COLOR, 0.0, 0.0, 1.0, 1.0);
        list.draw_text(&TextLabel {
            text: "objects: 1".to_string(),
            font: LABEL_FONT,
            fill: LABEL_COLOR,
            pos: Vec2::new(1.05, 0.08),
        });

        assert_eq!(list.commands().len(), 3);
        assert!(matches!(list.commands()[0], DrawCommand::Circle { .. }));
        assert!(matches!(list.commands()[1], DrawCommand::Rectangle { .. }));
        assert!(matches!(list.commands()[2], DrawCommand::Text(_)));
        assert_eq!(list.circle_count(), 1);
        assert_eq!(list.rectangle_count(), 1);
        assert_eq!(list.text_count(), 1);
    }

    #[test]
    fn test_clear_resets_the_list() {
        let mut list = DrawList::new();
        list.draw_circle(CIRCLE_COLOR, Vec2::ZERO, 0.1);
        list.clear();
        assert!(list.commands().is_empty());
    }
}
