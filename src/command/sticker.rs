use egui::{Color32, Pos2};

use super::DisplayCommand;
use crate::surface::Surface;

/// A glyph stamped on the canvas. Dragging moves it instead of growing it.
#[derive(Clone, Debug, PartialEq)]
pub struct Sticker {
    content: String,
    position: Pos2,
    size: f32,
    color: Color32,
}

impl Sticker {
    pub fn new(content: impl Into<String>, position: Pos2, size: f32, color: Color32) -> Self {
        Self {
            content: content.into(),
            position,
            size,
            color,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn size(&self) -> f32 {
        self.size
    }
}

impl DisplayCommand for Sticker {
    fn drag(&mut self, pos: Pos2) {
        self.position = pos;
    }

    fn display(&self, surface: &mut Surface<'_>) {
        surface.glyph(self.position, &self.content, self.size, self.color);
    }
}
