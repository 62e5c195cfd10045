use egui::{Color32, Pos2};

use super::DisplayCommand;
use crate::surface::Surface;

/// Cursor substitute for the marker: a dot as wide as the line would be
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerPreview {
    position: Pos2,
    thickness: f32,
    color: Color32,
}

impl MarkerPreview {
    pub fn new(position: Pos2, thickness: f32, color: Color32) -> Self {
        Self {
            position,
            thickness,
            color,
        }
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }
}

impl DisplayCommand for MarkerPreview {
    // Previews are rebuilt on every move instead.
    fn drag(&mut self, _pos: Pos2) {}

    fn display(&self, surface: &mut Surface<'_>) {
        surface.circle_filled(self.position, self.thickness, self.color);
    }
}

/// Cursor substitute for the sticker tool: the glyph that would be stamped
#[derive(Clone, Debug, PartialEq)]
pub struct StickerPreview {
    content: String,
    position: Pos2,
    size: f32,
    color: Color32,
}

impl StickerPreview {
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
}

impl DisplayCommand for StickerPreview {
    fn drag(&mut self, _pos: Pos2) {}

    fn display(&self, surface: &mut Surface<'_>) {
        surface.glyph(self.position, &self.content, self.size, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Context, Shape, Vec2};

    #[test]
    fn test_marker_preview_ignores_drag() {
        let mut preview = MarkerPreview::new(Pos2::new(5.0, 5.0), 6.0, Color32::BLACK);
        preview.drag(Pos2::new(100.0, 100.0));
        assert_eq!(preview.position(), Pos2::new(5.0, 5.0));
    }

    #[test]
    fn test_marker_preview_radius_is_thickness() {
        let ctx = Context::default();
        let mut surface = Surface::new(&ctx, Pos2::ZERO, Vec2::splat(256.0), 1.0);
        MarkerPreview::new(Pos2::new(5.0, 7.0), 6.0, Color32::BLACK).display(&mut surface);
        match &surface.shapes()[0] {
            Shape::Circle(circle) => {
                assert_eq!(circle.center, Pos2::new(5.0, 7.0));
                assert_eq!(circle.radius, 6.0);
            }
            other => panic!("expected a circle, got {other:?}"),
        }
    }

    #[test]
    fn test_sticker_preview_ignores_drag() {
        let mut preview = StickerPreview::new("🎃", Pos2::new(1.0, 2.0), 32.0, Color32::BLACK);
        preview.drag(Pos2::new(9.0, 9.0));
        assert_eq!(preview.position(), Pos2::new(1.0, 2.0));
    }
}
