use egui::{Align2, Color32, Context, FontId, Pos2, Rect, Shape, Stroke, Vec2};

/// A drawing target for display commands.
///
/// Commands work in canvas-local coordinates (origin at the canvas' top-left
/// corner). The surface maps them to output coordinates with a translation and
/// a uniform scale, and collects the resulting shapes. The on-screen canvas uses
/// the canvas rect as origin and a scale of 1; export uses origin zero and the
/// export scale.
pub struct Surface<'a> {
    ctx: &'a Context,
    origin: Pos2,
    scale: f32,
    size: Vec2,
    shapes: Vec<Shape>,
}

impl<'a> Surface<'a> {
    /// Create a surface covering `size` canvas points, placed at `origin`
    pub fn new(ctx: &'a Context, origin: Pos2, size: Vec2, scale: f32) -> Self {
        Self {
            ctx,
            origin,
            scale,
            size,
            shapes: Vec::new(),
        }
    }

    /// Surface for the visible canvas, in screen coordinates
    pub fn for_canvas(ctx: &'a Context, canvas_rect: Rect) -> Self {
        Self::new(ctx, canvas_rect.min, canvas_rect.size(), 1.0)
    }

    /// The surface bounds in output coordinates
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.origin, self.size * self.scale)
    }

    /// Map a canvas-local point to output coordinates
    pub fn to_output(&self, pos: Pos2) -> Pos2 {
        self.origin + pos.to_vec2() * self.scale
    }

    /// Drop everything painted so far
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Fill the whole surface with a solid color
    pub fn fill(&mut self, color: Color32) {
        self.shapes.push(Shape::rect_filled(self.rect(), 0.0, color));
    }

    /// Stroke a connected polyline through `points`
    pub fn polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        let points = points.iter().map(|p| self.to_output(*p)).collect();
        self.shapes
            .push(Shape::line(points, Stroke::new(width * self.scale, color)));
    }

    pub fn circle_filled(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.shapes.push(Shape::circle_filled(
            self.to_output(center),
            radius * self.scale,
            color,
        ));
    }

    /// Draw `text` centered on `center`, `size` canvas points tall
    pub fn glyph(&mut self, center: Pos2, text: &str, size: f32, color: Color32) {
        let pos = self.to_output(center);
        let font_id = FontId::proportional(size * self.scale);
        let shape = self
            .ctx
            .fonts(|fonts| Shape::text(fonts, pos, Align2::CENTER_CENTER, text, font_id, color));
        self.shapes.push(shape);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn into_shapes(self) -> Vec<Shape> {
        self.shapes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_mapping() {
        let ctx = Context::default();
        let surface = Surface::new(&ctx, Pos2::new(10.0, 20.0), Vec2::new(256.0, 256.0), 4.0);
        assert_eq!(surface.to_output(Pos2::new(1.0, 2.0)), Pos2::new(14.0, 28.0));
        assert_eq!(surface.rect().size(), Vec2::new(1024.0, 1024.0));
    }

    #[test]
    fn test_clear_drops_shapes() {
        let ctx = Context::default();
        let mut surface = Surface::for_canvas(
            &ctx,
            Rect::from_min_size(Pos2::ZERO, Vec2::new(100.0, 100.0)),
        );
        surface.fill(Color32::WHITE);
        surface.circle_filled(Pos2::new(5.0, 5.0), 2.0, Color32::BLACK);
        assert_eq!(surface.shapes().len(), 2);
        surface.clear();
        assert!(surface.shapes().is_empty());
    }
}
