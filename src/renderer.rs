use egui::{Color32, Painter, Rect, Stroke};

use crate::command::{Command, DisplayCommand};
use crate::surface::Surface;

/// Repaints the canvas from the committed command list
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
    border: Stroke,
}

impl Renderer {
    pub fn new(background: Color32) -> Self {
        Self {
            background,
            border: Stroke::new(1.0, Color32::from_gray(160)),
        }
    }

    /// Clear the surface and replay every command, oldest first, then the
    /// preview on top if one is given.
    ///
    /// Args:
    ///     surface: target, already positioned over the canvas
    ///     strokes: committed commands in insertion order
    ///     preview: the live tool preview, or None to paint content only
    pub fn redraw(
        &self,
        surface: &mut Surface<'_>,
        strokes: &[Command],
        preview: Option<&Command>,
    ) {
        surface.clear();
        surface.fill(self.background);
        for command in strokes {
            command.display(surface);
        }
        if let Some(preview) = preview {
            preview.display(surface);
        }
    }

    /// Redraw into the UI painter, clipped to the canvas
    pub fn paint(
        &self,
        painter: &Painter,
        canvas_rect: Rect,
        strokes: &[Command],
        preview: Option<&Command>,
    ) {
        let mut surface = Surface::for_canvas(painter.ctx(), canvas_rect);
        self.redraw(&mut surface, strokes, preview);

        let painter = painter.with_clip_rect(canvas_rect);
        painter.extend(surface.into_shapes());
        painter.rect_stroke(canvas_rect, 0.0, self.border);
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Color32::from_gray(250))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{MarkerLine, MarkerPreview};
    use egui::{Context, Pos2, Shape, Vec2};

    fn line(from: Pos2, to: Pos2) -> Command {
        let mut line = MarkerLine::new(from, 2.0, Color32::BLACK);
        line.drag(to);
        line.into()
    }

    #[test]
    fn test_redraw_replays_in_order() {
        let ctx = Context::default();
        let renderer = Renderer::default();
        let mut surface = Surface::new(&ctx, Pos2::ZERO, Vec2::splat(256.0), 1.0);
        let strokes = [
            line(Pos2::new(0.0, 0.0), Pos2::new(5.0, 5.0)),
            line(Pos2::new(9.0, 9.0), Pos2::new(1.0, 1.0)),
        ];

        renderer.redraw(&mut surface, &strokes, None);

        let shapes = surface.shapes();
        assert_eq!(shapes.len(), 3);
        assert!(matches!(shapes[0], Shape::Rect(_)));
        match (&shapes[1], &shapes[2]) {
            (Shape::Path(first), Shape::Path(second)) => {
                assert_eq!(first.points[0], Pos2::new(0.0, 0.0));
                assert_eq!(second.points[0], Pos2::new(9.0, 9.0));
            }
            other => panic!("expected two paths, got {other:?}"),
        }
    }

    #[test]
    fn test_redraw_starts_from_scratch() {
        let ctx = Context::default();
        let renderer = Renderer::default();
        let mut surface = Surface::new(&ctx, Pos2::ZERO, Vec2::splat(256.0), 1.0);
        let strokes = [line(Pos2::new(0.0, 0.0), Pos2::new(5.0, 5.0))];

        renderer.redraw(&mut surface, &strokes, None);
        renderer.redraw(&mut surface, &strokes, None);
        assert_eq!(surface.shapes().len(), 2);
    }

    #[test]
    fn test_preview_is_painted_last() {
        let ctx = Context::default();
        let renderer = Renderer::default();
        let mut surface = Surface::new(&ctx, Pos2::ZERO, Vec2::splat(256.0), 1.0);
        let strokes = [line(Pos2::new(0.0, 0.0), Pos2::new(5.0, 5.0))];
        let preview: Command = MarkerPreview::new(Pos2::new(3.0, 3.0), 6.0, Color32::BLACK).into();

        renderer.redraw(&mut surface, &strokes, Some(&preview));
        assert!(matches!(surface.shapes().last(), Some(Shape::Circle(_))));
    }
}
