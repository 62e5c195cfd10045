use egui::{Pos2, Rect, Response};

mod controller;

pub use controller::{InputController, PointerState};

/// Pointer events on the canvas, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved onto the canvas
    PointerEnter { position: Pos2 },
    /// Pointer moved while over the canvas (with or without the button held)
    PointerMove { position: Pos2 },
    /// Primary button was pressed over the canvas
    PointerDown { position: Pos2 },
    /// Primary button was released over the canvas
    PointerUp { position: Pos2 },
    /// Pointer left the canvas
    PointerLeave,
}

/// Handles converting raw egui pointer input over the canvas into [`InputEvent`]s
#[derive(Debug, Default)]
pub struct CanvasInput {
    last_pointer_pos: Option<Pos2>,
}

impl CanvasInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Screen position to canvas-local position
    pub fn to_canvas(canvas_rect: Rect, pos: Pos2) -> Pos2 {
        (pos - canvas_rect.min).to_pos2()
    }

    /// Diff this frame's pointer state against the last one.
    ///
    /// `response` is the canvas widget; the pointer only counts as inside when
    /// egui says the canvas is not covered by another window.
    pub fn process(&mut self, response: &Response) -> Vec<InputEvent> {
        let canvas_rect = response.rect;
        let (hover_pos, pressed, released) = response.ctx.input(|input| {
            (
                input.pointer.hover_pos(),
                input.pointer.primary_pressed(),
                input.pointer.primary_released(),
            )
        });
        let inside = hover_pos
            .filter(|pos| response.contains_pointer() && canvas_rect.contains(*pos))
            .map(|pos| Self::to_canvas(canvas_rect, pos));
        self.diff(inside, pressed, released)
    }

    /// Core of [`Self::process`], split out so it can run without a UI
    pub fn diff(
        &mut self,
        inside: Option<Pos2>,
        pressed: bool,
        released: bool,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();

        match (self.last_pointer_pos, inside) {
            (None, Some(position)) => events.push(InputEvent::PointerEnter { position }),
            (Some(last), Some(position)) if last != position => {
                events.push(InputEvent::PointerMove { position });
            }
            (Some(_), None) => events.push(InputEvent::PointerLeave),
            _ => {}
        }

        if let Some(position) = inside {
            if pressed {
                events.push(InputEvent::PointerDown { position });
            }
            if released {
                events.push(InputEvent::PointerUp { position });
            }
        }

        self.last_pointer_pos = inside;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_move_leave() {
        let mut input = CanvasInput::new();
        let p = Pos2::new(3.0, 4.0);
        let q = Pos2::new(5.0, 4.0);

        assert_eq!(
            input.diff(Some(p), false, false),
            vec![InputEvent::PointerEnter { position: p }]
        );
        assert!(input.diff(Some(p), false, false).is_empty());
        assert_eq!(
            input.diff(Some(q), false, false),
            vec![InputEvent::PointerMove { position: q }]
        );
        assert_eq!(input.diff(None, false, false), vec![InputEvent::PointerLeave]);
        assert!(input.diff(None, false, false).is_empty());
    }

    #[test]
    fn test_press_and_release_inside() {
        let mut input = CanvasInput::new();
        let p = Pos2::new(1.0, 1.0);
        input.diff(Some(p), false, false);
        assert_eq!(
            input.diff(Some(p), true, false),
            vec![InputEvent::PointerDown { position: p }]
        );
        assert_eq!(
            input.diff(Some(p), false, true),
            vec![InputEvent::PointerUp { position: p }]
        );
    }

    #[test]
    fn test_press_outside_is_ignored() {
        let mut input = CanvasInput::new();
        assert!(input.diff(None, true, false).is_empty());
    }

    #[test]
    fn test_to_canvas() {
        let rect = Rect::from_min_size(Pos2::new(100.0, 50.0), egui::vec2(256.0, 256.0));
        assert_eq!(CanvasInput::to_canvas(rect, Pos2::new(110.0, 60.0)), Pos2::new(10.0, 10.0));
    }
}
