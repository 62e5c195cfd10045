/// Notifications raised by the sketch state whenever the canvas needs repainting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchEvent {
    /// Committed content changed (stroke drawn, undo, redo, clear, pointer left).
    /// Repaint without the tool preview.
    DrawingChanged,
    /// The tool preview moved or was recreated. Repaint with the preview on top.
    ToolMoved,
}

impl SketchEvent {
    pub fn shows_preview(self) -> bool {
        matches!(self, SketchEvent::ToolMoved)
    }
}
