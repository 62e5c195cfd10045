use crate::command::{Command, CommandHistory};
use crate::config::SketchpadConfig;
use crate::event::{EventBus, EventHandler, SketchEvent};
use crate::input::{InputController, InputEvent};
use crate::tools::Palette;

/// All mutable session state of the sketchpad.
///
/// Owned by the app and only touched from the UI thread.
#[derive(Debug)]
pub struct SketchState {
    history: CommandHistory,
    palette: Palette,
    controller: InputController,
    bus: EventBus,
}

impl SketchState {
    pub fn new(config: &SketchpadConfig) -> Self {
        Self {
            history: CommandHistory::new(),
            palette: Palette::from_config(config),
            controller: InputController::new(config.ink_color(), config.sticker_size),
            bus: EventBus::new(),
        }
    }

    /// Register a listener for drawing/preview notifications
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.bus.subscribe(handler);
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        self.controller
            .handle(event, &mut self.history, &self.palette, &self.bus);
    }

    pub fn undo(&mut self) -> bool {
        self.controller.release();
        let changed = self.history.undo();
        if changed {
            self.bus.emit(SketchEvent::DrawingChanged);
        } else {
            log::debug!("Nothing to undo");
        }
        changed
    }

    pub fn redo(&mut self) -> bool {
        self.controller.release();
        let changed = self.history.redo();
        if changed {
            self.bus.emit(SketchEvent::DrawingChanged);
        } else {
            log::debug!("Nothing to redo");
        }
        changed
    }

    pub fn clear(&mut self) {
        self.controller.release();
        log::info!(
            "Clearing canvas ({} strokes, {} redo)",
            self.history.strokes().len(),
            self.history.redo_stack().len()
        );
        self.history.clear();
        self.bus.emit(SketchEvent::DrawingChanged);
    }

    pub fn select_marker(&mut self, index: usize) {
        self.palette.select_marker(index);
    }

    pub fn select_sticker(&mut self, index: usize) {
        self.palette.select_sticker(index);
    }

    /// Add a sticker from the prompt; `None` when the prompt was cancelled
    pub fn add_custom_sticker(&mut self, input: Option<&str>) -> usize {
        self.palette.add_custom_sticker(input)
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn strokes(&self) -> &[Command] {
        self.history.strokes()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn controller(&self) -> &InputController {
        &self.controller
    }

    /// The preview to overlay, if the pointer is hovering over the canvas
    pub fn visible_preview(&self) -> Option<&Command> {
        if self.controller.preview_visible() {
            self.controller.preview()
        } else {
            None
        }
    }
}

impl Default for SketchState {
    fn default() -> Self {
        Self::new(&SketchpadConfig::default())
    }
}
