use egui::{Color32, Pos2};

use super::InputEvent;
use crate::command::{
    Command, CommandHistory, DisplayCommand, MarkerLine, MarkerPreview, Sticker, StickerPreview,
};
use crate::event::{EventBus, SketchEvent};
use crate::tools::{Palette, ToolMode};

/// Where the pointer is relative to the canvas and what it is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerState {
    /// Pointer is outside the canvas
    #[default]
    Idle,
    /// Pointer is over the canvas with the button up
    Previewing,
    /// Button is down; `index` is the active command in the history
    Drawing { index: usize },
}

/// Turns canvas pointer events into commands, drags and notifications
#[derive(Debug, Clone)]
pub struct InputController {
    state: PointerState,
    preview: Option<Command>,
    ink: Color32,
    sticker_size: f32,
}

impl InputController {
    pub fn new(ink: Color32, sticker_size: f32) -> Self {
        Self {
            state: PointerState::Idle,
            preview: None,
            ink,
            sticker_size,
        }
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn preview(&self) -> Option<&Command> {
        self.preview.as_ref()
    }

    /// True when the preview should be painted over the drawing
    pub fn preview_visible(&self) -> bool {
        self.state == PointerState::Previewing && self.preview.is_some()
    }

    /// The native cursor is replaced by the preview while over the canvas
    pub fn hides_cursor(&self) -> bool {
        self.state != PointerState::Idle
    }

    /// Index of the command being dragged, if the button is down
    pub fn active_index(&self) -> Option<usize> {
        match self.state {
            PointerState::Drawing { index } => Some(index),
            _ => None,
        }
    }

    /// React to one pointer event
    pub fn handle(
        &mut self,
        event: InputEvent,
        history: &mut CommandHistory,
        palette: &Palette,
        bus: &EventBus,
    ) {
        log::trace!("{event:?} in {:?}", self.state);
        match (event, self.state) {
            (InputEvent::PointerEnter { position }, PointerState::Idle)
            | (InputEvent::PointerMove { position }, PointerState::Idle) => {
                log::debug!("Pointer entered canvas at {position:?}");
                self.state = PointerState::Previewing;
                self.show_preview(position, palette, bus);
            }
            (InputEvent::PointerEnter { position }, PointerState::Previewing)
            | (InputEvent::PointerMove { position }, PointerState::Previewing) => {
                self.show_preview(position, palette, bus);
            }
            (InputEvent::PointerEnter { position }, PointerState::Drawing { index })
            | (InputEvent::PointerMove { position }, PointerState::Drawing { index }) => {
                match history.get_mut(index) {
                    Some(command) => {
                        command.drag(position);
                        bus.emit(SketchEvent::DrawingChanged);
                    }
                    None => {
                        log::warn!("Active command {index} vanished, dropping it");
                        self.state = PointerState::Previewing;
                        self.show_preview(position, palette, bus);
                    }
                }
            }
            (InputEvent::PointerDown { position }, PointerState::Drawing { .. }) => {
                log::debug!("Pointer down while already drawing at {position:?}, ignored");
            }
            (InputEvent::PointerDown { position }, _) => {
                let command = self.create_command(position, palette);
                log::info!("Committed {} at {position:?}", command.describe());
                let index = history.commit(command);
                self.preview = None;
                self.state = PointerState::Drawing { index };
                bus.emit(SketchEvent::DrawingChanged);
            }
            (InputEvent::PointerUp { position }, PointerState::Drawing { .. }) => {
                self.state = PointerState::Previewing;
                self.show_preview(position, palette, bus);
            }
            (InputEvent::PointerUp { .. }, _) => {}
            (InputEvent::PointerLeave, _) => {
                log::debug!("Pointer left canvas");
                self.state = PointerState::Idle;
                self.preview = None;
                bus.emit(SketchEvent::DrawingChanged);
            }
        }
    }

    /// Finalize the active command, if any. Call before mutating the history
    /// from outside the pointer flow so no stale index survives.
    pub fn release(&mut self) {
        if let PointerState::Drawing { index } = self.state {
            log::debug!("Releasing active command {index}");
            self.state = PointerState::Previewing;
        }
    }

    fn show_preview(&mut self, position: Pos2, palette: &Palette, bus: &EventBus) {
        self.preview = Some(self.create_preview(position, palette));
        bus.emit(SketchEvent::ToolMoved);
    }

    fn create_command(&self, position: Pos2, palette: &Palette) -> Command {
        match palette.current_tool() {
            ToolMode::Marker { thickness } => MarkerLine::new(position, thickness, self.ink).into(),
            ToolMode::Sticker { content } => {
                Sticker::new(content, position, self.sticker_size, self.ink).into()
            }
        }
    }

    fn create_preview(&self, position: Pos2, palette: &Palette) -> Command {
        match palette.current_tool() {
            ToolMode::Marker { thickness } => {
                MarkerPreview::new(position, thickness, self.ink).into()
            }
            ToolMode::Sticker { content } => {
                StickerPreview::new(content, position, self.sticker_size, self.ink).into()
            }
        }
    }
}

impl Default for InputController {
    fn default() -> Self {
        Self::new(Color32::BLACK, 32.0)
    }
}
