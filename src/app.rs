use egui::{Key, KeyboardShortcut, Modifiers, Painter, Rect, Response, Vec2};

use crate::config::SketchpadConfig;
use crate::error::SketchError;
use crate::event::{EventRecorder, RepaintHandler};
use crate::export::{save_png, Exporter};
use crate::input::CanvasInput;
use crate::panels::{central_panel, sticker_prompt, tools_panel};
use crate::renderer::Renderer;
use crate::state::SketchState;

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

pub struct SketchpadApp {
    config: SketchpadConfig,
    state: SketchState,
    renderer: Renderer,
    exporter: Exporter,
    input: CanvasInput,
    /// Collects notifications from the sketch state; drained once per frame
    events: EventRecorder,
    /// Whether the last notification asked for the preview overlay
    show_preview: bool,
    /// Where the canvas was laid out last frame, in screen coordinates
    canvas_rect: Option<Rect>,
    /// Text of the open custom sticker prompt, if any
    sticker_prompt: Option<String>,
    export_status: Option<String>,
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: SketchpadConfig) -> Self {
        let app = Self::with_config(config);
        app.state
            .subscribe(Box::new(RepaintHandler::new(cc.egui_ctx.clone())));
        app
    }

    /// An app without a window, for tests and headless use
    pub fn with_config(config: SketchpadConfig) -> Self {
        let state = SketchState::new(&config);
        let events = EventRecorder::new();
        state.subscribe(Box::new(events.clone()));
        Self {
            renderer: Renderer::new(config.canvas_color()),
            exporter: Exporter::from_config(&config),
            config,
            state,
            input: CanvasInput::new(),
            events,
            show_preview: false,
            canvas_rect: None,
            sticker_prompt: None,
            export_status: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.config.canvas_size()
    }

    pub fn state(&self) -> &SketchState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SketchState {
        &mut self.state
    }

    /// True when the canvas currently paints the tool preview on top
    pub fn show_preview(&self) -> bool {
        self.show_preview
    }

    pub fn canvas_rect(&self) -> Option<Rect> {
        self.canvas_rect
    }

    pub fn export_status(&self) -> Option<&str> {
        self.export_status.as_deref()
    }

    /// Feed this frame's pointer activity over the canvas into the sketch state
    pub fn handle_canvas_input(&mut self, response: &Response) {
        for event in self.input.process(response) {
            self.state.handle_input(event);
        }
    }

    /// Apply pending notifications, then repaint the canvas
    pub fn paint_canvas(&mut self, painter: &Painter, canvas_rect: Rect) {
        self.canvas_rect = Some(canvas_rect);
        if let Some(last) = self.events.drain().last() {
            self.show_preview = last.shows_preview();
        }
        let preview = if self.show_preview {
            self.state.visible_preview()
        } else {
            None
        };
        self.renderer
            .paint(painter, canvas_rect, self.state.strokes(), preview);
    }

    pub fn undo(&mut self) {
        self.state.undo();
    }

    pub fn redo(&mut self) {
        self.state.redo();
    }

    pub fn clear(&mut self) {
        self.state.clear();
    }

    /// Render the committed drawing and save or download it
    pub fn export(&mut self, ctx: &egui::Context) {
        match self.try_export(ctx) {
            Ok(location) => {
                self.export_status = Some(format!("Exported to {location}"));
            }
            Err(err) => {
                log::error!("Export failed: {err}");
                self.export_status = Some(format!("Export failed: {err}"));
            }
        }
    }

    fn try_export(&self, ctx: &egui::Context) -> Result<String, SketchError> {
        let bytes = self.exporter.export_png(ctx, self.state.strokes())?;
        Ok(save_png(&bytes, &self.config.export_dir)?)
    }

    pub fn is_sticker_prompt_open(&self) -> bool {
        self.sticker_prompt.is_some()
    }

    pub fn open_sticker_prompt(&mut self) {
        if self.sticker_prompt.is_none() {
            self.sticker_prompt = Some(String::new());
        }
    }

    pub(crate) fn take_sticker_prompt(&mut self) -> Option<String> {
        self.sticker_prompt.take()
    }

    pub(crate) fn keep_sticker_prompt(&mut self, text: String) {
        self.sticker_prompt = Some(text);
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let redo_shift = KeyboardShortcut::new(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z);
        // Shift+Z first: consume_shortcut ignores extra shift when matching plain Z.
        let (undo, redo) = ctx.input_mut(|input| {
            let redo = input.consume_shortcut(&redo_shift) || input.consume_shortcut(&REDO);
            let undo = input.consume_shortcut(&UNDO);
            (undo, redo)
        });
        if undo {
            self.undo();
        }
        if redo {
            self.redo();
        }
    }
}

impl Default for SketchpadApp {
    fn default() -> Self {
        Self::with_config(SketchpadConfig::default())
    }
}

impl eframe::App for SketchpadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        tools_panel(self, ctx);
        sticker_prompt(self, ctx);
        central_panel(self, ctx);
    }
}
