use std::cell::RefCell;
use std::rc::Rc;

use crate::event::{EventHandler, SketchEvent};

/// Asks egui for a new frame whenever the drawing or the preview changes
pub struct RepaintHandler {
    ctx: egui::Context,
}

impl RepaintHandler {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl EventHandler for RepaintHandler {
    fn handle_event(&mut self, _event: &SketchEvent) {
        self.ctx.request_repaint();
    }
}

/// Keeps a shared log of every event it sees
#[derive(Clone, Default)]
pub struct EventRecorder {
    events: Rc<RefCell<Vec<SketchEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn events(&self) -> Vec<SketchEvent> {
        self.events.borrow().clone()
    }

    pub fn last(&self) -> Option<SketchEvent> {
        self.events.borrow().last().copied()
    }

    /// Take everything recorded so far, leaving the log empty
    pub fn drain(&self) -> Vec<SketchEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

impl EventHandler for EventRecorder {
    fn handle_event(&mut self, event: &SketchEvent) {
        self.events.borrow_mut().push(*event);
    }
}
