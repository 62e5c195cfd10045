use std::cell::RefCell;

use crate::event::{EventHandler, SketchEvent};

/// Fans sketch events out to every subscribed handler.
///
/// Not `Clone`: handlers are owned boxes and a copy could not share them.
#[derive(Default)]
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.handlers.borrow().len())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Deliver `event` to every handler, in subscription order
    pub fn emit(&self, event: SketchEvent) {
        let mut handlers = self.handlers.borrow_mut();
        log::trace!("{event:?} -> {} subscribers", handlers.len());
        for handler in handlers.iter_mut() {
            handler.handle_event(&event);
        }
    }
}
