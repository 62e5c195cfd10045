mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::SketchEvent;
pub use handlers::{EventRecorder, RepaintHandler};

pub trait EventHandler {
    fn handle_event(&mut self, event: &SketchEvent);
}
