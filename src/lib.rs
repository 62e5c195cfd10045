#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod surface;
pub mod tools;

pub use app::SketchpadApp;
pub use command::{Command, CommandHistory, DisplayCommand};
pub use config::SketchpadConfig;
pub use error::{ConfigError, ExportError, SketchError};
pub use event::{EventBus, SketchEvent};
pub use export::Exporter;
pub use input::{InputController, InputEvent, PointerState};
pub use renderer::Renderer;
pub use state::SketchState;
pub use surface::Surface;
pub use tools::{Palette, Selection, ToolMode};
