use egui::Pos2;

use crate::surface::Surface;

mod history;
mod marker_line;
mod preview;
mod sticker;

pub use history::CommandHistory;
pub use marker_line::MarkerLine;
pub use preview::{MarkerPreview, StickerPreview};
pub use sticker::Sticker;

/// Common trait for everything that can be painted on the canvas
pub trait DisplayCommand {
    /// Respond to continued pointer motion while this command is active
    fn drag(&mut self, pos: Pos2);

    /// Paint the current state onto the surface.
    ///
    /// Calling this repeatedly without an intervening `drag` paints the same shapes.
    fn display(&self, surface: &mut Surface<'_>);
}

/// Enumeration of all display commands.
///
/// `MarkerLine` and `Sticker` are committed to the history; the preview
/// variants only ever live in the input controller.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    MarkerLine(MarkerLine),
    Sticker(Sticker),
    MarkerPreview(MarkerPreview),
    StickerPreview(StickerPreview),
}

impl Command {
    /// Short human readable label, used for logging and the history readout
    pub fn describe(&self) -> String {
        match self {
            Command::MarkerLine(line) => format!("Marker line ({} pts)", line.points().len()),
            Command::Sticker(sticker) => format!("Sticker {}", sticker.content()),
            Command::MarkerPreview(_) => "Marker preview".to_owned(),
            Command::StickerPreview(preview) => format!("Sticker preview {}", preview.content()),
        }
    }

    pub fn is_preview(&self) -> bool {
        matches!(self, Command::MarkerPreview(_) | Command::StickerPreview(_))
    }

    pub fn as_marker_line(&self) -> Option<&MarkerLine> {
        match self {
            Command::MarkerLine(line) => Some(line),
            _ => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Command::Sticker(sticker) => Some(sticker),
            _ => None,
        }
    }
}

impl DisplayCommand for Command {
    fn drag(&mut self, pos: Pos2) {
        match self {
            Command::MarkerLine(line) => line.drag(pos),
            Command::Sticker(sticker) => sticker.drag(pos),
            Command::MarkerPreview(preview) => preview.drag(pos),
            Command::StickerPreview(preview) => preview.drag(pos),
        }
    }

    fn display(&self, surface: &mut Surface<'_>) {
        match self {
            Command::MarkerLine(line) => line.display(surface),
            Command::Sticker(sticker) => sticker.display(surface),
            Command::MarkerPreview(preview) => preview.display(surface),
            Command::StickerPreview(preview) => preview.display(surface),
        }
    }
}

impl From<MarkerLine> for Command {
    fn from(line: MarkerLine) -> Self {
        Command::MarkerLine(line)
    }
}

impl From<Sticker> for Command {
    fn from(sticker: Sticker) -> Self {
        Command::Sticker(sticker)
    }
}

impl From<MarkerPreview> for Command {
    fn from(preview: MarkerPreview) -> Self {
        Command::MarkerPreview(preview)
    }
}

impl From<StickerPreview> for Command {
    fn from(preview: StickerPreview) -> Self {
        Command::StickerPreview(preview)
    }
}
