use super::Command;

/// Manages the committed commands and the undone ones waiting for redo
#[derive(Debug, Default, Clone)]
pub struct CommandHistory {
    /// Commands currently on the canvas, oldest first
    strokes: Vec<Command>,
    /// Undone commands, most recently undone last
    redo_stack: Vec<Command>,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command to the canvas. Returns its index in `strokes`.
    ///
    /// Any pending redo history is discarded.
    pub fn commit(&mut self, command: Command) -> usize {
        debug_assert!(!command.is_preview(), "previews never enter the history");
        if !self.redo_stack.is_empty() {
            log::debug!("Discarding {} redo entries", self.redo_stack.len());
            self.redo_stack.clear();
        }
        self.strokes.push(command);
        self.strokes.len() - 1
    }

    /// Move the newest command to the redo stack. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.strokes.pop() {
            Some(command) => {
                log::debug!("Undo: {}", command.describe());
                self.redo_stack.push(command);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone command back. Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(command) => {
                log::debug!("Redo: {}", command.describe());
                self.strokes.push(command);
                true
            }
            None => false,
        }
    }

    /// Empty both stacks
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.strokes.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn strokes(&self) -> &[Command] {
        &self.strokes
    }

    pub fn redo_stack(&self) -> &[Command] {
        &self.redo_stack
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Command> {
        self.strokes.get_mut(index)
    }
}
