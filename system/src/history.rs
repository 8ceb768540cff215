use crate::types::Stroke;

/// Completed strokes of the whole session, in rendering order, plus the
/// strokes taken off the tail by undo.
///
/// Undo and redo are global: any participant moves the shared tail.
#[derive(Debug, Clone, Default)]
pub struct SessionHistory {
    strokes: Vec<Stroke>,
    redo_stack: Vec<Stroke>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self {
            strokes: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Appends a completed stroke. The redo stack is cleared because redo is
    /// only valid for an unbroken chain of undos.
    pub fn append(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
        if !self.redo_stack.is_empty() {
            log::debug!("Clearing {} redoable strokes", self.redo_stack.len());
            self.redo_stack.clear();
        }
    }

    /// Moves the last stroke onto the redo stack. Returns the new history, or
    /// `None` when there was nothing to undo.
    pub fn undo(&mut self) -> Option<&[Stroke]> {
        let stroke = self.strokes.pop()?;
        self.redo_stack.push(stroke);
        Some(&self.strokes)
    }

    /// Moves the most recently undone stroke back onto the history. Returns
    /// the new history, or `None` when the redo stack was empty.
    pub fn redo(&mut self) -> Option<&[Stroke]> {
        let stroke = self.redo_stack.pop()?;
        self.strokes.push(stroke);
        Some(&self.strokes)
    }

    pub fn snapshot(&self) -> Vec<Stroke> {
        self.strokes.clone()
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }
}
