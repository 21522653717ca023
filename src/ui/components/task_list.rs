//! Rows of the selected bucket

use crate::constants::{CURSOR_MARKER, UNCHECKED_MARKER};
use crate::ui::list_editor::Mode;
use ratatui::text::Line;

/// View of one bucket's tasks with the cursor and mode applied
pub struct TaskList<'a> {
    tasks: &'a [String],
    cursor: usize,
    mode: Mode,
}

impl<'a> TaskList<'a> {
    pub fn new(tasks: &'a [String], cursor: usize, mode: Mode) -> Self {
        Self { tasks, cursor, mode }
    }

    /// Text of a single row.
    ///
    /// The cursor marker is hidden while inserting.
    pub fn row_text(&self, index: usize, task: &str) -> String {
        let marker = if index == self.cursor && self.mode != Mode::Inserting {
            CURSOR_MARKER
        } else {
            " "
        };
        format!("{} [{}] {}", marker, UNCHECKED_MARKER, task)
    }

    /// Visible rows starting at `offset`. The row being edited is left blank
    /// for the text input to draw over.
    pub fn lines(&self, offset: usize, height: usize) -> Vec<Line<'static>> {
        self.tasks
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(i, task)| match self.mode {
                Mode::Editing { index } if index == i => Line::default(),
                _ => Line::raw(self.row_text(i, task)),
            })
            .collect()
    }

    /// Screen row of the task being edited, if it is visible
    pub fn editing_row(&self, offset: usize, height: usize) -> Option<usize> {
        match self.mode {
            Mode::Editing { index } if index >= offset && index < offset + height => Some(index - offset),
            _ => None,
        }
    }
}
