//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas of the list editor screen, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorLayout {
    pub legend: Rect,
    /// Insert input, present only while inserting
    pub input: Option<Rect>,
    pub list: Rect,
    pub footer: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Lines used above the task list: legend and a blank line, plus the
    /// insert input and another blank line while inserting
    #[must_use]
    pub fn header_height(inserting: bool) -> u16 {
        if inserting {
            4
        } else {
            2
        }
    }

    /// Lines used below the task list: a blank line and the footer
    pub const FOOTER_HEIGHT: u16 = 2;

    /// Split the screen into legend, optional input, task list and footer.
    ///
    /// The list takes as many lines as there are tasks, limited to the space
    /// left once header and footer are placed.
    #[must_use]
    pub fn editor_layout(area: Rect, inserting: bool, task_rows: usize) -> EditorLayout {
        let available = area
            .height
            .saturating_sub(Self::header_height(inserting))
            .saturating_sub(Self::FOOTER_HEIGHT);
        let list_height = u16::try_from(task_rows).unwrap_or(u16::MAX).min(available);
        let input_height = u16::from(inserting);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(input_height),
                Constraint::Length(input_height),
                Constraint::Length(list_height),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        EditorLayout {
            legend: chunks[0],
            input: inserting.then_some(chunks[2]),
            list: chunks[4],
            footer: chunks[6],
        }
    }

    /// First visible task so that the cursor row stays on screen
    #[must_use]
    pub fn scroll_offset(cursor: usize, visible_rows: u16) -> usize {
        let visible = usize::from(visible_rows);
        if visible == 0 {
            0
        } else {
            cursor.saturating_sub(visible - 1)
        }
    }
}
