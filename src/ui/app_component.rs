use crate::config::Config;
use crate::constants::VIEW_FOOTER;
use crate::ui::components::{bucket_legend, TaskList, TextInput};
use crate::ui::core::{Action, Component, EventType};
use crate::ui::layout::LayoutManager;
use crate::ui::list_editor::{ListEditor, Mode};
use crate::ui::theme::Theme;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    widgets::{Block, Paragraph},
    Frame,
};

/// Top-level component: the list editor plus the theme it is drawn with
pub struct AppComponent {
    editor: ListEditor,
    theme: Theme,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let theme = Theme::from_config(config)?;
        let input = TextInput::new().with_style(theme.input_style());
        let editor = ListEditor::from_config(config, input);

        log::info!(
            "AppComponent: {} buckets, starting in '{}'",
            editor.buckets().len(),
            editor.selected_bucket()
        );

        Ok(Self {
            editor,
            theme,
            should_quit: false,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn editor(&self) -> &ListEditor {
        &self.editor
    }

    /// Process one terminal event to completion
    pub fn handle_event(&mut self, event_type: EventType) {
        match event_type {
            EventType::Key(key) => {
                let action = self.handle_key_events(key);
                self.update(action);
            }
            EventType::Resize(w, h) => log::debug!("Terminal resized to {}x{}", w, h),
            EventType::Tick | EventType::Other => {}
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.editor.map_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        match self.editor.apply(action) {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let bucket_style = self.theme.bucket_style(self.editor.selected_bucket());
        f.render_widget(Block::default().style(bucket_style), rect);

        let mode = self.editor.mode();
        let task_count = self.editor.tasks().len();
        let layout = LayoutManager::editor_layout(rect, mode == Mode::Inserting, task_count);

        f.render_widget(Paragraph::new(bucket_legend::legend_line(&self.theme)), layout.legend);

        if let Some(input_area) = layout.input {
            self.editor.input().render(f, input_area);
        }

        let height = usize::from(layout.list.height);
        let offset = LayoutManager::scroll_offset(self.editor.cursor(), layout.list.height);
        let list = TaskList::new(self.editor.tasks(), self.editor.cursor(), mode);
        let lines = list.lines(offset, height);
        let editing_row = list.editing_row(offset, height);
        f.render_widget(Paragraph::new(lines), layout.list);

        if let Some(row) = editing_row {
            let row_rect = Rect::new(layout.list.x, layout.list.y + row as u16, layout.list.width, 1);
            self.editor.input().render(f, row_rect);
        }

        f.render_widget(Paragraph::new(VIEW_FOOTER), layout.footer);
    }
}
