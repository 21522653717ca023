//! Keyboard-driven list editor
//!
//! Owns the buckets, the selected bucket, the cursor and the interaction mode.
//! Keys are first mapped to an [`Action`] depending on the current mode, then
//! the action is applied. Every operation is total: out-of-range moves are
//! clamped instead of reported.

use crate::buckets::BucketSet;
use crate::config::Config;
use crate::ui::components::TextInput;
use crate::ui::core::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Interaction mode of the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Cursor moves, bucket switches and mode changes are accepted
    #[default]
    Navigation,
    /// The task at `index` of the selected bucket is being rewritten
    Editing { index: usize },
    /// A new task is being composed for the selected bucket
    Inserting,
}

/// Behaviour switches for the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorOptions {
    /// Whether `n` opens insert mode
    pub insert_enabled: bool,
    pub input_placeholder: String,
    /// Display width of the input while inserting
    pub input_width: u16,
}

impl From<&Config> for EditorOptions {
    fn from(config: &Config) -> Self {
        Self {
            insert_enabled: config.ui.insert_enabled,
            input_placeholder: config.ui.input_placeholder.clone(),
            input_width: config.ui.input_width,
        }
    }
}

pub struct ListEditor {
    buckets: BucketSet,
    selected_bucket: String,
    cursor: usize,
    mode: Mode,
    input: TextInput,
    options: EditorOptions,
}

impl ListEditor {
    pub fn new(buckets: BucketSet, selected_bucket: impl Into<String>, input: TextInput, options: EditorOptions) -> Self {
        Self {
            buckets,
            selected_bucket: selected_bucket.into(),
            cursor: 0,
            mode: Mode::Navigation,
            input,
            options,
        }
    }

    /// Build an editor seeded from configuration
    pub fn from_config(config: &Config, input: TextInput) -> Self {
        Self::new(
            BucketSet::from_config(&config.buckets),
            config.ui.default_bucket.clone(),
            input,
            EditorOptions::from(config),
        )
    }

    pub fn buckets(&self) -> &BucketSet {
        &self.buckets
    }

    pub fn selected_bucket(&self) -> &str {
        &self.selected_bucket
    }

    /// Tasks of the selected bucket
    pub fn tasks(&self) -> &[String] {
        self.buckets.tasks(&self.selected_bucket)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    /// Map a key to the action it triggers in the current mode
    pub fn map_key(&self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }

        match self.mode {
            Mode::Editing { .. } | Mode::Inserting => match key.code {
                KeyCode::Enter => Action::Commit,
                _ => Action::Input(key),
            },
            Mode::Navigation => {
                if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                    return Action::None;
                }
                match key.code {
                    KeyCode::Char(' ') => Action::StartEdit,
                    KeyCode::Char('n') if self.options.insert_enabled => Action::StartInsert,
                    KeyCode::Char('q') => Action::Quit,
                    KeyCode::Up | KeyCode::Char('k') => Action::PreviousTask,
                    KeyCode::Down | KeyCode::Char('j') => Action::NextTask,
                    KeyCode::Char(c) => match self.buckets.by_key(c) {
                        Some(bucket) => Action::SelectBucket(bucket.name.clone()),
                        None => Action::None,
                    },
                    _ => Action::None,
                }
            }
        }
    }

    /// Apply an action. Returns [`Action::Quit`] when the program should stop,
    /// [`Action::None`] otherwise.
    pub fn apply(&mut self, action: Action) -> Action {
        match action {
            Action::NextTask => self.move_down(),
            Action::PreviousTask => self.move_up(),
            Action::SelectBucket(name) => self.select_bucket(&name),
            Action::StartEdit => self.start_edit(),
            Action::StartInsert => self.start_insert(),
            Action::Commit => self.commit(),
            Action::Input(key) => self.forward_input(key),
            Action::Quit => {
                log::info!("Quit requested in mode {:?}", self.mode);
                return Action::Quit;
            }
            Action::None => {}
        }
        Action::None
    }

    /// Map and apply a key in one step
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        let action = self.map_key(key);
        self.apply(action)
    }

    fn in_navigation(&self) -> bool {
        self.mode == Mode::Navigation
    }

    pub fn move_up(&mut self) {
        if self.in_navigation() && self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.in_navigation() && self.cursor + 1 < self.tasks().len() {
            self.cursor += 1;
        }
    }

    /// Select a bucket by name, clamping the cursor to its task count.
    ///
    /// Unknown names are ignored.
    pub fn select_bucket(&mut self, name: &str) {
        if !self.in_navigation() {
            return;
        }

        let Some(bucket) = self.buckets.get(name) else {
            log::warn!("Ignoring switch to unknown bucket '{}'", name);
            return;
        };

        let len = bucket.tasks.len();
        self.selected_bucket = bucket.name.clone();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
        log::debug!("Selected bucket '{}' ({} tasks), cursor {}", name, len, self.cursor);
    }

    /// Load the highlighted task into the input and enter edit mode.
    ///
    /// Does nothing when the selected bucket is empty.
    pub fn start_edit(&mut self) {
        if !self.in_navigation() {
            return;
        }

        let Some(task) = self.tasks().get(self.cursor).cloned() else {
            log::debug!("No task to edit in bucket '{}'", self.selected_bucket);
            return;
        };

        self.input.set_placeholder(None);
        self.input.set_width(None);
        self.input.set_value(task);
        self.input.focus();
        self.mode = Mode::Editing { index: self.cursor };
        log::debug!("Editing task {} of bucket '{}'", self.cursor, self.selected_bucket);
    }

    /// Open an empty input for a new task
    pub fn start_insert(&mut self) {
        if !self.in_navigation() || !self.options.insert_enabled {
            return;
        }

        self.input.reset();
        self.input.set_placeholder(Some(self.options.input_placeholder.clone()));
        self.input.set_width(Some(self.options.input_width));
        self.input.focus();
        self.mode = Mode::Inserting;
        log::debug!("Inserting into bucket '{}'", self.selected_bucket);
    }

    /// Store the trimmed input and return to navigation
    pub fn commit(&mut self) {
        let text = self.input.value().trim().to_string();
        let selected = self.selected_bucket.clone();

        match self.mode {
            Mode::Navigation => return,
            Mode::Editing { index } => match self.buckets.get_mut(&selected).and_then(|b| b.tasks.get_mut(index)) {
                Some(task) => {
                    log::info!("Updated task {} of '{}': '{}'", index, selected, text);
                    *task = text;
                }
                None => log::warn!("Task {} of '{}' vanished before commit", index, selected),
            },
            Mode::Inserting => match self.buckets.get_mut(&selected) {
                Some(bucket) => {
                    log::info!("Appended task to '{}': '{}'", selected, text);
                    bucket.tasks.push(text);
                }
                None => log::warn!("Bucket '{}' vanished before insert", selected),
            },
        }

        self.input.blur();
        self.mode = Mode::Navigation;
    }

    /// Hand a key to the text input while editing or inserting
    pub fn forward_input(&mut self, key: KeyEvent) {
        if self.in_navigation() {
            return;
        }
        if !self.input.handle_key(key) {
            log::debug!("Text input ignored key {:?}", key.code);
        }
    }
}
