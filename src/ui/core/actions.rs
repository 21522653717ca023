use crossterm::event::KeyEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    NextTask,
    PreviousTask,
    SelectBucket(String),

    // Task operations
    StartEdit,
    StartInsert,
    Commit,

    // Text input
    Input(KeyEvent),

    // App control
    Quit,
    None,
}
