//! Reusable UI components

pub mod bucket_legend;
pub mod task_list;
pub mod text_input;

// Component exports
pub use task_list::TaskList;
pub use text_input::TextInput;
