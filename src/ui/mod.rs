//! UI module for Bucketlist
//!
//! This module handles the list editor state machine, its components,
//! rendering, and user interactions.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod list_editor;
pub mod renderer;
pub mod theme;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use list_editor::{EditorOptions, ListEditor, Mode};
pub use renderer::run_app;
pub use theme::Theme;
