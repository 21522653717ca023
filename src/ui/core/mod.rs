//! Core UI functionality for the Bucketlist application.
//!
//! This module contains the fundamental building blocks for the user interface:
//! the actions the list editor understands, the component abstraction and the
//! terminal event source.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Event processing and keyboard input handling
//!
//! # Architecture
//!
//! 1. **Events** are read from the terminal through the [`EventHandler`]
//! 2. **Components** map key events to [`Action`]s
//! 3. **Actions** are applied through [`Component::update`], one at a time

// Core UI modules
pub mod actions;
pub mod component;
pub mod event_handler;

// Re-export core types for easier access from other modules
pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
