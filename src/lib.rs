//! Bucketlist - a terminal task list organised in colored buckets
//!
//! Tasks live in named buckets (work, academic, personal by default). The user
//! moves a highlight through the selected bucket, switches buckets with a
//! single key, edits a task in place or appends a new one. Everything is kept
//! in memory for the lifetime of the process.
//!
//! # Modules
//!
//! * [`buckets`] - Bucket and task data model
//! * [`config`] - Application configuration management
//! * [`logger`] - File logging setup
//! * [`ui`] - List editor state machine, components and rendering
//! * [`utils`] - Utility functions and helpers

/// Bucket and task data model
pub mod buckets;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging setup for debugging
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for color parsing and other helpers
pub mod utils;
