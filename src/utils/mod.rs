//! Utility modules for the Bucketlist application.
//!
//! - [`color`] - Parsing configured `#rrggbb` colors into terminal colors

pub mod color;
