//! Utility functions and helpers
//!
//! Logging setup and per-user application paths.

pub mod app_paths;
pub mod logging;
