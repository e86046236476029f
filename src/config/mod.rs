//! Configuration management for Outlay
//!
//! Handles path resolution and user settings.

pub mod paths;
pub mod settings;

pub use paths::OutlayPaths;
pub use settings::Settings;
