//! DiagramKit Settings Crate
//!
//! Handles application configuration: export defaults and shape placement.

pub mod config;
pub mod error;

pub use config::{Config, ExportSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
