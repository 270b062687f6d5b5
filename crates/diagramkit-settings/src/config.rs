//! Configuration and settings management for DiagramKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in the platform-specific config directory.
//!
//! Configuration is organized into two sections:
//! - Export settings (output directory, default format, filename prefix)
//! - Placement defaults for new shapes (origins, step, sizes, colors)

use std::path::{Path, PathBuf};

use diagramkit_designer::{ExportFormat, PlacementDefaults};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ConfigError, SettingsError, SettingsResult};

const APP_DIR: &str = "diagramkit";
const CONFIG_FILE: &str = "config.toml";

/// Export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Directory export files are written to
    pub output_directory: PathBuf,
    /// Format used when none is given explicitly
    pub default_format: ExportFormat,
    /// Prefix of generated export filenames
    pub filename_prefix: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_directory: dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")),
            default_format: ExportFormat::Json,
            filename_prefix: "diagram".to_string(),
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Export settings
    pub export: ExportSettings,
    /// Placement of newly added shapes
    pub placement: PlacementDefaults,
}

#[derive(Clone, Copy)]
enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string()).into()),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location: `<config dir>/diagramkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML, chosen by extension)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = FileFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match FileFormat::from_path(path)? {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.export.filename_prefix.trim().is_empty() {
            return Err(SettingsError::invalid(
                "export.filename_prefix",
                "must not be empty",
            ));
        }

        let placement = &self.placement;
        if placement.step <= 0.0 {
            return Err(SettingsError::invalid("placement.step", "must be > 0"));
        }

        if placement.rectangle_size.width() <= 0.0 || placement.rectangle_size.height() <= 0.0 {
            return Err(SettingsError::invalid(
                "placement.rectangle_size",
                "width and height must be > 0",
            ));
        }

        if placement.circle_radius <= 0.0 {
            return Err(SettingsError::invalid("placement.circle_radius", "must be > 0"));
        }

        if placement.triangle_side <= 0.0 {
            return Err(SettingsError::invalid("placement.triangle_side", "must be > 0"));
        }

        Ok(())
    }
}
