//! # DiagramKit
//!
//! The core of a small diagram editor:
//! - Rectangles, circles and equilateral triangles with positions and named colors
//! - Hit testing, selection and duplication
//! - Statistics and validation reports
//! - Export to JSON, XML, CSV and a text stand-in for PDF
//!
//! ## Architecture
//!
//! DiagramKit is organized as a workspace with multiple crates:
//!
//! 1. **diagramkit-core** - Error types shared by every crate
//! 2. **diagramkit-designer** - Shape model, visitor, statistics, validation, export
//! 3. **diagramkit-settings** - Export and placement configuration (JSON/TOML)
//! 4. **diagramkit** - Main binary that integrates all crates

pub use diagramkit_designer as designer;

pub use diagramkit_core::{DesignerError, Error, Result};

pub use diagramkit_designer::{
    Color, Diagram, DiagramShape, DiagramValidator, ExportFormat, FileAdapter, PlacementDefaults,
    Point, ShapeStatistics, ShapeType, ShapeVisitor, Size,
};

pub use diagramkit_settings::{Config, ExportSettings, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout to the reports
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
