//! Export of diagrams to external file formats.
//!
//! Every format implements [`FileAdapter`]. Adapters are stateless: each
//! call to [`FileAdapter::encode`] runs a fresh export visitor over the
//! shapes, so one adapter can be reused for any number of exports.
//!
//! Supported formats:
//! - **JSON**: pretty-printed array of shape records
//! - **XML**: `<Diagram>` root with one attribute-only element per shape
//! - **CSV**: fixed 12-column table
//! - **PDF**: plain-text summary written as `.txt` (not a real PDF)

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Local};
use diagramkit_core::{DesignerError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::model::DiagramShape;

mod csv_file;
mod json;
mod pdf;
mod xml;

pub use self::csv_file::{CsvExportVisitor, CsvFileAdapter, CSV_HEADER};
pub use self::json::{JsonExportVisitor, JsonFileAdapter};
pub use self::pdf::PdfStubAdapter;
pub use self::xml::{XmlExportVisitor, XmlFileAdapter};

/// Saves a collection of shapes in one file format.
pub trait FileAdapter {
    fn format(&self) -> ExportFormat;

    /// Human-readable description shown when picking a format.
    fn description(&self) -> &'static str;

    fn file_extension(&self) -> &'static str;

    /// Encodes `shapes` into the bytes this format writes.
    fn encode(&self, shapes: &[DiagramShape]) -> Result<Vec<u8>>;

    /// Path actually written when saving to `destination`.
    fn output_path(&self, destination: &Path) -> PathBuf {
        destination.to_path_buf()
    }

    /// Encodes and writes `shapes`, returning the path written.
    ///
    /// Write failures surface as [`Error::Io`](diagramkit_core::Error::Io);
    /// nothing is retried and partially written files are left in place.
    fn save(&self, shapes: &[DiagramShape], destination: &Path) -> Result<PathBuf> {
        let bytes = self.encode(shapes)?;
        let path = self.output_path(destination);
        debug!(
            "Writing {} bytes of {} to {}",
            bytes.len(),
            self.format(),
            path.display()
        );
        std::fs::write(&path, bytes)?;
        info!(
            "Exported {} shapes as {} to {}",
            shapes.len(),
            self.format(),
            path.display()
        );
        Ok(path)
    }
}

/// The closed set of export formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExportFormat {
    #[default]
    Json,
    Xml,
    Csv,
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Json,
        ExportFormat::Xml,
        ExportFormat::Csv,
        ExportFormat::Pdf,
    ];

    /// Lookup key, as offered to the user.
    pub fn key(&self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Xml => "XML",
            ExportFormat::Csv => "CSV",
            ExportFormat::Pdf => "PDF",
        }
    }

    pub fn adapter(&self) -> Box<dyn FileAdapter> {
        match self {
            ExportFormat::Json => Box::new(JsonFileAdapter),
            ExportFormat::Xml => Box::new(XmlFileAdapter),
            ExportFormat::Csv => Box::new(CsvFileAdapter),
            ExportFormat::Pdf => Box::new(PdfStubAdapter),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ExportFormat {
    type Err = DesignerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DesignerError::UnknownFormat { key: s.to_string() })
    }
}

/// Builds `<prefix>_YYYYMMDD_HHMMSS.<ext>` for an export started at `at`.
pub fn timestamped_filename(prefix: &str, format: ExportFormat, at: DateTime<Local>) -> String {
    format!(
        "{}_{}.{}",
        prefix,
        at.format("%Y%m%d_%H%M%S"),
        format.adapter().file_extension()
    )
}
