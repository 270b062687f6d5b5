//! Stand-in for PDF export.
//!
//! This does not produce a PDF. It writes a plain-text summary and always
//! saves it with a `.txt` extension, whatever extension was requested.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use diagramkit_core::Result;

use super::{ExportFormat, FileAdapter};
use crate::model::DiagramShape;

/// Extension the summary is actually written with.
pub const STUB_EXTENSION: &str = "txt";

#[derive(Debug, Clone, Copy, Default)]
pub struct PdfStubAdapter;

impl PdfStubAdapter {
    /// Renders the summary as of `generated_at`.
    pub fn render(&self, shapes: &[DiagramShape], generated_at: DateTime<Local>) -> String {
        let mut content = String::new();
        let _ = writeln!(content, "PDF Export Simulation");
        let _ = writeln!(
            content,
            "Generated: {}",
            generated_at.format("%Y-%m-%d %H:%M:%S")
        );
        let _ = writeln!(content, "Total shapes: {}", shapes.len());
        for shape in shapes {
            let _ = writeln!(content, "Shape: {} at {}", shape.name(), shape.position());
        }
        content
    }
}

impl FileAdapter for PdfStubAdapter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn description(&self) -> &'static str {
        "PDF document (simulated)"
    }

    fn file_extension(&self) -> &'static str {
        "pdf"
    }

    fn encode(&self, shapes: &[DiagramShape]) -> Result<Vec<u8>> {
        Ok(self.render(shapes, Local::now()).into_bytes())
    }

    fn output_path(&self, destination: &Path) -> PathBuf {
        destination.with_extension(STUB_EXTENSION)
    }
}
