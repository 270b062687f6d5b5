//! JSON export.

use diagramkit_core::{DesignerError, Result};

use super::{ExportFormat, FileAdapter};
use crate::model::{DiagramCircle, DiagramRectangle, DiagramShape, DiagramTriangle, ShapeHeader};
use crate::serialization::ShapeRecord;
use crate::visitor::{traverse, ShapeVisitor};

/// Buffers one [`ShapeRecord`] per visited shape.
#[derive(Debug, Default)]
pub struct JsonExportVisitor {
    records: Vec<ShapeRecord>,
}

impl JsonExportVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the buffered records as indented JSON and empties the buffer.
    ///
    /// Fails with [`DesignerError::Encoding`] when a record holds a NaN or
    /// infinite number.
    pub fn finish(&mut self) -> Result<String> {
        let records = std::mem::take(&mut self.records);
        for record in &records {
            if let Some(field) = record.non_finite_field() {
                return Err(DesignerError::Encoding {
                    reason: format!("'{}' has a non-finite {}", record.name, field),
                }
                .into());
            }
        }
        Ok(serde_json::to_string_pretty(&records)?)
    }
}

impl ShapeVisitor for JsonExportVisitor {
    fn visit_rectangle(&mut self, header: &ShapeHeader, rect: &DiagramRectangle) {
        self.records.push(ShapeRecord::from_rectangle(header, rect));
    }

    fn visit_circle(&mut self, header: &ShapeHeader, circle: &DiagramCircle) {
        self.records.push(ShapeRecord::from_circle(header, circle));
    }

    fn visit_triangle(&mut self, header: &ShapeHeader, triangle: &DiagramTriangle) {
        self.records
            .push(ShapeRecord::from_triangle(header, triangle));
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFileAdapter;

impl FileAdapter for JsonFileAdapter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn description(&self) -> &'static str {
        "JSON format with metadata"
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }

    fn encode(&self, shapes: &[DiagramShape]) -> Result<Vec<u8>> {
        let mut visitor = JsonExportVisitor::new();
        traverse(shapes, &mut visitor);
        Ok(visitor.finish()?.into_bytes())
    }
}
