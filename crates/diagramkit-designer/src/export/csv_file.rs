//! CSV export.

use diagramkit_core::{DesignerError, Result};

use super::{ExportFormat, FileAdapter};
use crate::model::{DiagramCircle, DiagramRectangle, DiagramShape, DiagramTriangle, ShapeHeader};
use crate::serialization::ShapeRecord;
use crate::visitor::{traverse, ShapeVisitor};

pub const CSV_HEADER: [&str; 12] = [
    "Type",
    "Name",
    "X",
    "Y",
    "Width",
    "Height",
    "Radius",
    "SideLength",
    "Area",
    "FillColor",
    "BorderColor",
    "CreatedAt",
];

/// Buffers one row per visited shape.
///
/// Geometry columns belonging to other variants are left blank, never zero.
#[derive(Debug, Default)]
pub struct CsvExportVisitor {
    rows: Vec<[String; 12]>,
}

impl CsvExportVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_record(&mut self, record: ShapeRecord) {
        let cell = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();
        self.rows.push([
            record.shape_type.to_string(),
            record.name,
            record.x.to_string(),
            record.y.to_string(),
            cell(record.width),
            cell(record.height),
            cell(record.radius),
            cell(record.side_length),
            format!("{:.2}", record.area),
            record.fill_color,
            record.border_color,
            record.created_at.to_rfc3339(),
        ]);
    }

    /// Writes the header and buffered rows, then empties the buffer.
    pub fn finish(&mut self) -> Result<Vec<u8>> {
        let rows = std::mem::take(&mut self.rows);
        let mut writer = ::csv::Writer::from_writer(Vec::new());
        writer.write_record(CSV_HEADER).map_err(encoding_error)?;
        for row in &rows {
            writer.write_record(row).map_err(encoding_error)?;
        }
        writer.into_inner().map_err(|e| {
            DesignerError::Encoding {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

fn encoding_error(e: ::csv::Error) -> diagramkit_core::Error {
    DesignerError::Encoding {
        reason: e.to_string(),
    }
    .into()
}

impl ShapeVisitor for CsvExportVisitor {
    fn visit_rectangle(&mut self, header: &ShapeHeader, rect: &DiagramRectangle) {
        self.push_record(ShapeRecord::from_rectangle(header, rect));
    }

    fn visit_circle(&mut self, header: &ShapeHeader, circle: &DiagramCircle) {
        self.push_record(ShapeRecord::from_circle(header, circle));
    }

    fn visit_triangle(&mut self, header: &ShapeHeader, triangle: &DiagramTriangle) {
        self.push_record(ShapeRecord::from_triangle(header, triangle));
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvFileAdapter;

impl FileAdapter for CsvFileAdapter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn description(&self) -> &'static str {
        "CSV format for spreadsheets"
    }

    fn file_extension(&self) -> &'static str {
        "csv"
    }

    fn encode(&self, shapes: &[DiagramShape]) -> Result<Vec<u8>> {
        let mut visitor = CsvExportVisitor::new();
        traverse(shapes, &mut visitor);
        visitor.finish()
    }
}
