//! XML export.
//!
//! Produces a `<Diagram>` root holding one empty element per shape, named
//! after the variant, with every field written as an attribute.

use std::io::Cursor;

use diagramkit_core::{DesignerError, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use super::{ExportFormat, FileAdapter};
use crate::model::{DiagramCircle, DiagramRectangle, DiagramShape, DiagramTriangle, ShapeHeader};
use crate::serialization::ShapeRecord;
use crate::visitor::{traverse, ShapeVisitor};

const ROOT_ELEMENT: &str = "Diagram";

/// Buffers one element per visited shape.
#[derive(Debug, Default)]
pub struct XmlExportVisitor {
    elements: Vec<BytesStart<'static>>,
}

impl XmlExportVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn push_record(&mut self, record: ShapeRecord) {
        let mut elem = BytesStart::new(record.shape_type.as_str());
        elem.push_attribute(("Name", record.name.as_str()));
        elem.push_attribute(("X", record.x.to_string().as_str()));
        elem.push_attribute(("Y", record.y.to_string().as_str()));
        let geometry = [
            ("Width", record.width),
            ("Height", record.height),
            ("Radius", record.radius),
            ("SideLength", record.side_length),
        ];
        for (key, value) in geometry {
            if let Some(value) = value {
                elem.push_attribute((key, value.to_string().as_str()));
            }
        }
        elem.push_attribute(("Area", record.area.to_string().as_str()));
        elem.push_attribute(("FillColor", record.fill_color.as_str()));
        elem.push_attribute(("BorderColor", record.border_color.as_str()));
        elem.push_attribute(("CreatedAt", record.created_at.to_rfc3339().as_str()));
        self.elements.push(elem);
    }

    /// Writes the buffered document and starts a new empty one.
    pub fn finish(&mut self) -> Result<String> {
        let elements = std::mem::take(&mut self.elements);
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

        write_event(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)),
        )?;
        if elements.is_empty() {
            write_event(&mut writer, Event::Empty(BytesStart::new(ROOT_ELEMENT)))?;
        } else {
            write_event(&mut writer, Event::Start(BytesStart::new(ROOT_ELEMENT)))?;
            for elem in elements {
                write_event(&mut writer, Event::Empty(elem))?;
            }
            write_event(&mut writer, Event::End(BytesEnd::new(ROOT_ELEMENT)))?;
        }

        String::from_utf8(writer.into_inner().into_inner()).map_err(|e| {
            DesignerError::Encoding {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

fn write_event(writer: &mut Writer<Cursor<Vec<u8>>>, event: Event<'_>) -> Result<()> {
    writer.write_event(event).map_err(|e| {
        DesignerError::Encoding {
            reason: e.to_string(),
        }
        .into()
    })
}

impl ShapeVisitor for XmlExportVisitor {
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
pub struct XmlFileAdapter;

impl FileAdapter for XmlFileAdapter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Xml
    }

    fn description(&self) -> &'static str {
        "XML format with schema"
    }

    fn file_extension(&self) -> &'static str {
        "xml"
    }

    fn encode(&self, shapes: &[DiagramShape]) -> Result<Vec<u8>> {
        let mut visitor = XmlExportVisitor::new();
        traverse(shapes, &mut visitor);
        Ok(visitor.finish()?.into_bytes())
    }
}
