use std::fs;

use diagramkit_designer::{
    Color, DiagramShape, ExportFormat, FileAdapter, PdfStubAdapter, Point, Size,
};
use tempfile::TempDir;

fn sample() -> Vec<DiagramShape> {
    vec![
        DiagramShape::rectangle(
            Point::new(70.0, 70.0),
            Size::new(80.0, 60.0),
            Color::new("Blue"),
            Color::new("DarkBlue"),
            "Rectangle_1",
        ),
        DiagramShape::triangle(
            Point::new(410.0, 110.0),
            60.0,
            Color::new("Green"),
            Color::new("DarkGreen"),
            "Triangle_2",
        ),
    ]
}

#[test]
fn test_every_format_saves() {
    let dir = TempDir::new().unwrap();
    for format in ExportFormat::ALL {
        let adapter = format.adapter();
        assert!(!adapter.description().is_empty());

        let requested = dir.path().join(format!("out.{}", adapter.file_extension()));
        let written = adapter.save(&sample(), &requested).unwrap();
        let content = fs::read_to_string(&written).unwrap();
        assert!(content.contains("Rectangle_1"), "{} output: {}", format, content);
    }
}

#[test]
fn test_pdf_stub_writes_text_file() {
    let dir = TempDir::new().unwrap();
    let requested = dir.path().join("report.pdf");
    let written = PdfStubAdapter.save(&sample(), &requested).unwrap();

    assert_eq!(written, dir.path().join("report.txt"));
    assert!(!requested.exists());

    let content = fs::read_to_string(written).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "PDF Export Simulation");
    assert!(lines[1].starts_with("Generated: "));
    assert_eq!(lines[2], "Total shapes: 2");
    assert_eq!(lines[3], "Shape: Rectangle_1 at (70.0, 70.0)");
    assert_eq!(lines[4], "Shape: Triangle_2 at (410.0, 110.0)");
}

#[test]
fn test_unwritable_destination_is_io_error() {
    let dir = TempDir::new().unwrap();
    let destination = dir.path().join("missing").join("out.json");
    let err = ExportFormat::Json
        .adapter()
        .save(&sample(), &destination)
        .unwrap_err();
    assert!(err.is_io_error());
}

#[test]
fn test_xml_root_and_children() {
    let xml = String::from_utf8(ExportFormat::Xml.adapter().encode(&sample()).unwrap()).unwrap();
    assert_eq!(xml.matches("<Rectangle ").count(), 1);
    assert_eq!(xml.matches("<Triangle ").count(), 1);
    assert!(xml.contains("SideLength=\"60\""));
    assert!(xml.contains("<Diagram>"));
}
