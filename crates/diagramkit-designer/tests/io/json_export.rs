use diagramkit_designer::export::JsonExportVisitor;
use diagramkit_designer::{
    shapes_from_json, traverse, Color, DiagramShape, FileAdapter, JsonFileAdapter, Point, Size,
};

fn shapes() -> Vec<DiagramShape> {
    vec![
        DiagramShape::rectangle(
            Point::new(70.125, 0.1 + 0.2),
            Size::new(80.0, 60.000000001),
            Color::new("Blue"),
            Color::new("DarkBlue"),
            "Rectangle_1",
        ),
        DiagramShape::circle(
            Point::new(240.0, -90.5),
            std::f64::consts::E,
            Color::new("#FF8800"),
            Color::new("DarkRed"),
            "Circle \"quoted\"",
        ),
        DiagramShape::triangle(
            Point::new(1e-7, 1e9),
            60.0,
            Color::new("Green"),
            Color::new("DarkGreen"),
            "Triangle_3",
        ),
    ]
}

#[test]
fn test_json_round_trip_every_variant() {
    let original = shapes();
    let bytes = JsonFileAdapter.encode(&original).unwrap();
    let json = String::from_utf8(bytes).unwrap();

    let parsed = shapes_from_json(&json).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn test_json_layout() {
    let json = String::from_utf8(JsonFileAdapter.encode(&shapes()[..1]).unwrap()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let record = &value[0];

    assert_eq!(record["Type"], "Rectangle");
    assert_eq!(record["Name"], "Rectangle_1");
    assert_eq!(record["Width"], 80.0);
    assert!(record.get("Radius").is_none());
    assert!(record.get("SideLength").is_none());
    assert!(record["CreatedAt"].is_string());
    // Indented output.
    assert!(json.contains("\n  {\n    \"Type\": \"Rectangle\""));
}

#[test]
fn test_buffer_empty_after_finish() {
    let mut visitor = JsonExportVisitor::new();
    traverse(&shapes(), &mut visitor);
    let first = visitor.finish().unwrap();
    assert_eq!(shapes_from_json(&first).unwrap().len(), 3);
    assert_eq!(visitor.finish().unwrap(), "[]");
}

#[test]
fn test_empty_diagram_is_empty_array() {
    let bytes = JsonFileAdapter.encode(&[]).unwrap();
    assert_eq!(bytes, b"[]");
}
