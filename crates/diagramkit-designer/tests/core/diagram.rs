use diagramkit_designer::{Diagram, ExportFormat, PlacementDefaults, Point, ShapeType};
use tempfile::TempDir;

#[test]
fn test_placement_staggers_by_counter() {
    let mut diagram = Diagram::new();
    for _ in 0..3 {
        diagram.add(ShapeType::Rectangle);
    }
    let positions: Vec<_> = diagram.shapes().iter().map(|s| s.position()).collect();
    assert_eq!(
        positions,
        vec![
            Point::new(70.0, 70.0),
            Point::new(90.0, 90.0),
            Point::new(110.0, 110.0)
        ]
    );
}

#[test]
fn test_custom_placement() {
    let placement = PlacementDefaults {
        step: 5.0,
        circle_radius: 10.0,
        ..PlacementDefaults::default()
    };
    let mut diagram = Diagram::with_placement(placement);
    diagram.add_circle();
    let circle = &diagram.shapes()[0];
    assert_eq!(circle.position(), Point::new(205.0, 55.0));
    assert!((circle.area() - std::f64::consts::PI * 100.0).abs() < 1e-9);
}

#[test]
fn test_select_topmost_and_duplicate() {
    let mut diagram = Diagram::new();
    diagram.add_rectangle(); // (70,70) 80x60
    diagram.add_rectangle(); // (90,90) 80x60

    // Overlap region hits the later rectangle.
    assert_eq!(diagram.select_at(Point::new(100.0, 100.0)), Some(1));
    let index = diagram.duplicate_selected().unwrap();
    let copy = &diagram.shapes()[index];
    assert_eq!(copy.name(), "Rectangle_2_Copy");
    assert_eq!(copy.position(), Point::new(110.0, 110.0));
    assert_eq!(diagram.len(), 3);
    assert_eq!(diagram.shape_counter(), 4);

    assert_eq!(diagram.select_at(Point::new(1000.0, 1000.0)), None);
    assert!(diagram.selected_shape().is_none());
}

#[test]
fn test_session_reports() {
    let mut diagram = Diagram::new();
    assert!(diagram.statistics_report().contains("Total shapes: 0"));
    assert_eq!(diagram.validation_report(), "Diagram is valid!");

    diagram.add_rectangle();
    diagram.add_circle();
    diagram.add_triangle();
    let report = diagram.statistics_report();
    assert!(report.contains("Total shapes: 3"));
    // Rerunning does not double count.
    diagram.statistics_report();
    assert_eq!(diagram.statistics().total_shapes(), 3);

    assert_eq!(diagram.validation_report(), "Diagram is valid!");
}

#[test]
fn test_export_writes_timestamped_file() {
    let dir = TempDir::new().unwrap();
    let mut diagram = Diagram::new();
    diagram.add_triangle();

    let path = diagram
        .export(ExportFormat::Csv, dir.path(), "diagram")
        .unwrap();
    let name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("diagram_"));
    assert!(name.ends_with(".csv"));
    assert_eq!(name.len(), "diagram_YYYYMMDD_HHMMSS.csv".len());
    assert!(path.exists());

    let stub = diagram
        .export(ExportFormat::Pdf, dir.path(), "diagram")
        .unwrap();
    assert_eq!(stub.extension().unwrap(), "txt");
}
