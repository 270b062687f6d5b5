use diagramkit_designer::{
    traverse, Color, DiagramShape, DiagramValidator, IssueKind, Point, ShapeType, Size,
    ValidationSeverity,
};

fn circle(x: f64, y: f64, radius: f64, name: &str) -> DiagramShape {
    DiagramShape::circle(
        Point::new(x, y),
        radius,
        Color::default(),
        Color::default(),
        name,
    )
}

fn rect(width: f64, height: f64, name: &str) -> DiagramShape {
    DiagramShape::rectangle(
        Point::new(0.0, 0.0),
        Size::new(width, height),
        Color::default(),
        Color::default(),
        name,
    )
}

fn triangle(side_length: f64, name: &str) -> DiagramShape {
    DiagramShape::triangle(
        Point::new(0.0, 0.0),
        side_length,
        Color::default(),
        Color::default(),
        name,
    )
}

#[test]
fn test_zero_width_rectangle_is_error() {
    let shape = DiagramShape::rectangle(
        Point::new(10.0, 10.0),
        Size::new(0.0, 20.0),
        Color::default(),
        Color::default(),
        "flat",
    );
    let mut validator = DiagramValidator::new();
    shape.accept(&mut validator);

    assert_eq!(validator.errors.len(), 1);
    assert_eq!(validator.errors[0].kind, IssueKind::InvalidDimensions);
    assert_eq!(validator.errors[0].severity(), ValidationSeverity::Error);
    assert!(validator.warnings.is_empty());
}

#[test]
fn test_negative_position_is_warning() {
    let shape = circle(-5.0, -5.0, 10.0, "c");
    let mut validator = DiagramValidator::new();
    shape.accept(&mut validator);

    assert!(validator.errors.is_empty());
    assert_eq!(validator.warnings.len(), 1);
    assert_eq!(validator.warnings[0].kind, IssueKind::OutOfBounds);
    assert_eq!(validator.warnings[0].shape_type, ShapeType::Circle);
    assert_eq!(
        validator.warnings[0].to_string(),
        "Circle 'c' is partially out of bounds"
    );
}

#[test]
fn test_triangle_area_never_flagged() {
    let huge = triangle(1e6, "huge");
    let mut validator = DiagramValidator::new();
    huge.accept(&mut validator);
    assert!(validator.is_valid());
    assert_eq!(validator.report(), "Diagram is valid!");
}

#[test]
fn test_large_rectangle_and_circle_warn() {
    let shapes = vec![
        rect(101.0, 100.0, "r"),
        circle(0.0, 0.0, 57.0, "c"),
        rect(100.0, 100.0, "edge"),
    ];
    let mut validator = DiagramValidator::new();
    traverse(&shapes, &mut validator);

    let names: Vec<_> = validator
        .warnings
        .iter()
        .filter(|w| w.kind == IssueKind::TooLarge)
        .map(|w| w.shape_name.as_str())
        .collect();
    // Exactly 10000 is not above the threshold.
    assert_eq!(names, vec!["r", "c"]);
}

#[test]
fn test_non_positive_geometry_errors() {
    let shapes = vec![
        circle(0.0, 0.0, 0.0, "dot"),
        triangle(-3.0, "tri"),
    ];
    let mut validator = DiagramValidator::new();
    traverse(&shapes, &mut validator);

    let kinds: Vec<_> = validator.errors.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![IssueKind::InvalidRadius, IssueKind::InvalidSideLength]
    );
}

#[test]
fn test_accumulates_until_reset() {
    let shape = circle(-1.0, 0.0, 1.0, "c");
    let mut validator = DiagramValidator::new();
    shape.accept(&mut validator);
    shape.accept(&mut validator);
    assert_eq!(validator.warnings.len(), 2);

    validator.reset();
    assert!(validator.errors.is_empty() && validator.warnings.is_empty());
}
