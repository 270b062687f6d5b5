use diagramkit_designer::{traverse, Color, DiagramShape, Point, ShapeStatistics, ShapeType, Size};

fn sample_shapes() -> Vec<DiagramShape> {
    vec![
        DiagramShape::rectangle(
            Point::new(70.0, 70.0),
            Size::new(80.0, 60.0),
            Color::new("Blue"),
            Color::new("DarkBlue"),
            "Rectangle_1",
        ),
        DiagramShape::circle(
            Point::new(240.0, 90.0),
            40.0,
            Color::new("Red"),
            Color::new("DarkRed"),
            "Circle_2",
        ),
        DiagramShape::triangle(
            Point::new(410.0, 110.0),
            60.0,
            Color::new("Green"),
            Color::new("DarkGreen"),
            "Triangle_3",
        ),
    ]
}

#[test]
fn test_statistics_over_one_of_each() {
    let mut stats = ShapeStatistics::new();
    traverse(&sample_shapes(), &mut stats);

    assert_eq!(stats.count(ShapeType::Rectangle), 1);
    assert_eq!(stats.count(ShapeType::Circle), 1);
    assert_eq!(stats.count(ShapeType::Triangle), 1);
    assert!((stats.total_area - 11385.40).abs() < 0.01);
    assert_eq!(stats.color_counts.len(), 3);
}

#[test]
fn test_reset_then_empty_traversal() {
    let mut stats = ShapeStatistics::new();
    traverse(&sample_shapes(), &mut stats);
    stats.reset();
    traverse(&Vec::new(), &mut stats);

    assert_eq!(stats.total_shapes(), 0);
    assert_eq!(stats.total_area, 0.0);
    assert_eq!(stats.total_perimeter, 0.0);
    assert!(stats.color_counts.is_empty());
}

#[test]
fn test_report_layout() {
    let mut stats = ShapeStatistics::new();
    traverse(&sample_shapes(), &mut stats);

    let expected = format!(
        "=== Diagram Statistics ===\n\
         Total shapes: 3\n\
         Rectangles: 1\n\
         Circles: 1\n\
         Triangles: 1\n\
         Total area: 11385.39\n\
         Total perimeter: {:.2}\n\
         \n\
         Colors:\n  Blue: 1\n  Green: 1\n  Red: 1\n",
        280.0 + 80.0 * std::f64::consts::PI + 180.0
    );
    assert_eq!(stats.report(), expected);
    // Reporting twice gives the same text.
    assert_eq!(stats.report(), expected);
}
