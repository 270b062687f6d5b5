use std::f64::consts::PI;

use diagramkit_designer::{Color, DiagramShape, Point, ShapeKind, ShapeType, Size};
use proptest::prelude::*;

fn rect(w: f64, h: f64) -> DiagramShape {
    DiagramShape::rectangle(
        Point::new(0.0, 0.0),
        Size::new(w, h),
        Color::new("Blue"),
        Color::new("DarkBlue"),
        "r",
    )
}

fn circle(radius: f64) -> DiagramShape {
    DiagramShape::circle(
        Point::new(0.0, 0.0),
        radius,
        Color::default(),
        Color::default(),
        "c",
    )
}

fn triangle_at(position: Point, side_length: f64, name: &str) -> DiagramShape {
    DiagramShape::triangle(
        position,
        side_length,
        Color::new("Green"),
        Color::new("Black"),
        name,
    )
}

#[test]
fn test_area_formulas() {
    assert!((rect(80.0, 60.0).area() - 4800.0).abs() < 1e-9);

    let c = circle(40.0);
    assert!((c.area() - PI * 1600.0).abs() < 1e-9);
    assert!((c.perimeter() - 80.0 * PI).abs() < 1e-9);

    let tri = triangle_at(Point::new(0.0, 0.0), 60.0, "t");
    assert!((tri.area() - 3f64.sqrt() / 4.0 * 3600.0).abs() < 1e-9);
    assert_eq!(tri.perimeter(), 180.0);
}

#[test]
fn test_negative_magnitudes_clamp_to_zero() {
    let r = rect(-5.0, -1.0);
    assert_eq!(r.area(), 0.0);

    match circle(-2.0).kind {
        ShapeKind::Circle(circle) => assert_eq!(circle.radius, 0.0),
        other => panic!("unexpected variant {:?}", other),
    }
}

#[test]
fn test_deserialized_shape_keeps_magnitudes_non_negative() {
    let mut value = serde_json::to_value(circle(5.0)).unwrap();
    value["kind"]["Circle"]["radius"] = serde_json::json!(-5.0);
    let loaded: DiagramShape = serde_json::from_value(value).unwrap();
    assert_eq!(loaded.area(), 0.0);
    assert_eq!(loaded.perimeter(), 0.0);

    let mut value = serde_json::to_value(rect(10.0, 20.0)).unwrap();
    value["kind"]["Rectangle"]["size"]["width"] = serde_json::json!(-3.0);
    let loaded: DiagramShape = serde_json::from_value(value).unwrap();
    assert_eq!(loaded.area(), 0.0);
    assert_eq!(loaded.perimeter(), 40.0);
}

#[test]
fn test_triangle_containment_uses_half_side_radius() {
    let tri = DiagramShape::triangle(
        Point::new(100.0, 100.0),
        60.0,
        Color::new("Green"),
        Color::new("DarkGreen"),
        "Triangle_1",
    );
    assert!(tri.contains_point(Point::new(100.0, 100.0)));
    assert!(!tri.contains_point(Point::new(1100.0, 100.0)));
    // A base corner of the drawn outline lies outside the hit circle.
    assert!(!tri.contains_point(Point::new(70.0, 126.0)));
}

#[test]
fn test_rectangle_containment_is_inclusive() {
    let r = DiagramShape::rectangle(
        Point::new(10.0, 20.0),
        Size::new(30.0, 40.0),
        Color::default(),
        Color::default(),
        "r",
    );
    assert!(r.contains_point(Point::new(10.0, 20.0)));
    assert!(r.contains_point(Point::new(40.0, 60.0)));
    assert!(!r.contains_point(Point::new(40.1, 60.0)));
}

#[test]
fn test_duplicate_each_variant() {
    let shapes = vec![
        rect(10.0, 20.0),
        DiagramShape::circle(
            Point::new(5.0, 5.0),
            3.0,
            Color::new("Red"),
            Color::new("DarkRed"),
            "c",
        ),
        triangle_at(Point::new(-5.0, 2.0), 9.0, "t"),
    ];

    for shape in &shapes {
        let copy = shape.duplicate();
        assert_eq!(copy.shape_type(), shape.shape_type());
        assert_eq!(copy.kind, shape.kind);
        assert_eq!(copy.header.fill_color, shape.header.fill_color);
        assert_eq!(copy.header.border_color, shape.header.border_color);
        assert_eq!(copy.position(), shape.position().offset(20.0, 20.0));
        assert_eq!(copy.name(), format!("{}_Copy", shape.name()));
    }
    assert_eq!(shapes[2].duplicate().shape_type(), ShapeType::Triangle);
}

proptest! {
    #[test]
    fn prop_duplicate_only_moves_and_renames(
        x in -1e6f64..1e6,
        y in -1e6f64..1e6,
        side in 0f64..1e4,
    ) {
        let source = triangle_at(Point::new(x, y), side, "shape");
        let before = source.clone();
        let copy = source.duplicate();

        prop_assert_eq!(&source, &before);
        prop_assert_eq!(&copy.kind, &source.kind);
        prop_assert_eq!(copy.position(), Point::new(x + 20.0, y + 20.0));
        prop_assert_eq!(copy.name(), "shape_Copy");
    }

    #[test]
    fn prop_rectangle_area(w in 0f64..1e4, h in 0f64..1e4) {
        prop_assert!((rect(w, h).area() - w * h).abs() < 1e-9);
    }
}
