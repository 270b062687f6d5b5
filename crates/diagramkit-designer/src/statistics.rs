//! Aggregate statistics over a diagram.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::model::{
    DiagramCircle, DiagramRectangle, DiagramTriangle, ShapeGeometry, ShapeHeader, ShapeType,
};
use crate::visitor::ShapeVisitor;

/// Accumulates counts, totals and a fill color histogram.
///
/// State carries over between traversals until [`reset`](Self::reset) is
/// called; [`report`](Self::report) only reads it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeStatistics {
    pub rectangle_count: usize,
    pub circle_count: usize,
    pub triangle_count: usize,
    pub total_area: f64,
    pub total_perimeter: f64,
    pub color_counts: BTreeMap<String, usize>,
}

impl ShapeStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_shapes(&self) -> usize {
        self.rectangle_count + self.circle_count + self.triangle_count
    }

    pub fn count(&self, shape_type: ShapeType) -> usize {
        match shape_type {
            ShapeType::Rectangle => self.rectangle_count,
            ShapeType::Circle => self.circle_count,
            ShapeType::Triangle => self.triangle_count,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn record(&mut self, header: &ShapeHeader, geometry: &impl ShapeGeometry) {
        self.total_area += geometry.area();
        self.total_perimeter += geometry.perimeter();
        *self
            .color_counts
            .entry(header.fill_color.value().to_string())
            .or_insert(0) += 1;
    }

    pub fn report(&self) -> String {
        let mut report = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(report, "=== Diagram Statistics ===");
        let _ = writeln!(report, "Total shapes: {}", self.total_shapes());
        let _ = writeln!(report, "Rectangles: {}", self.rectangle_count);
        let _ = writeln!(report, "Circles: {}", self.circle_count);
        let _ = writeln!(report, "Triangles: {}", self.triangle_count);
        let _ = writeln!(report, "Total area: {:.2}", self.total_area);
        let _ = writeln!(report, "Total perimeter: {:.2}", self.total_perimeter);

        if !self.color_counts.is_empty() {
            let _ = writeln!(report, "\nColors:");
            for (color, count) in &self.color_counts {
                let _ = writeln!(report, "  {}: {}", color, count);
            }
        }

        report
    }
}

impl ShapeVisitor for ShapeStatistics {
    fn visit_rectangle(&mut self, header: &ShapeHeader, rect: &DiagramRectangle) {
        self.rectangle_count += 1;
        self.record(header, rect);
    }

    fn visit_circle(&mut self, header: &ShapeHeader, circle: &DiagramCircle) {
        self.circle_count += 1;
        self.record(header, circle);
    }

    fn visit_triangle(&mut self, header: &ShapeHeader, triangle: &DiagramTriangle) {
        self.triangle_count += 1;
        self.record(header, triangle);
    }
}
