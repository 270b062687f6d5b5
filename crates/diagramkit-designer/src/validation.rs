//! Geometry and placement checks for diagrams.
//!
//! Findings are collected as data. Errors are hard geometry violations
//! (non-positive dimensions); warnings are soft placement or size issues.

use std::fmt::{self, Write};

use crate::model::{
    DiagramCircle, DiagramRectangle, DiagramTriangle, ShapeGeometry, ShapeHeader, ShapeType,
};
use crate::visitor::ShapeVisitor;

/// Area above which rectangles and circles are reported as very large.
pub const LARGE_AREA_THRESHOLD: f64 = 10_000.0;

/// Report text for a diagram with no findings.
pub const VALID_REPORT: &str = "Diagram is valid!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// Width or height is zero or negative.
    InvalidDimensions,
    /// Radius is zero or negative.
    InvalidRadius,
    /// Side length is zero or negative.
    InvalidSideLength,
    /// The position has a negative coordinate.
    OutOfBounds,
    /// The area exceeds [`LARGE_AREA_THRESHOLD`].
    TooLarge,
}

impl IssueKind {
    pub fn severity(&self) -> ValidationSeverity {
        match self {
            IssueKind::InvalidDimensions
            | IssueKind::InvalidRadius
            | IssueKind::InvalidSideLength => ValidationSeverity::Error,
            IssueKind::OutOfBounds | IssueKind::TooLarge => ValidationSeverity::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub shape_type: ShapeType,
    pub shape_name: String,
    pub kind: IssueKind,
}

impl ValidationIssue {
    pub fn severity(&self) -> ValidationSeverity {
        self.kind.severity()
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let problem = match self.kind {
            IssueKind::InvalidDimensions => "has invalid dimensions",
            IssueKind::InvalidRadius => "has an invalid radius",
            IssueKind::InvalidSideLength => "has an invalid side length",
            IssueKind::OutOfBounds => "is partially out of bounds",
            IssueKind::TooLarge => "is very large",
        };
        write!(f, "{} '{}' {}", self.shape_type, self.shape_name, problem)
    }
}

/// Collects errors and warnings across traversals until reset.
#[derive(Debug, Clone, Default)]
pub struct DiagramValidator {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl DiagramValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn reset(&mut self) {
        self.errors.clear();
        self.warnings.clear();
    }

    fn push(&mut self, shape_type: ShapeType, header: &ShapeHeader, kind: IssueKind) {
        let issue = ValidationIssue {
            shape_type,
            shape_name: header.name.clone(),
            kind,
        };
        match issue.severity() {
            ValidationSeverity::Error => self.errors.push(issue),
            ValidationSeverity::Warning => self.warnings.push(issue),
        }
    }

    fn check_position(&mut self, shape_type: ShapeType, header: &ShapeHeader) {
        if header.position.x < 0.0 || header.position.y < 0.0 {
            self.push(shape_type, header, IssueKind::OutOfBounds);
        }
    }

    pub fn report(&self) -> String {
        if self.is_valid() {
            return VALID_REPORT.to_string();
        }

        let mut report = String::new();
        if !self.errors.is_empty() {
            let _ = writeln!(report, "Errors ({}):", self.errors.len());
            for error in &self.errors {
                let _ = writeln!(report, "  ❌ {}", error);
            }
        }
        if !self.warnings.is_empty() {
            let _ = writeln!(report, "Warnings ({}):", self.warnings.len());
            for warning in &self.warnings {
                let _ = writeln!(report, "  ⚠️ {}", warning);
            }
        }
        report
    }
}

impl ShapeVisitor for DiagramValidator {
    fn visit_rectangle(&mut self, header: &ShapeHeader, rect: &DiagramRectangle) {
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            self.push(ShapeType::Rectangle, header, IssueKind::InvalidDimensions);
        }
        self.check_position(ShapeType::Rectangle, header);
        if rect.area() > LARGE_AREA_THRESHOLD {
            self.push(ShapeType::Rectangle, header, IssueKind::TooLarge);
        }
    }

    fn visit_circle(&mut self, header: &ShapeHeader, circle: &DiagramCircle) {
        if circle.radius <= 0.0 {
            self.push(ShapeType::Circle, header, IssueKind::InvalidRadius);
        }
        self.check_position(ShapeType::Circle, header);
        if circle.area() > LARGE_AREA_THRESHOLD {
            self.push(ShapeType::Circle, header, IssueKind::TooLarge);
        }
    }

    // Triangles are never checked for size.
    fn visit_triangle(&mut self, header: &ShapeHeader, triangle: &DiagramTriangle) {
        if triangle.side_length <= 0.0 {
            self.push(ShapeType::Triangle, header, IssueKind::InvalidSideLength);
        }
        self.check_position(ShapeType::Triangle, header);
    }
}
