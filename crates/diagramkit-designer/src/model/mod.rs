//! Shape model for diagrams.
//!
//! Every shape carries a [`ShapeHeader`] (position, colors, name, creation
//! time) and one variant payload from the closed set in [`ShapeKind`].
//! Operations over shapes are written as exhaustive matches or as
//! [`ShapeVisitor`](crate::visitor::ShapeVisitor) implementations, so adding
//! an operation never touches the shape types while adding a variant
//! touches every operation.

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

mod circle;
mod color;
mod rectangle;
mod triangle;

pub use circle::DiagramCircle;
pub use color::{Color, Rgb, DEFAULT_COLOR};
pub use rectangle::DiagramRectangle;
pub use triangle::DiagramTriangle;

/// Offset applied to the position of a duplicated shape.
pub const DUPLICATE_OFFSET: (f64, f64) = (20.0, 20.0);

/// Suffix appended to the name of a duplicated shape.
pub const COPY_SUFFIX: &str = "_Copy";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns a new point moved by `(dx, dy)`.
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Width and height, both clamped to be non-negative.
///
/// Deserialization goes through [`Size::new`], so the clamp holds for
/// loaded values too.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSize")]
pub struct Size {
    width: f64,
    height: f64,
}

#[derive(Deserialize)]
struct RawSize {
    width: f64,
    height: f64,
}

impl From<RawSize> for Size {
    fn from(raw: RawSize) -> Self {
        Size::new(raw.width, raw.height)
    }
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    pub fn is_square(&self) -> bool {
        (self.width - self.height).abs() < 0.01
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}x{:.1}", self.width, self.height)
    }
}

/// Geometry every shape variant provides.
///
/// `origin` is the shape's position; the variant payload itself is
/// position-free so it can be shared between a shape and its duplicates.
pub trait ShapeGeometry {
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
    fn contains_point(&self, origin: Point, p: Point) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShapeType {
    Rectangle,
    Circle,
    Triangle,
}

impl ShapeType {
    pub const ALL: [ShapeType; 3] = [ShapeType::Rectangle, ShapeType::Circle, ShapeType::Triangle];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeType::Rectangle => "Rectangle",
            ShapeType::Circle => "Circle",
            ShapeType::Triangle => "Triangle",
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ShapeType {
    type Err = diagramkit_core::DesignerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| diagramkit_core::DesignerError::UnknownShapeType { tag: s.to_string() })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle(DiagramRectangle),
    Circle(DiagramCircle),
    Triangle(DiagramTriangle),
}

impl ShapeGeometry for ShapeKind {
    fn area(&self) -> f64 {
        match self {
            ShapeKind::Rectangle(s) => s.area(),
            ShapeKind::Circle(s) => s.area(),
            ShapeKind::Triangle(s) => s.area(),
        }
    }

    fn perimeter(&self) -> f64 {
        match self {
            ShapeKind::Rectangle(s) => s.perimeter(),
            ShapeKind::Circle(s) => s.perimeter(),
            ShapeKind::Triangle(s) => s.perimeter(),
        }
    }

    fn contains_point(&self, origin: Point, p: Point) -> bool {
        match self {
            ShapeKind::Rectangle(s) => s.contains_point(origin, p),
            ShapeKind::Circle(s) => s.contains_point(origin, p),
            ShapeKind::Triangle(s) => s.contains_point(origin, p),
        }
    }
}

impl ShapeKind {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            ShapeKind::Rectangle(_) => ShapeType::Rectangle,
            ShapeKind::Circle(_) => ShapeType::Circle,
            ShapeKind::Triangle(_) => ShapeType::Triangle,
        }
    }
}

/// Identity and style fields shared by every variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeHeader {
    pub position: Point,
    pub fill_color: Color,
    pub border_color: Color,
    pub name: String,
    pub created_at: DateTime<Local>,
}

/// A shape placed on a diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramShape {
    pub header: ShapeHeader,
    pub kind: ShapeKind,
}

impl DiagramShape {
    /// Creates a shape stamped with the current time.
    ///
    /// An empty name falls back to the variant name.
    pub fn new(
        kind: ShapeKind,
        position: Point,
        fill_color: Color,
        border_color: Color,
        name: impl Into<String>,
    ) -> Self {
        let mut name = name.into();
        if name.is_empty() {
            name = kind.shape_type().to_string();
        }
        Self {
            header: ShapeHeader {
                position,
                fill_color,
                border_color,
                name,
                created_at: Local::now(),
            },
            kind,
        }
    }

    pub fn rectangle(
        position: Point,
        size: Size,
        fill_color: Color,
        border_color: Color,
        name: impl Into<String>,
    ) -> Self {
        Self::new(
            ShapeKind::Rectangle(DiagramRectangle::new(size)),
            position,
            fill_color,
            border_color,
            name,
        )
    }

    pub fn circle(
        position: Point,
        radius: f64,
        fill_color: Color,
        border_color: Color,
        name: impl Into<String>,
    ) -> Self {
        Self::new(
            ShapeKind::Circle(DiagramCircle::new(radius)),
            position,
            fill_color,
            border_color,
            name,
        )
    }

    pub fn triangle(
        position: Point,
        side_length: f64,
        fill_color: Color,
        border_color: Color,
        name: impl Into<String>,
    ) -> Self {
        Self::new(
            ShapeKind::Triangle(DiagramTriangle::new(side_length)),
            position,
            fill_color,
            border_color,
            name,
        )
    }

    pub fn shape_type(&self) -> ShapeType {
        self.kind.shape_type()
    }

    pub fn name(&self) -> &str {
        &self.header.name
    }

    pub fn position(&self) -> Point {
        self.header.position
    }

    pub fn area(&self) -> f64 {
        self.kind.area()
    }

    pub fn perimeter(&self) -> f64 {
        self.kind.perimeter()
    }

    pub fn contains_point(&self, p: Point) -> bool {
        self.kind.contains_point(self.header.position, p)
    }

    /// Returns a same-variant copy offset by [`DUPLICATE_OFFSET`], named with
    /// [`COPY_SUFFIX`] and stamped with a fresh creation time.
    pub fn duplicate(&self) -> DiagramShape {
        let (dx, dy) = DUPLICATE_OFFSET;
        DiagramShape {
            header: ShapeHeader {
                position: self.header.position.offset(dx, dy),
                fill_color: self.header.fill_color.clone(),
                border_color: self.header.border_color.clone(),
                name: format!("{}{}", self.header.name, COPY_SUFFIX),
                created_at: Local::now(),
            },
            kind: self.kind.clone(),
        }
    }
}
