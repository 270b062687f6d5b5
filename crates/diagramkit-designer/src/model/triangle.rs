use serde::{Deserialize, Serialize};

use super::{Point, ShapeGeometry};

/// An equilateral triangle described by its side length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTriangle")]
pub struct DiagramTriangle {
    pub side_length: f64,
}

#[derive(Deserialize)]
struct RawTriangle {
    side_length: f64,
}

impl From<RawTriangle> for DiagramTriangle {
    fn from(raw: RawTriangle) -> Self {
        DiagramTriangle::new(raw.side_length)
    }
}

impl DiagramTriangle {
    /// Negative side lengths are clamped to zero.
    pub fn new(side_length: f64) -> Self {
        Self {
            side_length: side_length.max(0.0),
        }
    }

    /// Height of the equilateral triangle.
    pub fn height(&self) -> f64 {
        self.side_length * 3f64.sqrt() / 2.0
    }
}

impl ShapeGeometry for DiagramTriangle {
    fn area(&self) -> f64 {
        (3f64.sqrt() / 4.0) * self.side_length * self.side_length
    }

    fn perimeter(&self) -> f64 {
        3.0 * self.side_length
    }

    // Hit-testing uses a circle of radius side/2 around the position, not
    // the triangle outline.
    fn contains_point(&self, origin: Point, p: Point) -> bool {
        origin.distance_to(&p) <= self.side_length / 2.0
    }
}
