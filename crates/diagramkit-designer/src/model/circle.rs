use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::{Point, ShapeGeometry};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawCircle")]
pub struct DiagramCircle {
    pub radius: f64,
}

#[derive(Deserialize)]
struct RawCircle {
    radius: f64,
}

impl From<RawCircle> for DiagramCircle {
    fn from(raw: RawCircle) -> Self {
        DiagramCircle::new(raw.radius)
    }
}

impl DiagramCircle {
    /// Negative radii are clamped to zero.
    pub fn new(radius: f64) -> Self {
        Self {
            radius: radius.max(0.0),
        }
    }
}

impl ShapeGeometry for DiagramCircle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    // `origin` is the center.
    fn contains_point(&self, origin: Point, p: Point) -> bool {
        origin.distance_to(&p) <= self.radius
    }
}
