use serde::{Deserialize, Serialize};

use super::{Point, ShapeGeometry, Size};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramRectangle {
    pub size: Size,
}

impl DiagramRectangle {
    pub fn new(size: Size) -> Self {
        Self { size }
    }

    pub fn width(&self) -> f64 {
        self.size.width()
    }

    pub fn height(&self) -> f64 {
        self.size.height()
    }
}

impl ShapeGeometry for DiagramRectangle {
    fn area(&self) -> f64 {
        self.size.area()
    }

    fn perimeter(&self) -> f64 {
        self.size.perimeter()
    }

    // Bounds are inclusive on every edge; `origin` is the top-left corner.
    fn contains_point(&self, origin: Point, p: Point) -> bool {
        p.x >= origin.x
            && p.x <= origin.x + self.size.width()
            && p.y >= origin.y
            && p.y <= origin.y + self.size.height()
    }
}
