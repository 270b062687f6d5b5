//! Double dispatch over the closed set of shape variants.
//!
//! A [`ShapeVisitor`] gets one callback per variant. [`DiagramShape::accept`]
//! routes each shape to the callback for its own variant, so statistics,
//! validation and the exporters live outside the shape types.

use crate::model::{
    DiagramCircle, DiagramRectangle, DiagramShape, DiagramTriangle, ShapeHeader, ShapeKind,
};

pub trait ShapeVisitor {
    fn visit_rectangle(&mut self, header: &ShapeHeader, rect: &DiagramRectangle);
    fn visit_circle(&mut self, header: &ShapeHeader, circle: &DiagramCircle);
    fn visit_triangle(&mut self, header: &ShapeHeader, triangle: &DiagramTriangle);
}

impl DiagramShape {
    pub fn accept<V: ShapeVisitor + ?Sized>(&self, visitor: &mut V) {
        match &self.kind {
            ShapeKind::Rectangle(rect) => visitor.visit_rectangle(&self.header, rect),
            ShapeKind::Circle(circle) => visitor.visit_circle(&self.header, circle),
            ShapeKind::Triangle(triangle) => visitor.visit_triangle(&self.header, triangle),
        }
    }
}

/// Visits `shapes` in order.
pub fn traverse<'a, I, V>(shapes: I, visitor: &mut V)
where
    I: IntoIterator<Item = &'a DiagramShape>,
    V: ShapeVisitor + ?Sized,
{
    for shape in shapes {
        shape.accept(visitor);
    }
}
