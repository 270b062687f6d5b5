//! Flat per-shape records shared by the exporters.
//!
//! A [`ShapeRecord`] is the field set written for every shape: variant tag,
//! name, position, the variant's own geometry, computed area, both colors
//! and the creation time. Exactly one of width/height, radius or side
//! length is present, matching the variant.

use chrono::{DateTime, Local};
use diagramkit_core::DesignerError;
use serde::{Deserialize, Serialize};

use crate::model::{
    Color, DiagramCircle, DiagramRectangle, DiagramShape, DiagramTriangle, Point, ShapeGeometry,
    ShapeHeader, ShapeKind, ShapeType, Size,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShapeRecord {
    #[serde(rename = "Type")]
    pub shape_type: ShapeType,
    pub name: String,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side_length: Option<f64>,
    pub area: f64,
    pub fill_color: String,
    pub border_color: String,
    pub created_at: DateTime<Local>,
}

impl ShapeRecord {
    fn base(shape_type: ShapeType, header: &ShapeHeader, area: f64) -> Self {
        Self {
            shape_type,
            name: header.name.clone(),
            x: header.position.x,
            y: header.position.y,
            width: None,
            height: None,
            radius: None,
            side_length: None,
            area,
            fill_color: header.fill_color.value().to_string(),
            border_color: header.border_color.value().to_string(),
            created_at: header.created_at,
        }
    }

    pub fn from_rectangle(header: &ShapeHeader, rect: &DiagramRectangle) -> Self {
        Self {
            width: Some(rect.width()),
            height: Some(rect.height()),
            ..Self::base(ShapeType::Rectangle, header, rect.area())
        }
    }

    pub fn from_circle(header: &ShapeHeader, circle: &DiagramCircle) -> Self {
        Self {
            radius: Some(circle.radius),
            ..Self::base(ShapeType::Circle, header, circle.area())
        }
    }

    pub fn from_triangle(header: &ShapeHeader, triangle: &DiagramTriangle) -> Self {
        Self {
            side_length: Some(triangle.side_length),
            ..Self::base(ShapeType::Triangle, header, triangle.area())
        }
    }

    pub fn from_shape(shape: &DiagramShape) -> Self {
        match &shape.kind {
            ShapeKind::Rectangle(rect) => Self::from_rectangle(&shape.header, rect),
            ShapeKind::Circle(circle) => Self::from_circle(&shape.header, circle),
            ShapeKind::Triangle(triangle) => Self::from_triangle(&shape.header, triangle),
        }
    }

    /// First numeric field holding NaN or an infinity, if any.
    ///
    /// JSON has no representation for these values.
    pub fn non_finite_field(&self) -> Option<&'static str> {
        let fields = [
            ("X", Some(self.x)),
            ("Y", Some(self.y)),
            ("Width", self.width),
            ("Height", self.height),
            ("Radius", self.radius),
            ("SideLength", self.side_length),
            ("Area", Some(self.area)),
        ];
        fields
            .into_iter()
            .find(|(_, value)| value.is_some_and(|v| !v.is_finite()))
            .map(|(field, _)| field)
    }

    /// Rebuilds the shape. The stored area is ignored; it is derived data.
    pub fn into_shape(self) -> Result<DiagramShape, DesignerError> {
        let kind = match self.shape_type {
            ShapeType::Rectangle => ShapeKind::Rectangle(DiagramRectangle::new(Size::new(
                self.require(self.width, "Width")?,
                self.require(self.height, "Height")?,
            ))),
            ShapeType::Circle => {
                ShapeKind::Circle(DiagramCircle::new(self.require(self.radius, "Radius")?))
            }
            ShapeType::Triangle => ShapeKind::Triangle(DiagramTriangle::new(
                self.require(self.side_length, "SideLength")?,
            )),
        };

        Ok(DiagramShape {
            header: ShapeHeader {
                position: Point::new(self.x, self.y),
                fill_color: Color::new(self.fill_color),
                border_color: Color::new(self.border_color),
                name: self.name,
                created_at: self.created_at,
            },
            kind,
        })
    }

    fn require(&self, value: Option<f64>, field: &str) -> Result<f64, DesignerError> {
        value.ok_or_else(|| DesignerError::MissingField {
            name: self.name.clone(),
            field: field.to_string(),
        })
    }
}

/// Parses a JSON export back into shapes.
pub fn shapes_from_json(json: &str) -> diagramkit_core::Result<Vec<DiagramShape>> {
    let records: Vec<ShapeRecord> = serde_json::from_str(json)?;
    records
        .into_iter()
        .map(|record| record.into_shape().map_err(Into::into))
        .collect()
}
