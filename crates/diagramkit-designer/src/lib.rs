//! # DiagramKit Designer
//!
//! The shape model of a small diagram editor and the operations that run
//! over it.
//!
//! ## Core Components
//!
//! - **Model**: points, sizes, named colors and the closed set of shape
//!   variants (rectangle, circle, equilateral triangle)
//! - **Visitor**: per-variant double dispatch used by every operation
//! - **Statistics**: counts, total area and perimeter, color histogram
//! - **Validation**: geometry errors and placement/size warnings
//! - **Export**: JSON, XML, CSV and a text stand-in for PDF
//! - **Diagram**: the editing session that owns the shape collection
//!
//! ## Architecture
//!
//! ```text
//! Diagram (session)
//!   ├── DiagramShape (ShapeHeader + ShapeKind)
//!   ├── ShapeStatistics ─┐
//!   ├── DiagramValidator ├── ShapeVisitor
//!   └── FileAdapter ─────┘   (JSON / XML / CSV / PDF stub)
//! ```
//!
//! The variant set is closed on purpose: a new operation is a new
//! [`ShapeVisitor`], but a new variant means touching every visitor.
//!
//! ## Usage
//!
//! ```rust
//! use diagramkit_designer::{Diagram, Point};
//!
//! let mut diagram = Diagram::new();
//! diagram.add_rectangle();
//! diagram.add_circle();
//!
//! if diagram.select_at(Point::new(100.0, 100.0)).is_some() {
//!     diagram.duplicate_selected();
//! }
//!
//! println!("{}", diagram.statistics_report());
//! ```

pub mod diagram;
pub mod export;
pub mod model;
pub mod serialization;
pub mod statistics;
pub mod validation;
pub mod visitor;

pub use diagram::{Diagram, PlacementDefaults};
pub use export::{
    timestamped_filename, CsvFileAdapter, ExportFormat, FileAdapter, JsonFileAdapter,
    PdfStubAdapter, XmlFileAdapter,
};
pub use model::{
    Color, DiagramCircle, DiagramRectangle, DiagramShape, DiagramTriangle, Point, Rgb,
    ShapeGeometry, ShapeHeader, ShapeKind, ShapeType, Size,
};
pub use serialization::{shapes_from_json, ShapeRecord};
pub use statistics::ShapeStatistics;
pub use validation::{DiagramValidator, IssueKind, ValidationIssue, ValidationSeverity};
pub use visitor::{traverse, ShapeVisitor};
