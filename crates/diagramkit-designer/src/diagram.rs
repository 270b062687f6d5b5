//! Diagram session: the ordered shape collection an editor works on.
//!
//! The session owns the shapes, the current selection, the placement
//! counter used to stagger new shapes, and the statistics and validation
//! collectors. Callers check preconditions (such as "something is
//! selected") through the `Option` return values.

use std::path::{Path, PathBuf};

use chrono::Local;
use diagramkit_core::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::export::{timestamped_filename, ExportFormat};
use crate::model::{Color, DiagramShape, Point, ShapeType, Size};
use crate::statistics::ShapeStatistics;
use crate::validation::DiagramValidator;
use crate::visitor::traverse;

/// Where and how new shapes are placed.
///
/// The n-th shape added lands at `origin + (n * step, n * step)` for its
/// variant's origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementDefaults {
    pub step: f64,
    pub rectangle_origin: Point,
    pub circle_origin: Point,
    pub triangle_origin: Point,
    pub rectangle_size: Size,
    pub circle_radius: f64,
    pub triangle_side: f64,
    pub rectangle_colors: (Color, Color),
    pub circle_colors: (Color, Color),
    pub triangle_colors: (Color, Color),
}

impl Default for PlacementDefaults {
    fn default() -> Self {
        Self {
            step: 20.0,
            rectangle_origin: Point::new(50.0, 50.0),
            circle_origin: Point::new(200.0, 50.0),
            triangle_origin: Point::new(350.0, 50.0),
            rectangle_size: Size::new(80.0, 60.0),
            circle_radius: 40.0,
            triangle_side: 60.0,
            rectangle_colors: (Color::new("Blue"), Color::new("DarkBlue")),
            circle_colors: (Color::new("Red"), Color::new("DarkRed")),
            triangle_colors: (Color::new("Green"), Color::new("DarkGreen")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Diagram {
    shapes: Vec<DiagramShape>,
    selected: Option<usize>,
    shape_counter: u32,
    placement: PlacementDefaults,
    statistics: ShapeStatistics,
    validator: DiagramValidator,
}

impl Default for Diagram {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagram {
    pub fn new() -> Self {
        Self::with_placement(PlacementDefaults::default())
    }

    pub fn with_placement(placement: PlacementDefaults) -> Self {
        Self {
            shapes: Vec::new(),
            selected: None,
            shape_counter: 1,
            placement,
            statistics: ShapeStatistics::new(),
            validator: DiagramValidator::new(),
        }
    }

    pub fn shapes(&self) -> &[DiagramShape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Counter used for the next default name and placement.
    pub fn shape_counter(&self) -> u32 {
        self.shape_counter
    }

    pub fn placement(&self) -> &PlacementDefaults {
        &self.placement
    }

    /// Appends a shape and returns its index.
    pub fn add_shape(&mut self, shape: DiagramShape) -> usize {
        debug!("Adding {} '{}'", shape.shape_type(), shape.name());
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    fn next_position(&self, origin: Point) -> Point {
        let shift = self.shape_counter as f64 * self.placement.step;
        origin.offset(shift, shift)
    }

    fn next_name(&self, shape_type: ShapeType) -> String {
        format!("{}_{}", shape_type, self.shape_counter)
    }

    /// Adds a rectangle with the default size and colors at the next staggered position.
    pub fn add_rectangle(&mut self) -> usize {
        let (fill, border) = self.placement.rectangle_colors.clone();
        let shape = DiagramShape::rectangle(
            self.next_position(self.placement.rectangle_origin),
            self.placement.rectangle_size,
            fill,
            border,
            self.next_name(ShapeType::Rectangle),
        );
        self.shape_counter += 1;
        self.add_shape(shape)
    }

    pub fn add_circle(&mut self) -> usize {
        let (fill, border) = self.placement.circle_colors.clone();
        let shape = DiagramShape::circle(
            self.next_position(self.placement.circle_origin),
            self.placement.circle_radius,
            fill,
            border,
            self.next_name(ShapeType::Circle),
        );
        self.shape_counter += 1;
        self.add_shape(shape)
    }

    pub fn add_triangle(&mut self) -> usize {
        let (fill, border) = self.placement.triangle_colors.clone();
        let shape = DiagramShape::triangle(
            self.next_position(self.placement.triangle_origin),
            self.placement.triangle_side,
            fill,
            border,
            self.next_name(ShapeType::Triangle),
        );
        self.shape_counter += 1;
        self.add_shape(shape)
    }

    pub fn add(&mut self, shape_type: ShapeType) -> usize {
        match shape_type {
            ShapeType::Rectangle => self.add_rectangle(),
            ShapeType::Circle => self.add_circle(),
            ShapeType::Triangle => self.add_triangle(),
        }
    }

    /// Selects the topmost (most recently added) shape containing `point`.
    ///
    /// Clears the selection when nothing is hit.
    pub fn select_at(&mut self, point: Point) -> Option<usize> {
        self.selected = self.shapes.iter().rposition(|s| s.contains_point(point));
        self.selected
    }

    pub fn select(&mut self, index: usize) -> Option<&DiagramShape> {
        self.selected = (index < self.shapes.len()).then_some(index);
        self.selected_shape()
    }

    pub fn selected_shape(&self) -> Option<&DiagramShape> {
        self.selected.and_then(|i| self.shapes.get(i))
    }

    /// Appends a duplicate of the selected shape. Returns `None` when nothing is selected.
    pub fn duplicate_selected(&mut self) -> Option<usize> {
        let copy = self.selected_shape()?.duplicate();
        info!(
            "Duplicated '{}' as '{}'",
            self.selected_shape()?.name(),
            copy.name()
        );
        self.shape_counter += 1;
        Some(self.add_shape(copy))
    }

    /// Removes every shape, drops the selection and restarts the counter.
    pub fn clear(&mut self) {
        debug!("Clearing {} shapes", self.shapes.len());
        self.shapes.clear();
        self.selected = None;
        self.shape_counter = 1;
    }

    /// Recomputes statistics over the current shapes and returns the report.
    pub fn statistics_report(&mut self) -> String {
        self.statistics.reset();
        traverse(&self.shapes, &mut self.statistics);
        self.statistics.report()
    }

    pub fn statistics(&self) -> &ShapeStatistics {
        &self.statistics
    }

    /// Revalidates the current shapes and returns the report.
    pub fn validation_report(&mut self) -> String {
        self.validator.reset();
        traverse(&self.shapes, &mut self.validator);
        self.validator.report()
    }

    pub fn validator(&self) -> &DiagramValidator {
        &self.validator
    }

    /// Exports into `directory` under a timestamped name and returns the path written.
    pub fn export(&self, format: ExportFormat, directory: &Path, prefix: &str) -> Result<PathBuf> {
        let filename = timestamped_filename(prefix, format, Local::now());
        format
            .adapter()
            .save(&self.shapes, &directory.join(filename))
    }
}
