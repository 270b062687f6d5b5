//! Error handling for DiagramKit
//!
//! Provides the error types shared by every crate in the workspace:
//! - Designer errors (color decoding, format lookup, record decoding)
//! - I/O errors from export writes
//! - JSON errors from encoding and decoding
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Designer error type
///
/// Represents errors raised by the shape model and the exporters.
/// Geometry problems are never errors: constructors clamp and the
/// validator reports findings as data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignerError {
    /// A color reference could not be decoded to RGB
    #[error("Unknown color: {value}")]
    UnknownColor {
        /// The color reference that failed to decode.
        value: String,
    },

    /// An export format key is not one of the registered formats
    #[error("Unknown export format: {key}")]
    UnknownFormat {
        /// The requested format key.
        key: String,
    },

    /// A shape type tag is not one of the known variants
    #[error("Unknown shape type: {tag}")]
    UnknownShapeType {
        /// The unrecognised type tag.
        tag: String,
    },

    /// A decoded shape record lacks a field its variant requires
    #[error("Shape record '{name}' is missing field {field}")]
    MissingField {
        /// The name of the shape whose record is incomplete.
        name: String,
        /// The missing field.
        field: String,
    },

    /// An encoder failed to produce its output
    #[error("Encoding failed: {reason}")]
    Encoding {
        /// The reason the encoder failed.
        reason: String,
    },
}

/// Main error type for DiagramKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Designer error
    #[error(transparent)]
    Designer(#[from] DesignerError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an I/O error
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if this is a designer error
    pub fn is_designer_error(&self) -> bool {
        matches!(self, Error::Designer(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
