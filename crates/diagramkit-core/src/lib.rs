//! # DiagramKit Core
//!
//! Core types shared by the DiagramKit crates.
//! Provides the unified error taxonomy and result alias.

pub mod error;

pub use error::{DesignerError, Error, Result};
