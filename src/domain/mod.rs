//! Domain layer: the document tree and its errors
//!
//! This layer is independent of effect contexts and folds.

pub mod document;
pub mod error;
pub mod layer;

pub use document::{Document, Node, Orientation};
pub use error::{NodePath, ValidationError, ValidationResult};
pub use layer::Layer;
