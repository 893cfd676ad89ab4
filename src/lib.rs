//! Immutable cell-layout documents.
//!
//! A [`Document`] is a tree of cells subdivided horizontally or vertically.
//! Everything here is a pure function from trees to new values:
//!
//! - [`traverse_m`] walks a tree inside an [`Effect`] context
//!   ([`Identity`], [`Optional`], [`Fallible`], [`Journal`]).
//! - [`cata`], [`ana`], [`hylo`] and [`para`] are the structural folds and
//!   unfolds, with [`count_cells`], [`max_depth`], [`flatten`] and
//!   [`map_cells`] built on top.
//! - [`validate`] rejects empty containers, which construction allows.

pub mod domain;
pub mod effect;
pub mod folds;
pub mod samples;
pub mod schemes;
pub mod traverse;
pub mod tree_traits;
pub mod util;
pub mod validate;

pub use domain::{
    Document, Layer, Node, NodePath, Orientation, ValidationError, ValidationResult,
};
pub use effect::{Effect, Fallible, Identity, Journal, Logged, Optional};
pub use folds::{
    count_cells, count_containers, flatten, leaves, map_cells, map_cells_par, max_depth,
    orientation_changes, EMPTY_CONTAINER_DEPTH,
};
pub use schemes::{ana, cata, hylo, para};
pub use traverse::{traverse_logged, traverse_m, traverse_option, traverse_result};
pub use tree_traits::DocumentConvert;
pub use validate::{first_violation, validate};
