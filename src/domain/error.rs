//! Domain-level errors

use std::fmt;

use itertools::Itertools;
use thiserror::Error;

use crate::domain::document::Orientation;

/// Location of a node as the child indices walked from the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(pub Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "root")
        } else {
            write!(f, "root/{}", self.0.iter().join("/"))
        }
    }
}

/// Structural violations found by [`crate::validate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("empty {orientation} container at {path}")]
    EmptyContainer {
        orientation: Orientation,
        path: NodePath,
    },
}

pub type ValidationResult<T> = Result<T, ValidationError>;
