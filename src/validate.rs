//! Structural well-formedness check.

use tracing::instrument;

use crate::domain::{Document, NodePath, ValidationError, ValidationResult};

/// Returns `doc` unchanged if every `Horiz` and `Vert` has at least one
/// child, otherwise the first empty container found depth-first, left to
/// right. Nothing is repaired or pruned.
#[instrument(
    level = "trace",
    skip_all,
    fields(orientation = ?doc.orientation(), children = doc.children().len())
)]
pub fn validate<A>(doc: Document<A>) -> ValidationResult<Document<A>> {
    match first_violation(&doc) {
        Some(err) => Err(err),
        None => Ok(doc),
    }
}

/// The error [`validate`] would report, without taking ownership.
pub fn first_violation<A>(doc: &Document<A>) -> Option<ValidationError> {
    let mut stack = vec![(doc, NodePath::root())];

    while let Some((node, path)) = stack.pop() {
        let Some((orientation, children)) = node.as_container() else {
            continue;
        };
        if children.is_empty() {
            return Some(ValidationError::EmptyContainer { orientation, path });
        }
        for (index, child) in children.iter().enumerate().rev() {
            stack.push((child, path.child(index)));
        }
    }

    None
}

impl<A> Document<A> {
    pub fn validate(self) -> ValidationResult<Self> {
        validate(self)
    }

    pub fn is_well_formed(&self) -> bool {
        first_violation(self).is_none()
    }
}
