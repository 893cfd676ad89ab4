//! Shared strategies for property tests.

#![allow(dead_code)]

use celltree::Document;
use proptest::prelude::*;

/// Arbitrary trees of small integers, including empty containers.
pub fn document_strategy() -> impl Strategy<Value = Document<i32>> {
    let leaf = (-100i32..100).prop_map(Document::Cell);
    leaf.prop_recursive(5, 96, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Document::Horiz),
            prop::collection::vec(inner, 0..5).prop_map(Document::Vert),
        ]
    })
}

/// Like [`document_strategy`] but every container has at least one child.
pub fn well_formed_strategy() -> impl Strategy<Value = Document<i32>> {
    let leaf = (-100i32..100).prop_map(Document::Cell);
    leaf.prop_recursive(5, 96, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..5).prop_map(Document::Horiz),
            prop::collection::vec(inner, 1..5).prop_map(Document::Vert),
        ]
    })
}
