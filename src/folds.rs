//! Concrete folds built on the recursion schemes.

use rayon::prelude::*;
use tracing::instrument;

use crate::domain::{Document, Layer};
use crate::schemes::{cata, para};

/// Depth of a container with no children.
///
/// A `Cell` has depth 1 and a non-empty container is one deeper than its
/// deepest child. An empty container contributes no level at all.
pub const EMPTY_CONTAINER_DEPTH: usize = 0;

/// Number of leaves.
#[instrument(level = "trace", skip_all, fields(orientation = ?doc.orientation()))]
pub fn count_cells<A>(doc: &Document<A>) -> usize {
    cata(doc, |_| 1, |layer| layer.children.into_iter().sum())
}

/// Number of `Horiz` and `Vert` nodes.
pub fn count_containers<A>(doc: &Document<A>) -> usize {
    cata(doc, |_| 0, |layer| 1 + layer.children.into_iter().sum::<usize>())
}

/// Longest root-to-leaf path, counting nodes. See [`EMPTY_CONTAINER_DEPTH`].
#[instrument(level = "trace", skip_all, fields(orientation = ?doc.orientation()))]
pub fn max_depth<A>(doc: &Document<A>) -> usize {
    cata(doc, |_| 1, depth_algebra)
}

fn depth_algebra(layer: Layer<usize>) -> usize {
    layer
        .children
        .into_iter()
        .max()
        .map_or(EMPTY_CONTAINER_DEPTH, |deepest| deepest + 1)
}

/// Leaf values in traversal order.
#[instrument(level = "trace", skip_all, fields(orientation = ?doc.orientation()))]
pub fn flatten<A: Clone>(doc: &Document<A>) -> Vec<A> {
    leaves(doc).into_iter().cloned().collect()
}

/// References to the leaf values in traversal order.
pub fn leaves<A>(doc: &Document<A>) -> Vec<&A> {
    cata(doc, |value| vec![value], |layer| layer.children.concat())
}

/// Applies a pure function to every leaf, keeping the shape.
#[instrument(level = "trace", skip_all, fields(orientation = ?doc.orientation()))]
pub fn map_cells<A, B, F>(doc: &Document<A>, mut f: F) -> Document<B>
where
    F: FnMut(&A) -> B,
{
    cata(doc, |value| Document::Cell(f(value)), Layer::into_document)
}

/// [`map_cells`] with sibling subtrees mapped on the rayon pool.
///
/// `f` must be free of observable effects since calls are not ordered. The
/// result keeps the input's child order.
#[instrument(level = "trace", skip_all, fields(orientation = ?doc.orientation()))]
pub fn map_cells_par<A, B, F>(doc: &Document<A>, f: F) -> Document<B>
where
    A: Sync,
    B: Send,
    F: Fn(&A) -> B + Sync,
{
    par_map(doc, &f)
}

fn par_map<A, B, F>(doc: &Document<A>, f: &F) -> Document<B>
where
    A: Sync,
    B: Send,
    F: Fn(&A) -> B + Sync,
{
    match doc {
        Document::Cell(value) => Document::Cell(f(value)),
        Document::Horiz(children) => {
            Document::Horiz(children.par_iter().map(|child| par_map(child, f)).collect())
        }
        Document::Vert(children) => {
            Document::Vert(children.par_iter().map(|child| par_map(child, f)).collect())
        }
    }
}

/// Number of parent/child edges where a container child switches
/// orientation relative to its parent container.
pub fn orientation_changes<A>(doc: &Document<A>) -> usize {
    para(
        doc,
        |_| 0,
        |layer| {
            let parent = layer.orientation;
            layer
                .children
                .into_iter()
                .map(|(original, below)| {
                    let switched = original.orientation().is_some_and(|o| o != parent);
                    below + usize::from(switched)
                })
                .sum()
        },
    )
}

impl<A> Document<A> {
    pub fn count_cells(&self) -> usize {
        count_cells(self)
    }

    pub fn max_depth(&self) -> usize {
        max_depth(self)
    }

    pub fn leaves(&self) -> Vec<&A> {
        leaves(self)
    }

    pub fn map_cells<B, F>(&self, f: F) -> Document<B>
    where
        F: FnMut(&A) -> B,
    {
        map_cells(self, f)
    }
}

impl<A: Clone> Document<A> {
    pub fn flatten(&self) -> Vec<A> {
        flatten(self)
    }
}
