//! The document tree.

use std::fmt;
use std::mem::{self, ManuallyDrop};
use std::ptr;

use serde::{Deserialize, Serialize};

use crate::domain::layer::Layer;

/// Subdivision tag of a container node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horiz,
    Vert,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horiz => write!(f, "horiz"),
            Orientation::Vert => write!(f, "vert"),
        }
    }
}

/// A document subdivided into cells arranged horizontally or vertically.
///
/// Each node owns its children outright; there is no sharing and no back
/// reference, so a `Document` is always a finite, acyclic tree. Construction
/// is total: an empty `Horiz` or `Vert` is representable and only rejected
/// by [`crate::validate`].
///
/// Child order is significant and every operation in this crate preserves it.
///
/// Dropping a tree tears it down on a heap stack, so arbitrarily deep
/// documents can be released. The flip side is that a `Document` cannot be
/// destructured by move; use [`Document::into_node`] to take one apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Document<A> {
    /// Leaf holding exactly one payload value.
    Cell(A),
    /// Horizontal subdivision.
    Horiz(Vec<Document<A>>),
    /// Vertical subdivision.
    Vert(Vec<Document<A>>),
}

impl<A> Document<A> {
    pub fn cell(value: A) -> Self {
        Document::Cell(value)
    }

    pub fn horiz<I>(children: I) -> Self
    where
        I: IntoIterator<Item = Document<A>>,
    {
        Document::Horiz(children.into_iter().collect())
    }

    pub fn vert<I>(children: I) -> Self
    where
        I: IntoIterator<Item = Document<A>>,
    {
        Document::Vert(children.into_iter().collect())
    }

    /// Builds a container of the given orientation.
    pub fn container(orientation: Orientation, children: Vec<Document<A>>) -> Self {
        match orientation {
            Orientation::Horiz => Document::Horiz(children),
            Orientation::Vert => Document::Vert(children),
        }
    }

    pub fn is_cell(&self) -> bool {
        matches!(self, Document::Cell(_))
    }

    pub fn as_cell(&self) -> Option<&A> {
        match self {
            Document::Cell(value) => Some(value),
            _ => None,
        }
    }

    /// Orientation of a container, `None` for a cell.
    pub fn orientation(&self) -> Option<Orientation> {
        match self {
            Document::Cell(_) => None,
            Document::Horiz(_) => Some(Orientation::Horiz),
            Document::Vert(_) => Some(Orientation::Vert),
        }
    }

    /// Orientation and children of a container, `None` for a cell.
    pub fn as_container(&self) -> Option<(Orientation, &[Document<A>])> {
        match self {
            Document::Cell(_) => None,
            Document::Horiz(children) => Some((Orientation::Horiz, children)),
            Document::Vert(children) => Some((Orientation::Vert, children)),
        }
    }

    /// Direct children; a cell has none.
    pub fn children(&self) -> &[Document<A>] {
        match self {
            Document::Cell(_) => &[],
            Document::Horiz(children) | Document::Vert(children) => children,
        }
    }

    /// Takes the root apart, handing out its payload or its children.
    pub fn into_node(self) -> Node<A> {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, and exactly one field is read out
        // of it, so ownership of that field moves to the result exactly once.
        unsafe {
            match &*this {
                Document::Cell(value) => Node::Cell(ptr::read(value)),
                Document::Horiz(children) => {
                    Node::Container(Layer::horiz(ptr::read(children)))
                }
                Document::Vert(children) => {
                    Node::Container(Layer::vert(ptr::read(children)))
                }
            }
        }
    }
}

impl<A> Drop for Document<A> {
    fn drop(&mut self) {
        let mut pending = match self {
            Document::Cell(_) => return,
            Document::Horiz(children) | Document::Vert(children) => mem::take(children),
        };
        while let Some(mut node) = pending.pop() {
            if let Document::Horiz(children) | Document::Vert(children) = &mut node {
                pending.append(children);
            }
        }
    }
}

/// A document root taken apart by [`Document::into_node`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<A> {
    Cell(A),
    Container(Layer<Document<A>>),
}
