//! One level of container structure, as seen by algebras and coalgebras.

use crate::domain::document::{Document, Orientation};

/// An orientation plus already-reduced children (in a fold) or
/// not-yet-unfolded seeds (in an unfold).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Layer<T> {
    pub orientation: Orientation,
    pub children: Vec<T>,
}

impl<T> Layer<T> {
    pub fn new(orientation: Orientation, children: Vec<T>) -> Self {
        Self {
            orientation,
            children,
        }
    }

    pub fn horiz(children: Vec<T>) -> Self {
        Self::new(Orientation::Horiz, children)
    }

    pub fn vert(children: Vec<T>) -> Self {
        Self::new(Orientation::Vert, children)
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn map<U, F>(self, f: F) -> Layer<U>
    where
        F: FnMut(T) -> U,
    {
        Layer {
            orientation: self.orientation,
            children: self.children.into_iter().map(f).collect(),
        }
    }
}

impl<A> Layer<Document<A>> {
    /// Wraps a layer of subtrees back into a container node.
    pub fn into_document(self) -> Document<A> {
        Document::container(self.orientation, self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_into_document_preserves_order() {
        let layer = Layer::vert(vec![Document::cell(1), Document::cell(2)]);
        assert_eq!(
            layer.into_document(),
            Document::Vert(vec![Document::Cell(1), Document::Cell(2)])
        );
    }

    #[test]
    fn test_layer_map() {
        let layer = Layer::horiz(vec![1, 2, 3]).map(|n| n * 10);
        assert_eq!(layer.orientation, Orientation::Horiz);
        assert_eq!(layer.children, vec![10, 20, 30]);
    }
}
