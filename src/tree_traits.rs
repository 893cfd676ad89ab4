use std::fmt::Display;

use termtree::Tree;
use tracing::instrument;

use crate::domain::Document;
use crate::schemes::cata;

/// Conversion into a printable `termtree` for inspection.
pub trait DocumentConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<A: Display> DocumentConvert for Document<A> {
    #[instrument(level = "trace", skip_all, fields(orientation = ?self.orientation()))]
    fn to_tree_string(&self) -> Tree<String> {
        cata(
            self,
            |value| Tree::new(value.to_string()),
            |layer| {
                let label = if layer.is_empty() {
                    format!("{} (empty)", layer.orientation)
                } else {
                    layer.orientation.to_string()
                };
                Tree::new(label).with_leaves(layer.children)
            },
        )
    }
}
