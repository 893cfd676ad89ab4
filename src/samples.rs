//! Reference documents shared by consumers and tests.

use crate::domain::{Document, Layer, Orientation};
use crate::schemes::ana;

/// A header, a left/right split, and a footer stacked vertically.
pub fn page_layout() -> Document<String> {
    Document::vert(vec![
        Document::cell("Header".to_string()),
        Document::horiz(vec![
            Document::cell("Left".to_string()),
            Document::cell("Right".to_string()),
        ]),
        Document::cell("Footer".to_string()),
    ])
}

/// Balanced binary tree with `levels` levels of splits above `2^levels`
/// cells holding `"leaf"`.
pub fn balanced_split(levels: u32, orientation: Orientation) -> Document<String> {
    ana(
        levels,
        |n| (*n == 0).then(|| "leaf".to_string()),
        |n| Layer::new(orientation, vec![n - 1, n - 1]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_split_zero_levels_is_a_cell() {
        assert_eq!(balanced_split(0, Orientation::Vert), Document::cell("leaf".to_string()));
    }

    #[test]
    fn test_page_layout_is_well_formed() {
        assert!(page_layout().is_well_formed());
    }
}
