//! Structural validation.

mod common;

use celltree::util::testing;
use celltree::{validate, Document, NodePath, Orientation, ValidationError};
use common::{document_strategy, well_formed_strategy};
use proptest::prelude::*;
use rstest::rstest;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[rstest]
#[case(Document::horiz(vec![]), Orientation::Horiz)]
#[case(Document::vert(vec![]), Orientation::Vert)]
fn given_empty_container_when_validating_then_fails(
    #[case] doc: Document<String>,
    #[case] orientation: Orientation,
) {
    let err = validate(doc).unwrap_err();
    assert_eq!(
        err,
        ValidationError::EmptyContainer {
            orientation,
            path: NodePath::root(),
        }
    );
}

#[test]
fn given_deep_empty_container_when_validating_then_reports_its_path() {
    let doc = Document::horiz(vec![
        Document::cell("a"),
        Document::vert(vec![Document::cell("b"), Document::horiz(vec![Document::vert(vec![])])]),
    ]);

    let err = validate(doc).unwrap_err();

    assert_eq!(err.to_string(), "empty vert container at root/1/1/0");
}

#[test]
fn given_two_empty_containers_when_validating_then_leftmost_wins() {
    let doc = Document::vert(vec![
        Document::horiz(vec![Document::cell(1), Document::horiz(vec![])]),
        Document::vert(vec![]),
    ]);

    let err = validate(doc).unwrap_err();

    assert_eq!(
        err,
        ValidationError::EmptyContainer {
            orientation: Orientation::Horiz,
            path: NodePath(vec![0, 1]),
        }
    );
}

proptest! {
    #[test]
    fn well_formed_trees_validate_unchanged(t in well_formed_strategy()) {
        prop_assert_eq!(validate(t.clone()), Ok(t));
    }

    #[test]
    fn validate_agrees_with_is_well_formed(t in document_strategy()) {
        let expected = t.is_well_formed();
        prop_assert_eq!(validate(t).is_ok(), expected);
    }
}
