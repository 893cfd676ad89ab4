//! Construction, serialization and display of documents.

use celltree::samples::page_layout;
use celltree::util::testing;
use celltree::{Document, DocumentConvert, Orientation};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[test]
fn given_page_layout_when_serializing_then_round_trips_through_json() {
    let page = page_layout();

    let json = serde_json::to_string(&page).unwrap();
    let back: Document<String> = serde_json::from_str(&json).unwrap();

    assert_eq!(back, page);
    assert!(json.starts_with(r#"{"Vert":[{"Cell":"Header"}"#));
}

#[test]
fn given_json_with_empty_container_when_deserializing_then_accepts_it() {
    let doc: Document<u8> = serde_json::from_str(r#"{"Horiz":[]}"#).unwrap();

    assert_eq!(doc, Document::horiz(vec![]));
    assert!(!doc.is_well_formed());
}

#[test]
fn given_page_layout_when_rendering_tree_then_shows_every_shape() {
    let rendered = page_layout().to_tree_string().to_string();

    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "vert");
    assert!(rendered.contains("Header"));
    assert!(rendered.contains("horiz"));
    assert!(rendered.contains("Right"));
    assert_eq!(lines.len(), 6);
}

#[test]
fn given_containers_when_inspecting_then_orientation_and_children_match() {
    let page = page_layout();

    assert_eq!(page.orientation(), Some(Orientation::Vert));
    assert_eq!(page.children().len(), 3);
    assert_eq!(page.children()[1].orientation(), Some(Orientation::Horiz));
    assert!(page.children()[0].is_cell());
}
