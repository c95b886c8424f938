//! Tests for arena construction, element helpers and traversal.

use wisp_dom::{DomTree, ElementData, NodeId, NodeType};

/// Helper to create an element node and return its `NodeId`.
fn alloc_element(tree: &mut DomTree, data: ElementData) -> NodeId {
    tree.alloc(NodeType::Element(data))
}

#[test]
fn test_new_tree_has_only_root() {
    let tree = DomTree::new();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.root(), NodeId::ROOT);
    assert!(matches!(tree.get(NodeId::ROOT).map(|n| &n.node_type), Some(NodeType::Root)));
    assert!(tree.children(NodeId::ROOT).is_empty());
}

#[test]
fn test_append_preserves_order() {
    let mut tree = DomTree::new();
    let a = alloc_element(&mut tree, ElementData::new("div"));
    let b = tree.alloc(NodeType::Text("hi".to_owned()));
    let c = alloc_element(&mut tree, ElementData::new("p"));
    tree.append_child(NodeId::ROOT, a);
    tree.append_child(NodeId::ROOT, b);
    tree.append_child(NodeId::ROOT, c);

    assert_eq!(tree.children(NodeId::ROOT), &[a, b, c]);
    assert_eq!(tree.as_text(b), Some("hi"));
    assert_eq!(tree.as_element(c).map(|e| e.tag_name.as_str()), Some("p"));
    assert!(tree.as_element(b).is_none());
}

#[test]
fn test_unknown_ids_are_harmless() {
    let mut tree = DomTree::new();
    let child = tree.alloc(NodeType::Text("x".to_owned()));
    tree.append_child(NodeId(42), child);
    assert!(tree.children(NodeId(42)).is_empty());
    assert!(tree.get(NodeId(42)).is_none());
}

#[test]
fn test_classes_split_on_any_whitespace() {
    let data = ElementData::new("div").with_attr("class", "  a\tb\nc  a ");
    let classes = data.classes();
    assert_eq!(classes.len(), 3);
    assert!(classes.contains("a"));
    assert!(classes.contains("b"));
    assert!(classes.contains("c"));
}

#[test]
fn test_missing_class_and_id_attributes() {
    let data = ElementData::new("span");
    assert!(data.classes().is_empty());
    assert_eq!(data.id(), None);

    let data = data.with_attr("id", "main");
    assert_eq!(data.id(), Some("main"));
}

#[test]
fn test_descendants_pre_order_with_depth() {
    let mut tree = DomTree::new();
    let div = alloc_element(&mut tree, ElementData::new("div"));
    let p = alloc_element(&mut tree, ElementData::new("p"));
    let text = tree.alloc(NodeType::Text("t".to_owned()));
    let span = alloc_element(&mut tree, ElementData::new("span"));
    tree.append_child(NodeId::ROOT, div);
    tree.append_child(div, p);
    tree.append_child(p, text);
    tree.append_child(div, span);

    let order: Vec<(NodeId, usize)> = tree.descendants(NodeId::ROOT).collect();
    assert_eq!(
        order,
        vec![(NodeId::ROOT, 0), (div, 1), (p, 2), (text, 3), (span, 2)]
    );
}
