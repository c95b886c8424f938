//! Integration tests for selector matching and the cascade.

use quickcheck_macros::quickcheck;
use wisp_css::{ColorValue, StyledNode, Unit, Value, parse, parse_selector, resolve};
use wisp_dom::ElementData;

/// Helper: style a document and return the first child of the root.
fn first_styled<R>(html: &str, css: &str, check: impl FnOnce(&StyledNode<'_>) -> R) -> R {
    let tree = wisp_html::parse(html).unwrap();
    let sheet = parse(css).unwrap();
    let styled = resolve(&tree, &sheet);
    check(&styled.children[0])
}

#[test]
fn test_id_outranks_tag() {
    first_styled(
        "<p id=\"x\"></p>",
        "p { font-weight: bold } #x { font-weight: nono }",
        |p| assert_eq!(p.value("font-weight"), Some(&Value::Keyword("nono".into()))),
    );
}

#[test]
fn test_id_outranks_later_tag() {
    first_styled(
        "<p id=\"x\"></p>",
        "#x { font-weight: nono } p { font-weight: bold }",
        |p| assert_eq!(p.value("font-weight"), Some(&Value::Keyword("nono".into()))),
    );
}

#[test]
fn test_equal_specificity_later_wins() {
    first_styled(
        "<p class=\"a b\"></p>",
        ".a { color: red } .b { color: blue }",
        |p| assert_eq!(p.value("color"), Some(&Value::Keyword("blue".into()))),
    );
}

#[test]
fn test_many_classes_lose_to_one_id() {
    first_styled(
        "<div id=\"main\" class=\"a b c d e f g h i\"></div>",
        "#main { width: 1px } div.a.b.c.d.e.f.g.h.i { width: 2px }",
        |div| assert_eq!(div.value("width"), Some(&Value::Length(1.0, Unit::Px))),
    );
}

#[test]
fn test_selector_list_matches_any_alternative() {
    first_styled("<em></em>", "h1, em, .x { color: #00ff00 }", |em| {
        assert_eq!(
            em.value("color"),
            Some(&Value::Color(ColorValue::rgb(0, 255, 0)))
        );
    });
}

#[test]
fn test_universal_selector_matches_elements() {
    first_styled("<b></b>", "* { margin: 1px }", |b| {
        assert_eq!(b.value("margin"), Some(&Value::Length(1.0, Unit::Px)));
    });
}

#[test]
fn test_missing_class_attribute_never_matches() {
    first_styled("<p></p>", ".a { color: red } p.a { color: blue }", |p| {
        assert!(p.specified_values.is_empty());
    });
}

#[test]
fn test_no_inheritance() {
    let tree = wisp_html::parse("<div><span>t</span></div>").unwrap();
    let sheet = parse("div { color: red }").unwrap();
    let styled = resolve(&tree, &sheet);
    let div = &styled.children[0];
    assert_eq!(div.specified_values.len(), 1);
    assert!(div.children[0].specified_values.is_empty());
    assert!(div.children[0].children[0].specified_values.is_empty());
}

#[test]
fn test_styled_tree_mirrors_document() {
    let tree = wisp_html::parse("<div>a<p>b</p> <span></span></div>").unwrap();
    let sheet = parse("* { color: red }").unwrap();
    let styled = resolve(&tree, &sheet);

    assert!(styled.specified_values.is_empty());
    assert_eq!(styled.children.len(), tree.children(tree.root()).len());
    let div = &styled.children[0];
    assert_eq!(div.children.len(), 4);
    assert_eq!(div.children[0].text(), Some("a"));
    assert!(div.children[0].specified_values.is_empty());
    assert_eq!(div.children[1].element().map(|e| e.tag_name.as_str()), Some("p"));
    assert_eq!(div.children[2].text(), Some(" "));
}

#[test]
fn test_lookup_falls_back_to_shorthand() {
    first_styled("<div></div>", "div { padding: 4px; padding-top: 1px }", |div| {
        let zero = Value::Length(0.0, Unit::Px);
        assert_eq!(div.lookup("padding-top", "padding", &zero), Value::Length(1.0, Unit::Px));
        assert_eq!(div.lookup("padding-left", "padding", &zero), Value::Length(4.0, Unit::Px));
        assert_eq!(div.lookup("margin-left", "margin", &zero), zero);
    });
}

#[quickcheck]
fn prop_id_selector_needs_id_attribute(tag: u8, class_count: u8) -> bool {
    let tag_name = ["div", "p", "span", "em"][usize::from(tag) % 4];
    let mut element = ElementData::new(tag_name);
    let classes: Vec<String> = (0..class_count % 5).map(|i| format!("c{i}")).collect();
    if !classes.is_empty() {
        element = element.with_attr("class", &classes.join(" "));
    }
    let source = format!(
        "{tag_name}#x{}",
        classes.iter().map(|c| format!(".{c}")).collect::<String>()
    );
    parse_selector(&source).is_ok_and(|selector| !selector.matches(&element))
}

#[quickcheck]
fn prop_one_id_beats_tags_and_classes(classes: u8) -> bool {
    let classes = usize::from(classes % 9);
    let class_attr: Vec<String> = (0..classes).map(|i| format!("c{i}")).collect();
    let html = format!("<div id=\"x\" class=\"{}\"></div>", class_attr.join(" "));
    let compound: String = class_attr.iter().map(|c| format!(".{c}")).collect();
    let css = format!("#x {{ color: red }} div{compound} {{ color: blue }}");
    first_styled(&html, &css, |div| {
        div.value("color") == Some(&Value::Keyword("red".into()))
    })
}
