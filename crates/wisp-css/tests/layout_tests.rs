//! Integration tests for box generation and layout.

use quickcheck_macros::quickcheck;
use wisp_css::{
    ApproximateFontMetrics, BoxDimensions, BoxType, FontMetrics, LayoutBox, LineBox, Rect, build,
    parse, resolve,
};

/// Helper: parse, style, build and lay out a document, then hand the root box
/// to `check`.
fn with_layout<R>(html: &str, css: &str, width: f32, check: impl FnOnce(&LayoutBox<'_>) -> R) -> R {
    let tree = wisp_html::parse(html).unwrap();
    let sheet = parse(css).unwrap();
    let styled = resolve(&tree, &sheet);
    let mut root = build(&styled).unwrap();
    root.layout_root(width, 400.0, &ApproximateFontMetrics::default());
    check(&root)
}

fn kinds(layout_box: &LayoutBox<'_>) -> Vec<&'static str> {
    layout_box
        .children
        .iter()
        .map(|child| child.box_type.kind())
        .collect()
}

fn snapshot(layout_box: &LayoutBox<'_>, out: &mut Vec<(BoxDimensions, Vec<LineBox>)>) {
    out.push((layout_box.dimensions, layout_box.line_boxes.clone()));
    for child in &layout_box.children {
        snapshot(child, out);
    }
}

/// No box may hold block-level and inline-level children side by side.
fn children_are_uniform(layout_box: &LayoutBox<'_>) -> bool {
    let blocks = layout_box
        .children
        .iter()
        .filter(|child| child.is_block_level())
        .count();
    (blocks == 0 || blocks == layout_box.children.len())
        && layout_box.children.iter().all(children_are_uniform)
}

// ---------------------------------------------------------------------------
// Block layout
// ---------------------------------------------------------------------------

#[test]
fn test_auto_width_fills_containing_block() {
    with_layout(
        "<div class=\"a\"></div>",
        "div { display: block; padding: 12px; } .a { background-color: #ff0000; }",
        600.0,
        |root| {
            assert_eq!(root.children.len(), 1);
            let div = &root.children[0];
            assert!(matches!(div.box_type, BoxType::Block(_)));
            assert_eq!(div.dimensions.content, Rect::new(12.0, 12.0, 576.0, 0.0));
            assert_eq!(div.dimensions.padding_box(), Rect::new(0.0, 0.0, 600.0, 24.0));
            assert_eq!(root.dimensions.content, Rect::new(0.0, 0.0, 600.0, 24.0));
        },
    );
}

#[test]
fn test_blocks_stack_by_margin_box() {
    with_layout(
        "<div></div><div></div>",
        "div { margin: 10px; padding: 5px; border-width: 1px }",
        200.0,
        |root| {
            let first = &root.children[0];
            let second = &root.children[1];
            assert_eq!(first.dimensions.content, Rect::new(16.0, 16.0, 168.0, 0.0));
            assert_eq!(second.dimensions.content, Rect::new(16.0, 48.0, 168.0, 0.0));
            assert_eq!(root.dimensions.content.height.to_bits(), 64.0_f32.to_bits());
        },
    );
}

#[test]
fn test_specific_edge_overrides_shorthand() {
    with_layout(
        "<div></div>",
        "div { margin: 10px; margin-left: 3px; border-top-width: 2px }",
        200.0,
        |root| {
            let div = &root.children[0].dimensions;
            assert_eq!(div.margin.left.to_bits(), 3.0_f32.to_bits());
            assert_eq!(div.margin.right.to_bits(), 10.0_f32.to_bits());
            assert_eq!(div.border.top.to_bits(), 2.0_f32.to_bits());
            assert_eq!(div.border.bottom.to_bits(), 0.0_f32.to_bits());
            assert_eq!(div.content, Rect::new(3.0, 12.0, 187.0, 0.0));
        },
    );
}

#[test]
fn test_explicit_width_wins() {
    with_layout(
        "<div></div>",
        "div { width: 100px; padding: 10px }",
        600.0,
        |root| {
            assert_eq!(
                root.children[0].dimensions.content,
                Rect::new(10.0, 10.0, 100.0, 0.0)
            );
        },
    );
}

#[test]
fn test_auto_keyword_width() {
    with_layout("<p></p>", "p { width: auto; margin: 4px }", 100.0, |root| {
        assert_eq!(
            root.children[0].dimensions.content,
            Rect::new(4.0, 4.0, 92.0, 0.0)
        );
    });
}

#[test]
fn test_negative_width_propagates() {
    with_layout(
        "<div><p></p></div>",
        "div { width: 10px } p { margin-left: 20px }",
        600.0,
        |root| {
            let p = &root.children[0].children[0];
            assert_eq!(p.dimensions.content.width.to_bits(), (-10.0_f32).to_bits());
        },
    );
}

// ---------------------------------------------------------------------------
// Inline layout
// ---------------------------------------------------------------------------

#[test]
fn test_two_spans_share_one_line() {
    with_layout("<span>a</span><span>b</span>", "", 600.0, |root| {
        assert_eq!(kinds(root), vec!["inline", "inline"]);
        assert_eq!(root.line_boxes.len(), 1);
        let line = &root.line_boxes[0];
        assert_eq!(line.children, 0..2);
        assert_eq!(line.bounds, Rect::new(0.0, 0.0, 600.0, 14.0));
        assert_eq!(line.used_width.to_bits(), 14.0_f32.to_bits());
        assert_eq!(
            root.children[0].dimensions.content,
            Rect::new(0.0, 0.0, 7.0, 14.0)
        );
        assert_eq!(
            root.children[1].dimensions.content,
            Rect::new(7.0, 0.0, 7.0, 14.0)
        );
        assert_eq!(
            root.children[1].children[0].dimensions.content,
            Rect::new(7.0, 0.0, 7.0, 14.0)
        );
    });
}

#[test]
fn test_line_wraps_when_full() {
    with_layout(
        "<p><span>aaa</span><span>bbb</span><span>ccc</span></p>",
        "",
        50.0,
        |root| {
            let p = &root.children[0];
            assert_eq!(p.line_boxes.len(), 2);
            assert_eq!(p.line_boxes[0].children, 0..2);
            assert_eq!(p.line_boxes[1].children, 2..3);
            assert_eq!(p.line_boxes[1].bounds, Rect::new(0.0, 14.0, 50.0, 14.0));
            assert_eq!(
                p.children[2].dimensions.content,
                Rect::new(0.0, 14.0, 21.0, 14.0)
            );
            assert_eq!(p.dimensions.content.height.to_bits(), 28.0_f32.to_bits());
        },
    );
}

#[test]
fn test_offset_block_wraps_on_absolute_cursor() {
    with_layout(
        "<div><b>aaaaaaaaaa</b><b>aaaaaaaaaa</b></div>",
        "div { margin-left: 100px; width: 200px }",
        600.0,
        |root| {
            let div = &root.children[0];
            assert_eq!(div.dimensions.content.x.to_bits(), 100.0_f32.to_bits());
            // 170 + 70 is not below the 200px line width.
            assert_eq!(div.line_boxes.len(), 2);
            assert_eq!(div.line_boxes[0].children, 0..1);
            assert_eq!(div.line_boxes[1].bounds, Rect::new(100.0, 14.0, 200.0, 14.0));
            assert_eq!(
                div.children[1].dimensions.content,
                Rect::new(100.0, 14.0, 70.0, 14.0)
            );
        },
    );
}

#[test]
fn test_exact_fit_wraps() {
    with_layout("<p><b>aaa</b><b>bbb</b></p>", "", 42.0, |root| {
        assert_eq!(root.children[0].line_boxes.len(), 2);
    });
}

#[test]
fn test_oversized_child_takes_its_own_line() {
    with_layout("<p><b>a</b><b>much too long</b></p>", "", 30.0, |root| {
        let p = &root.children[0];
        assert_eq!(p.line_boxes.len(), 2);
        assert_eq!(p.line_boxes[1].children, 1..2);
        assert_eq!(p.children[1].dimensions.content.width.to_bits(), 91.0_f32.to_bits());
    });
}

#[test]
fn test_inline_boxes_ignore_edges() {
    with_layout("<span>hi</span>", "span { padding: 10px; margin: 5px }", 600.0, |root| {
        let span = &root.children[0].dimensions;
        assert_eq!(*span, BoxDimensions {
            content: Rect::new(0.0, 0.0, 14.0, 14.0),
            ..BoxDimensions::default()
        });
    });
}

#[test]
fn test_anonymous_wrapper_follows_block() {
    with_layout("<div>x</div><span>y</span>", "", 600.0, |root| {
        assert_eq!(kinds(root), vec!["block", "anonymous"]);
        let anonymous = &root.children[1];
        assert_eq!(anonymous.dimensions.content, Rect::new(0.0, 14.0, 600.0, 14.0));
        assert_eq!(
            anonymous.children[0].dimensions.content,
            Rect::new(0.0, 14.0, 7.0, 14.0)
        );
        assert_eq!(root.dimensions.content.height.to_bits(), 28.0_f32.to_bits());
    });
}

#[test]
fn test_text_in_block_at_content_origin() {
    with_layout("<div>hello</div>", "div { padding: 8px }", 600.0, |root| {
        let text = &root.children[0].children[0];
        assert!(matches!(text.box_type, BoxType::Text { text: "hello", .. }));
        assert_eq!(text.dimensions.content, Rect::new(8.0, 8.0, 35.0, 14.0));
    });
}

#[test]
fn test_layout_is_idempotent() {
    let html = "<div>one <b>two</b></div><span>three</span><p><i>four</i> five</p>";
    let css = "div { margin: 3px; padding: 2px } p { width: 40px }";
    let tree = wisp_html::parse(html).unwrap();
    let sheet = parse(css).unwrap();
    let styled = resolve(&tree, &sheet);
    let mut root = build(&styled).unwrap();
    let metrics = ApproximateFontMetrics::default();

    root.layout_root(120.0, 400.0, &metrics);
    let mut first = Vec::new();
    snapshot(&root, &mut first);

    root.layout_root(120.0, 400.0, &metrics);
    let mut second = Vec::new();
    snapshot(&root, &mut second);

    assert_eq!(first, second);
}

#[test]
fn test_dump_lists_every_box() {
    with_layout("<div>x</div>", "", 100.0, |root| {
        let dump = root.dump();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("root"));
        assert!(lines[1].starts_with("  block div"));
        assert!(lines[2].starts_with("    text \"x\""));
    });
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[quickcheck]
fn prop_children_never_mixed(picks: Vec<u8>) -> bool {
    const PARTS: [&str; 5] = ["<div></div>", "<p>t</p>", "<span>s</span>", "<b></b>", "text"];
    let body: String = picks
        .iter()
        .map(|&pick| PARTS[usize::from(pick) % PARTS.len()])
        .collect();
    let html = format!("{body}<div>{body}</div><span>{body}</span>");
    let tree = wisp_html::parse(&html).unwrap();
    let sheet = parse("").unwrap();
    let styled = resolve(&tree, &sheet);
    build(&styled).is_some_and(|root| children_are_uniform(&root))
}

#[quickcheck]
fn prop_advance_width_is_additive(text: String) -> bool {
    let metrics = ApproximateFontMetrics::default();
    let doubled = format!("{text}{text}");
    metrics.advance_width(&doubled) == metrics.advance_width(&text) * 2
}
