//! Painter - generates display list from layout tree
//!
//! [CSS 2.1 Appendix E.2 Painting order](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
//!
//! Boxes are visited in pre-order, so a parent's background is always
//! painted before anything inside it.

use wisp_common::warn_once;

use crate::layout::{BoxType, LayoutBox};
use crate::style::ColorValue;

use super::{DisplayList, DrawCommand, Point};

/// Paint a laid-out box tree.
#[must_use]
pub fn paint(root: &LayoutBox<'_>) -> DisplayList {
    Painter.paint(root)
}

/// Walks a laid-out box tree and records draw commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct Painter;

impl Painter {
    /// Paint a layout tree and return the display list.
    #[must_use]
    pub fn paint(self, root: &LayoutBox<'_>) -> DisplayList {
        let mut display_list = DisplayList::new();
        self.paint_box(root, &mut display_list);
        display_list
    }

    /// For each box:
    /// 1. Background color over the padding box
    /// 2. Text, at the content origin
    /// 3. Children, in tree order
    fn paint_box(self, layout_box: &LayoutBox<'_>, display_list: &mut DisplayList) {
        if let Some(color) = background_color(layout_box) {
            display_list.push(DrawCommand::FilledRect {
                color,
                rect: layout_box.dimensions.padding_box(),
            });
        }

        if let BoxType::Text { text, .. } = layout_box.box_type {
            let content = layout_box.dimensions.content;
            display_list.push(DrawCommand::TextRun {
                text: text.to_owned(),
                origin: Point {
                    x: content.x,
                    y: content.y,
                },
            });
        }

        for child in &layout_box.children {
            self.paint_box(child, display_list);
        }
    }
}

/// [§ 3.10 'background-color'](https://www.w3.org/TR/css-backgrounds-3/#background-color)
///
/// `transparent` paints nothing. Other values that are not colors are
/// reported once and skipped.
fn background_color(layout_box: &LayoutBox<'_>) -> Option<ColorValue> {
    let value = layout_box
        .box_type
        .styled_node()?
        .value("background-color")?;
    let color = value.to_color();
    if color.is_none() && !value.is_keyword("transparent") {
        warn_once(
            "Paint",
            &format!("unsupported background-color '{value}', skipping"),
        );
    }
    color
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cascade::resolve;
    use crate::layout::{ApproximateFontMetrics, Rect, build};
    use crate::parser::parse;

    #[test]
    fn test_transparent_and_unknown_paint_nothing() {
        let tree = wisp_html::parse("<div class=\"a\"></div><div class=\"b\"></div>").unwrap();
        let sheet =
            parse(".a { background-color: transparent } .b { background-color: sparkly }").unwrap();
        let styled = resolve(&tree, &sheet);
        let mut root = build(&styled).unwrap();
        root.layout_root(100.0, 100.0, &ApproximateFontMetrics::default());
        assert!(paint(&root).is_empty());
    }

    #[test]
    fn test_named_background_color() {
        let tree = wisp_html::parse("<p></p>").unwrap();
        let sheet = parse("p { background-color: navy; padding: 2px; width: 10px }").unwrap();
        let styled = resolve(&tree, &sheet);
        let mut root = build(&styled).unwrap();
        root.layout_root(100.0, 100.0, &ApproximateFontMetrics::default());
        assert_eq!(
            paint(&root).commands(),
            &[DrawCommand::FilledRect {
                color: ColorValue::rgb(0, 0, 128),
                rect: Rect::new(0.0, 0.0, 14.0, 4.0),
            }]
        );
    }
}
