//! Layout box types and layout algorithms.
//!
//! [§ 9.4 Normal flow](https://www.w3.org/TR/CSS2/visuren.html#normal-flow)

use std::fmt::Write;

#[cfg(feature = "layout-trace")]
use std::cell::Cell;

use super::box_model::{BoxDimensions, Rect};
use super::inline::{FontMetrics, LineBox};
use crate::cascade::StyledNode;
use crate::style::{Unit, Value};

#[cfg(feature = "layout-trace")]
thread_local! {
    static LAYOUT_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// The kind of a layout box, with the style it was generated from.
///
/// Every variant except [`BoxType::Anonymous`] borrows its styled node.
#[derive(Debug, Clone, Copy)]
pub enum BoxType<'a> {
    /// The box of the document root.
    Root(&'a StyledNode<'a>),
    /// A block-level element.
    Block(&'a StyledNode<'a>),
    /// An inline-level element.
    Inline(&'a StyledNode<'a>),
    /// A run of text.
    Text {
        /// The text node.
        node: &'a StyledNode<'a>,
        /// The text, verbatim.
        text: &'a str,
    },
    /// [§ 9.2.1.1](https://www.w3.org/TR/CSS2/visuren.html#anonymous-block-level)
    ///
    /// A block that wraps a run of inline boxes next to block siblings.
    Anonymous,
}

impl<'a> BoxType<'a> {
    /// The styled node this box was generated from, if any.
    #[must_use]
    pub const fn styled_node(&self) -> Option<&'a StyledNode<'a>> {
        match *self {
            Self::Root(node) | Self::Block(node) | Self::Inline(node) | Self::Text { node, .. } => {
                Some(node)
            }
            Self::Anonymous => None,
        }
    }

    /// Short lowercase name of the variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Root(_) => "root",
            Self::Block(_) => "block",
            Self::Inline(_) => "inline",
            Self::Text { .. } => "text",
            Self::Anonymous => "anonymous",
        }
    }
}

/// A node of the box tree.
///
/// The tree shape is fixed by the builder. Layout only writes
/// `dimensions` and `line_boxes`.
#[derive(Debug, Clone)]
pub struct LayoutBox<'a> {
    /// What generated this box.
    pub box_type: BoxType<'a>,
    /// Geometry, valid after layout.
    pub dimensions: BoxDimensions,
    /// Child boxes: all block-level or all inline-level.
    pub children: Vec<LayoutBox<'a>>,
    /// Lines formed by inline children, valid after layout.
    pub line_boxes: Vec<LineBox>,
}

/// The line currently being filled during inline flow.
struct OpenLine {
    x: f32,
    y: f32,
    width: f32,
    cursor: f32,
    height: f32,
    first: usize,
    end: usize,
}

impl OpenLine {
    const fn new(content: Rect, y: f32, first: usize) -> Self {
        Self {
            x: content.x,
            y,
            width: content.width,
            cursor: content.x,
            height: 0.0,
            first,
            end: first,
        }
    }

    /// The cursor is absolute, so a line in an offset block fills up before
    /// its right edge.
    fn fits(&self, width: f32) -> bool {
        self.cursor + width < self.width
    }

    /// Move `child` so its margin box starts at the cursor and the line's top.
    fn place(&mut self, child: &mut LayoutBox<'_>, index: usize) {
        let margin_box = child.dimensions.margin_box();
        LayoutBox::shift_box_tree(child, self.cursor - margin_box.x, self.y - margin_box.y);
        self.cursor += margin_box.width;
        self.height = self.height.max(child.dimensions.content.height);
        self.end = index + 1;
    }

    fn close(self) -> LineBox {
        LineBox {
            bounds: Rect::new(self.x, self.y, self.width, self.height),
            used_width: self.cursor - self.x,
            children: self.first..self.end,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn px(value: u32) -> f32 {
    value as f32
}

impl<'a> LayoutBox<'a> {
    /// A box with no children and zeroed geometry.
    #[must_use]
    pub fn new(box_type: BoxType<'a>) -> Self {
        Self {
            box_type,
            dimensions: BoxDimensions::default(),
            children: Vec::new(),
            line_boxes: Vec::new(),
        }
    }

    /// An anonymous block wrapping `children`.
    #[must_use]
    pub fn anonymous(children: Vec<Self>) -> Self {
        let mut layout_box = Self::new(BoxType::Anonymous);
        layout_box.children = children;
        layout_box
    }

    /// Root, block and anonymous boxes are block-level.
    #[must_use]
    pub const fn is_block_level(&self) -> bool {
        matches!(
            self.box_type,
            BoxType::Root(_) | BoxType::Block(_) | BoxType::Anonymous
        )
    }

    /// Lay out the whole tree inside a viewport.
    ///
    /// The root's content width is the viewport width. Its height grows with
    /// the content and is not clipped to the viewport.
    pub fn layout_root(
        &mut self,
        viewport_width: f32,
        viewport_height: f32,
        font_metrics: &dyn FontMetrics,
    ) {
        let viewport = Rect::new(0.0, 0.0, viewport_width, viewport_height);
        self.layout(viewport, font_metrics);
    }

    /// Lay out this box and its subtree against a containing block.
    ///
    /// `containing_block` is the parent's content rect, with `height` set to
    /// the height its earlier children already take.
    pub fn layout(&mut self, containing_block: Rect, font_metrics: &dyn FontMetrics) {
        #[cfg(feature = "layout-trace")]
        let _depth = DepthGuard::enter(self);

        match self.box_type {
            BoxType::Root(_) => self.layout_root_box(containing_block, font_metrics),
            BoxType::Block(_) | BoxType::Anonymous => {
                self.layout_block(containing_block, font_metrics);
            }
            BoxType::Inline(_) => self.layout_inline(containing_block, font_metrics),
            BoxType::Text { text, .. } => self.layout_text(text, containing_block, font_metrics),
        }
    }

    fn layout_root_box(&mut self, containing_block: Rect, font_metrics: &dyn FontMetrics) {
        self.dimensions = BoxDimensions {
            content: Rect::new(
                containing_block.x,
                containing_block.y,
                containing_block.width,
                0.0,
            ),
            ..BoxDimensions::default()
        };
        self.layout_children(font_metrics);
    }

    /// [§ 10.3.3 Block-level, non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
    fn layout_block(&mut self, containing_block: Rect, font_metrics: &dyn FontMetrics) {
        // STEP 1: Width and horizontal edges.
        self.calculate_block_width(containing_block);

        // STEP 2: Position below the content already in the containing block.
        self.calculate_block_position(containing_block);

        // STEP 3: Children. This also sets the content height.
        self.layout_children(font_metrics);
    }

    /// "'margin-left' + 'border-left-width' + 'padding-left' + 'width' +
    /// 'padding-right' + 'border-right-width' + 'margin-right'
    /// = width of containing block"
    ///
    /// Only `width: auto` solves the equation. Margins are never adjusted, so
    /// an explicit width simply overrides it.
    fn calculate_block_width(&mut self, containing_block: Rect) {
        let style = self.box_type.styled_node();
        let zero = Value::Length(0.0, Unit::Px);
        let edge = |name: &str, shorthand: &str| {
            style.map_or(0.0, |node| node.lookup(name, shorthand, &zero).to_px())
        };

        let d = &mut self.dimensions;
        d.margin.left = edge("margin-left", "margin");
        d.margin.right = edge("margin-right", "margin");
        d.border.left = edge("border-left-width", "border-width");
        d.border.right = edge("border-right-width", "border-width");
        d.padding.left = edge("padding-left", "padding");
        d.padding.right = edge("padding-right", "padding");

        let horizontal = d.margin.left
            + d.margin.right
            + d.border.left
            + d.border.right
            + d.padding.left
            + d.padding.right;

        d.content.width = match style.and_then(|node| node.value("width")) {
            None => containing_block.width - horizontal,
            Some(width) if width.is_keyword("auto") => containing_block.width - horizontal,
            Some(width) => width.to_px(),
        };
    }

    fn calculate_block_position(&mut self, containing_block: Rect) {
        let style = self.box_type.styled_node();
        let zero = Value::Length(0.0, Unit::Px);
        let edge = |name: &str, shorthand: &str| {
            style.map_or(0.0, |node| node.lookup(name, shorthand, &zero).to_px())
        };

        let d = &mut self.dimensions;
        d.margin.top = edge("margin-top", "margin");
        d.margin.bottom = edge("margin-bottom", "margin");
        d.border.top = edge("border-top-width", "border-width");
        d.border.bottom = edge("border-bottom-width", "border-width");
        d.padding.top = edge("padding-top", "padding");
        d.padding.bottom = edge("padding-bottom", "padding");

        d.content.x = containing_block.x + d.margin.left + d.border.left + d.padding.left;
        d.content.y = containing_block.y
            + containing_block.height
            + d.margin.top
            + d.border.top
            + d.padding.top;
    }

    /// Inline elements carry no edges. Their children flow in the space the
    /// containing block offers, then the box shrinks to its widest line.
    fn layout_inline(&mut self, containing_block: Rect, font_metrics: &dyn FontMetrics) {
        self.dimensions = BoxDimensions {
            content: Rect::new(
                containing_block.x,
                containing_block.y,
                containing_block.width,
                0.0,
            ),
            ..BoxDimensions::default()
        };
        self.layout_children(font_metrics);

        if self.children.iter().all(|child| !child.is_block_level()) {
            self.dimensions.content.width = self
                .line_boxes
                .iter()
                .map(|line| line.used_width)
                .fold(0.0, f32::max);
        }
    }

    fn layout_text(&mut self, text: &str, containing_block: Rect, font_metrics: &dyn FontMetrics) {
        self.dimensions = BoxDimensions {
            content: Rect::new(
                containing_block.x,
                containing_block.y,
                px(font_metrics.advance_width(text)),
                px(font_metrics.line_height()),
            ),
            ..BoxDimensions::default()
        };
    }

    /// Lay out children in normal flow and set this box's content height.
    ///
    /// Block-level children stack vertically. Inline-level children are
    /// packed left to right into line boxes; a child that does not fit starts
    /// a new line, and a line always takes at least one child.
    fn layout_children(&mut self, font_metrics: &dyn FontMetrics) {
        let content = self.dimensions.content;
        let mut height = 0.0_f32;
        let mut line_boxes = Vec::new();
        let mut line: Option<OpenLine> = None;

        for (index, child) in self.children.iter_mut().enumerate() {
            if child.is_block_level() {
                if let Some(open) = line.take() {
                    height += close_line(&mut line_boxes, open);
                }
                child.layout(Rect { height, ..content }, font_metrics);
                height += child.dimensions.margin_box().height;
                continue;
            }

            let line_top = content.y + height;
            child.layout(
                Rect::new(content.x, line_top, content.width, 0.0),
                font_metrics,
            );

            let child_width = child.dimensions.margin_box().width;
            if let Some(full) = line.take_if(|open| !open.fits(child_width)) {
                height += close_line(&mut line_boxes, full);
            }
            line.get_or_insert_with(|| OpenLine::new(content, content.y + height, index))
                .place(child, index);
        }

        if let Some(open) = line.take() {
            height += close_line(&mut line_boxes, open);
        }

        self.dimensions.content.height = height;
        self.line_boxes = line_boxes;
    }

    /// Translate a box, its line boxes and its whole subtree.
    pub fn shift_box_tree(bx: &mut Self, dx: f32, dy: f32) {
        bx.dimensions.content.x += dx;
        bx.dimensions.content.y += dy;

        for lb in &mut bx.line_boxes {
            lb.bounds.x += dx;
            lb.bounds.y += dy;
        }

        for child in &mut bx.children {
            Self::shift_box_tree(child, dx, dy);
        }
    }

    /// Render the box tree as indented text, one box per line.
    ///
    /// ```text
    /// root (0, 0) 600×24
    ///   block div.a (12, 12) 576×0
    /// ```
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        let content = self.dimensions.content;
        let label = match self.box_type {
            BoxType::Text { text, .. } => format!("text {text:?}"),
            BoxType::Anonymous => "anonymous".to_owned(),
            BoxType::Root(_) => "root".to_owned(),
            BoxType::Block(node) | BoxType::Inline(node) => {
                let tag = node.element().map_or("?", |e| e.tag_name.as_str());
                format!("{} {tag}", self.box_type.kind())
            }
        };
        let _ = writeln!(
            out,
            "{:indent$}{label} ({}, {}) {}×{}",
            "",
            content.x,
            content.y,
            content.width,
            content.height,
            indent = depth * 2
        );
        for child in &self.children {
            child.dump_into(out, depth + 1);
        }
    }
}

fn close_line(line_boxes: &mut Vec<LineBox>, open: OpenLine) -> f32 {
    let line = open.close();
    let height = line.bounds.height;
    line_boxes.push(line);
    height
}

#[cfg(feature = "layout-trace")]
struct DepthGuard;

#[cfg(feature = "layout-trace")]
impl DepthGuard {
    fn enter(layout_box: &LayoutBox<'_>) -> Self {
        let depth = LAYOUT_DEPTH.with(|d| {
            let current = d.get();
            d.set(current + 1);
            current
        });
        eprintln!(
            "[LAYOUT DEPTH] depth={depth} box={} children={}",
            layout_box.box_type.kind(),
            layout_box.children.len()
        );
        Self
    }
}

#[cfg(feature = "layout-trace")]
impl Drop for DepthGuard {
    fn drop(&mut self) {
        LAYOUT_DEPTH.with(|d| d.set(d.get() - 1));
    }
}
