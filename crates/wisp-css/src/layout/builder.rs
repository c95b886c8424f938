//! Box tree construction.
//!
//! [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)

use std::mem;

use wisp_common::warn_once;
use wisp_dom::NodeType;

use super::layout_box::{BoxType, LayoutBox};
use crate::cascade::StyledNode;
use crate::style::Value;

/// Elements that are block-level when no `display` value applies.
const BLOCK_TAGS: &[&str] = &["div", "p"];

/// How a styled node takes part in the box tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    /// The document root.
    Root,
    /// Block-level element.
    Block,
    /// Inline-level element.
    Inline,
    /// Text with at least one non-whitespace character.
    Text,
    /// Whitespace-only text. Generates no box.
    Suppressed,
}

impl StyledNode<'_> {
    /// Classify this node for box generation.
    ///
    /// An element's `display` keyword wins over the tag list. Values other
    /// than `block` and `inline` are reported once and treated as inline.
    #[must_use]
    pub fn display(&self) -> Display {
        match &self.node.node_type {
            NodeType::Root => Display::Root,
            NodeType::Text(text) if is_whitespace_only(text) => Display::Suppressed,
            NodeType::Text(_) => Display::Text,
            NodeType::Element(element) => match self.value("display") {
                Some(Value::Keyword(keyword)) if keyword == "block" => Display::Block,
                Some(Value::Keyword(keyword)) if keyword == "inline" => Display::Inline,
                Some(other) => {
                    warn_once(
                        "Layout",
                        &format!("unsupported display value '{other}', treating as inline"),
                    );
                    Display::Inline
                }
                None if BLOCK_TAGS.contains(&element.tag_name.as_str()) => Display::Block,
                None => Display::Inline,
            },
        }
    }
}

fn is_whitespace_only(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

/// Build the box for a styled node and its subtree.
///
/// Returns `None` only for whitespace-only text, so the call for a document
/// root always produces a box.
#[must_use]
pub fn build<'a>(node: &'a StyledNode<'a>) -> Option<LayoutBox<'a>> {
    let box_type = match node.display() {
        Display::Suppressed => return None,
        Display::Text => {
            let text = node.text()?;
            return Some(LayoutBox::new(BoxType::Text { node, text }));
        }
        Display::Root => BoxType::Root(node),
        Display::Block => BoxType::Block(node),
        Display::Inline => BoxType::Inline(node),
    };

    let mut layout_box = LayoutBox::new(box_type);
    layout_box.children = build_children(&node.children);
    Some(layout_box)
}

/// [§ 9.2.1.1 Anonymous block boxes](https://www.w3.org/TR/CSS2/visuren.html#anonymous-block-level)
///
/// "if a block container box has a block-level box inside it, then we force
/// it to have only block-level boxes inside it."
///
/// Inline children seen before the first block child are wrapped together.
/// After that, each run of inline children goes into a trailing anonymous
/// block, reusing the previous one when nothing block-level came between.
fn build_children<'a>(nodes: &'a [StyledNode<'a>]) -> Vec<LayoutBox<'a>> {
    let mut children: Vec<LayoutBox<'a>> = Vec::new();
    let mut only_inline = true;

    for child in nodes.iter().filter_map(build) {
        if child.is_block_level() {
            if only_inline && !children.is_empty() {
                let inline_run = mem::take(&mut children);
                children.push(LayoutBox::anonymous(inline_run));
            }
            only_inline = false;
            children.push(child);
        } else if only_inline {
            children.push(child);
        } else {
            match children.last_mut() {
                Some(last) if matches!(last.box_type, BoxType::Anonymous) => {
                    last.children.push(child);
                }
                _ => children.push(LayoutBox::anonymous(vec![child])),
            }
        }
    }

    children
}
