use std::fmt::Write;

use wisp_dom::{AttributesMap, DomTree, ElementData, NodeId, NodeType};

use crate::error::ParseError;
use crate::tokenizer::Token;

/// An entry on the stack of open elements.
#[derive(Debug)]
struct OpenElement {
    node_id: NodeId,
    tag_name: String,
    line: usize,
}

/// Builds a [`DomTree`] from a token stream.
///
/// Every start tag must be closed by an end tag with the same name, innermost
/// first. Self-closing tags produce a childless element and never enter the
/// stack of open elements.
pub struct HtmlParser {
    tokens: Vec<Token>,
    tree: DomTree,
    stack_of_open_elements: Vec<OpenElement>,
}

impl HtmlParser {
    /// Create a parser over a token stream from [`crate::HtmlTokenizer`].
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            tree: DomTree::new(),
            stack_of_open_elements: Vec::new(),
        }
    }

    /// Run tree construction.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MismatchedEndTag`], [`ParseError::UnexpectedEndTag`]
    /// or [`ParseError::UnclosedElement`] when the tags are not balanced.
    pub fn run(mut self) -> Result<DomTree, ParseError> {
        let tokens = std::mem::take(&mut self.tokens);
        for token in tokens {
            match token {
                Token::Text { data, .. } => {
                    let parent = self.current_node();
                    let id = self.tree.alloc(NodeType::Text(data));
                    self.tree.append_child(parent, id);
                }
                Token::StartTag {
                    name,
                    self_closing,
                    attributes,
                    line,
                } => {
                    let mut attrs = AttributesMap::new();
                    for attr in attributes {
                        // First occurrence wins for duplicated attribute names.
                        let _ = attrs.entry(attr.name).or_insert(attr.value);
                    }
                    let parent = self.current_node();
                    let id = self.tree.alloc(NodeType::Element(ElementData {
                        tag_name: name.clone(),
                        attrs,
                    }));
                    self.tree.append_child(parent, id);
                    if !self_closing {
                        self.stack_of_open_elements.push(OpenElement {
                            node_id: id,
                            tag_name: name,
                            line,
                        });
                    }
                }
                Token::EndTag { name, line } => self.close_element(name, line)?,
                Token::EndOfFile => break,
            }
        }

        if let Some(open) = self.stack_of_open_elements.pop() {
            return Err(ParseError::UnclosedElement {
                tag: open.tag_name,
                line: open.line,
            });
        }
        Ok(self.tree)
    }

    fn current_node(&self) -> NodeId {
        self.stack_of_open_elements
            .last()
            .map_or(NodeId::ROOT, |open| open.node_id)
    }

    fn close_element(&mut self, name: String, line: usize) -> Result<(), ParseError> {
        match self.stack_of_open_elements.pop() {
            None => Err(ParseError::UnexpectedEndTag { tag: name, line }),
            Some(open) if open.tag_name != name => Err(ParseError::MismatchedEndTag {
                expected: open.tag_name,
                found: name,
                line,
            }),
            Some(_) => Ok(()),
        }
    }
}

/// Render a tree as indented text, one node per line.
///
/// Attributes are sorted by name so the output is stable. Text is quoted with
/// newlines escaped and spaces shown as `·`.
#[must_use]
pub fn format_tree(tree: &DomTree) -> String {
    let mut out = String::new();
    for (id, depth) in tree.descendants(tree.root()) {
        let prefix = "  ".repeat(depth);
        let _ = if let Some(data) = tree.as_element(id) {
            let mut attrs: Vec<_> = data.attrs.iter().collect();
            attrs.sort();
            let attrs: String = attrs
                .into_iter()
                .map(|(k, v)| {
                    if v.is_empty() {
                        format!(" {k}")
                    } else {
                        format!(" {k}=\"{v}\"")
                    }
                })
                .collect();
            writeln!(out, "{prefix}<{}{attrs}>", data.tag_name)
        } else if let Some(text) = tree.as_text(id) {
            let display = text.replace('\n', "\\n").replace(' ', "\u{00B7}");
            writeln!(out, "{prefix}\"{display}\"")
        } else {
            writeln!(out, "{prefix}#root")
        };
    }
    out
}
