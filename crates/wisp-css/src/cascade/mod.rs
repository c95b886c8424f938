//! CSS cascade.
//!
//! Matches stylesheet rules against the document and builds a styled tree that
//! mirrors the document node for node. Each element gets a property map built
//! by applying every matching rule's declarations in ascending
//! (specificity, source order), so later applications overwrite earlier ones.
//! There is no inheritance: a property is only set on the elements a rule
//! matches.

use std::collections::HashMap;

use crate::parser::{Rule, Stylesheet};
use crate::selector::Specificity;
use crate::style::Value;
use wisp_dom::{DomTree, ElementData, Node, NodeId, NodeType};

/// Resolved property name to value map for one node.
pub type PropertyMap = HashMap<String, Value>;

/// A document node together with its resolved properties.
///
/// The styled tree has exactly the shape of the document tree. Each styled
/// node borrows its document node, so the document must outlive it.
#[derive(Debug, Clone)]
pub struct StyledNode<'a> {
    /// Id of the source node in the document arena.
    pub node_id: NodeId,
    /// The source node.
    pub node: &'a Node,
    /// Resolved properties; always empty for Root and Text nodes.
    pub specified_values: PropertyMap,
    /// Styled children, in document order.
    pub children: Vec<StyledNode<'a>>,
}

impl<'a> StyledNode<'a> {
    /// The resolved value of a property, if any rule set it.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.specified_values.get(name)
    }

    /// Two-level lookup: `name`, then `fallback_name`, then `default`.
    ///
    /// Used for edge properties, e.g. `margin-left` falling back to `margin`.
    #[must_use]
    pub fn lookup(&self, name: &str, fallback_name: &str, default: &Value) -> Value {
        self.value(name)
            .or_else(|| self.value(fallback_name))
            .unwrap_or(default)
            .clone()
    }

    /// Element data if this is an element node.
    #[must_use]
    pub const fn element(&self) -> Option<&'a ElementData> {
        match &self.node.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        }
    }

    /// Text content if this is a text node.
    #[must_use]
    pub fn text(&self) -> Option<&'a str> {
        match &self.node.node_type {
            NodeType::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

/// A rule that matched an element, with its cascade sort key.
struct MatchedRule<'s> {
    specificity: Specificity,
    source_order: usize,
    rule: &'s Rule,
}

/// Build the styled tree for a whole document.
#[must_use]
pub fn resolve<'a>(tree: &'a DomTree, stylesheet: &Stylesheet) -> StyledNode<'a> {
    style_node(tree, tree.root(), tree.root_node(), stylesheet)
}

fn style_node<'a>(
    tree: &'a DomTree,
    id: NodeId,
    node: &'a Node,
    stylesheet: &Stylesheet,
) -> StyledNode<'a> {
    let specified_values = match &node.node_type {
        NodeType::Element(element) => specified_values(element, stylesheet),
        NodeType::Root | NodeType::Text(_) => PropertyMap::new(),
    };

    let children = node
        .children
        .iter()
        .filter_map(|&child_id| {
            tree.get(child_id)
                .map(|child| style_node(tree, child_id, child, stylesheet))
        })
        .collect();

    StyledNode {
        node_id: id,
        node,
        specified_values,
        children,
    }
}

/// Apply every matching rule to one element.
///
/// Rules are sorted by specificity, ties broken by source order. The sort is
/// stable, and source order is part of the key, so the result does not depend
/// on the sort algorithm.
fn specified_values(element: &ElementData, stylesheet: &Stylesheet) -> PropertyMap {
    let mut matched: Vec<MatchedRule<'_>> = matching_rules(element, stylesheet);
    matched.sort_by_key(|m| (m.specificity, m.source_order));

    let mut values = PropertyMap::new();
    for m in matched {
        for declaration in &m.rule.declarations {
            let _ = values.insert(declaration.name.clone(), declaration.value.clone());
        }
    }
    values
}

fn matching_rules<'s>(element: &ElementData, stylesheet: &'s Stylesheet) -> Vec<MatchedRule<'s>> {
    stylesheet
        .rules
        .iter()
        .enumerate()
        .filter(|(_, rule)| rule.selectors.iter().any(|s| s.matches(element)))
        .map(|(source_order, rule)| MatchedRule {
            specificity: rule.specificity(),
            source_order,
            rule,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::style::{ColorValue, Unit};

    fn element_tree(data: ElementData) -> DomTree {
        let mut tree = DomTree::new();
        let id = tree.alloc(NodeType::Element(data));
        tree.append_child(NodeId::ROOT, id);
        tree
    }

    #[test]
    fn test_higher_specificity_wins_regardless_of_order() {
        let tree = element_tree(ElementData::new("p").with_attr("id", "x"));
        let sheet = parse("#x { font-weight: nono } p { font-weight: bold }").unwrap();
        let styled = resolve(&tree, &sheet);
        assert_eq!(
            styled.children[0].value("font-weight"),
            Some(&Value::Keyword("nono".into()))
        );
    }

    #[test]
    fn test_equal_specificity_later_rule_wins() {
        let tree = element_tree(ElementData::new("div").with_attr("class", "a b"));
        let sheet = parse(".a { width: 10px } .b { width: 20px }").unwrap();
        let styled = resolve(&tree, &sheet);
        assert_eq!(styled.children[0].value("width"), Some(&Value::Length(20.0, Unit::Px)));
    }

    #[test]
    fn test_lower_rule_keeps_properties_not_overridden() {
        let tree = element_tree(ElementData::new("div").with_attr("id", "main"));
        let sheet = parse("div { color: #000000; width: 5px } #main { width: 7px }").unwrap();
        let styled = resolve(&tree, &sheet);
        let div = &styled.children[0];
        assert_eq!(div.value("color"), Some(&Value::Color(ColorValue::BLACK)));
        assert_eq!(div.value("width"), Some(&Value::Length(7.0, Unit::Px)));
    }

    #[test]
    fn test_lookup_falls_back_to_shorthand_then_default() {
        let tree = element_tree(ElementData::new("div"));
        let sheet = parse("div { margin: 4px; margin-top: 9px }").unwrap();
        let styled = resolve(&tree, &sheet);
        let div = &styled.children[0];
        let zero = Value::Length(0.0, Unit::Px);
        assert_eq!(div.lookup("margin-top", "margin", &zero), Value::Length(9.0, Unit::Px));
        assert_eq!(div.lookup("margin-left", "margin", &zero), Value::Length(4.0, Unit::Px));
        assert_eq!(div.lookup("padding-left", "padding", &zero), zero);
    }
}
