//! Visual tree produced by slide rendering.
//!
//! A tree is made of three node kinds: containers that arrange ordered
//! children, text runs, and decorations. Every node carries a [`Style`]
//! attribute map; the `class` attribute holds utility classes such as
//! `text-center` or `font-bold`. Display hosts decide how to paint them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attribute key holding whitespace-separated utility classes.
pub const CLASS_ATTR: &str = "class";

/// Ordered style attribute map attached to every node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(BTreeMap<String, String>);

impl Style {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a style holding only the given utility classes.
    pub fn class(classes: &str) -> Self {
        Self::new().with_class(classes)
    }

    /// Set an attribute, replacing any previous value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Append utility classes to the `class` attribute.
    pub fn with_class(mut self, classes: &str) -> Self {
        let classes = classes.trim();
        if classes.is_empty() {
            return self;
        }
        self.0
            .entry(CLASS_ATTR.to_string())
            .and_modify(|existing| {
                existing.push(' ');
                existing.push_str(classes);
            })
            .or_insert_with(|| classes.to_string());
        self
    }

    /// Look up an attribute value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Iterate over the utility classes in declaration order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.get(CLASS_ATTR).unwrap_or("").split_whitespace()
    }

    /// Whether the `class` attribute contains the given utility class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// How a container arranges its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Layout {
    /// Children stacked top to bottom.
    Stack,
    /// Children placed side by side.
    Row,
    /// Children flowed into a fixed number of columns.
    Grid { columns: usize },
    /// Children are list items.
    List { ordered: bool },
}

/// Semantic role of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextRole {
    /// Heading; level 1 is the most prominent.
    Heading { level: u8 },
    Body,
    Caption,
    Emphasis,
}

/// Decorative element with no text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// Horizontal rule.
    Divider,
    /// Accent bar or block, purely visual.
    Accent,
    /// Named icon glyph.
    Icon { name: String },
}

/// A node of the visual tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Container {
        layout: Layout,
        #[serde(default, skip_serializing_if = "Style::is_empty")]
        style: Style,
        #[serde(default)]
        children: Vec<Node>,
    },
    Text {
        role: TextRole,
        #[serde(default, skip_serializing_if = "Style::is_empty")]
        style: Style,
        content: String,
    },
    Decoration {
        shape: Shape,
        #[serde(default, skip_serializing_if = "Style::is_empty")]
        style: Style,
    },
}

impl Node {
    /// Create a container with the given layout and children.
    pub fn container(layout: Layout, children: Vec<Node>) -> Self {
        Node::Container {
            layout,
            style: Style::new(),
            children,
        }
    }

    pub fn stack(children: Vec<Node>) -> Self {
        Self::container(Layout::Stack, children)
    }

    pub fn row(children: Vec<Node>) -> Self {
        Self::container(Layout::Row, children)
    }

    pub fn grid(columns: usize, children: Vec<Node>) -> Self {
        Self::container(Layout::Grid { columns }, children)
    }

    pub fn list(ordered: bool, children: Vec<Node>) -> Self {
        Self::container(Layout::List { ordered }, children)
    }

    /// Create a text node with the given role.
    pub fn text(role: TextRole, content: impl Into<String>) -> Self {
        Node::Text {
            role,
            style: Style::new(),
            content: content.into(),
        }
    }

    pub fn heading(level: u8, content: impl Into<String>) -> Self {
        Self::text(TextRole::Heading { level }, content)
    }

    pub fn body(content: impl Into<String>) -> Self {
        Self::text(TextRole::Body, content)
    }

    pub fn caption(content: impl Into<String>) -> Self {
        Self::text(TextRole::Caption, content)
    }

    pub fn emphasis(content: impl Into<String>) -> Self {
        Self::text(TextRole::Emphasis, content)
    }

    /// Create a decoration node.
    pub fn decoration(shape: Shape) -> Self {
        Node::Decoration {
            shape,
            style: Style::new(),
        }
    }

    pub fn divider() -> Self {
        Self::decoration(Shape::Divider)
    }

    pub fn accent() -> Self {
        Self::decoration(Shape::Accent)
    }

    pub fn icon(name: impl Into<String>) -> Self {
        Self::decoration(Shape::Icon { name: name.into() })
    }

    /// Append utility classes to this node's style.
    pub fn with_class(mut self, classes: &str) -> Self {
        let style = std::mem::take(self.style_mut());
        *self.style_mut() = style.with_class(classes);
        self
    }

    /// Set a style attribute on this node.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let style = std::mem::take(self.style_mut());
        *self.style_mut() = style.with(key, value);
        self
    }

    pub fn style(&self) -> &Style {
        match self {
            Node::Container { style, .. }
            | Node::Text { style, .. }
            | Node::Decoration { style, .. } => style,
        }
    }

    fn style_mut(&mut self) -> &mut Style {
        match self {
            Node::Container { style, .. }
            | Node::Text { style, .. }
            | Node::Decoration { style, .. } => style,
        }
    }

    /// Child nodes; empty for text and decoration nodes.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Container { children, .. } => children,
            _ => &[],
        }
    }

    /// All text content in document order.
    pub fn text_content(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Node::Container { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Node::Text { content, .. } => out.push(content),
            Node::Decoration { .. } => {}
        }
    }

    /// Total number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Node::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_with_class_appends() {
        let style = Style::class("text-4xl").with_class("font-bold  text-center");

        assert_eq!(style.get(CLASS_ATTR), Some("text-4xl font-bold  text-center"));
        assert_eq!(
            style.classes().collect::<Vec<_>>(),
            vec!["text-4xl", "font-bold", "text-center"]
        );
        assert!(style.has_class("text-center"));
        assert!(!style.has_class("text"));
    }

    #[test]
    fn test_style_empty_class_is_ignored() {
        let style = Style::new().with_class("   ");
        assert!(style.is_empty());
    }

    #[test]
    fn test_text_content_in_document_order() {
        let tree = Node::stack(vec![
            Node::heading(1, "Proposal"),
            Node::divider(),
            Node::list(false, vec![Node::body("One"), Node::body("Two")]),
            Node::caption("Footer"),
        ]);

        assert_eq!(tree.text_content(), vec!["Proposal", "One", "Two", "Footer"]);
    }

    #[test]
    fn test_node_count() {
        let tree = Node::stack(vec![
            Node::heading(1, "A"),
            Node::row(vec![Node::body("B"), Node::icon("star")]),
        ]);
        assert_eq!(tree.node_count(), 5);
        assert!(Node::body("leaf").children().is_empty());
    }

    #[test]
    fn test_with_class_on_leaf_and_container() {
        let text = Node::heading(1, "Title").with_class("text-center");
        assert!(text.style().has_class("text-center"));

        let container = Node::stack(vec![]).with_class("p-8").with_attr("id", "root");
        assert_eq!(container.style().get("id"), Some("root"));
        assert!(container.style().has_class("p-8"));
    }

    #[test]
    fn test_json_shape() {
        let node = Node::heading(2, "Pillars");
        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["kind"], "text");
        assert_eq!(json["role"]["type"], "heading");
        assert_eq!(json["role"]["level"], 2);
        assert_eq!(json["content"], "Pillars");
        assert!(json.get("style").is_none());
    }

    #[test]
    fn test_json_parse_defaults_style_and_children() {
        let json = r#"{"kind":"container","layout":{"type":"grid","columns":3}}"#;
        let node: Node = serde_json::from_str(json).unwrap();

        assert_eq!(node, Node::grid(3, vec![]));
    }
}
