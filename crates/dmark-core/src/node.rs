//! The DMark document tree.
//!
//! A parsed document is a forest of [`Node`]s. Each node is either a text leaf
//! or an [`ElementNode`] carrying a name, attributes and ordered children.
//! Nodes are immutable once constructed.

use std::fmt;

use indexmap::IndexMap;

use crate::{dump::Dump, identifier::Identifier};

/// Attributes of an element, keyed by name.
///
/// Iteration follows first-insertion order; equality ignores order.
pub type Attributes = IndexMap<Identifier, String>;

/// A single node of a DMark tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A run of literal text.
    Text(String),
    /// A named block or inline element.
    Element(ElementNode),
}

impl Node {
    /// Creates a text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Returns the kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Text(_) => NodeKind::Text,
            Node::Element(element) => NodeKind::Element(element.name.clone()),
        }
    }

    /// Returns the text of a text leaf.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }

    /// Returns the element of an element node.
    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Node::Text(_) => None,
            Node::Element(element) => Some(element),
        }
    }

    /// Returns the stable debug dump of this node.
    ///
    /// ```
    /// use dmark_core::{ElementNode, Identifier, Node};
    ///
    /// let node = Node::from(ElementNode::new(
    ///     Identifier::new("p").unwrap(),
    ///     Default::default(),
    ///     vec![Node::text("hi")],
    /// ));
    /// assert_eq!(node.dump().to_string(), r#"Element(p, ["hi"])"#);
    /// ```
    pub fn dump(&self) -> Dump<'_> {
        Dump::node(self)
    }
}

impl From<ElementNode> for Node {
    fn from(element: ElementNode) -> Self {
        Node::Element(element)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_owned())
    }
}

/// A named element with attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
    name: Identifier,
    attributes: Attributes,
    children: Vec<Node>,
}

impl ElementNode {
    /// Creates an element node.
    pub fn new(name: Identifier, attributes: Attributes, children: Vec<Node>) -> Self {
        Self {
            name,
            attributes,
            children,
        }
    }

    /// Returns the element name.
    pub fn name(&self) -> &Identifier {
        &self.name
    }

    /// Returns the attributes in insertion order.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns the value of the attribute `key`, if present.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Returns the child nodes in document order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns the concatenated text of all descendant text leaves.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Returns the stable debug dump of this element.
    pub fn dump(&self) -> Dump<'_> {
        Dump::element(self)
    }

    /// Decomposes the element into its name, attributes and children.
    pub fn into_parts(self) -> (Identifier, Attributes, Vec<Node>) {
        (self.name, self.attributes, self.children)
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => collect_text(&element.children, out),
        }
    }
}

/// The kind of a [`Node`], as reported in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Text,
    Element(Identifier),
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Text => write!(f, "text node"),
            NodeKind::Element(name) => write!(f, "element `{name}`"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Identifier {
        Identifier::new(name).unwrap()
    }

    fn para(attributes: Attributes, children: Vec<Node>) -> ElementNode {
        ElementNode::new(ident("para"), attributes, children)
    }

    #[test]
    fn test_structural_equality() {
        let a = para(Attributes::new(), vec![Node::text("Hello!")]);
        let b = para(Attributes::new(), vec![Node::text("Hello!")]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_differs_in_name() {
        let a = para(Attributes::new(), vec![Node::text("Hello!")]);
        let b = ElementNode::new(ident("giraffe"), Attributes::new(), vec![Node::text("Hello!")]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_differs_in_attributes() {
        let mut attributes = Attributes::new();
        attributes.insert(ident("friend"), "donkey".to_owned());

        let a = para(Attributes::new(), vec![Node::text("Hello!")]);
        let b = para(attributes, vec![Node::text("Hello!")]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_differs_in_children() {
        let a = para(Attributes::new(), vec![Node::text("Hello!")]);
        let b = para(Attributes::new(), vec![]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_attribute_order_does_not_affect_equality() {
        let mut forward = Attributes::new();
        forward.insert(ident("only"), "web".to_owned());
        forward.insert(ident("animal"), "donkey".to_owned());

        let mut backward = Attributes::new();
        backward.insert(ident("animal"), "donkey".to_owned());
        backward.insert(ident("only"), "web".to_owned());

        assert_eq!(para(forward, vec![]), para(backward, vec![]));
    }

    #[test]
    fn test_text_never_equals_element() {
        let text = Node::text("para");
        let element = Node::from(para(Attributes::new(), vec![]));
        assert_ne!(text, element);
    }

    #[test]
    fn test_kind() {
        assert_eq!(Node::text("x").kind(), NodeKind::Text);
        assert_eq!(
            Node::from(para(Attributes::new(), vec![])).kind(),
            NodeKind::Element(ident("para"))
        );
        assert_eq!(NodeKind::Text.to_string(), "text node");
        assert_eq!(NodeKind::Element(ident("em")).to_string(), "element `em`");
    }

    #[test]
    fn test_accessors() {
        let mut attributes = Attributes::new();
        attributes.insert(ident("only"), "web".to_owned());
        attributes.insert(ident("animal"), "donkey".to_owned());
        let p = para(attributes, vec![Node::text("a"), Node::text("b")]);

        assert_eq!(p.name().as_str(), "para");
        let keys: Vec<_> = p.attributes().keys().map(Identifier::as_str).collect();
        assert_eq!(keys, ["only", "animal"]);
        assert_eq!(p.children(), [Node::text("a"), Node::text("b")]);
    }

    #[test]
    fn test_attribute_lookup() {
        let mut attributes = Attributes::new();
        attributes.insert(ident("target"), "https://example.com".to_owned());
        let link = ElementNode::new(ident("link"), attributes, vec![]);

        assert_eq!(link.attribute("target"), Some("https://example.com"));
        assert_eq!(link.attribute("missing"), None);
    }

    #[test]
    fn test_text_content() {
        let em = ElementNode::new(ident("em"), Attributes::new(), vec![Node::text("Hello")]);
        let p = para(Attributes::new(), vec![em.into(), Node::text(" world!")]);
        assert_eq!(p.text_content(), "Hello world!");
    }
}
