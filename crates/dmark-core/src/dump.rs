//! Stable debug dump of DMark trees.
//!
//! The dump format is used for snapshot tests and must stay byte-for-byte
//! reproducible:
//!
//! - text: a double-quoted string, `"hi"`
//! - element: `Element(name, [children])`, or `Element(name, {"k"=>"v"}, [children])`
//!   when attributes are present
//! - forest: `[node, node]`

use std::fmt;

use crate::node::{ElementNode, Node};

/// A displayable dump of a node, element, or forest.
#[derive(Debug, Clone, Copy)]
pub struct Dump<'a>(Subject<'a>);

#[derive(Debug, Clone, Copy)]
enum Subject<'a> {
    Node(&'a Node),
    Element(&'a ElementNode),
    Forest(&'a [Node]),
}

impl<'a> Dump<'a> {
    pub fn node(node: &'a Node) -> Self {
        Self(Subject::Node(node))
    }

    pub fn element(element: &'a ElementNode) -> Self {
        Self(Subject::Element(element))
    }

    /// Dumps a sequence of nodes as a bracketed list.
    ///
    /// ```
    /// use dmark_core::{Dump, Node};
    ///
    /// let forest = vec![Node::text("a"), Node::text("b")];
    /// assert_eq!(Dump::forest(&forest).to_string(), r#"["a", "b"]"#);
    /// ```
    pub fn forest(nodes: &'a [Node]) -> Self {
        Self(Subject::Forest(nodes))
    }
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Subject::Node(node) => write_node(f, node),
            Subject::Element(element) => write_element(f, element),
            Subject::Forest(nodes) => write_list(f, nodes),
        }
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node) -> fmt::Result {
    match node {
        Node::Text(text) => write!(f, "{text:?}"),
        Node::Element(element) => write_element(f, element),
    }
}

fn write_element(f: &mut fmt::Formatter<'_>, element: &ElementNode) -> fmt::Result {
    write!(f, "Element({}, ", element.name())?;

    if !element.attributes().is_empty() {
        f.write_str("{")?;
        for (i, (key, value)) in element.attributes().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}=>{value:?}", key.as_str())?;
        }
        f.write_str("}, ")?;
    }

    write_list(f, element.children())?;
    f.write_str(")")
}

fn write_list(f: &mut fmt::Formatter<'_>, nodes: &[Node]) -> fmt::Result {
    f.write_str("[")?;
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_node(f, node)?;
    }
    f.write_str("]")
}
