//! Depth-first translation of DMark trees.
//!
//! A [`Translator`] supplies handlers for text leaves and elements; the
//! provided methods walk the forest in document order and concatenate the
//! handler results. Handlers receive the caller's context by reference and
//! may pass a derived copy to [`Translator::handle_children`] to expose
//! ancestor-dependent state.
//!
//! # Example
//!
//! ```
//! use dmark::{ElementNode, Path, TranslateError, Translator};
//!
//! struct Html;
//!
//! impl Translator for Html {
//!     type Context = ();
//!     type Output = String;
//!     type Error = TranslateError;
//!
//!     fn handle_string(&self, text: &str, _context: &()) -> Result<String, TranslateError> {
//!         Ok(text.to_owned())
//!     }
//!
//!     fn handle_element(
//!         &self,
//!         element: &ElementNode,
//!         context: &(),
//!         path: &Path<'_>,
//!     ) -> Result<String, TranslateError> {
//!         let inner = self.translate_children(element, context, path)?;
//!         Ok(format!("<{0}>{inner}</{0}>", element.name()))
//!     }
//! }
//!
//! let nodes = dmark::parse("#p Hello %em{world}").unwrap();
//! assert_eq!(Html.translate(&nodes, &()).unwrap(), "<p>Hello <em>world</em></p>");
//! ```

use log::trace;
use thiserror::Error;

use dmark_core::{DEFAULT_MAX_DEPTH, ElementNode, Identifier, Node, NodeKind};

/// Failures raised by the provided [`Translator`] methods.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// A node reached a handler the translator does not implement.
    #[error("unhandled {0}")]
    UnhandledNode(NodeKind),

    #[error("nesting depth exceeds the maximum of {max_depth} at element `{element}`")]
    DepthExceeded {
        element: Identifier,
        max_depth: usize,
    },
}

/// Output types that can be assembled from per-node results.
pub trait Concat: Sized {
    fn concat(parts: Vec<Self>) -> Self;
}

impl Concat for String {
    fn concat(parts: Vec<Self>) -> Self {
        parts.concat()
    }
}

impl<T> Concat for Vec<T> {
    fn concat(parts: Vec<Self>) -> Self {
        parts.into_iter().flatten().collect()
    }
}

/// The chain of elements enclosing the node being translated.
///
/// The root path is empty; every [`Translator::handle_children`] call
/// extends it by the element whose children are visited.
#[derive(Debug, Clone, Copy)]
pub struct Path<'a> {
    element: Option<&'a ElementNode>,
    parent: Option<&'a Path<'a>>,
    depth: usize,
    max_depth: usize,
}

impl<'a> Path<'a> {
    /// Creates an empty path allowing at most `max_depth` enclosing elements.
    pub fn root(max_depth: usize) -> Self {
        Self {
            element: None,
            parent: None,
            depth: 0,
            max_depth,
        }
    }

    /// Number of enclosing elements.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The innermost enclosing element.
    pub fn parent(&self) -> Option<&'a ElementNode> {
        self.element
    }

    /// Iterates over the enclosing elements, innermost first.
    pub fn ancestors(&self) -> Ancestors<'a> {
        Ancestors {
            next: self.element.map(|element| (element, self.parent)),
        }
    }

    /// Counts the enclosing elements named `name`.
    pub fn count(&self, name: &str) -> usize {
        self.ancestors()
            .filter(|element| element.name() == name)
            .count()
    }

    /// Extends the path by `element`.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::DepthExceeded`] if the extended path would
    /// be deeper than [`max_depth`](Self::max_depth).
    pub fn child(&'a self, element: &'a ElementNode) -> Result<Path<'a>, TranslateError> {
        let depth = self.depth + 1;
        if depth > self.max_depth {
            return Err(TranslateError::DepthExceeded {
                element: element.name().clone(),
                max_depth: self.max_depth,
            });
        }

        Ok(Path {
            element: Some(element),
            parent: Some(self),
            depth,
            max_depth: self.max_depth,
        })
    }
}

/// Iterator over the elements of a [`Path`], innermost first.
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    next: Option<(&'a ElementNode, Option<&'a Path<'a>>)>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a ElementNode;

    fn next(&mut self) -> Option<Self::Item> {
        let (element, parent) = self.next.take()?;
        self.next = parent.and_then(|path| path.element.map(|element| (element, path.parent)));
        Some(element)
    }
}

/// A tree-walking translator over DMark nodes.
///
/// Implementors override [`handle_string`](Self::handle_string) and
/// [`handle_element`](Self::handle_element); the defaults fail with
/// [`TranslateError::UnhandledNode`].
pub trait Translator {
    /// Caller-defined state threaded read-only through the walk.
    type Context;
    type Output: Concat;
    type Error: From<TranslateError>;

    /// Maximum number of nested elements [`translate`](Self::translate) visits.
    fn max_depth(&self) -> usize {
        DEFAULT_MAX_DEPTH
    }

    fn handle_string(
        &self,
        _text: &str,
        _context: &Self::Context,
    ) -> Result<Self::Output, Self::Error> {
        Err(TranslateError::UnhandledNode(NodeKind::Text).into())
    }

    fn handle_element(
        &self,
        element: &ElementNode,
        _context: &Self::Context,
        _path: &Path<'_>,
    ) -> Result<Self::Output, Self::Error> {
        Err(TranslateError::UnhandledNode(NodeKind::Element(element.name().clone())).into())
    }

    /// Dispatches `node` to the matching handler.
    fn handle_node(
        &self,
        node: &Node,
        context: &Self::Context,
        path: &Path<'_>,
    ) -> Result<Self::Output, Self::Error> {
        match node {
            Node::Text(text) => self.handle_string(text, context),
            Node::Element(element) => self.handle_element(element, context, path),
        }
    }

    /// Handles each child of `element` in order, with `element` appended to `path`.
    fn handle_children(
        &self,
        element: &ElementNode,
        context: &Self::Context,
        path: &Path<'_>,
    ) -> Result<Vec<Self::Output>, Self::Error> {
        let path = path.child(element)?;
        element
            .children()
            .iter()
            .map(|child| self.handle_node(child, context, &path))
            .collect()
    }

    /// Like [`handle_children`](Self::handle_children), concatenating the results.
    fn translate_children(
        &self,
        element: &ElementNode,
        context: &Self::Context,
        path: &Path<'_>,
    ) -> Result<Self::Output, Self::Error> {
        self.handle_children(element, context, path)
            .map(Concat::concat)
    }

    /// Translates a forest into the concatenation of its nodes' outputs.
    fn translate(&self, nodes: &[Node], context: &Self::Context) -> Result<Self::Output, Self::Error> {
        self.translate_with_limit(nodes, context, self.max_depth())
    }

    /// Like [`translate`](Self::translate) with an explicit depth limit.
    fn translate_with_limit(
        &self,
        nodes: &[Node],
        context: &Self::Context,
        max_depth: usize,
    ) -> Result<Self::Output, Self::Error> {
        trace!(nodes = nodes.len(), max_depth; "Translating forest");

        let path = Path::root(max_depth);
        nodes
            .iter()
            .map(|node| self.handle_node(node, context, &path))
            .collect::<Result<Vec<_>, _>>()
            .map(Concat::concat)
    }
}

#[cfg(test)]
mod tests {
    use dmark_core::Attributes;

    use super::*;

    fn element(name: &str, children: Vec<Node>) -> ElementNode {
        ElementNode::new(Identifier::new(name).unwrap(), Attributes::new(), children)
    }

    #[test]
    fn test_root_path_is_empty() {
        let path = Path::root(4);
        assert_eq!(path.depth(), 0);
        assert!(path.parent().is_none());
        assert_eq!(path.ancestors().count(), 0);
    }

    #[test]
    fn test_ancestors_are_innermost_first() {
        let section = element("section", vec![]);
        let nested = element("section", vec![]);
        let para = element("para", vec![]);

        let root = Path::root(8);
        let one = root.child(&section).unwrap();
        let two = one.child(&nested).unwrap();
        let three = two.child(&para).unwrap();

        assert_eq!(three.depth(), 3);
        assert_eq!(three.parent().map(|e| e.name().as_str()), Some("para"));

        let names: Vec<&str> = three.ancestors().map(|e| e.name().as_str()).collect();
        assert_eq!(names, ["para", "section", "section"]);
        assert_eq!(three.count("section"), 2);
        assert_eq!(three.count("list"), 0);
    }

    #[test]
    fn test_child_past_limit_fails() {
        let outer = element("outer", vec![]);
        let inner = element("inner", vec![]);

        let root = Path::root(1);
        let one = root.child(&outer).unwrap();
        let err = one.child(&inner).unwrap_err();

        assert_eq!(
            err,
            TranslateError::DepthExceeded {
                element: Identifier::new("inner").unwrap(),
                max_depth: 1,
            }
        );
        assert_eq!(
            err.to_string(),
            "nesting depth exceeds the maximum of 1 at element `inner`"
        );
    }

    #[test]
    fn test_concat() {
        assert_eq!(<String as Concat>::concat(vec!["a".into(), "b".into()]), "ab");
        assert_eq!(<Vec<i32> as Concat>::concat(vec![vec![1, 2], vec![], vec![3]]), [1, 2, 3]);
    }

    #[test]
    fn test_unhandled_messages() {
        assert_eq!(
            TranslateError::UnhandledNode(NodeKind::Text).to_string(),
            "unhandled text node"
        );
        assert_eq!(
            TranslateError::UnhandledNode(NodeKind::Element(Identifier::new("em").unwrap())).to_string(),
            "unhandled element `em`"
        );
    }
}
