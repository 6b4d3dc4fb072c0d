//! Core types for DMark documents.
//!
//! This crate holds the document tree shared by the parser and by translators:
//! [`Node`], [`ElementNode`], the validated [`Identifier`] and the stable
//! [`Dump`] form used for snapshot testing.

mod dump;
mod identifier;
mod node;

pub use dump::Dump;
pub use identifier::{Identifier, IdentifierError};
pub use node::{Attributes, ElementNode, Node, NodeKind};

/// Default limit on element nesting, shared by the parser and translators.
pub const DEFAULT_MAX_DEPTH: usize = 256;
