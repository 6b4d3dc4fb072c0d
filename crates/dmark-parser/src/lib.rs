//! Parser for the DMark markup language.
//!
//! DMark documents are made of indented blocks (`#name[attrs] text`) holding
//! inline content with `%name[attrs]{...}` elements. Parsing produces a
//! forest of [`Node`]s or a single [`ParserError`] describing the first
//! failure; there is no recovery.
//!
//! ```
//! let nodes = dmark_parser::parse("#p Hello %em{world}!").unwrap();
//! assert_eq!(
//!     dmark_core::Dump::forest(&nodes).to_string(),
//!     r#"[Element(p, ["Hello ", Element(em, ["world"]), "!"])]"#
//! );
//! ```

pub mod error;

mod attributes;
mod block;
mod config;
mod cursor;
mod inline;


pub use config::ParserConfig;
pub use error::ParserError;

use log::{debug, trace};
use winnow::stream::Location;

use dmark_core::Node;

use cursor::Cursor;

/// Parses `source` with the default [`ParserConfig`].
///
/// # Errors
///
/// Returns the first [`ParserError`] encountered.
pub fn parse(source: &str) -> Result<Vec<Node>, ParserError> {
    Parser::default().parse(source)
}

/// A configured DMark parser.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses `source` into its top-level block elements.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParserError`] encountered.
    pub fn parse(&self, source: &str) -> Result<Vec<Node>, ParserError> {
        trace!(len = source.len(), max_depth = self.config.max_depth(); "Parsing document");

        let mut input = Cursor::new(source);

        match block::document(&mut input, self.config.max_depth()) {
            Ok(nodes) => {
                debug!(blocks = nodes.len(); "Document parsed");
                Ok(nodes)
            }
            Err(err) => {
                let err = ParserError::from_modal(source, err, input.current_token_start());
                debug!(line = err.line() + 1, col = err.col() + 1, code = err.code().as_str(); "Parse failed");
                Err(err)
            }
        }
    }
}
