//! DMark - A lightweight, indentation-sensitive markup language.
//!
//! Documents are parsed into a forest of named elements and text leaves,
//! which a caller-supplied [`Translator`] then walks to produce output such
//! as HTML.

pub mod config;

mod error;
mod translator;

pub use dmark_core::{
    Attributes, DEFAULT_MAX_DEPTH, Dump, ElementNode, Identifier, IdentifierError, Node, NodeKind,
};
pub use dmark_parser::{ParserError, error as parse_error, parse};

pub use error::DmarkError;
pub use translator::{Ancestors, Concat, Path, TranslateError, Translator};

use log::{debug, info, trace};

use config::AppConfig;

/// Builder for parsing and translating DMark documents.
///
/// # Examples
///
/// ```rust
/// use dmark::{DocumentBuilder, config::AppConfig};
///
/// let builder = DocumentBuilder::new(AppConfig::default());
/// let nodes = builder.parse("#p Hello!").expect("Failed to parse");
/// assert_eq!(nodes.len(), 1);
///
/// // Or use default config
/// let builder = DocumentBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    config: AppConfig,
}

impl DocumentBuilder {
    /// Create a new document builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Parser and translator limits
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse source text into its top-level block elements.
    ///
    /// # Errors
    ///
    /// Returns [`DmarkError::Parse`] carrying the source on the first syntax
    /// error.
    pub fn parse(&self, source: &str) -> Result<Vec<Node>, DmarkError> {
        info!("Parsing document");

        let nodes = dmark_parser::Parser::new(*self.config.parser())
            .parse(source)
            .map_err(|err| DmarkError::new_parse_error(err, source))?;

        debug!(blocks = nodes.len(); "Document parsed successfully");
        trace!(nodes:% = Dump::forest(&nodes); "Parsed document");

        Ok(nodes)
    }

    /// Translate a parsed forest with the configured depth limit.
    ///
    /// # Arguments
    ///
    /// * `translator` - Handlers producing the output
    /// * `nodes` - Forest returned by [`parse`](Self::parse)
    /// * `context` - Initial context handed to the top-level nodes
    ///
    /// # Errors
    ///
    /// Returns the translator's error type; depth violations arrive as
    /// [`TranslateError::DepthExceeded`] converted into it.
    pub fn translate<T: Translator>(
        &self,
        translator: &T,
        nodes: &[Node],
        context: &T::Context,
    ) -> Result<T::Output, T::Error> {
        let max_depth = self.config.translator().max_depth();
        info!(nodes = nodes.len(), max_depth; "Translating document");

        let output = translator.translate_with_limit(nodes, context, max_depth)?;

        debug!("Document translated successfully");
        Ok(output)
    }
}
