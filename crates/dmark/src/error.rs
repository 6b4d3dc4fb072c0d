//! Error types for DMark operations.
//!
//! This module provides the main error type [`DmarkError`] which wraps the
//! failures that can occur while parsing and translating documents.

use thiserror::Error;

use dmark_parser::{ParserError, error::Excerpt};

use crate::translator::TranslateError;

/// The main error type for DMark operations.
///
/// The `Parse` variant keeps the source text alongside the error so callers
/// can render an excerpt without holding on to the input themselves.
#[derive(Debug, Error)]
pub enum DmarkError {
    #[error("{err}")]
    Parse { err: ParserError, src: String },

    #[error("translation error: {0}")]
    Translate(#[from] TranslateError),
}

impl DmarkError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParserError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }

    /// Renders a source excerpt for parse errors.
    ///
    /// ```
    /// let err = dmark::DocumentBuilder::default().parse("#p }").unwrap_err();
    /// let excerpt = err.excerpt().unwrap().to_string();
    /// assert!(excerpt.starts_with("ERROR (line 1, col 4)"));
    /// ```
    pub fn excerpt(&self) -> Option<Excerpt<'_>> {
        match self {
            Self::Parse { err, src } => Some(err.excerpt(src)),
            Self::Translate(_) => None,
        }
    }

    /// Wraps a parse error for rendering through [`miette`].
    #[cfg(feature = "miette")]
    pub fn report(&self) -> Option<dmark_parser::error::Report<'_>> {
        match self {
            Self::Parse { err, src } => Some(err.report(src)),
            Self::Translate(_) => None,
        }
    }
}
