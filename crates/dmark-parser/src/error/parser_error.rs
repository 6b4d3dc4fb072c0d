//! The [`ParserError`] type returned by [`parse`](crate::parse).

use thiserror::Error;
use winnow::error::{ContextError, ErrMode};

use crate::{
    cursor::Position,
    error::{ErrorCode, Excerpt},
};

/// A failure raised while scanning, before line and column are known.
///
/// Attached to winnow errors as context and converted into a [`ParserError`]
/// once at the public entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Failure {
    pub code: ErrorCode,
    pub message: String,
    /// Byte offset into the source where the failure was detected.
    pub offset: usize,
}

/// A fatal parse error.
///
/// Line and column are 0-based; they are displayed 1-based. Columns count
/// characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parse error at line {}, col {}: {}", .line + 1, .col + 1, .message)]
pub struct ParserError {
    line: usize,
    col: usize,
    offset: usize,
    code: ErrorCode,
    message: String,
}

impl ParserError {
    pub(crate) fn from_failure(source: &str, failure: Failure) -> Self {
        let Position { line, col } = Position::locate(source, failure.offset);

        Self {
            line,
            col,
            offset: failure.offset,
            code: failure.code,
            message: failure.message,
        }
    }

    /// Converts the error winnow surfaced at the top of the parse.
    ///
    /// `offset` is where the input stood when parsing stopped; it is used if
    /// the error carries no [`Failure`].
    pub(crate) fn from_modal(
        source: &str,
        err: ErrMode<ContextError<Failure>>,
        offset: usize,
    ) -> Self {
        let failure = match err {
            ErrMode::Backtrack(e) | ErrMode::Cut(e) => e.context().next().cloned(),
            ErrMode::Incomplete(_) => None,
        };

        let failure = failure.unwrap_or_else(|| Failure {
            code: ErrorCode::D003,
            message: "unexpected content".to_owned(),
            offset,
        });

        Self::from_failure(source, failure)
    }

    /// The 0-based line of the failure.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The 0-based column of the failure, in characters.
    pub fn col(&self) -> usize {
        self.col
    }

    /// The byte offset of the failure in the source.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The diagnostic code classifying the failure.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// The human-readable message, without the position prefix.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Renders the error with an excerpt of `source` pointing at the failure.
    ///
    /// `source` must be the text that produced this error.
    ///
    /// ```
    /// let source = "#p }";
    /// let err = dmark_parser::parse(source).unwrap_err();
    /// let rendered = err.excerpt(source).to_string();
    /// assert!(rendered.ends_with("#p }\n   ^"));
    /// ```
    pub fn excerpt<'a>(&'a self, source: &'a str) -> Excerpt<'a> {
        Excerpt::new(self, source)
    }

    /// Wraps the error for rendering through [`miette`].
    #[cfg(feature = "miette")]
    pub fn report<'a>(&'a self, source: &'a str) -> crate::error::Report<'a> {
        crate::error::Report::new(self, source)
    }
}

#[cfg(test)]
mod tests {
    use winnow::error::{AddContext, Needed};
    use winnow::stream::{LocatingSlice, Stream};

    use super::*;

    fn failure(offset: usize) -> Failure {
        Failure {
            code: ErrorCode::D101,
            message: "boom".to_owned(),
            offset,
        }
    }

    #[test]
    fn test_display_is_one_based() {
        let err = ParserError::from_failure("#p\n  x }", failure(7));
        assert_eq!(err.line(), 1);
        assert_eq!(err.col(), 4);
        assert_eq!(err.to_string(), "parse error at line 2, col 5: boom");
    }

    #[test]
    fn test_from_modal_uses_attached_failure() {
        let source = "#p }";
        let input = LocatingSlice::new(source);
        let err = ContextError::new().add_context(&input, &input.checkpoint(), failure(3));

        let err = ParserError::from_modal(source, ErrMode::Cut(err), 0);
        assert_eq!(err.code(), ErrorCode::D101);
        assert_eq!(err.offset(), 3);
        assert_eq!(err.col(), 3);
    }

    #[test]
    fn test_from_modal_without_context_uses_offset() {
        let err = ParserError::from_modal("abc", ErrMode::Incomplete(Needed::Unknown), 2);
        assert_eq!(err.code(), ErrorCode::D003);
        assert_eq!(err.col(), 2);
        assert_eq!(err.message(), "unexpected content");
    }
}
