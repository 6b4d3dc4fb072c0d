//! Adapter rendering [`ParserError`]s through miette.
//!
//! Enabled with the `miette` feature. Downstream tools can hand a [`Report`]
//! to any miette report handler to get a labeled source snippet.

use std::fmt;

use miette::{Diagnostic, LabeledSpan, SourceSpan};

use crate::error::ParserError;

/// A [`ParserError`] paired with the source it was raised for.
pub struct Report<'a> {
    error: &'a ParserError,
    src: &'a str,
}

impl<'a> Report<'a> {
    pub(crate) fn new(error: &'a ParserError, src: &'a str) -> Self {
        Self { error, src }
    }

    fn span(&self) -> SourceSpan {
        let len = self
            .src
            .get(self.error.offset()..)
            .and_then(|rest| rest.chars().next())
            .map_or(0, char::len_utf8);
        SourceSpan::new(self.error.offset().into(), len)
    }
}

impl fmt::Debug for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Report")
            .field("error", &self.error)
            .finish()
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error.message())
    }
}

impl std::error::Error for Report<'_> {}

impl Diagnostic for Report<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.error.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.error
            .code()
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_primary_with_span(
            Some(self.error.code().description().to_owned()),
            self.span(),
        );
        Some(Box::new(std::iter::once(label)))
    }
}
