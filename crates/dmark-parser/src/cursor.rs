//! Scanning position over DMark source text.
//!
//! The parser threads a single [`Cursor`] through every grammar function by
//! `&mut`. Look-ahead helpers here only peek; they never consume input.

use dmark_core::Identifier;
use winnow::{
    Parser as _,
    combinator::{alt, opt},
    error::{AddContext, ContextError, ErrMode, ModalResult},
    stream::{LocatingSlice, Location, Stream},
    token::take_while,
};

use crate::error::{ErrorCode, Failure};

/// Number of spaces making up one indentation level.
pub(crate) const INDENT_WIDTH: usize = 2;

pub(crate) type Cursor<'src> = LocatingSlice<&'src str>;
pub(crate) type PResult<O> = ModalResult<O, ContextError<Failure>>;

/// A 0-based line and character column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    /// Derives the line and column of byte `offset` in `source`.
    ///
    /// An offset past the end is clamped to the end.
    pub(crate) fn locate(source: &str, offset: usize) -> Self {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }

        let before = &source[..offset];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let col = before[line_start..].chars().count();

        Self { line, col }
    }
}

/// Tracks nesting depth against the configured maximum.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Depth {
    current: usize,
    max: usize,
}

impl Depth {
    pub(crate) fn root(max: usize) -> Self {
        Self { current: 0, max }
    }

    /// Enters one more level of nesting, failing at `input` past the maximum.
    pub(crate) fn descend(self, input: &Cursor<'_>) -> PResult<Self> {
        let current = self.current + 1;
        if current > self.max {
            return fail(
                input,
                ErrorCode::D301,
                format!("nesting depth exceeds the maximum of {}", self.max),
            );
        }
        Ok(Self { current, ..self })
    }
}

/// The unconsumed part of the source.
pub(crate) fn remaining<'src>(input: &Cursor<'src>) -> &'src str {
    **input
}

pub(crate) fn at_eof(input: &Cursor<'_>) -> bool {
    remaining(input).is_empty()
}

pub(crate) fn peek(input: &Cursor<'_>) -> Option<char> {
    remaining(input).chars().next()
}

/// Peeks the character after the next one.
pub(crate) fn peek_second(input: &Cursor<'_>) -> Option<char> {
    remaining(input).chars().nth(1)
}

/// Consumes `len` bytes.
pub(crate) fn skip(input: &mut Cursor<'_>, len: usize) {
    let _ = input.next_slice(len);
}

/// Returns `true` if the next line holds nothing but spaces.
pub(crate) fn at_blank_line(input: &Cursor<'_>) -> bool {
    let rest = remaining(input).trim_start_matches(' ');
    rest.is_empty() || rest.starts_with('\n')
}

/// Consumes a line holding nothing but spaces, including its line break.
pub(crate) fn blank_line(input: &mut Cursor<'_>) -> PResult<()> {
    (spaces, opt('\n')).void().parse_next(input)
}

fn spaces<'src>(input: &mut Cursor<'src>) -> PResult<&'src str> {
    take_while(0.., ' ').parse_next(input)
}

/// Returns the indentation level of the next line.
///
/// Spaces beyond a whole level are not counted.
pub(crate) fn indentation(input: &Cursor<'_>) -> usize {
    remaining(input).bytes().take_while(|b| *b == b' ').count() / INDENT_WIDTH
}

/// Returns `true` if the input starts with `#` followed by an identifier.
pub(crate) fn at_block_start(input: &Cursor<'_>) -> bool {
    peek(input) == Some('#') && peek_second(input).is_some_and(Identifier::is_start)
}

/// Consumes `expected`, or fails with `code` naming what was found.
pub(crate) fn expect_char<'src>(
    input: &mut Cursor<'src>,
    expected: char,
    code: ErrorCode,
) -> PResult<()> {
    alt((expected.void(), |input: &mut Cursor<'src>| -> PResult<()> {
        let found = describe(peek(input));
        fail(input, code, format!("expected {}, but got {found}", quote(expected)))
    }))
    .parse_next(input)
}

/// Reads an identifier.
pub(crate) fn identifier(input: &mut Cursor<'_>) -> PResult<Identifier> {
    match Identifier::read_prefix(remaining(input)) {
        Some((ident, len)) => {
            skip(input, len);
            Ok(ident)
        }
        None => fail(
            input,
            ErrorCode::D002,
            format!("expected an identifier, but got {}", describe(peek(input))),
        ),
    }
}

/// Fails at the current position.
pub(crate) fn fail<O>(input: &Cursor<'_>, code: ErrorCode, message: impl Into<String>) -> PResult<O> {
    let failure = Failure {
        code,
        message: message.into(),
        offset: input.current_token_start(),
    };
    Err(ErrMode::Cut(ContextError::new().add_context(
        input,
        &input.checkpoint(),
        failure,
    )))
}

/// Quotes a character the way it appears in error messages.
pub(crate) fn quote(ch: char) -> String {
    format!("\"{}\"", ch.escape_debug())
}

/// Describes a peeked character for error messages.
pub(crate) fn describe(ch: Option<char>) -> String {
    ch.map_or_else(|| "EOF".to_owned(), quote)
}
