//! Source-excerpt rendering of parse errors.

use std::fmt;

use crate::error::ParserError;

/// Number of characters shown on either side of the failing column.
const WINDOW: usize = 38;

const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// A [`ParserError`] rendered together with the offending source line.
///
/// ```text
/// ERROR (line 1, col 4): unexpected } -- try escaping it as "%}"
///
/// #p }
///    ^
/// ```
///
/// Long lines are cut to a window around the failing column, with `…`
/// marking the cut ends. Terminal colors are only emitted after
/// [`colored(true)`](Excerpt::colored).
#[derive(Debug, Clone, Copy)]
pub struct Excerpt<'a> {
    error: &'a ParserError,
    source: &'a str,
    colored: bool,
}

impl<'a> Excerpt<'a> {
    pub(crate) fn new(error: &'a ParserError, source: &'a str) -> Self {
        Self {
            error,
            source,
            colored: false,
        }
    }

    /// Enables or disables ANSI color codes.
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    fn paint(&self, style: &'static str) -> &'static str {
        if self.colored { style } else { "" }
    }

    /// Returns the windowed line text and the column of the caret within it.
    fn window(&self) -> (String, usize) {
        let line = self
            .source
            .split('\n')
            .nth(self.error.line())
            .unwrap_or_default();
        let chars: Vec<char> = line.chars().collect();
        let col = self.error.col();

        let start = col.saturating_sub(WINDOW);
        let end = (col + WINDOW + 1).min(chars.len());

        let mut excerpt: Vec<char> = chars.get(start..end).unwrap_or_default().to_vec();
        if start > 0 {
            if let Some(first) = excerpt.first_mut() {
                *first = '…';
            }
        }
        if end < chars.len() {
            if let Some(last) = excerpt.last_mut() {
                *last = '…';
            }
        }

        (excerpt.into_iter().collect(), col - start)
    }
}

impl fmt::Display for Excerpt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let red = self.paint(RED);
        let bold = self.paint(BOLD);
        let reset = self.paint(RESET);
        let (line, caret) = self.window();

        writeln!(
            f,
            "{red}{bold}ERROR{reset} (line {}, col {}): {red}{}{reset}",
            self.error.line() + 1,
            self.error.col() + 1,
            self.error.message(),
        )?;
        writeln!(f)?;
        writeln!(f, "{line}")?;
        write!(f, "{red}{:caret$}^{reset}", "")
    }
}
