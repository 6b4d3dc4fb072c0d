//! Error codes for the DMark parser.
//!
//! Error codes are organized by category:
//! - `D0xx` - Structural errors
//! - `D1xx` - Inline grammar errors
//! - `D2xx` - Attribute errors
//! - `D3xx` - Limit errors

use std::fmt;

/// The broad category an [`ErrorCode`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Structural,
    Inline,
    Attribute,
    Limit,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Structural => write!(f, "structural"),
            Category::Inline => write!(f, "inline"),
            Category::Attribute => write!(f, "attribute"),
            Category::Limit => write!(f, "limit"),
        }
    }
}

/// Error codes for categorizing parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Structural Errors (D0xx)
    // =========================================================================
    /// Expected character.
    ///
    /// A specific delimiter such as `#`, a space after the block name, `{`
    /// or `,` was required here.
    D001,

    /// Expected identifier.
    ///
    /// Element names and attribute keys start with an ASCII letter.
    D002,

    /// Unexpected content.
    ///
    /// A block line continued past the end of its inline content.
    D003,

    // =========================================================================
    // Inline Grammar Errors (D1xx)
    // =========================================================================
    /// Unescaped closing brace.
    ///
    /// A `}` appeared outside any inline element.
    D101,

    /// Dangling percent sign.
    ///
    /// A `%` was followed by a line break or the end of the file.
    D102,

    /// Unterminated inline element.
    ///
    /// An inline element was opened with `{` but never closed on its line.
    D103,

    // =========================================================================
    // Attribute Errors (D2xx)
    // =========================================================================
    /// Unterminated attribute value.
    ///
    /// A line break or the end of the file was reached inside an attribute
    /// value.
    D201,

    /// Invalid escape in attribute value.
    ///
    /// Only `%%`, `%,` and `%]` are valid escapes inside attribute values.
    D202,

    // =========================================================================
    // Limit Errors (D3xx)
    // =========================================================================
    /// Nesting too deep.
    ///
    /// Blocks and inline elements were nested beyond the configured maximum
    /// depth.
    D301,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "D001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::D001 => "D001",
            ErrorCode::D002 => "D002",
            ErrorCode::D003 => "D003",
            ErrorCode::D101 => "D101",
            ErrorCode::D102 => "D102",
            ErrorCode::D103 => "D103",
            ErrorCode::D201 => "D201",
            ErrorCode::D202 => "D202",
            ErrorCode::D301 => "D301",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::D001 => "expected character",
            ErrorCode::D002 => "expected identifier",
            ErrorCode::D003 => "unexpected content",
            ErrorCode::D101 => "unescaped closing brace",
            ErrorCode::D102 => "dangling percent sign",
            ErrorCode::D103 => "unterminated inline element",
            ErrorCode::D201 => "unterminated attribute value",
            ErrorCode::D202 => "invalid attribute escape",
            ErrorCode::D301 => "nesting too deep",
        }
    }

    /// Returns a suggestion for fixing the error, where one applies.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ErrorCode::D002 => {
                Some("names start with a letter, followed by letters, digits, `-` or `_`")
            }
            ErrorCode::D101 => Some("escape a literal brace as `%}`"),
            ErrorCode::D102 => Some("escape a literal percent sign as `%%`"),
            ErrorCode::D103 => Some("close the inline element with `}` on the same line"),
            ErrorCode::D201 => Some("close the attribute list with `]` on the same line"),
            ErrorCode::D202 => Some("inside attribute values only `%%`, `%,` and `%]` are escapes"),
            ErrorCode::D001 | ErrorCode::D003 | ErrorCode::D301 => None,
        }
    }

    /// Returns the grammar area the error belongs to.
    pub fn category(&self) -> Category {
        match self {
            ErrorCode::D001 | ErrorCode::D002 | ErrorCode::D003 => Category::Structural,
            ErrorCode::D101 | ErrorCode::D102 | ErrorCode::D103 => Category::Inline,
            ErrorCode::D201 | ErrorCode::D202 => Category::Attribute,
            ErrorCode::D301 => Category::Limit,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
