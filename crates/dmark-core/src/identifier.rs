//! Validated names for elements and attribute keys.
//!
//! This module provides the [`Identifier`] type. An identifier starts with an
//! ASCII letter and continues with ASCII letters, digits, `-` or `_`. The same
//! grammar applies to block names, inline element names and attribute keys.

use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

use thiserror::Error;

/// Reasons a string is not a valid [`Identifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("identifier must not be empty")]
    Empty,

    #[error("identifier must start with a letter, not {0:?}")]
    InvalidStart(char),

    #[error("invalid character {ch:?} at index {index} in identifier")]
    InvalidChar { ch: char, index: usize },
}

/// A validated element name or attribute key.
///
/// # Examples
///
/// ```
/// use dmark_core::Identifier;
///
/// let name = Identifier::new("IntroPara").unwrap();
/// assert_eq!(name, "IntroPara");
///
/// assert!(Identifier::new("-intro").is_err());
/// assert!(Identifier::new("4ever").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Creates an identifier, checking it against the identifier grammar.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError`] describing the first offending character.
    pub fn new(name: impl Into<String>) -> Result<Self, IdentifierError> {
        let name = name.into();
        let mut chars = name.chars();

        match chars.next() {
            None => return Err(IdentifierError::Empty),
            Some(first) if !Self::is_start(first) => {
                return Err(IdentifierError::InvalidStart(first));
            }
            Some(_) => {}
        }

        if let Some((index, ch)) = name
            .char_indices()
            .skip(1)
            .find(|(_, ch)| !Self::is_continue(*ch))
        {
            return Err(IdentifierError::InvalidChar { ch, index });
        }

        Ok(Self(name))
    }

    /// Reads the longest identifier at the start of `input`.
    ///
    /// Returns the identifier together with its length in bytes, or `None`
    /// when `input` does not start with a letter.
    ///
    /// ```
    /// use dmark_core::Identifier;
    ///
    /// let (ident, len) = Identifier::read_prefix("em{ho}").unwrap();
    /// assert_eq!(ident, "em");
    /// assert_eq!(len, 2);
    /// assert!(Identifier::read_prefix("{ho}").is_none());
    /// ```
    pub fn read_prefix(input: &str) -> Option<(Self, usize)> {
        if !input.chars().next().is_some_and(Self::is_start) {
            return None;
        }

        let len = input
            .char_indices()
            .skip(1)
            .find(|(_, ch)| !Self::is_continue(*ch))
            .map_or(input.len(), |(index, _)| index);

        Some((Self(input[..len].to_owned()), len))
    }

    /// Returns `true` if `ch` may start an identifier.
    pub fn is_start(ch: char) -> bool {
        ch.is_ascii_alphabetic()
    }

    /// Returns `true` if `ch` may follow the first character of an identifier.
    pub fn is_continue(ch: char) -> bool {
        ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier, returning the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for Identifier {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = IdentifierError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Identifier {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
