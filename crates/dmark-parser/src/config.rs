//! Parser configuration.

use serde::Deserialize;

use dmark_core::DEFAULT_MAX_DEPTH;

/// Settings controlling a [`Parser`](crate::Parser).
///
/// Missing fields fall back to their defaults when deserialized.
///
/// ```
/// # use dmark_parser::{Parser, ParserConfig};
/// let parser = Parser::new(ParserConfig::new(1));
/// assert!(parser.parse("#p flat").is_ok());
/// assert!(parser.parse("#p %em{nested}").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Maximum element nesting depth.
    max_depth: usize,
}

impl ParserConfig {
    /// Creates a new [`ParserConfig`] with the given nesting limit.
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Returns the maximum element nesting depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_depth() {
        assert_eq!(ParserConfig::default().max_depth(), DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_deserialize_from_toml() {
        let config: ParserConfig = toml::from_str("max_depth = 8").unwrap();
        assert_eq!(config, ParserConfig::new(8));
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: ParserConfig = toml::from_str("").unwrap();
        assert_eq!(config, ParserConfig::default());
    }
}
