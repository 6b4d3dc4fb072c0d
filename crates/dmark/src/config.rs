//! Configuration types for DMark processing.
//!
//! All types implement [`serde::Deserialize`] with every field optional, so a
//! partial file (for instance TOML) only overrides what it names.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining parser and translator settings.
//! - [`ParserConfig`] - Limits applied while parsing.
//! - [`TranslatorConfig`] - Limits applied while translating.
//!
//! # Example
//!
//! ```
//! # use dmark::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.parser().max_depth(), 256);
//! assert_eq!(config.translator().max_depth(), 256);
//! ```

use serde::Deserialize;

use dmark_core::DEFAULT_MAX_DEPTH;

pub use dmark_parser::ParserConfig;

/// Top-level configuration combining parser and translator settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Parser configuration section.
    #[serde(default)]
    parser: ParserConfig,

    /// Translator configuration section.
    #[serde(default)]
    translator: TranslatorConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified sections.
    ///
    /// # Arguments
    ///
    /// * `parser` - Parser limits.
    /// * `translator` - Translator limits.
    pub fn new(parser: ParserConfig, translator: TranslatorConfig) -> Self {
        Self { parser, translator }
    }

    /// Returns the parser configuration.
    pub fn parser(&self) -> &ParserConfig {
        &self.parser
    }

    /// Returns the translator configuration.
    pub fn translator(&self) -> &TranslatorConfig {
        &self.translator
    }
}

/// Limits applied by [`DocumentBuilder::translate`](crate::DocumentBuilder::translate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Maximum number of nested elements visited.
    max_depth: usize,
}

impl TranslatorConfig {
    /// Creates a new [`TranslatorConfig`] with the given nesting limit.
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Returns the maximum number of nested elements visited.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
