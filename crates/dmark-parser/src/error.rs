//! Error reporting for the DMark parser.
//!
//! This module provides:
//! - [`ParserError`], the single fatal error a parse can produce,
//! - [`ErrorCode`]s grouped by [`Category`] for documentation and searchability,
//! - [`Excerpt`], a rendering that points into the offending source line,
//! - `Report`, a miette adapter behind the `miette` feature.
//!
//! # Example
//!
//! ```
//! use dmark_parser::{error::ErrorCode, parse};
//!
//! let err = parse("#p %ref[url=hello").unwrap_err();
//! assert_eq!(err.code(), ErrorCode::D201);
//! assert_eq!(
//!     err.to_string(),
//!     "parse error at line 1, col 18: unexpected file end in attribute value"
//! );
//! ```

mod error_code;
mod excerpt;
mod parser_error;
#[cfg(feature = "miette")]
mod report;

pub(crate) use parser_error::Failure;

pub use error_code::{Category, ErrorCode};
pub use excerpt::Excerpt;
pub use parser_error::ParserError;
#[cfg(feature = "miette")]
pub use report::Report;
