//! htr CSS
//!
//! Declaration extraction and inline-style translation for the htr pipeline.
//! `extract_declarations` parses a `style` attribute blob into ordered
//! `property: value` pairs (everything that is not a declaration is
//! discarded); `translate_style` turns them into a camelCase-keyed map with
//! raw string values.
//!
//! # Example
//!
//! ```
//! use htr_css::{extract_declarations, translate_style};
//!
//! let decls = extract_declarations("background-color: blue").unwrap();
//! let styles = translate_style(&decls);
//! assert_eq!(styles.get("backgroundColor").map(String::as_str), Some("blue"));
//! ```

pub mod decl;
pub mod style;

pub use decl::{extract_declarations, Declaration};
pub use style::{camel_case, translate_style, StyleMap};

/// CSS parse error with position information.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("CSS parse error at line {line}, column {column}: {message}")]
pub struct CssParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}
