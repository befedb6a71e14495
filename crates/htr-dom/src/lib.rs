//! htr DOM
//!
//! Markup parser adapter for the htr pipeline. Parses a markup string into a
//! generic node tree (`DomNode`) with lowercased tag/attribute names and
//! decoded entities, and re-serializes subtrees back to markup.
//!
//! The parser itself sits behind the `MarkupBackend` trait. Its contract has
//! a three-way outcome — a tree, an error, or neither — and `parse_markup`
//! preserves all three rather than collapsing them: a backend that reports
//! neither is a protocol violation, not a parse failure.
//!
//! # Example
//!
//! ```
//! use htr_dom::{parse_markup, DomNode};
//!
//! let dom = parse_markup("<p>Hi</p>").unwrap();
//! assert_eq!(dom.len(), 1);
//! assert!(matches!(dom[0], DomNode::Tag(_)));
//! ```

pub mod backend;
pub mod node;
pub mod serialize;

pub use backend::{MarkupBackend, ParseOutcome, ScraperBackend};
pub use node::{AttrMap, DomNode, TagNode};
pub use serialize::{inner_markup, serialize_node};

/// Markup parsing error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MarkupError {
    /// The backend rejected the input.
    #[error("HTML parse error: {0}")]
    Parse(String),

    /// The backend reported neither a tree nor an error.
    #[error("Unknown HTML parsing error: Neither DOM nor Error returned")]
    Protocol,
}

/// Parse markup into its top-level sibling nodes using the default backend.
pub fn parse_markup(markup: &str) -> Result<Vec<DomNode>, MarkupError> {
    parse_markup_with(&ScraperBackend, markup)
}

/// Parse markup with an explicit backend.
///
/// A reported tree always wins, even alongside an error (the backend
/// recovered). An error alone fails with `MarkupError::Parse`; neither is a
/// contract violation and fails with `MarkupError::Protocol`.
pub fn parse_markup_with<B: MarkupBackend>(
    backend: &B,
    markup: &str,
) -> Result<Vec<DomNode>, MarkupError> {
    let ParseOutcome { dom, error } = backend.parse(markup);
    match (dom, error) {
        (Some(dom), _) => Ok(dom),
        (None, Some(message)) => Err(MarkupError::Parse(message)),
        (None, None) => Err(MarkupError::Protocol),
    }
}
