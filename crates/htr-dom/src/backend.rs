//! Parser backend seam.
//!
//! The pipeline treats the markup tokenizer/parser as a black box that either
//! reports a node tree, an error, or — if misused or buggy — neither. The
//! `MarkupBackend` trait keeps that three-way outcome observable; the default
//! backend wraps `scraper` (html5ever), which lowercases tag and attribute
//! names, decodes entities, and recovers from malformed input.

use std::ops::Deref;

use ego_tree::NodeRef;
use scraper::{Html, Node};
use tracing::debug;

use crate::node::{DomNode, TagNode};

/// What a backend reported: a tree, an error, both, or neither.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub dom: Option<Vec<DomNode>>,
    pub error: Option<String>,
}

/// A markup parser producing the generic node tree.
pub trait MarkupBackend {
    fn parse(&self, markup: &str) -> ParseOutcome;
}

/// Default backend: fragment parsing via `scraper`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScraperBackend;

impl MarkupBackend for ScraperBackend {
    fn parse(&self, markup: &str) -> ParseOutcome {
        let html = Html::parse_fragment(markup);
        if !html.errors.is_empty() {
            // html5ever recovers; the tree still wins over these.
            debug!(count = html.errors.len(), "recovered markup parse errors");
        }

        // Fragment parsing hangs the parsed siblings off a synthetic <html>
        // element under the fragment root.
        let dom = html
            .tree
            .root()
            .children()
            .find(|child| matches!(child.value(), Node::Element(_)))
            .map(|root| root.children().filter_map(convert_node).collect())
            .unwrap_or_default();

        ParseOutcome {
            dom: Some(dom),
            error: None,
        }
    }
}

fn convert_node(node: NodeRef<'_, Node>) -> Option<DomNode> {
    match node.value() {
        Node::Text(text) => Some(DomNode::Text(text.deref().to_string())),
        Node::Comment(comment) => Some(DomNode::Comment(comment.deref().to_string())),
        Node::Element(element) => {
            // The HTML parser already lowercases names for HTML content;
            // enforce the invariant for foreign (SVG/MathML) names too.
            let name = element.name().to_ascii_lowercase();
            let attrs = element
                .attrs()
                .map(|(key, value)| (key.to_ascii_lowercase(), value.to_string()))
                .collect();
            let children = node.children().filter_map(convert_node).collect();
            let tag = TagNode {
                name,
                attrs,
                children,
            };
            Some(match tag.name.as_str() {
                "style" => DomNode::Style(tag),
                "script" => DomNode::Script(tag),
                _ => DomNode::Tag(tag),
            })
        }
        // Doctypes, processing instructions, and nested document/fragment
        // markers have no counterpart in the node model.
        Node::Document | Node::Fragment | Node::Doctype(_) | Node::ProcessingInstruction(_) => {
            None
        }
    }
}
