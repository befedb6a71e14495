//! Tree conversion.
//!
//! Depth-first walk of the generic node tree, emitting element descriptors.
//! Text is whitespace-collapsed, tags and `<style>` elements become
//! `ReactElement`s, comments produce nothing, and `<script>`/CDATA nodes are
//! deliberately omitted (script content is never forwarded to the
//! framework). The match is exhaustive, so a new node kind must be handled
//! here explicitly.

use htr_dom::DomNode;

use crate::attrs::normalize_attributes;
use crate::counter::Counter;
use crate::element::{ReactElement, ReactNode};

/// Convert a node sequence, threading one counter through the whole
/// recursion so identity keys are unique in document pre-order.
pub fn convert_tree(nodes: &[DomNode], counter: &mut Counter) -> Vec<ReactNode> {
    let mut fragment = Vec::new();

    for node in nodes {
        match node {
            DomNode::Text(data) => fragment.push(ReactNode::Text(collapse_whitespace(data))),
            DomNode::Tag(tag) | DomNode::Style(tag) => {
                let props = normalize_attributes(tag, counter);
                // The textarea content was captured into defaultValue; the
                // element itself stays childless.
                let children = if tag.name == "textarea" {
                    Vec::new()
                } else {
                    convert_tree(&tag.children, counter)
                };
                fragment.push(ReactNode::Element(ReactElement::new(
                    tag.name.clone(),
                    props,
                    children,
                )));
            }
            DomNode::Comment(_) | DomNode::Script(_) | DomNode::Cdata(_) => {}
        }
    }

    fragment
}

/// Collapse every run of space/tab/CR/LF to a single space. No trimming:
/// a leading or trailing run becomes a single leading or trailing space.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        match ch {
            ' ' | '\t' | '\r' | '\n' => {
                if !in_run {
                    out.push(' ');
                }
                in_run = true;
            }
            _ => {
                out.push(ch);
                in_run = false;
            }
        }
    }
    out
}
