//! Generic node tree produced by the markup parser adapter.
//!
//! A `DomNode` is one markup construct. The variant set is closed and every
//! consumer matches exhaustively, so adding a variant forces a decision at
//! each consumption site.

use std::collections::BTreeMap;

/// Attribute map of a tag. Keys are lowercased by the adapter;
/// insertion order carries no meaning.
pub type AttrMap = BTreeMap<String, String>;

/// A tag-shaped node: name, attributes, ordered children.
///
/// Shared by the `Tag`, `Style`, and `Script` variants — the latter two are
/// semantically restricted to text-only children by the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct TagNode {
    /// Lowercased tag name.
    pub name: String,
    pub attrs: AttrMap,
    pub children: Vec<DomNode>,
}

impl TagNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: AttrMap::new(),
            children: Vec::new(),
        }
    }
}

/// One parsed markup construct.
#[derive(Debug, Clone, PartialEq)]
pub enum DomNode {
    /// A regular element.
    Tag(TagNode),

    /// A `<style>` element (text-only children).
    Style(TagNode),

    /// A `<script>` element (text-only children).
    Script(TagNode),

    /// Decoded character data.
    Text(String),

    /// A `<!-- comment -->` (dropped during conversion).
    Comment(String),

    /// A CDATA section (text-only children). The default backend never
    /// produces this — the HTML parser turns CDATA in HTML content into
    /// bogus comments — but it is part of the node model.
    Cdata(Vec<DomNode>),
}

impl DomNode {
    /// The tag-shaped payload of a `Tag`/`Style`/`Script` node.
    pub fn as_tag(&self) -> Option<&TagNode> {
        match self {
            DomNode::Tag(tag) | DomNode::Style(tag) | DomNode::Script(tag) => Some(tag),
            DomNode::Text(_) | DomNode::Comment(_) | DomNode::Cdata(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_tag_on_tag_variants() {
        let tag = TagNode::new("div");
        assert!(DomNode::Tag(tag.clone()).as_tag().is_some());
        assert!(DomNode::Style(tag.clone()).as_tag().is_some());
        assert!(DomNode::Script(tag).as_tag().is_some());
    }

    #[test]
    fn test_as_tag_on_leaf_variants() {
        assert!(DomNode::Text("x".into()).as_tag().is_none());
        assert!(DomNode::Comment("x".into()).as_tag().is_none());
        assert!(DomNode::Cdata(Vec::new()).as_tag().is_none());
    }
}
