//! Markup re-serialization.
//!
//! Turns a node subtree back into markup text. Used by the attribute
//! normalizer to capture a `<textarea>`'s content as its default value, in
//! serialized form: text re-escaped, attribute values quoted, void elements
//! left unclosed.

use crate::node::{DomNode, TagNode};

/// Serialize the children of a tag — its "inner markup".
pub fn inner_markup(node: &TagNode) -> String {
    let mut out = String::new();
    for child in &node.children {
        write_node(child, &mut out);
    }
    out
}

/// Serialize a single node, including the node itself.
pub fn serialize_node(node: &DomNode) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &DomNode, out: &mut String) {
    match node {
        DomNode::Tag(tag) | DomNode::Style(tag) | DomNode::Script(tag) => write_tag(tag, out),
        DomNode::Text(text) => out.push_str(&escape_text(text)),
        DomNode::Comment(data) => {
            out.push_str("<!--");
            out.push_str(data);
            out.push_str("-->");
        }
        DomNode::Cdata(children) => {
            for child in children {
                write_node(child, out);
            }
        }
    }
}

fn write_tag(tag: &TagNode, out: &mut String) {
    out.push('<');
    out.push_str(&tag.name);
    for (name, value) in &tag.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
    out.push('>');

    if is_void_element(&tag.name) {
        return;
    }

    for child in &tag.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(&tag.name);
    out.push('>');
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

/// Check if an HTML tag is a void element (self-closing, no children).
fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::AttrMap;

    fn tag(name: &str, children: Vec<DomNode>) -> TagNode {
        TagNode {
            name: name.into(),
            attrs: AttrMap::new(),
            children,
        }
    }

    #[test]
    fn test_inner_markup_text() {
        let node = tag("textarea", vec![DomNode::Text("hello".into())]);
        assert_eq!(inner_markup(&node), "hello");
    }

    #[test]
    fn test_inner_markup_escapes_text() {
        let node = tag("textarea", vec![DomNode::Text("a & <b>".into())]);
        assert_eq!(inner_markup(&node), "a &amp; &lt;b&gt;");
    }

    #[test]
    fn test_inner_markup_nested_tags() {
        let inner = tag("b", vec![DomNode::Text("x".into())]);
        let node = tag("div", vec![DomNode::Tag(inner), DomNode::Text("y".into())]);
        assert_eq!(inner_markup(&node), "<b>x</b>y");
    }

    #[test]
    fn test_serialize_attrs_sorted_and_quoted() {
        let mut node = tag("a", Vec::new());
        node.attrs.insert("href".into(), "/x?a=1&b=2".into());
        node.attrs.insert("title".into(), "say \"hi\"".into());
        assert_eq!(
            serialize_node(&DomNode::Tag(node)),
            r#"<a href="/x?a=1&amp;b=2" title="say &quot;hi&quot;"></a>"#
        );
    }

    #[test]
    fn test_serialize_void_element() {
        let mut node = tag("br", Vec::new());
        assert_eq!(serialize_node(&DomNode::Tag(node.clone())), "<br>");
        node.name = "img".into();
        assert_eq!(serialize_node(&DomNode::Tag(node)), "<img>");
    }

    #[test]
    fn test_serialize_comment() {
        assert_eq!(serialize_node(&DomNode::Comment(" c ".into())), "<!-- c -->");
    }
}
