//! htr React
//!
//! Converts inline markup into React-style element descriptors at runtime —
//! no build-time compiler step. Accepts a plain string or a template of
//! literal pieces plus interpolated values.
//!
//! ```text
//! markup → parse_markup() → DomNode tree → convert_tree() → Vec<ReactNode>
//! ```
//!
//! Attribute normalization follows the framework's conventions (`className`,
//! `htmlFor`, `defaultChecked`, `defaultValue`, camelCase inline styles) and
//! every emitted element receives a unique, document-ordered `key`.
//!
//! # Example
//!
//! ```
//! use htr_react::{convert, ReactNode};
//!
//! let nodes = convert(r#"<p class="note">Hi</p>"#).unwrap();
//! assert_eq!(nodes.len(), 1);
//! assert!(matches!(&nodes[0], ReactNode::Element(el) if el.tag == "p"));
//! ```

pub mod attrs;
pub mod convert;
pub mod counter;
pub mod element;
pub mod template;

pub use attrs::normalize_attributes;
pub use convert::convert_tree;
pub use counter::Counter;
pub use element::{PropValue, Props, ReactElement, ReactNode};
pub use htr_dom::MarkupError;
pub use template::{MarkupInput, Template};

/// Convert markup — a plain string or a `Template` — into element
/// descriptors, with a fresh counter so keys restart at zero.
pub fn convert<M: Into<MarkupInput>>(markup: M) -> Result<Vec<ReactNode>, MarkupError> {
    let mut counter = Counter::new();
    convert_with_counter(markup, &mut counter)
}

/// Convert markup with a caller-supplied counter, for key continuity across
/// multiple calls.
pub fn convert_with_counter<M: Into<MarkupInput>>(
    markup: M,
    counter: &mut Counter,
) -> Result<Vec<ReactNode>, MarkupError> {
    let markup = markup.into().into_markup();
    let dom = htr_dom::parse_markup(&markup)?;
    Ok(convert_tree(&dom, counter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn props(entries: &[(&str, PropValue)]) -> Props {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    // =========================================================================
    // Entry point
    // =========================================================================

    #[test]
    fn test_convert_plain_string() {
        let nodes = convert("<p>Hi</p>").unwrap();
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn test_convert_template() {
        let template = Template::new(["<b>", "</b>"], [7]);
        let nodes = convert(template).unwrap();
        let ReactNode::Element(element) = &nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(element.tag, "b");
        assert_eq!(element.children, vec![ReactNode::Text("7".into())]);
    }

    #[test]
    fn test_top_level_count_ignores_comments() {
        let nodes = convert("<div></div><!-- a --><span></span><!-- b -->").unwrap();
        assert_eq!(nodes.len(), 2);
    }

    #[test]
    fn test_fresh_calls_are_identical() {
        let markup = r#"<ul class="l"><li>a</li><li>b</li></ul>"#;
        assert_eq!(convert(markup).unwrap(), convert(markup).unwrap());
    }

    #[test]
    fn test_counter_continuity_across_calls() {
        let mut counter = Counter::new();
        let first = convert_with_counter("<div></div>", &mut counter).unwrap();
        let second = convert_with_counter("<div></div>", &mut counter).unwrap();
        let key = |nodes: &[ReactNode]| match &nodes[0] {
            ReactNode::Element(element) => element.key().unwrap(),
            ReactNode::Text(_) => unreachable!(),
        };
        assert_eq!(key(&first), 0);
        assert_eq!(key(&second), 1);
    }

    // =========================================================================
    // End-to-end scenario
    // =========================================================================

    #[test]
    fn test_div_with_class_style_and_child() {
        let nodes = convert(r#"<div class="c" style="color:red"><p>Hi</p></div>"#).unwrap();

        let mut styles = htr_css::StyleMap::new();
        styles.insert("color".into(), "red".into());

        let expected = vec![ReactNode::Element(ReactElement::new(
            "div",
            props(&[
                ("className", PropValue::from("c")),
                ("style", PropValue::Style(styles)),
                ("key", PropValue::Number(0)),
            ]),
            vec![ReactNode::Element(ReactElement::new(
                "p",
                props(&[("key", PropValue::Number(1))]),
                vec![ReactNode::Text("Hi".into())],
            ))],
        ))];

        assert_eq!(nodes, expected);
    }

    #[test]
    fn test_textarea_end_to_end() {
        let nodes = convert("<textarea>hello</textarea>").unwrap();
        let expected = vec![ReactNode::Element(ReactElement::new(
            "textarea",
            props(&[
                ("defaultValue", PropValue::from("hello")),
                ("key", PropValue::Number(0)),
            ]),
            Vec::new(),
        ))];
        assert_eq!(nodes, expected);
    }

    #[test]
    fn test_malformed_style_dropped_end_to_end() {
        let nodes = convert(r#"<div style="not: valid: css:::"></div>"#).unwrap();
        let ReactNode::Element(element) = &nodes[0] else {
            panic!("expected element");
        };
        assert!(!element.props.contains_key("style"));
    }

    #[test]
    fn test_event_handlers_never_forwarded() {
        let nodes = convert(r#"<button onclick="x()">Go</button>"#).unwrap();
        let ReactNode::Element(element) = &nodes[0] else {
            panic!("expected element");
        };
        assert!(element.props.keys().all(|name| !name.starts_with("on")));
    }
}
